use super::questionnaire::Questionnaire;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named capability dimension and the questions that feed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub question_ids: Vec<String>,
}

impl Category {
    pub fn new<I, S>(name: impl Into<String>, question_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            question_ids: question_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Category membership in declaration order; report ordering follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMap {
    categories: Vec<Category>,
}

impl CategoryMap {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            Category::new("Demand Generation", ["demand_gen", "operations"]),
            Category::new("Technology Stack", ["tech_stack"]),
            Category::new(
                "Customer Understanding",
                ["customer_understanding", "sales_alignment"],
            ),
            Category::new("Content & Brand", ["content", "brand"]),
            Category::new("Team Capability", ["team_capability"]),
            Category::new("Strategic Focus", ["strategy", "measurement"]),
        ])
    }

    /// Groups a question bank by each question's category field. Categories
    /// named in `order` come first in that order; any others follow in the
    /// order the bank first mentions them.
    pub fn from_questionnaire(questionnaire: &Questionnaire, order: &[&str]) -> Self {
        let mut names: Vec<&str> = order.to_vec();
        for name in questionnaire.category_names() {
            if !names.contains(&name) {
                names.push(name);
            }
        }

        let categories = names
            .into_iter()
            .map(|name| {
                let members = questionnaire
                    .questions()
                    .iter()
                    .filter(|question| question.category == name)
                    .map(|question| question.id.clone());
                Category::new(name, members)
            })
            .filter(|category| !category.question_ids.is_empty())
            .collect();

        Self::new(categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn category_for(&self, question_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.question_ids.iter().any(|id| id == question_id))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Verifies every question belongs to exactly one category and that no
    /// category is empty.
    pub fn check_consistency(&self, questionnaire: &Questionnaire) -> Result<(), CategoryMapError> {
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for category in &self.categories {
            if category.question_ids.is_empty() {
                return Err(CategoryMapError::EmptyCategory(category.name.clone()));
            }

            for id in &category.question_ids {
                if questionnaire.question(id).is_none() {
                    return Err(CategoryMapError::UnknownQuestion {
                        category: category.name.clone(),
                        question_id: id.clone(),
                    });
                }

                if let Some(first) = owners.insert(id.as_str(), category.name.as_str()) {
                    return Err(CategoryMapError::DuplicateAssignment {
                        question_id: id.clone(),
                        first: first.to_string(),
                        second: category.name.clone(),
                    });
                }
            }
        }

        if let Some(question) = questionnaire
            .questions()
            .iter()
            .find(|question| !owners.contains_key(question.id.as_str()))
        {
            return Err(CategoryMapError::UnassignedQuestion(question.id.clone()));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryMapError {
    #[error("category '{0}' has no questions")]
    EmptyCategory(String),
    #[error("question '{0}' is not assigned to any category")]
    UnassignedQuestion(String),
    #[error("question '{question_id}' is assigned to both '{first}' and '{second}'")]
    DuplicateAssignment {
        question_id: String,
        first: String,
        second: String,
    },
    #[error("category '{category}' references unknown question '{question_id}'")]
    UnknownQuestion {
        category: String,
        question_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_map_covers_standard_bank() {
        let map = CategoryMap::standard();
        map.check_consistency(&Questionnaire::standard())
            .expect("standard map is consistent");
        assert_eq!(map.len(), 6);
        assert_eq!(
            map.category_for("operations").map(|c| c.name.as_str()),
            Some("Demand Generation")
        );
    }

    #[test]
    fn derived_map_matches_standard_when_ordered_the_same() {
        let standard = CategoryMap::standard();
        let order: Vec<&str> = standard
            .categories()
            .iter()
            .map(|category| category.name.as_str())
            .collect();

        let derived = CategoryMap::from_questionnaire(&Questionnaire::standard(), &order);
        assert_eq!(derived, standard);
    }

    #[test]
    fn consistency_check_reports_duplicates_and_gaps() {
        let questionnaire = Questionnaire::standard();

        let duplicated = CategoryMap::new(vec![
            Category::new("A", ["strategy"]),
            Category::new("B", ["strategy"]),
        ]);
        assert!(matches!(
            duplicated.check_consistency(&questionnaire),
            Err(CategoryMapError::DuplicateAssignment { .. })
        ));

        let partial = CategoryMap::new(vec![Category::new("A", ["strategy"])]);
        assert!(matches!(
            partial.check_consistency(&questionnaire),
            Err(CategoryMapError::UnassignedQuestion(_))
        ));

        let empty = CategoryMap::new(vec![Category::new("A", Vec::<String>::new())]);
        assert_eq!(
            empty.check_consistency(&questionnaire),
            Err(CategoryMapError::EmptyCategory("A".to_string()))
        );
    }
}
