use super::domain::CategoryScore;
use serde::{Deserialize, Serialize};

/// Number of weakest categories the recommender looks at.
pub const DEFAULT_QUICK_WIN_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    Quick,
    Medium,
    Significant,
}

impl Impact {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quick => "Quick",
            Self::Medium => "Medium",
            Self::Significant => "Significant",
        }
    }
}

/// Remediation action tied to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickWin {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub effort: Effort,
    pub impact: Impact,
    pub timeframe: String,
    pub score_improvement: u8,
    pub priority: u8,
}

/// Fixed catalog holding at most one action per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickWinCatalog {
    entries: Vec<QuickWin>,
}

impl QuickWinCatalog {
    pub fn new(entries: Vec<QuickWin>) -> Self {
        Self { entries }
    }

    pub fn standard() -> Self {
        Self::new(standard_entries())
    }

    pub fn entries(&self) -> &[QuickWin] {
        &self.entries
    }

    pub fn entry_for(&self, category: &str) -> Option<&QuickWin> {
        self.entries.iter().find(|entry| entry.category == category)
    }

    /// Catalog actions for the `limit` lowest-scoring categories, weakest
    /// first. Ties keep input order. Categories without a catalog entry are
    /// skipped, so fewer than `limit` actions may come back.
    pub fn recommend(&self, categories: &[CategoryScore], limit: usize) -> Vec<QuickWin> {
        let mut ranked: Vec<&CategoryScore> = categories.iter().collect();
        ranked.sort_by_key(|category| category.score);

        ranked
            .into_iter()
            .take(limit)
            .filter_map(|category| self.entry_for(&category.name).cloned())
            .collect()
    }
}

fn entry(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    effort: Effort,
    timeframe: &str,
    score_improvement: u8,
) -> QuickWin {
    QuickWin {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        effort,
        impact: Impact::Quick,
        timeframe: timeframe.to_string(),
        score_improvement,
        priority: 1,
    }
}

fn standard_entries() -> Vec<QuickWin> {
    vec![
        entry(
            "dg-1",
            "Implement Lead Scoring Model",
            "Set up basic lead scoring to prioritize high-value prospects",
            "Demand Generation",
            Effort::Low,
            "3 weeks",
            8,
        ),
        entry(
            "ts-1",
            "Integrate CRM with Email Platform",
            "Connect your CRM and email marketing to eliminate manual data entry",
            "Technology Stack",
            Effort::Low,
            "2 weeks",
            7,
        ),
        entry(
            "cu-1",
            "Establish Customer Feedback Loop",
            "Create monthly feedback sessions with top customers",
            "Customer Understanding",
            Effort::Low,
            "1 week",
            6,
        ),
        entry(
            "cb-1",
            "Create Content Calendar Template",
            "Document quarterly content themes aligned with buyer journey",
            "Content & Brand",
            Effort::Low,
            "2 weeks",
            5,
        ),
        entry(
            "tc-1",
            "Define Role Competencies",
            "Create skills matrix for marketing team roles",
            "Team Capability",
            Effort::Medium,
            "3 weeks",
            4,
        ),
        entry(
            "sf-1",
            "Document Marketing Strategy",
            "Create 1-page strategic brief with goals, targets, metrics",
            "Strategic Focus",
            Effort::Medium,
            "1 week",
            6,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::domain::MaturityLevel;

    fn score(name: &str, value: i32) -> CategoryScore {
        CategoryScore {
            name: name.to_string(),
            score: value,
            level: MaturityLevel::from_score(value),
            percentage: value,
        }
    }

    #[test]
    fn picks_three_weakest_categories() {
        let categories = vec![
            score("Demand Generation", 60),
            score("Technology Stack", 25),
            score("Customer Understanding", 75),
            score("Content & Brand", 10),
            score("Team Capability", 50),
            score("Strategic Focus", 90),
        ];

        let wins = QuickWinCatalog::standard().recommend(&categories, DEFAULT_QUICK_WIN_LIMIT);

        let picked: Vec<&str> = wins.iter().map(|win| win.category.as_str()).collect();
        assert_eq!(
            picked,
            vec!["Content & Brand", "Technology Stack", "Team Capability"]
        );
        assert_eq!(wins[0].id, "cb-1");
        assert_eq!(categories[0].name, "Demand Generation", "input left untouched");
    }

    #[test]
    fn ties_keep_declaration_order() {
        let categories = vec![
            score("Strategic Focus", 50),
            score("Demand Generation", 50),
            score("Team Capability", 50),
            score("Technology Stack", 50),
        ];

        let wins = QuickWinCatalog::standard().recommend(&categories, DEFAULT_QUICK_WIN_LIMIT);
        let ids: Vec<&str> = wins.iter().map(|win| win.id.as_str()).collect();
        assert_eq!(ids, vec!["sf-1", "dg-1", "tc-1"]);
    }

    #[test]
    fn unknown_categories_are_skipped_silently() {
        let categories = vec![
            score("Partnerships", 5),
            score("Technology Stack", 30),
            score("Strategic Focus", 40),
            score("Demand Generation", 45),
        ];

        let wins = QuickWinCatalog::standard().recommend(&categories, DEFAULT_QUICK_WIN_LIMIT);
        let ids: Vec<&str> = wins.iter().map(|win| win.id.as_str()).collect();
        assert_eq!(ids, vec!["ts-1", "sf-1"]);
    }

    #[test]
    fn fewer_categories_than_limit() {
        let wins = QuickWinCatalog::standard()
            .recommend(&[score("Team Capability", 0)], DEFAULT_QUICK_WIN_LIMIT);
        assert_eq!(wins.len(), 1);
        assert_eq!(wins[0].effort, Effort::Medium);
        assert!(QuickWinCatalog::standard()
            .recommend(&[], DEFAULT_QUICK_WIN_LIMIT)
            .is_empty());
    }
}
