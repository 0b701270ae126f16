use super::super::categories::CategoryMap;
use super::super::domain::{CategoryScore, ResponseSet};
use super::{classify, round_half_up};

/// One score per category, in category map order. Unanswered member
/// questions count as zero; the level is taken from the unrounded mean.
pub fn category_scores(responses: &ResponseSet, categories: &CategoryMap) -> Vec<CategoryScore> {
    categories
        .categories()
        .iter()
        .map(|category| {
            let total: f64 = category
                .question_ids
                .iter()
                .map(|id| f64::from(responses.get(id).unwrap_or(0)))
                .sum();
            let average = if category.question_ids.is_empty() {
                0.0
            } else {
                total / category.question_ids.len() as f64
            };
            let score = round_half_up(average);

            CategoryScore {
                name: category.name.clone(),
                score,
                level: classify(average),
                percentage: score,
            }
        })
        .collect()
}

/// Flat mean over every recorded answer, so categories with more questions
/// carry more weight. An empty response set scores zero.
pub fn overall_score(responses: &ResponseSet) -> i32 {
    if responses.is_empty() {
        return 0;
    }

    let total: f64 = responses.values().map(f64::from).sum();
    round_half_up(total / responses.len() as f64)
}
