use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Highest score any component reports; projections clamp here.
pub const MAX_SCORE: i32 = 100;

/// Ordinal maturity labels, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaturityLevel {
    Foundational,
    Developing,
    Established,
    Advanced,
    #[serde(rename = "Market-Leading")]
    MarketLeading,
}

impl MaturityLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Foundational,
            Self::Developing,
            Self::Established,
            Self::Advanced,
            Self::MarketLeading,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Foundational => "Foundational",
            Self::Developing => "Developing",
            Self::Established => "Established",
            Self::Advanced => "Advanced",
            Self::MarketLeading => "Market-Leading",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed scale of values an answer option can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum AnswerValue {
    Absent,
    Basic,
    Defined,
    Advanced,
    WorldClass,
}

impl AnswerValue {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Absent,
            Self::Basic,
            Self::Defined,
            Self::Advanced,
            Self::WorldClass,
        ]
    }

    pub const fn score(self) -> i32 {
        match self {
            Self::Absent => 0,
            Self::Basic => 25,
            Self::Defined => 50,
            Self::Advanced => 75,
            Self::WorldClass => 100,
        }
    }

    pub fn from_score(score: i32) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|value| value.score() == score)
    }
}

impl From<AnswerValue> for i32 {
    fn from(value: AnswerValue) -> Self {
        value.score()
    }
}

impl TryFrom<i32> for AnswerValue {
    type Error = String;

    fn try_from(score: i32) -> Result<Self, Self::Error> {
        Self::from_score(score)
            .ok_or_else(|| format!("{score} is not on the 0/25/50/75/100 answer scale"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: AnswerValue,
    pub label: String,
}

/// Survey question with its category assignment and answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub category: String,
    pub question: String,
    pub description: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option_for(&self, value: AnswerValue) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// Answers keyed by question id. Unanswered questions are simply absent and
/// values are kept exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<String, i32>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: i32) -> Option<i32> {
        self.0.insert(question_id.into(), value)
    }

    pub fn with(mut self, question_id: impl Into<String>, value: i32) -> Self {
        self.insert(question_id, value);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<i32> {
        self.0.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.0.iter().map(|(id, value)| (id.as_str(), *value))
    }
}

impl From<BTreeMap<String, i32>> for ResponseSet {
    fn from(value: BTreeMap<String, i32>) -> Self {
        Self(value)
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = (K, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(id, value)| (id.into(), value)).collect())
    }
}

impl IntoIterator for ResponseSet {
    type Item = (String, i32);
    type IntoIter = btree_map::IntoIter<String, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub name: String,
    pub score: i32,
    pub level: MaturityLevel,
    pub percentage: i32,
}

/// Scores and levels computed from a single response set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub overall_score: i32,
    pub normalized_score: i32,
    pub maturity_level: MaturityLevel,
    pub categories: Vec<CategoryScore>,
    pub timestamp: DateTime<Utc>,
    pub responses: ResponseSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_value_rejects_values_off_the_scale() {
        assert_eq!(AnswerValue::try_from(75), Ok(AnswerValue::Advanced));
        assert!(AnswerValue::try_from(60).is_err());
        assert!(serde_json::from_str::<AnswerValue>("30").is_err());
        assert_eq!(
            serde_json::to_string(&AnswerValue::WorldClass).expect("serializes"),
            "100"
        );
    }

    #[test]
    fn market_leading_uses_hyphenated_label() {
        let json = serde_json::to_string(&MaturityLevel::MarketLeading).expect("serializes");
        assert_eq!(json, "\"Market-Leading\"");
        assert_eq!(MaturityLevel::MarketLeading.to_string(), "Market-Leading");
    }

    #[test]
    fn response_set_serializes_as_flat_map() {
        let responses = ResponseSet::new().with("strategy", 50).with("brand", 120);
        let json = serde_json::to_value(&responses).expect("serializes");
        assert_eq!(json, serde_json::json!({ "brand": 120, "strategy": 50 }));
    }
}
