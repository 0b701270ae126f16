//! Opt-in strict checks for callers that want a closed input contract.
//!
//! The scoring engine itself never rejects input; this layer only reports.

use super::domain::ResponseSet;
use super::questionnaire::Questionnaire;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    UnknownQuestion { question_id: String },
    OffScale { question_id: String, value: i32 },
    Missing { question_id: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::UnknownQuestion { question_id } => {
                write!(f, "'{question_id}' is not a known question")
            }
            ValidationIssue::OffScale { question_id, value } => {
                write!(f, "'{question_id}' answered with {value}, which no option offers")
            }
            ValidationIssue::Missing { question_id } => {
                write!(f, "'{question_id}' has not been answered")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("response set failed validation: {}", summarize(.issues))]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

fn summarize(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub struct ResponseValidator<'a> {
    questionnaire: &'a Questionnaire,
    require_complete: bool,
}

impl<'a> ResponseValidator<'a> {
    pub fn new(questionnaire: &'a Questionnaire) -> Self {
        Self {
            questionnaire,
            require_complete: false,
        }
    }

    pub fn require_complete(mut self, required: bool) -> Self {
        self.require_complete = required;
        self
    }

    /// Collects every issue rather than stopping at the first.
    pub fn validate(&self, responses: &ResponseSet) -> Result<(), ValidationReport> {
        let mut issues = Vec::new();

        for (question_id, value) in responses.iter() {
            match self.questionnaire.question(question_id) {
                None => issues.push(ValidationIssue::UnknownQuestion {
                    question_id: question_id.to_string(),
                }),
                Some(question)
                    if !question
                        .options
                        .iter()
                        .any(|option| option.value.score() == value) =>
                {
                    issues.push(ValidationIssue::OffScale {
                        question_id: question_id.to_string(),
                        value,
                    })
                }
                Some(_) => {}
            }
        }

        if self.require_complete {
            issues.extend(
                self.questionnaire
                    .questions()
                    .iter()
                    .filter(|question| !responses.contains(&question.id))
                    .map(|question| ValidationIssue::Missing {
                        question_id: question.id.clone(),
                    }),
            );
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport { issues })
        }
    }
}
