use crate::infra::load_responses;
use chrono::Utc;
use clap::{Args, ValueEnum};
use flight_planner::config::AppConfig;
use flight_planner::error::AppError;
use flight_planner::workflows::assessment::report::{to_csv, to_json};
use flight_planner::workflows::assessment::{
    render_text, EngineConfig, FlightPlan, Questionnaire, ResponseSet, ResponseValidator,
    ScoringEngine, MAX_SCORE,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file mapping question ids to answer values
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Reject unknown questions, off-scale answers, and unanswered questions
    #[arg(long)]
    pub(crate) strict: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Value given to every question
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(i32).range(0..=MAX_SCORE as i64))]
    pub(crate) score: i32,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        responses,
        format,
        strict,
    } = args;

    let responses = load_responses(&responses)?;
    let questionnaire = Questionnaire::standard();
    if strict {
        ResponseValidator::new(&questionnaire)
            .require_complete(true)
            .validate(&responses)?;
    }

    let plan = configured_engine()?.flight_plan(&responses);
    println!("{}", render(&plan, format)?);
    Ok(())
}

pub(crate) fn run_questions() -> Result<(), AppError> {
    let questionnaire = Questionnaire::standard();
    println!("Marketing maturity questionnaire");
    for (index, question) in questionnaire.questions().iter().enumerate() {
        println!(
            "\n{}. [{}] {} ({})",
            index + 1,
            question.category,
            question.question,
            question.id
        );
        println!("   {}", question.description);
        for option in &question.options {
            println!("   {:>3}  {}", option.value.score(), option.label);
        }
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let responses = uniform_responses(&Questionnaire::standard(), args.score);
    let plan = configured_engine()?.flight_plan(&responses);
    println!("{}", render(&plan, args.format)?);
    Ok(())
}

fn configured_engine() -> Result<ScoringEngine, AppError> {
    let config = AppConfig::load()?;
    Ok(ScoringEngine::new(EngineConfig::with_parameters(
        config.scoring,
    )))
}

fn uniform_responses(questionnaire: &Questionnaire, score: i32) -> ResponseSet {
    questionnaire
        .questions()
        .iter()
        .map(|question| (question.id.clone(), score))
        .collect()
}

pub(crate) fn render(plan: &FlightPlan, format: OutputFormat) -> Result<String, AppError> {
    let now = Utc::now();
    Ok(match format {
        OutputFormat::Text => render_text(plan),
        OutputFormat::Json => to_json(plan, now)?,
        OutputFormat::Csv => to_csv(plan, now.date_naive())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_demo_answers_every_question() {
        let questionnaire = Questionnaire::standard();
        let responses = uniform_responses(&questionnaire, 75);
        assert_eq!(responses.len(), questionnaire.len());
        assert!(responses.values().all(|value| value == 75));
    }

    #[test]
    fn renders_each_format() {
        let plan = ScoringEngine::standard().flight_plan(&ResponseSet::new().with("brand", 100));

        let text = render(&plan, OutputFormat::Text).expect("text renders");
        assert!(text.starts_with("Marketing flight plan"));

        let json = render(&plan, OutputFormat::Json).expect("json renders");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["assessment"]["overall_score"], 100);

        let csv = render(&plan, OutputFormat::Csv).expect("csv renders");
        assert!(csv.starts_with("\"Marketing Flight Plan Assessment\""));
    }
}
