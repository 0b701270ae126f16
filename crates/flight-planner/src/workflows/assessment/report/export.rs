use super::FlightPlan;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("flight plan JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write flight plan CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush flight plan export: {0}")]
    Io(#[from] std::io::Error),
    #[error("flight plan CSV was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Archived form of a flight plan: every field plus the export time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPlanDocument {
    #[serde(flatten)]
    pub plan: FlightPlan,
    pub exported_at: DateTime<Utc>,
}

impl FlightPlanDocument {
    pub fn new(plan: FlightPlan, exported_at: DateTime<Utc>) -> Self {
        Self { plan, exported_at }
    }

    pub fn from_json(raw: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(raw)?)
    }
}

pub fn to_json(plan: &FlightPlan, exported_at: DateTime<Utc>) -> Result<String, ExportError> {
    let document = FlightPlanDocument::new(plan.clone(), exported_at);
    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn to_csv(plan: &FlightPlan, exported_on: NaiveDate) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(plan, exported_on, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Writes the flattened tabular view. Every cell is quoted and sections are
/// separated by a single blank cell.
pub fn write_csv<W: Write>(
    plan: &FlightPlan,
    exported_on: NaiveDate,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    for row in tabular_rows(plan, exported_on) {
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn tabular_rows(plan: &FlightPlan, exported_on: NaiveDate) -> Vec<Vec<String>> {
    let assessment = &plan.assessment;
    let trajectory = &plan.trajectory;
    let gaps = &plan.gap_analysis;

    let mut rows = vec![
        row(["Marketing Flight Plan Assessment"]),
        vec!["Exported:".to_string(), exported_on.format("%Y-%m-%d").to_string()],
        blank(),
        vec!["Overall Score".to_string(), assessment.overall_score.to_string()],
        vec![
            "Maturity Level".to_string(),
            assessment.maturity_level.label().to_string(),
        ],
        blank(),
        row(["Category Scores"]),
        row(["Category", "Score", "Level", "Percentage"]),
    ];

    rows.extend(assessment.categories.iter().map(|category| {
        vec![
            category.name.clone(),
            category.score.to_string(),
            category.level.label().to_string(),
            format!("{}%", category.percentage),
        ]
    }));

    rows.push(blank());
    rows.push(row(["Trajectory Projections"]));
    rows.extend(
        trajectory
            .horizons()
            .into_iter()
            .map(|(months, score, _)| vec![format!("{months} Months"), score.to_string()]),
    );

    rows.push(blank());
    rows.push(row(["Gap Analysis"]));
    rows.push(vec![
        "vs Industry Benchmark".to_string(),
        gaps.vs_industry_benchmark.to_string(),
    ]);
    rows.push(vec![
        "vs Market Leaders".to_string(),
        gaps.vs_market_leaders.to_string(),
    ]);

    rows.push(blank());
    rows.push(row(["Quick Wins"]));
    rows.push(row([
        "Title",
        "Category",
        "Effort",
        "Timeframe",
        "Score Improvement",
    ]));
    rows.extend(plan.quick_wins.iter().map(|win| {
        vec![
            win.title.clone(),
            win.category.clone(),
            win.effort.label().to_string(),
            win.timeframe.clone(),
            win.score_improvement.to_string(),
        ]
    }));

    rows
}

fn row<const N: usize>(cells: [&str; N]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}

fn blank() -> Vec<String> {
    vec![String::new()]
}
