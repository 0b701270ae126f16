use super::FlightPlan;

/// Plain-text summary for terminals.
pub fn render_text(plan: &FlightPlan) -> String {
    let assessment = &plan.assessment;
    let mut lines = vec![
        "Marketing flight plan".to_string(),
        format!(
            "Overall score: {}/100 ({})",
            assessment.overall_score, assessment.maturity_level
        ),
        format!(
            "Assessed at: {}",
            assessment.timestamp.format("%Y-%m-%d %H:%M UTC")
        ),
        String::new(),
        "Category scores".to_string(),
    ];
    lines.extend(assessment.categories.iter().map(|category| {
        format!(
            "- {:<24} {:>3}  {}",
            category.name, category.score, category.level
        )
    }));

    lines.push(String::new());
    lines.push(format!(
        "Trajectory ({} pts/year)",
        plan.trajectory.annual_velocity
    ));
    lines.extend(
        plan.trajectory
            .horizons()
            .into_iter()
            .map(|(months, score, level)| format!("- {months:>2} months: {score} ({level})")),
    );

    let gaps = &plan.gap_analysis;
    lines.push(String::new());
    lines.push("Gap analysis".to_string());
    lines.push(format!(
        "- Industry benchmark ({}): {} pts, {}",
        gaps.benchmark_target,
        gaps.vs_industry_benchmark,
        describe_months(gaps.months_to_close_benchmark)
    ));
    lines.push(format!(
        "- Market leaders ({}): {} pts, {}",
        gaps.market_leader_target,
        gaps.vs_market_leaders,
        describe_months(gaps.months_to_close_market_leaders)
    ));

    lines.push(String::new());
    if plan.quick_wins.is_empty() {
        lines.push("Quick wins: none".to_string());
    } else {
        lines.push("Quick wins".to_string());
        lines.extend(plan.quick_wins.iter().map(|win| {
            format!(
                "- {} [{}] {} effort, {} impact, {}, +{} pts",
                win.title,
                win.category,
                win.effort.label(),
                win.impact.label(),
                win.timeframe,
                win.score_improvement
            )
        }));
    }

    lines.push(String::new());
    lines.push("Roadmap".to_string());
    for phase in plan.roadmap.phases() {
        lines.push(format!(
            "{} ({}): {}",
            phase.phase, phase.duration, phase.focus
        ));
        lines.extend(
            phase
                .initiatives
                .iter()
                .map(|initiative| format!("  - {initiative}")),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn describe_months(months: Option<u32>) -> String {
    match months {
        Some(0) => "already reached".to_string(),
        Some(months) => format!("~{months} months to close"),
        None => "not reachable at current velocity".to_string(),
    }
}
