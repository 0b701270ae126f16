use super::common::*;
use crate::workflows::assessment::{
    EngineConfig, MaturityLevel, ResponseSet, ScoringEngine, ScoringParameters,
};

#[test]
fn midpoint_answers_produce_established_flight_plan() {
    let engine = ScoringEngine::standard();

    let plan = engine.flight_plan_at(&uniform_responses(50), assessed_at());

    assert_eq!(plan.assessment.overall_score, 50);
    assert_eq!(plan.assessment.normalized_score, 50);
    assert_eq!(plan.assessment.maturity_level, MaturityLevel::Established);
    assert_eq!(plan.assessment.responses.len(), 10);

    let trajectory = &plan.trajectory;
    assert_eq!(
        (trajectory.months_6, trajectory.months_12, trajectory.months_24),
        (54, 59, 67)
    );
    assert_eq!(
        (
            trajectory.maturity_levels.months_6,
            trajectory.maturity_levels.months_12,
            trajectory.maturity_levels.months_24,
        ),
        (
            MaturityLevel::Established,
            MaturityLevel::Established,
            MaturityLevel::Advanced,
        )
    );

    let gaps = &plan.gap_analysis;
    assert_eq!(gaps.vs_industry_benchmark, 20);
    assert_eq!(gaps.months_to_close_benchmark, Some(29));
    assert_eq!(gaps.vs_market_leaders, 32);
    assert_eq!(gaps.months_to_close_market_leaders, Some(46));

    assert_eq!(plan.quick_wins.len(), 3);
    let ids: Vec<&str> = plan.quick_wins.iter().map(|win| win.id.as_str()).collect();
    assert_eq!(ids, vec!["dg-1", "ts-1", "cu-1"], "ties keep category order");
}

#[test]
fn categories_follow_category_map_order() {
    let engine = ScoringEngine::standard();
    let responses = uniform_responses(100)
        .with("tech_stack", 0)
        .with("team_capability", 25);

    let assessment = engine.assess_at(&responses, assessed_at());

    let names: Vec<&str> = assessment
        .categories
        .iter()
        .map(|category| category.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Demand Generation",
            "Technology Stack",
            "Customer Understanding",
            "Content & Brand",
            "Team Capability",
            "Strategic Focus",
        ]
    );
    assert_eq!(assessment.categories[1].score, 0);
    assert_eq!(assessment.categories[4].level, MaturityLevel::Developing);
    assert_eq!(assessment.overall_score, 83);
}

#[test]
fn quick_wins_target_weakest_categories() {
    let engine = ScoringEngine::standard();
    let responses = uniform_responses(75)
        .with("strategy", 0)
        .with("measurement", 25)
        .with("brand", 25)
        .with("team_capability", 50);

    let plan = engine.flight_plan_at(&responses, assessed_at());

    let picked: Vec<(&str, &str)> = plan
        .quick_wins
        .iter()
        .map(|win| (win.category.as_str(), win.id.as_str()))
        .collect();
    assert_eq!(
        picked,
        vec![
            ("Strategic Focus", "sf-1"),
            ("Content & Brand", "cb-1"),
            ("Team Capability", "tc-1"),
        ]
    );
}

#[test]
fn empty_responses_are_degenerate_not_errors() {
    let engine = ScoringEngine::standard();

    let plan = engine.flight_plan_at(&ResponseSet::new(), assessed_at());

    assert_eq!(plan.assessment.overall_score, 0);
    assert_eq!(plan.assessment.maturity_level, MaturityLevel::Foundational);
    assert!(plan
        .assessment
        .categories
        .iter()
        .all(|category| category.score == 0));
    assert_eq!(plan.gap_analysis.vs_industry_benchmark, 70);
    assert_eq!(plan.quick_wins.len(), 3);
}

#[test]
fn repeated_assessments_differ_only_in_timestamp() {
    let engine = ScoringEngine::standard();
    let responses = uniform_responses(25).with("content", 100);

    let first = engine.flight_plan(&responses);
    let second = engine.flight_plan(&responses);

    assert_eq!(first.assessment.overall_score, second.assessment.overall_score);
    assert_eq!(first.assessment.categories, second.assessment.categories);
    assert_eq!(first.trajectory, second.trajectory);
    assert_eq!(first.gap_analysis, second.gap_analysis);
    assert_eq!(first.quick_wins, second.quick_wins);

    let pinned = engine.flight_plan_at(&responses, assessed_at());
    assert_eq!(pinned, engine.flight_plan_at(&responses, assessed_at()));
}

#[test]
fn roadmap_ignores_starting_score() {
    let engine = ScoringEngine::standard();
    assert_eq!(engine.roadmap(0), engine.roadmap(95));
    assert_eq!(engine.roadmap(40).takeoff.focus, "Foundation building");
}

#[test]
fn custom_velocity_drives_projection_and_gap_together() {
    let engine = ScoringEngine::new(EngineConfig::with_parameters(ScoringParameters {
        annual_velocity: 12.0,
        benchmark_target: 75,
        market_leader_target: 90,
        quick_win_limit: 2,
    }));

    let plan = engine.flight_plan_at(&uniform_responses(50), assessed_at());

    assert_eq!(plan.trajectory.months_12, 62);
    assert_eq!(plan.trajectory.annual_velocity, 12.0);
    assert_eq!(plan.gap_analysis.vs_industry_benchmark, 25);
    assert_eq!(plan.gap_analysis.months_to_close_benchmark, Some(25));
    assert_eq!(plan.gap_analysis.months_to_close_market_leaders, Some(40));
    assert_eq!(plan.quick_wins.len(), 2);
}

#[test]
fn stalled_velocity_keeps_scores_flat() {
    let engine = ScoringEngine::new(EngineConfig::with_parameters(ScoringParameters {
        annual_velocity: 0.0,
        ..ScoringParameters::default()
    }));

    let plan = engine.flight_plan_at(&uniform_responses(25), assessed_at());

    assert_eq!(plan.trajectory.months_24, 25);
    assert_eq!(plan.gap_analysis.months_to_close_benchmark, None);
}
