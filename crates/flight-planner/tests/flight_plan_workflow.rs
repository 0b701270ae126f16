use chrono::{TimeZone, Utc};
use flight_planner::workflows::assessment::{
    CategoryMap, MaturityLevel, Questionnaire, ResponseSet, ResponseValidator, ScoringEngine,
};

fn mixed_responses() -> ResponseSet {
    ResponseSet::new()
        .with("strategy", 100)
        .with("measurement", 75)
        .with("demand_gen", 0)
        .with("operations", 25)
        .with("tech_stack", 50)
        .with("customer_understanding", 25)
        .with("sales_alignment", 50)
        .with("content", 75)
        .with("brand", 75)
        .with("team_capability", 100)
}

#[test]
fn mixed_profile_produces_full_flight_plan() {
    let timestamp = Utc
        .with_ymd_and_hms(2025, 4, 1, 8, 0, 0)
        .single()
        .expect("valid timestamp");
    let plan = ScoringEngine::standard().flight_plan_at(&mixed_responses(), timestamp);

    let assessment = &plan.assessment;
    assert_eq!(assessment.overall_score, 58);
    assert_eq!(assessment.normalized_score, 58);
    assert_eq!(assessment.maturity_level, MaturityLevel::Established);
    assert_eq!(assessment.timestamp, timestamp);

    let scores: Vec<(&str, i32, MaturityLevel)> = assessment
        .categories
        .iter()
        .map(|category| (category.name.as_str(), category.score, category.level))
        .collect();
    assert_eq!(
        scores,
        vec![
            ("Demand Generation", 13, MaturityLevel::Foundational),
            ("Technology Stack", 50, MaturityLevel::Established),
            ("Customer Understanding", 38, MaturityLevel::Developing),
            ("Content & Brand", 75, MaturityLevel::Advanced),
            ("Team Capability", 100, MaturityLevel::MarketLeading),
            ("Strategic Focus", 88, MaturityLevel::MarketLeading),
        ]
    );

    assert_eq!(plan.trajectory.months_6, 62);
    assert_eq!(plan.trajectory.months_12, 67);
    assert_eq!(plan.trajectory.months_24, 75);
    assert_eq!(
        plan.trajectory.maturity_levels.months_12,
        MaturityLevel::Advanced
    );

    assert_eq!(plan.gap_analysis.vs_industry_benchmark, 12);
    assert_eq!(plan.gap_analysis.months_to_close_benchmark, Some(17));
    assert_eq!(plan.gap_analysis.vs_market_leaders, 24);
    assert_eq!(plan.gap_analysis.months_to_close_market_leaders, Some(34));

    let quick_wins: Vec<&str> = plan.quick_wins.iter().map(|win| win.id.as_str()).collect();
    assert_eq!(quick_wins, vec!["dg-1", "cu-1", "ts-1"]);

    let phases: Vec<&str> = plan.roadmap.phases().map(|phase| phase.phase.as_str()).collect();
    assert_eq!(phases, vec!["Takeoff Phase", "Climb Phase", "Cruise Phase"]);
}

#[test]
fn standard_reference_data_is_consistent() {
    let questionnaire = Questionnaire::standard();
    let categories = CategoryMap::standard();

    categories
        .check_consistency(&questionnaire)
        .expect("every question belongs to exactly one category");

    let validator = ResponseValidator::new(&questionnaire).require_complete(true);
    assert!(validator.validate(&mixed_responses()).is_ok());
}

#[test]
fn market_leading_profile_has_no_gap_left() {
    let responses: ResponseSet = Questionnaire::standard()
        .questions()
        .iter()
        .map(|question| (question.id.clone(), 100))
        .collect();

    let plan = ScoringEngine::standard().flight_plan(&responses);

    assert_eq!(plan.assessment.maturity_level, MaturityLevel::MarketLeading);
    assert_eq!(plan.trajectory.months_24, 100);
    assert_eq!(plan.gap_analysis.vs_industry_benchmark, 0);
    assert_eq!(plan.gap_analysis.months_to_close_benchmark, Some(0));
    assert_eq!(plan.gap_analysis.months_to_close_market_leaders, Some(0));
    assert_eq!(plan.quick_wins.len(), 3);
}
