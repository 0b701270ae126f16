use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionStore};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use flight_planner::config::AppConfig;
use flight_planner::error::AppError;
use flight_planner::telemetry;
use flight_planner::workflows::assessment::{
    AssessmentSessionService, EngineConfig, Questionnaire, ScoringEngine,
};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = ScoringEngine::new(EngineConfig::with_parameters(config.scoring.clone()));
    let session_service = Arc::new(AssessmentSessionService::new(
        Arc::new(InMemorySessionStore::default()),
        engine,
        Questionnaire::standard(),
    ));

    let app = with_assessment_routes(session_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        annual_velocity = config.scoring.annual_velocity,
        "flight planner ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
