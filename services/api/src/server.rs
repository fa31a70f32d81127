use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryProfileRepository};
use crate::routes::with_food_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use food_iq::advisory::AdvisoryEngine;
use food_iq::config::AppConfig;
use food_iq::error::AppError;
use food_iq::nutrition::{FoodState, NutritionCatalog};
use food_iq::profiles::ProfileService;
use food_iq::telemetry;
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
    if let Some(catalog) = args.catalog.take() {
        config.catalog.nutrition_csv = Some(catalog);
    }

    telemetry::init(&config.telemetry)?;

    let catalog = Arc::new(NutritionCatalog::load(
        config.catalog.nutrition_csv.as_deref(),
    )?);
    info!(
        foods = catalog.len(),
        source = ?config.catalog.nutrition_csv,
        "nutrition catalog loaded"
    );
    let engine = Arc::new(AdvisoryEngine::standard());

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryProfileRepository::default());
    let profile_service = Arc::new(ProfileService::new(
        repository,
        catalog.clone(),
        engine.clone(),
    ));

    let app = with_food_routes(FoodState::new(catalog, engine), profile_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "food advisory service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
