use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_configurator_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use villa_roi::config::AppConfig;
use villa_roi::configurator::VillaConfigurator;
use villa_roi::error::AppError;
use villa_roi::telemetry;

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

    let configurator = Arc::new(VillaConfigurator::from_settings(&config.configurator)?);
    let missing = configurator.availability().missing_entries().len();

    let app = with_configurator_routes(configurator)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        image_base = %config.configurator.image_base,
        missing_availability_entries = missing,
        "villa configurator ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
