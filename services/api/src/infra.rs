use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use villa_roi::config::AppConfig;
use villa_roi::configurator::VillaConfigurator;
use villa_roi::error::AppError;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the configurator from `VILLA_*` settings, importing the availability table when one is configured.
pub(crate) fn configurator_from_env() -> Result<(AppConfig, VillaConfigurator), AppError> {
    let config = AppConfig::load()?;
    let configurator = VillaConfigurator::from_settings(&config.configurator)?;
    Ok((config, configurator))
}
