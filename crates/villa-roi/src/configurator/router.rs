use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{BuildStyle, ConfigField, Storeys};
use super::engine::VillaConfigurator;
use super::model::{OptionValue, VillaConfiguration};
use super::views::{OptionCatalog, OptionEntry};

/// Router builder exposing the configurator's inbound and outbound contracts.
pub fn configurator_router(configurator: Arc<VillaConfigurator>) -> Router {
    Router::new()
        .route("/api/v1/configurator/options", get(options_handler))
        .route("/api/v1/configurator/availability", get(availability_handler))
        .route("/api/v1/configurator/quote", post(quote_handler))
        .route("/api/v1/configurator/update", post(update_handler))
        .route("/api/v1/configurator/matrix", get(matrix_handler))
        .with_state(configurator)
}

/// Single-field mutation request. Omitting `configuration` starts from the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub configuration: VillaConfiguration,
    pub field: String,
    pub value: OptionValue,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AvailabilityQuery {
    build_style: BuildStyle,
    storeys: Storeys,
}

#[derive(Debug, Serialize)]
pub(crate) struct AvailabilityResponse {
    build_style: BuildStyle,
    storeys: Storeys,
    variants: Vec<OptionEntry>,
}

pub(crate) async fn options_handler() -> Json<OptionCatalog> {
    Json(OptionCatalog::standard())
}

pub(crate) async fn availability_handler(
    State(configurator): State<Arc<VillaConfigurator>>,
    Query(query): Query<AvailabilityQuery>,
) -> Json<AvailabilityResponse> {
    let variants = configurator
        .availability()
        .legal_variants(query.build_style, query.storeys)
        .into_iter()
        .map(OptionEntry::variant)
        .collect();

    Json(AvailabilityResponse {
        build_style: query.build_style,
        storeys: query.storeys,
        variants,
    })
}

pub(crate) async fn quote_handler(
    State(configurator): State<Arc<VillaConfigurator>>,
    Json(configuration): Json<VillaConfiguration>,
) -> Response {
    let snapshot = configurator.quote(configuration);
    (StatusCode::OK, Json(snapshot)).into_response()
}

pub(crate) async fn update_handler(
    State(configurator): State<Arc<VillaConfigurator>>,
    Json(request): Json<UpdateRequest>,
) -> Response {
    let UpdateRequest {
        configuration,
        field,
        value,
    } = request;

    let result = field
        .parse::<ConfigField>()
        .and_then(|field| configurator.apply(configuration, field, &value));

    match result {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn matrix_handler(
    State(configurator): State<Arc<VillaConfigurator>>,
) -> Response {
    (StatusCode::OK, Json(configurator.matrix())).into_response()
}
