//! HTTP surface consumed by the front end.
//!
//! Every route answers `200` with a JSON body; failures are reported inside the
//! body as `{"error": "..."}`.

use crate::constants::MUNICIPALITY_PARAM;
use crate::errors::AppResult;
use crate::service::{DemographicsResponse, DemographicsService};
use axum::extract::{RawQuery, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Builds the application router around a shared service.
pub fn router(service: Arc<DemographicsService>) -> Router {
    Router::new()
        .route("/api", get(index))
        .route("/api/", get(index))
        .route("/api/demographics", get(demographics))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Binds `addr` and serves until the process is stopped.
pub async fn serve(addr: SocketAddr, service: Arc<DemographicsService>) -> AppResult<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(address = %addr, "Listening");
    axum::serve(listener, router(service)).await?;
    Ok(())
}

async fn index() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
    }))
}

async fn demographics(
    State(service): State<Arc<DemographicsService>>,
    RawQuery(raw): RawQuery,
) -> Json<DemographicsResponse> {
    let municipality = raw.as_deref().and_then(municipality_param);
    Json(service.lookup(municipality.as_deref()).await)
}

/// First `municipality` value of a raw query string.
///
/// Decoding is lenient so that a malformed query string still gets a JSON answer.
fn municipality_param(raw: &str) -> Option<String> {
    url::form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == MUNICIPALITY_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::municipality_param;

    #[test]
    fn municipality_param_decodes_value() {
        assert_eq!(
            municipality_param("municipality=M%C3%A1laga"),
            Some("Málaga".to_string())
        );
        assert_eq!(
            municipality_param("x=1&municipality=Palma+de+Mallorca"),
            Some("Palma de Mallorca".to_string())
        );
    }

    #[test]
    fn municipality_param_missing() {
        assert_eq!(municipality_param("city=Madrid"), None);
        assert_eq!(municipality_param(""), None);
    }
}
