//! REST-Handler fuer Liveness und Metriken

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};

use hushdrop_core::LivenessAntwort;

use crate::rest::middleware::nicht_gefunden;
use crate::rest::RelayState;

/// GET /health – Liveness mit Anzahl lebender Eintraege
pub async fn health(State(state): State<RelayState>) -> Json<LivenessAntwort> {
    Json(LivenessAntwort {
        status: "ok".into(),
        eintraege: state.store.count(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// GET /metrics – Prometheus-Scrape
pub async fn metrics(State(state): State<RelayState>) -> Response {
    let Some(metriken) = state.metriken.as_ref() else {
        return nicht_gefunden();
    };
    metriken.eintraege.set(state.store.count() as i64);

    match metriken.exportieren() {
        Ok(text) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            text,
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Metriken-Export fehlgeschlagen: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Fallback fuer unbekannte Routen
pub async fn fallback() -> Response {
    nicht_gefunden()
}
