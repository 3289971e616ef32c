//! Request-Timing Middleware fuer Axum
//!
//! Misst die Antwortzeit jeder HTTP-Anfrage und protokolliert sie als
//! strukturiertes Log-Event sowie optional als Prometheus-Histogramm.

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response},
    middleware::Next,
};
use std::time::Instant;

use crate::metrics::RelayMetrics;

/// Axum-Middleware-Funktion: misst Antwortzeit und loggt strukturiert.
///
/// Der Pfad wird auf sein erstes Segment gekuerzt, damit keine
/// vollstaendigen Relay-Identifier im Log landen.
///
/// Verwendung:
/// ```ignore
/// Router::new()
///     .route("/", get(handler))
///     .layer(axum::middleware::from_fn(timing_middleware))
/// ```
pub async fn timing_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let methode = req.method().to_string();
    let pfad = pfad_kuerzen(req.uri().path());
    let start = Instant::now();

    let response = next.run(req).await;

    let dauer = start.elapsed();
    let status = response.status().as_u16();

    tracing::info!(
        method = %methode,
        path = %pfad,
        status = status,
        duration_ms = dauer.as_millis(),
        "HTTP-Anfrage abgeschlossen"
    );

    response
}

/// Axum-Middleware-Funktion: zaehlt Anfragen und Antwortzeiten in Prometheus
pub async fn http_metriken_middleware(
    State(metriken): State<RelayMetrics>,
    req: Request<Body>,
    next: Next,
) -> Response<Body> {
    let methode = req.method().as_str().to_owned();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();
    metriken
        .http_requests_total
        .with_label_values(&[&methode, &status])
        .inc();
    metriken
        .http_request_duration_seconds
        .with_label_values(&[&methode])
        .observe(start.elapsed().as_secs_f64());

    response
}

/// Kuerzt Pfade unter `/v1/transfers/` auf ein 8-Zeichen-Praefix der ID
pub fn pfad_kuerzen(pfad: &str) -> String {
    match pfad.strip_prefix("/v1/transfers/") {
        Some(id) if id.len() > 8 => match id.get(..8) {
            Some(praefix) => format!("/v1/transfers/{praefix}…"),
            None => "/v1/transfers/…".to_string(),
        },
        _ => pfad.to_string(),
    }
}
