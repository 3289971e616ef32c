//! Route-Definitionen des Relays

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use hushdrop_observability::{http_metriken_middleware, timing_middleware};

use crate::rest::{handlers, RelayState};

/// Erstellt den vollstaendigen Relay-Router inklusive Middleware
///
/// `/metrics` wird nur registriert wenn der State Metriken traegt. Nicht
/// erlaubte Methoden und `HEAD` auf Transfers bekommen dieselbe 404 wie
/// unbekannte Routen.
pub fn relay_router(state: RelayState) -> Router {
    let mut router = Router::new()
        .route(
            "/v1/transfers/:id",
            put(handlers::transfers::speichern)
                .get(handlers::transfers::abholen)
                .delete(handlers::transfers::loeschen)
                // HEAD darf das destruktive GET nicht ausloesen
                .head(handlers::system::fallback),
        )
        .route("/health", get(handlers::system::health));

    if state.metriken.is_some() {
        router = router.route("/metrics", get(handlers::system::metrics));
    }

    // Groessenpruefung uebernimmt der Upload-Handler selbst
    router = router
        .method_not_allowed_fallback(handlers::system::fallback)
        .fallback(handlers::system::fallback)
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(timing_middleware))
        .layer(TraceLayer::new_for_http());

    if let Some(metriken) = state.metriken.clone() {
        router = router.layer(middleware::from_fn_with_state(
            metriken,
            http_metriken_middleware,
        ));
    }

    router.with_state(state)
}
