//! REST-Interface des Hushdrop Relays

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

use std::sync::Arc;

use hushdrop_observability::RelayMetrics;

use crate::store::TransferStore;

/// Axum-State fuer den Relay-Server
#[derive(Clone)]
pub struct RelayState {
    pub store: Arc<TransferStore>,
    /// `None` = `/metrics` ist deaktiviert
    pub metriken: Option<RelayMetrics>,
}

impl RelayState {
    pub fn neu(store: Arc<TransferStore>) -> Self {
        Self {
            store,
            metriken: None,
        }
    }

    pub fn mit_metriken(mut self, metriken: RelayMetrics) -> Self {
        self.metriken = Some(metriken);
        self
    }
}

pub use routes::relay_router;
pub use server::bedienen;
