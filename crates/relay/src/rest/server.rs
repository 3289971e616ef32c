//! Axum HTTP-Server fuer den Relay

use std::future::Future;

use anyhow::Result;
use tokio::net::TcpListener;

use crate::rest::{routes::relay_router, RelayState};

/// Bedient Anfragen auf einem bereits gebundenen Listener bis `shutdown` feuert
///
/// Nach dem Ende wird der Store heruntergefahren: der Sweep stoppt und
/// alle Eintraege werden verworfen.
pub async fn bedienen<F>(listener: TcpListener, state: RelayState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    let store = state.store.clone();
    let app = relay_router(state);

    tracing::info!(addr = %addr, "Relay-Server gestartet");
    let ergebnis = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    store.shutdown();
    tracing::info!("Relay-Server beendet");
    ergebnis?;
    Ok(())
}
