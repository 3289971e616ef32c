//! hushdrop-server – Bibliotheks-Root
//!
//! Deklariert alle Server-Module und stellt den oeffentlichen Einstiegspunkt
//! fuer Integrationstests bereit.

pub mod config;

use std::future::Future;

use anyhow::Result;
use config::ServerConfig;
use tokio::net::TcpListener;

use hushdrop_observability::RelayMetrics;
use hushdrop_relay::{RelayState, TransferStore};

/// Haelt den laufenden Server-Zustand zusammen
pub struct Server {
    pub config: ServerConfig,
}

impl Server {
    /// Erstellt einen neuen Server aus der gegebenen Konfiguration
    pub fn neu(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Startet den Relay und laeuft bis zum Shutdown-Signal
    ///
    /// Reihenfolge:
    /// 1. Store mit Sweep-Task anlegen
    /// 2. HTTP-API binden
    /// 3. Auf Ctrl-C / SIGTERM warten
    /// 4. Store herunterfahren
    pub async fn starten(self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_adresse()?).await?;
        self.starten_mit(listener, shutdown_signal()).await
    }

    /// Wie [`Server::starten`], aber mit vorgegebenem Listener und Signal
    pub async fn starten_mit<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let relay_konfig = self.config.relay_konfig();
        relay_konfig.validieren()?;

        tracing::info!(
            adresse = %listener.local_addr()?,
            max_groesse_bytes = relay_konfig.max_groesse_bytes,
            ttl_ms = relay_konfig.ttl.as_millis() as u64,
            sweep_intervall_ms = relay_konfig.sweep_intervall.as_millis() as u64,
            metriken = self.config.observability.metriken,
            "Relay startet"
        );

        let state = if self.config.observability.metriken {
            let metriken = RelayMetrics::neu()?;
            let store = TransferStore::mit_metriken(relay_konfig, metriken.clone());
            RelayState::neu(TransferStore::sweep_starten(store)).mit_metriken(metriken)
        } else {
            RelayState::neu(TransferStore::neu_mit_sweep(relay_konfig))
        };

        hushdrop_relay::bedienen(listener, state, shutdown).await
    }
}

/// Wartet auf Ctrl-C oder (unter Unix) SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Ctrl-C-Handler fehlgeschlagen: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("SIGTERM-Handler fehlgeschlagen: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = sigterm => {}
    }
    tracing::info!("Shutdown-Signal empfangen, Relay wird beendet");
}
