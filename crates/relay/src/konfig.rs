//! Laufzeit-Konfiguration des Relay-Stores

use std::time::Duration;

use hushdrop_core::{STANDARD_MAX_GROESSE_BYTES, STANDARD_SWEEP_INTERVALL_MS, STANDARD_TTL_MS};

use crate::error::{RelayError, RelayResult};

/// Limits und Zeitkonstanten des Stores
///
/// Alle drei Werte sind unabhaengig voneinander ueberschreibbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayKonfig {
    /// Maximale Payload-Groesse pro Eintrag in Bytes
    pub max_groesse_bytes: usize,
    /// Lebensdauer eines Eintrags ab Annahme
    pub ttl: Duration,
    /// Abstand zwischen zwei Sweep-Laeufen
    pub sweep_intervall: Duration,
}

impl Default for RelayKonfig {
    fn default() -> Self {
        Self {
            max_groesse_bytes: STANDARD_MAX_GROESSE_BYTES,
            ttl: Duration::from_millis(STANDARD_TTL_MS),
            sweep_intervall: Duration::from_millis(STANDARD_SWEEP_INTERVALL_MS),
        }
    }
}

impl RelayKonfig {
    /// Erstellt eine Konfiguration aus Millisekunden-Werten (TOML-Form)
    pub fn aus_millis(max_groesse_bytes: usize, ttl_ms: u64, sweep_intervall_ms: u64) -> Self {
        Self {
            max_groesse_bytes,
            ttl: Duration::from_millis(ttl_ms),
            sweep_intervall: Duration::from_millis(sweep_intervall_ms),
        }
    }

    /// Prueft dass alle Werte groesser als null sind
    pub fn validieren(&self) -> RelayResult<()> {
        if self.max_groesse_bytes == 0 {
            return Err(RelayError::Konfiguration(
                "max_groesse_bytes muss groesser als 0 sein".into(),
            ));
        }
        if self.ttl.is_zero() {
            return Err(RelayError::Konfiguration("ttl_ms muss groesser als 0 sein".into()));
        }
        if self.sweep_intervall.is_zero() {
            return Err(RelayError::Konfiguration(
                "sweep_intervall_ms muss groesser als 0 sein".into(),
            ));
        }
        Ok(())
    }
}
