//! Server-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! sinnvolle Standardwerte, sodass der Server ohne Konfigurationsdatei
//! lauffaehig ist.

use std::net::SocketAddr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use hushdrop_core::{STANDARD_MAX_GROESSE_BYTES, STANDARD_SWEEP_INTERVALL_MS, STANDARD_TTL_MS};
use hushdrop_observability::logging::{log_format_gueltig, log_level_gueltig};
use hushdrop_relay::RelayKonfig;

/// Vollstaendige Server-Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Netzwerk-Einstellungen
    pub netzwerk: NetzwerkEinstellungen,
    /// Limits und Zeitkonstanten des Transfer-Stores
    pub relay: RelayEinstellungen,
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
    /// Observability-Einstellungen (Metriken)
    pub observability: ObservabilityEinstellungen,
}

/// Netzwerk-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetzwerkEinstellungen {
    /// Bind-Adresse fuer die HTTP-API
    pub bind_adresse: String,
    /// Port fuer die HTTP-API
    pub port: u16,
}

impl Default for NetzwerkEinstellungen {
    fn default() -> Self {
        Self {
            bind_adresse: "0.0.0.0".into(),
            port: 8787,
        }
    }
}

/// Store-Einstellungen, alle drei unabhaengig ueberschreibbar
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayEinstellungen {
    /// Maximale Envelope-Groesse in Bytes
    pub max_groesse_bytes: usize,
    /// Lebensdauer eines Eintrags in Millisekunden
    pub ttl_ms: u64,
    /// Abstand der Ablauf-Sweeps in Millisekunden
    pub sweep_intervall_ms: u64,
}

impl Default for RelayEinstellungen {
    fn default() -> Self {
        Self {
            max_groesse_bytes: STANDARD_MAX_GROESSE_BYTES,
            ttl_ms: STANDARD_TTL_MS,
            sweep_intervall_ms: STANDARD_SWEEP_INTERVALL_MS,
        }
    }
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level: "trace", "debug", "info", "warn", "error"
    pub level: String,
    /// Format: "json" oder "text"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "text".into(),
        }
    }
}

/// Observability-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityEinstellungen {
    /// Aktiviert `GET /metrics` auf dem Relay-Port
    pub metriken: bool,
}

impl Default for ObservabilityEinstellungen {
    fn default() -> Self {
        Self { metriken: true }
    }
}

impl ServerConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: &str) -> anyhow::Result<Self> {
        match std::fs::read_to_string(pfad) {
            Ok(inhalt) => Self::aus_toml(&inhalt)
                .with_context(|| format!("Konfigurationsfehler in '{pfad}'")),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    pfad = pfad,
                    "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
                );
                Ok(Self::default())
            }
            Err(e) => Err(anyhow::anyhow!(
                "Konfigurationsdatei '{pfad}' nicht lesbar: {e}"
            )),
        }
    }

    /// Parst und validiert einen TOML-String
    pub fn aus_toml(inhalt: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(inhalt)?;
        config.validieren()?;
        Ok(config)
    }

    /// Prueft Werte, die sonst erst zur Laufzeit auffallen wuerden
    pub fn validieren(&self) -> anyhow::Result<()> {
        self.relay_konfig().validieren()?;
        self.bind_adresse()?;
        if !log_level_gueltig(&self.logging.level) {
            tracing::warn!(level = %self.logging.level, "Unbekanntes Log-Level, wird als Filter-Direktive verwendet");
        }
        if !log_format_gueltig(&self.logging.format) {
            anyhow::bail!("Unbekanntes Log-Format '{}'", self.logging.format);
        }
        Ok(())
    }

    /// Gibt die vollstaendige Bind-Adresse der HTTP-API zurueck
    pub fn bind_adresse(&self) -> anyhow::Result<SocketAddr> {
        let text = format!("{}:{}", self.netzwerk.bind_adresse, self.netzwerk.port);
        text.parse()
            .with_context(|| format!("Ungueltige Bind-Adresse '{text}'"))
    }

    /// Store-Konfiguration fuer den Relay
    pub fn relay_konfig(&self) -> RelayKonfig {
        RelayKonfig::aus_millis(
            self.relay.max_groesse_bytes,
            self.relay.ttl_ms,
            self.relay.sweep_intervall_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn standard_config_ist_valide() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.netzwerk.port, 8787);
        assert_eq!(cfg.relay.max_groesse_bytes, 1_048_576);
        assert_eq!(cfg.relay.ttl_ms, 600_000);
        assert_eq!(cfg.relay.sweep_intervall_ms, 60_000);
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.observability.metriken);
        assert!(cfg.validieren().is_ok());
    }

    #[test]
    fn bind_adresse() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_adresse().unwrap().to_string(), "0.0.0.0:8787");
    }

    #[test]
    fn config_aus_toml_string() {
        let toml = r#"
            [netzwerk]
            port = 9000

            [relay]
            ttl_ms = 30000
        "#;
        let cfg = ServerConfig::aus_toml(toml).unwrap();
        assert_eq!(cfg.netzwerk.port, 9000);
        // Nicht angegebene Felder behalten Standardwerte
        assert_eq!(cfg.netzwerk.bind_adresse, "0.0.0.0");
        assert_eq!(cfg.relay.max_groesse_bytes, 1_048_576);

        let relay = cfg.relay_konfig();
        assert_eq!(relay.ttl, Duration::from_secs(30));
        assert_eq!(relay.sweep_intervall, Duration::from_secs(60));
    }

    #[test]
    fn ungueltige_werte_abgelehnt() {
        assert!(ServerConfig::aus_toml("[relay]\nmax_groesse_bytes = 0").is_err());
        assert!(ServerConfig::aus_toml("[relay]\nsweep_intervall_ms = 0").is_err());
        assert!(ServerConfig::aus_toml("[netzwerk]\nbind_adresse = \"kein host\"").is_err());
        assert!(ServerConfig::aus_toml("[logging]\nformat = \"xml\"").is_err());
    }

    #[test]
    fn fehlende_datei_ergibt_standardwerte() {
        let cfg = ServerConfig::laden("/pfad/der/nicht/existiert/hushdrop.toml").unwrap();
        assert_eq!(cfg.netzwerk.port, 8787);
    }
}
