//! Prometheus-kompatible Metriken fuer das Hushdrop Relay
//!
//! Registrierte Metriken:
//! - `hushdrop_transfers_total` – Counter: Store-Ergebnisse (ergebnis)
//! - `hushdrop_eintraege` – Gauge: Lebende Eintraege im Store
//! - `hushdrop_http_requests_total` – Counter: HTTP-Anfragen (method, status)
//! - `hushdrop_http_request_duration_seconds` – Histogram: HTTP-Antwortzeit
//!
//! Pfade werden bewusst nicht als Label gefuehrt, da sie Relay-Identifier
//! enthalten.

use anyhow::Result;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Label-Werte fuer `hushdrop_transfers_total`
pub mod ergebnis {
    pub const GESPEICHERT: &str = "gespeichert";
    pub const ABGEHOLT: &str = "abgeholt";
    pub const GELOESCHT: &str = "geloescht";
    pub const ABGELAUFEN: &str = "abgelaufen";
    pub const ZU_GROSS: &str = "zu_gross";
    pub const DUPLIKAT: &str = "duplikat";

    pub const ALLE: [&str; 6] = [GESPEICHERT, ABGEHOLT, GELOESCHT, ABGELAUFEN, ZU_GROSS, DUPLIKAT];
}

/// Alle Hushdrop-Prometheus-Metriken
#[derive(Clone)]
pub struct RelayMetrics {
    pub registry: Arc<Registry>,

    // Store-Metriken
    pub transfers_total: IntCounterVec,
    pub eintraege: IntGauge,

    // HTTP-Metriken
    pub http_requests_total: IntCounterVec,
    pub http_request_duration_seconds: HistogramVec,
}

impl RelayMetrics {
    /// Erstellt und registriert alle Metriken in einer neuen Registry
    pub fn neu() -> Result<Self> {
        let registry = Registry::new();

        // --- Store-Metriken ---
        let transfers_total = IntCounterVec::new(
            Opts::new(
                "hushdrop_transfers_total",
                "Store-Operationen nach Ergebnis",
            ),
            &["ergebnis"],
        )?;
        registry.register(Box::new(transfers_total.clone()))?;
        // Alle Label-Werte vorbelegen, damit sie ab dem ersten Scrape erscheinen
        for e in ergebnis::ALLE {
            transfers_total.with_label_values(&[e]);
        }

        let eintraege = IntGauge::with_opts(Opts::new(
            "hushdrop_eintraege",
            "Anzahl lebender Eintraege im Transfer-Store",
        ))?;
        registry.register(Box::new(eintraege.clone()))?;

        // --- HTTP-Metriken ---
        let http_requests_total = IntCounterVec::new(
            Opts::new("hushdrop_http_requests_total", "Gesamtanzahl HTTP-Anfragen"),
            &["method", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "hushdrop_http_request_duration_seconds",
                "HTTP-Antwortzeit in Sekunden",
            )
            .buckets(vec![
                0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5,
            ]),
            &["method"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            transfers_total,
            eintraege,
            http_requests_total,
            http_request_duration_seconds,
        })
    }

    /// Zaehlt `anzahl` Store-Ergebnisse der Art `ergebnis`
    pub fn transfers_zaehlen(&self, ergebnis: &str, anzahl: u64) {
        if anzahl > 0 {
            self.transfers_total
                .with_label_values(&[ergebnis])
                .inc_by(anzahl);
        }
    }

    /// Aktueller Zaehlerstand fuer `ergebnis`
    pub fn transfers(&self, ergebnis: &str) -> u64 {
        self.transfers_total.with_label_values(&[ergebnis]).get()
    }

    /// Exportiert alle Metriken im Prometheus-Textformat
    pub fn exportieren(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
