//! JSON-Antworten des Relay-Protokolls
//!
//! Der Envelope selbst ist opakes Binaer und taucht hier nicht auf; nur
//! Bestaetigungen, Liveness und Fehler werden als JSON uebertragen.

use serde::{Deserialize, Serialize};

/// Standard-Maximalgroesse eines Eintrags in Bytes (1 MiB)
pub const STANDARD_MAX_GROESSE_BYTES: usize = 1_048_576;

/// Standard-Lebensdauer eines Eintrags in Millisekunden (10 Minuten)
pub const STANDARD_TTL_MS: u64 = 600_000;

/// Standard-Intervall des Ablauf-Sweeps in Millisekunden (1 Minute)
pub const STANDARD_SWEEP_INTERVALL_MS: u64 = 60_000;

/// Header fuer optionale, opake Metadaten eines Transfers
pub const META_HEADER: &str = "x-hushdrop-meta";

/// Antwort auf `PUT /v1/transfers/:id` (201)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GespeichertAntwort {
    pub id: String,
    pub groesse: usize,
}

/// Antwort auf `DELETE /v1/transfers/:id` (200)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeloeschtAntwort {
    pub geloescht: bool,
}

/// Antwort auf `GET /health` (200)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LivenessAntwort {
    pub status: String,
    pub eintraege: usize,
    pub version: String,
}

/// Fehlerhuelle: `{ "error": { "code": 413, "message": "...", "limit": 1048576 } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FehlerAntwort {
    pub error: FehlerDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FehlerDetail {
    pub code: u16,
    pub message: String,
    /// Nur bei 413 gesetzt: konfiguriertes Maximum in Bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl FehlerAntwort {
    pub fn neu(code: u16, message: impl Into<String>) -> Self {
        Self {
            error: FehlerDetail {
                code,
                message: message.into(),
                limit: None,
            },
        }
    }

    pub fn mit_limit(mut self, limit: usize) -> Self {
        self.error.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fehler_ohne_limit_serialisierung() {
        let json = serde_json::to_string(&FehlerAntwort::neu(404, "nicht gefunden")).unwrap();
        assert_eq!(
            json,
            r#"{"error":{"code":404,"message":"nicht gefunden"}}"#
        );
    }

    #[test]
    fn fehler_mit_limit_roundtrip() {
        let antwort = FehlerAntwort::neu(413, "zu gross").mit_limit(STANDARD_MAX_GROESSE_BYTES);
        let json = serde_json::to_string(&antwort).unwrap();
        assert!(json.contains("\"limit\":1048576"));

        let zurueck: FehlerAntwort = serde_json::from_str(&json).unwrap();
        assert_eq!(zurueck.error.limit, Some(1_048_576));
    }

    #[test]
    fn standardwerte() {
        assert_eq!(STANDARD_MAX_GROESSE_BYTES, 1_048_576);
        assert_eq!(STANDARD_TTL_MS, 600_000);
        assert_eq!(STANDARD_SWEEP_INTERVALL_MS, 60_000);
    }
}
