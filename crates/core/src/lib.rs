//! hushdrop-core – Gemeinsame Typen, Fehlerklassen und Wire-Formate
//!
//! Dieses Crate stellt die Bausteine bereit, die Relay und Client
//! gleichermassen kennen muessen: den Relay-Identifier, die Fehler-Taxonomie
//! und die JSON-Antworten des Relay-Protokolls.

pub mod error;
pub mod types;
pub mod wire;

// Re-Exporte fuer bequemen Zugriff
pub use error::{FehlerArt, UngueltigeRelayId};
pub use types::{RelayId, RELAY_ID_LAENGE};
pub use wire::{
    FehlerAntwort, FehlerDetail, GeloeschtAntwort, GespeichertAntwort, LivenessAntwort, META_HEADER,
    STANDARD_MAX_GROESSE_BYTES, STANDARD_SWEEP_INTERVALL_MS, STANDARD_TTL_MS,
};
