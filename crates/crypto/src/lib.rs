//! # hushdrop-crypto
//!
//! Client-seitige Kryptografie fuer Hushdrop. Das Relay benutzt dieses
//! Crate nicht; es sieht nur Relay-Identifier und opake Envelopes.
//!
//! ## Module
//! - `code` - Transfer-Codes erzeugen und parsen
//! - `wortliste` - Gemeinsame Wortliste
//! - `kdf` - Schluessel und Relay-Identifier aus dem Code ableiten
//! - `envelope` - AES-256-GCM Envelope (seal/open)
//! - `types` - Schluessel, KeyMaterial
//! - `error` - Fehlertypen

pub mod code;
pub mod envelope;
pub mod error;
pub mod kdf;
pub mod types;
pub mod wortliste;

// Bequeme Re-Exports
pub use code::{generate_code, parse_code, TransferCode};
pub use envelope::{open, seal, MIN_ENVELOPE_LAENGE, NONCE_LAENGE, TAG_LAENGE};
pub use error::{CodeFehler, CryptoError, CryptoResult};
pub use kdf::{derive_key_material, KDF_RUNDEN};
pub use types::{KeyMaterial, Schluessel};
