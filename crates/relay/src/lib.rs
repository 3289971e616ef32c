//! # hushdrop-relay
//!
//! Der Relay haelt verschluesselte Envelopes fuer genau eine Abholung:
//! - [`store`]: kurzlebiger Einmal-Speicher mit TTL-Sweep
//! - [`rest`]: HTTP-Protokoll (Axum) ueber dem Store
//!
//! Der Relay sieht nur opake Bytes und oeffentliche Relay-Identifier,
//! niemals Codes oder Schluessel.

pub mod error;
pub mod konfig;
pub mod rest;
pub mod store;

pub use error::{RelayError, RelayResult};
pub use konfig::RelayKonfig;
pub use rest::{bedienen, relay_router, RelayState};
pub use store::{TransferEntry, TransferStore};
