//! # hushdrop-client
//!
//! Client-Seite von Hushdrop:
//! - [`flow`]: Senden und Empfangen ueber einen Transfer-Code
//! - [`transport`]: Wire-Vertrag des Relays, HTTP-Implementierung
//! - [`packer`]: Dateien und Verzeichnisse zu einem Blob buendeln

pub mod error;
pub mod flow;
pub mod packer;
pub mod transport;

pub use error::{ClientError, ClientResult};
pub use flow::{receive, send, Empfang};
pub use packer::{Packer, TarGzPacker};
pub use transport::{Abholung, HttpTransport, RelayTransport, STANDARD_RELAY_URL};
