//! Gemeinsame Identifikationstypen fuer Hushdrop
//!
//! Der Relay-Identifier ist der einzige Wert, den Client und Relay teilen.
//! Er verwendet das Newtype-Pattern, damit ein beliebiger String nicht
//! versehentlich als Store-Schluessel landet.

use serde::{Deserialize, Serialize};

use crate::error::UngueltigeRelayId;

/// Laenge eines Relay-Identifiers in Hex-Zeichen (256 Bit)
pub const RELAY_ID_LAENGE: usize = 64;

/// Oeffentlicher, nicht geheimer Lookup-Schluessel eines Transfers
///
/// Immer genau [`RELAY_ID_LAENGE`] Zeichen aus `[0-9a-f]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelayId(String);

impl RelayId {
    /// Prueft ob ein String dem Wire-Format eines Relay-Identifiers entspricht
    pub fn ist_gueltig(s: &str) -> bool {
        s.len() == RELAY_ID_LAENGE && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Validiert und uebernimmt einen String
    pub fn parse(s: &str) -> Result<Self, UngueltigeRelayId> {
        if Self::ist_gueltig(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(UngueltigeRelayId {
                erwartet: RELAY_ID_LAENGE,
            })
        }
    }

    /// Erstellt den Identifier aus 32 Rohbytes (Hex-Kodierung in Kleinschreibung)
    pub fn aus_bytes(bytes: &[u8; 32]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Kurzform fuer Logs (erste 8 Zeichen)
    pub fn kurz(&self) -> &str {
        &self.0[..8]
    }
}

impl std::fmt::Display for RelayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for RelayId {
    type Err = UngueltigeRelayId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RelayId {
    type Error = UngueltigeRelayId;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if Self::ist_gueltig(&s) {
            Ok(Self(s))
        } else {
            Err(UngueltigeRelayId {
                erwartet: RELAY_ID_LAENGE,
            })
        }
    }
}

impl From<RelayId> for String {
    fn from(id: RelayId) -> Self {
        id.0
    }
}

impl AsRef<str> for RelayId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
