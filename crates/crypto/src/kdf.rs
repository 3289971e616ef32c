//! Schluesselableitung aus dem Transfer-Code
//!
//! Aus dem kanonischen Code-Text werden zwei unabhaengige 256-Bit-Werte
//! abgeleitet, jeweils mit eigenem Label als Salt:
//!
//! ```text
//! schluessel = PBKDF2-HMAC-SHA256(code, "hushdrop/v1/verschluesselung", 100_000)
//! relay_id   = hex(PBKDF2-HMAC-SHA256(code, "hushdrop/v1/relay-id", 100_000))
//! ```
//!
//! Der Relay-Betreiber sieht nur `relay_id`. Um daraus den Schluessel zu
//! gewinnen, muss er trotzdem den Code selbst erraten.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use hushdrop_core::RelayId;

use crate::code::TransferCode;
use crate::types::{KeyMaterial, Schluessel, SCHLUESSEL_LAENGE};

/// Iterationen der PBKDF2-Ableitung
pub const KDF_RUNDEN: u32 = 100_000;

const LABEL_VERSCHLUESSELUNG: &[u8] = b"hushdrop/v1/verschluesselung";
const LABEL_RELAY_ID: &[u8] = b"hushdrop/v1/relay-id";

/// Leitet Schluessel und Relay-Identifier aus einem Code ab
///
/// Deterministisch und zustandslos. Zwei getrennte Ableitungen, kein
/// Aufteilen eines gemeinsamen Outputs.
pub fn derive_key_material(code: &TransferCode) -> KeyMaterial {
    let text = code.to_string();
    let start = std::time::Instant::now();

    let verschluesselung = Schluessel::new(ableiten(&text, LABEL_VERSCHLUESSELUNG));
    let relay_id = RelayId::aus_bytes(&ableiten(&text, LABEL_RELAY_ID));

    tracing::debug!(
        relay_id = %relay_id.kurz(),
        dauer_ms = start.elapsed().as_millis(),
        "Schluesselmaterial abgeleitet"
    );

    KeyMaterial {
        verschluesselung,
        relay_id,
    }
}

fn ableiten(code_text: &str, label: &[u8]) -> [u8; SCHLUESSEL_LAENGE] {
    let mut out = [0u8; SCHLUESSEL_LAENGE];
    pbkdf2_hmac::<Sha256>(code_text.as_bytes(), label, KDF_RUNDEN, &mut out);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
