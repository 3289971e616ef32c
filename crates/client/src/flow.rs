//! Senden und Empfangen eines Envelopes
//!
//! ```text
//! send:    code -> (schluessel, relay_id) -> seal(payload) -> PUT relay_id
//! receive: text -> parse -> (schluessel, relay_id) -> GET relay_id -> open
//! ```
//! Fehlgeschlagene Aufrufe werden nicht wiederholt: ein zweites `PUT` nach
//! einem Abbruch koennte einen bereits angenommenen Transfer treffen.

use hushdrop_crypto::{derive_key_material, generate_code, open, parse_code, seal, TransferCode};

use crate::error::ClientResult;
use crate::transport::RelayTransport;

/// Ergebnis von [`receive`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Empfang {
    pub daten: Vec<u8>,
    /// Vom Sender mitgeschickte, unverschluesselte Metadaten
    pub meta: Option<String>,
}

/// Verschluesselt `payload` und legt ihn auf dem Relay ab
///
/// Ohne `code` wird ein neuer erzeugt. Zurueckgegeben wird der Code, den
/// der Empfaenger braucht. Bei `ClientError::Konflikt` ist der Identifier
/// belegt und ein anderer Code zu waehlen.
pub fn send<T>(
    transport: &T,
    payload: &[u8],
    code: Option<TransferCode>,
    meta: Option<&str>,
) -> ClientResult<TransferCode>
where
    T: RelayTransport + ?Sized,
{
    let code = code.unwrap_or_else(generate_code);
    let material = derive_key_material(&code);
    let envelope = seal(payload, &material.verschluesselung)?;

    transport.speichern(&material.relay_id, &envelope, meta)?;
    tracing::info!(
        relay_id = %material.relay_id.kurz(),
        groesse = envelope.len(),
        "Transfer abgelegt"
    );
    Ok(code)
}

/// Holt den Envelope zu `code_text` ab und entschluesselt ihn
///
/// Ein fehlerhafter Code scheitert vor jedem Netzwerk- oder
/// Krypto-Aufruf. Nicht gefunden, Integritaetsfehler und ungueltiger Code
/// sind als eigene Varianten unterscheidbar.
pub fn receive<T>(transport: &T, code_text: &str) -> ClientResult<Empfang>
where
    T: RelayTransport + ?Sized,
{
    let code = parse_code(code_text)?;
    let material = derive_key_material(&code);

    let abholung = transport.abholen(&material.relay_id)?;
    let daten = open(&abholung.envelope, &material.verschluesselung)?;

    tracing::info!(
        relay_id = %material.relay_id.kurz(),
        groesse = daten.len(),
        "Transfer empfangen"
    );
    Ok(Empfang {
        daten,
        meta: abholung.meta,
    })
}
