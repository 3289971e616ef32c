//! Envelope-Verschluesselung (AES-256-GCM)
//!
//! ## Format
//! ```text
//! [nonce(12)] [ciphertext] [auth_tag(16)]
//! ```
//!
//! Keine Laengenpraefixe: Nonce- und Tag-Laenge sind Konstanten, der
//! Ciphertext ist der Rest. Keine AAD. Das Relay sieht nur diese Bytes.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce as AesNonce,
};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{CryptoError, CryptoResult};
use crate::types::Schluessel;

/// Nonce-Laenge in Bytes (96 Bit)
pub const NONCE_LAENGE: usize = 12;
/// Auth-Tag-Laenge in Bytes (128 Bit)
pub const TAG_LAENGE: usize = 16;
/// Kleinstmoeglicher Envelope (leerer Klartext)
pub const MIN_ENVELOPE_LAENGE: usize = NONCE_LAENGE + TAG_LAENGE;

/// Verschluesselt `plaintext` mit frischer Zufalls-Nonce
///
/// Gibt `nonce ‖ ciphertext ‖ tag` zurueck. Zwei Aufrufe mit identischer
/// Eingabe liefern verschiedene Envelopes.
pub fn seal(plaintext: &[u8], key: &Schluessel) -> CryptoResult<Vec<u8>> {
    let mut nonce_bytes = [0u8; NONCE_LAENGE];
    OsRng.fill_bytes(&mut nonce_bytes);

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    let ciphertext = cipher
        .encrypt(AesNonce::from_slice(&nonce_bytes), plaintext)
        .map_err(|e| CryptoError::Verschluesselung(e.to_string()))?;

    let mut envelope = Vec::with_capacity(NONCE_LAENGE + ciphertext.len());
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(&ciphertext);
    Ok(envelope)
}

/// Entschluesselt einen Envelope
///
/// Schlaegt mit [`CryptoError::Integritaet`] fehl wenn der Envelope zu kurz
/// ist oder der Tag nicht passt. In diesem Fall werden keinerlei
/// Klartext-Bytes zurueckgegeben.
pub fn open(envelope: &[u8], key: &Schluessel) -> CryptoResult<Vec<u8>> {
    if envelope.len() < MIN_ENVELOPE_LAENGE {
        return Err(CryptoError::Integritaet);
    }
    let (nonce_bytes, ciphertext_und_tag) = envelope.split_at(NONCE_LAENGE);

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    cipher
        .decrypt(AesNonce::from_slice(nonce_bytes), ciphertext_und_tag)
        .map_err(|_| CryptoError::Integritaet)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
