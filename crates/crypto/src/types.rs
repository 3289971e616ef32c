//! Gemeinsame Typen fuer das Kryptografie-Subsystem

use hushdrop_core::RelayId;

/// Laenge des symmetrischen Schluessels in Bytes (AES-256)
pub const SCHLUESSEL_LAENGE: usize = 32;

/// Symmetrischer 256-Bit-Schluessel (wird beim Drop genullt)
#[derive(Clone, PartialEq, Eq)]
pub struct Schluessel([u8; SCHLUESSEL_LAENGE]);

impl Drop for Schluessel {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for Schluessel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Schluessel([REDACTED] {} bytes)", self.0.len())
    }
}

impl Schluessel {
    pub fn new(bytes: [u8; SCHLUESSEL_LAENGE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SCHLUESSEL_LAENGE] {
        &self.0
    }
}

/// Aus einem Transfer-Code abgeleitetes Material
///
/// Beide Felder sind reine Funktionen des Codes. Der Relay-Identifier ist
/// oeffentlich, der Schluessel verlaesst den Client nie.
#[derive(Debug, Clone)]
pub struct KeyMaterial {
    pub verschluesselung: Schluessel,
    pub relay_id: RelayId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_verraet_keinen_schluessel() {
        let s = Schluessel::new([0x42; 32]);
        let text = format!("{s:?}");
        assert!(text.contains("REDACTED"));
        assert!(!text.contains("42"));
    }
}
