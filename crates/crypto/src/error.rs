//! Fehlertypen fuer das Kryptografie-Subsystem

use hushdrop_core::FehlerArt;
use thiserror::Error;

/// Fehler im Kryptografie-Subsystem
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Ungueltiger Transfer-Code: {0}")]
    UngueltigerCode(#[from] CodeFehler),

    /// Tag-Pruefung fehlgeschlagen. Enthaelt absichtlich keine Details und
    /// niemals Teile des Klartexts.
    #[error("Integritaetspruefung fehlgeschlagen (falscher Code oder manipulierte Daten)")]
    Integritaet,

    #[error("Verschluesselung fehlgeschlagen: {0}")]
    Verschluesselung(String),
}

impl CryptoError {
    /// Fehlerklasse fuer Aufrufer und Wire-Abbildung
    pub fn art(&self) -> FehlerArt {
        match self {
            Self::UngueltigerCode(_) => FehlerArt::Eingabe,
            Self::Integritaet => FehlerArt::Integritaet,
            Self::Verschluesselung(_) => FehlerArt::Intern,
        }
    }
}

/// Grund, warum ein Text kein gueltiger Transfer-Code ist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeFehler {
    #[error("erwartet wird das Format <zahl>-<wort>-<wort>")]
    Format,

    #[error("Zahl muss zwischen 1 und 999 liegen")]
    NummerAusserhalb,

    #[error("Wort '{0}' steht nicht in der Wortliste")]
    UnbekanntesWort(String),

    #[error("die beiden Woerter muessen verschieden sein")]
    GleicheWoerter,
}

pub type CryptoResult<T> = Result<T, CryptoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fehlerklassen() {
        assert_eq!(
            CryptoError::UngueltigerCode(CodeFehler::Format).art(),
            FehlerArt::Eingabe
        );
        assert_eq!(CryptoError::Integritaet.art(), FehlerArt::Integritaet);
    }

    #[test]
    fn integritaetsfehler_ohne_details() {
        let text = CryptoError::Integritaet.to_string();
        assert!(text.contains("Integritaetspruefung"));
    }
}
