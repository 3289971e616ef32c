//! Fehlertypen fuer den Hushdrop Client
//!
//! Die Varianten bleiben fuer den Aufrufer unterscheidbar: ein
//! fehlerhafter Code, ein fehlender Transfer und ein Integritaetsfehler
//! fuehren zu jeweils eigenen Meldungen.

use hushdrop_core::FehlerArt;
use hushdrop_crypto::{CodeFehler, CryptoError};
use thiserror::Error;

/// Alle moeglichen Fehler im Client-Crate
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Ungueltiger Code: {0}")]
    UngueltigerCode(#[from] CodeFehler),

    #[error("Entschluesselung fehlgeschlagen: falscher Code oder manipulierte Daten")]
    Integritaet,

    #[error("Payload zu gross fuer den Relay{}", limit_text(*.limit))]
    ZuGross { limit: Option<usize> },

    #[error("Identifier ist auf dem Relay bereits belegt, anderen Code waehlen")]
    Konflikt,

    #[error("Nicht gefunden oder bereits abgeholt")]
    NichtGefunden,

    #[error("Transportfehler: {0}")]
    Transport(String),

    #[error("Ungueltige Eingabe: {0}")]
    Eingabe(String),

    #[error("Packen fehlgeschlagen: {0}")]
    Packen(String),

    #[error("Verschluesselung fehlgeschlagen: {0}")]
    Krypto(String),

    #[error("IO-Fehler: {0}")]
    Io(#[from] std::io::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

fn limit_text(limit: Option<usize>) -> String {
    limit
        .map(|l| format!(" (Maximum {l} Bytes)"))
        .unwrap_or_default()
}

impl ClientError {
    /// Fehlerklasse nach der gemeinsamen Taxonomie
    pub fn art(&self) -> FehlerArt {
        match self {
            Self::UngueltigerCode(_) | Self::Eingabe(_) => FehlerArt::Eingabe,
            Self::Integritaet => FehlerArt::Integritaet,
            Self::ZuGross { .. } => FehlerArt::Kapazitaet,
            Self::Konflikt => FehlerArt::Konflikt,
            Self::NichtGefunden => FehlerArt::NichtGefunden,
            Self::Transport(_) => FehlerArt::Transport,
            Self::Packen(_) | Self::Krypto(_) | Self::Io(_) => FehlerArt::Intern,
        }
    }
}

impl From<CryptoError> for ClientError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::UngueltigerCode(c) => Self::UngueltigerCode(c),
            CryptoError::Integritaet => Self::Integritaet,
            CryptoError::Verschluesselung(msg) => Self::Krypto(msg),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn krypto_fehler_bleiben_unterscheidbar() {
        assert!(matches!(
            ClientError::from(CryptoError::Integritaet),
            ClientError::Integritaet
        ));
        assert!(matches!(
            ClientError::from(CryptoError::UngueltigerCode(CodeFehler::Format)),
            ClientError::UngueltigerCode(CodeFehler::Format)
        ));
    }

    #[test]
    fn fehlerklassen() {
        assert_eq!(ClientError::Integritaet.art(), FehlerArt::Integritaet);
        assert_eq!(ClientError::NichtGefunden.art(), FehlerArt::NichtGefunden);
        assert_eq!(ClientError::Konflikt.art(), FehlerArt::Konflikt);
        assert_eq!(
            ClientError::ZuGross { limit: Some(1) }.art(),
            FehlerArt::Kapazitaet
        );
        assert_eq!(
            ClientError::UngueltigerCode(CodeFehler::GleicheWoerter).art(),
            FehlerArt::Eingabe
        );
    }

    #[test]
    fn limit_in_meldung() {
        let text = ClientError::ZuGross {
            limit: Some(1_048_576),
        }
        .to_string();
        assert!(text.contains("1048576"));
        assert!(!ClientError::ZuGross { limit: None }.to_string().contains("Maximum"));
    }
}
