//! Fehlerklassen fuer Hushdrop
//!
//! `FehlerArt` ist die gemeinsame Taxonomie aller Crates. Jedes Crate hat
//! einen eigenen Fehler-Enum und ordnet ihn ueber `art()` einer Klasse zu.
//! Das Relay bildet die Klassen auf HTTP-Statuscodes ab.

use thiserror::Error;

/// Klassifizierung eines Fehlers, unabhaengig vom Crate in dem er entsteht
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FehlerArt {
    /// Ungueltige Eingabe (Code, Pfad, Route) – lokal erkannt, ohne Seiteneffekte
    Eingabe,
    /// Authentifizierte Entschluesselung fehlgeschlagen
    Integritaet,
    /// Payload groesser als das konfigurierte Maximum
    Kapazitaet,
    /// Identifier ist bereits belegt
    Konflikt,
    /// Nie vorhanden, bereits abgeholt oder abgelaufen (bewusst nicht unterschieden)
    NichtGefunden,
    /// Netzwerk- oder Relay-Fehler ausserhalb des Kerns
    Transport,
    /// Sonstiger interner Fehler
    Intern,
}

impl FehlerArt {
    /// HTTP-Statuscode fuer diese Fehlerklasse
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Eingabe => 400,
            Self::Integritaet => 422,
            Self::Kapazitaet => 413,
            Self::Konflikt => 409,
            Self::NichtGefunden => 404,
            Self::Transport => 502,
            Self::Intern => 500,
        }
    }

    /// Gibt true zurueck wenn der Fehler vom Aufrufer behoben werden kann
    /// (anderer Code, kleinere Datei, ...) statt einfach zu wiederholen.
    pub fn ist_eingabe_bedingt(&self) -> bool {
        matches!(
            self,
            Self::Eingabe | Self::Kapazitaet | Self::Konflikt | Self::Integritaet
        )
    }
}

/// Ein String ist kein gueltiger Relay-Identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Ungueltiger Relay-Identifier (erwartet {erwartet} Hex-Zeichen in Kleinschreibung)")]
pub struct UngueltigeRelayId {
    pub erwartet: usize,
}
