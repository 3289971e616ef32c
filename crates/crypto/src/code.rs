//! Transfer-Codes
//!
//! Ein Code besteht aus einer Zahl in [1, 999] und zwei verschiedenen
//! Woertern aus der gemeinsamen Wortliste, geschrieben als
//! `zahl-wort-wort`. Er ist das einzige Geheimnis, das Sender und
//! Empfaenger austauschen.
//!
//! ## Entropie
//! ```text
//! 999 * 512 * 511 ≈ 261 Mio. Kombinationen
//! ```
//! Das ist bewusst wenig; die iterierte Ableitung in `kdf` macht
//! Offline-Brute-Force teuer.

use rand::rngs::OsRng;
use rand::Rng;

use crate::error::CodeFehler;
use crate::wortliste::{self, WORTLISTE};

/// Kleinste erlaubte Code-Nummer
pub const NUMMER_MIN: u16 = 1;
/// Groesste erlaubte Code-Nummer
pub const NUMMER_MAX: u16 = 999;

/// Menschlich austauschbarer Transfer-Code
///
/// Invarianten: `nummer` liegt in [1, 999], beide Woerter stammen aus
/// [`WORTLISTE`] und sind verschieden.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransferCode {
    nummer: u16,
    woerter: [&'static str; 2],
}

impl TransferCode {
    pub fn nummer(&self) -> u16 {
        self.nummer
    }

    pub fn woerter(&self) -> [&'static str; 2] {
        self.woerter
    }
}

impl std::fmt::Display for TransferCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.nummer, self.woerter[0], self.woerter[1])
    }
}

// Der Code ist geheim und gehoert nicht in Logs.
impl std::fmt::Debug for TransferCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TransferCode([REDACTED])")
    }
}

impl std::str::FromStr for TransferCode {
    type Err = CodeFehler;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s)
    }
}

/// Erzeugt einen neuen zufaelligen Code aus dem Betriebssystem-RNG
///
/// Die Woerter werden gleichverteilt gezogen; bei Kollision wird das
/// zweite Wort neu gezogen.
pub fn generate_code() -> TransferCode {
    let mut rng = OsRng;
    let nummer = rng.gen_range(NUMMER_MIN..=NUMMER_MAX);
    let erstes = WORTLISTE[rng.gen_range(0..WORTLISTE.len())];
    let mut zweites = WORTLISTE[rng.gen_range(0..WORTLISTE.len())];
    while zweites == erstes {
        zweites = WORTLISTE[rng.gen_range(0..WORTLISTE.len())];
    }
    TransferCode {
        nummer,
        woerter: [erstes, zweites],
    }
}

/// Parst einen Code der Form `<ziffern>-<wort>-<wort>`
///
/// Panict nie. Fuehrende Nullen sind erlaubt (`007-a-b`) und werden
/// normalisiert, sodass beide Schreibweisen dieselben Schluessel ergeben.
pub fn parse_code(text: &str) -> Result<TransferCode, CodeFehler> {
    let mut teile = text.split('-');
    let (Some(zahl), Some(erstes), Some(zweites), None) =
        (teile.next(), teile.next(), teile.next(), teile.next())
    else {
        return Err(CodeFehler::Format);
    };

    if zahl.is_empty() || zahl.len() > 3 || !zahl.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodeFehler::Format);
    }
    let nummer: u16 = zahl.parse().map_err(|_| CodeFehler::Format)?;
    if !(NUMMER_MIN..=NUMMER_MAX).contains(&nummer) {
        return Err(CodeFehler::NummerAusserhalb);
    }

    let erstes = wort_nachschlagen(erstes)?;
    let zweites = wort_nachschlagen(zweites)?;
    if erstes == zweites {
        return Err(CodeFehler::GleicheWoerter);
    }

    Ok(TransferCode {
        nummer,
        woerter: [erstes, zweites],
    })
}

/// Prueft Zeichensatz und Listen-Zugehoerigkeit, gibt den Listeneintrag zurueck
fn wort_nachschlagen(wort: &str) -> Result<&'static str, CodeFehler> {
    if wort.is_empty() || !wort.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(CodeFehler::Format);
    }
    wortliste::nachschlagen(wort).ok_or_else(|| CodeFehler::UnbekanntesWort(wort.to_owned()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
