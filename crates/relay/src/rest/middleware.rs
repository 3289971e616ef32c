//! Hilfsfunktionen fuer Header-Auswertung und Fehlerantworten

use axum::{
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};

use hushdrop_core::META_HEADER;

use crate::error::RelayError;

/// Maximale Laenge des Metadaten-Headers in Bytes
pub const MAX_META_LAENGE: usize = 1024;

/// Einheitliche 404-Antwort fuer unbekannte Routen und ungueltige Identifier
pub fn nicht_gefunden() -> Response {
    RelayError::NichtGefunden.into_response()
}

/// Liest den deklarierten `Content-Length`, falls vorhanden und lesbar
pub fn deklarierte_laenge(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}

/// Liest den optionalen Metadaten-Header
///
/// Der Inhalt bleibt opak; geprueft werden nur Laenge und Darstellbarkeit.
pub fn meta_aus_headers(headers: &HeaderMap) -> Result<Option<String>, RelayError> {
    let Some(wert) = headers.get(META_HEADER) else {
        return Ok(None);
    };
    if wert.len() > MAX_META_LAENGE {
        return Err(RelayError::UngueltigeEingabe(format!(
            "{META_HEADER} ist laenger als {MAX_META_LAENGE} Bytes"
        )));
    }
    let text = wert.to_str().map_err(|_| {
        RelayError::UngueltigeEingabe(format!("{META_HEADER} enthaelt ungueltige Zeichen"))
    })?;
    Ok(Some(text.to_owned()))
}
