//! Fehlertypen fuer das Hushdrop Relay

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use hushdrop_core::{FehlerAntwort, FehlerArt};
use thiserror::Error;

/// Alle moeglichen Fehler im Relay-Crate
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Payload zu gross: mindestens {groesse} Bytes, erlaubt sind {limit} Bytes")]
    ZuGross { groesse: usize, limit: usize },

    #[error("Identifier ist bereits belegt")]
    Duplikat,

    /// Nie vorhanden, bereits abgeholt und abgelaufen sehen von aussen gleich aus.
    #[error("Nicht gefunden oder bereits abgeholt")]
    NichtGefunden,

    #[error("Ungueltige Eingabe: {0}")]
    UngueltigeEingabe(String),

    #[error("Upload abgebrochen: {0}")]
    UploadAbgebrochen(String),

    #[error("Relay wird heruntergefahren")]
    Beendet,

    #[error("Ungueltige Konfiguration: {0}")]
    Konfiguration(String),
}

pub type RelayResult<T> = Result<T, RelayError>;

impl RelayError {
    /// Fehlerklasse nach der gemeinsamen Taxonomie
    pub fn art(&self) -> FehlerArt {
        match self {
            Self::ZuGross { .. } => FehlerArt::Kapazitaet,
            Self::Duplikat => FehlerArt::Konflikt,
            Self::NichtGefunden => FehlerArt::NichtGefunden,
            Self::UngueltigeEingabe(_) | Self::UploadAbgebrochen(_) => FehlerArt::Eingabe,
            Self::Beendet | Self::Konfiguration(_) => FehlerArt::Intern,
        }
    }

    /// HTTP-Statuscode fuer REST-Fehler
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Beendet => StatusCode::SERVICE_UNAVAILABLE,
            other => StatusCode::from_u16(other.art().http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let mut body = FehlerAntwort::neu(status.as_u16(), self.to_string());
        if let Self::ZuGross { limit, .. } = self {
            body = body.mit_limit(limit);
        }

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            // Rest des Uploads wird nicht gelesen, Verbindung schliessen
            response
                .headers_mut()
                .insert(header::CONNECTION, HeaderValue::from_static("close"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuscodes() {
        assert_eq!(
            RelayError::ZuGross { groesse: 2, limit: 1 }.http_status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(RelayError::Duplikat.http_status(), StatusCode::CONFLICT);
        assert_eq!(RelayError::NichtGefunden.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(RelayError::Beendet.http_status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            RelayError::UngueltigeEingabe("x".into()).http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn kapazitaet_und_konflikt_getrennt() {
        assert_eq!(
            RelayError::ZuGross { groesse: 2, limit: 1 }.art(),
            FehlerArt::Kapazitaet
        );
        assert_eq!(RelayError::Duplikat.art(), FehlerArt::Konflikt);
    }

    #[test]
    fn zu_gross_schliesst_verbindung() {
        let response = RelayError::ZuGross { groesse: 11, limit: 10 }.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            response.headers().get(header::CONNECTION).unwrap(),
            "close"
        );
    }
}
