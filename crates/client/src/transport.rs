//! Transport zum Relay
//!
//! Der Client kennt vom Relay nur den Wire-Vertrag. [`RelayTransport`]
//! kapselt diesen als blockierenden Request/Response-Aufruf, damit der
//! Ablauf in [`crate::flow`] ohne Netzwerk getestet werden kann.

use std::time::Duration;

use reqwest::{blocking::Client, StatusCode};

use hushdrop_core::{FehlerAntwort, RelayId, META_HEADER};

use crate::error::{ClientError, ClientResult};

/// Standard-Adresse eines lokalen Relays
pub const STANDARD_RELAY_URL: &str = "http://127.0.0.1:8787";

/// Ergebnis einer erfolgreichen Abholung
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abholung {
    pub envelope: Vec<u8>,
    pub meta: Option<String>,
}

/// Blockierender Zugriff auf einen Relay
pub trait RelayTransport {
    /// Legt einen Envelope unter `id` ab
    ///
    /// `ClientError::Konflikt` wenn `id` bereits belegt ist,
    /// `ClientError::ZuGross` wenn der Relay die Groesse ablehnt.
    fn speichern(&self, id: &RelayId, envelope: &[u8], meta: Option<&str>) -> ClientResult<()>;

    /// Holt den Envelope unter `id` ab; danach ist er auf dem Relay geloescht
    ///
    /// `ClientError::NichtGefunden` fasst nie vorhanden, abgelaufen und
    /// bereits abgeholt zusammen.
    fn abholen(&self, id: &RelayId) -> ClientResult<Abholung>;

    /// Verwirft den Envelope unter `id`; `false` wenn nichts vorhanden war
    fn loeschen(&self, id: &RelayId) -> ClientResult<bool>;
}

/// HTTP-Transport ueber `reqwest::blocking`
///
/// Darf nicht aus einem laufenden Tokio-Kontext heraus benutzt werden.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    basis_url: String,
    client: Client,
}

impl HttpTransport {
    pub fn neu(basis_url: &str) -> ClientResult<Self> {
        Self::mit_timeout(basis_url, Duration::from_secs(30))
    }

    pub fn mit_timeout(basis_url: &str, timeout: Duration) -> ClientResult<Self> {
        let basis_url = basis_url.trim_end_matches('/');
        if !(basis_url.starts_with("http://") || basis_url.starts_with("https://")) {
            return Err(ClientError::Eingabe(format!(
                "Relay-URL muss mit http:// oder https:// beginnen: {basis_url}"
            )));
        }
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hushdrop/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            basis_url: basis_url.to_owned(),
            client,
        })
    }

    pub fn basis_url(&self) -> &str {
        &self.basis_url
    }

    fn url(&self, id: &RelayId) -> String {
        format!("{}/v1/transfers/{}", self.basis_url, id)
    }
}

impl RelayTransport for HttpTransport {
    fn speichern(&self, id: &RelayId, envelope: &[u8], meta: Option<&str>) -> ClientResult<()> {
        let mut anfrage = self.client.put(self.url(id)).body(envelope.to_vec());
        if let Some(meta) = meta {
            anfrage = anfrage.header(META_HEADER, meta);
        }
        let antwort = anfrage.send()?;
        let status = antwort.status();
        tracing::debug!(relay_id = %id.kurz(), status = status.as_u16(), "PUT beantwortet");

        if status == StatusCode::CREATED {
            return Ok(());
        }
        let body = antwort.bytes().unwrap_or_default();
        Err(fehler_aus_antwort(status, &body))
    }

    fn abholen(&self, id: &RelayId) -> ClientResult<Abholung> {
        let antwort = self.client.get(self.url(id)).send()?;
        let status = antwort.status();
        tracing::debug!(relay_id = %id.kurz(), status = status.as_u16(), "GET beantwortet");

        if status != StatusCode::OK {
            let body = antwort.bytes().unwrap_or_default();
            return Err(fehler_aus_antwort(status, &body));
        }
        let meta = antwort
            .headers()
            .get(META_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let envelope = antwort.bytes()?.to_vec();
        Ok(Abholung { envelope, meta })
    }

    fn loeschen(&self, id: &RelayId) -> ClientResult<bool> {
        let antwort = self.client.delete(self.url(id)).send()?;
        match antwort.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => {
                let body = antwort.bytes().unwrap_or_default();
                Err(fehler_aus_antwort(status, &body))
            }
        }
    }
}

/// Ordnet eine Fehlerantwort des Relays einer Fehlerklasse zu
pub fn fehler_aus_antwort(status: StatusCode, body: &[u8]) -> ClientError {
    let detail = serde_json::from_slice::<FehlerAntwort>(body).ok();
    match status {
        StatusCode::CONFLICT => ClientError::Konflikt,
        StatusCode::PAYLOAD_TOO_LARGE => ClientError::ZuGross {
            limit: detail.and_then(|d| d.error.limit),
        },
        StatusCode::NOT_FOUND => ClientError::NichtGefunden,
        _ => {
            let nachricht = detail
                .map(|d| d.error.message)
                .unwrap_or_else(|| "keine Details".into());
            ClientError::Transport(format!("Relay antwortete mit {status}: {nachricht}"))
        }
    }
}
