//! REST-Handler fuer `/v1/transfers/:id`
//!
//! Ungueltige Identifier beantworten alle Handler mit derselben 404 wie eine
//! unbekannte Route; der Store wird dabei nicht beruehrt.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use bytes::BytesMut;
use futures_util::StreamExt;

use hushdrop_core::{GeloeschtAntwort, GespeichertAntwort, RelayId, META_HEADER};
use hushdrop_observability::metrics::ergebnis;

use crate::error::{RelayError, RelayResult};
use crate::rest::middleware::{deklarierte_laenge, meta_aus_headers, nicht_gefunden};
use crate::rest::RelayState;

/// PUT /v1/transfers/:id – Envelope ablegen
///
/// Der Body wird gestreamt; sobald die laufende Summe das Maximum
/// ueberschreitet, wird mit 413 abgebrochen. Nur ein vollstaendig
/// empfangener Body erreicht den Store.
pub async fn speichern(
    State(state): State<RelayState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let Ok(id) = RelayId::parse(&id) else {
        return nicht_gefunden();
    };

    match speichern_intern(&state, id, &headers, body).await {
        Ok(antwort) => (StatusCode::CREATED, Json(antwort)).into_response(),
        Err(e) => {
            // Vom Handler abgelehnte Uploads erreichen den Store nie
            if let (RelayError::ZuGross { .. }, Some(m)) = (&e, &state.metriken) {
                m.transfers_zaehlen(ergebnis::ZU_GROSS, 1);
            }
            e.into_response()
        }
    }
}

async fn speichern_intern(
    state: &RelayState,
    id: RelayId,
    headers: &HeaderMap,
    body: Body,
) -> RelayResult<GespeichertAntwort> {
    if state.store.ist_beendet() {
        return Err(RelayError::Beendet);
    }

    let limit = state.store.konfig().max_groesse_bytes;
    let meta = meta_aus_headers(headers)?;

    // Deklarierte Groesse vorab pruefen, der Body wird dann gar nicht gelesen
    let deklariert = deklarierte_laenge(headers);
    if let Some(groesse) = deklariert.filter(|&g| g > limit) {
        tracing::debug!(relay_id = %id.kurz(), groesse, limit, "Upload vorab abgelehnt");
        return Err(RelayError::ZuGross { groesse, limit });
    }

    let mut puffer = BytesMut::with_capacity(deklariert.unwrap_or(0));
    let mut stream = body.into_data_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| {
            tracing::debug!(relay_id = %id.kurz(), fehler = %e, "Upload abgebrochen");
            RelayError::UploadAbgebrochen(e.to_string())
        })?;

        let laufend = puffer.len() + chunk.len();
        if laufend > limit {
            tracing::debug!(relay_id = %id.kurz(), laufend, limit, "Upload waehrend Streaming abgelehnt");
            return Err(RelayError::ZuGross {
                groesse: laufend,
                limit,
            });
        }
        puffer.extend_from_slice(&chunk);
    }

    let groesse = puffer.len();
    let antwort = GespeichertAntwort {
        id: id.to_string(),
        groesse,
    };
    state.store.put(id, puffer.freeze(), meta)?;
    Ok(antwort)
}

/// GET /v1/transfers/:id – Envelope abholen (einmalig)
pub async fn abholen(State(state): State<RelayState>, Path(id): Path<String>) -> Response {
    let Ok(id) = RelayId::parse(&id) else {
        return nicht_gefunden();
    };
    let Some(eintrag) = state.store.get(&id) else {
        return nicht_gefunden();
    };

    let mut response = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/octet-stream")],
        Body::from(eintrag.daten),
    )
        .into_response();
    if let Some(wert) = eintrag.meta.and_then(|m| HeaderValue::from_str(&m).ok()) {
        response.headers_mut().insert(META_HEADER, wert);
    }
    response
}

/// DELETE /v1/transfers/:id – Envelope verwerfen
pub async fn loeschen(State(state): State<RelayState>, Path(id): Path<String>) -> Response {
    let Ok(id) = RelayId::parse(&id) else {
        return nicht_gefunden();
    };
    if state.store.delete(&id) {
        (StatusCode::OK, Json(GeloeschtAntwort { geloescht: true })).into_response()
    } else {
        nicht_gefunden()
    }
}
