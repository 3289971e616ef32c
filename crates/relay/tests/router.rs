//! Integrationstests fuer den Relay-Router (ohne Netzwerk, via `oneshot`)

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use bytes::Bytes;
use hushdrop_core::{FehlerAntwort, GespeichertAntwort, LivenessAntwort, RelayId, META_HEADER};
use hushdrop_observability::RelayMetrics;
use hushdrop_relay::{relay_router, RelayKonfig, RelayState, TransferStore};
use tower::ServiceExt;

fn id(n: u8) -> RelayId {
    RelayId::aus_bytes(&[n; 32])
}

fn pfad(id: &RelayId) -> String {
    format!("/v1/transfers/{id}")
}

fn app_mit(konfig: RelayKonfig) -> (Router, Arc<TransferStore>) {
    let store = TransferStore::neu(konfig);
    (relay_router(RelayState::neu(store.clone())), store)
}

fn app() -> (Router, Arc<TransferStore>) {
    app_mit(RelayKonfig::default())
}

async fn senden(app: &Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Bytes) {
    let antwort = app.clone().oneshot(req).await.unwrap();
    let status = antwort.status();
    let headers = antwort.headers().clone();
    let body = to_bytes(antwort.into_body(), usize::MAX).await.unwrap();
    (status, headers, body)
}

fn put(pfad: &str, daten: impl Into<Body>) -> Request<Body> {
    Request::put(pfad).body(daten.into()).unwrap()
}

fn put_mit_laenge(pfad: &str, daten: Vec<u8>) -> Request<Body> {
    Request::put(pfad)
        .header(header::CONTENT_LENGTH, daten.len())
        .body(Body::from(daten))
        .unwrap()
}

fn get(pfad: &str) -> Request<Body> {
    Request::get(pfad).body(Body::empty()).unwrap()
}

fn delete(pfad: &str) -> Request<Body> {
    Request::delete(pfad).body(Body::empty()).unwrap()
}

// ---------------------------------------------------------------------------
// Speichern / Abholen
// ---------------------------------------------------------------------------

#[tokio::test]
async fn speichern_und_einmalig_abholen() {
    let (app, _) = app();
    let p = pfad(&id(1));

    let (status, _, body) = senden(&app, put(&p, "envelope-bytes")).await;
    assert_eq!(status, StatusCode::CREATED);
    let antwort: GespeichertAntwort = serde_json::from_slice(&body).unwrap();
    assert_eq!(antwort.id, id(1).to_string());
    assert_eq!(antwort.groesse, 14);

    let (status, headers, body) = senden(&app, get(&p)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "application/octet-stream");
    assert_eq!(&body[..], b"envelope-bytes");

    let (status, _, body) = senden(&app, get(&p)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let fehler: FehlerAntwort = serde_json::from_slice(&body).unwrap();
    assert_eq!(fehler.error.code, 404);
}

#[tokio::test]
async fn binaerdaten_bleiben_unveraendert() {
    let (app, _) = app();
    let p = pfad(&id(2));
    let daten: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

    let (status, _, _) = senden(&app, put(&p, daten.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, _, body) = senden(&app, get(&p)).await;
    assert_eq!(&body[..], &daten[..]);
}

#[tokio::test]
async fn duplikat_ergibt_409() {
    let (app, store) = app();
    let p = pfad(&id(3));

    assert_eq!(senden(&app, put(&p, "a")).await.0, StatusCode::CREATED);
    let (status, _, body) = senden(&app, put(&p, "b")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let fehler: FehlerAntwort = serde_json::from_slice(&body).unwrap();
    assert_eq!(fehler.error.code, 409);
    assert_eq!(fehler.error.limit, None);

    assert_eq!(&store.get(&id(3)).unwrap().daten[..], b"a");
}

#[tokio::test]
async fn metadaten_werden_zurueckgegeben() {
    let (app, _) = app();
    let p = pfad(&id(4));
    let req = Request::put(&p)
        .header(META_HEADER, "v1;gz")
        .body(Body::from("x"))
        .unwrap();
    assert_eq!(senden(&app, req).await.0, StatusCode::CREATED);

    let (_, headers, _) = senden(&app, get(&p)).await;
    assert_eq!(headers[META_HEADER], "v1;gz");
}

#[tokio::test]
async fn zu_lange_metadaten_ergeben_400() {
    let (app, store) = app();
    let req = Request::put(pfad(&id(5)))
        .header(META_HEADER, "m".repeat(1025))
        .body(Body::from("x"))
        .unwrap();
    assert_eq!(senden(&app, req).await.0, StatusCode::BAD_REQUEST);
    assert!(!store.has(&id(5)));
}

// ---------------------------------------------------------------------------
// Groessengrenze
// ---------------------------------------------------------------------------

#[tokio::test]
async fn standardgrenze_exakt() {
    let (app, store) = app();

    let (status, _, _) = senden(&app, put_mit_laenge(&pfad(&id(6)), vec![7u8; 1_048_576])).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, headers, body) =
        senden(&app, put_mit_laenge(&pfad(&id(7)), vec![7u8; 1_048_577])).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(headers[header::CONNECTION], "close");
    let fehler: FehlerAntwort = serde_json::from_slice(&body).unwrap();
    assert_eq!(fehler.error.limit, Some(1_048_576));
    assert!(!store.has(&id(7)));
}

#[tokio::test]
async fn grenze_wird_beim_streaming_durchgesetzt() {
    let (app, store) = app_mit(RelayKonfig::aus_millis(10, 60_000, 60_000));

    // Ohne Content-Length, in Stuecken
    let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
        Ok(Bytes::from_static(b"123456")),
        Ok(Bytes::from_static(b"78901")),
        Ok(Bytes::from_static(b"nie gelesen")),
    ];
    let body = Body::from_stream(futures_util::stream::iter(chunks));
    let (status, _, body) = senden(&app, put(&pfad(&id(8)), body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    let fehler: FehlerAntwort = serde_json::from_slice(&body).unwrap();
    assert_eq!(fehler.error.limit, Some(10));
    assert!(!store.has(&id(8)));
}

#[tokio::test]
async fn gestreamter_upload_an_der_grenze_angenommen() {
    let (app, store) = app_mit(RelayKonfig::aus_millis(10, 60_000, 60_000));
    let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
        Ok(Bytes::from_static(b"12345")),
        Ok(Bytes::from_static(b"67890")),
    ];
    let body = Body::from_stream(futures_util::stream::iter(chunks));
    assert_eq!(senden(&app, put(&pfad(&id(9)), body)).await.0, StatusCode::CREATED);
    assert_eq!(store.get(&id(9)).unwrap().groesse(), 10);
}

#[tokio::test]
async fn abgebrochener_upload_speichert_nichts() {
    let (app, store) = app();
    let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
        Ok(Bytes::from_static(b"anfang")),
        Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionReset,
            "Verbindung getrennt",
        )),
    ];
    let body = Body::from_stream(futures_util::stream::iter(chunks));
    let (status, _, _) = senden(&app, put(&pfad(&id(10)), body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!store.has(&id(10)));
    assert_eq!(store.count(), 0);
}

// ---------------------------------------------------------------------------
// Identifier und Routen
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ungueltige_ids_wie_unbekannte_route() {
    let (app, store) = app();
    let (_, _, fallback_body) = senden(&app, get("/gibt/es/nicht")).await;

    let ungueltig = [
        "abc".to_string(),
        "A".repeat(64),
        "g".repeat(64),
        "a".repeat(65),
    ];
    for id_text in &ungueltig {
        let p = format!("/v1/transfers/{id_text}");
        for req in [put(&p, "x"), get(&p), delete(&p)] {
            let (status, _, body) = senden(&app, req).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{id_text}");
            assert_eq!(body, fallback_body);
        }
    }
    assert_eq!(store.count(), 0);
}

#[tokio::test]
async fn head_laesst_eintrag_liegen() {
    let (app, store) = app();
    let p = pfad(&id(30));
    let (_, _, fallback_body) = senden(&app, get("/gibt/es/nicht")).await;

    let (status, _, _) = senden(&app, put(&p, "geheim")).await;
    assert_eq!(status, StatusCode::CREATED);

    let head = Request::head(&p).body(Body::empty()).unwrap();
    let (status, _, _) = senden(&app, head).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(store.has(&id(30)));

    let (status, _, body) = senden(&app, get(&p)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], b"geheim");

    let (status, _, body) = senden(&app, get(&p)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, fallback_body);
}

#[tokio::test]
async fn andere_methoden_wie_unbekannte_route() {
    let (app, store) = app();
    let (_, _, fallback_body) = senden(&app, get("/gibt/es/nicht")).await;

    let gueltig = pfad(&id(31));
    let ungueltig = format!("/v1/transfers/{}", "Z".repeat(64));
    for p in [&gueltig, &ungueltig] {
        for methode in ["POST", "PATCH"] {
            let req = Request::builder()
                .method(methode)
                .uri(p.as_str())
                .body(Body::from("x"))
                .unwrap();
            let (status, _, body) = senden(&app, req).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{methode} {p}");
            assert_eq!(body, fallback_body);
        }
    }
    assert_eq!(store.count(), 0);
}

#[tokio::test]
async fn loeschen() {
    let (app, _) = app();
    let p = pfad(&id(11));
    assert_eq!(senden(&app, delete(&p)).await.0, StatusCode::NOT_FOUND);

    senden(&app, put(&p, "x")).await;
    let (status, _, body) = senden(&app, delete(&p)).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["geloescht"], true);

    assert_eq!(senden(&app, get(&p)).await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_zaehlt_eintraege() {
    let (app, _) = app();
    senden(&app, put(&pfad(&id(12)), "a")).await;
    senden(&app, put(&pfad(&id(13)), "b")).await;

    let (status, _, body) = senden(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    let liveness: LivenessAntwort = serde_json::from_slice(&body).unwrap();
    assert_eq!(liveness.status, "ok");
    assert_eq!(liveness.eintraege, 2);
}

#[tokio::test]
async fn heruntergefahrener_store_ergibt_503() {
    let (app, store) = app();
    store.shutdown();
    assert_eq!(
        senden(&app, put(&pfad(&id(14)), "x")).await.0,
        StatusCode::SERVICE_UNAVAILABLE
    );
}

// ---------------------------------------------------------------------------
// Metriken
// ---------------------------------------------------------------------------

#[tokio::test]
async fn metrics_ohne_metriken_nicht_vorhanden() {
    let (app, _) = app();
    assert_eq!(senden(&app, get("/metrics")).await.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn metrics_mit_metriken() {
    let metriken = RelayMetrics::neu().unwrap();
    let store = TransferStore::mit_metriken(
        RelayKonfig::aus_millis(4, 60_000, 60_000),
        metriken.clone(),
    );
    let app = relay_router(RelayState::neu(store).mit_metriken(metriken));

    senden(&app, put(&pfad(&id(15)), "ok")).await;
    senden(&app, put_mit_laenge(&pfad(&id(16)), vec![0u8; 5])).await;

    let (status, _, body) = senden(&app, get("/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("hushdrop_eintraege 1"));
    assert!(text.contains("hushdrop_transfers_total{ergebnis=\"gespeichert\"} 1"));
    assert!(text.contains("hushdrop_transfers_total{ergebnis=\"zu_gross\"} 1"));
    assert!(text.contains("hushdrop_http_requests_total"));
}
