//! Kurzlebiger Einmal-Speicher fuer verschluesselte Transfers
//!
//! Ein einziger Mutex schuetzt die gesamte Map. Dadurch sind die
//! Pruefen-dann-Handeln-Sequenzen in `put` (existiert? dann einfuegen) und
//! `get` (existiert? dann entfernen und zurueckgeben) unteilbar, auch bei
//! echter Parallelitaet.
//!
//! ## Lebenszyklus pro Identifier
//! ```text
//! absent -> gespeichert -> { abgeholt | abgelaufen | geloescht } -> absent
//! ```
//! Nach dem Entfernen ist ein Identifier nicht von einem nie benutzten zu
//! unterscheiden und darf erneut belegt werden.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use bytes::Bytes;
use parking_lot::Mutex;
use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};

use hushdrop_core::RelayId;
use hushdrop_observability::{metrics::ergebnis, RelayMetrics};

use crate::error::{RelayError, RelayResult};
use crate::konfig::RelayKonfig;

/// Ein gespeicherter Transfer
#[derive(Debug, Clone)]
pub struct TransferEntry {
    /// Opaker Envelope, wird nie inspiziert
    pub daten: Bytes,
    /// Optionale, ebenfalls opake Metadaten des Senders
    pub meta: Option<String>,
    pub erstellt: Instant,
}

impl TransferEntry {
    pub fn groesse(&self) -> usize {
        self.daten.len()
    }

    fn ist_abgelaufen(&self, jetzt: Instant, ttl: std::time::Duration) -> bool {
        jetzt.saturating_duration_since(self.erstellt) >= ttl
    }
}

/// In-Memory Transfer-Store mit TTL und destruktivem Lesen
pub struct TransferStore {
    konfig: RelayKonfig,
    /// relay_id -> Eintrag
    eintraege: Mutex<HashMap<RelayId, TransferEntry>>,
    sweep_task: Mutex<Option<JoinHandle<()>>>,
    beendet: AtomicBool,
    metriken: Option<RelayMetrics>,
}

impl TransferStore {
    /// Erstellt einen leeren Store ohne Hintergrund-Sweep
    pub fn neu(konfig: RelayKonfig) -> Arc<Self> {
        Arc::new(Self::bauen(konfig, None))
    }

    /// Erstellt einen leeren Store, der seine Ergebnisse in `metriken` zaehlt
    pub fn mit_metriken(konfig: RelayKonfig, metriken: RelayMetrics) -> Arc<Self> {
        Arc::new(Self::bauen(konfig, Some(metriken)))
    }

    /// Erstellt einen Store und startet den periodischen Sweep
    ///
    /// Muss innerhalb einer Tokio-Runtime aufgerufen werden.
    pub fn neu_mit_sweep(konfig: RelayKonfig) -> Arc<Self> {
        Self::sweep_starten(Self::neu(konfig))
    }

    fn bauen(konfig: RelayKonfig, metriken: Option<RelayMetrics>) -> Self {
        Self {
            konfig,
            eintraege: Mutex::new(HashMap::new()),
            sweep_task: Mutex::new(None),
            beendet: AtomicBool::new(false),
            metriken,
        }
    }

    /// Startet den Sweep-Task fuer einen bestehenden Store
    ///
    /// Der Task haelt nur eine schwache Referenz: wird der letzte `Arc`
    /// verworfen, endet er beim naechsten Tick von selbst.
    pub fn sweep_starten(store: Arc<Self>) -> Arc<Self> {
        if store.ist_beendet() {
            return store;
        }
        if store.konfig.sweep_intervall.is_zero() {
            tracing::warn!("Sweep-Intervall ist 0, Hintergrund-Sweep deaktiviert");
            return store;
        }

        let schwach = Arc::downgrade(&store);
        let intervall = store.konfig.sweep_intervall;
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(intervall);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // Erster Tick feuert sofort
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(store) = schwach.upgrade() else {
                    break;
                };
                let entfernt = store.sweep();
                if entfernt > 0 {
                    tracing::debug!(entfernt, "Abgelaufene Transfers bereinigt");
                }
            }
            tracing::trace!("Sweep-Task beendet");
        });

        if let Some(alt) = store.sweep_task.lock().replace(handle) {
            alt.abort();
        }
        store
    }

    pub fn konfig(&self) -> &RelayKonfig {
        &self.konfig
    }

    pub fn ist_beendet(&self) -> bool {
        self.beendet.load(Ordering::Acquire)
    }

    /// Nimmt einen Transfer an
    ///
    /// Abgelehnt wird wenn die tatsaechliche Groesse das Maximum
    /// ueberschreitet oder unter `id` bereits ein lebender Eintrag liegt.
    /// Ein abgelaufener, noch nicht weggeraeumter Eintrag blockiert nicht.
    pub fn put(&self, id: RelayId, daten: Bytes, meta: Option<String>) -> RelayResult<()> {
        if self.ist_beendet() {
            return Err(RelayError::Beendet);
        }

        let groesse = daten.len();
        if groesse > self.konfig.max_groesse_bytes {
            self.zaehlen(ergebnis::ZU_GROSS);
            return Err(RelayError::ZuGross {
                groesse,
                limit: self.konfig.max_groesse_bytes,
            });
        }

        let jetzt = Instant::now();
        let mut eintraege = self.eintraege.lock();
        // shutdown() kann zwischen erster Pruefung und Lock gelaufen sein
        if self.ist_beendet() {
            return Err(RelayError::Beendet);
        }
        match eintraege.get(&id).map(|e| e.ist_abgelaufen(jetzt, self.konfig.ttl)) {
            Some(false) => {
                drop(eintraege);
                self.zaehlen(ergebnis::DUPLIKAT);
                return Err(RelayError::Duplikat);
            }
            // Abgelaufen, aber noch nicht weggeraeumt: wird ersetzt
            Some(true) => self.zaehlen(ergebnis::ABGELAUFEN),
            None => {}
        }

        tracing::debug!(relay_id = %id.kurz(), groesse, "Transfer gespeichert");
        eintraege.insert(
            id,
            TransferEntry {
                daten,
                meta,
                erstellt: jetzt,
            },
        );
        drop(eintraege);

        self.zaehlen(ergebnis::GESPEICHERT);
        Ok(())
    }

    /// Destruktives Lesen: entfernt den Eintrag und gibt ihn zurueck
    ///
    /// Von mehreren gleichzeitigen Aufrufern fuer dieselbe `id` erhaelt genau
    /// einer den Eintrag. Ein abgelaufener Eintrag verhaelt sich wie ein
    /// fehlender und wird dabei gleich entfernt.
    pub fn get(&self, id: &RelayId) -> Option<TransferEntry> {
        let jetzt = Instant::now();
        let eintrag = self.eintraege.lock().remove(id)?;

        if eintrag.ist_abgelaufen(jetzt, self.konfig.ttl) {
            self.zaehlen(ergebnis::ABGELAUFEN);
            return None;
        }

        tracing::debug!(relay_id = %id.kurz(), groesse = eintrag.groesse(), "Transfer abgeholt");
        self.zaehlen(ergebnis::ABGEHOLT);
        Some(eintrag)
    }

    /// Entfernt einen Eintrag unabhaengig von seinem Alter
    pub fn delete(&self, id: &RelayId) -> bool {
        let entfernt = self.eintraege.lock().remove(id).is_some();
        if entfernt {
            tracing::debug!(relay_id = %id.kurz(), "Transfer geloescht");
            self.zaehlen(ergebnis::GELOESCHT);
        }
        entfernt
    }

    /// Gibt `true` zurueck wenn unter `id` ein lebender Eintrag liegt
    pub fn has(&self, id: &RelayId) -> bool {
        let jetzt = Instant::now();
        self.eintraege
            .lock()
            .get(id)
            .is_some_and(|e| !e.ist_abgelaufen(jetzt, self.konfig.ttl))
    }

    /// Anzahl lebender (nicht abgelaufener) Eintraege
    pub fn count(&self) -> usize {
        let jetzt = Instant::now();
        self.eintraege
            .lock()
            .values()
            .filter(|e| !e.ist_abgelaufen(jetzt, self.konfig.ttl))
            .count()
    }

    /// Entfernt alle abgelaufenen Eintraege und gibt deren Anzahl zurueck
    pub fn sweep(&self) -> usize {
        let jetzt = Instant::now();
        let ttl = self.konfig.ttl;
        let mut eintraege = self.eintraege.lock();
        let vorher = eintraege.len();
        eintraege.retain(|_, e| !e.ist_abgelaufen(jetzt, ttl));
        let entfernt = vorher - eintraege.len();
        drop(eintraege);

        if let Some(m) = &self.metriken {
            m.transfers_zaehlen(ergebnis::ABGELAUFEN, entfernt as u64);
        }
        entfernt
    }

    /// Stoppt den Sweep und verwirft alle Eintraege
    ///
    /// Mehrfache Aufrufe sind wirkungslos. Danach werden keine neuen
    /// Transfers mehr angenommen.
    pub fn shutdown(&self) {
        if self.beendet.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Some(handle) = self.sweep_task.lock().take() {
            handle.abort();
        }
        let verworfen = {
            let mut eintraege = self.eintraege.lock();
            let n = eintraege.len();
            eintraege.clear();
            n
        };
        tracing::info!(verworfen, "Transfer-Store heruntergefahren");
    }

    fn zaehlen(&self, ergebnis: &'static str) {
        if let Some(m) = &self.metriken {
            m.transfers_zaehlen(ergebnis, 1);
        }
    }
}

impl Drop for TransferStore {
    fn drop(&mut self) {
        if let Some(handle) = self.sweep_task.get_mut().take() {
            handle.abort();
        }
    }
}

impl std::fmt::Debug for TransferStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferStore")
            .field("konfig", &self.konfig)
            .field("eintraege", &self.eintraege.lock().len())
            .field("beendet", &self.ist_beendet())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
