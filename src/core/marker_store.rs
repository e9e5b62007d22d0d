//! Dauerhafte Liste der gespeicherten Marker.
//!
//! Der `MarkerStore` ist der einzige Schreiber des persistierten Snapshots.
//! Jede Mutation wird erst nach erfolgreichem Persistieren übernommen; schlägt
//! das Schreiben fehl, bleibt die In-Memory-Liste unverändert.

use super::{Marker, MarkerKey};
use crate::storage::{KeyValueStore, StorageError};
use std::collections::HashSet;

/// Fehler einer Marker-Mutation.
#[derive(Debug, thiserror::Error)]
pub enum MarkerStoreError {
    /// An dieser Position existiert bereits ein Marker
    #[error("Marker bei {key} existiert bereits")]
    DuplicateMarker {
        /// Schlüssel des bestehenden Markers
        key: MarkerKey,
    },
    /// Der Snapshot konnte nicht geschrieben werden, Mutation verworfen
    #[error("Marker konnten nicht gespeichert werden: {0}")]
    PersistenceFailure(#[from] StorageError),
}

/// Ergebnis von [`MarkerStore::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Kein Snapshot vorhanden
    Empty,
    /// Snapshot gelesen
    Loaded {
        /// Anzahl geladener Marker
        count: usize,
    },
    /// Snapshot war defekt und wurde verworfen
    Recovered {
        /// Grund für das Verwerfen
        reason: String,
    },
}

/// Besitzt die kanonische, geordnete Marker-Liste.
pub struct MarkerStore {
    markers: Vec<Marker>,
    backend: Box<dyn KeyValueStore>,
    storage_key: String,
}

impl MarkerStore {
    /// Erstellt einen leeren Store über einem Backend. Lädt noch nichts.
    pub fn new(backend: Box<dyn KeyValueStore>, storage_key: impl Into<String>) -> Self {
        Self {
            markers: Vec::new(),
            backend,
            storage_key: storage_key.into(),
        }
    }

    /// Liest den persistierten Snapshot.
    ///
    /// Fehlt er, ist er kein JSON-Array von Markern oder enthält er nicht
    /// endliche Koordinaten, startet der Store leer und entfernt den defekten
    /// Wert. Ein Lesefehler wird nie an den Aufrufer weitergegeben.
    pub fn load(&mut self) -> LoadOutcome {
        self.markers.clear();

        let raw = match self.backend.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::info!("Keine gespeicherten Marker gefunden");
                return LoadOutcome::Empty;
            }
            Err(StorageError::Corrupt(reason)) => return self.discard_corrupt(reason),
            Err(e) => {
                log::warn!("Gespeicherte Marker nicht lesbar, starte leer: {}", e);
                return LoadOutcome::Recovered {
                    reason: e.to_string(),
                };
            }
        };

        match decode_snapshot(&raw) {
            Ok((markers, dropped)) => {
                let count = markers.len();
                self.markers = markers;
                if dropped > 0 {
                    self.rewrite_deduplicated(dropped);
                }
                log::info!("{} Marker geladen", count);
                LoadOutcome::Loaded { count }
            }
            Err(reason) => self.discard_corrupt(reason),
        }
    }

    fn discard_corrupt(&mut self, reason: String) -> LoadOutcome {
        log::warn!("Gespeicherte Marker defekt, werden verworfen: {}", reason);
        if let Err(e) = self.backend.remove(&self.storage_key) {
            log::warn!("Defekten Marker-Snapshot nicht entfernbar: {}", e);
        }
        LoadOutcome::Recovered { reason }
    }

    /// Schreibt die bereinigte Liste zurück, damit Speicher und Liste übereinstimmen.
    fn rewrite_deduplicated(&mut self, dropped: usize) {
        let written = serde_json::to_string(&self.markers)
            .map_err(StorageError::from)
            .and_then(|serialized| self.backend.set(&self.storage_key, &serialized));
        match written {
            Ok(()) => log::info!("{} doppelte Marker aus dem Snapshot entfernt", dropped),
            Err(e) => log::warn!("Bereinigter Snapshot nicht speicherbar: {}", e),
        }
    }

    /// Hängt einen Marker an und persistiert die ganze Liste.
    pub fn add(&mut self, marker: Marker) -> Result<(), MarkerStoreError> {
        let key = marker.key();
        if self.contains(key) {
            return Err(MarkerStoreError::DuplicateMarker { key });
        }

        let mut next = self.markers.clone();
        next.push(marker);
        self.commit(next)?;
        log::info!("Marker bei {} gespeichert ({} gesamt)", key, self.markers.len());
        Ok(())
    }

    /// Entfernt den Marker mit diesem Schlüssel und persistiert die Liste.
    /// Gibt den entfernten Marker zurück; fehlt er, passiert nichts.
    pub fn remove(&mut self, key: MarkerKey) -> Result<Option<Marker>, MarkerStoreError> {
        let Some(index) = self.markers.iter().position(|m| m.key() == key) else {
            log::debug!("Kein Marker bei {}", key);
            return Ok(None);
        };

        let mut next = self.markers.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        log::info!("Marker bei {} entfernt", key);
        Ok(Some(removed))
    }

    /// Read-only Sicht auf die aktuelle Liste in Einfügereihenfolge.
    pub fn snapshot(&self) -> &[Marker] {
        &self.markers
    }

    /// Sucht einen Marker über seinen Schlüssel
    pub fn get(&self, key: MarkerKey) -> Option<&Marker> {
        self.markers.iter().find(|m| m.key() == key)
    }

    /// Prüft ob ein Marker mit diesem Schlüssel existiert
    pub fn contains(&self, key: MarkerKey) -> bool {
        self.get(key).is_some()
    }

    /// Anzahl der Marker
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn keine Marker gespeichert sind.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Schreibt `next` und übernimmt es erst danach.
    fn commit(&mut self, next: Vec<Marker>) -> Result<(), MarkerStoreError> {
        let serialized = serde_json::to_string(&next).map_err(StorageError::from)?;
        self.backend.set(&self.storage_key, &serialized)?;
        self.markers = next;
        Ok(())
    }
}

/// Parst einen Snapshot und prüft die Store-Invarianten.
///
/// Doppelte Schlüssel werden auf den ersten Eintrag reduziert.
pub fn parse_snapshot(raw: &str) -> Result<Vec<Marker>, String> {
    decode_snapshot(raw).map(|(markers, _)| markers)
}

/// Wie [`parse_snapshot`], liefert zusätzlich die Anzahl verworfener Duplikate.
fn decode_snapshot(raw: &str) -> Result<(Vec<Marker>, usize), String> {
    let parsed: Vec<Marker> = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    if let Some(bad) = parsed.iter().find(|m| !m.position().is_finite()) {
        return Err(format!("ungültige Koordinaten bei '{}'", bad.name));
    }

    let mut seen = HashSet::with_capacity(parsed.len());
    let before = parsed.len();
    let markers: Vec<Marker> = parsed.into_iter().filter(|m| seen.insert(m.key())).collect();
    let dropped = before - markers.len();
    if dropped > 0 {
        log::warn!("{} doppelte Marker im Snapshot ignoriert", dropped);
    }

    Ok((markers, dropped))
}
