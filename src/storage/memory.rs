use super::{KeyValueStore, StorageError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    reject_writes: bool,
    write_count: usize,
}

/// In-Memory-Speicher mit geteiltem Zustand.
///
/// Klone teilen denselben Inhalt (wie `localStorage` im Browser). Damit kann
/// ein Host oder Test den Snapshot von außen prüfen oder Schreibfehler
/// simulieren, während der `MarkerStore` sein eigenes Handle besitzt.
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryKeyValueStore {
    /// Erstellt einen leeren Speicher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Speicher mit einem vorbelegten Eintrag.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.lock() {
            inner.entries.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// Schaltet simulierte Schreibfehler ein/aus.
    pub fn set_reject_writes(&self, reject: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.reject_writes = reject;
        }
    }

    /// Anzahl erfolgreicher `set`-Aufrufe seit Erstellung.
    pub fn write_count(&self) -> usize {
        self.inner.lock().map_or(0, |inner| inner.write_count)
    }

    /// Liest einen Wert ohne Fehlerbehandlung (für Hosts und Tests).
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .ok()
            .and_then(|inner| inner.entries.get(key).cloned())
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(inner.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().map_err(|_| StorageError::Poisoned)?;
        if inner.reject_writes {
            return Err(StorageError::Rejected(format!(
                "Schreiben von '{key}' simuliert fehlgeschlagen"
            )));
        }
        inner.entries.insert(key.to_string(), value.to_string());
        inner.write_count += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().map_err(|_| StorageError::Poisoned)?;
        inner.entries.remove(key);
        Ok(())
    }
}
