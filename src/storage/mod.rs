//! Persistenter Key-Value-Speicher für den Marker-Snapshot.
//!
//! Der Speicher kennt nur serialisierte Strings. Einziger Schreiber ist der
//! [`MarkerStore`](crate::core::MarkerStore).

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;

/// Schlüssel, unter dem die Marker-Liste abgelegt wird.
pub const USER_MARKERS_KEY: &str = "userLocations";

/// Fehler eines Speicher-Backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Dateisystem-Fehler
    #[error("I/O-Fehler im Speicher: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot konnte nicht serialisiert werden
    #[error("Snapshot nicht serialisierbar: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Gespeicherter Wert ist nicht lesbar (z.B. kein UTF-8)
    #[error("Gespeicherter Wert defekt: {0}")]
    Corrupt(String),
    /// Backend hat den Schreibvorgang abgelehnt (z.B. Quota)
    #[error("Schreiben abgelehnt: {0}")]
    Rejected(String),
    /// Lock eines geteilten Backends ist vergiftet
    #[error("Speicher-Lock vergiftet")]
    Poisoned,
}

/// Minimaler Key-Value-Speicher (`get`/`set`/`remove`).
pub trait KeyValueStore: Send {
    /// Liest den Wert zu `key`, `None` wenn nicht vorhanden.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Schreibt den Wert zu `key` vollständig.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Entfernt `key`. Fehlt der Schlüssel, ist das kein Fehler.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
