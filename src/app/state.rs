//! Session-Zustand einer Kartenansicht.

use super::{CommandLog, MarkerOverlayIndex, RouteSession};
use crate::core::{LatLng, MarkerStore};
use crate::services::NameRequestId;
use crate::shared::PlannerOptions;
use crate::storage::KeyValueStore;
use indexmap::IndexMap;

/// Stand der einmaligen Standortbestimmung
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GeolocationState {
    /// Noch nicht angefordert
    #[default]
    Idle,
    /// Anfrage läuft
    Requested,
    /// Standort bekannt
    Resolved,
    /// Standort nicht verfügbar (mit Grund)
    Unavailable(String),
}

/// Zustand einer Kartenansicht, einmal pro Ansicht erzeugt.
///
/// Besitzt Marker-Liste, Overlay-Index, Route und Benutzerstandort. Alle
/// Handler erhalten die Session per Referenz, es gibt keine globalen Zustände.
pub struct MapSession {
    /// Persistierte Marker (einziger Schreiber des Snapshots)
    pub markers: MarkerStore,
    /// Overlays der Marker auf der Karte
    pub overlays: MarkerOverlayIndex,
    /// Aktive Route
    pub route: RouteSession,
    /// Eigener Standort, einmalig gesetzt
    pub user_location: Option<LatLng>,
    /// Stand der Standortbestimmung
    pub geolocation: GeolocationState,
    /// Bestätigte Marker, deren Name noch aufgelöst wird
    pub pending_additions: IndexMap<NameRequestId, LatLng>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: PlannerOptions,
    /// Letzter Hinweis an den Benutzer (für die Statusleiste)
    pub status_message: Option<String>,
    next_name_request: u64,
}

impl MapSession {
    /// Erstellt eine Session auf dem übergebenen Speicher-Backend.
    /// Die Marker werden erst durch `LoadMarkers` gelesen.
    pub fn new(options: PlannerOptions, backend: Box<dyn KeyValueStore>) -> Self {
        let markers = MarkerStore::new(backend, options.storage_key.clone());
        Self {
            markers,
            overlays: MarkerOverlayIndex::new(),
            route: RouteSession::new(),
            user_location: None,
            geolocation: GeolocationState::Idle,
            pending_additions: IndexMap::new(),
            command_log: CommandLog::new(),
            options,
            status_message: None,
            next_name_request: 0,
        }
    }

    /// Vergibt die nächste ID für eine Namensauflösung.
    pub fn next_name_request(&mut self) -> NameRequestId {
        self.next_name_request += 1;
        NameRequestId(self.next_name_request)
    }

    /// Gibt `true` zurück, sobald Routen angefordert werden können.
    pub fn can_route(&self) -> bool {
        self.user_location.is_some()
    }
}
