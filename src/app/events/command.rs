use crate::core::{LatLng, MarkerKey, RouteResponse};
use crate::services::{NameRequestId, RouteTicket};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Ansicht auf das konfigurierte Startzentrum setzen
    CenterDefaultView,
    /// Persistierte Marker laden
    LoadMarkers,
    /// Overlays mit der Marker-Liste abgleichen
    ReconcileOverlays,
    /// Standortbestimmung starten
    RequestGeolocation,
    /// Eigenen Standort übernehmen (einmalig)
    SetUserLocation { position: LatLng },
    /// Standort als nicht verfügbar markieren
    MarkGeolocationUnavailable { reason: String },
    /// Hinweis an den Benutzer
    NotifyUser { message: String },
    /// Speichern bestätigen lassen und Namensauflösung starten
    ConfirmAddMarker { position: LatLng },
    /// Marker mit aufgelöstem Namen speichern
    CompleteAddMarker {
        request: NameRequestId,
        name: String,
    },
    /// Löschen bestätigen lassen und Marker entfernen
    ConfirmDeleteMarker { key: MarkerKey },
    /// Neue Route anfordern (ersetzt die vorherige)
    RequestRoute {
        from: LatLng,
        to: LatLng,
        label: String,
    },
    /// Routen-Ergebnis übernehmen, falls noch aktuell
    ApplyRouteFound {
        ticket: RouteTicket,
        route: RouteResponse,
    },
    /// Routing-Fehler übernehmen, falls noch aktuell
    ApplyRoutingFailure { ticket: RouteTicket, reason: String },
    /// Aktive oder laufende Route verwerfen
    ClearRoute,
}
