use crate::core::{LatLng, MarkerKey, RouteResponse};
use crate::services::{NameRequestId, RouteTicket};

/// App-Intents: Eingaben aus UI und asynchronen Diensten.
/// Intents enthalten keine Mutationslogik; der Controller übersetzt sie in Commands.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Karte geöffnet: Marker laden, Standort anfordern
    StartupRequested,
    /// Klick auf eine freie Stelle der Karte
    MapClicked { position: LatLng },
    /// Klick auf einen Eintrag der Marker-Liste
    MarkerListItemClicked { key: MarkerKey },
    /// Klick auf ein Marker-Overlay in der Karte
    OverlayActivated { key: MarkerKey },
    /// Löschen-Button eines Listeneintrags
    DeleteMarkerRequested { key: MarkerKey },
    /// Route-Guide-Panel geschlossen
    RouteDismissed,

    // === Abschlüsse asynchroner Dienste ===
    /// Reverse-Geocoding abgeschlossen (`Err` = Auflösung fehlgeschlagen)
    PlaceNameResolved {
        request: NameRequestId,
        outcome: Result<String, String>,
    },
    /// Routing-Engine hat eine Route geliefert
    RouteFound {
        ticket: RouteTicket,
        route: RouteResponse,
    },
    /// Routing-Engine ist gescheitert
    RoutingFailed { ticket: RouteTicket, reason: String },
    /// Standort ermittelt
    GeolocationResolved { position: LatLng },
    /// Standort nicht verfügbar
    GeolocationFailed { reason: String },
}
