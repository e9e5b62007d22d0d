//! Externe Kollaborateure des Controllers.
//!
//! Alle asynchronen Dienste folgen demselben Muster: der Controller reicht eine
//! Anfrage mit einer ID ein, das Ergebnis kommt später als [`AppIntent`] zurück.
//! Adapter auf Worker-Threads verändern nie den Session-Zustand, sie posten nur
//! Intents über einen [`IntentSender`].

mod geolocation;
mod nominatim;
mod osrm;
mod scene;

pub use geolocation::FixedGeolocator;
pub use nominatim::{place_label_from_response, NominatimResolver};
pub use osrm::{route_from_response, OsrmRouteEngine};
pub use scene::{MapScene, SceneMapView, SceneOverlay};

use crate::app::AppIntent;
use crate::core::{LatLng, MarkerKey, RoutePath};
use std::sync::mpsc;

/// Sender für Abschluss-Intents aus Worker-Threads.
pub type IntentSender = mpsc::Sender<AppIntent>;
/// Empfänger, den der Host pro Frame leert.
pub type IntentReceiver = mpsc::Receiver<AppIntent>;

/// Erstellt den Kanal zwischen Adaptern und Host.
pub fn intent_channel() -> (IntentSender, IntentReceiver) {
    mpsc::channel()
}

/// Fehler eines Dienst-Adapters.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Transportfehler
    #[error("HTTP-Anfrage fehlgeschlagen: {0}")]
    Http(#[from] reqwest::Error),
    /// Antwort nicht dekodierbar
    #[error("Antwort nicht lesbar: {0}")]
    Decode(#[from] serde_json::Error),
    /// Dienst hat keine Route gefunden
    #[error("keine Route: {0}")]
    NoRoute(String),
}

/// ID einer Namensauflösung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameRequestId(pub u64);

/// Ticket einer Routenanfrage. Nur das zuletzt ausgegebene Ticket zählt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteTicket(pub u64);

/// Opakes Handle eines Marker-Overlays auf der Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayHandle(pub u64);

/// Opakes Handle einer gezeichneten Route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteLayerHandle(pub u64);

/// Beschreibung eines neuen Marker-Overlays.
#[derive(Debug, Clone)]
pub struct MarkerOverlay {
    /// Schlüssel des zugehörigen Markers
    pub key: MarkerKey,
    /// Position auf der Karte
    pub position: LatLng,
    /// Popup-Titel (Marker-Name)
    pub title: String,
    /// Popup-Detail (`(lat, lng)` mit 6 Nachkommastellen)
    pub detail: String,
    /// Intent, der bei Klick auf das Overlay ausgelöst wird
    pub on_activate: AppIntent,
}

/// Bestätigungen und Hinweise an den Benutzer.
pub trait UserPrompt {
    /// Fragt eine Ja/Nein-Bestätigung ab (blockierend).
    fn confirm(&mut self, message: &str) -> bool;
    /// Zeigt einen Hinweis an.
    fn notify(&mut self, message: &str);
}

/// Karten-Rendering-Engine.
pub trait MapView {
    /// Erstellt ein Marker-Overlay und gibt sein Handle zurück.
    fn add_marker_overlay(&mut self, overlay: MarkerOverlay) -> OverlayHandle;
    /// Entfernt ein Overlay. Unbekannte Handles werden ignoriert.
    fn remove_overlay(&mut self, handle: OverlayHandle);
    /// Öffnet das Detail-Popup eines Overlays.
    fn open_popup(&mut self, handle: OverlayHandle);
    /// Zeichnet einen Routenpfad.
    fn show_route(&mut self, path: &RoutePath) -> RouteLayerHandle;
    /// Entfernt einen Routenpfad.
    fn remove_route(&mut self, handle: RouteLayerHandle);
    /// Zentriert die Ansicht.
    fn set_view(&mut self, center: LatLng, zoom: f64);
    /// Passt die Ansicht so an, dass das Rechteck sichtbar ist.
    fn fit_bounds(&mut self, south_west: LatLng, north_east: LatLng);
    /// Zeigt die eigene Position mit Beschriftung.
    fn show_user_position(&mut self, position: LatLng, label: &str);
}

/// Reverse-Geocoding: Koordinaten → Ortsname.
///
/// Ergebnis: `AppIntent::PlaceNameResolved { request, outcome }`.
pub trait GeoNameResolver {
    /// Startet die Auflösung für `position`.
    fn request_place_name(&mut self, request: NameRequestId, position: LatLng);
}

/// Routing-Engine: Pfad plus Distanz/Fahrzeit zwischen zwei Punkten.
///
/// Ergebnis: `AppIntent::RouteFound` oder `AppIntent::RoutingFailed`.
pub trait RouteEngine {
    /// Startet eine Routenberechnung.
    fn request_route(&mut self, ticket: RouteTicket, from: LatLng, to: LatLng);

    /// Hinweis, dass das Ergebnis von `ticket` nicht mehr gebraucht wird.
    fn cancel_route(&mut self, _ticket: RouteTicket) {}
}

/// Einmalige Standortbestimmung.
///
/// Ergebnis: `AppIntent::GeolocationResolved` oder `AppIntent::GeolocationFailed`.
pub trait Geolocator {
    /// Startet die Standortbestimmung.
    fn request_position(&mut self);
}

/// Bündel aller Kollaborateure, im Controller injiziert.
pub struct Services {
    /// Bestätigungen/Hinweise
    pub prompt: Box<dyn UserPrompt>,
    /// Karten-Rendering
    pub map_view: Box<dyn MapView>,
    /// Reverse-Geocoding
    pub names: Box<dyn GeoNameResolver>,
    /// Routing
    pub routes: Box<dyn RouteEngine>,
    /// Standort
    pub geolocator: Box<dyn Geolocator>,
}
