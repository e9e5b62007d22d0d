//! Use-Cases für Kartenansicht und eigenen Standort.

use crate::app::{GeolocationState, MapSession};
use crate::core::LatLng;
use crate::services::Services;

/// Zentriert die Karte auf das konfigurierte Startzentrum.
pub fn center_default_view(session: &MapSession, services: &mut Services) {
    let options = &session.options;
    services
        .map_view
        .set_view(options.default_center, options.default_zoom);
}

/// Startet die einmalige Standortbestimmung.
pub fn request_geolocation(session: &mut MapSession, services: &mut Services) {
    if session.user_location.is_some() || session.geolocation == GeolocationState::Requested {
        log::debug!("Standortbestimmung läuft bereits oder ist abgeschlossen");
        return;
    }
    session.geolocation = GeolocationState::Requested;
    services.geolocator.request_position();
}

/// Übernimmt den eigenen Standort, zentriert die Karte und markiert ihn.
pub fn set_user_location(session: &mut MapSession, services: &mut Services, position: LatLng) {
    if session.user_location.is_some() {
        return;
    }
    session.user_location = Some(position);
    session.geolocation = GeolocationState::Resolved;

    let options = &session.options;
    services.map_view.set_view(position, options.located_zoom);
    services
        .map_view
        .show_user_position(position, &options.user_position_label);
    log::info!("Eigener Standort: {}", position);
}

/// Merkt, dass kein Standort verfügbar ist. Routen bleiben gesperrt.
pub fn mark_geolocation_unavailable(session: &mut MapSession, reason: String) {
    if session.user_location.is_some() {
        return;
    }
    log::warn!("Standort nicht verfügbar: {}", reason);
    session.geolocation = GeolocationState::Unavailable(reason);
}
