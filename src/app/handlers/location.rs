//! Handler für Kartenansicht und Standort.

use crate::app::use_cases;
use crate::app::MapSession;
use crate::core::LatLng;
use crate::services::Services;

/// Zentriert auf das Startzentrum.
pub fn center_default(session: &MapSession, services: &mut Services) {
    use_cases::location::center_default_view(session, services);
}

/// Startet die Standortbestimmung.
pub fn request(session: &mut MapSession, services: &mut Services) {
    use_cases::location::request_geolocation(session, services);
}

/// Übernimmt den Standort.
pub fn set(session: &mut MapSession, services: &mut Services, position: LatLng) {
    use_cases::location::set_user_location(session, services, position);
}

/// Markiert den Standort als nicht verfügbar.
pub fn mark_unavailable(session: &mut MapSession, reason: String) {
    use_cases::location::mark_geolocation_unavailable(session, reason);
}
