//! Handler für Marker-Liste und Overlays.

use crate::app::use_cases;
use crate::app::MapSession;
use crate::core::{LatLng, MarkerKey};
use crate::services::{NameRequestId, Services};

/// Lädt die persistierten Marker.
pub fn load(session: &mut MapSession) {
    use_cases::markers::load_markers(session);
}

/// Gleicht die Overlays mit der Marker-Liste ab.
pub fn reconcile(session: &mut MapSession, services: &mut Services) {
    use_cases::markers::reconcile_overlays(session, services);
}

/// Bestätigt das Speichern und startet die Namensauflösung.
pub fn confirm_add(session: &mut MapSession, services: &mut Services, position: LatLng) {
    use_cases::markers::confirm_add_marker(session, services, position);
}

/// Speichert einen Marker nach abgeschlossener Namensauflösung.
pub fn complete_add(
    session: &mut MapSession,
    services: &mut Services,
    request: NameRequestId,
    name: String,
) {
    use_cases::markers::complete_add_marker(session, services, request, name);
}

/// Bestätigt das Löschen und entfernt den Marker.
pub fn confirm_delete(session: &mut MapSession, services: &mut Services, key: MarkerKey) {
    use_cases::markers::confirm_delete_marker(session, services, key);
}
