//! Benutzertexte für Bestätigungen und Hinweise.

use crate::core::LatLng;
use crate::core::MarkerStoreError;

/// Hinweis bei einem bereits gespeicherten Marker
pub const DUPLICATE_MARKER: &str = "This marker already exists!";
/// Hinweis, solange der eigene Standort unbekannt ist
pub const LOCATION_PENDING: &str = "Please wait for your location to be detected";
/// Hinweis bei fehlgeschlagener Routenberechnung
pub const ROUTING_FAILED: &str = "Could not calculate route to this location";

/// Bestätigungsfrage vor dem Speichern eines Markers.
pub fn confirm_save(position: LatLng) -> String {
    format!(
        "Do you want to save this marker at ({:.6}, {:.6})?",
        position.lat, position.lng
    )
}

/// Bestätigungsfrage vor dem Löschen eines Markers.
pub fn confirm_delete(name: &str) -> String {
    format!("Are you sure you want to delete the marker at {name}?")
}

/// Hinweis, wenn eine Marker-Änderung nicht gespeichert werden konnte.
pub fn persistence_failed(err: &MarkerStoreError) -> String {
    format!("Could not save your markers: {err}")
}
