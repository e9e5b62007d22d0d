//! Use-Cases für Laden, Hinzufügen und Löschen von Markern.

use super::notice::notify;
use crate::app::{messages, AppIntent, MapSession};
use crate::core::{LatLng, LoadOutcome, Marker, MarkerKey, MarkerStoreError};
use crate::services::{NameRequestId, Services};

/// Lädt die persistierten Marker. Defekte Daten werden still verworfen.
pub fn load_markers(session: &mut MapSession) {
    match session.markers.load() {
        LoadOutcome::Empty | LoadOutcome::Loaded { .. } => {}
        LoadOutcome::Recovered { reason } => {
            log::warn!("Marker-Liste zurückgesetzt: {}", reason);
        }
    }
}

/// Gleicht die Overlays mit der aktuellen Marker-Liste ab.
pub fn reconcile_overlays(session: &mut MapSession, services: &mut Services) {
    session.overlays.reconcile(
        session.markers.snapshot(),
        services.map_view.as_mut(),
        |marker| AppIntent::OverlayActivated { key: marker.key() },
    );
}

/// Fragt nach, ob an `position` ein Marker gespeichert werden soll, und
/// startet bei Zustimmung die Namensauflösung.
pub fn confirm_add_marker(session: &mut MapSession, services: &mut Services, position: LatLng) {
    if session.markers.contains(position.key()) {
        notify(session, services, messages::DUPLICATE_MARKER);
        return;
    }
    if !services.prompt.confirm(&messages::confirm_save(position)) {
        log::debug!("Speichern bei {} abgelehnt", position);
        return;
    }

    let request = session.next_name_request();
    session.pending_additions.insert(request, position);
    log::info!("Ortsname für {} angefordert ({:?})", position, request);
    services.names.request_place_name(request, position);
}

/// Speichert den Marker einer abgeschlossenen Namensauflösung und öffnet sein Popup.
pub fn complete_add_marker(
    session: &mut MapSession,
    services: &mut Services,
    request: NameRequestId,
    name: String,
) {
    let Some(position) = session.pending_additions.shift_remove(&request) else {
        log::debug!("Unbekannte Namensauflösung {:?} ignoriert", request);
        return;
    };

    let key = position.key();
    match session.markers.add(Marker::new(position, name)) {
        Ok(()) => {
            reconcile_overlays(session, services);
            if let Some(handle) = session.overlays.handle(key) {
                services.map_view.open_popup(handle);
            }
        }
        Err(MarkerStoreError::DuplicateMarker { .. }) => {
            notify(session, services, messages::DUPLICATE_MARKER);
        }
        Err(e) => {
            log::warn!("Marker bei {} nicht gespeichert: {}", key, e);
            notify(session, services, &messages::persistence_failed(&e));
        }
    }
}

/// Fragt nach, ob der Marker gelöscht werden soll, und entfernt ihn samt Overlay.
pub fn confirm_delete_marker(session: &mut MapSession, services: &mut Services, key: MarkerKey) {
    let Some(marker) = session.markers.get(key) else {
        log::debug!("Löschen ignoriert: kein Marker bei {}", key);
        return;
    };
    if !services.prompt.confirm(&messages::confirm_delete(&marker.name)) {
        log::debug!("Löschen von {} abgelehnt", key);
        return;
    }

    match session.markers.remove(key) {
        Ok(Some(_)) => {
            session.overlays.remove_one(key, services.map_view.as_mut());
            if session.options.clear_route_on_delete && session.route.target() == Some(key) {
                log::info!("Route zum gelöschten Marker {} verworfen", key);
                session
                    .route
                    .clear(services.map_view.as_mut(), services.routes.as_mut());
            }
        }
        Ok(None) => {}
        Err(e) => {
            log::warn!("Marker bei {} nicht gelöscht: {}", key, e);
            notify(session, services, &messages::persistence_failed(&e));
        }
    }
}
