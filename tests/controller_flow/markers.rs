use crate::support::{Harness, CARCAR, TALISAY};
use poi_route_planner::storage::USER_MARKERS_KEY;
use poi_route_planner::{AppCommand, AppIntent, MemoryKeyValueStore, PlannerOptions};

#[test]
fn test_add_duplicate_delete_scenario() {
    let mut h = Harness::started_at_home();

    h.add_marker(CARCAR, "Carcar City");

    assert_eq!(h.session.markers.len(), 1);
    assert_eq!(h.session.overlays.len(), 1);
    assert_eq!(
        h.fakes.prompt.confirms(),
        vec!["Do you want to save this marker at (10.000000, 123.000000)?".to_string()]
    );
    assert_eq!(
        h.backend.peek(USER_MARKERS_KEY).as_deref(),
        Some(r#"[{"lat":10.0,"lng":123.0,"name":"Carcar City"}]"#)
    );
    {
        let scene = h.fakes.view.lock();
        let (handle, overlay) = scene.overlay_for(CARCAR.key()).expect("Overlay erwartet");
        assert_eq!(scene.open_popup, Some(handle));
        assert_eq!(overlay.title, "Carcar City");
        assert_eq!(overlay.detail, "(10.000000, 123.000000)");
    }

    // Zweiter Klick auf dieselbe Stelle
    h.send(AppIntent::MapClicked { position: CARCAR });

    assert_eq!(h.session.markers.len(), 1);
    assert_eq!(h.fakes.prompt.confirms().len(), 1);
    assert_eq!(
        h.fakes.prompt.notices(),
        vec!["This marker already exists!".to_string()]
    );

    // Löschen
    h.send(AppIntent::DeleteMarkerRequested { key: CARCAR.key() });

    assert_eq!(
        h.fakes.prompt.confirms().last().map(String::as_str),
        Some("Are you sure you want to delete the marker at Carcar City?")
    );
    assert!(h.session.markers.is_empty());
    assert!(h.session.overlays.is_empty());
    assert!(h.fakes.view.lock().overlays.is_empty());
    assert_eq!(h.backend.peek(USER_MARKERS_KEY).as_deref(), Some("[]"));
}

#[test]
fn test_declined_save_requests_no_name() {
    let mut h = Harness::new();
    h.fakes.prompt.push_answer(false);

    h.send(AppIntent::MapClicked { position: CARCAR });

    assert!(h.fakes.names.requests().is_empty());
    assert!(h.session.pending_additions.is_empty());
    assert!(h.session.markers.is_empty());
}

#[test]
fn test_failed_name_resolution_saves_with_fallback_label() {
    let mut h = Harness::new();

    h.send(AppIntent::MapClicked { position: CARCAR });
    let request = h.fakes.names.last_request();
    h.send(AppIntent::PlaceNameResolved {
        request,
        outcome: Err("HTTP 503".to_string()),
    });

    let marker = h.session.markers.get(CARCAR.key()).expect("Marker erwartet");
    assert_eq!(marker.name, "Unknown Location");
    assert!(h.fakes.prompt.notices().is_empty());
}

#[test]
fn test_unknown_name_request_is_ignored() {
    let mut h = Harness::new();

    h.send(AppIntent::PlaceNameResolved {
        request: poi_route_planner::services::NameRequestId(99),
        outcome: Ok("Nirgendwo".to_string()),
    });

    assert!(h.session.markers.is_empty());
    assert!(h
        .session
        .command_log
        .entries()
        .any(|c| matches!(c, AppCommand::CompleteAddMarker { .. })));
}

#[test]
fn test_persistence_failure_rolls_back_and_notifies() {
    let mut h = Harness::new();
    h.backend.set_reject_writes(true);

    h.add_marker(CARCAR, "Carcar City");

    assert!(h.session.markers.is_empty());
    assert!(h.session.overlays.is_empty());
    assert!(h.fakes.view.lock().overlays.is_empty());
    let notices = h.fakes.prompt.notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].starts_with("Could not save your markers"));
    assert_eq!(h.backend.peek(USER_MARKERS_KEY), None);
}

#[test]
fn test_failed_delete_keeps_marker_and_overlay() {
    let mut h = Harness::new();
    h.add_marker(CARCAR, "Carcar City");
    let persisted = h.backend.peek(USER_MARKERS_KEY);
    h.backend.set_reject_writes(true);

    h.send(AppIntent::DeleteMarkerRequested { key: CARCAR.key() });

    assert_eq!(h.session.markers.len(), 1);
    assert_eq!(h.session.overlays.len(), 1);
    assert!(h.fakes.view.lock().overlay_for(CARCAR.key()).is_some());
    let notices = h.fakes.prompt.notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].starts_with("Could not save your markers"));
    assert_eq!(h.backend.peek(USER_MARKERS_KEY), persisted);
}

#[test]
fn test_two_confirmed_clicks_on_same_spot_store_one_marker() {
    let mut h = Harness::new();

    h.send(AppIntent::MapClicked { position: CARCAR });
    h.send(AppIntent::MapClicked { position: CARCAR });
    let requests = h.fakes.names.requests();
    assert_eq!(requests.len(), 2);

    for (request, _) in requests {
        h.send(AppIntent::PlaceNameResolved {
            request,
            outcome: Ok("Carcar City".to_string()),
        });
    }

    assert_eq!(h.session.markers.len(), 1);
    assert_eq!(h.session.overlays.len(), 1);
    assert_eq!(
        h.fakes.prompt.notices(),
        vec!["This marker already exists!".to_string()]
    );
}

#[test]
fn test_declined_delete_keeps_marker() {
    let mut h = Harness::new();
    h.add_marker(CARCAR, "Carcar City");
    h.fakes.prompt.push_answer(false);

    h.send(AppIntent::DeleteMarkerRequested { key: CARCAR.key() });

    assert_eq!(h.session.markers.len(), 1);
    assert_eq!(h.session.overlays.len(), 1);
}

#[test]
fn test_overlays_follow_markers_after_mixed_operations() {
    let mut h = Harness::new();
    h.add_marker(CARCAR, "Carcar City");
    h.add_marker(TALISAY, "Talisay");
    h.send(AppIntent::DeleteMarkerRequested { key: CARCAR.key() });
    h.add_marker(CARCAR, "Carcar again");

    let mut marker_keys: Vec<_> = h.session.markers.snapshot().iter().map(|m| m.key()).collect();
    let mut overlay_keys: Vec<_> = h.session.overlays.keys().collect();
    marker_keys.sort();
    overlay_keys.sort();
    assert_eq!(marker_keys, overlay_keys);
    assert_eq!(h.fakes.view.lock().overlays.len(), 2);
}

#[test]
fn test_deleting_route_target_keeps_route_by_default() {
    let mut h = Harness::started_at_home();
    h.add_marker(CARCAR, "Carcar City");
    h.send(AppIntent::MarkerListItemClicked { key: CARCAR.key() });
    let ticket = h.fakes.routes.last_ticket();
    h.route_found(ticket, 30_000.0, 2_400.0);

    h.send(AppIntent::DeleteMarkerRequested { key: CARCAR.key() });

    assert!(h.session.markers.is_empty());
    assert!(h.session.route.summary().is_some());
    assert!(h.fakes.view.lock().route.is_some());
}

#[test]
fn test_deleting_route_target_clears_route_when_configured() {
    let options = PlannerOptions {
        clear_route_on_delete: true,
        ..PlannerOptions::default()
    };
    let mut h = Harness::with(options, MemoryKeyValueStore::new());
    h.send(AppIntent::GeolocationResolved {
        position: crate::support::HOME,
    });
    h.add_marker(CARCAR, "Carcar City");
    h.add_marker(TALISAY, "Talisay");
    h.send(AppIntent::MarkerListItemClicked { key: CARCAR.key() });
    let ticket = h.fakes.routes.last_ticket();
    h.route_found(ticket, 30_000.0, 2_400.0);

    // Löschen eines anderen Markers lässt die Route stehen
    h.send(AppIntent::DeleteMarkerRequested { key: TALISAY.key() });
    assert!(h.session.route.summary().is_some());

    h.send(AppIntent::DeleteMarkerRequested { key: CARCAR.key() });
    assert!(h.session.route.summary().is_none());
    assert!(h.fakes.view.lock().route.is_none());
}
