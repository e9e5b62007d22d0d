use crate::support::{Fakes, Harness, CARCAR, HOME};
use poi_route_planner::storage::USER_MARKERS_KEY;
use poi_route_planner::{
    AppCommand, AppIntent, FileKeyValueStore, GeolocationState, LatLng, MapController,
    MapSession, MemoryKeyValueStore, PlannerOptions,
};

#[test]
fn test_startup_loads_markers_and_reconciles_overlays() {
    let backend = MemoryKeyValueStore::with_entry(
        USER_MARKERS_KEY,
        r#"[{"lat":10.0,"lng":123.0,"name":"Carcar City"},{"lat":10.5,"lng":124.0,"name":"Bohol"}]"#,
    );
    let mut h = Harness::with(PlannerOptions::default(), backend);

    h.send(AppIntent::StartupRequested);

    assert_eq!(h.session.markers.len(), 2);
    assert_eq!(h.session.overlays.len(), 2);
    assert_eq!(h.fakes.geolocator.calls(), 1);
    assert_eq!(h.session.geolocation, GeolocationState::Requested);

    let mut scene = h.fakes.view.lock();
    assert_eq!(scene.overlays.len(), 2);
    assert_eq!(
        scene.take_requested_view(),
        Some((LatLng::new(10.3157, 123.8854), 10.0))
    );

    let logged: Vec<_> = h.session.command_log.entries().cloned().collect();
    assert!(matches!(logged[0], AppCommand::CenterDefaultView));
    assert!(matches!(logged[1], AppCommand::LoadMarkers));
    assert!(matches!(logged[2], AppCommand::ReconcileOverlays));
    assert!(matches!(logged[3], AppCommand::RequestGeolocation));
}

#[test]
fn test_corrupt_state_starts_empty_without_notice() {
    let backend = MemoryKeyValueStore::with_entry(USER_MARKERS_KEY, "{not json");
    let mut h = Harness::with(PlannerOptions::default(), backend);

    h.send(AppIntent::StartupRequested);

    assert!(h.session.markers.is_empty());
    assert!(h.session.overlays.is_empty());
    assert_eq!(h.backend.peek(USER_MARKERS_KEY), None);
    assert!(h.fakes.prompt.notices().is_empty());
}

#[test]
fn test_geolocation_centers_view_once() {
    let mut h = Harness::new();
    h.send(AppIntent::StartupRequested);
    h.fakes.view.lock().take_requested_view();

    h.send(AppIntent::GeolocationResolved { position: HOME });
    h.send(AppIntent::GeolocationResolved {
        position: LatLng::new(0.0, 0.0),
    });

    assert_eq!(h.session.user_location, Some(HOME));
    assert_eq!(h.session.geolocation, GeolocationState::Resolved);
    let mut scene = h.fakes.view.lock();
    assert_eq!(scene.take_requested_view(), Some((HOME, 13.0)));
    assert_eq!(
        scene.user_position,
        Some((HOME, "You are here!".to_string()))
    );
}

#[test]
fn test_geolocation_failure_keeps_adding_available() {
    let mut h = Harness::new();
    h.send(AppIntent::StartupRequested);
    h.send(AppIntent::GeolocationFailed {
        reason: "keine Heimposition".to_string(),
    });

    assert_eq!(
        h.session.geolocation,
        GeolocationState::Unavailable("keine Heimposition".to_string())
    );
    assert!(!h.session.can_route());

    h.add_marker(CARCAR, "Carcar City");
    assert_eq!(h.session.markers.len(), 1);

    h.send(AppIntent::MarkerListItemClicked { key: CARCAR.key() });
    assert!(h.fakes.routes.requests().is_empty());
}

#[test]
fn test_markers_survive_restart_with_file_store() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let fakes = Fakes::default();
        fakes.prompt.answering(true);
        let store = FileKeyValueStore::open(dir.path()).expect("Speicher öffnen");
        let mut session = MapSession::new(PlannerOptions::default(), Box::new(store));
        let mut controller = MapController::new(fakes.services());

        controller
            .handle_intent(&mut session, AppIntent::StartupRequested)
            .expect("Startup");
        controller
            .handle_intent(&mut session, AppIntent::MapClicked { position: CARCAR })
            .expect("Klick");
        let request = fakes.names.last_request();
        controller
            .handle_intent(
                &mut session,
                AppIntent::PlaceNameResolved {
                    request,
                    outcome: Ok("Carcar City".to_string()),
                },
            )
            .expect("Name");
    }

    let fakes = Fakes::default();
    let store = FileKeyValueStore::open(dir.path()).expect("Speicher öffnen");
    let mut session = MapSession::new(PlannerOptions::default(), Box::new(store));
    let mut controller = MapController::new(fakes.services());
    controller
        .handle_intent(&mut session, AppIntent::StartupRequested)
        .expect("Startup");

    let marker = session.markers.get(CARCAR.key()).expect("Marker nach Neustart");
    assert_eq!(marker.name, "Carcar City");
    assert_eq!(fakes.view.lock().overlays.len(), 1);
}

#[test]
fn test_drain_processes_queued_completions() {
    let mut h = Harness::new();
    let (sender, receiver) = poi_route_planner::intent_channel();
    sender
        .send(AppIntent::StartupRequested)
        .expect("senden");
    sender
        .send(AppIntent::GeolocationResolved { position: HOME })
        .expect("senden");

    let handled = h
        .controller
        .drain(&mut h.session, &receiver)
        .expect("drain");

    assert_eq!(handled, 2);
    assert_eq!(h.session.user_location, Some(HOME));
}
