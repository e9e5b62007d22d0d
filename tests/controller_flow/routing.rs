use crate::support::{Harness, CARCAR, HOME, TALISAY};
use poi_route_planner::AppIntent;

#[test]
fn test_route_without_location_shows_pending_notice() {
    let mut h = Harness::new();
    h.add_marker(CARCAR, "Carcar City");

    h.send(AppIntent::OverlayActivated { key: CARCAR.key() });

    assert!(h.fakes.routes.requests().is_empty());
    assert_eq!(
        h.fakes.prompt.notices(),
        vec!["Please wait for your location to be detected".to_string()]
    );
    assert_eq!(
        h.session.status_message.as_deref(),
        Some("Please wait for your location to be detected")
    );
}

#[test]
fn test_list_click_routes_from_user_location() {
    let mut h = Harness::started_at_home();
    h.add_marker(CARCAR, "Carcar City");

    h.send(AppIntent::MarkerListItemClicked { key: CARCAR.key() });

    let requests = h.fakes.routes.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].1, HOME);
    assert_eq!(requests[0].2, CARCAR);
    assert!(h.session.route.is_pending());
    assert_eq!(h.session.route.pending_label(), Some("Carcar City"));

    h.route_found(requests[0].0, 38_450.0, 2_730.0);

    let summary = h.session.route.summary().expect("Zusammenfassung erwartet");
    assert_eq!(summary.target_name, "Carcar City");
    assert_eq!(summary.distance_label(), "38.5 km");
    assert_eq!(summary.eta_label(), "46 min");
    assert_eq!(h.session.route.target(), Some(CARCAR.key()));
    let mut scene = h.fakes.view.lock();
    assert!(scene.route.is_some());
    assert_eq!(scene.take_requested_bounds(), Some((CARCAR, HOME)));
}

#[test]
fn test_last_request_wins_across_controller() {
    let mut h = Harness::started_at_home();
    h.add_marker(CARCAR, "Carcar City");
    h.add_marker(TALISAY, "Talisay");

    h.send(AppIntent::OverlayActivated { key: CARCAR.key() });
    let ticket_a = h.fakes.routes.last_ticket();
    h.send(AppIntent::OverlayActivated { key: TALISAY.key() });
    let ticket_b = h.fakes.routes.last_ticket();

    h.route_found(ticket_b, 12_000.0, 900.0);
    h.route_found(ticket_a, 38_000.0, 2_700.0);

    let summary = h.session.route.summary().expect("Zusammenfassung erwartet");
    assert_eq!(summary.target_name, "Talisay");
    assert_eq!(summary.distance_label(), "12.0 km");
    assert_eq!(h.fakes.routes.cancelled(), vec![ticket_a]);
}

#[test]
fn test_stale_failure_does_not_notify() {
    let mut h = Harness::started_at_home();
    h.add_marker(CARCAR, "Carcar City");
    h.add_marker(TALISAY, "Talisay");

    h.send(AppIntent::OverlayActivated { key: CARCAR.key() });
    let ticket_a = h.fakes.routes.last_ticket();
    h.send(AppIntent::OverlayActivated { key: TALISAY.key() });

    h.send(AppIntent::RoutingFailed {
        ticket: ticket_a,
        reason: "timeout".to_string(),
    });

    assert!(h.fakes.prompt.notices().is_empty());
    assert!(h.session.route.is_pending());
}

#[test]
fn test_failure_removes_previous_route_and_notifies() {
    let mut h = Harness::started_at_home();
    h.add_marker(CARCAR, "Carcar City");
    h.add_marker(TALISAY, "Talisay");

    h.send(AppIntent::OverlayActivated { key: CARCAR.key() });
    let first = h.fakes.routes.last_ticket();
    h.route_found(first, 38_000.0, 2_700.0);

    h.send(AppIntent::OverlayActivated { key: TALISAY.key() });
    let second = h.fakes.routes.last_ticket();
    h.send(AppIntent::RoutingFailed {
        ticket: second,
        reason: "NoRoute".to_string(),
    });

    assert!(h.session.route.summary().is_none());
    assert!(h.fakes.view.lock().route.is_none());
    assert_eq!(
        h.fakes.prompt.notices(),
        vec!["Could not calculate route to this location".to_string()]
    );
}

#[test]
fn test_route_dismissed_clears_route() {
    let mut h = Harness::started_at_home();
    h.add_marker(CARCAR, "Carcar City");
    h.send(AppIntent::OverlayActivated { key: CARCAR.key() });
    let ticket = h.fakes.routes.last_ticket();
    h.route_found(ticket, 1_000.0, 60.0);

    h.send(AppIntent::RouteDismissed);

    assert!(h.session.route.summary().is_none());
    assert!(h.session.route.target().is_none());
    assert!(h.fakes.view.lock().route.is_none());
}
