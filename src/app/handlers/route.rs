//! Handler für die aktive Route.

use crate::app::use_cases;
use crate::app::MapSession;
use crate::core::{LatLng, RouteResponse};
use crate::services::{RouteTicket, Services};

/// Fordert eine neue Route an.
pub fn request(
    session: &mut MapSession,
    services: &mut Services,
    from: LatLng,
    to: LatLng,
    label: &str,
) {
    use_cases::routing::request_route(session, services, from, to, label);
}

/// Übernimmt ein Routen-Ergebnis.
pub fn apply_found(
    session: &mut MapSession,
    services: &mut Services,
    ticket: RouteTicket,
    route: &RouteResponse,
) {
    use_cases::routing::apply_route_found(session, services, ticket, route);
}

/// Übernimmt einen Routing-Fehler.
pub fn apply_failure(
    session: &mut MapSession,
    services: &mut Services,
    ticket: RouteTicket,
    reason: &str,
) {
    use_cases::routing::apply_routing_failure(session, services, ticket, reason);
}

/// Verwirft die Route.
pub fn clear(session: &mut MapSession, services: &mut Services) {
    use_cases::routing::clear_route(session, services);
}
