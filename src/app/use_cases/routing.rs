//! Use-Cases für die aktive Route.

use super::notice::notify;
use crate::app::{messages, MapSession, RouteResolution};
use crate::core::{LatLng, RouteResponse};
use crate::services::{RouteTicket, Services};

/// Ersetzt die aktive Route durch eine neue Anfrage.
pub fn request_route(
    session: &mut MapSession,
    services: &mut Services,
    from: LatLng,
    to: LatLng,
    label: &str,
) {
    session.route.request(
        services.map_view.as_mut(),
        services.routes.as_mut(),
        from,
        to,
        label,
    );
}

/// Übernimmt eine gefundene Route, sofern sie zur letzten Anfrage gehört.
pub fn apply_route_found(
    session: &mut MapSession,
    services: &mut Services,
    ticket: RouteTicket,
    route: &RouteResponse,
) {
    session
        .route
        .on_route_found(services.map_view.as_mut(), ticket, route);
}

/// Meldet einen Routing-Fehler, sofern er zur letzten Anfrage gehört.
pub fn apply_routing_failure(
    session: &mut MapSession,
    services: &mut Services,
    ticket: RouteTicket,
    reason: &str,
) {
    if session.route.on_routing_failed(ticket, reason) == RouteResolution::Applied {
        notify(session, services, messages::ROUTING_FAILED);
    }
}

/// Verwirft laufende Anfrage und angezeigte Route.
pub fn clear_route(session: &mut MapSession, services: &mut Services) {
    session
        .route
        .clear(services.map_view.as_mut(), services.routes.as_mut());
}
