//! Die eine aktive Route: laufende Anfrage oder angezeigtes Ergebnis.
//!
//! Jede neue Anfrage verdrängt die vorherige (last-request-wins). Ergebnisse
//! mit einem älteren Ticket werden verworfen, egal in welcher Reihenfolge sie
//! eintreffen.

use crate::core::{LatLng, MarkerKey, RouteResponse, RouteSummary};
use crate::services::{MapView, RouteEngine, RouteLayerHandle, RouteTicket};

/// Ob ein Abschluss übernommen oder als veraltet verworfen wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteResolution {
    /// Ergebnis gehört zur aktuellen Anfrage
    Applied,
    /// Ergebnis gehört zu einer verdrängten Anfrage
    Stale,
}

#[derive(Debug, Clone)]
struct PendingRoute {
    ticket: RouteTicket,
    target: MarkerKey,
    label: String,
}

#[derive(Debug, Clone)]
struct DisplayedRoute {
    layer: RouteLayerHandle,
    summary: RouteSummary,
}

/// Verwaltet höchstens eine Routenberechnung bzw. -anzeige.
#[derive(Debug, Default)]
pub struct RouteSession {
    last_ticket: u64,
    pending: Option<PendingRoute>,
    displayed: Option<DisplayedRoute>,
}

impl RouteSession {
    /// Erstellt eine leere Session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Startet eine neue Route von `from` nach `to`.
    ///
    /// Entfernt vorher jede angezeigte Route samt Zusammenfassung und verwirft
    /// eine noch laufende Anfrage.
    pub fn request(
        &mut self,
        view: &mut dyn MapView,
        engine: &mut dyn RouteEngine,
        from: LatLng,
        to: LatLng,
        label: &str,
    ) -> RouteTicket {
        self.clear(view, engine);

        self.last_ticket += 1;
        let ticket = RouteTicket(self.last_ticket);
        self.pending = Some(PendingRoute {
            ticket,
            target: to.key(),
            label: label.to_string(),
        });

        log::info!("Route zu '{}' angefordert ({:?})", label, ticket);
        engine.request_route(ticket, from, to);
        ticket
    }

    /// Übernimmt eine gefundene Route, falls `ticket` die aktuelle Anfrage ist.
    pub fn on_route_found(
        &mut self,
        view: &mut dyn MapView,
        ticket: RouteTicket,
        route: &RouteResponse,
    ) -> RouteResolution {
        let Some(pending) = self.take_pending(ticket) else {
            log::debug!("Veraltete Route verworfen ({:?})", ticket);
            return RouteResolution::Stale;
        };

        let summary = RouteSummary::from_metrics(
            pending.label,
            pending.target,
            route.total_distance_m,
            route.total_time_s,
        );
        log::info!(
            "Route zu '{}': {}, {}",
            summary.target_name,
            summary.distance_label(),
            summary.eta_label()
        );
        let layer = view.show_route(&route.path);
        if let Some((south_west, north_east)) = route.path.bounds() {
            view.fit_bounds(south_west, north_east);
        }
        self.displayed = Some(DisplayedRoute { layer, summary });
        RouteResolution::Applied
    }

    /// Übernimmt einen Routing-Fehler, falls `ticket` die aktuelle Anfrage ist.
    /// Die vorherige Route ist zu diesem Zeitpunkt bereits entfernt.
    pub fn on_routing_failed(&mut self, ticket: RouteTicket, reason: &str) -> RouteResolution {
        match self.take_pending(ticket) {
            Some(pending) => {
                log::warn!("Route zu '{}' fehlgeschlagen: {}", pending.label, reason);
                RouteResolution::Applied
            }
            None => {
                log::debug!("Veralteter Routing-Fehler verworfen ({:?})", ticket);
                RouteResolution::Stale
            }
        }
    }

    /// Verwirft laufende Anfrage und angezeigte Route.
    pub fn clear(&mut self, view: &mut dyn MapView, engine: &mut dyn RouteEngine) {
        if let Some(pending) = self.pending.take() {
            engine.cancel_route(pending.ticket);
        }
        if let Some(displayed) = self.displayed.take() {
            view.remove_route(displayed.layer);
        }
    }

    /// Zusammenfassung der angezeigten Route
    pub fn summary(&self) -> Option<&RouteSummary> {
        self.displayed.as_ref().map(|d| &d.summary)
    }

    /// Beschriftung der laufenden Anfrage
    pub fn pending_label(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.label.as_str())
    }

    /// Gibt `true` zurück, solange eine Anfrage läuft.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Ziel-Marker der laufenden oder angezeigten Route
    pub fn target(&self) -> Option<MarkerKey> {
        self.pending
            .as_ref()
            .map(|p| p.target)
            .or_else(|| self.displayed.as_ref().map(|d| d.summary.target))
    }

    fn take_pending(&mut self, ticket: RouteTicket) -> Option<PendingRoute> {
        if self.pending.as_ref().is_some_and(|p| p.ticket == ticket) {
            self.pending.take()
        } else {
            None
        }
    }
}
