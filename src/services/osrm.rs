//! Routing über eine OSRM-kompatible HTTP-API.

use super::{IntentSender, RouteEngine, RouteTicket, ServiceError};
use crate::app::AppIntent;
use crate::core::{LatLng, RoutePath, RouteResponse};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    /// GeoJSON-Reihenfolge: `[lng, lat]`
    coordinates: Vec<[f64; 2]>,
}

/// Dekodiert eine OSRM-`route`-Antwort (GeoJSON-Geometrie) in die erste Route.
pub fn route_from_response(body: &str) -> Result<RouteResponse, ServiceError> {
    let response: OsrmResponse = serde_json::from_str(body)?;
    if response.code != "Ok" {
        return Err(ServiceError::NoRoute(
            response.message.unwrap_or(response.code),
        ));
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::NoRoute("leere Routenliste".to_string()))?;

    let points = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lng, lat]| LatLng::new(lat, lng))
        .collect();

    Ok(RouteResponse {
        path: RoutePath::new(points),
        total_distance_m: route.distance,
        total_time_s: route.duration,
    })
}

/// Laufende und abgebrochene Tickets der Worker-Threads.
///
/// Nur laufende Tickets können abgebrochen werden; beide Mengen leeren sich,
/// sobald der Worker fertig ist.
#[derive(Debug, Default)]
struct TicketRegistry {
    in_flight: HashSet<RouteTicket>,
    cancelled: HashSet<RouteTicket>,
}

impl TicketRegistry {
    fn start(&mut self, ticket: RouteTicket) {
        self.in_flight.insert(ticket);
    }

    fn cancel(&mut self, ticket: RouteTicket) {
        if self.in_flight.contains(&ticket) {
            self.cancelled.insert(ticket);
        }
    }

    /// Gibt `true` zurück, wenn das Ergebnis gemeldet werden soll.
    fn finish(&mut self, ticket: RouteTicket) -> bool {
        self.in_flight.remove(&ticket);
        !self.cancelled.remove(&ticket)
    }
}

/// [`RouteEngine`] auf einem Worker-Thread pro Anfrage.
///
/// Abgebrochene Tickets melden kein Ergebnis mehr; die HTTP-Anfrage selbst
/// läuft zu Ende.
pub struct OsrmRouteEngine {
    client: reqwest::blocking::Client,
    base_url: String,
    sender: IntentSender,
    tickets: Arc<Mutex<TicketRegistry>>,
}

impl OsrmRouteEngine {
    /// Erstellt die Engine mit eigenem HTTP-Client.
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Duration,
        sender: IntentSender,
    ) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            sender,
            tickets: Arc::default(),
        })
    }

    fn fetch(
        client: &reqwest::blocking::Client,
        base_url: &str,
        from: LatLng,
        to: LatLng,
    ) -> Result<RouteResponse, ServiceError> {
        let url = format!(
            "{base_url}/route/v1/driving/{},{};{},{}",
            from.lng, from.lat, to.lng, to.lat
        );
        let body = client
            .get(url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()?
            .text()?;
        route_from_response(&body)
    }
}

impl RouteEngine for OsrmRouteEngine {
    fn request_route(&mut self, ticket: RouteTicket, from: LatLng, to: LatLng) {
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let sender = self.sender.clone();
        let tickets = Arc::clone(&self.tickets);
        lock_tickets(&tickets).start(ticket);

        std::thread::spawn(move || {
            let result = Self::fetch(&client, &base_url, from, to);
            if !lock_tickets(&tickets).finish(ticket) {
                log::debug!("Route {:?} abgebrochen, Ergebnis verworfen", ticket);
                return;
            }
            let intent = match result {
                Ok(route) => AppIntent::RouteFound { ticket, route },
                Err(e) => {
                    log::warn!("Routing {} → {} fehlgeschlagen: {}", from, to, e);
                    AppIntent::RoutingFailed {
                        ticket,
                        reason: e.to_string(),
                    }
                }
            };
            if sender.send(intent).is_err() {
                log::debug!("Routen-Ergebnis verworfen: Host-Kanal geschlossen");
            }
        });
    }

    fn cancel_route(&mut self, ticket: RouteTicket) {
        lock_tickets(&self.tickets).cancel(ticket);
    }
}

fn lock_tickets(tickets: &Mutex<TicketRegistry>) -> MutexGuard<'_, TicketRegistry> {
    tickets.lock().unwrap_or_else(PoisonError::into_inner)
}
