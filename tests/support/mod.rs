//! Skriptbare Kollaborateure für Controller-Tests ohne UI und Netzwerk.
//!
//! Alle Fakes sind `Clone` und teilen ihren Zustand, damit Tests nach der
//! Übergabe an `Services` weiterhin prüfen können, was passiert ist.

#![allow(dead_code)]

use poi_route_planner::services::{NameRequestId, RouteTicket};
use poi_route_planner::{
    AppIntent, GeoNameResolver, Geolocator, LatLng, MapController, MapSession,
    MemoryKeyValueStore, PlannerOptions, RouteEngine, RouteResponse, RoutePath, SceneMapView,
    Services, UserPrompt,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

pub const HOME: LatLng = LatLng::new(10.3157, 123.8854);
pub const CARCAR: LatLng = LatLng::new(10.0, 123.0);
pub const TALISAY: LatLng = LatLng::new(10.2447, 123.8494);

fn lock<T>(inner: &Mutex<T>) -> MutexGuard<'_, T> {
    inner.lock().expect("Test-Lock vergiftet")
}

// ── UserPrompt ──────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct PromptInner {
    answers: VecDeque<bool>,
    default_answer: bool,
    confirms: Vec<String>,
    notices: Vec<String>,
}

/// Beantwortet Bestätigungen nach Skript, sonst mit der Standardantwort.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    inner: Arc<Mutex<PromptInner>>,
}

impl ScriptedPrompt {
    pub fn answering(&self, answer: bool) {
        lock(&self.inner).default_answer = answer;
    }

    pub fn push_answer(&self, answer: bool) {
        lock(&self.inner).answers.push_back(answer);
    }

    pub fn confirms(&self) -> Vec<String> {
        lock(&self.inner).confirms.clone()
    }

    pub fn notices(&self) -> Vec<String> {
        lock(&self.inner).notices.clone()
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        let mut inner = lock(&self.inner);
        inner.confirms.push(message.to_string());
        let default_answer = inner.default_answer;
        inner.answers.pop_front().unwrap_or(default_answer)
    }

    fn notify(&mut self, message: &str) {
        lock(&self.inner).notices.push(message.to_string());
    }
}

// ── GeoNameResolver ─────────────────────────────────────────────────

/// Merkt sich Anfragen; Tests liefern die Antwort als Intent nach.
#[derive(Debug, Clone, Default)]
pub struct RecordingResolver {
    requests: Arc<Mutex<Vec<(NameRequestId, LatLng)>>>,
}

impl RecordingResolver {
    pub fn requests(&self) -> Vec<(NameRequestId, LatLng)> {
        lock(&self.requests).clone()
    }

    pub fn last_request(&self) -> NameRequestId {
        lock(&self.requests)
            .last()
            .map(|(id, _)| *id)
            .expect("Namensauflösung erwartet")
    }
}

impl GeoNameResolver for RecordingResolver {
    fn request_place_name(&mut self, request: NameRequestId, position: LatLng) {
        lock(&self.requests).push((request, position));
    }
}

// ── RouteEngine ─────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct RouteInner {
    requests: Vec<(RouteTicket, LatLng, LatLng)>,
    cancelled: Vec<RouteTicket>,
}

/// Merkt sich Routenanfragen und Abbrüche.
#[derive(Debug, Clone, Default)]
pub struct RecordingRouteEngine {
    inner: Arc<Mutex<RouteInner>>,
}

impl RecordingRouteEngine {
    pub fn requests(&self) -> Vec<(RouteTicket, LatLng, LatLng)> {
        lock(&self.inner).requests.clone()
    }

    pub fn cancelled(&self) -> Vec<RouteTicket> {
        lock(&self.inner).cancelled.clone()
    }

    pub fn last_ticket(&self) -> RouteTicket {
        lock(&self.inner)
            .requests
            .last()
            .map(|(ticket, _, _)| *ticket)
            .expect("Routenanfrage erwartet")
    }
}

impl RouteEngine for RecordingRouteEngine {
    fn request_route(&mut self, ticket: RouteTicket, from: LatLng, to: LatLng) {
        lock(&self.inner).requests.push((ticket, from, to));
    }

    fn cancel_route(&mut self, ticket: RouteTicket) {
        lock(&self.inner).cancelled.push(ticket);
    }
}

// ── Geolocator ──────────────────────────────────────────────────────

/// Zählt Standortanfragen.
#[derive(Debug, Clone, Default)]
pub struct RecordingGeolocator {
    calls: Arc<Mutex<usize>>,
}

impl RecordingGeolocator {
    pub fn calls(&self) -> usize {
        *lock(&self.calls)
    }
}

impl Geolocator for RecordingGeolocator {
    fn request_position(&mut self) {
        *lock(&self.calls) += 1;
    }
}

// ── Harness ─────────────────────────────────────────────────────────

/// Alle Fakes einer Session.
#[derive(Debug, Clone, Default)]
pub struct Fakes {
    pub view: SceneMapView,
    pub prompt: ScriptedPrompt,
    pub names: RecordingResolver,
    pub routes: RecordingRouteEngine,
    pub geolocator: RecordingGeolocator,
}

impl Fakes {
    pub fn services(&self) -> Services {
        Services {
            prompt: Box::new(self.prompt.clone()),
            map_view: Box::new(self.view.clone()),
            names: Box::new(self.names.clone()),
            routes: Box::new(self.routes.clone()),
            geolocator: Box::new(self.geolocator.clone()),
        }
    }
}

/// Controller plus Session auf In-Memory-Speicher.
pub struct Harness {
    pub controller: MapController,
    pub session: MapSession,
    pub fakes: Fakes,
    pub backend: MemoryKeyValueStore,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(PlannerOptions::default(), MemoryKeyValueStore::new())
    }

    pub fn with(options: PlannerOptions, backend: MemoryKeyValueStore) -> Self {
        let fakes = Fakes::default();
        fakes.prompt.answering(true);
        Self {
            controller: MapController::new(fakes.services()),
            session: MapSession::new(options, Box::new(backend.clone())),
            fakes,
            backend,
        }
    }

    /// Startup plus erfolgreiche Standortbestimmung bei `HOME`.
    pub fn started_at_home() -> Self {
        let mut harness = Self::new();
        harness.send(AppIntent::StartupRequested);
        harness.send(AppIntent::GeolocationResolved { position: HOME });
        harness
    }

    pub fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.session, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    /// Klick, Bestätigung und Namensauflösung in einem Schritt.
    pub fn add_marker(&mut self, position: LatLng, name: &str) {
        self.send(AppIntent::MapClicked { position });
        let request = self.fakes.names.last_request();
        self.send(AppIntent::PlaceNameResolved {
            request,
            outcome: Ok(name.to_string()),
        });
    }

    pub fn route_found(&mut self, ticket: RouteTicket, meters: f64, seconds: f64) {
        self.send(AppIntent::RouteFound {
            ticket,
            route: RouteResponse {
                path: RoutePath::new(vec![HOME, CARCAR]),
                total_distance_m: meters,
                total_time_s: seconds,
            },
        });
    }
}
