//! Headless-Karte: hält den sichtbaren Karteninhalt als Daten.
//!
//! Der egui-Host rendert direkt aus der [`MapScene`], Tests prüfen sie.

use super::{MapView, MarkerOverlay, OverlayHandle, RouteLayerHandle};
use crate::app::AppIntent;
use crate::core::{LatLng, MarkerKey, RoutePath};
use indexmap::IndexMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Ein Marker-Overlay in der Szene
#[derive(Debug, Clone)]
pub struct SceneOverlay {
    /// Schlüssel des Markers
    pub key: MarkerKey,
    /// Position
    pub position: LatLng,
    /// Popup-Titel
    pub title: String,
    /// Popup-Detail
    pub detail: String,
    /// Intent bei Klick
    pub on_activate: AppIntent,
}

/// Sichtbarer Karteninhalt
#[derive(Debug, Default)]
pub struct MapScene {
    /// Overlays in Erstellungsreihenfolge
    pub overlays: IndexMap<OverlayHandle, SceneOverlay>,
    /// Overlay mit geöffnetem Popup
    pub open_popup: Option<OverlayHandle>,
    /// Aktuell gezeichnete Route
    pub route: Option<(RouteLayerHandle, RoutePath)>,
    /// Eigene Position mit Beschriftung
    pub user_position: Option<(LatLng, String)>,
    /// Vom Controller angeforderte Ansicht (wird vom Host abgeholt)
    pub requested_view: Option<(LatLng, f64)>,
    /// Anzuzeigendes Rechteck `(südwest, nordost)`, z.B. einer neuen Route
    pub requested_bounds: Option<(LatLng, LatLng)>,
    /// Anzahl erstellter Overlays seit Start
    pub overlays_created: usize,
    /// Anzahl entfernter Overlays seit Start
    pub overlays_removed: usize,
    next_handle: u64,
}

impl MapScene {
    fn next_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    /// Findet das Overlay eines Markers
    pub fn overlay_for(&self, key: MarkerKey) -> Option<(OverlayHandle, &SceneOverlay)> {
        self.overlays
            .iter()
            .find(|(_, overlay)| overlay.key == key)
            .map(|(handle, overlay)| (*handle, overlay))
    }

    /// Gibt die angeforderte Ansicht einmalig zurück.
    pub fn take_requested_view(&mut self) -> Option<(LatLng, f64)> {
        self.requested_view.take()
    }

    /// Gibt das angeforderte Rechteck einmalig zurück.
    pub fn take_requested_bounds(&mut self) -> Option<(LatLng, LatLng)> {
        self.requested_bounds.take()
    }
}

/// [`MapView`] über einer geteilten [`MapScene`].
#[derive(Debug, Clone, Default)]
pub struct SceneMapView {
    scene: Arc<Mutex<MapScene>>,
}

impl SceneMapView {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Geteilte Szene für Host und Tests
    pub fn scene(&self) -> Arc<Mutex<MapScene>> {
        Arc::clone(&self.scene)
    }

    /// Sperrt die Szene. Ein vergifteter Lock wird übernommen, da die Szene
    /// nur Anzeige-Daten enthält.
    pub fn lock(&self) -> MutexGuard<'_, MapScene> {
        self.scene.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MapView for SceneMapView {
    fn add_marker_overlay(&mut self, overlay: MarkerOverlay) -> OverlayHandle {
        let mut scene = self.lock();
        let handle = OverlayHandle(scene.next_handle());
        scene.overlays.insert(
            handle,
            SceneOverlay {
                key: overlay.key,
                position: overlay.position,
                title: overlay.title,
                detail: overlay.detail,
                on_activate: overlay.on_activate,
            },
        );
        scene.overlays_created += 1;
        handle
    }

    fn remove_overlay(&mut self, handle: OverlayHandle) {
        let mut scene = self.lock();
        if scene.overlays.shift_remove(&handle).is_some() {
            scene.overlays_removed += 1;
        }
        if scene.open_popup == Some(handle) {
            scene.open_popup = None;
        }
    }

    fn open_popup(&mut self, handle: OverlayHandle) {
        let mut scene = self.lock();
        if scene.overlays.contains_key(&handle) {
            scene.open_popup = Some(handle);
        }
    }

    fn show_route(&mut self, path: &RoutePath) -> RouteLayerHandle {
        let mut scene = self.lock();
        let handle = RouteLayerHandle(scene.next_handle());
        scene.route = Some((handle, path.clone()));
        handle
    }

    fn remove_route(&mut self, handle: RouteLayerHandle) {
        let mut scene = self.lock();
        if scene.route.as_ref().is_some_and(|(h, _)| *h == handle) {
            scene.route = None;
        }
    }

    fn set_view(&mut self, center: LatLng, zoom: f64) {
        let mut scene = self.lock();
        scene.requested_view = Some((center, zoom));
        scene.requested_bounds = None;
    }

    fn fit_bounds(&mut self, south_west: LatLng, north_east: LatLng) {
        let mut scene = self.lock();
        scene.requested_bounds = Some((south_west, north_east));
        scene.requested_view = None;
    }

    fn show_user_position(&mut self, position: LatLng, label: &str) {
        self.lock().user_position = Some((position, label.to_string()));
    }
}
