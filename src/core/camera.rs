//! Karten-Kamera mit Pan und Zoom (Web-Mercator, Slippy-Map-Zoomstufen).

use super::LatLng;
use glam::DVec2;
use std::f64::consts::PI;

/// Kantenlänge einer Kachel in Pixeln bei ganzzahligem Zoom.
const TILE_SIZE: f64 = 256.0;
/// Grenze der Web-Mercator-Projektion in Grad.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Kamera über der Weltkarte
#[derive(Debug, Clone)]
pub struct MapCamera {
    /// Kartenmitte
    pub center: LatLng,
    /// Zoomstufe (0 = ganze Welt in einer Kachel)
    pub zoom: f64,
}

impl MapCamera {
    /// Minimale Zoomstufe.
    pub const ZOOM_MIN: f64 = 1.0;
    /// Maximale Zoomstufe.
    pub const ZOOM_MAX: f64 = 19.0;

    /// Erstellt eine Kamera
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self {
            center: clamp_position(center),
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Zentriert auf eine Position mit neuer Zoomstufe
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.center = clamp_position(center);
        self.zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Passt Mitte und Zoom so an, dass das Rechteck `south_west`..`north_east`
    /// mit `padding` Pixeln Rand in den Bildschirm passt.
    pub fn fit_bounds(
        &mut self,
        south_west: LatLng,
        north_east: LatLng,
        screen_size: DVec2,
        padding: f64,
    ) {
        let base = Self {
            center: self.center,
            zoom: 0.0,
        };
        let a = base.project(clamp_position(south_west));
        let b = base.project(clamp_position(north_east));
        self.center = clamp_position(base.unproject((a + b) * 0.5));

        let span = (b - a).abs();
        let available = (screen_size - DVec2::splat(2.0 * padding)).max(DVec2::ONE);
        let zoom = (available.x / span.x).log2().min((available.y / span.y).log2());
        // Ein einzelner Punkt hat keine Ausdehnung: Zoom bleibt
        if zoom.is_finite() {
            self.zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        }
    }

    /// Verschiebt die Kamera um ein Delta in Screen-Pixeln
    pub fn pan_pixels(&mut self, delta: DVec2) {
        let center_px = self.project(self.center) - delta;
        self.center = clamp_position(self.unproject(center_px));
    }

    /// Ändert die Zoomstufe um `steps` (positiv = hinein)
    pub fn zoom_by(&mut self, steps: f64) {
        self.zoom = (self.zoom + steps).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Konvertiert eine Position zu Screen-Koordinaten (Ursprung oben links).
    pub fn geo_to_screen(&self, position: LatLng, screen_size: DVec2) -> DVec2 {
        self.project(position) - self.project(self.center) + screen_size * 0.5
    }

    /// Konvertiert Screen-Koordinaten zu einer Position.
    pub fn screen_to_geo(&self, screen_pos: DVec2, screen_size: DVec2) -> LatLng {
        let world_px = screen_pos - screen_size * 0.5 + self.project(self.center);
        self.unproject(world_px)
    }

    fn world_size(&self) -> f64 {
        TILE_SIZE * 2f64.powf(self.zoom)
    }

    fn project(&self, position: LatLng) -> DVec2 {
        let size = self.world_size();
        let lat = position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (position.lng + 180.0) / 360.0 * size;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
        DVec2::new(x, y)
    }

    fn unproject(&self, world_px: DVec2) -> LatLng {
        let size = self.world_size();
        let lng = world_px.x / size * 360.0 - 180.0;
        let n = PI * (1.0 - 2.0 * world_px.y / size);
        let lat = n.sinh().atan().to_degrees();
        LatLng::new(lat, lng)
    }
}

/// Begrenzt die Breite und faltet die Länge nach `[-180, 180)`.
/// Nicht endliche Komponenten werden zu `0.0`.
fn clamp_position(position: LatLng) -> LatLng {
    let lat = if position.lat.is_finite() {
        position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    } else {
        0.0
    };
    let lng = if position.lng.is_finite() {
        (position.lng + 180.0).rem_euclid(360.0) - 180.0
    } else {
        0.0
    };
    LatLng::new(lat, lng)
}
