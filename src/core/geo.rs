//! Geo-Koordinaten und der typisierte Marker-Schlüssel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographische Position in Grad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine Position ohne Prüfung (Werte aus Karteneingaben sind immer endlich).
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Erstellt eine Position aus nicht vertrauenswürdigen Daten.
    /// Gibt `None` zurück, wenn eine Komponente NaN oder unendlich ist.
    pub fn try_new(lat: f64, lng: f64) -> Option<Self> {
        (lat.is_finite() && lng.is_finite()).then_some(Self { lat, lng })
    }

    /// Prüft ob beide Komponenten endlich sind.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Typisierter Schlüssel für Identitätsvergleiche.
    pub fn key(&self) -> MarkerKey {
        MarkerKey::new(self.lat, self.lng)
    }

    /// Formatiert mit 6 Nachkommastellen: `(10.000000, 123.000000)`.
    pub fn display_precise(&self) -> String {
        format!("({:.6}, {:.6})", self.lat, self.lng)
    }

    /// Formatiert kurz für Listen: `Lat: 10.0000, Lng: 123.0000`.
    pub fn display_short(&self) -> String {
        format!("Lat: {:.4}, Lng: {:.4}", self.lat, self.lng)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

/// Zusammengesetzter Schlüssel `(lat, lng)` eines Markers.
///
/// Vergleicht exakt über die Bitmuster der beiden `f64`-Werte. `-0.0` wird auf
/// `0.0` normalisiert, damit Gleichheit der numerischen Gleichheit entspricht.
/// Es gibt keine Toleranz und kein Snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerKey {
    lat_bits: u64,
    lng_bits: u64,
}

impl MarkerKey {
    /// Baut den Schlüssel aus zwei Koordinaten.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat_bits: normalized_bits(lat),
            lng_bits: normalized_bits(lng),
        }
    }

    /// Breitengrad des Schlüssels
    pub fn lat(&self) -> f64 {
        f64::from_bits(self.lat_bits)
    }

    /// Längengrad des Schlüssels
    pub fn lng(&self) -> f64 {
        f64::from_bits(self.lng_bits)
    }

    /// Position des Schlüssels
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat(), self.lng())
    }
}

impl From<LatLng> for MarkerKey {
    fn from(position: LatLng) -> Self {
        position.key()
    }
}

impl fmt::Display for MarkerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat(), self.lng())
    }
}

fn normalized_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}
