use super::{LatLng, MarkerKey};
use serde::{Deserialize, Serialize};

/// Ein vom Benutzer gespeicherter Ort.
///
/// Die Identität ist das Paar `(lat, lng)`. Marker werden nie in-place
/// verändert; der [`MarkerStore`](super::MarkerStore) ersetzt immer die ganze Liste.
/// Das Serde-Format entspricht dem persistierten Snapshot `{lat, lng, name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
    /// Anzeigename (aus Reverse-Geocoding oder Fallback)
    pub name: String,
}

impl Marker {
    /// Erstellt einen neuen Marker an einer Position
    pub fn new(position: LatLng, name: impl Into<String>) -> Self {
        Self {
            lat: position.lat,
            lng: position.lng,
            name: name.into(),
        }
    }

    /// Identitätsschlüssel des Markers
    pub fn key(&self) -> MarkerKey {
        MarkerKey::new(self.lat, self.lng)
    }

    /// Position des Markers
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Listeneintrag: `Name (Lat: 10.0000, Lng: 123.0000)`
    pub fn list_label(&self) -> String {
        format!("{} ({})", self.name, self.position().display_short())
    }
}
