use super::{Geolocator, IntentSender};
use crate::app::AppIntent;
use crate::core::LatLng;

/// Standortquelle für Desktop-Hosts ohne Browser-Geolocation.
///
/// Meldet die konfigurierte Heimposition oder einen Fehler, wenn keine
/// konfiguriert ist.
pub struct FixedGeolocator {
    position: Option<LatLng>,
    sender: IntentSender,
}

impl FixedGeolocator {
    /// Erstellt die Standortquelle
    pub fn new(position: Option<LatLng>, sender: IntentSender) -> Self {
        Self { position, sender }
    }
}

impl Geolocator for FixedGeolocator {
    fn request_position(&mut self) {
        let intent = match self.position {
            Some(position) => AppIntent::GeolocationResolved { position },
            None => AppIntent::GeolocationFailed {
                reason: "Keine Heimposition konfiguriert (home_position)".to_string(),
            },
        };
        if self.sender.send(intent).is_err() {
            log::warn!("Standort-Ergebnis verworfen: Host-Kanal geschlossen");
        }
    }
}
