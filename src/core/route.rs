//! Routen-Geometrie und Zusammenfassung (Distanz/Fahrzeit).

use super::{LatLng, MarkerKey};

/// Geometrie einer berechneten Route als Polyline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutePath {
    /// Stützpunkte in Fahrtrichtung
    pub points: Vec<LatLng>,
}

impl RoutePath {
    /// Erstellt einen Pfad aus Stützpunkten
    pub fn new(points: Vec<LatLng>) -> Self {
        Self { points }
    }

    /// Anzahl der Stützpunkte
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn der Pfad keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Umschließendes Rechteck `(südwest, nordost)` der endlichen Punkte.
    pub fn bounds(&self) -> Option<(LatLng, LatLng)> {
        let mut points = self.points.iter().filter(|p| p.is_finite());
        let first = *points.next()?;
        Some(points.fold((first, first), |(sw, ne), p| {
            (
                LatLng::new(sw.lat.min(p.lat), sw.lng.min(p.lng)),
                LatLng::new(ne.lat.max(p.lat), ne.lng.max(p.lng)),
            )
        }))
    }
}

/// Ergebnis der Routing-Engine für eine Anfrage.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    /// Pfad-Geometrie
    pub path: RoutePath,
    /// Gesamtdistanz in Metern
    pub total_distance_m: f64,
    /// Gesamtfahrzeit in Sekunden
    pub total_time_s: f64,
}

/// Abgeleitete Zusammenfassung der aktiven Route (Route-Guide-Panel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// Name des Ziel-Markers
    pub target_name: String,
    /// Schlüssel des Ziel-Markers (für Hervorhebung in der Liste)
    pub target: MarkerKey,
    /// Distanz in km, auf eine Nachkommastelle gerundet (z.B. `"12.3"`)
    pub distance_km: String,
    /// Fahrzeit in ganzen Minuten (z.B. `"15"`)
    pub eta_minutes: String,
}

impl RouteSummary {
    /// Leitet die Zusammenfassung aus den Metriken der Routing-Engine ab.
    pub fn from_metrics(
        target_name: impl Into<String>,
        target: MarkerKey,
        total_distance_m: f64,
        total_time_s: f64,
    ) -> Self {
        // Halbe Zehntel runden aufwärts (f64::round), nicht zur geraden Ziffer.
        let tenths_km = (total_distance_m / 100.0).round();
        let minutes = (total_time_s / 60.0).round();

        Self {
            target_name: target_name.into(),
            target,
            distance_km: format!("{:.1}", tenths_km / 10.0),
            eta_minutes: format!("{}", minutes as i64),
        }
    }

    /// Distanz mit Einheit, z.B. `12.3 km`
    pub fn distance_label(&self) -> String {
        format!("{} km", self.distance_km)
    }

    /// Fahrzeit mit Einheit, z.B. `15 min`
    pub fn eta_label(&self) -> String {
        format!("{} min", self.eta_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> MarkerKey {
        MarkerKey::new(10.0, 123.0)
    }

    #[test]
    fn test_summary_rounds_distance_to_one_decimal() {
        let summary = RouteSummary::from_metrics("Carcar City", key(), 12_345.0, 900.0);
        assert_eq!(summary.distance_km, "12.3");
        assert_eq!(summary.distance_label(), "12.3 km");
    }

    #[test]
    fn test_summary_rounds_half_tenths_up() {
        let summary = RouteSummary::from_metrics("X", key(), 250.0, 0.0);
        assert_eq!(summary.distance_km, "0.3");
    }

    #[test]
    fn test_summary_rounds_minutes() {
        let summary = RouteSummary::from_metrics("X", key(), 1000.0, 89.0);
        assert_eq!(summary.eta_minutes, "1");
        assert_eq!(summary.eta_label(), "1 min");

        let summary = RouteSummary::from_metrics("X", key(), 1000.0, 90.0);
        assert_eq!(summary.eta_minutes, "2");
    }

    #[test]
    fn test_zero_length_route() {
        let summary = RouteSummary::from_metrics("Here", key(), 0.0, 0.0);
        assert_eq!(summary.distance_label(), "0.0 km");
        assert_eq!(summary.eta_label(), "0 min");
    }

    #[test]
    fn test_bounds_cover_all_points() {
        let path = RoutePath::new(vec![
            LatLng::new(10.3157, 123.8854),
            LatLng::new(10.0, 123.9),
            LatLng::new(10.2, 123.0),
        ]);

        let (south_west, north_east) = path.bounds().expect("Rechteck erwartet");

        assert_eq!(south_west, LatLng::new(10.0, 123.0));
        assert_eq!(north_east, LatLng::new(10.3157, 123.9));
        assert_eq!(RoutePath::default().bounds(), None);
    }
}
