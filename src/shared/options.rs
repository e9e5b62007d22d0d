//! Zentrale Konfiguration für den POI-Routenplaner.
//!
//! `PlannerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::LatLng;
use crate::storage::USER_MARKERS_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Karte ───────────────────────────────────────────────────────────

/// Startzentrum der Karte (Cebu City)
pub const DEFAULT_CENTER: LatLng = LatLng::new(10.3157, 123.8854);
/// Start-Zoomstufe
pub const DEFAULT_ZOOM: f64 = 10.0;
/// Zoomstufe nach erfolgreicher Standortbestimmung
pub const LOCATED_ZOOM: f64 = 13.0;

// ── Persistenz ──────────────────────────────────────────────────────

/// Verzeichnisname des Datenspeichers neben der Konfiguration
pub const DATA_DIR_NAME: &str = "poi_route_planner_data";

// ── Texte ───────────────────────────────────────────────────────────

/// Ortsname, wenn die Namensauflösung nichts liefert
pub const FALLBACK_PLACE_LABEL: &str = "Unknown Location";
/// Beschriftung der eigenen Position
pub const USER_POSITION_LABEL: &str = "You are here!";

// ── Dienste ─────────────────────────────────────────────────────────

/// Basis-URL des Reverse-Geocoding-Dienstes
pub const NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
/// Basis-URL der Routing-Engine
pub const OSRM_BASE_URL: &str = "https://router.project-osrm.org";
/// Timeout für HTTP-Anfragen in Sekunden
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// ── Marker-Rendering ────────────────────────────────────────────────

/// Radius eines Marker-Overlays in Pixel
pub const MARKER_RADIUS_PX: f32 = 7.0;
/// Füllfarbe der Marker
pub const MARKER_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Füllfarbe des Routenziels
pub const MARKER_COLOR_TARGET: [f32; 4] = [1.0, 0.6, 0.0, 1.0];
/// Farbe der eigenen Position
pub const USER_POSITION_COLOR: [f32; 4] = [0.1, 0.5, 1.0, 1.0];
/// Linienfarbe der Route
pub const ROUTE_COLOR: [f32; 4] = [0.2, 0.4, 0.9, 0.9];
/// Linienbreite der Route in Pixel
pub const ROUTE_WIDTH_PX: f32 = 4.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Laufzeit-Optionen, als TOML neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerOptions {
    // ── Karte ───────────────────────────────────────────────────
    /// Startzentrum
    pub default_center: LatLng,
    /// Start-Zoomstufe
    pub default_zoom: f64,
    /// Zoomstufe nach Standortbestimmung
    pub located_zoom: f64,

    // ── Persistenz ──────────────────────────────────────────────
    /// Speicherschlüssel der Marker-Liste
    pub storage_key: String,
    /// Datenverzeichnis (relativ zur Konfiguration oder absolut)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    // ── Texte ───────────────────────────────────────────────────
    /// Ortsname, wenn die Namensauflösung nichts liefert
    pub fallback_place_label: String,
    /// Beschriftung der eigenen Position
    pub user_position_label: String,

    // ── Verhalten ───────────────────────────────────────────────
    /// Feste Position für Hosts ohne Geolocation
    #[serde(default)]
    pub home_position: Option<LatLng>,
    /// Route verwerfen, wenn ihr Ziel-Marker gelöscht wird
    #[serde(default)]
    pub clear_route_on_delete: bool,

    // ── Dienste ─────────────────────────────────────────────────
    /// Basis-URL des Reverse-Geocoding-Dienstes
    pub nominatim_base_url: String,
    /// Basis-URL der Routing-Engine
    pub osrm_base_url: String,
    /// User-Agent für HTTP-Anfragen
    pub http_user_agent: String,
    /// Timeout für HTTP-Anfragen in Sekunden
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    // ── Rendering ───────────────────────────────────────────────
    /// Radius eines Marker-Overlays in Pixel
    pub marker_radius_px: f32,
    /// Füllfarbe der Marker
    pub marker_color: [f32; 4],
    /// Füllfarbe des Routenziels
    pub marker_color_target: [f32; 4],
    /// Farbe der eigenen Position
    pub user_position_color: [f32; 4],
    /// Linienfarbe der Route
    pub route_color: [f32; 4],
    /// Linienbreite der Route in Pixel
    pub route_width_px: f32,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            default_zoom: DEFAULT_ZOOM,
            located_zoom: LOCATED_ZOOM,

            storage_key: USER_MARKERS_KEY.to_string(),
            data_dir: None,

            fallback_place_label: FALLBACK_PLACE_LABEL.to_string(),
            user_position_label: USER_POSITION_LABEL.to_string(),

            home_position: None,
            clear_route_on_delete: false,

            nominatim_base_url: NOMINATIM_BASE_URL.to_string(),
            osrm_base_url: OSRM_BASE_URL.to_string(),
            http_user_agent: format!("poi-route-planner/{}", env!("CARGO_PKG_VERSION")),
            http_timeout_secs: HTTP_TIMEOUT_SECS,

            marker_radius_px: MARKER_RADIUS_PX,
            marker_color: MARKER_COLOR,
            marker_color_target: MARKER_COLOR_TARGET,
            user_position_color: USER_POSITION_COLOR,
            route_color: ROUTE_COLOR,
            route_width_px: ROUTE_WIDTH_PX,
        }
    }
}

fn default_http_timeout_secs() -> u64 {
    HTTP_TIMEOUT_SECS
}

impl PlannerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fehlt sie oder ist sie fehlerhaft,
    /// gelten die Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt nicht endliche Koordinaten durch die Standardwerte.
    fn sanitized(mut self) -> Self {
        if !self.default_center.is_finite() {
            log::warn!(
                "default_center ungültig ({}), verwende Standardzentrum",
                self.default_center
            );
            self.default_center = DEFAULT_CENTER;
        }
        if let Some(home) = self.home_position.filter(|p| !p.is_finite()) {
            log::warn!("home_position ungültig ({}), wird ignoriert", home);
            self.home_position = None;
        }
        self
    }

    /// Speichert die Optionen als TOML.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad der Konfigurationsdatei neben der Binary.
    pub fn config_path() -> PathBuf {
        Self::base_dir().join("poi_route_planner.toml")
    }

    /// Datenverzeichnis; relative Angaben gelten ab dem Verzeichnis der Binary.
    pub fn data_dir_path(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => Self::base_dir().join(dir),
            None => Self::base_dir().join(DATA_DIR_NAME),
        }
    }

    /// HTTP-Timeout als `Duration`
    pub fn http_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.http_timeout_secs)
    }

    fn base_dir() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("poi-route-planner"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf()
    }
}
