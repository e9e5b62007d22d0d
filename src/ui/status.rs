//! Status-Bar am unteren Bildschirmrand.

use crate::app::{GeolocationState, MapSession};
use crate::core::MapCamera;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, session: &MapSession, camera: &MapCamera) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Markers: {}", session.markers.len()));

            ui.separator();

            let location = match (&session.user_location, &session.geolocation) {
                (Some(position), _) => position.display_short(),
                (None, GeolocationState::Unavailable(_)) => "Location: unavailable".to_string(),
                (None, _) => "Location: detecting…".to_string(),
            };
            ui.label(location);

            ui.separator();

            ui.label(format!(
                "Zoom: {:.1} | Center: {}",
                camera.zoom,
                camera.center.display_short()
            ));

            // Letzter Hinweis (z.B. Duplikat, Routing-Fehler)
            if let Some(ref msg) = session.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
