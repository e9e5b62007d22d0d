//! Seitenleiste "Saved Locations" mit Lösch-Buttons.

use crate::app::{AppIntent, MapSession};

/// Rendert die Marker-Liste und gibt die ausgelösten Intents zurück.
pub fn render_marker_list(ctx: &egui::Context, session: &MapSession) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let route_target = session.route.target();

    egui::SidePanel::left("marker_list")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading("Saved Locations");
            ui.separator();

            if session.markers.is_empty() {
                ui.label("Click on the map to save a location.");
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for marker in session.markers.snapshot() {
                    let key = marker.key();
                    ui.horizontal(|ui| {
                        let selected = route_target == Some(key);
                        if ui.selectable_label(selected, marker.list_label()).clicked() {
                            events.push(AppIntent::MarkerListItemClicked { key });
                        }
                        if ui.small_button("Delete").clicked() {
                            events.push(AppIntent::DeleteMarkerRequested { key });
                        }
                    });
                }
            });
        });

    events
}
