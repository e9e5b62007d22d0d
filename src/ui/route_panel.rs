//! "Route Guide"-Fenster, sichtbar solange eine Route läuft oder angezeigt wird.

use crate::app::{AppIntent, MapSession};

/// Rendert das Routen-Fenster und gibt die ausgelösten Intents zurück.
pub fn render_route_panel(ctx: &egui::Context, session: &MapSession) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let route = &session.route;

    if route.summary().is_none() && !route.is_pending() {
        return events;
    }

    egui::Window::new("Route Guide")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .show(ctx, |ui| {
            ui.set_min_width(220.0);

            if let Some(label) = route.pending_label() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(format!("Calculating route to {label}…"));
                });
            } else if let Some(summary) = route.summary() {
                ui.strong(&summary.target_name);
                egui::Grid::new("route_summary").show(ui, |ui| {
                    ui.label("Distance:");
                    ui.label(summary.distance_label());
                    ui.end_row();
                    ui.label("Time:");
                    ui.label(summary.eta_label());
                    ui.end_row();
                });
            }

            ui.separator();
            if ui.button("Close").clicked() {
                events.push(AppIntent::RouteDismissed);
            }
        });

    events
}
