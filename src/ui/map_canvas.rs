//! Karten-Viewport: zeichnet die Szene und übersetzt Eingaben in Intents.

use crate::app::{AppIntent, MapSession};
use crate::core::{LatLng, MapCamera};
use crate::services::{MapScene, OverlayHandle};
use crate::shared::PlannerOptions;
use glam::DVec2;

/// Scroll-Pixel pro Zoomstufe
const SCROLL_PIXELS_PER_ZOOM_STEP: f64 = 120.0;
/// Zusätzlicher Klickradius um Marker in Pixel
const PICK_MARGIN_PX: f32 = 4.0;
/// Rand um eine eingepasste Route in Pixeln
const FIT_PADDING_PX: f64 = 40.0;

/// Viewport mit eigener Kamera.
pub struct MapCanvas {
    camera: MapCamera,
}

impl MapCanvas {
    /// Erstellt den Viewport mit der Startansicht aus den Optionen.
    pub fn new(options: &PlannerOptions) -> Self {
        Self {
            camera: MapCamera::new(options.default_center, options.default_zoom),
        }
    }

    /// Aktuelle Kamera (für die Statusleiste)
    pub fn camera(&self) -> &MapCamera {
        &self.camera
    }

    /// Zeichnet die Karte in den verfügbaren Platz und sammelt Intents.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        scene: &mut MapScene,
        session: &MapSession,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if let Some((center, zoom)) = scene.take_requested_view() {
            self.camera.set_view(center, zoom);
        }

        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        let size = DVec2::new(rect.width() as f64, rect.height() as f64);

        if let Some((south_west, north_east)) = scene.take_requested_bounds() {
            self.camera
                .fit_bounds(south_west, north_east, size, FIT_PADDING_PX);
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.camera
                .pan_pixels(DVec2::new(delta.x as f64, delta.y as f64));
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y) as f64;
            if scroll != 0.0 {
                self.camera.zoom_by(scroll / SCROLL_PIXELS_PER_ZOOM_STEP);
            }
        }

        let to_screen = |position: LatLng| -> egui::Pos2 {
            let p = self.camera.geo_to_screen(position, size);
            rect.min + egui::vec2(p.x as f32, p.y as f32)
        };

        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer) = response.interact_pointer_pos() {
                let radius = session.options.marker_radius_px + PICK_MARGIN_PX;
                match pick_overlay(scene, pointer, radius, &to_screen) {
                    Some(handle) => {
                        if let Some(overlay) = scene.overlays.get(&handle) {
                            events.push(overlay.on_activate.clone());
                        }
                        scene.open_popup = Some(handle);
                    }
                    None => {
                        let local = pointer - rect.min;
                        let position = self
                            .camera
                            .screen_to_geo(DVec2::new(local.x as f64, local.y as f64), size);
                        scene.open_popup = None;
                        events.push(AppIntent::MapClicked { position });
                    }
                }
            }
        }

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, egui::CornerRadius::ZERO, egui::Color32::from_gray(30));
        self.paint_grid(&painter, rect, size);

        let options = &session.options;

        if let Some((_, path)) = &scene.route {
            let points: Vec<egui::Pos2> = path.points.iter().map(|p| to_screen(*p)).collect();
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(options.route_width_px, color(options.route_color)),
            ));
        }

        let route_target = session.route.target();
        for overlay in scene.overlays.values() {
            let fill = if route_target == Some(overlay.key) {
                color(options.marker_color_target)
            } else {
                color(options.marker_color)
            };
            let center = to_screen(overlay.position);
            painter.circle_filled(center, options.marker_radius_px, fill);
            painter.circle_stroke(
                center,
                options.marker_radius_px,
                egui::Stroke::new(1.5, egui::Color32::WHITE),
            );
        }

        if let Some((position, label)) = &scene.user_position {
            let center = to_screen(*position);
            painter.circle_filled(center, 6.0, color(options.user_position_color));
            painter.text(
                center + egui::vec2(0.0, -10.0),
                egui::Align2::CENTER_BOTTOM,
                label,
                egui::FontId::proportional(13.0),
                egui::Color32::WHITE,
            );
        }

        if let Some(overlay) = scene.open_popup.and_then(|h| scene.overlays.get(&h)) {
            let anchor =
                to_screen(overlay.position) + egui::vec2(0.0, -options.marker_radius_px - 6.0);
            paint_popup(&painter, anchor, &overlay.title, &overlay.detail);
        }

        events
    }

    /// Zeichnet ein Grad-Gitter als Orientierung (ohne Kachel-Hintergrund).
    fn paint_grid(&self, painter: &egui::Painter, rect: egui::Rect, size: DVec2) {
        let top_left = self.camera.screen_to_geo(DVec2::ZERO, size);
        let bottom_right = self.camera.screen_to_geo(size, size);
        let span = (bottom_right.lng - top_left.lng).abs().max(1e-6);
        let step = grid_step(span);
        let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(55));

        let mut lng = (top_left.lng / step).floor() * step;
        while lng <= bottom_right.lng {
            let x = self.camera.geo_to_screen(LatLng::new(top_left.lat, lng), size).x as f32;
            painter.line_segment(
                [egui::pos2(rect.min.x + x, rect.min.y), egui::pos2(rect.min.x + x, rect.max.y)],
                stroke,
            );
            lng += step;
        }

        let mut lat = (bottom_right.lat / step).floor() * step;
        while lat <= top_left.lat {
            let y = self.camera.geo_to_screen(LatLng::new(lat, top_left.lng), size).y as f32;
            painter.line_segment(
                [egui::pos2(rect.min.x, rect.min.y + y), egui::pos2(rect.max.x, rect.min.y + y)],
                stroke,
            );
            lat += step;
        }
    }
}

/// Findet das oberste Overlay unter dem Zeiger.
fn pick_overlay(
    scene: &MapScene,
    pointer: egui::Pos2,
    radius: f32,
    to_screen: &impl Fn(LatLng) -> egui::Pos2,
) -> Option<OverlayHandle> {
    scene
        .overlays
        .iter()
        .rev()
        .find(|(_, overlay)| to_screen(overlay.position).distance(pointer) <= radius)
        .map(|(handle, _)| *handle)
}

/// Gitterabstand in Grad, so dass etwa zehn Linien sichtbar sind.
fn grid_step(span_degrees: f64) -> f64 {
    let raw = span_degrees / 10.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized < 2.0 {
        1.0
    } else if normalized < 5.0 {
        2.0
    } else {
        5.0
    };
    nice * magnitude
}

fn paint_popup(painter: &egui::Painter, anchor: egui::Pos2, title: &str, detail: &str) {
    let text = format!("{title}\n{detail}");
    let galley = painter.layout_no_wrap(
        text,
        egui::FontId::proportional(13.0),
        egui::Color32::BLACK,
    );
    let padding = egui::vec2(8.0, 6.0);
    let box_size = galley.size() + padding * 2.0;
    let box_rect = egui::Rect::from_min_size(
        anchor - egui::vec2(box_size.x / 2.0, box_size.y),
        box_size,
    );
    painter.rect_filled(box_rect, egui::CornerRadius::same(4), egui::Color32::WHITE);
    painter.galley(box_rect.min + padding, galley, egui::Color32::BLACK);
}

/// Hilfsfunktion: [f32; 4] mit Alpha → `Color32`.
fn color(c: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (c[0] * 255.0) as u8,
        (c[1] * 255.0) as u8,
        (c[2] * 255.0) as u8,
        (c[3] * 255.0) as u8,
    )
}
