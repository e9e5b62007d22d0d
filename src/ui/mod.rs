//! UI-Layer mit egui: Karten-Viewport, Marker-Liste, Routen-Fenster, Status-Bar.
//!
//! Alle Komponenten lesen die Session nur und geben Intents zurück.

pub mod map_canvas;
pub mod marker_list;
pub mod prompt;
pub mod route_panel;
pub mod status;

pub use map_canvas::MapCanvas;
pub use marker_list::render_marker_list;
pub use prompt::RfdPrompt;
pub use route_panel::render_route_panel;
pub use status::render_status_bar;
