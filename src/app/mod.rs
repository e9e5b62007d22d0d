//! Application-Layer: Controller, Session, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod messages;
pub mod overlay_index;
pub mod route_session;
/// Session-Zustand einer Kartenansicht
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::MapController;
pub use events::{AppCommand, AppIntent};
pub use overlay_index::{MarkerOverlayIndex, ReconcileReport};
pub use route_session::{RouteResolution, RouteSession};
pub use state::{GeolocationState, MapSession};
