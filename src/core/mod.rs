//! Core-Domänentypen: Koordinaten, Marker, Marker-Store, Routen, Kamera.

pub mod camera;
pub mod geo;
pub mod marker;
pub mod marker_store;
pub mod route;

pub use camera::MapCamera;
pub use geo::{LatLng, MarkerKey};
pub use marker::Marker;
pub use marker_store::{LoadOutcome, MarkerStore, MarkerStoreError};
pub use route::{RoutePath, RouteResponse, RouteSummary};
