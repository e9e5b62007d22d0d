//! POI Route Planner Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod services;
pub mod shared;
pub mod storage;
pub mod ui;

pub use app::{
    AppCommand, AppIntent, GeolocationState, MapController, MapSession, MarkerOverlayIndex,
    RouteResolution, RouteSession,
};
pub use core::{
    LatLng, LoadOutcome, MapCamera, Marker, MarkerKey, MarkerStore, MarkerStoreError, RoutePath,
    RouteResponse, RouteSummary,
};
pub use services::{
    intent_channel, GeoNameResolver, Geolocator, IntentReceiver, IntentSender, MapView,
    RouteEngine, SceneMapView, Services, UserPrompt,
};
pub use shared::PlannerOptions;
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
