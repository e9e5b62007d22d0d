#![no_main]

use libfuzzer_sys::fuzz_target;
use poi_route_planner::core::marker_store::parse_snapshot;
use poi_route_planner::storage::USER_MARKERS_KEY as KEY;
use poi_route_planner::{MarkerStore, MemoryKeyValueStore};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let parsed = parse_snapshot(raw);

    // Laden darf nie scheitern und muss defekte Werte entfernen
    let backend = MemoryKeyValueStore::with_entry(KEY, raw);
    let mut store = MarkerStore::new(Box::new(backend.clone()), KEY);
    store.load();

    match parsed {
        Ok(markers) => {
            assert_eq!(store.len(), markers.len());
            assert!(store.snapshot().iter().all(|m| m.position().is_finite()));
        }
        Err(_) => {
            assert!(store.is_empty());
            assert!(backend.peek(KEY).is_none());
        }
    }
});
