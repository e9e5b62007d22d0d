//! Index der Marker-Overlays auf der Karte.
//!
//! Hält genau ein Overlay pro Marker. `reconcile` ist ein vollständiger
//! Diff-und-Sync-Durchlauf gegen die aktuelle Marker-Liste, kein
//! inkrementelles Patchen; die Listen sind benutzerkuratiert und klein.

use super::AppIntent;
use crate::core::{Marker, MarkerKey};
use crate::services::{MapView, MarkerOverlay, OverlayHandle};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Ergebnis eines Abgleichs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Neu erstellte Overlays
    pub created: usize,
    /// Entfernte Overlays
    pub destroyed: usize,
}

impl ReconcileReport {
    /// Gibt `true` zurück, wenn der Abgleich nichts verändert hat.
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.destroyed == 0
    }
}

/// Zuordnung Marker-Schlüssel → Overlay-Handle.
#[derive(Debug, Default)]
pub struct MarkerOverlayIndex {
    bindings: IndexMap<MarkerKey, OverlayHandle>,
}

impl MarkerOverlayIndex {
    /// Erstellt einen leeren Index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gleicht die Overlays mit `markers` ab.
    ///
    /// Overlays ohne Marker werden entfernt, fehlende Overlays erstellt und mit
    /// dem Intent aus `on_activate` verknüpft. Wiederholte Aufrufe mit derselben
    /// Liste erstellen oder entfernen nichts.
    pub fn reconcile<F>(
        &mut self,
        markers: &[Marker],
        view: &mut dyn MapView,
        on_activate: F,
    ) -> ReconcileReport
    where
        F: Fn(&Marker) -> AppIntent,
    {
        let wanted: HashSet<MarkerKey> = markers.iter().map(Marker::key).collect();
        let mut report = ReconcileReport::default();

        self.bindings.retain(|key, handle| {
            if wanted.contains(key) {
                true
            } else {
                view.remove_overlay(*handle);
                report.destroyed += 1;
                false
            }
        });

        for marker in markers {
            let key = marker.key();
            if self.bindings.contains_key(&key) {
                continue;
            }
            let handle = view.add_marker_overlay(MarkerOverlay {
                key,
                position: marker.position(),
                title: marker.name.clone(),
                detail: marker.position().display_precise(),
                on_activate: on_activate(marker),
            });
            self.bindings.insert(key, handle);
            report.created += 1;
        }

        if !report.is_noop() {
            log::debug!(
                "Overlays abgeglichen: {} erstellt, {} entfernt, {} aktiv",
                report.created,
                report.destroyed,
                self.bindings.len()
            );
        }
        report
    }

    /// Entfernt das Overlay eines Markers. Gibt `false` zurück, wenn keines existierte.
    pub fn remove_one(&mut self, key: MarkerKey, view: &mut dyn MapView) -> bool {
        match self.bindings.shift_remove(&key) {
            Some(handle) => {
                view.remove_overlay(handle);
                true
            }
            None => false,
        }
    }

    /// Handle des Overlays zu einem Marker
    pub fn handle(&self, key: MarkerKey) -> Option<OverlayHandle> {
        self.bindings.get(&key).copied()
    }

    /// Schlüssel aller materialisierten Marker
    pub fn keys(&self) -> impl Iterator<Item = MarkerKey> + '_ {
        self.bindings.keys().copied()
    }

    /// Anzahl der Overlays
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Gibt `true` zurück, wenn keine Overlays existieren.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
