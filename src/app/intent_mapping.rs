//! Mapping von UI- und Dienst-Intents auf mutierende App-Commands.

use super::messages;
use super::{AppCommand, AppIntent, MapSession};
use crate::core::MarkerKey;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(session: &MapSession, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StartupRequested => vec![
            AppCommand::CenterDefaultView,
            AppCommand::LoadMarkers,
            AppCommand::ReconcileOverlays,
            AppCommand::RequestGeolocation,
        ],
        AppIntent::MapClicked { position } => {
            if session.markers.contains(position.key()) {
                vec![AppCommand::NotifyUser {
                    message: messages::DUPLICATE_MARKER.to_string(),
                }]
            } else {
                vec![AppCommand::ConfirmAddMarker { position }]
            }
        }
        AppIntent::MarkerListItemClicked { key } | AppIntent::OverlayActivated { key } => {
            route_to_marker(session, key)
        }
        AppIntent::DeleteMarkerRequested { key } => {
            if session.markers.contains(key) {
                vec![AppCommand::ConfirmDeleteMarker { key }]
            } else {
                log::debug!("Löschen ignoriert: kein Marker bei {}", key);
                vec![]
            }
        }
        AppIntent::RouteDismissed => vec![AppCommand::ClearRoute],
        AppIntent::PlaceNameResolved { request, outcome } => {
            let fallback = &session.options.fallback_place_label;
            let name = match outcome {
                Ok(name) if !name.trim().is_empty() => name,
                Ok(_) => fallback.clone(),
                Err(reason) => {
                    log::warn!("Namensauflösung fehlgeschlagen, verwende '{}': {}", fallback, reason);
                    fallback.clone()
                }
            };
            vec![AppCommand::CompleteAddMarker { request, name }]
        }
        AppIntent::RouteFound { ticket, route } => {
            vec![AppCommand::ApplyRouteFound { ticket, route }]
        }
        AppIntent::RoutingFailed { ticket, reason } => {
            vec![AppCommand::ApplyRoutingFailure { ticket, reason }]
        }
        AppIntent::GeolocationResolved { position } => {
            if session.user_location.is_some() {
                log::debug!("Weitere Standortmeldung ignoriert: {}", position);
                vec![]
            } else if !position.is_finite() {
                vec![AppCommand::MarkGeolocationUnavailable {
                    reason: format!("ungültige Position gemeldet: {position}"),
                }]
            } else {
                vec![AppCommand::SetUserLocation { position }]
            }
        }
        AppIntent::GeolocationFailed { reason } => {
            vec![AppCommand::MarkGeolocationUnavailable { reason }]
        }
    }
}

fn route_to_marker(session: &MapSession, key: MarkerKey) -> Vec<AppCommand> {
    let Some(marker) = session.markers.get(key) else {
        log::debug!("Route ignoriert: kein Marker bei {}", key);
        return vec![];
    };
    match session.user_location {
        Some(from) => vec![AppCommand::RequestRoute {
            from,
            to: marker.position(),
            label: marker.name.clone(),
        }],
        None => vec![AppCommand::NotifyUser {
            message: messages::LOCATION_PENDING.to_string(),
        }],
    }
}
