//! Map Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, MapSession};
use crate::services::{IntentReceiver, Services};

/// Orchestriert UI-Events und Dienst-Abschlüsse auf die MapSession.
pub struct MapController {
    services: Services,
}

impl MapController {
    /// Erstellt einen Controller mit den injizierten Kollaborateuren.
    pub fn new(services: Services) -> Self {
        Self { services }
    }

    /// Zugriff auf die Kollaborateure (z.B. für den Host).
    pub fn services_mut(&mut self) -> &mut Services {
        &mut self.services
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        session: &mut MapSession,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(session, intent);
        for command in commands {
            self.handle_command(session, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, session: &MapSession, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(session, intent)
    }

    /// Führt mutierende Commands auf der MapSession aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        session: &mut MapSession,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        session.command_log.record(&command);
        use super::handlers;
        let services = &mut self.services;

        match command {
            // === Ansicht & Standort ===
            AppCommand::CenterDefaultView => handlers::location::center_default(session, services),
            AppCommand::RequestGeolocation => handlers::location::request(session, services),
            AppCommand::SetUserLocation { position } => {
                handlers::location::set(session, services, position)
            }
            AppCommand::MarkGeolocationUnavailable { reason } => {
                handlers::location::mark_unavailable(session, reason)
            }

            // === Marker ===
            AppCommand::LoadMarkers => handlers::markers::load(session),
            AppCommand::ReconcileOverlays => handlers::markers::reconcile(session, services),
            AppCommand::ConfirmAddMarker { position } => {
                handlers::markers::confirm_add(session, services, position)
            }
            AppCommand::CompleteAddMarker { request, name } => {
                handlers::markers::complete_add(session, services, request, name)
            }
            AppCommand::ConfirmDeleteMarker { key } => {
                handlers::markers::confirm_delete(session, services, key)
            }

            // === Route ===
            AppCommand::RequestRoute { from, to, label } => {
                handlers::route::request(session, services, from, to, &label)
            }
            AppCommand::ApplyRouteFound { ticket, route } => {
                handlers::route::apply_found(session, services, ticket, &route)
            }
            AppCommand::ApplyRoutingFailure { ticket, reason } => {
                handlers::route::apply_failure(session, services, ticket, &reason)
            }
            AppCommand::ClearRoute => handlers::route::clear(session, services),

            // === Hinweise ===
            AppCommand::NotifyUser { message } => {
                handlers::notice::notify(session, services, &message)
            }
        }

        Ok(())
    }

    /// Verarbeitet alle bereits eingetroffenen Dienst-Abschlüsse.
    /// Gibt die Anzahl verarbeiteter Intents zurück.
    pub fn drain(
        &mut self,
        session: &mut MapSession,
        receiver: &IntentReceiver,
    ) -> anyhow::Result<usize> {
        let mut handled = 0;
        for intent in receiver.try_iter() {
            self.handle_intent(session, intent)?;
            handled += 1;
        }
        Ok(handled)
    }
}
