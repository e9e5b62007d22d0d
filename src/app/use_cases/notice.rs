//! Hinweise an den Benutzer.

use crate::app::MapSession;
use crate::services::Services;

/// Zeigt einen Hinweis an und merkt ihn für die Statusleiste.
pub fn notify(session: &mut MapSession, services: &mut Services, message: &str) {
    log::info!("Hinweis: {}", message);
    services.prompt.notify(message);
    session.status_message = Some(message.to_string());
}
