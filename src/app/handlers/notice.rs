//! Handler für Benutzerhinweise.

use crate::app::use_cases;
use crate::app::MapSession;
use crate::services::Services;

/// Zeigt einen Hinweis an.
pub fn notify(session: &mut MapSession, services: &mut Services, message: &str) {
    use_cases::notice::notify(session, services, message);
}
