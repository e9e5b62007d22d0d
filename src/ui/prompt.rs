//! Blockierende Bestätigungen und Hinweise über native Dialoge.

use crate::services::UserPrompt;

/// [`UserPrompt`] über `rfd`-Nachrichtendialoge.
pub struct RfdPrompt {
    title: String,
}

impl RfdPrompt {
    /// Erstellt den Prompt mit Fenstertitel.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl UserPrompt for RfdPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        rfd::MessageDialog::new()
            .set_title(self.title.as_str())
            .set_description(message)
            .set_level(rfd::MessageLevel::Info)
            .set_buttons(rfd::MessageButtons::YesNo)
            .show()
            == rfd::MessageDialogResult::Yes
    }

    fn notify(&mut self, message: &str) {
        rfd::MessageDialog::new()
            .set_title(self.title.as_str())
            .set_description(message)
            .set_level(rfd::MessageLevel::Warning)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}
