//! Ringpuffer der zuletzt ausgeführten Commands (Diagnose und Tests).

use super::AppCommand;
use std::collections::VecDeque;

const DEFAULT_LIMIT: usize = 512;

/// Hält die letzten `limit` Commands in Ausführungsreihenfolge.
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    limit: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_limit(DEFAULT_LIMIT)
    }
}

impl CommandLog {
    /// Log mit Standardgröße
    pub fn new() -> Self {
        Self::default()
    }

    /// Log, das höchstens `limit` Einträge behält (mindestens einen).
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: VecDeque::with_capacity(limit.min(DEFAULT_LIMIT)),
            limit,
        }
    }

    /// Merkt einen Command; bei vollem Log fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Einträge vom ältesten zum jüngsten
    pub fn entries(&self) -> impl Iterator<Item = &AppCommand> + '_ {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_log_drops_oldest_entry() {
        let mut log = CommandLog::with_limit(3);
        log.record(&AppCommand::LoadMarkers);
        log.record(&AppCommand::ReconcileOverlays);
        log.record(&AppCommand::RequestGeolocation);
        log.record(&AppCommand::ClearRoute);

        assert_eq!(log.len(), 3);
        assert!(matches!(
            log.entries().next(),
            Some(AppCommand::ReconcileOverlays)
        ));
        assert!(matches!(log.last(), Some(AppCommand::ClearRoute)));
    }

    #[test]
    fn test_zero_limit_keeps_latest() {
        let mut log = CommandLog::with_limit(0);
        log.record(&AppCommand::LoadMarkers);
        log.record(&AppCommand::ClearRoute);

        assert_eq!(log.len(), 1);
        assert!(matches!(log.last(), Some(AppCommand::ClearRoute)));
    }
}
