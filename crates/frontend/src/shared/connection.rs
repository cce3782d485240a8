use contracts::host::connection::DataverseConnection;
use leptos::prelude::*;

use crate::host;

/// Holds the single active Dataverse connection reported by the host.
///
/// `is_loading` stays true only until the first refresh completes; every
/// completion clears it, whatever the outcome.
#[derive(Clone, Copy)]
pub struct ConnectionTracker {
    pub connection: RwSignal<Option<DataverseConnection>>,
    pub is_loading: RwSignal<bool>,
}

impl ConnectionTracker {
    pub fn new() -> Self {
        Self {
            connection: RwSignal::new(None),
            is_loading: RwSignal::new(true),
        }
    }

    /// Re-fetch the active connection from the host.
    ///
    /// Overlapping calls each run to completion and the last one to finish
    /// wins; no serialization is attempted. A failed check is reported on
    /// the console only and leaves the UI showing "no connection", so
    /// callers never see an error.
    pub fn refresh(&self) {
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = host::toolbox::get_active_connection().await;
            this.complete(result);
        });
    }

    fn complete(&self, result: Result<Option<DataverseConnection>, String>) {
        match result {
            Ok(connection) => self.connection.set(connection),
            Err(e) => {
                log::error!("Error refreshing connection: {e}");
                self.connection.set(None);
            }
        }
        self.is_loading.set(false);
    }
}

impl Default for ConnectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(name: &str) -> DataverseConnection {
        DataverseConnection {
            id: "6b29fc40-ca47-1067-b31d-00dd010662da".to_string(),
            name: name.to_string(),
            url: "https://contoso-dev.crm.dynamics.com".to_string(),
            environment: "Development".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_loading_without_connection() {
        let tracker = ConnectionTracker::new();
        assert!(tracker.connection.get_untracked().is_none());
        assert!(tracker.is_loading.get_untracked());
    }

    #[test]
    fn test_successful_fetch_replaces_connection() {
        let tracker = ConnectionTracker::new();
        tracker.complete(Ok(Some(connection("Contoso Dev"))));

        assert_eq!(tracker.connection.get_untracked(), Some(connection("Contoso Dev")));
        assert!(!tracker.is_loading.get_untracked());
    }

    #[test]
    fn test_fetch_may_report_no_connection() {
        let tracker = ConnectionTracker::new();
        tracker.complete(Ok(Some(connection("Contoso Dev"))));
        tracker.complete(Ok(None));

        assert!(tracker.connection.get_untracked().is_none());
        assert!(!tracker.is_loading.get_untracked());
    }

    #[test]
    fn test_failed_fetch_falls_back_to_no_connection() {
        let tracker = ConnectionTracker::new();
        tracker.complete(Ok(Some(connection("Contoso Dev"))));
        tracker.complete(Err("host unreachable".to_string()));

        assert!(tracker.connection.get_untracked().is_none());
        assert!(!tracker.is_loading.get_untracked());
    }

    #[test]
    fn test_last_completion_wins() {
        let tracker = ConnectionTracker::new();
        // two racing refreshes resolving out of order
        tracker.complete(Ok(Some(connection("First"))));
        tracker.complete(Ok(Some(connection("Second"))));

        assert_eq!(
            tracker.connection.get_untracked().map(|c| c.name),
            Some("Second".to_string())
        );
    }
}
