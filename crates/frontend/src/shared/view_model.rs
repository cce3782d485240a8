use contracts::host::metadata::EntityMetadataCollection;
use leptos::prelude::*;

use crate::host;

/// Session-wide view model: the entity metadata list is fetched once and
/// shared by every component that needs the table catalog.
#[derive(Clone, Copy)]
pub struct AppViewModel {
    pub metadata: RwSignal<Option<EntityMetadataCollection>>,
    pub metadata_loaded: RwSignal<bool>,
}

impl AppViewModel {
    pub fn new() -> Self {
        Self {
            metadata: RwSignal::new(None),
            metadata_loaded: RwSignal::new(false),
        }
    }

    /// Fetch the entity catalog if it has not been loaded yet.
    ///
    /// A failed fetch is reported on the console and leaves
    /// `metadata_loaded` false, so a later call retries.
    pub fn ensure_metadata(&self) {
        if self.metadata_loaded.get_untracked() {
            return;
        }
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match host::dataverse::get_all_entities_metadata().await {
                Ok(collection) => {
                    this.metadata.set(Some(collection));
                    this.metadata_loaded.set(true);
                }
                Err(e) => log::error!("Error loading entity metadata: {e}"),
            }
        });
    }
}

impl Default for AppViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_has_no_metadata() {
        let vm = AppViewModel::new();
        assert!(vm.metadata.get_untracked().is_none());
        assert!(!vm.metadata_loaded.get_untracked());
    }
}
