use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::pagination::{paginate, IndexedItem, ItemsPage};
use super::state::ViewSettings;
use super::{ItemRecord, StoreError, TrackerStore};

impl TrackerStore {
    /// Renames one logged item by its stable index, then saves before returning.
    ///
    /// Validation and mutation happen under a single exclusive lock, so the index
    /// cannot go stale in between. A failed save is logged and the edit stays.
    #[instrument(skip(self))]
    pub async fn rename_item(&self, index: usize, new_name: &str) -> Result<ItemRecord, StoreError> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyItemName);
        }

        let _edit = self.edit_lock.lock().await;
        let renamed = {
            let mut state = self.state.write().await;
            let len = state.profile.items.len();
            let record = state
                .profile
                .items
                .get_mut(index)
                .ok_or(StoreError::InvalidItemIndex { index, len })?;
            record.name = name.to_string();
            record.clone()
        };
        info!(index, name = %renamed.name, original = %renamed.original_name, "Item renamed");

        if let Err(e) = self.save_current_profile().await {
            warn!(index, error = %e, "Rename kept in memory but not persisted");
        }
        Ok(renamed)
    }

    /// One page of the log using the current view settings unless `per_page` overrides them
    pub async fn items_page(&self, page: usize, per_page: Option<usize>) -> ItemsPage {
        let state = self.state.read().await;
        let per_page = per_page
            .map(ViewSettings::clamp_page_size)
            .unwrap_or(state.view.items_per_page);
        paginate(&state.profile.items, page, per_page, state.view.show_all)
    }

    /// Entire log, newest first, regardless of the show-all setting
    pub async fn all_items(&self) -> Vec<IndexedItem> {
        let state = self.state.read().await;
        paginate(&state.profile.items, 0, 0, true).items
    }

    pub async fn set_show_all(&self, show_all: bool) -> ViewSettings {
        let mut state = self.state.write().await;
        state.view.show_all = show_all;
        info!(show_all, "Show-all mode changed");
        state.view
    }

    /// Returns the size actually applied after clamping
    pub async fn set_items_per_page(&self, items_per_page: usize) -> usize {
        let mut state = self.state.write().await;
        state.view.items_per_page = ViewSettings::clamp_page_size(items_per_page);
        info!(
            requested = items_per_page,
            applied = state.view.items_per_page,
            "Items per page changed"
        );
        state.view.items_per_page
    }

    /// Flips the consumable filter and returns the new setting
    pub async fn toggle_filters(self: &Arc<Self>) -> bool {
        let enabled = {
            let mut state = self.state.write().await;
            state.profile.filters_enabled = !state.profile.filters_enabled;
            state.profile.filters_enabled
        };
        info!(enabled, "Consumable filter toggled");
        self.persist_in_background();
        enabled
    }
}
