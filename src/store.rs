//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Store;

use dream_core::{Category, CategoryFilter, DreamDraft, DreamId, Intent, Outcome, Tracker};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The dream collection, swapped whole on every transition
    pub tracker: Tracker,
    /// Category selector of the grid
    pub selected_filter: CategoryFilter,
    /// Fields of the creation dialog
    pub draft: DreamDraft,
    /// Whether the creation dialog is open
    pub show_modal: bool,
    /// Card whose action menu is expanded
    pub menu_open: Option<DreamId>,
}

impl AppState {
    pub fn new(tracker: Tracker, default_category: Category) -> Self {
        Self {
            tracker,
            draft: DreamDraft::with_category(default_category),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run an intent through the tracker and write back the next state
pub fn store_dispatch(store: &AppStore, intent: Intent) -> Outcome {
    let binding = store.tracker();
    let mut tracker = binding.write();
    let (next, outcome) = std::mem::take(&mut *tracker).dispatch(intent, Utc::now());
    *tracker = next;
    outcome
}

/// Put the creation dialog back to its initial fields
pub fn store_reset_draft(store: &AppStore, default_category: Category) {
    store.draft().update(|draft| {
        draft.reset();
        draft.category = default_category;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use dream_core::NewDream;

    fn make_store() -> AppStore {
        Store::new(AppState::new(Tracker::new(), Category::Travel))
    }

    #[test]
    fn test_new_state_uses_default_category() {
        let state = AppState::new(Tracker::new(), Category::Health);
        assert_eq!(state.draft.category, Category::Health);
        assert_eq!(state.selected_filter, CategoryFilter::All);
        assert!(!state.show_modal);
        assert_eq!(state.menu_open, None);
    }

    #[test]
    fn test_store_dispatch_replaces_tracker() {
        let owner = Owner::new();
        owner.set();
        let store = make_store();

        let outcome = store_dispatch(&store, Intent::Create(NewDream::new("Sail", "", Category::Travel)));
        assert_eq!(outcome, Outcome::Created(DreamId(1)));

        let outcome = store_dispatch(&store, Intent::AdjustProgress { id: DreamId(1), delta: 10 });
        assert_eq!(outcome, Outcome::ProgressChanged { id: DreamId(1), from: 0, to: 10 });
        assert_eq!(store.tracker().read_untracked().dreams()[0].progress, 10);

        let outcome = store_dispatch(&store, Intent::Remove(DreamId(7)));
        assert!(matches!(outcome, Outcome::Ignored(_)));
        assert_eq!(store.tracker().read_untracked().len(), 1);
    }

    #[test]
    fn test_store_reset_draft() {
        let owner = Owner::new();
        owner.set();
        let store = make_store();

        store.draft().update(|d| {
            d.title = "Half typed".to_string();
            d.category = Category::Career;
        });
        store_reset_draft(&store, Category::Travel);

        assert_eq!(store.draft().get_untracked(), DreamDraft::with_category(Category::Travel));
    }
}
