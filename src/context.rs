//! Application Context
//!
//! User intents shared with every component via the Leptos Context API.

use leptos::prelude::*;

use dream_core::{Category, CategoryFilter, DreamId, IgnoreReason, Intent, Outcome, TrackerConfig};

use crate::store::{store_dispatch, store_reset_draft, AppStateStoreFields, AppStore};

#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Percentage moved by one press of +/-
    progress_step: i32,
    /// Category of a fresh draft
    default_category: Category,
}

impl AppContext {
    pub fn new(store: AppStore, config: &TrackerConfig) -> Self {
        Self {
            store,
            progress_step: config.progress_step,
            default_category: config.default_category,
        }
    }

    pub fn dispatch(&self, intent: Intent) -> Outcome {
        store_dispatch(&self.store, intent)
    }

    /// One step up (`direction > 0`) or down (`direction < 0`)
    pub fn step_progress(&self, id: DreamId, direction: i32) -> Outcome {
        self.dispatch(Intent::AdjustProgress {
            id,
            delta: direction.signum() * self.progress_step,
        })
    }

    pub fn delete(&self, id: DreamId) -> Outcome {
        let outcome = self.dispatch(Intent::Remove(id));
        if self.store.menu_open().get_untracked() == Some(id) {
            self.store.menu_open().set(None);
        }
        outcome
    }

    pub fn select_filter(&self, filter: CategoryFilter) {
        log::debug!("[APP] filter -> {}", filter);
        self.store.selected_filter().set(filter);
    }

    /// Open the card menu for `id`, or close it if it is already open
    pub fn toggle_menu(&self, id: DreamId) {
        self.store.menu_open().update(|open| {
            *open = if *open == Some(id) { None } else { Some(id) };
        });
    }

    pub fn open_modal(&self) {
        self.store.show_modal().set(true);
    }

    /// Close the creation dialog and discard its fields
    pub fn close_modal(&self) {
        self.store.show_modal().set(false);
        store_reset_draft(&self.store, self.default_category);
    }

    /// Create a dream from the draft. A blank draft keeps the dialog open.
    pub fn submit_draft(&self) -> Outcome {
        match self.store.draft().get_untracked().submit() {
            Ok(new_dream) => {
                let outcome = self.dispatch(Intent::Create(new_dream));
                if let Outcome::Created(_) = outcome {
                    self.close_modal();
                }
                outcome
            }
            Err(_) => Outcome::Ignored(IgnoreReason::BlankTitle),
        }
    }
}

/// Get the app context, provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dream_core::{DreamDraft, NewDream, Tracker};
    use reactive_stores::Store;

    use crate::store::AppState;

    fn make_context() -> AppContext {
        let config = TrackerConfig {
            default_category: Category::Travel,
            ..Default::default()
        };
        let store = Store::new(AppState::new(Tracker::new(), config.default_category));
        AppContext::new(store, &config)
    }

    fn fill_draft(ctx: &AppContext, title: &str, description: &str, category: Category) {
        ctx.store.draft().update(|d| {
            d.title = title.to_string();
            d.description = description.to_string();
            d.category = category;
        });
    }

    #[test]
    fn test_submit_closes_modal_and_resets_draft() {
        let owner = Owner::new();
        owner.set();
        let ctx = make_context();

        ctx.open_modal();
        fill_draft(&ctx, "Climb Kilimanjaro", "2027", Category::Health);
        let outcome = ctx.submit_draft();

        assert_eq!(outcome, Outcome::Created(DreamId(1)));
        assert!(!ctx.store.show_modal().get_untracked());
        assert_eq!(ctx.store.draft().get_untracked(), DreamDraft::with_category(Category::Travel));
        let tracker = ctx.store.tracker().get_untracked();
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.dreams()[0].category, Category::Health);
    }

    #[test]
    fn test_blank_submit_keeps_modal_and_draft() {
        let owner = Owner::new();
        owner.set();
        let ctx = make_context();

        ctx.open_modal();
        fill_draft(&ctx, "   ", "notes kept", Category::Creative);
        let before = ctx.store.draft().get_untracked();
        let outcome = ctx.submit_draft();

        assert_eq!(outcome, Outcome::Ignored(IgnoreReason::BlankTitle));
        assert!(ctx.store.show_modal().get_untracked());
        assert_eq!(ctx.store.draft().get_untracked(), before);
        assert!(ctx.store.tracker().get_untracked().is_empty());
    }

    #[test]
    fn test_cancel_resets_draft_to_default_category() {
        let owner = Owner::new();
        owner.set();
        let ctx = make_context();

        ctx.open_modal();
        fill_draft(&ctx, "Half typed", "draft", Category::Career);
        ctx.close_modal();

        assert!(!ctx.store.show_modal().get_untracked());
        assert_eq!(ctx.store.draft().get_untracked(), DreamDraft::with_category(Category::Travel));
    }

    #[test]
    fn test_delete_clears_open_menu() {
        let owner = Owner::new();
        owner.set();
        let ctx = make_context();

        ctx.dispatch(Intent::Create(NewDream::new("A", "", Category::Career)));
        ctx.dispatch(Intent::Create(NewDream::new("B", "", Category::Career)));

        ctx.toggle_menu(DreamId(1));
        assert_eq!(ctx.store.menu_open().get_untracked(), Some(DreamId(1)));

        // Deleting another card leaves the open menu alone
        ctx.delete(DreamId(2));
        assert_eq!(ctx.store.menu_open().get_untracked(), Some(DreamId(1)));

        assert_eq!(ctx.delete(DreamId(1)), Outcome::Removed(DreamId(1)));
        assert_eq!(ctx.store.menu_open().get_untracked(), None);
        assert!(ctx.store.tracker().get_untracked().is_empty());
    }

    #[test]
    fn test_toggle_menu_and_step_progress() {
        let owner = Owner::new();
        owner.set();
        let ctx = make_context();
        ctx.dispatch(Intent::Create(NewDream::new("A", "", Category::Career)));

        ctx.toggle_menu(DreamId(1));
        ctx.toggle_menu(DreamId(1));
        assert_eq!(ctx.store.menu_open().get_untracked(), None);

        assert_eq!(
            ctx.step_progress(DreamId(1), 1),
            Outcome::ProgressChanged { id: DreamId(1), from: 0, to: 10 }
        );
        assert_eq!(
            ctx.step_progress(DreamId(1), -3),
            Outcome::ProgressChanged { id: DreamId(1), from: 10, to: 0 }
        );
    }
}
