//! UI Components
//!
//! Reusable Leptos components.

mod category_picker;
mod delete_confirm_button;
mod dream_card;
mod dream_grid;
mod empty_state;
mod filter_bar;
mod new_dream_modal;
mod stats_bar;

pub use category_picker::CategoryPicker;
pub use delete_confirm_button::DeleteConfirmButton;
pub use dream_card::DreamCard;
pub use dream_grid::DreamGrid;
pub use empty_state::EmptyState;
pub use filter_bar::FilterBar;
pub use new_dream_modal::NewDreamModal;
pub use stats_bar::StatsBar;
