//! Dream Builder Core
//!
//! UI-free state for the dream tracker:
//! - domain: Dream records, categories and the filter selector
//! - tracker: the in-memory collection and its transitions
//! - filter / stats: read-only derivations over the collection
//! - draft: staging state for the creation form

pub mod config;
pub mod domain;
pub mod draft;
pub mod error;
pub mod filter;
pub mod stats;
pub mod tracker;


pub use config::TrackerConfig;
pub use domain::{clamp_progress, Category, CategoryFilter, Dream, DreamId, PROGRESS_MAX, PROGRESS_MIN};
pub use draft::{DreamDraft, NewDream};
pub use error::{DreamError, DreamResult};
pub use filter::{empty_message, filtered_view};
pub use stats::Stats;
pub use tracker::{IgnoreReason, Intent, Outcome, Tracker};
