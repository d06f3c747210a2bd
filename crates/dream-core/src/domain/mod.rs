//! Domain Layer
//!
//! Core entities and their business rules.

mod category;
mod dream;
mod entity;

pub use category::{Category, CategoryFilter};
pub use dream::{clamp_progress, Dream, DreamId, PROGRESS_MAX, PROGRESS_MIN};
pub use entity::{position_of, Entity};
