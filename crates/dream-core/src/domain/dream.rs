//! Dream Entity
//!
//! A single trackable goal with a completion percentage.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::entity::Entity;

pub const PROGRESS_MIN: u8 = 0;
pub const PROGRESS_MAX: u8 = 100;

/// Identifier assigned by the tracker at creation time, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DreamId(pub u32);

impl fmt::Display for DreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked dream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dream {
    pub id: DreamId,
    /// Display title, non-empty
    pub title: String,
    /// Free text, may be empty
    pub description: String,
    pub category: Category,
    /// Completion percentage in `PROGRESS_MIN..=PROGRESS_MAX`
    pub progress: u8,
    pub created_at: DateTime<Utc>,
}

impl Dream {
    /// Create a fresh dream with zero progress
    pub fn new(
        id: DreamId,
        title: String,
        description: String,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            category,
            progress: PROGRESS_MIN,
            created_at,
        }
    }

    pub fn is_achieved(&self) -> bool {
        self.progress == PROGRESS_MAX
    }
}

impl Entity for Dream {
    type Id = DreamId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Apply `delta` to `current`, saturating at both ends of the progress range.
pub fn clamp_progress(current: u8, delta: i32) -> u8 {
    let next = (i32::from(current)).saturating_add(delta);
    next.clamp(i32::from(PROGRESS_MIN), i32::from(PROGRESS_MAX)) as u8
}
