//! Dream Collection Store
//!
//! `Tracker` owns the ordered list of dreams. Every transition takes the
//! state by value and returns the next state, so the UI only ever swaps
//! whole values. Requests that cannot apply (blank title, stale id) leave
//! the state untouched and are reported as `Outcome::Ignored`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{clamp_progress, position_of, Category, Dream, DreamId, PROGRESS_MAX};
use crate::draft::NewDream;
use crate::error::DreamError;
use crate::stats::Stats;

/// A user request against the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Create(NewDream),
    AdjustProgress { id: DreamId, delta: i32 },
    Remove(DreamId),
}

/// What a dispatched intent did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created(DreamId),
    ProgressChanged { id: DreamId, from: u8, to: u8 },
    Removed(DreamId),
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    BlankTitle,
    UnknownDream(DreamId),
    /// Progress was already at the bound the delta pushes against
    AlreadyAtBound(DreamId),
    /// Every identifier has been handed out
    IdsExhausted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTracker")]
pub struct Tracker {
    dreams: Vec<Dream>,
    next_id: u32,
}

/// Unchecked wire shape of `Tracker`
#[derive(Deserialize)]
struct RawTracker {
    dreams: Vec<Dream>,
    next_id: u32,
}

impl TryFrom<RawTracker> for Tracker {
    type Error = DreamError;

    fn try_from(raw: RawTracker) -> Result<Self, Self::Error> {
        let mut seen = std::collections::HashSet::new();
        for dream in &raw.dreams {
            if !seen.insert(dream.id) {
                return Err(DreamError::InvalidTracker(format!("duplicate id {}", dream.id)));
            }
            if dream.progress > PROGRESS_MAX {
                return Err(DreamError::InvalidTracker(format!(
                    "dream {} has progress {}",
                    dream.id, dream.progress
                )));
            }
        }
        if let Some(max) = raw.dreams.iter().map(|d| d.id.0).max() {
            if raw.next_id <= max {
                return Err(DreamError::InvalidTracker(format!(
                    "next_id {} not above existing id {}",
                    raw.next_id, max
                )));
            }
        }
        Ok(Tracker {
            dreams: raw.dreams,
            next_id: raw.next_id,
        })
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self {
            dreams: Vec::new(),
            next_id: 1,
        }
    }
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board pre-filled with three demo dreams
    pub fn with_samples(now: DateTime<Utc>) -> Self {
        let samples = [
            (
                "Learn a new language",
                "Become fluent in Japanese by the end of the year",
                Category::Personal,
                35,
            ),
            (
                "Visit Northern Lights",
                "Travel to Iceland or Norway to see the Aurora Borealis",
                Category::Travel,
                10,
            ),
            (
                "Launch my startup",
                "Build and ship my dream product to the world",
                Category::Career,
                60,
            ),
        ];

        samples
            .into_iter()
            .fold(Self::new(), |tracker, (title, description, category, progress)| {
                let id = DreamId(tracker.next_id);
                tracker
                    .add(NewDream::new(title, description, category), now)
                    .adjust_progress(id, progress)
            })
    }

    // ========================
    // Reads
    // ========================

    pub fn dreams(&self) -> &[Dream] {
        &self.dreams
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dream> {
        self.dreams.iter()
    }

    pub fn get(&self, id: DreamId) -> Option<&Dream> {
        self.dreams.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.dreams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dreams.is_empty()
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.dreams)
    }

    // ========================
    // Transitions
    // ========================

    /// Append a new dream at 0% progress. Blank titles are ignored.
    pub fn add(self, new_dream: NewDream, now: DateTime<Utc>) -> Self {
        self.dispatch(Intent::Create(new_dream), now).0
    }

    /// Move progress by `delta`, clamped to 0..=100. Unknown ids are ignored.
    pub fn adjust_progress(self, id: DreamId, delta: i32) -> Self {
        self.dispatch(Intent::AdjustProgress { id, delta }, Utc::now()).0
    }

    /// Drop the dream with `id`. Unknown ids are ignored.
    pub fn remove(self, id: DreamId) -> Self {
        self.dispatch(Intent::Remove(id), Utc::now()).0
    }

    /// Apply one intent. `now` stamps newly created dreams only.
    pub fn dispatch(mut self, intent: Intent, now: DateTime<Utc>) -> (Self, Outcome) {
        let outcome = match intent {
            Intent::Create(new_dream) => self.create(new_dream, now),
            Intent::AdjustProgress { id, delta } => self.step_progress(id, delta),
            Intent::Remove(id) => self.delete(id),
        };

        match outcome {
            Outcome::Ignored(reason) => log::trace!("[TRACKER] ignored: {:?}", reason),
            _ => log::debug!("[TRACKER] {:?} ({} dreams)", outcome, self.dreams.len()),
        }
        (self, outcome)
    }

    fn create(&mut self, new_dream: NewDream, now: DateTime<Utc>) -> Outcome {
        let title = new_dream.title.trim();
        if title.is_empty() {
            return Outcome::Ignored(IgnoreReason::BlankTitle);
        }
        let Some(next_id) = self.next_id.checked_add(1) else {
            return Outcome::Ignored(IgnoreReason::IdsExhausted);
        };
        let id = DreamId(self.next_id);
        self.next_id = next_id;
        self.dreams.push(Dream::new(
            id,
            title.to_string(),
            new_dream.description,
            new_dream.category,
            now,
        ));
        Outcome::Created(id)
    }

    fn step_progress(&mut self, id: DreamId, delta: i32) -> Outcome {
        let Some(idx) = position_of(&self.dreams, id) else {
            return Outcome::Ignored(IgnoreReason::UnknownDream(id));
        };
        let dream = &mut self.dreams[idx];
        let from = dream.progress;
        let to = clamp_progress(from, delta);
        if from == to {
            return Outcome::Ignored(IgnoreReason::AlreadyAtBound(id));
        }
        dream.progress = to;
        Outcome::ProgressChanged { id, from, to }
    }

    fn delete(&mut self, id: DreamId) -> Outcome {
        match position_of(&self.dreams, id) {
            Some(idx) => {
                self.dreams.remove(idx);
                Outcome::Removed(id)
            }
            None => Outcome::Ignored(IgnoreReason::UnknownDream(id)),
        }
    }
}
