//! Creation Form State
//!
//! Transient fields staged while the "Add Dream" dialog is open.

use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// A validated request to create a dream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDream {
    pub title: String,
    pub description: String,
    pub category: Category,
}

impl NewDream {
    pub fn new(title: impl Into<String>, description: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
        }
    }
}

/// Draft fields of the creation dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DreamDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
}

impl DreamDraft {
    /// Draft pre-set to a category other than the default
    pub fn with_category(category: Category) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

    /// Submit is only allowed when the title has visible characters
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Turn the draft into a creation request, or hand it back unchanged if blank.
    pub fn submit(self) -> Result<NewDream, DreamDraft> {
        if !self.can_submit() {
            return Err(self);
        }
        Ok(NewDream {
            title: self.title,
            description: self.description,
            category: self.category,
        })
    }

    /// Clear every field back to the defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = DreamDraft::default();
        assert!(draft.title.is_empty());
        assert!(draft.description.is_empty());
        assert_eq!(draft.category, Category::Personal);
        assert!(!draft.can_submit());
    }

    #[test]
    fn test_whitespace_title_cannot_submit() {
        let draft = DreamDraft {
            title: "  \t ".to_string(),
            description: "desc".to_string(),
            category: Category::Career,
        };
        assert!(!draft.can_submit());
        let back = draft.clone().submit().unwrap_err();
        assert_eq!(back, draft);
    }

    #[test]
    fn test_submit_keeps_fields() {
        let draft = DreamDraft {
            title: "Write a novel".to_string(),
            description: "Fantasy, 80k words".to_string(),
            category: Category::Creative,
        };
        let new_dream = draft.submit().unwrap();
        assert_eq!(new_dream, NewDream::new("Write a novel", "Fantasy, 80k words", Category::Creative));
    }

    #[test]
    fn test_reset() {
        let mut draft = DreamDraft {
            title: "x".to_string(),
            description: "y".to_string(),
            category: Category::Travel,
        };
        draft.reset();
        assert_eq!(draft, DreamDraft::default());
    }
}
