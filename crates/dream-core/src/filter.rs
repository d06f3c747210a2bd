//! View Filter
//!
//! Derives the visible subset of the collection. Never mutates it.

use crate::domain::{CategoryFilter, Dream};

/// Records matching `filter`, in collection order
pub fn filtered_view(dreams: &[Dream], filter: CategoryFilter) -> Vec<&Dream> {
    dreams.iter().filter(|d| filter.matches(d.category)).collect()
}

/// Heading shown when the filtered view is empty
pub fn empty_message(filter: CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "No dreams yet".to_string(),
        CategoryFilter::Only(c) => format!("No {} dreams", c.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, DreamId};
    use chrono::Utc;

    fn make_dream(id: u32, category: Category) -> Dream {
        Dream::new(DreamId(id), format!("Dream {}", id), String::new(), category, Utc::now())
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let dreams = vec![
            make_dream(1, Category::Travel),
            make_dream(2, Category::Career),
            make_dream(3, Category::Travel),
        ];
        let ids: Vec<_> = filtered_view(&dreams, CategoryFilter::All).iter().map(|d| d.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_single_category_preserves_order() {
        let dreams = vec![
            make_dream(1, Category::Travel),
            make_dream(2, Category::Career),
            make_dream(3, Category::Travel),
        ];
        let ids: Vec<_> = filtered_view(&dreams, Category::Travel.into()).iter().map(|d| d.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(filtered_view(&dreams, Category::Health.into()).is_empty());
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(empty_message(CategoryFilter::All), "No dreams yet");
        assert_eq!(empty_message(Category::Health.into()), "No health dreams");
    }
}
