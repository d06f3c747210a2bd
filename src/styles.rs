//! Style Helpers
//!
//! Class and inline-style builders shared by the components.

/// Filter pill in the toolbar
pub fn pill_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-full text-sm font-medium transition-all bg-white text-purple-700 shadow-lg"
    } else {
        "px-4 py-2 rounded-full text-sm font-medium transition-all bg-white/20 text-white hover:bg-white/30"
    }
}

/// Category choice in the creation dialog
pub fn choice_class(active: bool) -> &'static str {
    if active {
        "py-2 px-3 rounded-xl text-sm transition-all bg-white text-purple-700 font-semibold"
    } else {
        "py-2 px-3 rounded-xl text-sm transition-all bg-white/10 text-white hover:bg-white/20"
    }
}

pub fn progress_text_class(achieved: bool) -> &'static str {
    if achieved {
        "font-bold text-sm text-green-400"
    } else {
        "font-bold text-sm text-white"
    }
}

/// Inline width of the filled part of a progress bar
pub fn progress_width(progress: u8) -> String {
    format!("width: {}%;", progress)
}

pub fn badge_class(accent: &str) -> String {
    format!(
        "w-10 h-10 rounded-xl bg-gradient-to-br {} flex items-center justify-center text-lg",
        accent
    )
}

pub fn bar_class(accent: &str) -> String {
    format!("h-full rounded-full bg-gradient-to-r {} transition-all duration-500", accent)
}
