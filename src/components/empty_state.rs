//! Empty State Component

use leptos::prelude::*;

use dream_core::empty_message;

use crate::store::{use_app_store, AppStateStoreFields};

/// Placeholder shown when the filtered view has no dreams
#[component]
pub fn EmptyState() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="text-center py-16">
            <div class="text-6xl mb-4">"🌙"</div>
            <h3 class="text-xl font-semibold text-white mb-2">
                {move || empty_message(store.selected_filter().get())}
            </h3>
            <p class="text-white/60">"Start by adding your first dream above!"</p>
        </div>
    }
}
