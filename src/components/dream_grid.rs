//! Dream Grid Component
//!
//! Cards for the dreams that pass the active category filter.

use leptos::prelude::*;

use dream_core::{filtered_view, Dream};

use crate::components::{DreamCard, EmptyState};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DreamGrid() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let filter = store.selected_filter().get();
        filtered_view(store.tracker().read().dreams(), filter)
            .into_iter()
            .cloned()
            .collect::<Vec<Dream>>()
    });

    view! {
        <div class="flex-1 px-4 pb-8">
            <div class="max-w-4xl mx-auto">
                <Show
                    when=move || visible.with(|dreams| !dreams.is_empty())
                    fallback=|| view! { <EmptyState /> }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <For
                            each=move || visible.get()
                            // Progress is the only field that changes after creation
                            key=|dream| (dream.id, dream.progress)
                            children=move |dream| view! { <DreamCard dream=dream /> }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
