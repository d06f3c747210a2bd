//! Stats Bar Component
//!
//! Totals over the whole collection, independent of the active filter.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_app_store();
    let stats = Memo::new(move |_| store.tracker().read().stats());

    view! {
        <div class="px-4 mb-8">
            <div class="max-w-4xl mx-auto">
                <div class="card-gradient backdrop-blur-xl rounded-2xl p-6 border border-white/20">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatTile value=Signal::derive(move || stats.get().total.to_string()) label="Total Dreams" />
                        <StatTile value=Signal::derive(move || format!("{}%", stats.get().average_progress)) label="Average Progress" />
                        <StatTile value=Signal::derive(move || stats.get().achieved.to_string()) label="Dreams Achieved" />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatTile(value: Signal<String>, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-4xl font-bold text-white mb-1">{move || value.get()}</div>
            <div class="text-white/60 text-sm">{label}</div>
        </div>
    }
}
