//! Dream Builder App
//!
//! Main application component: header, stats, filter toolbar and grid.

use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Store;

use dream_core::{Tracker, TrackerConfig};

use crate::components::{DreamGrid, FilterBar, NewDreamModal, StatsBar};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: TrackerConfig) -> impl IntoView {
    // State
    let tracker = if config.seed_samples {
        Tracker::with_samples(Utc::now())
    } else {
        Tracker::new()
    };
    log::info!("[APP] Starting with {} dreams", tracker.len());

    let store = Store::new(AppState::new(tracker, config.default_category));
    let ctx = AppContext::new(store, &config);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    view! {
        <div class="min-h-screen dream-gradient">
            // Floating orbs background
            <div class="fixed inset-0 overflow-hidden pointer-events-none">
                <div class="absolute top-20 left-10 w-64 h-64 bg-white/10 rounded-full blur-3xl float" />
                <div class="absolute top-40 right-20 w-96 h-96 bg-pink-300/20 rounded-full blur-3xl float" style="animation-delay: 1s;" />
                <div class="absolute bottom-20 left-1/3 w-80 h-80 bg-blue-300/20 rounded-full blur-3xl float" style="animation-delay: 2s;" />
            </div>

            <div class="relative z-10 min-h-screen flex flex-col">
                <header class="pt-8 pb-6 px-4">
                    <div class="max-w-4xl mx-auto text-center">
                        <div class="inline-block mb-4">
                            <span class="text-6xl float inline-block">"✨"</span>
                        </div>
                        <h1 class="text-4xl md:text-5xl font-bold text-white mb-3 tracking-tight">"Dream Builder"</h1>
                        <p class="text-white/70 text-lg max-w-md mx-auto">
                            "Visualize your dreams, track your progress, and make them reality"
                        </p>
                    </div>
                </header>

                <StatsBar />

                // Filter & Add Button
                <div class="px-4 mb-6">
                    <div class="max-w-4xl mx-auto flex flex-col sm:flex-row gap-4 items-center justify-between">
                        <FilterBar />
                        <button
                            type="button"
                            class="px-6 py-3 bg-white text-purple-700 rounded-full font-semibold shadow-lg hover:shadow-xl hover:scale-105 transition-all flex items-center gap-2"
                            on:click=move |_| ctx.open_modal()
                        >
                            <span class="text-xl">"+"</span> "Add Dream"
                        </button>
                    </div>
                </div>

                <DreamGrid />

                <footer class="py-6 text-center">
                    <p class="text-white/40 text-xs">"Dreams live in this tab only. Reloading starts over."</p>
                </footer>
            </div>

            <Show when=move || store.show_modal().get()>
                <NewDreamModal />
            </Show>
        </div>
    }
}
