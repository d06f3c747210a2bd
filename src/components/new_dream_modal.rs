//! New Dream Modal Component
//!
//! Dialog that stages a dream in the draft and submits it to the tracker.

use leptos::ev;
use leptos::prelude::*;

use crate::components::CategoryPicker;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

const FIELD_CLASS: &str = "w-full px-4 py-3 bg-white/10 border border-white/20 rounded-xl text-white placeholder-white/40 focus:outline-none focus:border-white/40 transition-colors";

#[component]
pub fn NewDreamModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let can_submit = move || store.draft().read().can_submit();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_draft();
    };

    // Escape closes like Cancel
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.close_modal();
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div class="absolute inset-0 bg-black/50 backdrop-blur-sm" on:click=move |_| ctx.close_modal() />
            <form
                class="relative bg-gradient-to-br from-purple-900/90 to-indigo-900/90 backdrop-blur-xl rounded-2xl p-6 w-full max-w-md border border-white/20 shadow-2xl"
                on:submit=on_submit
            >
                <h2 class="text-2xl font-bold text-white mb-6 flex items-center gap-2">
                    <span>"✨"</span> "Add New Dream"
                </h2>

                <div class="space-y-4">
                    <div>
                        <label class="block text-white/70 text-sm mb-2">"Dream Title"</label>
                        <input
                            type="text"
                            class=FIELD_CLASS
                            placeholder="What's your dream?"
                            prop:value=move || store.draft().read().title.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                store.draft().update(|d| d.title = value);
                            }
                        />
                    </div>

                    <div>
                        <label class="block text-white/70 text-sm mb-2">"Description (optional)"</label>
                        <textarea
                            class=format!("{} resize-none", FIELD_CLASS)
                            placeholder="Describe your dream in detail..."
                            rows="3"
                            prop:value=move || store.draft().read().description.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                store.draft().update(|d| d.description = value);
                            }
                        />
                    </div>

                    <div>
                        <label class="block text-white/70 text-sm mb-2">"Category"</label>
                        <CategoryPicker
                            selected=Signal::derive(move || store.draft().read().category)
                            on_change=move |category| store.draft().update(|d| d.category = category)
                        />
                    </div>
                </div>

                <div class="flex gap-3 mt-6">
                    <button
                        type="button"
                        class="flex-1 py-3 bg-white/10 hover:bg-white/20 text-white rounded-xl font-medium transition-colors"
                        on:click=move |_| ctx.close_modal()
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="flex-1 py-3 bg-white text-purple-700 rounded-xl font-semibold hover:shadow-lg transition-all disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || !can_submit()
                    >
                        "Add Dream"
                    </button>
                </div>
            </form>
        </div>
    }
}
