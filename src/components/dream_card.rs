//! Dream Card Component
//!
//! One dream with its progress bar, step controls and action menu.

use leptos::prelude::*;

use dream_core::Dream;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;
use crate::styles::{badge_class, bar_class, progress_text_class, progress_width};

const STEP_BUTTON_CLASS: &str =
    "w-8 h-8 rounded-lg bg-white/10 hover:bg-white/20 text-white flex items-center justify-center transition-colors";

#[component]
pub fn DreamCard(dream: Dream) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = dream.id;
    let category = dream.category;
    let progress = dream.progress;
    let achieved = dream.is_achieved();
    let description = dream.description;

    let menu_open = move || store.menu_open().get() == Some(id);

    view! {
        <div class="card-gradient backdrop-blur-xl rounded-2xl p-5 border border-white/20 hover:border-white/40 transition-all group">
            <div class="flex items-start justify-between mb-3">
                <div class="flex items-center gap-3">
                    <div class=badge_class(category.accent())>{category.emoji()}</div>
                    <div>
                        <h3 class="font-semibold text-white text-lg leading-tight">{dream.title}</h3>
                        <span class="text-xs text-white/50 capitalize">{category.as_str()}</span>
                    </div>
                </div>
                <button
                    type="button"
                    class="text-white/40 hover:text-white transition-colors p-1"
                    title="Actions"
                    on:click=move |_| ctx.toggle_menu(id)
                >
                    "⋮"
                </button>
            </div>

            {(!description.is_empty()).then(move || view! {
                <p class="text-white/60 text-sm mb-4 line-clamp-2">{description}</p>
            })}

            // Progress bar
            <div class="mb-3">
                <div class="flex justify-between items-center mb-2">
                    <span class="text-white/70 text-sm">"Progress"</span>
                    <span class=progress_text_class(achieved)>{format!("{}%", progress)}</span>
                </div>
                <div class="h-2 bg-white/20 rounded-full overflow-hidden">
                    <div class=bar_class(category.accent()) style=progress_width(progress) />
                </div>
            </div>

            // Step controls
            <div class="flex items-center justify-between">
                <div class="flex gap-2">
                    <button type="button" class=STEP_BUTTON_CLASS on:click=move |_| { ctx.step_progress(id, -1); }>"-"</button>
                    <button type="button" class=STEP_BUTTON_CLASS on:click=move |_| { ctx.step_progress(id, 1); }>"+"</button>
                </div>
                {achieved.then(|| view! {
                    <span class="text-green-400 text-sm font-medium flex items-center gap-1">"✔ Achieved!"</span>
                })}
            </div>

            <Show when=menu_open>
                <div class="mt-3 pt-3 border-t border-white/10">
                    <DeleteConfirmButton
                        button_class="w-full py-2 text-red-400 hover:bg-red-400/10 rounded-lg transition-colors text-sm"
                        on_confirm=move |_| { ctx.delete(id); }
                    />
                </div>
            </Show>
        </div>
    }
}
