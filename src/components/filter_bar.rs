//! Filter Bar Component
//!
//! Category pills that choose which dreams the grid shows.

use leptos::prelude::*;

use dream_core::CategoryFilter;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;
use crate::styles::pill_class;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="flex flex-wrap gap-2 justify-center">
            {CategoryFilter::OPTIONS.into_iter().map(move |option| {
                let is_active = move || store.selected_filter().get() == option;
                view! {
                    <button
                        type="button"
                        class=move || pill_class(is_active())
                        on:click=move |_| ctx.select_filter(option)
                    >
                        {option.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
