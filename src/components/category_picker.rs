//! Category Picker Component
//!
//! Grid of category buttons for the creation dialog.

use leptos::prelude::*;

use dream_core::Category;

use crate::styles::choice_class;

#[component]
pub fn CategoryPicker(
    selected: Signal<Category>,
    on_change: impl Fn(Category) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-2">
            {Category::ALL.into_iter().map(move |category| {
                let is_selected = move || selected.get() == category;
                view! {
                    <button
                        type="button"
                        class=move || choice_class(is_selected())
                        on:click=move |_| on_change(category)
                    >
                        {format!("{} {}", category.emoji(), category.label())}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
