//! Checkbox control for a single table row.

use leptos::prelude::*;

/// A checkbox bound to one row identifier.
///
/// Emits `(id, checked)` on user toggles; the parent owns the selection
/// state and feeds the current checked value back in through `checked`.
#[component]
pub fn RowCheckbox(
    id: String,
    checked: Signal<bool>,
    on_toggle: Callback<(String, bool)>,
) -> impl IntoView {
    let toggle_id = id.clone();

    view! {
        <input
            type="checkbox"
            class="row-checkbox"
            value=id
            prop:checked=move || checked.get()
            on:change=move |ev| on_toggle.run((toggle_id.clone(), event_target_checked(&ev)))
        />
    }
}
