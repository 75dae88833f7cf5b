//! Tri-state select-all checkbox for a checkbox table.

use leptos::prelude::*;

use crate::state::selection::TriState;

/// The select-all control at the head of a checkbox column.
///
/// Checked and indeterminate rendering is derived from the aggregate row
/// state; the control stores nothing itself. A user toggle reports only the
/// new checked value, since the browser resolves an indeterminate click to
/// checked before the change event fires.
#[component]
pub fn SelectAllCheckbox(state: Signal<TriState>, on_toggle: Callback<bool>) -> impl IntoView {
    view! {
        <input
            type="checkbox"
            class="select-all-checkbox"
            prop:checked=move || state.get() == TriState::Checked
            prop:indeterminate=move || state.get() == TriState::Indeterminate
            on:change=move |ev| on_toggle.run(event_target_checked(&ev))
        />
    }
}
