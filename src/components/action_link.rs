//! Anchor that carries the current selection in its `ids` query parameter.

use leptos::prelude::*;

use crate::util::ids_query::with_ids_param;

/// A link whose href always reflects the current selection.
///
/// The href is recomputed whenever `ids` changes, so the target sees exactly
/// the selection that was on screen when the user clicked.
#[component]
pub fn ActionLink(href: String, ids: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <a class="btn action-link" href=move || with_ids_param(&href, &ids.get())>
            {children()}
        </a>
    }
}
