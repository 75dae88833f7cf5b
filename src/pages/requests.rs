//! Training requests page: fetch the listing and render the requests table.

use leptos::prelude::*;

use crate::components::requests_table::RequestsTable;

/// Session-storage bucket for the requests-table selection.
const SELECTION_BUCKET: &str = "TrainingRequests";

/// Training requests listing page.
#[component]
pub fn RequestsPage() -> impl IntoView {
    // Request list resource, fetched on mount.
    let requests = LocalResource::new(|| crate::net::api::fetch_training_requests());

    view! {
        <div class="requests-page">
            <header class="requests-page__header">
                <h1>"Training requests"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading requests..."</p> }>
                {move || {
                    requests
                        .get()
                        .map(|fetched| match fetched {
                            Some(rows) if !rows.is_empty() => {
                                view! { <RequestsTable rows=rows bucket=SELECTION_BUCKET/> }
                                    .into_any()
                            }
                            Some(_) => {
                                view! {
                                    <p class="requests-page__empty">"No pending requests."</p>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="requests-page__error">
                                        "Could not load training requests."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
