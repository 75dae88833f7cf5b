//! Training-requests table: checkbox column, tri-state header, action links.
//!
//! DESIGN
//! ======
//! This component is the selection controller. It owns the `SelectionState`
//! signal, is constructed with the explicit row list, and is the only place
//! that wires checkbox events to persistence and link refresh. Handlers
//! write session storage first and update the signal second; everything
//! derived from the signal (tri-state header, link hrefs) therefore never
//! observes a selection newer than what storage already holds.

use leptos::prelude::*;

use crate::components::action_link::ActionLink;
use crate::components::row_checkbox::RowCheckbox;
use crate::components::select_all_checkbox::SelectAllCheckbox;
use crate::net::types::TrainingRequest;
use crate::state::selection::SelectionState;
use crate::util::{bulk_email, session_store};

/// Checkbox table over `rows`, persisting selection under `bucket`.
#[component]
pub fn RequestsTable(rows: Vec<TrainingRequest>, bucket: &'static str) -> impl IntoView {
    let row_ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();

    // Restore before the first tri-state render so a reloaded page comes up
    // with the saved selection already reflected in the header checkbox.
    let saved = session_store::load(bucket);
    let selection = RwSignal::new(SelectionState::restored(row_ids, &saved));

    let tri = Signal::derive(move || selection.get().tri_state());
    let ids = Signal::derive(move || selection.get().ids_param());

    let on_row_toggle = Callback::new(move |(row_id, checked): (String, bool)| {
        session_store::record_row_toggle(bucket, &row_id, checked);
        selection.update(|s| {
            s.set_row(&row_id, checked);
        });
    });

    let on_select_all = Callback::new(move |checked: bool| {
        let all = selection.with_untracked(|s| s.row_ids().to_vec());
        session_store::record_select_all(bucket, &all, checked);
        selection.update(|s| s.set_all(checked));
    });

    let email_rows = rows.clone();
    let on_bulk_email = move |_| {
        let emails: Vec<String> = selection.with_untracked(|s| {
            email_rows
                .iter()
                .filter(|row| s.is_checked(&row.id))
                .map(|row| row.email.clone())
                .collect()
        });
        bulk_email::open_bulk_email(&emails);
    };

    let download_href = "/requests/download?format=csv".to_owned();
    let accept_href = "/requests/accept".to_owned();

    view! {
        <form class="requests-table">
            <table class="requests-table__grid">
                <thead>
                    <tr>
                        <th class="requests-table__select-col">
                            <SelectAllCheckbox state=tri on_toggle=on_select_all/>
                        </th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"State"</th>
                        <th>"Group"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let id = row.id.clone();
                            let checked = Signal::derive(move || selection.get().is_checked(&id));
                            view! {
                                <tr>
                                    <td class="requests-table__select-col">
                                        <RowCheckbox
                                            id=row.id.clone()
                                            checked=checked
                                            on_toggle=on_row_toggle
                                        />
                                    </td>
                                    <td>{row.person}</td>
                                    <td>{row.email}</td>
                                    <td>{row.state}</td>
                                    <td>{row.group_name.unwrap_or_default()}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>

            <div class="requests-table__actions">
                <ActionLink href=download_href ids=ids>
                    "Download selected"
                </ActionLink>
                <ActionLink href=accept_href ids=ids>
                    "Accept selected"
                </ActionLink>
                <button type="button" class="btn" on:click=on_bulk_email>
                    "Mail selected people"
                </button>
            </div>
        </form>
    }
}
