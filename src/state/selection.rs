//! Row-selection model for checkbox tables.
//!
//! DESIGN
//! ======
//! Selection lives in a single `SelectionState` owned by the table component
//! that renders the checkboxes, constructed from the explicit list of row
//! identifiers. The select-all control has no state of its own: its
//! checked/indeterminate rendering is always recomputed from the row set,
//! never stored.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

/// Aggregate state of a select-all control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriState {
    /// No row is checked. A table with no rows also reads as unchecked.
    #[default]
    Unchecked,
    /// Every row is checked.
    Checked,
    /// Some rows are checked and some are not.
    Indeterminate,
}

/// Checked-row bookkeeping for one checkbox table.
///
/// `checked` only ever holds identifiers present in `row_ids`, so the row
/// checkboxes, the select-all control, and the `ids` link parameter all
/// derive from the same set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    row_ids: Vec<String>,
    checked: BTreeSet<String>,
}

impl SelectionState {
    /// A selection over `row_ids` with nothing checked.
    pub fn new(row_ids: Vec<String>) -> Self {
        Self {
            row_ids,
            checked: BTreeSet::new(),
        }
    }

    /// A selection over `row_ids` with the rows listed in `saved` checked.
    ///
    /// Identifiers in `saved` that are not rendered on this page are ignored;
    /// the persisted bucket may predate the current row set.
    pub fn restored(row_ids: Vec<String>, saved: &BTreeSet<String>) -> Self {
        let checked = row_ids
            .iter()
            .filter(|id| saved.contains(id.as_str()))
            .cloned()
            .collect();
        Self { row_ids, checked }
    }

    /// Identifiers of all rendered rows, in table order.
    pub fn row_ids(&self) -> &[String] {
        &self.row_ids
    }

    /// Whether the row with `id` is currently checked.
    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    /// Check or uncheck a single row.
    ///
    /// Unknown identifiers are ignored. Returns whether the set changed, so
    /// repeating the same toggle is a no-op after the first call.
    pub fn set_row(&mut self, id: &str, checked: bool) -> bool {
        if !self.row_ids.iter().any(|row_id| row_id == id) {
            return false;
        }
        if checked {
            self.checked.insert(id.to_owned())
        } else {
            self.checked.remove(id)
        }
    }

    /// Check or uncheck every row. This is the select-all write path and the
    /// only operation that touches more than one row at a time.
    pub fn set_all(&mut self, checked: bool) {
        if checked {
            self.checked = self.row_ids.iter().cloned().collect();
        } else {
            self.checked.clear();
        }
    }

    /// Aggregate select-all state, recomputed from the row set.
    pub fn tri_state(&self) -> TriState {
        if self.checked.is_empty() {
            TriState::Unchecked
        } else if self.checked.len() == self.row_ids.len() {
            TriState::Checked
        } else {
            TriState::Indeterminate
        }
    }

    /// The currently checked identifiers.
    pub fn checked_ids(&self) -> &BTreeSet<String> {
        &self.checked
    }

    /// Comma-joined checked identifiers for the `ids` link parameter.
    pub fn ids_param(&self) -> String {
        self.checked
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}
