//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the requests table and its selection controls; the
//! table component owns the selection state the controls read and write.

pub mod action_link;
pub mod requests_table;
pub mod row_checkbox;
pub mod select_all_checkbox;
