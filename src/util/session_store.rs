//! Session-storage persistence for table row selections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each checkbox table persists its checked row identifiers under a named
//! bucket so selection survives a reload within the same tab. A bucket holds
//! a JSON array of identifier strings. When session storage is unavailable
//! these helpers no-op and the table degrades to in-memory selection only.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::BTreeSet;

/// Serialize a selection set to its canonical bucket encoding.
///
/// `BTreeSet` iterates in sorted order, so a given set always encodes to the
/// same bytes regardless of insertion history.
#[cfg(any(test, feature = "hydrate"))]
fn encode_ids(ids: &BTreeSet<String>) -> String {
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_owned())
}

/// Parse a bucket value. Returns `None` when the stored text is not a JSON
/// array of strings.
#[cfg(any(test, feature = "hydrate"))]
fn decode_ids(raw: &str) -> Option<BTreeSet<String>> {
    serde_json::from_str(raw).ok()
}

/// Add or remove one identifier, mirroring a row-checkbox toggle.
///
/// Inserting an identifier that is already present (or removing an absent
/// one) leaves the set unchanged, so repeating the same toggle has no effect
/// beyond the first call. Returns whether the set changed.
#[cfg(any(test, feature = "hydrate"))]
fn apply_row_toggle(ids: &mut BTreeSet<String>, row_id: &str, checked: bool) -> bool {
    if checked {
        ids.insert(row_id.to_owned())
    } else {
        ids.remove(row_id)
    }
}

/// The replacement set for a select-all toggle: every row or no row.
#[cfg(any(test, feature = "hydrate"))]
fn select_all_ids(all_row_ids: &[String], checked: bool) -> BTreeSet<String> {
    if checked {
        all_row_ids.iter().cloned().collect()
    } else {
        BTreeSet::new()
    }
}

/// The tab-scoped storage area, if the browser provides one.
#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// Load the selection set persisted under `bucket`.
///
/// An absent bucket is initialized to the empty set before returning. A
/// bucket that fails to parse is reset the same way: selection is recoverable
/// UI state, not something worth surfacing as an error.
pub fn load(bucket: &str) -> BTreeSet<String> {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = session_storage() else {
            return BTreeSet::new();
        };
        if let Some(raw) = storage.get_item(bucket).ok().flatten() {
            if let Some(ids) = decode_ids(&raw) {
                return ids;
            }
            log::warn!("resetting unparsable selection bucket {bucket:?}");
        }
        let ids = BTreeSet::new();
        let _ = storage.set_item(bucket, &encode_ids(&ids));
        ids
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bucket;
        BTreeSet::new()
    }
}

/// Overwrite `bucket` with `ids` in a single synchronous write.
pub fn save(bucket: &str, ids: &BTreeSet<String>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = session_storage() else {
            return;
        };
        let _ = storage.set_item(bucket, &encode_ids(ids));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bucket, ids);
    }
}

/// Persist a single row toggle into `bucket`.
///
/// Read-modify-write over the full set rather than a blind append, so the
/// bucket never accumulates duplicate identifiers.
pub fn record_row_toggle(bucket: &str, row_id: &str, checked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let mut ids = load(bucket);
        if apply_row_toggle(&mut ids, row_id, checked) {
            save(bucket, &ids);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bucket, row_id, checked);
    }
}

/// Persist a select-all toggle into `bucket`, replacing the whole set.
pub fn record_select_all(bucket: &str, all_row_ids: &[String], checked: bool) {
    #[cfg(feature = "hydrate")]
    {
        save(bucket, &select_all_ids(all_row_ids, checked));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bucket, all_row_ids, checked);
    }
}
