use super::*;

// =============================================================
// Adding the parameter
// =============================================================

#[test]
fn adds_ids_to_href_without_query() {
    assert_eq!(with_ids_param("/requests/download", "2"), "/requests/download?ids=2");
}

#[test]
fn adds_ids_after_existing_parameters() {
    assert_eq!(
        with_ids_param("/requests/download?format=csv", "1,2,3"),
        "/requests/download?format=csv&ids=1,2,3"
    );
}

#[test]
fn adds_ids_to_absolute_href() {
    assert_eq!(
        with_ids_param("https://example.org/requests/download?format=csv", "7"),
        "https://example.org/requests/download?format=csv&ids=7"
    );
}

// =============================================================
// Replacing the parameter
// =============================================================

#[test]
fn replaces_existing_ids_value() {
    assert_eq!(
        with_ids_param("/requests/download?ids=9", "1,2"),
        "/requests/download?ids=1,2"
    );
}

#[test]
fn replaces_ids_and_preserves_other_parameters_verbatim() {
    assert_eq!(
        with_ids_param("/requests/download?format=csv&ids=9&sort=name%20asc", "4"),
        "/requests/download?format=csv&sort=name%20asc&ids=4"
    );
}

#[test]
fn collapses_duplicate_ids_pairs() {
    assert_eq!(
        with_ids_param("/d?ids=1&a=2&ids=3", "5"),
        "/d?a=2&ids=5"
    );
}

#[test]
fn replaces_valueless_ids_pair() {
    assert_eq!(with_ids_param("/d?ids&a=1", "2"), "/d?a=1&ids=2");
}

#[test]
fn does_not_touch_parameters_that_merely_start_with_ids() {
    assert_eq!(
        with_ids_param("/d?idset=1", "2"),
        "/d?idset=1&ids=2"
    );
}

// =============================================================
// Fragments and empty selections
// =============================================================

#[test]
fn preserves_fragment() {
    assert_eq!(
        with_ids_param("/requests?page=2#results", "1"),
        "/requests?page=2&ids=1#results"
    );
}

#[test]
fn empty_selection_leaves_empty_value() {
    assert_eq!(with_ids_param("/requests/download?format=csv", ""), "/requests/download?format=csv&ids=");
}

// =============================================================
// Repeated refresh is stable
// =============================================================

#[test]
fn refreshing_twice_with_same_ids_is_idempotent() {
    let once = with_ids_param("/d?a=1", "1,2");
    let twice = with_ids_param(&once, "1,2");
    assert_eq!(once, twice);
}
