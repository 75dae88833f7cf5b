//! `ids` query-parameter rewriting for selection action links.
//!
//! DESIGN
//! ======
//! Action links ("download selected", "accept selected") carry the current
//! selection as a comma-joined `ids` query parameter. The rewrite touches
//! only that parameter: every other query parameter, the path, and the
//! fragment pass through byte-for-byte, so server-chosen parameters keep
//! whatever encoding they were rendered with.

#[cfg(test)]
#[path = "ids_query_test.rs"]
mod ids_query_test;

/// Return `href` with its `ids` query parameter set to `ids`.
///
/// Existing `ids` pairs are removed and the new pair is appended to the
/// query; a link without a query string gains one. Works on absolute and
/// path-relative hrefs alike.
pub fn with_ids_param(href: &str, ids: &str) -> String {
    let (rest, fragment) = match href.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (href, None),
    };
    let (base, query) = match rest.split_once('?') {
        Some((base, query)) => (base, query),
        None => (rest, ""),
    };
    let query = replace_ids_in_query(query, ids);
    match fragment {
        Some(fragment) => format!("{base}?{query}#{fragment}"),
        None => format!("{base}?{query}"),
    }
}

/// Drop every existing `ids` pair and append the replacement.
fn replace_ids_in_query(query: &str, ids: &str) -> String {
    let mut parts: Vec<&str> = query
        .split('&')
        .filter(|part| !part.is_empty() && *part != "ids" && !part.starts_with("ids="))
        .collect();
    let replacement = format!("ids={ids}");
    parts.push(replacement.as_str());
    parts.join("&")
}
