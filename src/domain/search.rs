//! In-memory admin search. The full list is already fetched, so filtering is
//! a case-insensitive substring scan over a fixed set of text fields per
//! entity; there is no server-side search.

/// True when `term` occurs (case-insensitively) in any of `fields`.
/// A blank term matches everything.
pub fn matches_any<'a, I>(term: &str, fields: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Retains only the items matching `term`, in their original order.
pub fn filter_in_place<T, F>(items: &mut Vec<T>, term: &str, matches: F)
where
    F: Fn(&T, &str) -> bool,
{
    if term.trim().is_empty() {
        return;
    }
    items.retain(|item| matches(item, term));
}
