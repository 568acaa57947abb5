//! Shared edit rules for the list-valued fields (tags, process steps,
//! results, gallery images, skills). Every list goes through the same three
//! operations: append-if-non-empty-and-not-already-present, remove-by-value,
//! remove-by-index. Order is preserved for display.

/// Appends `value` unless it is blank or already present. Returns whether the
/// list changed; a second add of the same value is a no-op.
pub fn append_unique(list: &mut Vec<String>, value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() || list.iter().any(|item| item == trimmed) {
        return false;
    }
    list.push(trimmed.to_string());
    true
}

/// Appends `value` unless it is blank. Gallery-style lists allow repeats.
pub fn append(list: &mut Vec<String>, value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    list.push(trimmed.to_string());
    true
}

/// Removes the first occurrence of `value`. Returns whether anything was removed.
pub fn remove_value(list: &mut Vec<String>, value: &str) -> bool {
    match list.iter().position(|item| item == value) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

/// Removes the element at `index` when in bounds.
pub fn remove_at(list: &mut Vec<String>, index: usize) -> bool {
    if index < list.len() {
        list.remove(index);
        true
    } else {
        false
    }
}

/// Re-runs the append rule over an incoming list: drops blanks, trims.
pub fn normalize(values: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(values.len());
    for value in &values {
        append(&mut out, value);
    }
    out
}

/// Like [`normalize`] but also drops duplicates, keeping first occurrence order.
pub fn normalize_unique(values: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(values.len());
    for value in &values {
        append_unique(&mut out, value);
    }
    out
}
