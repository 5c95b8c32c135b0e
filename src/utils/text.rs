/// Returns true when `value` is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Splits the comma-joined article titles stored on a picture.
///
/// Blank entries are dropped; the remaining titles keep their original
/// text, order and duplicates.
pub fn article_names_to_array(names: &str) -> Vec<String> {
    if is_blank(names) {
        return Vec::new();
    }

    names
        .split(',')
        .filter(|name| !is_blank(name))
        .map(str::to_string)
        .collect()
}
