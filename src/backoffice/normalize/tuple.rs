//! Tokenizer for legacy tuple-encoded rows such as `(7,"Flour",50,"bag")`.

/// Split a tuple string into its raw fields.
///
/// Double quotes toggle quoted mode and are dropped, so commas inside quotes stay part of
/// the field. Every field is trimmed, and a trailing empty field is not emitted.
/// Returns `None` for blank input.
pub(crate) fn decode(raw: &str) -> Option<Vec<String>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let inner = raw.strip_prefix('(').unwrap_or(raw);
    let inner = inner.strip_suffix(')').unwrap_or(inner);

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in inner.chars() {
        match c {
            '"' => quoted = !quoted,
            ',' if !quoted => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        fields.push(current.trim().to_string());
    }
    Some(fields)
}

/// Same as [`decode`], but a row with fewer than `min_fields` fields is no result.
pub(crate) fn decode_at_least(raw: &str, min_fields: usize) -> Option<Vec<String>> {
    decode(raw).filter(|fields| fields.len() >= min_fields)
}
