/// Escapes text for use inside a double-quoted HTML attribute value.
///
/// `&`, `<`, `>`, and `"` are replaced by character references.
///
/// # Example
///
/// ```ignore
/// assert_eq!(escape_attribute("a&b"), "a&amp;b");
/// ```
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }

    escaped
}
