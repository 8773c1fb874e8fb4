//! Bounded regions inside HTML, such as the `<title>` text or a quoted meta
//! attribute value.

use super::Bounds;

/// Escapes characters that could close the surrounding tag or attribute.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Replaces the text strictly between the first `bounds.open` and the
/// following `bounds.close`. Returns `None` if either delimiter is missing.
pub fn replace_bounded(text: &str, bounds: &Bounds, value: &str) -> Option<String> {
    let start = text.find(&bounds.open)? + bounds.open.len();
    let end = start + text[start..].find(&bounds.close)?;

    let mut output = String::with_capacity(text.len() + value.len());
    output.push_str(&text[..start]);
    output.push_str(value);
    output.push_str(&text[end..]);
    Some(output)
}

/// Applies each `(bounds, value)` pair in turn. Returns the new text and the
/// names of the regions that were not found.
pub fn substitute(text: &str, rules: &[(&Bounds, &str)]) -> (String, Vec<String>) {
    let mut output = text.to_string();
    let mut missing = Vec::new();

    for (bounds, value) in rules {
        match replace_bounded(&output, bounds, value) {
            Some(updated) => output = updated,
            None => missing.push(bounds.name.clone()),
        }
    }

    (output, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"Tom & "Jerry" <3"#), "Tom &amp; &quot;Jerry&quot; &lt;3");
        assert_eq!(escape("Brand X"), "Brand X");
    }

    #[test]
    fn test_replace_bounded_spans_lines() {
        let bounds = Bounds::new("title", "<title>", "</title>");
        let html = "<title>\n  Old\n</title>";
        assert_eq!(
            replace_bounded(html, &bounds, "New").as_deref(),
            Some("<title>New</title>")
        );
    }

    #[test]
    fn test_replace_bounded_missing_close() {
        let bounds = Bounds::new("title", "<title>", "</title>");
        assert_eq!(replace_bounded("<title>Old", &bounds, "New"), None);
    }
}
