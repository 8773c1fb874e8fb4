//! `Label: value` header lines, as found at the top of a WordPress `style.css`.

use super::SubstitutionRule;

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Splits a leading ` * ` block-comment continuation off `text`.
fn split_comment_prefix(text: &str) -> (&str, &str) {
    match text.strip_prefix('*') {
        Some(after) => {
            let rest = after.trim_start();
            (&text[..text.len() - rest.len()], rest)
        }
        None => ("", text),
    }
}

/// True if `text` (indentation already removed) is `<label>:...`.
fn starts_with_label(text: &str, label: &str) -> bool {
    text.strip_prefix(label).is_some_and(|rest| rest.starts_with(':'))
}

/// Rewrites the first line of each rule's label to `<label>: <replacement>`.
///
/// Indentation, a `*` comment continuation before the label and the line
/// ending are kept; every other line passes through untouched. Returns the
/// new text and the labels that were not found.
pub fn substitute(text: &str, rules: &[SubstitutionRule<'_>]) -> (String, Vec<String>) {
    let mut applied = vec![false; rules.len()];
    let mut output = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        let (body, ending) = split_line_ending(line);
        let content = body.trim_start();
        let indent = &body[..body.len() - content.len()];
        let (prefix, content) = split_comment_prefix(content);

        let matched = rules
            .iter()
            .enumerate()
            .find(|(i, rule)| !applied[*i] && starts_with_label(content, rule.marker));

        match matched {
            Some((i, rule)) => {
                applied[i] = true;
                output.push_str(indent);
                output.push_str(prefix);
                output.push_str(rule.marker);
                output.push_str(": ");
                output.push_str(rule.replacement);
                output.push_str(ending);
            }
            None => output.push_str(line),
        }
    }

    let missing = rules
        .iter()
        .zip(applied)
        .filter(|(_, applied)| !applied)
        .map(|(rule, _)| rule.marker.to_string())
        .collect();

    (output, missing)
}
