/// Makes free text safe to hand back to a browser: NUL bytes dropped,
/// trimmed, HTML-escaped, whitespace runs collapsed to one space.
///
/// Returns `None` when nothing but whitespace is left.
pub fn sanitize_text(raw: &str) -> Option<String> {
    let without_nul: String = raw.chars().filter(|&c| c != '\0').collect();
    let trimmed = without_nul.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(trimmed.len());
    let mut in_whitespace = false;
    for c in trimmed.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        push_escaped(&mut out, c);
    }

    Some(out)
}

pub fn sanitize_optional(raw: Option<&str>) -> Option<String> {
    raw.and_then(sanitize_text)
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#x27;"),
        other => out.push(other),
    }
}
