/// Runtime value of a quoted string literal given its source text, or `None`
/// when the text is not a single- or double-quoted literal.
pub fn string_value(raw: &str) -> Option<String> {
    let quote = raw.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let body = raw.strip_prefix(quote)?.strip_suffix(quote)?;
    Some(unescape(body))
}

fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let Some(escaped) = chars.next() else {
            break;
        };
        match escaped {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            // line continuation
            '\n' => {}
            '\r' => {
                chars.next_if_eq(&'\n');
            }
            'x' => {
                let hex: String = (0..2).filter_map(|_| chars.next_if(char::is_ascii_hexdigit)).collect();
                push_code_point(&mut out, &hex, 'x');
            }
            'u' if chars.next_if_eq(&'{').is_some() => {
                let mut hex = String::new();
                while let Some(c) = chars.next_if(|c| *c != '}') {
                    hex.push(c);
                }
                chars.next_if_eq(&'}');
                push_code_point(&mut out, &hex, 'u');
            }
            'u' => {
                let hex: String = (0..4).filter_map(|_| chars.next_if(char::is_ascii_hexdigit)).collect();
                push_code_point(&mut out, &hex, 'u');
            }
            other => out.push(other),
        }
    }

    out
}

/// Malformed escapes keep their letter, like an identity escape.
fn push_code_point(out: &mut String, hex: &str, letter: char) {
    match u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
        Some(c) => out.push(c),
        None => {
            out.push(letter);
            out.push_str(hex);
        }
    }
}
