// src/core/html.rs

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Value of an attribute inside a single opening tag.
/// `name` must be lowercase. Handles `a="x"`, `a='x'` and unquoted `a=x`.
pub fn attr_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(tag);
    let pat = join!(name, "=");
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find(&pat) {
        let at = from + rel;
        let vstart = at + pat.len();
        // Attribute name must not be the tail of a longer word
        if at > 0 && lc.as_bytes()[at - 1].is_ascii_alphanumeric() {
            from = vstart;
            continue;
        }
        let rest = &tag[vstart..];
        return match rest.as_bytes().first() {
            Some(&q) if q == b'"' || q == b'\'' => {
                let end = rest[1..].find(q as char)? + 1;
                Some(&rest[1..end])
            }
            _ => {
                let end = rest
                    .find(|c: char| c.is_ascii_whitespace() || c == '>')
                    .unwrap_or(rest.len());
                Some(&rest[..end])
            }
        };
    }
    None
}

// Balanced <div> scan: inner HTML from the end of the opening tag at
// `open_at` to its matching </div>. Nested divs are counted.
fn balanced_div_inner<'a>(s: &'a str, lc: &str, open_at: usize) -> Option<&'a str> {
    let open_end = s[open_at..].find('>')? + open_at + 1;
    let mut depth = 1usize;
    let mut i = open_end;
    loop {
        let close = lc[i..].find("</div")?;
        match lc[i..].find("<div") {
            Some(open) if open < close => {
                depth += 1;
                i += open + 4;
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[open_end..i + close]);
                }
                i += close + 5;
            }
        }
    }
}

/// Inner HTML of the first `<div>` whose opening tag carries id=`id`.
pub fn div_with_id<'a>(s: &'a str, id: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let id_lc = to_lower(id);
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find("<div") {
        let at = from + rel;
        let tag_end = s[at..].find('>')? + at + 1;
        if attr_value(&s[at..tag_end], "id").map(to_lower) == Some(id_lc.clone()) {
            return balanced_div_inner(s, &lc, at);
        }
        from = tag_end;
    }
    None
}

/// Inner HTML of the first `<div>` with class=`class`.
pub fn div_with_class<'a>(s: &'a str, class: &str) -> Option<&'a str> {
    divs_with_class(s, class).into_iter().next()
}

/// Inner HTML of every `<div>` with class=`class`, in document order.
/// Intended for sibling blocks; a match inside a match is reported too.
pub fn divs_with_class<'a>(s: &'a str, class: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let class_lc = to_lower(class);
    let mut out = Vec::new();
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find("<div") {
        let at = from + rel;
        let Some(gt) = s[at..].find('>') else { break };
        let tag_end = at + gt + 1;
        if attr_value(&s[at..tag_end], "class").map(to_lower) == Some(class_lc.clone()) {
            if let Some(inner) = balanced_div_inner(s, &lc, at) {
                out.push(inner);
            }
        }
        from = tag_end;
    }
    out
}

/// `alt` labels of every `<img>` tag, in document order.
/// Images without an alt are skipped.
pub fn img_alts(s: &str) -> Vec<String> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find("<img") {
        let at = from + rel;
        let Some(gt) = s[at..].find('>') else { break };
        let tag_end = at + gt + 1;
        if let Some(alt) = attr_value(&s[at..tag_end], "alt") {
            out.push(s!(alt));
        }
        from = tag_end;
    }
    out
}

/// Replace every `<img alt="L" …>` tag with `|L|` so a later tag-stripping
/// pass cannot merge the label into adjacent prose. Images without an alt
/// vanish entirely.
pub fn delimit_img_alts(s: &str) -> String {
    let lc = to_lower(s);
    let mut out = String::with_capacity(s.len());
    let mut i = 0usize;
    while let Some(rel) = lc[i..].find("<img") {
        let at = i + rel;
        out.push_str(&s[i..at]);
        let Some(gt) = s[at..].find('>') else {
            i = at;
            break;
        };
        let tag_end = at + gt + 1;
        if let Some(alt) = attr_value(&s[at..tag_end], "alt") {
            out.push('|');
            out.push_str(alt);
            out.push('|');
        }
        i = tag_end;
    }
    out.push_str(&s[i..]);
    out
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_value_quote_styles() {
        assert_eq!(attr_value(r#"<div id="x" class="value">"#, "id"), Some("x"));
        assert_eq!(attr_value("<div id='x'>", "id"), Some("x"));
        assert_eq!(attr_value("<div id=x>", "id"), Some("x"));
        assert_eq!(attr_value("<div grid=1>", "id"), None);
    }

    #[test]
    fn div_with_id_counts_nesting() {
        let doc = r#"<div id="outer"><div class="label">L</div><div class="value">V</div></div><div id="other">O</div>"#;
        let inner = div_with_id(doc, "outer").unwrap();
        assert!(inner.contains(r#"class="value""#));
        assert_eq!(div_with_class(inner, "value"), Some("V"));
        assert_eq!(div_with_id(doc, "other"), Some("O"));
        assert_eq!(div_with_id(doc, "missing"), None);
    }

    #[test]
    fn img_alts_in_document_order() {
        let s = r#"a <img src="g.gif" alt="Green"/> b <img alt="Tap"> c"#;
        assert_eq!(img_alts(s), vec!["Green", "Tap"]);
    }

    #[test]
    fn delimit_then_strip_keeps_labels_apart() {
        let s = r#"Deal <img src="r.gif" alt="Red"/> damage."#;
        assert_eq!(strip_tags(delimit_img_alts(s)), "Deal |Red| damage.");
    }
}
