// src/symbols.rs
//
// Static mapping from icon alt labels to compact text symbols.

/// Gatherer icon alt labels and their symbols. Fixed at compile time.
pub const ALT_TO_SYM: &[(&str, &str)] = &[
    ("Green", "{G}"),
    ("Red", "{R}"),
    ("Black", "{B}"),
    ("Blue", "{U}"),
    ("White", "{W}"),
    ("Variable Colorless", "{X}"),
    ("Tap", "{T}"),
    ("None", "None"),
];

pub fn resolve(label: &str) -> Option<&'static str> {
    ALT_TO_SYM.iter().find(|(l, _)| *l == label).map(|&(_, sym)| sym)
}

/// Mana-cost mapping. All-digit labels are re-emitted as canonical decimal
/// ("007" → "7") and never table-looked-up; anything else unknown is "?".
pub fn cost_symbol(label: &str) -> String {
    if !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()) {
        match label.parse::<u64>() {
            Ok(n) => n.to_string(),
            Err(_) => s!("?"),
        }
    } else {
        s!(resolve(label).unwrap_or("?"))
    }
}

/// Rules-text mapping. Unknown tokens pass through unchanged; most of the
/// split stream is ordinary prose, not labels.
pub fn body_symbol<'a>(token: &'a str) -> &'a str {
    resolve(token).unwrap_or(token)
}
