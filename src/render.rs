// src/render.rs
//
// Plain-text report for a card record. Pure function of the final field
// values; rendering twice without mutation is byte-identical.

use crate::card::Card;
use crate::params::WRAP_WIDTH;

pub fn render(card: &Card) -> String {
    let mut out = s!(&card.name);

    if card.cost.is_some() || card.converted_cost.is_some() {
        out.push('\n');
        out.push_str(&format!(
            "{:<10}{} ({})",
            "cost: ",
            card.cost.as_deref().unwrap_or(""),
            card.converted_cost.as_deref().unwrap_or(""),
        ));
    }

    if !card.types.is_empty() {
        out.push('\n');
        out.push_str(&format!("{:<10}", "types:"));
        for t in &card.types {
            out.push_str(t);
            out.push(' ');
        }
    }
    if !card.subtypes.is_empty() {
        out.push('\n');
        out.push_str(&format!("{:<10}", "subtypes:"));
        for t in &card.subtypes {
            out.push_str(t);
            out.push(' ');
        }
    }

    if card.is_creature() {
        if let (Some(p), Some(t)) = (&card.power, &card.toughness) {
            out.push('\n');
            out.push_str(&format!("{:<10}{} / {}", "P/T:", p, t));
        }
    }

    if let Some(text) = &card.text {
        out.push('\n');
        for line in text.split('\n') {
            out.push('\n');
            out.push_str(&fill(line, WRAP_WIDTH));
        }
    }

    if let Some(flavor) = &card.flavor {
        out.push('\n');
        for line in flavor.split('\n') {
            // '?' is the source's newline encoding inside flavor text.
            out.push_str("\n\"");
            out.push_str(&fill(line, WRAP_WIDTH).replace('?', "\n-"));
            out.push('"');
        }
    }

    out
}

/// Greedy word wrap. Words are joined into lines no wider than `width`;
/// a single word longer than `width` gets a line of its own.
pub fn fill(s: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut cur = String::new();
    for word in s.split_whitespace() {
        if cur.is_empty() {
            cur.push_str(word);
        } else if cur.len() + 1 + word.len() <= width {
            cur.push(' ');
            cur.push_str(word);
        } else {
            lines.push(cur);
            cur = s!(word);
        }
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines.join("\n")
}
