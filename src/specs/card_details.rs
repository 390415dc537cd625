// src/specs/card_details.rs
//
// Scraping spec for the CardDetails page. Every card field lives in a
// <div id=…> "row" holding a <div class="value"> container; icons inside
// the mana and rules-text regions are <img> tags carrying an alt label.

use crate::core::html::{
    delimit_img_alts, div_with_class, div_with_id, divs_with_class, img_alts, strip_tags,
};
use crate::core::net;
use crate::core::sanitize::{ascii_replace, normalize_entities};
use crate::symbols;

/// The fixed region element ids, one per card field.
/// `Regions::default()` matches the live site; tests substitute their own
/// ids with synthetic documents instead of depending on ambient globals.
#[derive(Clone, Debug)]
pub struct Regions {
    pub name: &'static str,
    pub mana: &'static str,
    pub cmc: &'static str,
    pub card_type: &'static str,
    pub text: &'static str,
    pub flavor: &'static str,
    pub pt: &'static str,
}

// ASP.NET control-tree prefix shared by every row id on the page.
macro_rules! row_id {
    ($tail:literal) => {
        concat!("ctl00_ctl00_ctl00_MainContent_SubContent_SubContent_", $tail)
    };
}

impl Default for Regions {
    fn default() -> Self {
        Self {
            name: row_id!("nameRow"),
            mana: row_id!("manaRow"),
            cmc: row_id!("cmcRow"),
            card_type: row_id!("typeRow"),
            text: row_id!("textRow"),
            flavor: row_id!("flavorRow"),
            pt: row_id!("ptRow"),
        }
    }
}

/// Query path for a card by name, relative to `params::PREFIX`.
pub fn card_path(name: &str) -> String {
    join!("CardDetails.aspx?name=", &net::encode_spaces(name))
}

/// Raw inner HTML of a region's value container. None when the region (or
/// its container) is absent; a malformed page degrades field by field.
pub fn value_node<'a>(doc: &'a str, region: &str) -> Option<&'a str> {
    let row = div_with_id(doc, region)?;
    div_with_class(row, "value")
}

/// Text content of a region's value container, tags stripped, entities
/// normalized, non-ASCII replaced with `'?'`.
pub fn value_text(doc: &str, region: &str) -> Option<String> {
    let node = value_node(doc, region)?;
    Some(ascii_replace(&strip_tags(normalize_entities(node))))
}

/// Mana cost as one concatenated symbol string, e.g. `"{G}1"`.
/// Icon order is document order; unknown labels come out as `"?"`.
pub fn scrape_cost(doc: &str, regions: &Regions) -> Option<String> {
    let node = value_node(doc, regions.mana)?;
    let syms: Vec<String> = img_alts(node)
        .iter()
        .map(|alt| symbols::cost_symbol(alt))
        .collect();
    Some(syms.concat())
}

/// Rules text: one `cardtextbox` block per paragraph, icons resolved to
/// symbols, blocks joined with a single newline.
pub fn scrape_text(doc: &str, regions: &Regions) -> Option<String> {
    let node = value_node(doc, regions.text)?;
    let lines: Vec<String> = divs_with_class(node, "cardtextbox")
        .iter()
        .map(|block| normalize_block(block))
        .collect();
    Some(lines.join("\n"))
}

// One paragraph: icons become |label|, remaining tags are stripped, then
// every |-delimited token naming a known icon is swapped for its symbol.
// Unknown tokens pass through unchanged (unlike the "?" on the cost path).
fn normalize_block(block: &str) -> String {
    let delimited = strip_tags(normalize_entities(&delimit_img_alts(block)));
    delimited.split('|').map(symbols::body_symbol).collect()
}

/// Power/toughness: two digit runs separated by at least one non-digit,
/// anywhere in the region text. Covers "3/4" and "3 / 4"; each run is kept
/// as a string.
pub fn scrape_pt(doc: &str, regions: &Regions) -> Option<(String, String)> {
    let content = value_text(doc, regions.pt)?;
    split_pt(&content)
}

fn split_pt(s: &str) -> Option<(String, String)> {
    let b = s.as_bytes();
    let p_start = b.iter().position(|c| c.is_ascii_digit())?;
    let p_len = b[p_start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .unwrap_or(b.len() - p_start);
    let p_end = p_start + p_len;
    let t_start = p_end + b[p_end..].iter().position(|c| c.is_ascii_digit())?;
    let t_len = b[t_start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .unwrap_or(b.len() - t_start);
    Some((s!(&s[p_start..p_end]), s!(&s[t_start..t_start + t_len])))
}
