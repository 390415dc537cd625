// src/card.rs
//
// The card record and its single-pass load.

use std::error::Error;

use crate::core::net;
use crate::specs::card_details::{self, Regions};

/// One card's extracted data.
///
/// Constructed with only the name set; populated exactly once by a
/// successful `load`. A mismatched or not-found page leaves every field at
/// its default and `loaded` false. That is a silent outcome, not an error:
/// callers check `loaded`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub cost: Option<String>,
    pub converted_cost: Option<String>,
    pub types: Vec<String>,
    pub subtypes: Vec<String>,
    pub text: Option<String>,
    pub flavor: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loaded: bool,
}

impl Card {
    pub fn new(name: &str) -> Self {
        Self { name: s!(name), ..Self::default() }
    }

    /// Fetch the card page and populate the record. One GET, no retries.
    /// Network and malformed-response errors propagate.
    pub fn load(&mut self) -> Result<(), Box<dyn Error>> {
        let doc = net::http_get(&card_details::card_path(&self.name))?;
        self.load_from_doc(&doc, &Regions::default())
    }

    /// Populate from an already-fetched document. Split out from `load` so
    /// tests run offline against fixture pages.
    pub fn load_from_doc(&mut self, doc: &str, regions: &Regions) -> Result<(), Box<dyn Error>> {
        // The site answers unknown names with a 200 disambiguation page.
        // Validate the rendered name against the query name before touching
        // any field; on mismatch the record stays unloaded.
        let Some(name) = card_details::value_text(doc, regions.name) else {
            logf!("No name region for {:?}; leaving record unloaded", self.name);
            return Ok(());
        };
        if !name.eq_ignore_ascii_case(&self.name) {
            logf!("Name mismatch: asked for {:?}, page has {:?}", self.name, name);
            return Ok(());
        }
        // Adopt the page's capitalization.
        self.name = name;

        self.cost = card_details::scrape_cost(doc, regions);
        self.converted_cost = card_details::value_text(doc, regions.cmc);

        let type_line = card_details::value_text(doc, regions.card_type)
            .ok_or("type region missing after name match")?;
        // '?' here is a structural delimiter: the ASCII stand-in for the
        // site's em dash between types and subtypes. Unrelated to the '?'
        // newline convention in flavor text.
        let parts: Vec<&str> = type_line.split('?').collect();
        self.types = parts[0].split_whitespace().map(String::from).collect();
        self.subtypes = match parts.get(1) {
            Some(rest) => rest.split_whitespace().map(String::from).collect(),
            None => Vec::new(),
        };

        self.text = card_details::scrape_text(doc, regions);
        self.flavor = card_details::value_text(doc, regions.flavor);

        if self.is_creature() {
            let (power, toughness) = card_details::scrape_pt(doc, regions)
                .ok_or("power/toughness missing or unreadable for a creature")?;
            self.power = Some(power);
            self.toughness = Some(toughness);
        }

        self.loaded = true;
        Ok(())
    }

    pub fn is_creature(&self) -> bool {
        self.types.iter().any(|t| t == "Creature")
    }
}
