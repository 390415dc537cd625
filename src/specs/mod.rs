// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec focuses on a single
//! page and encodes *where the ground truth lives in the HTML* and *how to
//! extract it robustly*: region ids, container classes, icon handling.
//!
//! Specs only extract. Fetching lives in `core::net`; record assembly and
//! presentation live with the page owner (`card`, `render`).
//!
//! Specs are testable **offline** against synthetic documents: the region
//! ids are plain data (`card_details::Regions`), not hidden globals.
pub mod card_details;
