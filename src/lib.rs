// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod core;
pub mod specs;

pub mod card;
pub mod cli;
pub mod params;
pub mod render;
pub mod symbols;
