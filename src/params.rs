// src/params.rs

pub const HOST: &str = "ww2.wizards.com";
pub const PREFIX: &str = "/gatherer/";

/// Width at which body and flavor text are word-wrapped by the presenter.
pub const WRAP_WIDTH: usize = 50;

#[derive(Clone)]
pub struct Params {
    pub name: Option<String>,   // card to fetch
    pub quiet: bool,            // suppress the not-found message on stderr
}

impl Params {
    pub fn new() -> Self {
        Self {
            name: None,
            quiet: false,
        }
    }
}
