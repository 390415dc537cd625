// src/cli.rs
use std::env;

use crate::card::Card;
use crate::params::Params;
use crate::render;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let name = params.name.ok_or("Missing card name (see --help)")?;
    let mut card = Card::new(&name);
    card.load()?;

    if !card.loaded {
        // Not an error in the record's eyes; the exit code says it for us.
        if !params.quiet {
            eprintln!("Card not found: {}", name);
        }
        std::process::exit(1);
    }

    println!("{}", render::render(&card));
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-q" | "--quiet" => params.quiet = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ if a.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
            _ => {
                // Bare words accumulate into the card name; quoting optional.
                params.name = Some(match params.name.take() {
                    Some(prev) => join!(prev, " ", &a),
                    None => a,
                });
            }
        }
    }
    Ok(())
}
