// tests/render_report.rs
//
// Presenter output against hand-checked reports.

use gatherer_scrape::card::Card;
use gatherer_scrape::render::render;

fn shock() -> Card {
    Card {
        name: "Shock".into(),
        cost: Some("{R}".into()),
        converted_cost: Some("1".into()),
        types: vec!["Instant".into()],
        text: Some("Shock deals 2 damage to any target.".into()),
        loaded: true,
        ..Card::default()
    }
}

fn bears() -> Card {
    Card {
        name: "Grizzly Bears".into(),
        cost: Some("1{G}".into()),
        converted_cost: Some("2".into()),
        types: vec!["Creature".into()],
        subtypes: vec!["Bear".into()],
        flavor: Some("Don't try to outrun one.?Goblin saying".into()),
        power: Some("2".into()),
        toughness: Some("2".into()),
        loaded: true,
        ..Card::default()
    }
}

#[test]
fn shock_report() {
    let expected = "Shock\n\
                    cost:     {R} (1)\n\
                    types:    Instant \n\
                    \n\
                    Shock deals 2 damage to any target.";
    assert_eq!(render(&shock()), expected);
}

#[test]
fn creature_report_with_flavor() {
    let expected = "Grizzly Bears\n\
                    cost:     1{G} (2)\n\
                    types:    Creature \n\
                    subtypes: Bear \n\
                    P/T:      2 / 2\n\
                    \n\
                    \"Don't try to outrun one.\n\
                    -Goblin saying\"";
    assert_eq!(render(&bears()), expected);
}

#[test]
fn rendering_twice_is_identical() {
    let card = bears();
    assert_eq!(render(&card), render(&card));
}

#[test]
fn absent_sections_are_suppressed() {
    let card = Card {
        name: "Nameless".into(),
        loaded: true,
        ..Card::default()
    };
    assert_eq!(render(&card), "Nameless");
}

#[test]
fn long_rules_text_wraps_at_fifty_columns() {
    let card = Card {
        name: "Wall of Words".into(),
        types: vec!["Enchantment".into()],
        text: Some(
            "At the beginning of your upkeep, each opponent discards a card at random.".into(),
        ),
        loaded: true,
        ..Card::default()
    };
    let out = render(&card);
    let body: Vec<&str> = out.split("\n\n").nth(1).unwrap().split('\n').collect();
    assert!(body.len() > 1);
    assert!(body.iter().all(|l| l.len() <= 50));
}
