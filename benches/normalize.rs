// benches/normalize.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use gatherer_scrape::specs::card_details::{self, Regions};

fn regions() -> Regions {
    Regions {
        mana: "manaRow",
        text: "textRow",
        ..Regions::default()
    }
}

fn sample_page() -> String {
    let block = r#"<div class="cardtextbox">Add <img src="g.gif" alt="Green"/> to your mana pool. <img src="t.gif" alt="Tap"/>: draw a card.</div>"#;
    format!(
        r#"<html><body>
        <div id="manaRow"><div class="label">Cost:</div><div class="value"><img alt="2"/><img alt="Green"/><img alt="Green"/></div></div>
        <div id="textRow"><div class="label">Text:</div><div class="value">{}</div></div>
        </body></html>"#,
        block.repeat(8)
    )
}

fn bench_normalize(c: &mut Criterion) {
    let doc = sample_page();
    let regions = regions();

    c.bench_function("scrape_text", |b| {
        b.iter(|| {
            let text = card_details::scrape_text(black_box(&doc), &regions);
            black_box(text.map(|t| t.len()))
        })
    });

    c.bench_function("scrape_cost", |b| {
        b.iter(|| {
            let cost = card_details::scrape_cost(black_box(&doc), &regions);
            black_box(cost)
        })
    });
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
