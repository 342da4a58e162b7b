// demos/loan_screening.rs
// Walks a few applicants through preset and hand-rolled screening chains.
// Run with `RUST_LOG=debug cargo run --example loan_screening` to see the
// per-stage side channel.

use vetline::{
    Application, Chain, ChainConfig, Offer, StageSpec, config::preset, from_code, offers_granted,
};

fn describe(app: &Application) -> String {
    let sources: Vec<_> = app.offers.iter().map(Offer::source).collect();
    if sources.is_empty() {
        format!("{} → declined", app.name)
    } else {
        format!("{} → offers from [{}]", app.name, sources.join(", "))
    }
}

fn main() {
    env_logger::init();

    let strong = Application {
        yearly_income: 10_000,
        employment_score: 1,
        history_score: 2,
        is_employed: true,
        ..Application::new("app-1", "Avery")
    };
    let low_income = Application {
        yearly_income: 900,
        id: "app-2".into(),
        name: "Jordan".into(),
        ..strong.clone()
    };

    // The canonical chain: employment first, the rest gated on prior offers.
    let standard = Chain::from_config(&preset::standard()).expect("preset config builds");
    println!("standard: {}", describe(&standard.screen(strong.clone()).unwrap()));
    println!("standard: {}", describe(&standard.screen(low_income.clone()).unwrap()));

    // Fallback shape: only history weighs in unless something was granted.
    let fallback = Chain::from_config(&preset::fallback()).expect("preset config builds");
    println!("fallback: {}", describe(&fallback.screen(strong.clone()).unwrap()));

    // A chain declared from string codes, e.g. out of a config file.
    let mut config = ChainConfig::new();
    for code in ["employment", "history"] {
        let kind = from_code(code).expect("known stage code");
        config
            .append(StageSpec::with_criteria(kind, offers_granted))
            .expect("registered kind");
    }
    config
        .insert(0, StageSpec::new(from_code("income").expect("known stage code")))
        .expect("registered kind");

    let custom = Chain::from_config(&config).expect("non-empty config builds");
    println!("custom:   {}", describe(&custom.screen(strong).unwrap()));
}
