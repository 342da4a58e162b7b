// benches/screen_bench.rs
// Traversal cost of preset chains and a deliberately long synthetic chain.
// Run with `cargo bench --bench screen_bench`.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use vetline::{Application, Chain, EmploymentCheck, HistoryCheck, IncomeCheck, config::preset};

fn accepted() -> Application {
    Application {
        yearly_income: 10_000,
        employment_score: 1,
        history_score: 2,
        is_employed: true,
        ..Application::new("bench", "Bench Applicant")
    }
}

fn rejected() -> Application {
    Application {
        yearly_income: 1000,
        ..accepted()
    }
}

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen/presets");

    let cases = [
        (preset::standard(), "standard"),
        (preset::strict(), "strict"),
        (preset::fallback(), "fallback"),
    ];

    for (config, name) in &cases {
        let chain = Chain::from_config(config).expect("preset config builds");

        group.bench_function(format!("{name}/accepted"), |b| {
            b.iter(|| chain.screen(black_box(accepted())).expect("screen failed"));
        });
        group.bench_function(format!("{name}/rejected"), |b| {
            b.iter(|| chain.screen(black_box(rejected())).expect("screen failed"));
        });
    }

    group.finish();
}

fn bench_long_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen/long_chain");

    // 96 stages: depth is configuration-bounded, traversal must stay flat.
    let mut builder = Chain::builder();
    for _ in 0..32 {
        builder = builder
            .add_stage(EmploymentCheck::new())
            .add_stage(IncomeCheck::new())
            .add_stage(HistoryCheck::new());
    }
    let chain = builder.build();

    group.bench_function("96_stages/accepted", |b| {
        b.iter(|| chain.screen(black_box(accepted())).expect("screen failed"));
    });

    group.finish();
}

criterion_group!(benches, bench_presets, bench_long_chain);
criterion_main!(benches);
