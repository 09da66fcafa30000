use criterion::{black_box, criterion_group, criterion_main, Criterion};

use carbon_calculator::{calculate, render_text, CalculatorView, EmissionFactorTable, UserInputs};

fn scenario() -> UserInputs {
    UserInputs {
        country: "India".to_string(),
        distance_km_per_day: 10.0,
        electricity_kwh_per_month: 100.0,
        waste_kg_per_week: 5.0,
        meals_per_day: 2,
    }
}

fn bench_calculate(c: &mut Criterion) {
    let table = EmissionFactorTable::reference();
    let inputs = scenario();

    c.bench_function("calculate_india_scenario", |b| {
        b.iter(|| calculate(black_box(&table), black_box(&inputs)))
    });

    c.bench_function("calculate_all_countries", |b| {
        b.iter(|| {
            for country in table.countries() {
                let inputs = UserInputs {
                    country: country.to_string(),
                    ..scenario()
                };
                let _ = black_box(calculate(&table, black_box(&inputs)));
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let table = EmissionFactorTable::reference();
    let result = calculate(&table, &scenario()).ok();
    let view = match result {
        Some(result) => CalculatorView::ResultShown { inputs: scenario(), result },
        None => CalculatorView::idle(&table),
    };

    c.bench_function("render_text", |b| b.iter(|| render_text(black_box(&view))));
}

criterion_group!(benches, bench_calculate, bench_render);
criterion_main!(benches);
