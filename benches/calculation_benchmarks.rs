//! Performance benchmarks for the Tax Engine.
//!
//! Covers the pure calculators directly and a full HTTP round trip through
//! the router, plus a batch of mixed PIT requests.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use tax_engine::api::{create_router, AppState};
use tax_engine::calculation::{apply_progressive_bands, compute_cit, compute_pit};
use tax_engine::config::ConfigLoader;
use tax_engine::models::{CitInput, PitInput};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a PIT input whose chargeable income lands in the given band depth.
fn create_pit_input(employment_income: i64) -> PitInput {
    PitInput {
        employment_income: Decimal::from(employment_income),
        pension_contribution: Decimal::from(employment_income / 12),
        annual_rent_paid: Decimal::from(1_800_000),
        ..PitInput::default()
    }
}

fn bench_progressive_bands(c: &mut Criterion) {
    let loader = ConfigLoader::statutory();
    let bands = &loader.pit().bands;

    let mut group = c.benchmark_group("progressive_bands");
    for income in [500_000i64, 5_000_000, 40_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(income), &income, |b, &income| {
            let chargeable = Decimal::from(income);
            b.iter(|| apply_progressive_bands(black_box(chargeable), black_box(bands)))
        });
    }
    group.finish();
}

fn bench_compute_pit(c: &mut Criterion) {
    let loader = ConfigLoader::statutory();
    let input = create_pit_input(12_000_000);

    c.bench_function("compute_pit", |b| {
        b.iter(|| compute_pit(black_box(&input), black_box(loader.pit())))
    });
}

fn bench_compute_cit(c: &mut Criterion) {
    let loader = ConfigLoader::statutory();
    let input = CitInput {
        turnover: Decimal::from(120_000_000),
        assessable_profit: Decimal::from(15_000_000),
        fixed_assets: Decimal::from(10_000_000),
        is_professional_services: false,
    };

    c.bench_function("compute_cit", |b| {
        b.iter(|| compute_cit(black_box(&input), black_box(loader.cit())))
    });
}

fn bench_http_round_trip(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let router = create_router(AppState::default());

    let mut group = c.benchmark_group("http");
    for (name, uri, body) in [
        (
            "calculate_pit",
            "/api/calculate_pit",
            serde_json::json!({ "employment_income": 12_000_000, "annual_rent_paid": 1_800_000 }),
        ),
        (
            "calculate_cit",
            "/api/calculate_cit",
            serde_json::json!({ "turnover": 120_000_000, "assessable_profit": 15_000_000 }),
        ),
    ] {
        let body = body.to_string();
        group.bench_function(name, |b| {
            b.to_async(&runtime).iter(|| {
                let router = router.clone();
                let body = body.clone();
                async move {
                    router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri(uri)
                                .header("Content-Type", "application/json")
                                .body(Body::from(body))
                                .unwrap(),
                        )
                        .await
                        .unwrap()
                }
            })
        });
    }
    group.finish();
}

fn bench_pit_batch(c: &mut Criterion) {
    let loader = ConfigLoader::statutory();

    let mut group = c.benchmark_group("pit_batch");
    for size in [100usize, 1000] {
        let inputs: Vec<PitInput> = (0..size)
            .map(|i| create_pit_input(250_000 * (i as i64 + 1)))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &inputs, |b, inputs| {
            b.iter(|| {
                inputs
                    .iter()
                    .map(|input| compute_pit(input, loader.pit()).tax_payable)
                    .sum::<Decimal>()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_progressive_bands,
    bench_compute_pit,
    bench_compute_cit,
    bench_http_round_trip,
    bench_pit_batch
);
criterion_main!(benches);
