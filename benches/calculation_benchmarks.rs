//! Performance benchmarks for the compensation decision engine.
//!
//! This benchmark suite verifies that the evaluation engine meets performance targets:
//! - Single raise evaluation: < 100μs mean
//! - Single bonus calculation: < 100μs mean
//! - Batch of 100 raise requests: < 100ms mean
//! - Rollup over a 1000-employee department: < 5ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use compensation_engine::api::{AppState, create_router};
use compensation_engine::config::PolicyLoader;
use compensation_engine::models::EmployeeRecord;
use compensation_engine::store::InMemoryEmployeeStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a store with `count` employees spread over four departments.
fn create_store(count: usize) -> InMemoryEmployeeStore {
    let departments = ["IT", "Sales", "Engineering", "Finance"];
    let mut store = InMemoryEmployeeStore::new();
    for i in 0..count {
        store.insert(EmployeeRecord {
            id: format!("emp_bench_{:04}", i),
            department: departments[i % departments.len()].to_string(),
            salary: Decimal::new(60_000_00 + (i as i64 * 137) % 40_000_00, 2),
            performance_rating: (i % 5) as i32 + 1,
            years_of_service: (i % 12) as i32,
        });
    }
    store
}

fn create_bench_state(employee_count: usize) -> AppState {
    let policy = PolicyLoader::load("./config/default").expect("Failed to load policy");
    AppState::with_store(policy, create_store(employee_count))
}

fn post(uri: &'static str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Benchmark: Single raise evaluation through the router.
///
/// Target: < 100μs mean
fn bench_single_raise(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_bench_state(100);
    let router = create_router(state);
    let body = serde_json::json!({
        "employee_id": "emp_bench_0003",
        "requested_percentage": "5"
    })
    .to_string();

    c.bench_function("single_raise", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router.oneshot(post("/raise", body.clone())).await.unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Single bonus calculation through the router.
///
/// Target: < 100μs mean
fn bench_single_bonus(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_bench_state(0);
    let router = create_router(state);
    let body = serde_json::json!({"salary": "80000", "rating": 5}).to_string();

    c.bench_function("single_bonus", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router.oneshot(post("/bonus", body.clone())).await.unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 raise requests against one shared store.
///
/// Target: < 100ms mean
fn bench_batch_100_raises(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_bench_state(100);

    let requests: Vec<String> = (0..100)
        .map(|i| {
            serde_json::json!({
                "employee_id": format!("emp_bench_{:04}", i),
                "requested_percentage": "3.5"
            })
            .to_string()
        })
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100_raises", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router.oneshot(post("/raise", body.clone())).await.unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Department rollup at increasing store sizes.
fn bench_rollup_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let body = serde_json::json!({"department": "IT"}).to_string();

    let mut group = c.benchmark_group("rollup_scaling");

    for employee_count in [10usize, 100, 1000].iter() {
        let state = create_bench_state(*employee_count);
        let router = create_router(state);

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response =
                        router.oneshot(post("/rollup", body.clone())).await.unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_raise,
    bench_single_bonus,
    bench_batch_100_raises,
    bench_rollup_scaling,
);
criterion_main!(benches);
