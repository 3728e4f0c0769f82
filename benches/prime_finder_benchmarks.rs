use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prime_finder::prelude::*;

const MAX: i64 = 5000;

fn benchmark_sequential(c: &mut Criterion) {
    c.bench_function("trial_division_5000", |b| {
        b.iter(|| trial_division(1, black_box(MAX)).expect("valid range"));
    });
}

fn benchmark_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_primes_5000");

    for threads in [1usize, 3, 5] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            b.iter(|| find_primes(1, black_box(MAX), threads).expect("valid search"));
        });
    }

    group.finish();
}

fn benchmark_queue_round_trip(c: &mut Criterion) {
    c.bench_function("work_queue_100_empty_jobs", |b| {
        b.iter(|| {
            let queue = WorkQueue::with_threads(4).expect("Failed to create work queue");
            for _ in 0..100 {
                queue
                    .execute(|| {
                        black_box(1 + 1);
                        Ok(())
                    })
                    .expect("Failed to submit job");
            }
            queue.finish();
            queue.shutdown().expect("Failed to shutdown queue");
        });
    });
}

criterion_group!(
    benches,
    benchmark_sequential,
    benchmark_parallel,
    benchmark_queue_round_trip
);
criterion_main!(benches);
