use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use workpool::ThreadPool;

// Benchmark 1: submit + wait overhead
fn bench_submit_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit_overhead");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("with_handle", size), &size, |b, &size| {
            let pool = ThreadPool::new(num_cpus::get()).unwrap();

            b.iter(|| {
                let handles: Vec<_> = (0..size)
                    .map(|i| pool.submit(move || black_box(i)).unwrap())
                    .collect();

                for handle in handles {
                    black_box(handle.wait().unwrap());
                }
            });
        });
    }

    group.finish();
}

// Benchmark 2: pool startup/teardown
fn bench_pool_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_lifecycle");

    for threads in [1, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &threads,
            |b, &threads| {
                b.iter(|| drop(ThreadPool::new(black_box(threads)).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_submit_overhead, bench_pool_lifecycle);
criterion_main!(benches);
