//! Benchmarks for the service container

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use service_container::Container;
use std::hint::black_box;
use std::sync::atomic::{AtomicUsize, Ordering};

#[allow(dead_code)]
struct SmallService {
    value: i32,
}

#[allow(dead_code)]
struct MediumService {
    name: String,
    values: Vec<i32>,
}

#[allow(dead_code)]
struct LargeService {
    data: Vec<u8>,
    config: std::collections::HashMap<String, String>,
}

// Dependency chain for bootstrap benchmarks
#[allow(dead_code)]
struct ServiceA {
    value: i32,
}

#[allow(dead_code)]
struct ServiceB {
    a: std::sync::Arc<ServiceA>,
}

#[allow(dead_code)]
struct ServiceC {
    b: std::sync::Arc<ServiceB>,
}

#[allow(dead_code)]
struct ServiceD {
    c: std::sync::Arc<ServiceC>,
}

fn chain(container: &Container) {
    container.register(|_| Ok(ServiceA { value: 1 })).unwrap();
    container
        .register(|c| Ok(ServiceB { a: c.resolve()? }))
        .unwrap();
    container
        .register(|c| Ok(ServiceC { b: c.resolve()? }))
        .unwrap();
    container
        .register(|c| Ok(ServiceD { c: c.resolve()? }))
        .unwrap();
}

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("registration");

    group.bench_function("instance_small", |b| {
        b.iter(|| {
            let container = Container::new();
            container.instance(SmallService { value: 42 }).unwrap();
            black_box(container)
        })
    });

    group.bench_function("instance_medium", |b| {
        b.iter(|| {
            let container = Container::new();
            container
                .instance(MediumService {
                    name: "test".to_string(),
                    values: vec![1, 2, 3, 4, 5],
                })
                .unwrap();
            black_box(container)
        })
    });

    group.bench_function("eager_factory", |b| {
        b.iter(|| {
            let container = Container::new();
            container.register(|_| Ok(SmallService { value: 42 })).unwrap();
            black_box(container)
        })
    });

    group.bench_function("deferred_factory", |b| {
        b.iter(|| {
            let container = Container::new();
            container
                .register_deferred(|_| Ok(SmallService { value: 42 }))
                .unwrap();
            black_box(container)
        })
    });

    group.bench_function("named_factory", |b| {
        b.iter(|| {
            let container = Container::new();
            container
                .register_named("primary", |_| Ok(SmallService { value: 42 }))
                .unwrap();
            black_box(container)
        })
    });

    group.bench_function("duplicate_rejected", |b| {
        let container = Container::new();
        container.instance(SmallService { value: 42 }).unwrap();

        b.iter(|| black_box(container.instance(SmallService { value: 1 }).is_err()))
    });

    group.finish();
}

fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");
    group.throughput(Throughput::Elements(1));

    // Pre-create container with services
    let container = Container::new();
    container.instance(SmallService { value: 42 }).unwrap();
    container
        .register(|_| {
            Ok(MediumService {
                name: "test".to_string(),
                values: vec![1, 2, 3, 4, 5],
            })
        })
        .unwrap();
    container
        .register_named("backup", |_| Ok(SmallService { value: 7 }))
        .unwrap();
    container.bootstrap().unwrap();

    group.bench_function("resolve_instance", |b| {
        b.iter(|| {
            let service = container.resolve::<SmallService>().unwrap();
            black_box(service)
        })
    });

    group.bench_function("resolve_cached_factory", |b| {
        b.iter(|| {
            let service = container.resolve::<MediumService>().unwrap();
            black_box(service)
        })
    });

    group.bench_function("resolve_named", |b| {
        b.iter(|| {
            let service = container.resolve_named::<SmallService>("backup").unwrap();
            black_box(service)
        })
    });

    group.bench_function("contains_check", |b| {
        b.iter(|| {
            let exists = container.contains::<SmallService>();
            black_box(exists)
        })
    });

    group.bench_function("try_resolve_not_found", |b| {
        b.iter(|| {
            let service = container.try_resolve::<LargeService>();
            black_box(service)
        })
    });

    group.bench_function("type_mismatch", |b| {
        b.iter(|| {
            let result = container.resolve_named::<MediumService>("backup");
            black_box(result.is_err())
        })
    });

    group.finish();
}

fn bench_fresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("fresh");
    group.throughput(Throughput::Elements(1));

    let container = Container::new();
    container
        .register_deferred(|_| Ok(SmallService { value: 42 }))
        .unwrap();

    group.bench_function("fresh_small", |b| {
        b.iter(|| {
            let service = container.fresh::<SmallService>().unwrap();
            black_box(service)
        })
    });

    group.finish();
}

fn bench_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap");

    group.bench_function("chain_4", |b| {
        b.iter(|| {
            let container = Container::new();
            chain(&container);
            container.bootstrap().unwrap();
            black_box(container)
        })
    });

    group.bench_function("with_callbacks", |b| {
        let runs = std::sync::Arc::new(AtomicUsize::new(0));

        b.iter(|| {
            let container = Container::new();
            chain(&container);
            for _ in 0..4 {
                let runs = std::sync::Arc::clone(&runs);
                container.register_setup(move |_| {
                    runs.fetch_add(1, Ordering::Relaxed);
                    Ok(())
                });
            }
            container.register_shutdown(|_| Ok(()));
            container.bootstrap().unwrap();
            container.shutdown().unwrap();
            black_box(container)
        })
    });

    group.finish();
}

fn bench_concurrent(c: &mut Criterion) {
    use std::thread;

    let mut group = c.benchmark_group("concurrent");

    group.bench_function("concurrent_reads_4", |b| {
        let container = Container::new();
        container.instance(SmallService { value: 42 }).unwrap();

        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let c = container.clone();
                    thread::spawn(move || {
                        for _ in 0..100 {
                            let _ = c.resolve::<SmallService>().unwrap();
                        }
                    })
                })
                .collect();

            for h in handles {
                h.join().unwrap();
            }
        })
    });

    group.bench_function("concurrent_first_resolution_4", |b| {
        b.iter(|| {
            let container = Container::new();
            container
                .register_deferred(|_| Ok(SmallService { value: 42 }))
                .unwrap();

            thread::scope(|s| {
                for _ in 0..4 {
                    s.spawn(|| container.resolve::<SmallService>().unwrap());
                }
            });
            black_box(container)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_registration,
    bench_resolution,
    bench_fresh,
    bench_bootstrap,
    bench_concurrent,
);

criterion_main!(benches);
