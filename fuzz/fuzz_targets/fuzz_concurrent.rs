#![no_main]

//! Fuzz target for concurrent container operations
//!
//! Tests that concurrent first resolutions build each service once and
//! that racing registrations admit exactly one winner.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use service_container::Container;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Service for concurrent testing
#[derive(Clone, Debug, Arbitrary)]
struct ConcurrentService {
    id: u64,
    data: Vec<u8>,
}

#[derive(Debug)]
struct SharedConfig {
    value: u32,
}

/// Thread operation
#[derive(Debug, Clone, Arbitrary)]
enum ThreadOp {
    Resolve,
    TryResolve,
    Fresh,
    Contains,
    Register(ConcurrentService),
    RegisterNamed(u8),
    Bootstrap,
}

/// Concurrent test scenario
#[derive(Debug, Arbitrary)]
struct ConcurrentScenario {
    // Number of threads (clamped to 1-8)
    thread_count: u8,
    // Operations per thread (clamped)
    ops_per_thread: Vec<ThreadOp>,
}

fuzz_target!(|scenario: ConcurrentScenario| {
    let container = Container::new();
    let builds = Arc::new(AtomicUsize::new(0));
    let wins = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&builds);
    container
        .register_deferred(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(SharedConfig { value: 42 })
        })
        .unwrap();

    // Clamp thread count
    let thread_count = (scenario.thread_count % 8).max(1) as usize;
    let ops = scenario.ops_per_thread;

    let mut handles = Vec::new();

    for _ in 0..thread_count {
        let container = container.clone();
        let wins = Arc::clone(&wins);
        let ops = ops.clone();

        let handle = thread::spawn(move || {
            for op in ops.into_iter().take(50) {
                match op {
                    ThreadOp::Resolve => {
                        let config = container.resolve::<SharedConfig>().unwrap();
                        assert_eq!(config.value, 42);
                    }
                    ThreadOp::TryResolve => {
                        let _ = container.try_resolve::<ConcurrentService>();
                    }
                    ThreadOp::Fresh => {
                        let _ = container.fresh::<SharedConfig>();
                    }
                    ThreadOp::Contains => {
                        assert!(container.contains::<SharedConfig>());
                        let _ = container.contains::<ConcurrentService>();
                    }
                    ThreadOp::Register(svc) => {
                        if container.instance(svc).is_ok() {
                            wins.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                    ThreadOp::RegisterNamed(n) => {
                        let _ = container.register_named(format!("svc-{}", n % 4), |_| {
                            Ok(ConcurrentService {
                                id: 0,
                                data: Vec::new(),
                            })
                        });
                    }
                    ThreadOp::Bootstrap => {
                        let _ = container.bootstrap();
                    }
                }
            }
        });

        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // Cached resolutions never rebuild; only fresh() may add builds
    let has_fresh = ops.iter().any(|op| matches!(op, ThreadOp::Fresh));
    let has_resolve = ops.iter().any(|op| matches!(op, ThreadOp::Resolve));
    if has_resolve && !has_fresh {
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }
    assert!(wins.load(Ordering::SeqCst) <= 1);
    assert_eq!(
        container.contains::<ConcurrentService>(),
        wins.load(Ordering::SeqCst) == 1
    );
});
