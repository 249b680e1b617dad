#![no_main]

//! Fuzz target for bootstrap and shutdown sequencing
//!
//! Tests eager versus deferred construction, setup retry after failure,
//! and shutdown ordering.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use service_container::{Container, DiError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Deferred service with construction tracking
#[derive(Debug)]
struct DeferredService {
    id: u64,
}

/// Eager service
#[derive(Debug)]
struct EagerService {
    id: u64,
}

/// Lifecycle operations
#[derive(Debug, Arbitrary)]
enum LifecycleOp {
    // Registration
    RegisterEager,
    RegisterDeferred,
    RegisterSetup { fail: bool },
    RegisterShutdown { fail: bool },

    // Resolution
    ResolveEager,
    ResolveDeferred,
    FreshDeferred(u8),

    // Lifecycle
    Bootstrap,
    Shutdown,
    HealSetups,
}

fuzz_target!(|ops: Vec<LifecycleOp>| {
    let counter = Arc::new(AtomicU64::new(0));
    let broken = Arc::new(AtomicBool::new(false));
    let container = Container::new();

    let mut has_eager = false;
    let mut has_deferred = false;
    let mut failing_shutdown = false;
    let mut was_bootstrapped = false;

    for op in ops.into_iter().take(100) {
        match op {
            LifecycleOp::RegisterEager => {
                let counter = Arc::clone(&counter);
                let result = container.register(move |_| {
                    Ok(EagerService {
                        id: counter.fetch_add(1, Ordering::SeqCst),
                    })
                });
                assert_eq!(result.is_ok(), !has_eager);
                has_eager = true;
            }
            LifecycleOp::RegisterDeferred => {
                let counter = Arc::clone(&counter);
                let result = container.register_deferred(move |_| {
                    Ok(DeferredService {
                        id: counter.fetch_add(1, Ordering::SeqCst),
                    })
                });
                assert_eq!(result.is_ok(), !has_deferred);
                has_deferred = true;
            }
            LifecycleOp::RegisterSetup { fail } => {
                if fail {
                    broken.store(true, Ordering::SeqCst);
                }
                let broken = Arc::clone(&broken);
                container.register_setup(move |_| {
                    if fail && broken.load(Ordering::SeqCst) {
                        Err("setup failed".into())
                    } else {
                        Ok(())
                    }
                });
            }
            LifecycleOp::RegisterShutdown { fail } => {
                failing_shutdown |= fail;
                container.register_shutdown(move |_| {
                    if fail {
                        Err("shutdown failed".into())
                    } else {
                        Ok(())
                    }
                });
            }
            LifecycleOp::ResolveEager => {
                let a = container.try_resolve::<EagerService>();
                let b = container.try_resolve::<EagerService>();
                assert_eq!(a.is_some(), has_eager);
                if let (Some(a), Some(b)) = (a, b) {
                    assert!(Arc::ptr_eq(&a, &b), "Cached service should be same instance");
                }
            }
            LifecycleOp::ResolveDeferred => {
                let a = container.try_resolve::<DeferredService>();
                let b = container.try_resolve::<DeferredService>();
                if let (Some(a), Some(b)) = (a, b) {
                    assert!(Arc::ptr_eq(&a, &b));
                    assert_eq!(a.id, b.id);
                }
            }
            LifecycleOp::FreshDeferred(count) => {
                if has_deferred {
                    let count = (count % 10).max(1);
                    let mut ids = Vec::new();
                    for _ in 0..count {
                        ids.push(container.fresh::<DeferredService>().unwrap().id);
                    }
                    ids.dedup();
                    assert_eq!(ids.len(), count as usize, "Fresh instances should be distinct");
                }
            }
            LifecycleOp::Bootstrap => {
                let was_materialized = container.is_materialized::<DeferredService>();
                match container.bootstrap() {
                    Ok(()) => {
                        assert!(container.is_bootstrapped());
                        was_bootstrapped = true;
                        if has_eager {
                            assert!(container.is_materialized::<EagerService>());
                        }
                    }
                    Err(DiError::SetupFailed { .. }) => {
                        assert_eq!(container.is_bootstrapped(), was_bootstrapped);
                    }
                    Err(err) => panic!("unexpected bootstrap error: {err}"),
                }
                // Bootstrap never builds deferred services
                assert_eq!(
                    container.is_materialized::<DeferredService>(),
                    was_materialized
                );
            }
            LifecycleOp::Shutdown => {
                let result = container.shutdown();
                assert_eq!(result.is_err(), failing_shutdown);
                assert_eq!(container.is_bootstrapped(), was_bootstrapped);
            }
            LifecycleOp::HealSetups => {
                broken.store(false, Ordering::SeqCst);
            }
        }
    }
});
