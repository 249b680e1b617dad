#![no_main]

//! Fuzz target for basic container operations
//!
//! Tests registration and resolution against a model of which identities
//! have been registered.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use service_container::{BoxError, Container, DiError};
use std::collections::HashSet;

/// Service types for fuzzing
#[derive(Clone, Debug, Arbitrary)]
struct SmallService {
    id: u32,
    name: String,
}

#[derive(Clone, Debug, Arbitrary)]
struct MediumService {
    id: u64,
    data: Vec<u8>,
    config: ServiceConfig,
}

#[derive(Clone, Debug, Arbitrary)]
struct ServiceConfig {
    enabled: bool,
    timeout_ms: u32,
    retries: u8,
    tags: Vec<String>,
}

/// Operations to perform on the container
#[derive(Debug, Arbitrary)]
enum ContainerOp {
    InstanceSmall(SmallService),
    InstanceMedium(MediumService),
    RegisterSmall { deferred: bool, fail: bool },
    RegisterNamed { name: String, deferred: bool },
    ResolveSmall,
    ResolveMedium,
    ResolveNamedSmall(String),
    ResolveNamedMedium(String),
    FreshSmall,
    Bootstrap,
    Contains,
    GetLen,
}

fuzz_target!(|ops: Vec<ContainerOp>| {
    let container = Container::new();

    // Model of registered identities
    let mut small = false;
    let mut medium = false;
    let mut names: HashSet<String> = HashSet::new();

    for op in ops.into_iter().take(200) {
        match op {
            ContainerOp::InstanceSmall(svc) => {
                let result = container.instance(svc);
                assert_eq!(result.is_ok(), !small);
                small = true;
            }
            ContainerOp::InstanceMedium(svc) => {
                let result = container.instance(svc);
                assert_eq!(result.is_ok(), !medium);
                medium = true;
            }
            ContainerOp::RegisterSmall { deferred, fail } => {
                let factory = move |_: &Container| -> Result<SmallService, BoxError> {
                    if fail {
                        Err("fuzz failure".into())
                    } else {
                        Ok(SmallService {
                            id: 1,
                            name: "factory".into(),
                        })
                    }
                };
                let result = if deferred {
                    container.register_deferred(factory)
                } else {
                    container.register(factory)
                };
                assert_eq!(result.is_ok(), !small);
                small = true;
            }
            ContainerOp::RegisterNamed { name, deferred } => {
                let result = if deferred {
                    container.register_named_deferred(name.as_str(), |_| {
                        Ok(SmallService {
                            id: 2,
                            name: "named".into(),
                        })
                    })
                } else {
                    container.register_named(name.as_str(), |_| {
                        Ok(SmallService {
                            id: 2,
                            name: "named".into(),
                        })
                    })
                };
                assert_eq!(result.is_ok(), names.insert(name));
            }
            ContainerOp::ResolveSmall => {
                let result = container.resolve::<SmallService>();
                if !small {
                    assert!(matches!(result, Err(DiError::NotFound { .. })));
                }
            }
            ContainerOp::ResolveMedium => {
                let result = container.resolve::<MediumService>();
                assert_eq!(result.is_ok(), medium);
            }
            ContainerOp::ResolveNamedSmall(name) => {
                let result = container.resolve_named::<SmallService>(&name);
                if !names.contains(&name) {
                    assert!(matches!(result, Err(DiError::NotFound { .. })));
                } else {
                    assert!(result.is_ok());
                }
            }
            ContainerOp::ResolveNamedMedium(name) => {
                let result = container.resolve_named::<MediumService>(&name);
                if names.contains(&name) {
                    assert!(matches!(result, Err(DiError::TypeMismatch { .. })));
                } else {
                    assert!(matches!(result, Err(DiError::NotFound { .. })));
                }
            }
            ContainerOp::FreshSmall => {
                if let (Ok(a), Ok(b)) = (
                    container.fresh::<SmallService>(),
                    container.fresh::<SmallService>(),
                ) {
                    assert!(!std::sync::Arc::ptr_eq(&a, &b));
                }
            }
            ContainerOp::Bootstrap => {
                let _ = container.bootstrap();
            }
            ContainerOp::Contains => {
                assert_eq!(container.contains::<SmallService>(), small);
                assert_eq!(container.contains::<MediumService>(), medium);
            }
            ContainerOp::GetLen => {
                let expected = usize::from(small) + usize::from(medium) + names.len();
                assert_eq!(container.len(), expected);
            }
        }
    }
});
