//! Thread-safe service container
//!
//! The `Container` is the core of the crate. It stores factory records and
//! materialized instances keyed by [`ServiceIdentity`] and resolves them
//! with an at-most-once construction guarantee per identity.

use crate::factory::{AnyService, FactoryRecord, ServiceSlot};
use crate::lifecycle::Lifecycle;
use crate::observe::Observer;
use crate::storage::Registry;
use crate::{
    Activation, BoxError, ContainerBuilder, DiError, DiagnosticSink, Injectable, Result,
    ServiceIdentity, Version,
};
use parking_lot::RwLock;
use std::sync::Arc;

#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// State shared by every clone of a container
pub(crate) struct Shared {
    pub(crate) registry: Registry,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) observer: Observer,
    version: RwLock<Option<Version>>,
}

/// Thread-safe service container.
///
/// Cloning is cheap and yields another handle to the same services.
/// Factories receive the container so they can resolve their own
/// dependencies.
///
/// # Examples
///
/// ```rust
/// use service_container::Container;
/// use std::sync::Arc;
///
/// struct Config { url: String }
/// struct Repository { config: Arc<Config> }
///
/// let container = Container::new();
/// container
///     .register(|_| Ok(Config { url: "postgres://localhost".into() }))
///     .unwrap();
/// container
///     .register(|c| Ok(Repository { config: c.resolve::<Config>()? }))
///     .unwrap();
///
/// container.bootstrap().unwrap();
///
/// let repo = container.resolve::<Repository>().unwrap();
/// assert_eq!(repo.config.url, "postgres://localhost");
/// ```
///
/// # Cycles
///
/// Resolving an identity from inside its own factory (directly or through
/// other factories) is a dependency cycle. It is not detected and
/// deadlocks the calling thread.
#[derive(Clone)]
pub struct Container {
    pub(crate) shared: Arc<Shared>,
}

impl Container {
    /// Create an empty container.
    #[inline]
    pub fn new() -> Self {
        Self::from_builder(0, None, None)
    }

    /// Start configuring a container.
    #[inline]
    pub fn builder() -> ContainerBuilder {
        ContainerBuilder::new()
    }

    pub(crate) fn from_builder(
        capacity: usize,
        sink: Option<Arc<dyn DiagnosticSink>>,
        version: Option<Version>,
    ) -> Self {
        #[cfg(feature = "logging")]
        debug!(
            target: "service_container",
            capacity = capacity,
            has_sink = sink.is_some(),
            "Creating new service container"
        );

        Self {
            shared: Arc::new(Shared {
                registry: Registry::with_capacity(capacity),
                lifecycle: Lifecycle::default(),
                observer: Observer::new(sink),
                version: RwLock::new(version),
            }),
        }
    }

    // =========================================================================
    // Registration Methods
    // =========================================================================

    /// Register an eager factory under `T`'s type identity.
    ///
    /// The factory runs during [`bootstrap`](Self::bootstrap), or earlier if
    /// something resolves `T` first.
    pub fn register<T: Injectable, F>(&self, factory: F) -> Result<()>
    where
        F: Fn(&Container) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        self.register_with(ServiceIdentity::of::<T>()?, Activation::Eager, factory)
    }

    /// Register a deferred factory under `T`'s type identity.
    ///
    /// The factory runs on the first `resolve`/`fresh`, never during bootstrap.
    pub fn register_deferred<T: Injectable, F>(&self, factory: F) -> Result<()>
    where
        F: Fn(&Container) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        self.register_with(ServiceIdentity::of::<T>()?, Activation::Deferred, factory)
    }

    /// Register an eager factory under an explicit name.
    ///
    /// The same value type may be registered under any number of names;
    /// each name is cached independently.
    pub fn register_named<T: Injectable, F>(&self, name: impl Into<Arc<str>>, factory: F) -> Result<()>
    where
        F: Fn(&Container) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        self.register_with(ServiceIdentity::named(name), Activation::Eager, factory)
    }

    /// Register a deferred factory under an explicit name.
    pub fn register_named_deferred<T: Injectable, F>(
        &self,
        name: impl Into<Arc<str>>,
        factory: F,
    ) -> Result<()>
    where
        F: Fn(&Container) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        self.register_with(ServiceIdentity::named(name), Activation::Deferred, factory)
    }

    /// Register a factory under any identity.
    ///
    /// Fails with [`DiError::AlreadyRegistered`] if the identity is taken;
    /// the first registration stays in effect.
    pub fn register_with<T: Injectable, F>(
        &self,
        identity: ServiceIdentity,
        activation: Activation,
        factory: F,
    ) -> Result<()>
    where
        F: Fn(&Container) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        match activation {
            Activation::Eager => self.shared.observer.register(&identity),
            Activation::Deferred => self.shared.observer.register_deferred(&identity),
        }

        let record = FactoryRecord::new(activation, factory);
        self.insert(ServiceSlot::with_factory::<T>(identity, record), activation.as_str())
    }

    /// Register an already-built value under `T`'s type identity.
    ///
    /// No factory is retained, so [`fresh`](Self::fresh) on it fails with
    /// [`DiError::NotFound`].
    pub fn instance<T: Injectable>(&self, value: T) -> Result<()> {
        self.insert_instance(ServiceIdentity::of::<T>()?, value)
    }

    /// Register an already-built value under an explicit name.
    pub fn instance_named<T: Injectable>(&self, name: impl Into<Arc<str>>, value: T) -> Result<()> {
        self.insert_instance(ServiceIdentity::named(name), value)
    }

    fn insert_instance<T: Injectable>(&self, identity: ServiceIdentity, value: T) -> Result<()> {
        self.shared.observer.register(&identity);
        self.insert(ServiceSlot::materialized(identity, value), "instance")
    }

    #[cfg_attr(not(feature = "logging"), allow(unused_variables))]
    fn insert(&self, slot: ServiceSlot, kind: &'static str) -> Result<()> {
        #[cfg(feature = "logging")]
        let identity = slot.identity().clone();

        let result = self.shared.registry.insert(slot);

        #[cfg(feature = "logging")]
        match &result {
            Ok(()) => debug!(
                target: "service_container",
                service = %identity,
                activation = kind,
                service_count = self.shared.registry.len(),
                "Registered service"
            ),
            Err(_) => debug!(
                target: "service_container",
                service = %identity,
                activation = kind,
                "Rejected duplicate registration"
            ),
        }

        result
    }

    // =========================================================================
    // Resolution Methods
    // =========================================================================

    /// Resolve the shared instance registered under `T`'s type identity.
    ///
    /// Constructs and caches it on first access. Concurrent first accesses
    /// run the factory exactly once and all observe the same instance.
    pub fn resolve<T: Injectable>(&self) -> Result<Arc<T>> {
        self.resolve_identity(&ServiceIdentity::of::<T>()?)
    }

    /// Resolve the shared instance registered under `name`.
    ///
    /// Fails with [`DiError::TypeMismatch`] if the name holds another type.
    pub fn resolve_named<T: Injectable>(&self, name: &str) -> Result<Arc<T>> {
        self.resolve_identity(&ServiceIdentity::named(name))
    }

    /// Resolve the shared instance registered under any identity.
    pub fn resolve_identity<T: Injectable>(&self, identity: &ServiceIdentity) -> Result<Arc<T>> {
        self.shared.observer.resolve(identity);

        let slot = self.slot(identity)?;
        slot.ensure_type::<T>()?;

        let service: AnyService = match slot.cached() {
            Some(service) => {
                #[cfg(feature = "logging")]
                trace!(
                    target: "service_container",
                    service = %identity,
                    "Service resolved from cache"
                );
                service
            }
            None => {
                #[cfg(feature = "logging")]
                debug!(
                    target: "service_container",
                    service = %identity,
                    "Materializing service on first access"
                );
                slot.materialize(self)?
            }
        };

        slot.downcast(service)
    }

    /// Try to resolve, returning None on any failure.
    #[inline]
    pub fn try_resolve<T: Injectable>(&self) -> Option<Arc<T>> {
        self.resolve::<T>().ok()
    }

    /// Build a brand-new instance of `T`, bypassing and not updating the cache.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use service_container::Container;
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicU64, Ordering};
    ///
    /// struct RequestId(u64);
    ///
    /// let counter = Arc::new(AtomicU64::new(0));
    /// let container = Container::new();
    /// let next = Arc::clone(&counter);
    /// container
    ///     .register_deferred(move |_| Ok(RequestId(next.fetch_add(1, Ordering::SeqCst))))
    ///     .unwrap();
    ///
    /// let a = container.fresh::<RequestId>().unwrap();
    /// let b = container.fresh::<RequestId>().unwrap();
    /// assert_ne!(a.0, b.0);
    /// ```
    pub fn fresh<T: Injectable>(&self) -> Result<Arc<T>> {
        self.fresh_identity(&ServiceIdentity::of::<T>()?)
    }

    /// Build a brand-new instance of the service registered under `name`.
    pub fn fresh_named<T: Injectable>(&self, name: &str) -> Result<Arc<T>> {
        self.fresh_identity(&ServiceIdentity::named(name))
    }

    /// Build a brand-new instance for any identity.
    ///
    /// Fails with [`DiError::NotFound`] when no factory is retained for the
    /// identity, including values registered through `instance`.
    pub fn fresh_identity<T: Injectable>(&self, identity: &ServiceIdentity) -> Result<Arc<T>> {
        self.shared.observer.resolve(identity);

        let slot = self.slot(identity)?;
        slot.ensure_type::<T>()?;

        #[cfg(feature = "logging")]
        trace!(
            target: "service_container",
            service = %identity,
            "Creating fresh instance"
        );

        let service = slot.construct(self)?;
        slot.downcast(service)
    }

    fn slot(&self, identity: &ServiceIdentity) -> Result<Arc<ServiceSlot>> {
        self.shared.registry.get(identity).ok_or_else(|| {
            #[cfg(feature = "logging")]
            debug!(
                target: "service_container",
                service = %identity,
                "Service not found in container"
            );
            DiError::not_found(identity)
        })
    }

    // =========================================================================
    // Query Methods
    // =========================================================================

    /// Check if `T` has a registration (factory or instance).
    #[inline]
    pub fn contains<T: Injectable>(&self) -> bool {
        ServiceIdentity::of::<T>().is_ok_and(|identity| self.contains_identity(&identity))
    }

    #[inline]
    pub fn contains_named(&self, name: &str) -> bool {
        self.contains_identity(&ServiceIdentity::named(name))
    }

    #[inline]
    pub fn contains_identity(&self, identity: &ServiceIdentity) -> bool {
        self.shared.registry.contains(identity)
    }

    /// Check if `T` has a cached instance.
    pub fn is_materialized<T: Injectable>(&self) -> bool {
        ServiceIdentity::of::<T>().is_ok_and(|identity| self.is_materialized_identity(&identity))
    }

    pub fn is_materialized_named(&self, name: &str) -> bool {
        self.is_materialized_identity(&ServiceIdentity::named(name))
    }

    pub fn is_materialized_identity(&self, identity: &ServiceIdentity) -> bool {
        self.shared
            .registry
            .get(identity)
            .is_some_and(|slot| slot.is_materialized())
    }

    /// Number of registered identities.
    #[inline]
    pub fn len(&self) -> usize {
        self.shared.registry.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shared.registry.is_empty()
    }

    /// Registered identities in registration order.
    pub fn identities(&self) -> Vec<ServiceIdentity> {
        self.shared.registry.identities()
    }

    // =========================================================================
    // Application Version
    // =========================================================================

    pub fn set_version(&self, version: impl Into<Version>) {
        *self.shared.version.write() = Some(version.into());
    }

    pub fn version(&self) -> Option<Version> {
        self.shared.version.read().clone()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("service_count", &self.len())
            .field("bootstrapped", &self.is_bootstrapped())
            .field("has_sink", &self.shared.observer.has_sink())
            .field("version", &self.version())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::tests::RecordingSink;
    use parking_lot::Mutex;
    use std::sync::Barrier;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    #[derive(Debug)]
    struct Demo {
        value: String,
    }

    struct Config {
        url: String,
    }

    struct Repository {
        config: Arc<Config>,
    }

    #[test]
    fn test_container_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Container>();
    }

    #[test]
    fn test_register_twice_keeps_first() {
        let container = Container::new();
        container
            .register(|_| Ok(Demo { value: "apple".into() }))
            .unwrap();

        let err = container
            .register(|_| Ok(Demo { value: "pear".into() }))
            .unwrap_err();
        assert!(matches!(err, DiError::AlreadyRegistered { .. }));

        let err = container
            .register_deferred(|_| Ok(Demo { value: "plum".into() }))
            .unwrap_err();
        assert!(matches!(err, DiError::AlreadyRegistered { .. }));

        assert_eq!(container.resolve::<Demo>().unwrap().value, "apple");
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_instance_conflicts_with_factory() {
        let container = Container::new();
        container.instance(Demo { value: "seed".into() }).unwrap();

        let err = container
            .register(|_| Ok(Demo { value: "other".into() }))
            .unwrap_err();
        assert!(matches!(err, DiError::AlreadyRegistered { .. }));
    }

    #[test]
    fn test_resolve_returns_same_instance() {
        let container = Container::new();
        container
            .register(|_| Ok(Demo { value: "apple".into() }))
            .unwrap();
        container.bootstrap().unwrap();

        let a = container.resolve::<Demo>().unwrap();
        let b = container.resolve::<Demo>().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.value, "apple");
    }

    #[test]
    fn test_resolve_before_bootstrap_materializes() {
        let container = Container::new();
        container
            .register(|_| Ok(Demo { value: "early".into() }))
            .unwrap();

        assert!(!container.is_materialized::<Demo>());
        let early = container.resolve::<Demo>().unwrap();
        assert!(container.is_materialized::<Demo>());

        container.bootstrap().unwrap();
        let late = container.resolve::<Demo>().unwrap();
        assert!(Arc::ptr_eq(&early, &late));
    }

    #[test]
    fn test_fresh_reflects_captured_state() {
        let source = Arc::new(Mutex::new(String::from("bongo")));
        let captured = Arc::clone(&source);

        let container = Container::new();
        container
            .register(move |_| {
                Ok(Demo {
                    value: captured.lock().clone(),
                })
            })
            .unwrap();
        container.bootstrap().unwrap();

        *source.lock() = "fish".into();
        assert_eq!(container.resolve::<Demo>().unwrap().value, "bongo");
        assert_eq!(container.fresh::<Demo>().unwrap().value, "fish");

        *source.lock() = "cod".into();
        assert_eq!(container.resolve::<Demo>().unwrap().value, "bongo");
        assert_eq!(container.fresh::<Demo>().unwrap().value, "cod");
    }

    #[test]
    fn test_fresh_does_not_populate_cache() {
        let container = Container::new();
        container
            .register_deferred(|_| Ok(Demo { value: "lazy".into() }))
            .unwrap();

        let fresh = container.fresh::<Demo>().unwrap();
        assert!(!container.is_materialized::<Demo>());

        let cached = container.resolve::<Demo>().unwrap();
        assert!(!Arc::ptr_eq(&fresh, &cached));
    }

    #[test]
    fn test_fresh_on_instance_is_not_found() {
        let container = Container::new();
        container.instance(Demo { value: "seed".into() }).unwrap();

        assert_eq!(container.resolve::<Demo>().unwrap().value, "seed");
        let err = container.fresh::<Demo>().unwrap_err();
        assert!(matches!(err, DiError::NotFound { .. }));
    }

    #[test]
    fn test_missing_identity_is_not_found() {
        let container = Container::new();
        container.bootstrap().unwrap();

        assert!(matches!(
            container.resolve::<Demo>().unwrap_err(),
            DiError::NotFound { .. }
        ));
        assert!(matches!(
            container.fresh::<Demo>().unwrap_err(),
            DiError::NotFound { .. }
        ));
        assert!(matches!(
            container.resolve_named::<Demo>("demo").unwrap_err(),
            DiError::NotFound { .. }
        ));
        assert!(container.try_resolve::<Demo>().is_none());
    }

    #[test]
    fn test_deferred_not_built_by_bootstrap() {
        let built = Arc::new(AtomicUsize::new(0));
        let flag = Arc::clone(&built);

        let container = Container::new();
        container
            .register_deferred(move |_| {
                flag.fetch_add(1, Ordering::SeqCst);
                Ok(Demo { value: "lazy".into() })
            })
            .unwrap();

        container.bootstrap().unwrap();
        assert_eq!(built.load(Ordering::SeqCst), 0);

        container.resolve::<Demo>().unwrap();
        container.resolve::<Demo>().unwrap();
        assert_eq!(built.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reentrant_resolve_of_materialized_dependency() {
        let config_builds = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&config_builds);

        let container = Container::new();
        container
            .register(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Config {
                    url: "postgres://localhost".into(),
                })
            })
            .unwrap();
        container.bootstrap().unwrap();

        container
            .register(|c| {
                Ok(Repository {
                    config: c.resolve::<Config>()?,
                })
            })
            .unwrap();
        container.bootstrap().unwrap();

        let repo = container.resolve::<Repository>().unwrap();
        assert_eq!(repo.config.url, "postgres://localhost");
        assert!(Arc::ptr_eq(&repo.config, &container.resolve::<Config>().unwrap()));
        assert_eq!(config_builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dependency_registered_after_dependent() {
        let config_builds = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&config_builds);

        let container = Container::new();
        container
            .register(|c| {
                Ok(Repository {
                    config: c.resolve::<Config>()?,
                })
            })
            .unwrap();
        container
            .register(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Config { url: "sqlite::memory:".into() })
            })
            .unwrap();

        container.bootstrap().unwrap();
        assert_eq!(config_builds.load(Ordering::SeqCst), 1);
        assert_eq!(container.resolve::<Repository>().unwrap().config.url, "sqlite::memory:");
    }

    #[test]
    fn test_named_isolation() {
        let container = Container::new();
        container
            .register_named("primary", |_| Ok(Config { url: "db-1".into() }))
            .unwrap();
        container
            .register_named_deferred("replica", |_| Ok(Config { url: "db-2".into() }))
            .unwrap();
        container.bootstrap().unwrap();

        let primary = container.resolve_named::<Config>("primary").unwrap();
        let replica = container.resolve_named::<Config>("replica").unwrap();
        assert_eq!(primary.url, "db-1");
        assert_eq!(replica.url, "db-2");
        assert!(!Arc::ptr_eq(&primary, &replica));
        assert!(Arc::ptr_eq(
            &primary,
            &container.resolve_named::<Config>("primary").unwrap()
        ));

        // Named registrations never satisfy the type-derived identity
        assert!(!container.contains::<Config>());
        assert!(container.contains_named("primary"));
    }

    #[test]
    fn test_named_type_mismatch() {
        let container = Container::new();
        container.instance_named("port", 8080u16).unwrap();
        container
            .register_named_deferred("greeting", |_| Ok(String::from("hello")))
            .unwrap();

        assert!(matches!(
            container.resolve_named::<String>("port").unwrap_err(),
            DiError::TypeMismatch { .. }
        ));
        assert!(matches!(
            container.fresh_named::<u32>("greeting").unwrap_err(),
            DiError::TypeMismatch { .. }
        ));
        // The mismatch did not materialize the deferred value
        assert!(!container.is_materialized_named("greeting"));
        assert_eq!(*container.resolve_named::<u16>("port").unwrap(), 8080);
    }

    #[test]
    fn test_failed_construction_leaves_no_entry() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let healthy = Arc::new(AtomicBool::new(false));
        let (counter, gate) = (Arc::clone(&attempts), Arc::clone(&healthy));

        let container = Container::new();
        container
            .register_deferred(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                if gate.load(Ordering::SeqCst) {
                    Ok(Demo { value: "up".into() })
                } else {
                    Err("connection refused".into())
                }
            })
            .unwrap();

        let err = container.resolve::<Demo>().unwrap_err();
        match &err {
            DiError::ConstructionFailed { identity, source } => {
                assert_eq!(identity, &ServiceIdentity::of::<Demo>().unwrap());
                assert_eq!(source.to_string(), "connection refused");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!container.is_materialized::<Demo>());

        healthy.store(true, Ordering::SeqCst);
        assert_eq!(container.resolve::<Demo>().unwrap().value, "up");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_first_resolution_builds_once() {
        const THREADS: usize = 8;

        let builds = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&builds);

        let container = Container::new();
        container
            .register_deferred(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                thread::sleep(Duration::from_millis(20));
                Ok(Demo { value: "slow".into() })
            })
            .unwrap();

        let barrier = Barrier::new(THREADS);
        let resolved: Vec<Arc<Demo>> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        container.resolve::<Demo>().unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(resolved.iter().all(|demo| Arc::ptr_eq(demo, &resolved[0])));
    }

    #[test]
    fn test_clones_share_services() {
        let container = Container::new();
        let handle = container.clone();
        handle.instance(Demo { value: "shared".into() }).unwrap();

        let a = container.resolve::<Demo>().unwrap();
        let b = handle.resolve::<Demo>().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_identities_in_registration_order() {
        let container = Container::new();
        container.instance_named("b", 1u8).unwrap();
        container.instance(Demo { value: "x".into() }).unwrap();
        container.instance_named("a", 2u8).unwrap();

        let identities = container.identities();
        assert_eq!(identities.len(), 3);
        assert_eq!(identities[0], ServiceIdentity::named("b"));
        assert_eq!(identities[1], ServiceIdentity::of::<Demo>().unwrap());
        assert_eq!(identities[2], ServiceIdentity::named("a"));
    }

    #[test]
    fn test_sink_receives_events() {
        let sink = Arc::new(RecordingSink::default());
        let container = Container::builder().sink(sink.clone()).build();

        container
            .register_named("eager", |_| Ok(Demo { value: "e".into() }))
            .unwrap();
        container
            .register_named_deferred("lazy", |_| Ok(Demo { value: "l".into() }))
            .unwrap();
        container.bootstrap().unwrap();
        container.resolve_named::<Demo>("lazy").unwrap();

        let events: Vec<(&str, String, String)> = sink.messages();
        let expected = [
            ("debug", "registering service", "eager"),
            ("debug", "registering deferred service", "lazy"),
            ("info", "bootstrapping service", "eager"),
            ("debug", "resolving service", "lazy"),
        ];
        assert_eq!(events.len(), expected.len());
        for (event, (level, message, identifier)) in events.iter().zip(expected) {
            assert_eq!(event.0, level);
            assert_eq!(event.1, message);
            assert_eq!(event.2, identifier);
        }
    }
}
