//! Bootstrap and shutdown sequencing
//!
//! `bootstrap` builds every eager service that is not cached yet, then runs
//! the one-time setup callbacks. `shutdown` runs the teardown callbacks.
//! Both walk their lists in registration order and stop at the first error.

use crate::{BoxError, Container, DiError, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "logging")]
use tracing::{debug, info, warn};

/// Setup or shutdown hook
pub type Callback = Arc<dyn Fn(&Container) -> std::result::Result<(), BoxError> + Send + Sync>;

/// Lifecycle state owned by a container.
///
/// Setups and shutdowns sit behind separate locks; callback lists are
/// copied out before any callback runs so callbacks may use the container,
/// including registering further callbacks.
#[derive(Default)]
pub(crate) struct Lifecycle {
    setups: Mutex<Vec<Callback>>,
    shutdowns: Mutex<Vec<Callback>>,
    /// Serializes concurrent `bootstrap` calls so setups run once
    bootstrapping: Mutex<()>,
    bootstrapped: AtomicBool,
}

impl Container {
    /// Register a callback run once, at the end of the first successful bootstrap.
    pub fn register_setup<F>(&self, setup: F)
    where
        F: Fn(&Container) -> std::result::Result<(), BoxError> + Send + Sync + 'static,
    {
        self.shared.lifecycle.setups.lock().push(Arc::new(setup));
    }

    /// Register a callback run on every [`shutdown`](Self::shutdown).
    pub fn register_shutdown<F>(&self, shutdown: F)
    where
        F: Fn(&Container) -> std::result::Result<(), BoxError> + Send + Sync + 'static,
    {
        self.shared.lifecycle.shutdowns.lock().push(Arc::new(shutdown));
    }

    /// Build every eager service not yet cached, then run setups once.
    ///
    /// The first construction failure aborts with
    /// [`DiError::ConstructionFailed`]; services built before it stay cached,
    /// so bootstrap can be called again once the cause is fixed. Deferred
    /// services are left alone.
    ///
    /// Setups run in registration order after all eager services exist. The
    /// first failure is returned as [`DiError::SetupFailed`] and the setups
    /// are attempted again on the next bootstrap. Once every setup has
    /// succeeded the container is bootstrapped for good and setups never
    /// run again; later calls only build eager services registered since.
    ///
    /// Calling `bootstrap` from inside a factory or setup deadlocks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use service_container::Container;
    ///
    /// struct Pool;
    ///
    /// let container = Container::new();
    /// container.register(|_| Ok(Pool)).unwrap();
    /// container.register_setup(|c| {
    ///     c.resolve::<Pool>()?;
    ///     Ok(())
    /// });
    ///
    /// container.bootstrap().unwrap();
    /// assert!(container.is_bootstrapped());
    /// ```
    pub fn bootstrap(&self) -> Result<()> {
        let lifecycle = &self.shared.lifecycle;
        let _guard = lifecycle.bootstrapping.lock();

        for slot in self.shared.registry.snapshot() {
            if !slot.awaits_bootstrap() {
                continue;
            }

            #[cfg(feature = "logging")]
            info!(
                target: "service_container",
                service = %slot.identity(),
                "Bootstrapping service"
            );
            self.shared.observer.bootstrap(slot.identity());

            slot.materialize(self)?;
        }

        if lifecycle.bootstrapped.load(Ordering::Acquire) {
            return Ok(());
        }

        let setups = lifecycle.setups.lock().clone();

        #[cfg(feature = "logging")]
        debug!(
            target: "service_container",
            setup_count = setups.len(),
            "Running setup callbacks"
        );

        for setup in &setups {
            setup(self).map_err(|source| DiError::SetupFailed { source })?;
        }

        lifecycle.bootstrapped.store(true, Ordering::Release);

        #[cfg(feature = "logging")]
        debug!(
            target: "service_container",
            service_count = self.len(),
            "Container bootstrapped"
        );

        Ok(())
    }

    /// Whether a bootstrap has completed successfully. Never reverts.
    #[inline]
    pub fn is_bootstrapped(&self) -> bool {
        self.shared.lifecycle.bootstrapped.load(Ordering::Acquire)
    }

    /// Run every shutdown callback in registration order.
    ///
    /// Stops at the first failing callback and returns its error as-is;
    /// later callbacks are not attempted. Can be called any number of
    /// times and does not affect [`is_bootstrapped`](Self::is_bootstrapped).
    pub fn shutdown(&self) -> std::result::Result<(), BoxError> {
        let shutdowns = self.shared.lifecycle.shutdowns.lock().clone();

        #[cfg(feature = "logging")]
        debug!(
            target: "service_container",
            shutdown_count = shutdowns.len(),
            "Running shutdown callbacks"
        );

        for (index, shutdown) in shutdowns.iter().enumerate() {
            if let Err(err) = shutdown(self) {
                #[cfg(feature = "logging")]
                warn!(
                    target: "service_container",
                    index = index,
                    error = %err,
                    "Shutdown callback failed, skipping remaining callbacks"
                );
                #[cfg(not(feature = "logging"))]
                let _ = index;

                return Err(err);
            }
        }

        Ok(())
    }
}
