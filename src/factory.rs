//! Factory records and per-identity service slots
//!
//! A [`ServiceSlot`] pairs an identity with its (optional) factory record and
//! the cell its materialized instance lives in. Slots are shared as
//! `Arc<ServiceSlot>` so the registry map guard can be dropped before any
//! factory runs.
//!
//! ## Single materialization
//!
//! The instance cell is a `once_cell::sync::OnceCell`. `get_or_try_init`
//! lets exactly one thread run the factory for a given identity while the
//! others block on that cell only. A failed construction leaves the cell
//! empty, so no partial entry is ever visible.

use crate::{Activation, BoxError, Container, DiError, Injectable, Result, ServiceIdentity};
use once_cell::sync::OnceCell;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// Type-erased service instance
pub(crate) type AnyService = Arc<dyn Any + Send + Sync>;

/// Type-erased construction function
type ConstructFn =
    Arc<dyn Fn(&Container) -> std::result::Result<AnyService, BoxError> + Send + Sync>;

/// How to build the service registered under an identity. Immutable once created.
#[derive(Clone)]
pub(crate) struct FactoryRecord {
    activation: Activation,
    construct: ConstructFn,
}

impl FactoryRecord {
    pub(crate) fn new<T: Injectable, F>(activation: Activation, factory: F) -> Self
    where
        F: Fn(&Container) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        Self {
            activation,
            construct: Arc::new(move |container: &Container| {
                factory(container).map(|service| Arc::new(service) as AnyService)
            }),
        }
    }

    #[inline]
    pub(crate) fn activation(&self) -> Activation {
        self.activation
    }

    #[inline]
    fn invoke(&self, container: &Container) -> std::result::Result<AnyService, BoxError> {
        (self.construct)(container)
    }
}

/// Registry entry for one identity.
pub(crate) struct ServiceSlot {
    identity: ServiceIdentity,
    /// Registered value type
    value_type: TypeId,
    type_name: &'static str,
    /// `None` for values registered already materialized
    record: Option<FactoryRecord>,
    instance: OnceCell<AnyService>,
}

impl ServiceSlot {
    /// Slot backed by a factory, empty until materialized
    pub(crate) fn with_factory<T: Injectable>(
        identity: ServiceIdentity,
        record: FactoryRecord,
    ) -> Self {
        Self {
            identity,
            value_type: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            record: Some(record),
            instance: OnceCell::new(),
        }
    }

    /// Slot holding a ready value and no factory
    pub(crate) fn materialized<T: Injectable>(identity: ServiceIdentity, value: T) -> Self {
        Self {
            identity,
            value_type: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            record: None,
            instance: OnceCell::with_value(Arc::new(value) as AnyService),
        }
    }

    #[inline]
    pub(crate) fn identity(&self) -> &ServiceIdentity {
        &self.identity
    }

    #[inline]
    pub(crate) fn activation(&self) -> Option<Activation> {
        self.record.as_ref().map(FactoryRecord::activation)
    }

    /// Eager factory whose instance has not been built yet
    #[inline]
    pub(crate) fn awaits_bootstrap(&self) -> bool {
        self.activation().is_some_and(Activation::is_eager) && !self.is_materialized()
    }

    #[inline]
    pub(crate) fn is_materialized(&self) -> bool {
        self.instance.get().is_some()
    }

    #[inline]
    pub(crate) fn cached(&self) -> Option<AnyService> {
        self.instance.get().map(Arc::clone)
    }

    /// Return the cached instance, constructing and storing it on first access.
    ///
    /// Calling this for the same slot from inside its own factory is a
    /// dependency cycle and deadlocks.
    pub(crate) fn materialize(&self, container: &Container) -> Result<AnyService> {
        self.instance
            .get_or_try_init(|| self.construct(container))
            .map(Arc::clone)
    }

    /// Run the factory without touching the cache.
    pub(crate) fn construct(&self, container: &Container) -> Result<AnyService> {
        let record = self
            .record
            .as_ref()
            .ok_or_else(|| DiError::not_found(&self.identity))?;

        record
            .invoke(container)
            .map_err(|source| DiError::construction_failed(&self.identity, source))
    }

    /// Reject callers expecting a different type before anything is built.
    #[inline]
    pub(crate) fn ensure_type<T: Injectable>(&self) -> Result<()> {
        if self.value_type == TypeId::of::<T>() {
            Ok(())
        } else {
            Err(DiError::type_mismatch::<T>(&self.identity, self.type_name))
        }
    }

    /// Checked downcast to the caller's expected type.
    pub(crate) fn downcast<T: Injectable>(&self, service: AnyService) -> Result<Arc<T>> {
        service
            .downcast::<T>()
            .map_err(|_| DiError::type_mismatch::<T>(&self.identity, self.type_name))
    }
}

impl std::fmt::Debug for ServiceSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceSlot")
            .field("identity", &self.identity)
            .field("type_name", &self.type_name)
            .field("activation", &self.activation())
            .field("materialized", &self.is_materialized())
            .finish()
    }
}
