//! Error types for the service container

use crate::ServiceIdentity;
use thiserror::Error;

/// Error produced by caller-supplied factories and lifecycle callbacks.
///
/// Any `std::error::Error + Send + Sync` converts into it with `?`,
/// including a [`DiError`] returned by a nested `resolve` inside a factory.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during registration, resolution and bootstrap
#[derive(Error, Debug)]
pub enum DiError {
    /// No stable identity can be derived for the type (anonymous types)
    #[error("Unknown type: cannot derive a service identity for {type_name}")]
    UnknownType { type_name: &'static str },

    /// Attempted to register an identity twice
    #[error("Service already registered: {identity}")]
    AlreadyRegistered { identity: ServiceIdentity },

    /// Identity has neither a factory nor a stored instance
    #[error("Service not found: {identity}")]
    NotFound { identity: ServiceIdentity },

    /// Stored value is not of the type the caller asked for
    #[error("Wrong type resolved for {identity}: expected {expected}, registered as {found}")]
    TypeMismatch {
        identity: ServiceIdentity,
        expected: &'static str,
        found: &'static str,
    },

    /// Factory returned an error
    #[error("Could not make service {identity}: {source}")]
    ConstructionFailed {
        identity: ServiceIdentity,
        #[source]
        source: BoxError,
    },

    /// A one-time setup callback failed during bootstrap
    #[error("Setup callback failed: {source}")]
    SetupFailed {
        #[source]
        source: BoxError,
    },
}

impl DiError {
    /// Create a NotFound error for an identity
    #[inline]
    pub fn not_found(identity: &ServiceIdentity) -> Self {
        Self::NotFound {
            identity: identity.clone(),
        }
    }

    /// Create an AlreadyRegistered error for an identity
    #[inline]
    pub fn already_registered(identity: &ServiceIdentity) -> Self {
        Self::AlreadyRegistered {
            identity: identity.clone(),
        }
    }

    /// Create an UnknownType error for `T`
    #[inline]
    pub fn unknown_type<T: ?Sized + 'static>() -> Self {
        Self::UnknownType {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create a TypeMismatch error where `T` was expected
    #[inline]
    pub fn type_mismatch<T: ?Sized + 'static>(
        identity: &ServiceIdentity,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            identity: identity.clone(),
            expected: std::any::type_name::<T>(),
            found,
        }
    }

    /// Create a ConstructionFailed error wrapping the factory's error
    #[inline]
    pub fn construction_failed(identity: &ServiceIdentity, source: BoxError) -> Self {
        Self::ConstructionFailed {
            identity: identity.clone(),
            source,
        }
    }

    /// Identity the error refers to, if any
    pub fn identity(&self) -> Option<&ServiceIdentity> {
        match self {
            Self::AlreadyRegistered { identity }
            | Self::NotFound { identity }
            | Self::TypeMismatch { identity, .. }
            | Self::ConstructionFailed { identity, .. } => Some(identity),
            Self::UnknownType { .. } | Self::SetupFailed { .. } => None,
        }
    }
}

/// Result type alias for container operations
pub type Result<T> = std::result::Result<T, DiError>;
