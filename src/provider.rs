//! Provider traits for the service container
//!
//! These define what types can be stored and when they are constructed.

use crate::{Result, ServiceIdentity};

/// Marker trait for types that can be stored in the container.
///
/// This is automatically implemented for all types that are `Send + Sync + 'static`.
/// You never need to implement this manually.
///
/// # Examples
///
/// ```rust
/// use service_container::Injectable;
///
/// struct Mailer {
///     host: String,
/// }
///
/// assert!(Mailer::identity().is_ok());
/// ```
pub trait Injectable: Send + Sync + 'static {
    /// Type-derived identity of this type
    #[inline]
    fn identity() -> Result<ServiceIdentity>
    where
        Self: Sized,
    {
        ServiceIdentity::of::<Self>()
    }

    /// Returns the type name for debugging
    #[inline]
    fn type_name_of() -> &'static str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}

// Blanket implementation - everything that's Send + Sync + 'static is Injectable
impl<T: Send + Sync + 'static> Injectable for T {}

/// When a registered factory runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Activation {
    /// Constructed by `bootstrap()` (or earlier, on first resolve)
    #[default]
    Eager,

    /// Constructed only on first `resolve`/`fresh`
    Deferred,
}

impl Activation {
    #[inline]
    pub fn is_eager(self) -> bool {
        matches!(self, Activation::Eager)
    }

    /// Label used in log fields
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Activation::Eager => "eager",
            Activation::Deferred => "deferred",
        }
    }
}

impl std::fmt::Display for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
