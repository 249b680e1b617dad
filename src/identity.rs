//! Service identities
//!
//! Every registration is keyed by a [`ServiceIdentity`]: either derived from
//! the service's static type or an explicit, caller-chosen name.

use crate::{DiError, Result};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Key under which a factory or instance is registered.
///
/// Type-derived identities compare by [`TypeId`], so `T`, `&'static T`,
/// `Box<T>` and `Arc<T>` are all distinct keys. The type path is carried
/// only for display. Named identities compare by string and never equal a
/// type-derived identity, even when the name happens to be a type path.
#[derive(Clone)]
pub enum ServiceIdentity {
    /// Derived from a static type
    Type { id: TypeId, name: &'static str },
    /// Explicit caller-supplied name
    Named(Arc<str>),
}

impl ServiceIdentity {
    /// Derive the identity of `T`.
    ///
    /// Fails with [`DiError::UnknownType`] for anonymous types (closures,
    /// async blocks) whose compiler-generated names are not stable keys.
    ///
    /// ```rust
    /// use service_container::ServiceIdentity;
    ///
    /// struct Database;
    ///
    /// let id = ServiceIdentity::of::<Database>().unwrap();
    /// assert_eq!(id, ServiceIdentity::of::<Database>().unwrap());
    /// assert_ne!(id, ServiceIdentity::of::<Box<Database>>().unwrap());
    /// ```
    pub fn of<T: ?Sized + 'static>() -> Result<Self> {
        let name = std::any::type_name::<T>();
        if is_anonymous(name) {
            return Err(DiError::unknown_type::<T>());
        }
        Ok(Self::Type {
            id: TypeId::of::<T>(),
            name,
        })
    }

    /// Identity for an explicit name.
    #[inline]
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::Named(name.into())
    }

    /// Human-readable key: the type path or the explicit name.
    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Type { name, .. } => name,
            Self::Named(name) => name,
        }
    }

    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

/// Compiler-generated names (`{{closure}}`, `{async_block#0}`) contain braces;
/// real type paths never do.
fn is_anonymous(type_name: &str) -> bool {
    type_name.is_empty() || type_name.contains('{')
}

impl PartialEq for ServiceIdentity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Type { id: a, .. }, Self::Type { id: b, .. }) => a == b,
            (Self::Named(a), Self::Named(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ServiceIdentity {}

impl Hash for ServiceIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Type { id, .. } => {
                0u8.hash(state);
                id.hash(state);
            }
            Self::Named(name) => {
                1u8.hash(state);
                name.hash(state);
            }
        }
    }
}

impl fmt::Display for ServiceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ServiceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type { name, .. } => f.debug_tuple("Type").field(name).finish(),
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
        }
    }
}

impl From<&str> for ServiceIdentity {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for ServiceIdentity {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}
