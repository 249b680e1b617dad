//! Container configuration
//!
//! A [`Container`] needs no configuration to be useful; the builder exists
//! for the few knobs an application sets once at start-up.

use crate::{Container, DiagnosticSink};
use std::fmt;
use std::sync::Arc;

/// Application version attached to a container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(Arc<str>);

impl Version {
    #[inline]
    pub fn new(version: impl Into<Arc<str>>) -> Self {
        Self(version.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(version: &str) -> Self {
        Self::new(version)
    }
}

impl From<String> for Version {
    fn from(version: String) -> Self {
        Self::new(version)
    }
}

/// Builder for [`Container`].
///
/// # Examples
///
/// ```rust
/// use service_container::Container;
///
/// let container = Container::builder()
///     .capacity(32)
///     .version("1.4.0")
///     .build();
///
/// assert_eq!(container.version().unwrap().as_str(), "1.4.0");
/// ```
#[derive(Default)]
pub struct ContainerBuilder {
    capacity: usize,
    sink: Option<Arc<dyn DiagnosticSink>>,
    version: Option<Version>,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expected number of registrations
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Receive register/resolve/bootstrap events
    pub fn sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn version(mut self, version: impl Into<Version>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn build(self) -> Container {
        Container::from_builder(self.capacity, self.sink, self.version)
    }
}

impl fmt::Debug for ContainerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerBuilder")
            .field("capacity", &self.capacity)
            .field("has_sink", &self.sink.is_some())
            .field("version", &self.version)
            .finish()
    }
}
