//! Pluggable diagnostic sink
//!
//! The container reports registration, resolution and bootstrap events to an
//! optional [`DiagnosticSink`]. This is independent of the `tracing` events
//! the crate emits under the `logging` feature: a sink lets an application
//! route container events into whatever logger it already owns.

use crate::ServiceIdentity;
use std::sync::Arc;

/// Structured key/value pair passed to a sink
pub type Field<'a> = (&'static str, &'a str);

/// Field key carrying the service identity
pub const IDENTIFIER_FIELD: &str = "identifier";

/// Receiver for container diagnostics.
///
/// # Examples
///
/// ```rust
/// use service_container::{Container, DiagnosticSink, Field};
/// use std::sync::Arc;
///
/// struct Stdout;
///
/// impl DiagnosticSink for Stdout {
///     fn info(&self, message: &str, fields: &[Field<'_>]) {
///         println!("INFO {message} {fields:?}");
///     }
///     fn debug(&self, message: &str, fields: &[Field<'_>]) {
///         println!("DEBUG {message} {fields:?}");
///     }
/// }
///
/// let container = Container::builder().sink(Arc::new(Stdout)).build();
/// ```
pub trait DiagnosticSink: Send + Sync {
    fn info(&self, message: &str, fields: &[Field<'_>]);
    fn debug(&self, message: &str, fields: &[Field<'_>]);
}

/// Forwards container events to the configured sink, if any
#[derive(Clone, Default)]
pub(crate) struct Observer {
    sink: Option<Arc<dyn DiagnosticSink>>,
}

impl Observer {
    pub(crate) fn new(sink: Option<Arc<dyn DiagnosticSink>>) -> Self {
        Self { sink }
    }

    #[inline]
    pub(crate) fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub(crate) fn register(&self, identity: &ServiceIdentity) {
        self.debug("registering service", identity);
    }

    pub(crate) fn register_deferred(&self, identity: &ServiceIdentity) {
        self.debug("registering deferred service", identity);
    }

    pub(crate) fn resolve(&self, identity: &ServiceIdentity) {
        self.debug("resolving service", identity);
    }

    pub(crate) fn bootstrap(&self, identity: &ServiceIdentity) {
        if let Some(sink) = &self.sink {
            sink.info("bootstrapping service", &[(IDENTIFIER_FIELD, identity.as_str())]);
        }
    }

    fn debug(&self, message: &str, identity: &ServiceIdentity) {
        if let Some(sink) = &self.sink {
            sink.debug(message, &[(IDENTIFIER_FIELD, identity.as_str())]);
        }
    }
}
