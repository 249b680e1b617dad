//! Panicking wrappers
//!
//! Each `must_*` method calls its fallible counterpart and panics with the
//! error's message on failure. Intended for start-up wiring where a broken
//! registration should abort the process.

use crate::{BoxError, Container, Injectable};
use std::sync::Arc;

impl Container {
    #[track_caller]
    pub fn must_register<T: Injectable, F>(&self, factory: F)
    where
        F: Fn(&Container) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        if let Err(err) = self.register(factory) {
            panic!("failed to register service: {err}");
        }
    }

    #[track_caller]
    pub fn must_register_deferred<T: Injectable, F>(&self, factory: F)
    where
        F: Fn(&Container) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        if let Err(err) = self.register_deferred(factory) {
            panic!("failed to register deferred service: {err}");
        }
    }

    #[track_caller]
    pub fn must_register_named<T: Injectable, F>(&self, name: impl Into<Arc<str>>, factory: F)
    where
        F: Fn(&Container) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        if let Err(err) = self.register_named(name, factory) {
            panic!("failed to register named service: {err}");
        }
    }

    #[track_caller]
    pub fn must_register_named_deferred<T: Injectable, F>(
        &self,
        name: impl Into<Arc<str>>,
        factory: F,
    ) where
        F: Fn(&Container) -> std::result::Result<T, BoxError> + Send + Sync + 'static,
    {
        if let Err(err) = self.register_named_deferred(name, factory) {
            panic!("failed to register named deferred service: {err}");
        }
    }

    #[track_caller]
    pub fn must_instance<T: Injectable>(&self, value: T) {
        if let Err(err) = self.instance(value) {
            panic!("failed to register instance: {err}");
        }
    }

    #[track_caller]
    pub fn must_resolve<T: Injectable>(&self) -> Arc<T> {
        self.resolve::<T>()
            .unwrap_or_else(|err| panic!("failed to resolve service: {err}"))
    }

    #[track_caller]
    pub fn must_resolve_named<T: Injectable>(&self, name: &str) -> Arc<T> {
        self.resolve_named::<T>(name)
            .unwrap_or_else(|err| panic!("failed to resolve named service: {err}"))
    }

    #[track_caller]
    pub fn must_fresh<T: Injectable>(&self) -> Arc<T> {
        self.fresh::<T>()
            .unwrap_or_else(|err| panic!("failed to make fresh service: {err}"))
    }

    #[track_caller]
    pub fn must_fresh_named<T: Injectable>(&self, name: &str) -> Arc<T> {
        self.fresh_named::<T>(name)
            .unwrap_or_else(|err| panic!("failed to make fresh named service: {err}"))
    }

    #[track_caller]
    pub fn must_bootstrap(&self) {
        if let Err(err) = self.bootstrap() {
            panic!("failed to bootstrap container: {err}");
        }
    }

    #[track_caller]
    pub fn must_shutdown(&self) {
        if let Err(err) = self.shutdown() {
            panic!("failed to shut down container: {err}");
        }
    }
}
