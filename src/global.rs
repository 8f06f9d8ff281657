//! Process-wide registry
//!
//! For programs that prefer one shared registry over passing handles around.
//! [`setup`] installs a registry; calling it again replaces the registry, and
//! handles obtained earlier stay bound to the loggers they were issued for.
//! Fetching a handle before [`setup`] is a usage error and panics.

use crate::core::{LogHandle, LoggerError, LoggerOptions, Registry, Result};
use parking_lot::RwLock;

static REGISTRY: RwLock<Option<Registry>> = parking_lot::const_rwlock(None);

/// Install a registry over standard output and standard error.
pub fn setup(options: Option<LoggerOptions>) -> Registry {
    let registry = Registry::setup(options);
    install(registry.clone());
    registry
}

/// Install an already built registry, replacing any previous one.
pub fn install(registry: Registry) {
    *REGISTRY.write() = Some(registry);
}

pub fn is_initialized() -> bool {
    REGISTRY.read().is_some()
}

pub fn try_registry() -> Result<Registry> {
    REGISTRY.read().clone().ok_or(LoggerError::NotInitialized)
}

/// The installed registry.
///
/// # Panics
///
/// Panics if [`setup`] has not been called.
#[track_caller]
pub fn registry() -> Registry {
    match try_registry() {
        Ok(registry) => registry,
        Err(e) => panic!("{}", e),
    }
}

pub fn try_stdout() -> Result<LogHandle> {
    try_registry().map(|registry| registry.stdout())
}

pub fn try_stderr() -> Result<LogHandle> {
    try_registry().map(|registry| registry.stderr())
}

/// Handle for the standard output logger. Panics before [`setup`].
#[track_caller]
pub fn stdout() -> LogHandle {
    registry().stdout()
}

/// Handle for the standard error logger. Panics before [`setup`].
#[track_caller]
pub fn stderr() -> LogHandle {
    registry().stderr()
}
