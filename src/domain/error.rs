//! Error types for the sidepanes crate.
//!
//! This module defines the centralized error type [`SidepanesError`] and a type alias
//! [`Result`] used throughout the crate. Only [`SidepanesError::OutsideProvider`] and
//! [`SidepanesError::Reentrant`] ever reach a caller of the public coordinator API;
//! persistence failures are absorbed by the persistence bridge and logged.

use thiserror::Error;

/// Stable message carried by [`SidepanesError::OutsideProvider`].
///
/// Hosts and tests may match on this string.
pub const OUTSIDE_PROVIDER_MESSAGE: &str = "Sidepanes must be used within a SidepanesProvider";

/// The main error type for side pane operations.
///
/// # Examples
///
/// ```
/// use sidepanes::{Sidepanes, SidepanesError};
///
/// let handle = Sidepanes::default();
/// let err = handle.left_pane().unwrap_err();
/// assert!(matches!(err, SidepanesError::OutsideProvider));
/// assert_eq!(
///     err.to_string(),
///     "Configuration error: Sidepanes must be used within a SidepanesProvider"
/// );
/// ```
#[derive(Debug, Error)]
pub enum SidepanesError {
    /// A handle was used without a live provider behind it.
    ///
    /// This is a programmer error: the handle was never bound, or the provider
    /// that created it has already been torn down.
    #[error("Configuration error: {}", OUTSIDE_PROVIDER_MESSAGE)]
    OutsideProvider,

    /// A handle was used from inside a layout observer callback.
    ///
    /// Observers receive a snapshot and must not mutate the store while it is
    /// publishing.
    #[error("Configuration error: Sidepanes accessed re-entrantly from a layout observer")]
    Reentrant,

    /// The settings document is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading or writing persisted pane state failed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for side pane operations.
pub type Result<T> = std::result::Result<T, SidepanesError>;
