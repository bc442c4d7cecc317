//! Infrastructure layer for filesystem and environment interactions.
//!
//! Nothing in the core layers touches the environment; configuration loading
//! and tracing setup resolve their default locations here.

pub mod paths;

pub use paths::{default_persistence_file, expand_tilde, get_data_dir, resolve_data_dir};
