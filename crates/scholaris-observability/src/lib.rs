//! Scholaris observability.
//!
//! - [`logging::init_tracing`] installs the global subscriber: env filter,
//!   console output (compact or JSON) and an optional daily-rolling JSON file.
//! - [`logging::logging_middleware`] logs every request with an id, the
//!   matched route, status and latency.
//!
//! # Examples
//!
//! ```no_run
//! use scholaris_config::LogConfig;
//! use scholaris_observability::init_tracing;
//!
//! let _guard = init_tracing(&LogConfig::from_env());
//! tracing::info!("ready");
//! ```

pub mod logging;

pub use logging::{init_tracing, logging_middleware};
