//! Sample HTTP service for exercising a Tekton CI/CD pipeline.
//!
//! Exposes three JSON endpoints whose content comes from constants and
//! environment variables:
//!
//! ```text
//! GET /health    {status, timestamp, version}
//! GET /          {message, environment, podName}
//! GET /api/info  {service, version, buildTime, commitHash}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Startup errors and body rejections
//! - [`api`]: Handlers, JSON body layer, and router
//! - [`server`]: Listener binding and graceful serving
//! - [`utils`]: Timestamp formatting and shutdown signal

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
