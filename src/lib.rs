//! erp-probe is a configuration-driven connectivity probe for an ERP HTTP API:
//! it loads a base URL and API key from `appsettings.json`, builds an HTTP client
//! with those credentials, and issues a single diagnostic GET request.
//!
//! See [modules](#modules) for more details.

pub mod config;
pub mod probe;

mod constants;
mod utils;

pub use serde;
pub use serde_json;
pub use thiserror;
pub use tokio;
