//! This module provides the connectivity probe: a single diagnostic GET request
//! used to verify reachability and authentication of the ERP service.

mod errors;
pub use errors::*;

mod outcome;
pub use outcome::*;

mod service;
pub use service::*;
