//! This crate contains the admission data model and the services that fetch it.

pub mod config;
pub mod error;
pub mod types;

mod http;
mod service;

#[cfg(test)]
mod types_tests;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use http::HttpDataService;
pub use service::DataService;
