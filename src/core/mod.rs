//! schemadoc core
//!
//! Configuration and error types shared by every layer.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
