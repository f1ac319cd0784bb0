//! Infrastructure layer - filesystem adapters for the application ports

pub mod output;
pub mod scanner;

pub use output::*;
pub use scanner::*;
