//! schemadoc
//!
//! Scans a package of schematic generators and keeps two derived documents in
//! sync with their schemas: the generators section of `README.md` and the
//! `collection.json` manifest.
#![deny(unsafe_code)]

pub mod application;
pub mod collection;
pub mod core;
pub mod generation;
pub mod infrastructure;
