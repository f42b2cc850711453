//! `prototype-demo`: console driver for the prototype workspace.
//!
//! Builds a person from configuration, clones it, edits the clone and prints
//! both to show that the copy is independent of its source.

pub mod config;
pub mod error;
pub mod scenario;

pub use config::DemoConfig;
pub use error::{DemoError, DemoResult};
pub use scenario::{Report, run};
