//! `prototype-core`: the cloning capability and the value types built on it.
//!
//! This crate contains **pure domain** code (no IO, no process setup).

pub mod person;
pub mod prototype;

pub use person::Person;
pub use prototype::Prototype;
