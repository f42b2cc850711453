//! The clone-then-edit walkthrough printed by the binary.

use std::io::Write;

use prototype_core::{Person, Prototype};

use crate::config::DemoConfig;
use crate::error::DemoResult;

/// Final state of both people after the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub original: Person,
    pub clone: Person,
}

/// Build the prototype, clone it, edit the clone and print each step to `out`.
///
/// Output (with default configuration):
///
/// ```text
/// Original Person: Name: John Doe, Age: 30
/// Cloned Person: Name: John Doe, Age: 30
/// Modified Cloned Person: Name: Jane Doe, Age: 25
/// Original Person after cloning: Name: John Doe, Age: 30
/// ```
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> DemoResult<Report> {
    let original = Person::new(config.name.as_str(), config.age);
    writeln!(out, "Original Person: {original}")?;

    let mut clone = original.clone_prototype();
    tracing::debug!(person = %clone, "cloned prototype");
    writeln!(out, "Cloned Person: {clone}")?;

    clone.set_name(config.clone_name.as_str());
    clone.set_age(config.clone_age);
    tracing::debug!(person = %clone, "modified clone");
    writeln!(out, "Modified Cloned Person: {clone}")?;

    writeln!(out, "Original Person after cloning: {original}")?;
    out.flush()?;

    tracing::info!(original = %original, clone = %clone, "prototype walkthrough finished");
    Ok(Report { original, clone })
}
