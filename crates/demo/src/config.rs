//! Environment-driven configuration for the demo.

use crate::error::{DemoError, DemoResult};

pub const NAME_ENV: &str = "PROTOTYPE_NAME";
pub const AGE_ENV: &str = "PROTOTYPE_AGE";
pub const CLONE_NAME_ENV: &str = "PROTOTYPE_CLONE_NAME";
pub const CLONE_AGE_ENV: &str = "PROTOTYPE_CLONE_AGE";

/// Field values for the prototype and for the edits applied to its clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub name: String,
    pub age: i32,
    pub clone_name: String,
    pub clone_age: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            age: 30,
            clone_name: "Jane Doe".to_string(),
            clone_age: 25,
        }
    }
}

impl DemoConfig {
    /// Load from process environment variables; unset variables keep defaults.
    pub fn from_env() -> DemoResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (used by tests).
    pub fn from_lookup<F>(lookup: F) -> DemoResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(NAME_ENV) {
            config.name = name;
        }
        if let Some(raw) = lookup(AGE_ENV) {
            config.age = parse_age(AGE_ENV, raw)?;
        }
        if let Some(name) = lookup(CLONE_NAME_ENV) {
            config.clone_name = name;
        }
        if let Some(raw) = lookup(CLONE_AGE_ENV) {
            config.clone_age = parse_age(CLONE_AGE_ENV, raw)?;
        }

        Ok(config)
    }
}

fn parse_age(var: &'static str, raw: String) -> DemoResult<i32> {
    let parsed = raw.trim().parse::<i32>();
    match parsed {
        Ok(age) => Ok(age),
        Err(source) => Err(DemoError::InvalidAge {
            var,
            value: raw,
            source,
        }),
    }
}
