//! Environment sources the resolver reads the override setting from.
//!
//! Resolution takes any [`EnvSource`], so tests and callers can inject a
//! mapping instead of touching the real process environment.

mod dotenv;

use std::collections::HashMap;

pub use dotenv::{DotEnv, EnvFileError};

/// A read-only string-keyed environment.
pub trait EnvSource {
    /// Value for `key`, or `None` when the key is not set.
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Values compiled into the binary.
///
/// Only the override setting is captured at build time; every other key
/// reads as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildEnv;

impl EnvSource for BuildEnv {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            crate::config::API_URL_ENV => option_env!("VITE_API_URL").map(str::to_string),
            _ => None,
        }
    }
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(v) => Some(v),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(raw)) => {
                tracing::warn!(key, value = ?raw, "ignoring non-unicode environment value");
                None
            }
        }
    }
}

/// In-memory environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Two sources stacked: `upper` shadows `lower` for every key it sets.
#[derive(Debug, Clone, Default)]
pub struct Layered<A, B> {
    pub upper: A,
    pub lower: B,
}

impl<A, B> Layered<A, B> {
    pub fn new(upper: A, lower: B) -> Self {
        Self { upper, lower }
    }
}

impl<A: EnvSource, B: EnvSource> EnvSource for Layered<A, B> {
    fn get(&self, key: &str) -> Option<String> {
        self.upper.get(key).or_else(|| self.lower.get(key))
    }
}

impl<T: EnvSource> EnvSource for Option<T> {
    fn get(&self, key: &str) -> Option<String> {
        self.as_ref().and_then(|env| env.get(key))
    }
}
