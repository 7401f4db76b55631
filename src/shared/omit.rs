//! Three-state optional parameters and the outgoing parameter map.
//!
//! `Omissible::Omitted` means "the caller did not supply this argument". It is
//! distinct from every provided value, including `false`, `0`, `""` and JSON
//! `null`, and is filtered out before the request body is serialized.

use serde::Serialize;
use serde_json::{Map, Value};

/// An optional argument that is either explicitly provided or omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Omissible<T> {
    Omitted,
    Provided(T),
}

impl<T> Default for Omissible<T> {
    fn default() -> Self {
        Self::Omitted
    }
}

impl<T> Omissible<T> {
    pub fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted)
    }

    pub fn is_provided(&self) -> bool {
        matches!(self, Self::Provided(_))
    }

    pub fn as_ref(&self) -> Omissible<&T> {
        match self {
            Self::Omitted => Omissible::Omitted,
            Self::Provided(v) => Omissible::Provided(v),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Omissible<U> {
        match self {
            Self::Omitted => Omissible::Omitted,
            Self::Provided(v) => Omissible::Provided(f(v)),
        }
    }

    /// Convert to `Option`, mapping `Omitted` to `None`.
    pub fn provided(self) -> Option<T> {
        match self {
            Self::Omitted => None,
            Self::Provided(v) => Some(v),
        }
    }

    /// Keep `self` if provided, otherwise fall back to `other`.
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Provided(_) => self,
            Self::Omitted => other,
        }
    }
}

impl<T> From<T> for Omissible<T> {
    fn from(value: T) -> Self {
        Self::Provided(value)
    }
}

// ─── Params ──────────────────────────────────────────────────────────────────

/// Parameter name to [`Omissible`] JSON value, in insertion order.
///
/// The JSON body built by [`to_body`](Self::to_body) is a `serde_json::Map`,
/// so its key order is serde_json's, not the insertion order.
///
/// A value that fails to serialize is not sent as anything. The first such
/// failure is kept and returned by `to_body`, so the call fails before any
/// request is made.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Omissible<Value>)>,
    error: Option<String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter that is always sent.
    pub fn with(self, name: impl Into<String>, value: impl Serialize) -> Self {
        let name = name.into();
        match serde_json::to_value(value) {
            Ok(value) => self.with_omissible(name, Omissible::Provided(value)),
            Err(e) => self.record_error(name, e),
        }
    }

    /// Add a parameter that is sent only when provided.
    pub fn with_opt<T: Serialize>(self, name: impl Into<String>, value: Omissible<T>) -> Self {
        match value {
            Omissible::Provided(v) => self.with(name, v),
            Omissible::Omitted => self.with_omissible(name, Omissible::Omitted),
        }
    }

    /// Add a raw entry. A later entry with the same name replaces an earlier one.
    pub fn with_omissible(mut self, name: impl Into<String>, value: Omissible<Value>) -> Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    fn record_error(mut self, name: String, err: serde_json::Error) -> Self {
        tracing::warn!(parameter = %name, error = %err, "Parameter failed to serialize");
        if self.error.is_none() {
            self.error = Some(format!("parameter `{}`: {}", name, err));
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Omissible<Value>> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// All parameter names, omitted ones included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// # Errors
    ///
    /// The first value that failed to serialize, if any.
    pub fn check(&self) -> Result<(), serde_json::Error> {
        match &self.error {
            Some(msg) => Err(<serde_json::Error as serde::ser::Error>::custom(msg)),
            None => Ok(()),
        }
    }

    /// The outgoing JSON body: every provided entry, no omitted ones.
    ///
    /// # Errors
    ///
    /// The first serialization failure recorded by [`with`](Self::with) or
    /// [`with_opt`](Self::with_opt).
    pub fn to_body(&self) -> Result<Map<String, Value>, serde_json::Error> {
        self.check()?;
        Ok(self
            .entries
            .iter()
            .filter_map(|(name, value)| match value {
                Omissible::Provided(v) => Some((name.clone(), v.clone())),
                Omissible::Omitted => None,
            })
            .collect())
    }
}
