//! Custom object configuration.
//!
//! Responsibilities:
//! - Describe which custom object type is listed and created.
//! - Pair each of the three property keys with its display label.
//!
//! Invariants:
//! - A `PropertyField` label is never empty: it falls back to the key.

/// One configured property: internal key plus display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyField {
    /// Internal property name used on the API.
    pub key: String,
    /// Human-facing column/field label.
    pub label: String,
}

impl PropertyField {
    /// Create a field, using the key as label when no override is given.
    pub fn new(key: impl Into<String>, label: Option<String>) -> Self {
        let key = key.into();
        let label = label
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| key.clone());
        Self { key, label }
    }
}

/// The custom object type and its three displayed properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectConfig {
    /// Object type identifier (e.g. `2-1234567` or `p_projects`).
    pub object_type: String,
    /// Exactly three properties, in display order.
    pub properties: [PropertyField; 3],
}

impl ObjectConfig {
    /// Property keys in display order.
    pub fn keys(&self) -> [&str; 3] {
        let [a, b, c] = &self.properties;
        [a.key.as_str(), b.key.as_str(), c.key.as_str()]
    }

    /// Display labels in display order.
    pub fn labels(&self) -> [&str; 3] {
        let [a, b, c] = &self.properties;
        [a.label.as_str(), b.label.as_str(), c.label.as_str()]
    }
}
