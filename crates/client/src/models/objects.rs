//! CRM object models for the v3 objects API.
//!
//! Responsibilities:
//! - Deserialize records returned by `GET /crm/v3/objects/{objectType}`.
//! - Serialize the body sent to `POST /crm/v3/objects/{objectType}`.
//!
//! Non-responsibilities:
//! - Does not handle HTTP requests (see endpoints module).
//! - Does not map records to display rows (see repository module).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::serde_helpers::{property_map, string_from_number_or_string};

/// A single CRM record.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrmObject {
    /// Record id assigned by the CRM.
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub id: String,
    /// Requested property values; null values are kept as `None`.
    #[serde(default, deserialize_with = "property_map")]
    pub properties: HashMap<String, Option<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

impl CrmObject {
    /// Value of a property, or an empty string when absent or null.
    pub fn property(&self, key: &str) -> &str {
        self.properties
            .get(key)
            .and_then(|v| v.as_deref())
            .unwrap_or("")
    }
}

/// Cursor for the next page of a list response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PagingNext {
    pub after: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Paging block of a list response. Parsed but never followed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Paging {
    #[serde(default)]
    pub next: Option<PagingNext>,
}

/// Response from listing records of an object type.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectListResponse {
    #[serde(default)]
    pub results: Vec<CrmObject>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Body for creating a record.
///
/// Keys are kept ordered so the serialized payload is deterministic.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct CreateObjectRequest {
    pub properties: BTreeMap<String, String>,
}

impl CreateObjectRequest {
    /// Build a request from `(key, value)` pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            properties: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
