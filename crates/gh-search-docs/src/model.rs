//! Response types of the docs.github.com search API.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Meta,
    #[serde(deserialize_with = "null_as_default")]
    pub hits: Vec<SearchItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    #[serde(deserialize_with = "null_as_default")]
    pub found: Found,
    #[serde(deserialize_with = "null_as_default")]
    pub took: Took,
    #[serde(deserialize_with = "null_as_default")]
    pub page: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Found {
    #[serde(deserialize_with = "null_as_default")]
    pub value: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub relation: Relation,
}

/// How `found.value` relates to the real number of matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Exact count
    #[default]
    Eq,
    /// Lower bound
    Gte,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Took {
    #[serde(deserialize_with = "null_as_default")]
    pub query_msec: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_msec: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Path relative to the docs host, e.g. `/en/get-started`
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub breadcrumbs: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub intro: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub headings: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub toplevel: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub highlights: BTreeMap<String, HighlightValue>,
    #[serde(skip_serializing_if = "is_unscored")]
    pub score: Option<f64>,
}

impl SearchItem {
    /// Fragments of the given highlight field, empty when absent.
    pub fn highlight_fragments(&self, field: &str) -> Vec<&str> {
        self.highlights
            .get(field)
            .map(HighlightValue::fragments)
            .unwrap_or_default()
    }
}

/// A highlight field, which the API sends as a string or a list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HighlightValue {
    Scalar(String),
    List(Vec<String>),
    /// Any other shape, kept so JSON output stays faithful
    Other(Value),
}

impl HighlightValue {
    /// The text fragments, in order.
    ///
    /// For [`HighlightValue::Other`] only string members of an array count.
    pub fn fragments(&self) -> Vec<&str> {
        match self {
            Self::Scalar(text) => vec![text.as_str()],
            Self::List(texts) => texts.iter().map(String::as_str).collect(),
            Self::Other(Value::Array(values)) => values.iter().filter_map(Value::as_str).collect(),
            Self::Other(_) => Vec::new(),
        }
    }
}

/// Read `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A zero score carries no ranking information and is left out.
fn is_unscored(score: &Option<f64>) -> bool {
    score.is_none_or(|score| score == 0.0)
}
