//! Response payload of the optimize endpoint

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A change the service made, or suggests making
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// File the action applies to
    #[serde(default)]
    pub filename: String,
    /// Short summary
    #[serde(default)]
    pub title: String,
    /// Longer explanation
    #[serde(default)]
    pub description: String,
    /// Identifier of the optimization rule behind this action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

impl Action {
    /// Rule identifier, if the service sent a non-empty one
    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref().filter(|rule| !rule.is_empty())
    }
}

/// Body returned by `POST /api/v1/optimize`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResponse {
    /// New file contents keyed by file name
    #[serde(default, deserialize_with = "null_as_default")]
    pub modified_project: BTreeMap<String, Value>,
    /// Changes already applied to the returned files
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions_taken: Vec<Action>,
    /// Further changes the user should consider
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<Action>,
    /// Failure message, set on non-200 replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OptimizationResponse {
    /// True when the service found nothing to change or suggest
    pub fn is_already_optimized(&self) -> bool {
        self.actions_taken.is_empty() && self.recommendations.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
