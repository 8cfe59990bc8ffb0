use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Refresh behaviour requested on every write.
///
/// `Immediate` makes the written document visible to the next search before
/// the write call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    #[default]
    Immediate,
    WaitFor,
    Disabled,
}

impl RefreshPolicy {
    /// Value of the `refresh` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            RefreshPolicy::Immediate => "true",
            RefreshPolicy::WaitFor => "wait_for",
            RefreshPolicy::Disabled => "false",
        }
    }
}

impl FromStr for RefreshPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "true" => Ok(RefreshPolicy::Immediate),
            "wait_for" => Ok(RefreshPolicy::WaitFor),
            "false" => Ok(RefreshPolicy::Disabled),
            other => Err(format!(
                "invalid refresh policy '{}' (expected true, wait_for or false)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    Exists,
    Absent,
}

/// Body of a `_search` response. Only the parts the service reads.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub hits: HitsContainer,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct HitsContainer {
    /// Raw hits, decoded one by one so a single odd hit cannot fail the page.
    #[serde(default)]
    pub hits: Vec<serde_json::Value>,
}

/// Response to index, update and delete calls.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WriteResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub result: String,
}
