use serde::{Deserialize, Serialize};

/// User record as exchanged with HTTP clients.
///
/// `id` is assigned by the search engine on creation and ignored on input.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, utoipa::ToSchema)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// `_source` of a user document stored in the index. Never carries the id.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UserDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Keeps only the stored fields. Empty strings count as absent.
    pub fn to_document(&self) -> UserDocument {
        UserDocument {
            first_name: non_empty(&self.first_name),
            last_name: non_empty(&self.last_name),
            email: non_empty(&self.email),
        }
    }

    pub fn from_document(id: String, doc: UserDocument) -> Self {
        Self {
            id: Some(id),
            first_name: doc.first_name,
            last_name: doc.last_name,
            email: doc.email,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
