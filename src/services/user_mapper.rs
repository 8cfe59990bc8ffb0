// ==================== USER DOCUMENT MAPPING ====================
// Wire JSON <-> engine document/query shapes

use crate::{
    models::{User, UserDocument},
    search::SearchResponse,
    utils::AppError,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// Fields covered by free-text search.
pub const SEARCH_FIELDS: [&str; 3] = ["first_name", "last_name", "email"];

#[derive(Debug, Deserialize)]
struct UserHit {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "_source")]
    source: UserDocument,
}

/// Decodes a request body into a user record.
pub fn parse_user(body: &[u8]) -> Result<User, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::InvalidBody(e.to_string()))
}

/// Match-all when `search` is absent or blank, otherwise a fuzzy multi-field match.
pub fn build_search_query(search: Option<&str>) -> Value {
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => json!({
            "query": {
                "multi_match": {
                    "query": text,
                    "fields": SEARCH_FIELDS,
                    "fuzziness": "AUTO"
                }
            }
        }),
        None => json!({
            "query": {
                "match_all": {}
            }
        }),
    }
}

/// Body stored for a new document: name and email only.
pub fn document_body(user: &User) -> Result<Value, AppError> {
    serde_json::to_value(user.to_document()).map_err(|e| AppError::Serialization(e.to_string()))
}

/// Partial-update envelope. Only fields present in `user` are changed.
pub fn update_envelope(user: &User) -> Result<Value, AppError> {
    Ok(json!({ "doc": document_body(user)? }))
}

/// Flattens hits into user records in ranking order, skipping hits that do
/// not carry a string `_id` and an object `_source` of string fields.
pub fn users_from_hits(response: SearchResponse) -> Vec<User> {
    response
        .hits
        .hits
        .into_iter()
        .filter_map(|hit| match serde_json::from_value::<UserHit>(hit) {
            Ok(hit) => Some(User::from_document(hit.id, hit.source)),
            Err(e) => {
                log::debug!("Skipping malformed hit: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::HitsContainer;

    #[test]
    fn test_blank_search_is_match_all() {
        let expected = json!({"query": {"match_all": {}}});
        assert_eq!(build_search_query(None), expected);
        assert_eq!(build_search_query(Some("")), expected);
        assert_eq!(build_search_query(Some("   ")), expected);
    }

    #[test]
    fn test_search_text_builds_fuzzy_multi_match() {
        let query = build_search_query(Some("Ada"));
        assert_eq!(query["query"]["multi_match"]["query"], "Ada");
        assert_eq!(
            query["query"]["multi_match"]["fields"],
            json!(["first_name", "last_name", "email"])
        );
        assert_eq!(query["query"]["multi_match"]["fuzziness"], "AUTO");
    }

    #[test]
    fn test_document_body_ignores_supplied_id() {
        let user = parse_user(br#"{"id":"x1","first_name":"Ada","last_name":"Lovelace","email":"ada@x.io"}"#)
            .unwrap();
        assert_eq!(
            document_body(&user).unwrap(),
            json!({"first_name": "Ada", "last_name": "Lovelace", "email": "ada@x.io"})
        );
    }

    #[test]
    fn test_update_envelope_only_has_present_fields() {
        let user = parse_user(br#"{"email":"new@x.io"}"#).unwrap();
        assert_eq!(update_envelope(&user).unwrap(), json!({"doc": {"email": "new@x.io"}}));
    }

    #[test]
    fn test_parse_user_rejects_malformed_json() {
        assert!(matches!(parse_user(b"{not json"), Err(AppError::InvalidBody(_))));
        assert!(matches!(parse_user(b""), Err(AppError::InvalidBody(_))));
    }

    #[test]
    fn test_malformed_hits_are_skipped_and_order_kept() {
        let response = SearchResponse {
            hits: HitsContainer {
                hits: vec![
                    json!({"_id": "2", "_source": {"first_name": "Grace"}}),
                    json!({"_id": "3"}),
                    json!({"_source": {"first_name": "NoId"}}),
                    json!({"_id": "4", "_source": {"first_name": 12}}),
                    json!("garbage"),
                    json!({"_id": "1", "_source": {"first_name": "Ada", "email": "ada@x.io"}}),
                ],
            },
        };

        let users = users_from_hits(response);
        let ids: Vec<_> = users.iter().filter_map(|u| u.id.as_deref()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(users[1].email.as_deref(), Some("ada@x.io"));
        assert_eq!(users[1].last_name, None);
    }
}
