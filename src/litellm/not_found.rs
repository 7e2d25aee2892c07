//! Failed-response classification: not-found vs everything else
//!
//! The API has no consistent not-found contract. A response counts as
//! not-found when any of these hold, in order:
//! 1. HTTP status 404
//! 2. a structured error code (`error.code == 404` or an `error.type`
//!    containing `not_found`)
//! 3. the error message matches one of the patterns registered for the
//!    resource type below
//!
//! All per-resource message shapes live in [`patterns`]; call sites never do
//! their own string checks.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

use crate::error::ProviderError;

use super::ResourceKind;

const TEAM: &[&str] = &[
    r"(?i)team (?:not found|doesn't exist|does not exist)",
    r"(?i)team_id=\S+ (?:not found|doesn't exist|does not exist)",
    r"(?i)team with id[= ]\S+ not found",
];

const KEY: &[&str] = &[
    r"(?i)key not found",
    r"(?i)token not found",
    r"(?i)key with id[= ]\S+ not found",
];

const USER: &[&str] = &[
    r"(?i)user not found",
    r"(?i)user_id=\S+ (?:not found|doesn't exist|does not exist)",
    r"(?i)user \S+ does not exist",
];

const MODEL: &[&str] = &[
    r"(?i)model (?:id )?not found",
    r"(?i)no model (?:found|exists)",
    r"(?i)model with id[= ]\S+ not found",
    r"(?i)model \S+ does not exist",
];

const CREDENTIAL: &[&str] = &[
    r"(?i)credential(?: \S+)? not found",
    r"(?i)credential \S+ does not exist",
];

const VECTOR_STORE: &[&str] = &[
    r"(?i)vector store(?: \S+)? not found",
    r"(?i)vector_store_id=\S+ not found",
    r"(?i)vector store \S+ does not exist",
];

const MCP_SERVER: &[&str] = &[
    r"(?i)mcp server(?: \S+)? not found",
    r"(?i)server_id=\S+ not found",
    r"(?i)mcp server \S+ does not exist",
];

const TEAM_MEMBER: &[&str] = &[
    r"(?i)team (?:not found|doesn't exist|does not exist)",
    r"(?i)(?:user|member) not found",
    r"(?i)not a member of (?:the )?team",
];

/// Message patterns meaning "the entity is gone" for a resource type
pub fn patterns(kind: ResourceKind) -> &'static [&'static str] {
    match kind {
        ResourceKind::Team => TEAM,
        ResourceKind::Key => KEY,
        ResourceKind::User => USER,
        ResourceKind::Model => MODEL,
        ResourceKind::Credential => CREDENTIAL,
        ResourceKind::VectorStore => VECTOR_STORE,
        ResourceKind::McpServer => MCP_SERVER,
        ResourceKind::TeamMember | ResourceKind::TeamMemberAdd => TEAM_MEMBER,
    }
}

/// Compiled patterns of a resource type, built on first use
fn compiled(kind: ResourceKind) -> &'static [Regex] {
    static TABLE: OnceLock<Vec<(ResourceKind, Vec<Regex>)>> = OnceLock::new();
    TABLE
        .get_or_init(|| {
            ResourceKind::ALL
                .iter()
                .map(|k| {
                    let regexes = patterns(*k)
                        .iter()
                        .map(|p| Regex::new(p).expect("not-found pattern"))
                        .collect();
                    (*k, regexes)
                })
                .collect()
        })
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, regexes)| regexes.as_slice())
        .unwrap_or(&[])
}

/// Whether a failed response means the entity does not exist
pub fn is_not_found(kind: ResourceKind, status: u16, body: &str) -> bool {
    if status == 404 {
        return true;
    }

    let parsed: Option<Value> = serde_json::from_str(body).ok();
    if parsed.as_ref().is_some_and(has_not_found_code) {
        return true;
    }

    let message = parsed
        .as_ref()
        .and_then(error_message)
        .unwrap_or_else(|| body.to_string());

    compiled(kind).iter().any(|re| re.is_match(&message))
}

/// Turn a failed response into a provider error
pub fn classify(kind: ResourceKind, status: u16, body: &str) -> ProviderError {
    if is_not_found(kind, status, body) {
        ProviderError::NotFound {
            resource: kind.label().to_string(),
            message: body.to_string(),
        }
    } else {
        ProviderError::Api {
            status,
            message: body.to_string(),
        }
    }
}

fn has_not_found_code(body: &Value) -> bool {
    let error = &body["error"];
    let code_is_404 = match &error["code"] {
        Value::String(s) => s == "404",
        Value::Number(n) => n.as_u64() == Some(404),
        _ => false,
    };
    let type_is_not_found = error["type"]
        .as_str()
        .is_some_and(|t| t.to_lowercase().contains("not_found"));
    code_is_404 || type_is_not_found
}

/// Pull the human-readable message out of the known error body shapes:
/// `{"error": {"message": ..}}`, `{"detail": ..}`, `{"detail": {"error": ..}}`,
/// `{"message": ..}`
fn error_message(body: &Value) -> Option<String> {
    [
        &body["error"]["message"],
        &body["error"],
        &body["detail"]["error"],
        &body["detail"],
        &body["message"],
    ]
    .into_iter()
    .find_map(|v| v.as_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> String {
        value.to_string()
    }

    #[test]
    fn test_all_patterns_compile() {
        for kind in ResourceKind::ALL {
            for p in patterns(kind) {
                assert!(Regex::new(p).is_ok(), "pattern {} must compile", p);
            }
            assert_eq!(compiled(kind).len(), patterns(kind).len());
        }
    }

    #[test]
    fn test_http_404_is_not_found_for_every_kind() {
        for kind in ResourceKind::ALL {
            assert!(is_not_found(kind, 404, ""));
        }
    }

    #[test]
    fn test_structured_error_code() {
        let b = body(json!({"error": {"message": "x", "type": "none", "code": "404"}}));
        assert!(is_not_found(ResourceKind::Key, 400, &b));

        let b = body(json!({"error": {"message": "x", "type": "not_found_error", "code": 400}}));
        assert!(is_not_found(ResourceKind::User, 400, &b));
    }

    #[test]
    fn test_documented_shapes_per_resource() {
        let cases = [
            (
                ResourceKind::Team,
                json!({"detail": {"error": "Team doesn't exist in db. Team=team-1"}}),
            ),
            (
                ResourceKind::Team,
                json!({"error": {"message": "team_id=team-1 not found", "code": "400"}}),
            ),
            (
                ResourceKind::Key,
                json!({"detail": {"error": "Key not found in database"}}),
            ),
            (
                ResourceKind::User,
                json!({"detail": "User not found, passed user_id=u-1"}),
            ),
            (
                ResourceKind::Model,
                json!({"detail": {"error": "Model with id=m-1 not found in db"}}),
            ),
            (
                ResourceKind::Model,
                json!({"error": {"message": "Model not found", "code": "400"}}),
            ),
            (
                ResourceKind::Credential,
                json!({"detail": "Credential openai-prod not found"}),
            ),
            (
                ResourceKind::VectorStore,
                json!({"detail": "Vector store vs-1 not found"}),
            ),
            (
                ResourceKind::McpServer,
                json!({"detail": "MCP Server abc not found"}),
            ),
            (
                ResourceKind::TeamMember,
                json!({"detail": {"error": "User u-1 is not a member of the team"}}),
            ),
            (
                ResourceKind::TeamMemberAdd,
                json!({"error": {"message": "Member not found in team"}}),
            ),
        ];

        for (kind, value) in cases {
            let b = body(value);
            assert!(is_not_found(kind, 400, &b), "{:?} should classify {}", kind, b);
        }
    }

    #[test]
    fn test_plain_text_body_matches() {
        assert!(is_not_found(
            ResourceKind::Credential,
            500,
            "Credential not found"
        ));
    }

    #[test]
    fn test_generic_errors_stay_generic() {
        let b = body(json!({"error": {"message": "Authentication Error", "code": "401"}}));
        assert!(!is_not_found(ResourceKind::Team, 401, &b));
        assert!(!is_not_found(ResourceKind::Model, 500, "internal server error"));
    }

    #[test]
    fn test_patterns_are_resource_scoped() {
        let b = body(json!({"detail": "Key not found in database"}));
        assert!(!is_not_found(ResourceKind::Team, 400, &b));
    }

    #[test]
    fn test_other_missing_entity_is_not_model_gone() {
        let b = body(json!({"detail": {"error": "Credential 'azure-prod' does not exist"}}));
        assert!(!is_not_found(ResourceKind::Model, 400, &b));
        assert!(is_not_found(ResourceKind::Credential, 400, &b));

        let b = body(json!({"detail": {"error": "Model update failed: Team t1 does not exist"}}));
        assert!(!is_not_found(ResourceKind::Model, 400, &b));

        let b = body(json!({"detail": "Model m-1 does not exist"}));
        assert!(is_not_found(ResourceKind::Model, 400, &b));
    }

    #[test]
    fn test_classify_variants() {
        match classify(ResourceKind::Team, 404, "gone") {
            ProviderError::NotFound { resource, message } => {
                assert_eq!(resource, "team");
                assert_eq!(message, "gone");
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
        match classify(ResourceKind::Team, 500, "boom") {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected Api, got {:?}", other),
        }
    }
}
