//! Member identity and its state representation

use serde::Serialize;
use serde_json::{Map, Value};

use crate::state::Attributes;

const DEFAULT_ROLE: &str = "user";

/// One team member as declared or observed
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Member {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub role: String,
}

impl Member {
    /// Read a member from attributes; `None` without user_id or user_email
    pub fn from_attributes(attrs: &Attributes) -> Option<Self> {
        let text = |name: &str| {
            attrs
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let user_id = text("user_id");
        let user_email = text("user_email");
        if user_id.is_none() && user_email.is_none() {
            return None;
        }
        Some(Self {
            user_id,
            user_email,
            role: text("role").unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
    }

    /// Diff key: `id:<user_id>`, or `email:<user_email>` without a user id
    pub fn key(&self) -> String {
        match (&self.user_id, &self.user_email) {
            (Some(id), _) => format!("id:{}", id),
            (None, Some(email)) => format!("email:{}", email),
            (None, None) => String::new(),
        }
    }

    /// The identifier this member is addressed by in ids and messages
    pub fn identity(&self) -> &str {
        self.user_id
            .as_deref()
            .or(self.user_email.as_deref())
            .unwrap_or_default()
    }

    /// Whether an observed member (user_id/user_email pair) is this member
    pub fn matches(&self, user_id: Option<&str>, user_email: Option<&str>) -> bool {
        match &self.user_id {
            Some(id) => user_id == Some(id.as_str()),
            None => self.user_email.is_some() && user_email == self.user_email.as_deref(),
        }
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(id) = &self.user_id {
            map.insert("user_id".to_string(), Value::String(id.clone()));
        }
        if let Some(email) = &self.user_email {
            map.insert("user_email".to_string(), Value::String(email.clone()));
        }
        map.insert("role".to_string(), Value::String(self.role.clone()));
        Value::Object(map)
    }
}

/// Members of a `member` block list; entries without identity are skipped
pub fn members_of(value: Option<&Value>) -> Vec<Member> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .filter_map(Member::from_attributes)
                .collect()
        })
        .unwrap_or_default()
}

/// Sorted, de-duplicated member list value
pub fn members_value(members: &[Member]) -> Value {
    let mut sorted: Vec<&Member> = members.iter().collect();
    sorted.sort_by_key(|m| m.key());
    sorted.dedup_by_key(|m| m.key());
    Value::Array(sorted.into_iter().map(Member::to_value).collect())
}

/// Canonical form of a member block list
pub fn normalize_members(value: &Value) -> Value {
    members_value(&members_of(Some(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn member(value: Value) -> Member {
        Member::from_attributes(value.as_object().unwrap()).unwrap()
    }

    #[test]
    fn test_key_prefers_user_id() {
        assert_eq!(
            member(json!({"user_id": "u1", "user_email": "a@example.com"})).key(),
            "id:u1"
        );
        assert_eq!(member(json!({"user_email": "a@example.com"})).key(), "email:a@example.com");
    }

    #[test]
    fn test_default_role() {
        assert_eq!(member(json!({"user_id": "u1"})).role, "user");
        assert_eq!(member(json!({"user_id": "u1", "role": "admin"})).role, "admin");
    }

    #[test]
    fn test_empty_identity_rejected() {
        let attrs = json!({"user_id": "", "role": "admin"});
        assert!(Member::from_attributes(attrs.as_object().unwrap()).is_none());
    }

    #[test]
    fn test_matches_by_tracked_identity() {
        let by_email = member(json!({"user_email": "a@example.com"}));
        assert!(by_email.matches(Some("u9"), Some("a@example.com")));
        assert!(!by_email.matches(Some("u9"), None));

        let by_id = member(json!({"user_id": "u1"}));
        assert!(by_id.matches(Some("u1"), None));
        assert!(!by_id.matches(None, Some("u1")));
    }

    #[test]
    fn test_normalize_sorts_and_dedups() {
        let value = json!([
            {"user_id": "u2"},
            {"user_email": "b@example.com", "role": "admin"},
            {"user_id": "u2", "role": "admin"},
            {"role": "admin"}
        ]);
        assert_eq!(
            normalize_members(&value),
            json!([
                {"user_email": "b@example.com", "role": "admin"},
                {"user_id": "u2", "role": "user"}
            ])
        );
    }
}
