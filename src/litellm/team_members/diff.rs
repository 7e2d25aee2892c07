//! Member set diffing

use std::collections::BTreeMap;

use super::Member;

/// Calls needed to move a team from one member set to another
#[derive(Debug, Default, PartialEq)]
pub struct MemberDiff {
    /// One delete per member
    pub removed: Vec<Member>,
    /// One bulk add for all of them
    pub added: Vec<Member>,
    /// One update per member, each member at most once
    pub updated: Vec<Member>,
}

impl MemberDiff {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.updated.is_empty()
    }
}

/// Diff two member sets keyed by [`Member::key`].
///
/// A surviving member is updated when its role changed, or unconditionally
/// when `budget_changed` is set (the shared budget is per member on the API).
pub fn diff(old: &[Member], new: &[Member], budget_changed: bool) -> MemberDiff {
    let old: BTreeMap<String, &Member> = old.iter().map(|m| (m.key(), m)).collect();
    let new: BTreeMap<String, &Member> = new.iter().map(|m| (m.key(), m)).collect();

    let removed = old
        .iter()
        .filter(|(key, _)| !new.contains_key(*key))
        .map(|(_, m)| (*m).clone())
        .collect();
    let added = new
        .iter()
        .filter(|(key, _)| !old.contains_key(*key))
        .map(|(_, m)| (*m).clone())
        .collect();

    let mut updated: BTreeMap<&str, &Member> = BTreeMap::new();
    for (key, member) in &new {
        let Some(previous) = old.get(key) else {
            continue;
        };
        if previous.role != member.role || budget_changed {
            updated.insert(key.as_str(), *member);
        }
    }

    MemberDiff {
        removed,
        added,
        updated: updated.into_values().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_id(id: &str, role: &str) -> Member {
        Member {
            user_id: Some(id.to_string()),
            user_email: None,
            role: role.to_string(),
        }
    }

    fn by_email(email: &str, role: &str) -> Member {
        Member {
            user_id: None,
            user_email: Some(email.to_string()),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_update_delete_and_bulk_add() {
        let old = [by_id("u1", "admin"), by_email("e2", "user")];
        let new = [by_id("u1", "user"), by_id("u3", "admin")];

        let result = diff(&old, &new, false);
        assert_eq!(result.updated, vec![by_id("u1", "user")]);
        assert_eq!(result.removed, vec![by_email("e2", "user")]);
        assert_eq!(result.added, vec![by_id("u3", "admin")]);
    }

    #[test]
    fn test_budget_and_role_change_updates_once() {
        let old = [by_id("u1", "admin"), by_id("u2", "user")];
        let new = [by_id("u1", "user"), by_id("u2", "user")];

        let result = diff(&old, &new, true);
        assert_eq!(result.updated, vec![by_id("u1", "user"), by_id("u2", "user")]);
        assert!(result.added.is_empty());
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_identical_sets_are_empty() {
        let members = [by_id("u1", "admin"), by_email("e2", "user")];
        assert!(diff(&members, &members, false).is_empty());
    }

    #[test]
    fn test_switching_identity_is_remove_plus_add() {
        let old = [by_email("e2", "user")];
        let new = [Member {
            user_id: Some("u2".to_string()),
            user_email: Some("e2".to_string()),
            role: "user".to_string(),
        }];

        let result = diff(&old, &new, false);
        assert_eq!(result.removed.len(), 1);
        assert_eq!(result.added.len(), 1);
        assert!(result.updated.is_empty());
    }
}
