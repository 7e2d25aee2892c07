//! Client-assigned identifiers

use log::warn;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::{NoContext, Timestamp, Uuid};

/// Generate a time-ordered UUIDv7, falling back to a random UUIDv4
pub fn generate_id() -> String {
    generate_id_with(time_ordered)
}

/// Generate an id with the given time-ordered generator.
///
/// Never fails: when the generator yields nothing a random UUID is used.
pub fn generate_id_with<F>(time_ordered: F) -> String
where
    F: FnOnce() -> Option<Uuid>,
{
    match time_ordered() {
        Some(id) => id.to_string(),
        None => {
            warn!("UUIDv7 generation failed, falling back to random UUIDv4");
            Uuid::new_v4().to_string()
        }
    }
}

fn time_ordered() -> Option<Uuid> {
    let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
    let ts = Timestamp::from_unix(
        NoContext,
        since_epoch.as_secs(),
        since_epoch.subsec_nanos(),
    );
    Some(Uuid::new_v7(ts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_v7() {
        let id = generate_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn test_generated_ids_are_time_ordered() {
        let first = generate_id();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = generate_id();
        assert!(first < second);
    }

    #[test]
    fn test_fallback_to_random_uuid() {
        let id = generate_id_with(|| None);
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }
}
