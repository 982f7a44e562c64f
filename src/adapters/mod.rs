// Adapters layer: concrete implementations of the domain ports.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

use crate::domain::model::{RequestId, StatusId};
use crate::domain::ports::{Clock, IdGenerator};

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Id generator backed by a single shared counter.
///
/// Request ids read as the sender's initials plus a zero-padded serial
/// (`JQ-000001`); status ids carry an `ST-` prefix. Sharing one counter
/// keeps every id unique within the process even when the sender's initials
/// happen to be `ST`.
#[derive(Debug, Default)]
pub struct SerialIdGenerator {
    counter: AtomicU64,
}

impl SerialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_serial(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl IdGenerator for SerialIdGenerator {
    fn request_id(&self, sender: &str) -> RequestId {
        RequestId::new(format!(
            "{}-{:06}",
            sender_initials(sender),
            self.next_serial()
        ))
    }

    fn status_id(&self) -> StatusId {
        StatusId::new(format!("ST-{:06}", self.next_serial()))
    }
}

/// Uppercase initials of up to three words of the sender name; `SHP` when
/// the name carries no alphabetic character at all.
fn sender_initials(sender: &str) -> String {
    let initials: String = sender
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphabetic()))
        .take(3)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        "SHP".to_string()
    } else {
        initials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sender_initials() {
        assert_eq!(sender_initials("Jorge Quispe"), "JQ");
        assert_eq!(sender_initials("maria"), "M");
        assert_eq!(sender_initials("Ana Lucia Torres Vega"), "ALT");
        assert_eq!(sender_initials("42 Logistics"), "L");
        assert_eq!(sender_initials("12 34"), "SHP");
    }

    #[test]
    fn test_request_ids_embed_initials_and_serial() {
        let ids = SerialIdGenerator::new();
        assert_eq!(ids.request_id("Jorge Quispe").as_str(), "JQ-000001");
        assert_eq!(ids.request_id("Jorge Quispe").as_str(), "JQ-000002");
    }

    #[test]
    fn test_status_ids_use_the_st_prefix() {
        let ids = SerialIdGenerator::new();
        assert_eq!(ids.status_id().as_str(), "ST-000001");
    }

    #[test]
    fn test_generated_ids_never_collide_across_kinds() {
        let ids = SerialIdGenerator::new();
        let mut seen = HashSet::new();
        for _ in 0..50 {
            assert!(seen.insert(ids.request_id("Santiago Torres").as_str().to_string()));
            assert!(seen.insert(ids.status_id().as_str().to_string()));
        }
    }

    #[test]
    fn test_system_clock_yields_a_current_moment() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
