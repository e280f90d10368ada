//! Strongly-typed identifiers used across the domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix shared by all generated customer ids.
pub const CUSTOMER_ID_PREFIX: &str = "CUST";

/// Identifier of a customer record.
///
/// Generated ids follow the `CUST-<millis>-<counter>` format, but the type
/// accepts any string so lookups with unknown ids stay representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<String> for CustomerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<CustomerId> for String {
    fn from(value: CustomerId) -> Self {
        value.0
    }
}

/// Monotonic id source for customer records.
///
/// The counter increments on every allocation and is never reset, so ids are
/// never reused even after deletes.
#[derive(Debug, Default)]
pub struct CustomerIdGenerator {
    counter: u64,
}

impl CustomerIdGenerator {
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Allocate the next id, stamped with the creation time.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> CustomerId {
        self.counter += 1;
        CustomerId(format!(
            "{}-{}-{}",
            CUSTOMER_ID_PREFIX,
            now.timestamp_millis(),
            self.counter
        ))
    }

    /// Number of ids allocated so far.
    pub fn allocated(&self) -> u64 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_match_expected_pattern() {
        let mut ids = CustomerIdGenerator::new();
        let id = ids.next_id(Utc::now());

        let mut parts = id.as_str().split('-');
        assert_eq!(parts.next(), Some("CUST"));
        assert!(parts.next().unwrap().chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts.next(), Some("1"));
        assert_eq!(parts.next(), None);
    }

    #[test]
    fn counter_is_monotonic_across_allocations() {
        let mut ids = CustomerIdGenerator::new();
        let now = Utc::now();

        let a = ids.next_id(now);
        let b = ids.next_id(now);
        let c = ids.next_id(now);

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(b.as_str().ends_with("-2"));
        assert!(c.as_str().ends_with("-3"));
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn ids_stay_unique_even_with_identical_timestamps() {
        let mut ids = CustomerIdGenerator::new();
        let now = Utc::now();

        let allocated: Vec<_> = (0..100).map(|_| ids.next_id(now)).collect();
        let mut unique = allocated.clone();
        unique.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        unique.dedup();

        assert_eq!(unique.len(), allocated.len());
    }
}
