use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use custdir_core::{CustomerId, DomainError, DomainResult};

/// Status assigned to every customer at creation.
pub const DEFAULT_STATUS: &str = "active";

/// A customer record.
///
/// Every stored record has all fields populated: optional contact fields are
/// `None` rather than omitted, and both timestamps are always set. The store
/// hands out clones of this type, never references into its own collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
    /// Free-form status string; `"active"` at creation, no enumerated
    /// constraint is enforced.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a customer.
///
/// `name` and `email` are required but modeled as `Option` so that a missing
/// field reaches domain validation instead of failing at deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
}

impl NewCustomer {
    /// Presence check for the required fields.
    ///
    /// Returns the validated `(name, email)` pair; missing or empty values
    /// fail with a validation error.
    pub fn validated(&self) -> DomainResult<(&str, &str)> {
        let name = self
            .name
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DomainError::validation("name is required"))?;
        let email = self
            .email
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DomainError::validation("email is required"))?;
        Ok((name, email))
    }
}

/// Allow-listed partial update for a customer.
///
/// Only the fields below can ever be merged into a record; `id` and
/// `createdAt` supplied in a request body are dropped at deserialization and
/// cannot reach the store. A `None` field keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
    pub status: Option<String>,
}

impl CustomerPatch {
    /// Merge the supplied fields over `record`, leaving the rest untouched.
    ///
    /// Does not touch `id`, `created_at`, or `updated_at`; the store owns
    /// those.
    pub fn apply_to(self, record: &mut Customer) {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(phone) = self.phone {
            record.phone = Some(phone);
        }
        if let Some(address) = self.address {
            record.address = Some(address);
        }
        if let Some(company) = self.company {
            record.company = Some(company);
        }
        if let Some(status) = self.status {
            record.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Customer {
        Customer {
            id: CustomerId::from("CUST-1700000000000-1"),
            name: "Ahmed Mohamed".to_string(),
            email: "ahmed@example.com".to_string(),
            phone: Some("+201000000000".to_string()),
            address: None,
            company: Some("Acme".to_string()),
            status: DEFAULT_STATUS.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn validated_accepts_name_and_email() {
        let input = NewCustomer {
            name: Some("Ahmed Mohamed".to_string()),
            email: Some("ahmed@example.com".to_string()),
            ..NewCustomer::default()
        };

        let (name, email) = input.validated().unwrap();
        assert_eq!(name, "Ahmed Mohamed");
        assert_eq!(email, "ahmed@example.com");
    }

    #[test]
    fn validated_rejects_missing_name() {
        let input = NewCustomer {
            email: Some("ahmed@example.com".to_string()),
            ..NewCustomer::default()
        };

        match input.validated().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("name")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn validated_rejects_empty_email() {
        let input = NewCustomer {
            name: Some("Ahmed Mohamed".to_string()),
            email: Some(String::new()),
            ..NewCustomer::default()
        };

        match input.validated().unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("email")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn patch_merges_only_supplied_fields() {
        let mut record = sample_record();
        let before = record.clone();

        let patch = CustomerPatch {
            name: Some("X".to_string()),
            ..CustomerPatch::default()
        };
        patch.apply_to(&mut record);

        assert_eq!(record.name, "X");
        assert_eq!(record.email, before.email);
        assert_eq!(record.phone, before.phone);
        assert_eq!(record.address, before.address);
        assert_eq!(record.company, before.company);
        assert_eq!(record.status, before.status);
        assert_eq!(record.created_at, before.created_at);
        assert_eq!(record.updated_at, before.updated_at);
    }

    #[test]
    fn patch_ignores_id_and_created_at_in_body() {
        let patch: CustomerPatch = serde_json::from_str(
            r#"{"id":"CUST-0-999","createdAt":"1999-01-01T00:00:00Z","status":"vip"}"#,
        )
        .unwrap();

        let mut record = sample_record();
        let id_before = record.id.clone();
        let created_before = record.created_at;
        patch.apply_to(&mut record);

        assert_eq!(record.id, id_before);
        assert_eq!(record.created_at, created_before);
        assert_eq!(record.status, "vip");
    }

    #[test]
    fn record_serializes_optional_fields_as_null() {
        let mut record = sample_record();
        record.phone = None;
        record.company = None;

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["phone"].is_null());
        assert!(json["address"].is_null());
        assert!(json["company"].is_null());
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
    }
}
