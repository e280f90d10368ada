use std::collections::HashMap;

use chrono::Utc;

use custdir_core::{CustomerId, CustomerIdGenerator, DomainError, DomainResult};

use crate::customer::{Customer, CustomerPatch, NewCustomer, DEFAULT_STATUS};

/// In-memory customer store.
///
/// Single owner of all customer records. Keeps the ordered collection
/// (insertion order drives listing) plus an id → position index so lookups
/// avoid scanning; both structures are mutated together on every
/// insert/update/delete. All query methods return clones (snapshots), so
/// callers can never mutate a stored record from the outside.
#[derive(Debug, Default)]
pub struct CustomerStore {
    records: Vec<Customer>,
    index: HashMap<CustomerId, usize>,
    ids: CustomerIdGenerator,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<Customer> {
        self.records.clone()
    }

    /// Exact-match lookup by id.
    pub fn get(&self, id: &CustomerId) -> DomainResult<Customer> {
        let pos = self.position(id)?;
        Ok(self.records[pos].clone())
    }

    /// Create a record from validated input.
    ///
    /// Rejects missing/empty name or email, and any email already held by a
    /// live record. On success the record is appended with `status="active"`
    /// and `created_at == updated_at`.
    pub fn create(&mut self, input: NewCustomer) -> DomainResult<Customer> {
        let (name, email) = {
            let (name, email) = input.validated()?;
            (name.to_string(), email.to_string())
        };
        if let Some(existing) = self.find_by_email(&email) {
            return Err(DomainError::conflict(
                "a customer with this email already exists",
                existing.id.clone(),
            ));
        }

        let now = Utc::now();
        let record = Customer {
            id: self.ids.next_id(now),
            name,
            email,
            phone: input.phone,
            address: input.address,
            company: input.company,
            status: DEFAULT_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        };

        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record.clone());
        Ok(record)
    }

    /// Merge a partial update into an existing record.
    ///
    /// Fields not supplied keep their prior values; the record keeps its
    /// position in the collection and gets a fresh `updated_at`. Changing
    /// the email to one held by another record is a conflict.
    pub fn update(&mut self, id: &CustomerId, patch: CustomerPatch) -> DomainResult<Customer> {
        let pos = self.position(id)?;

        if let Some(email) = patch.email.as_deref() {
            // Exact, case-sensitive comparison: `Ahmed@x.com` and
            // `ahmed@x.com` are distinct emails here.
            if email != self.records[pos].email {
                if let Some(existing) = self.find_by_email(email) {
                    return Err(DomainError::conflict(
                        "another customer already uses this email",
                        existing.id.clone(),
                    ));
                }
            }
        }

        let record = &mut self.records[pos];
        patch.apply_to(record);
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    /// Remove a record permanently, returning its final snapshot.
    pub fn delete(&mut self, id: &CustomerId) -> DomainResult<Customer> {
        let pos = self.position(id)?;

        let removed = self.records.remove(pos);
        self.index.remove(id);
        // Records after the removed one shifted left by one.
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(removed)
    }

    /// All records whose status matches `status` exactly, in insertion order.
    pub fn list_by_status(&self, status: &str) -> Vec<Customer> {
        self.records
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over name, email, and company
    /// (company only when set).
    pub fn search(&self, query: &str) -> Vec<Customer> {
        let q = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&q)
                    || r.email.to_lowercase().contains(&q)
                    || r.company
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase().contains(&q))
            })
            .cloned()
            .collect()
    }

    fn position(&self, id: &CustomerId) -> DomainResult<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| DomainError::not_found(id.clone()))
    }

    fn find_by_email(&self, email: &str) -> Option<&Customer> {
        self.records.iter().find(|r| r.email == email)
    }
}
