use serde::Deserialize;

use custdir_customers::{Customer, CustomerPatch, NewCustomer};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /customers`.
///
/// Required fields are `Option` on purpose: presence is a domain rule, so a
/// missing `name`/`email` must produce the validation envelope rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
}

impl CreateCustomerRequest {
    pub fn into_input(self) -> NewCustomer {
        NewCustomer {
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            company: self.company,
        }
    }
}

/// Body of `PUT /customers/:id`.
///
/// This is the mutable-field allow-list: anything else in the body
/// (including `id` and `createdAt`) is dropped here and never reaches the
/// store.
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub company: Option<String>,
    pub status: Option<String>,
}

impl UpdateCustomerRequest {
    pub fn into_patch(self) -> CustomerPatch {
        CustomerPatch {
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            company: self.company,
            status: self.status,
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn customer_to_json(record: &Customer) -> serde_json::Value {
    // Customer serializes with camelCase timestamps and null optionals,
    // which is exactly the wire shape.
    serde_json::json!(record)
}
