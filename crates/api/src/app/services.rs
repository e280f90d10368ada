use std::sync::{Mutex, MutexGuard};

use custdir_customers::CustomerStore;

use crate::app::errors;

/// Shared state handed to every handler.
///
/// The store sits behind a single mutex: a handler holds the lock for its
/// whole validate/lookup/mutate sequence, so uniqueness checks and mutations
/// never interleave.
#[derive(Debug, Default)]
pub struct AppServices {
    customers: Mutex<CustomerStore>,
}

impl AppServices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the customer store.
    ///
    /// A poisoned lock (a panic while holding it) surfaces as the internal
    /// fault response instead of escaping the handler.
    pub fn customers(&self) -> Result<MutexGuard<'_, CustomerStore>, axum::response::Response> {
        self.customers.lock().map_err(|e| {
            tracing::error!("customer store lock poisoned: {e}");
            errors::internal_error(e.to_string())
        })
    }
}
