use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A catalog product as delivered by the remote API.
///
/// `id` is server-assigned and unique within any list the store holds.
/// The remote orders listings by `modified_date` descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub modified_date: DateTime<Utc>,
}

/// A product about to be created — the wire shape of a create request.
///
/// Identical to [`Product`] minus the server-assigned `id`. Construct via
/// [`ProductDraft::new`], which enforces the domain invariants (non-blank
/// name, finite non-negative price) before the draft ever reaches the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub modified_date: DateTime<Utc>,
}

impl ProductDraft {
    /// Validate and build a draft, stamped with the current time.
    pub fn new(name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be blank"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(format!(
                "product price must be a non-negative number, got {price}"
            )));
        }

        Ok(Self {
            name,
            price,
            modified_date: Utc::now(),
        })
    }

    /// Override the modification timestamp (tests, backfills).
    pub fn with_modified_date(mut self, modified_date: DateTime<Utc>) -> Self {
        self.modified_date = modified_date;
        self
    }
}
