//! Remote catalog contract.

use std::sync::Arc;

use async_trait::async_trait;

use storefront_core::{Product, ProductDraft};

use crate::error::RemoteError;

/// One page of a listing request.
///
/// `take` must be positive; the server treats `skip` as an offset into the
/// listing ordered by modification date, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: u32,
    pub take: u32,
}

impl PageRequest {
    pub fn new(skip: u32, take: u32) -> Self {
        Self { skip, take }
    }
}

impl Default for PageRequest {
    /// First page, ten items — the defaults of the remote listing endpoint.
    fn default() -> Self {
        Self { skip: 0, take: 10 }
    }
}

/// Client contract for the remote product-catalog API.
///
/// Every method is a single-shot async call: it resolves or fails exactly
/// once and never emits again. Listing always requests server-side ordering
/// by `ModifiedDate` descending, so consecutive pages of an unchanged
/// catalog are disjoint.
///
/// Implementations must be shareable across tasks; the store holds one as
/// `Arc<dyn RemoteCatalog>`.
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    /// Fetch one page of products, newest-modified first.
    async fn list_products(&self, page: PageRequest) -> Result<Vec<Product>, RemoteError>;

    /// Create a product; the server assigns the id.
    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, RemoteError>;

    /// Delete a product by id.
    async fn delete_product(&self, id: i64) -> Result<(), RemoteError>;
}

#[async_trait]
impl<C> RemoteCatalog for Arc<C>
where
    C: RemoteCatalog + ?Sized,
{
    async fn list_products(&self, page: PageRequest) -> Result<Vec<Product>, RemoteError> {
        (**self).list_products(page).await
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, RemoteError> {
        (**self).create_product(draft).await
    }

    async fn delete_product(&self, id: i64) -> Result<(), RemoteError> {
        (**self).delete_product(id).await
    }
}
