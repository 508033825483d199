//! In-memory remote catalog for tests/dev.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use storefront_core::{Product, ProductDraft};

use crate::catalog::{PageRequest, RemoteCatalog};
use crate::error::RemoteError;

/// Scripted in-memory stand-in for the remote API.
///
/// - No IO; each call yields once to model the suspension point at the
///   remote boundary
/// - Listing consumes a queue of scripted pages/failures (empty page once
///   the queue runs dry)
/// - Create assigns sequential ids; every call is recorded for assertions
#[derive(Debug, Default)]
pub struct InMemoryRemoteCatalog {
    pages: Mutex<VecDeque<Result<Vec<Product>, RemoteError>>>,
    mutation_failure: Mutex<Option<RemoteError>>,
    listed: Mutex<Vec<PageRequest>>,
    created: Mutex<Vec<Product>>,
    deleted: Mutex<Vec<i64>>,
    next_id: AtomicI64,
}

impl InMemoryRemoteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a page for the next `list_products` call.
    pub fn push_page(&self, products: Vec<Product>) {
        self.lock_pages().push_back(Ok(products));
    }

    /// Queue a failure for the next `list_products` call.
    pub fn push_failure(&self, err: RemoteError) {
        self.lock_pages().push_back(Err(err));
    }

    /// Fail the next create/delete call with `err` (one-shot).
    pub fn fail_next_mutation(&self, err: RemoteError) {
        *lock(&self.mutation_failure) = Some(err);
    }

    /// Every `PageRequest` seen so far, in call order.
    pub fn listed_pages(&self) -> Vec<PageRequest> {
        lock(&self.listed).clone()
    }

    /// Every product created so far (with assigned ids), in call order.
    pub fn created_products(&self) -> Vec<Product> {
        lock(&self.created).clone()
    }

    /// Every id deleted so far, in call order.
    pub fn deleted_ids(&self) -> Vec<i64> {
        lock(&self.deleted).clone()
    }

    fn lock_pages(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<Vec<Product>, RemoteError>>> {
        lock(&self.pages)
    }
}

/// Lock that shrugs off poisoning — state stays usable after a panicking test.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl RemoteCatalog for InMemoryRemoteCatalog {
    async fn list_products(&self, page: PageRequest) -> Result<Vec<Product>, RemoteError> {
        lock(&self.listed).push(page);
        tokio::task::yield_now().await;

        match self.lock_pages().pop_front() {
            Some(result) => result,
            None => Ok(Vec::new()),
        }
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, RemoteError> {
        tokio::task::yield_now().await;

        if let Some(err) = lock(&self.mutation_failure).take() {
            return Err(err);
        }

        let product = Product {
            id: self.next_id.fetch_add(1, Ordering::Relaxed) + 1,
            name: draft.name.clone(),
            price: draft.price,
            modified_date: draft.modified_date,
        };
        lock(&self.created).push(product.clone());
        Ok(product)
    }

    async fn delete_product(&self, id: i64) -> Result<(), RemoteError> {
        tokio::task::yield_now().await;

        if let Some(err) = lock(&self.mutation_failure).take() {
            return Err(err);
        }

        lock(&self.deleted).push(id);
        Ok(())
    }
}
