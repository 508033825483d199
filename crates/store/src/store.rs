//! The authoritative in-memory product list and its mutation entry points.

use std::sync::Arc;

use tokio::sync::watch;

use storefront_core::{Product, ProductDraft};
use storefront_remote::{PageRequest, RemoteCatalog, RemoteError};

use crate::stream::{ProductsStream, ValueStream};

/// Reactive container for the loaded slice of the remote catalog.
///
/// The store owns the held list exclusively: every change replaces the list
/// with a new value and publishes it through a watch channel, so observers
/// share snapshots and nothing is ever mutated in place. One store instance
/// is created per application session and simply dropped at shutdown; a
/// remote response that arrives after the drop is discarded unprocessed.
pub struct ProductStore {
    remote: Arc<dyn RemoteCatalog>,
    held: watch::Sender<Vec<Product>>,
}

impl ProductStore {
    /// Create a store with an empty held list and no IO.
    pub fn new(remote: Arc<dyn RemoteCatalog>) -> Self {
        let (held, _) = watch::channel(Vec::new());
        Self { remote, held }
    }

    /// Create a store and fire the initial default page load in the
    /// background.
    ///
    /// This is the normal application entry point: subscribers attached right
    /// after `start` first see the empty list, then the first page once it
    /// arrives. A failed initial load is logged and leaves the list empty;
    /// the UI can retry via [`load_next_page`](Self::load_next_page).
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(remote: Arc<dyn RemoteCatalog>) -> Arc<Self> {
        let store = Arc::new(Self::new(remote));
        let warmup = Arc::clone(&store);
        tokio::spawn(async move {
            if let Err(err) = warmup.load_next_page(PageRequest::default()).await {
                tracing::error!(error = %err, "initial product page load failed");
            }
        });
        store
    }

    /// Subscribe to held-list snapshots.
    ///
    /// The stream replays the current list immediately to new subscribers and
    /// then delivers every subsequent change. It never completes and never
    /// errors while the store is alive; failed remote calls produce no
    /// emission at all.
    pub fn subscribe(&self) -> ProductsStream {
        ValueStream::new(self.held.subscribe())
    }

    /// One-off snapshot of the held list for non-reactive reads.
    pub fn products(&self) -> Vec<Product> {
        self.held.borrow().clone()
    }

    /// Fetch one page from the remote catalog and append it to the held list.
    ///
    /// The page is appended to whatever the held list is when the response
    /// arrives, not when the call was issued. Overlapping calls are therefore
    /// not serialized: the final order depends on response arrival, and the
    /// same page requested twice is appended twice. Callers that need
    /// sequencing must await each call before issuing the next.
    ///
    /// On failure the held list is untouched, nothing is published, and the
    /// error goes to this caller alone.
    pub async fn load_next_page(&self, page: PageRequest) -> Result<(), RemoteError> {
        tracing::info!(skip = page.skip, take = page.take, "loading product page");

        let fetched = match self.remote.list_products(page).await {
            Ok(fetched) => fetched,
            Err(err) => {
                tracing::warn!(error = %err, "product page load failed; held list unchanged");
                return Err(err);
            }
        };

        let appended = fetched.len();
        let mut merged = self.held.borrow().clone();
        merged.extend(fetched);
        let total = merged.len();
        self.held.send_replace(merged);

        tracing::info!(appended, total, "product page merged");
        Ok(())
    }

    /// Publish an empty list, then reload the first default page.
    ///
    /// Subscribers are guaranteed to observe the empty state strictly before
    /// the fresh page: the clear is published synchronously, the reload only
    /// afterwards. If the reload fails the list stays empty.
    pub async fn clear_and_reload(&self) -> Result<(), RemoteError> {
        tracing::info!("clearing held products and reloading");
        self.held.send_replace(Vec::new());
        self.load_next_page(PageRequest::default()).await
    }

    /// Create a product on the remote catalog.
    ///
    /// Commit only — the held list is not refreshed here. Whether and when to
    /// reload after a successful insert is the caller's decision (typically
    /// [`clear_and_reload`](Self::clear_and_reload)).
    pub async fn insert_product(&self, draft: &ProductDraft) -> Result<Product, RemoteError> {
        let created = self.remote.create_product(draft).await?;
        tracing::info!(id = created.id, "product created");
        Ok(created)
    }

    /// Delete a product on the remote catalog.
    ///
    /// Same non-refresh contract as [`insert_product`](Self::insert_product).
    pub async fn delete_product(&self, id: i64) -> Result<(), RemoteError> {
        self.remote.delete_product(id).await?;
        tracing::info!(id, "product deleted");
        Ok(())
    }
}
