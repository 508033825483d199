//! Subscription handles vended by the store and its derivations.

use thiserror::Error;
use tokio::sync::watch;

use storefront_core::Product;

/// The publishing side of the stream is gone (its owner was dropped).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("stream closed: the publishing store was dropped")]
pub struct StreamClosed;

/// Replay-latest multicast subscription handle.
///
/// Each handle observes every publish from the point of subscription onward
/// and can read the current value at any time, so a late subscriber sees the
/// present state immediately instead of waiting for the next change. Handles
/// are independent: consuming a change on one does not affect the others.
#[derive(Debug, Clone)]
pub struct ValueStream<T> {
    rx: watch::Receiver<T>,
}

impl<T: Clone> ValueStream<T> {
    pub(crate) fn new(rx: watch::Receiver<T>) -> Self {
        Self { rx }
    }

    /// Clone the current value without consuming a pending change.
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Clone the current value and mark it as seen.
    pub fn latest(&mut self) -> T {
        self.rx.borrow_and_update().clone()
    }

    /// Wait until a value newer than the last seen one is published.
    ///
    /// Only fails once the publishing side is dropped; a live stream never
    /// completes and never errors on its own.
    pub async fn changed(&mut self) -> Result<(), StreamClosed> {
        self.rx.changed().await.map_err(|_| StreamClosed)
    }
}

/// Snapshots of the held product list.
pub type ProductsStream = ValueStream<Vec<Product>>;

/// Derived most-expensive-product values; `None` until the first non-empty
/// list has been observed.
pub type MostExpensiveStream = ValueStream<Option<Product>>;
