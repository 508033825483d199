//! Derived "most expensive product" value over the store's stream.

use std::sync::Arc;

use tokio::sync::watch;

use storefront_core::Product;

use crate::stream::{MostExpensiveStream, ProductsStream, ValueStream};

/// Continuously recomputed most-expensive-product derivation.
///
/// Subscribes to the held-list stream and recomputes from scratch on every
/// base emission — a linear scan, no incremental aggregate. While the base
/// list is empty nothing is emitted, so subscribers keep seeing the last
/// derived value (or `None` if no non-empty list was ever observed).
pub struct MostExpensiveDerivation {
    output: Arc<watch::Sender<Option<Product>>>,
}

impl MostExpensiveDerivation {
    /// Attach to a products stream and start deriving in the background.
    ///
    /// The current list is processed immediately (replay), so a derivation
    /// spawned against an already-populated store emits right away. The task
    /// ends quietly once the store is dropped.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(mut products: ProductsStream) -> Self {
        let output = Arc::new(watch::channel(None).0);
        let publish = Arc::clone(&output);

        tokio::spawn(async move {
            loop {
                let snapshot = products.latest();
                if let Some(max) = most_expensive(&snapshot) {
                    publish.send_replace(Some(max.clone()));
                }
                if products.changed().await.is_err() {
                    break;
                }
            }
        });

        Self { output }
    }

    /// Subscribe to derived values (replay-latest, like the base stream).
    pub fn subscribe(&self) -> MostExpensiveStream {
        ValueStream::new(self.output.subscribe())
    }

    /// One-off snapshot of the latest derived value.
    pub fn current(&self) -> Option<Product> {
        self.output.borrow().clone()
    }
}

/// Most expensive product, first one winning on equal prices.
///
/// Only a strictly greater price replaces the running best, which gives the
/// same answer as a stable sort by price descending: equal-priced products
/// keep their list order and the earliest maximal one wins. Prices are
/// validated finite at the domain boundary, so the comparison is total.
fn most_expensive(products: &[Product]) -> Option<&Product> {
    let mut best: Option<&Product> = None;
    for candidate in products {
        match best {
            Some(current) if candidate.price > current.price => best = Some(candidate),
            None => best = Some(candidate),
            _ => {}
        }
    }
    best
}
