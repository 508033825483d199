//! `storefront-store` — reactive product data layer.
//!
//! This crate owns the in-memory catalog state that sits between UI
//! consumers and the remote product API:
//!
//! - [`ProductStore`] — holds the authoritative list of loaded products and
//!   exposes it as a multicast, replay-latest stream plus mutation entry
//!   points (load next page, clear and reload, insert, delete). All remote
//!   IO goes through the [`RemoteCatalog`](storefront_remote::RemoteCatalog)
//!   it was constructed with.
//! - [`MostExpensiveDerivation`] — subscribes to the store and maintains the
//!   derived "most expensive product" value, recomputed from scratch on
//!   every change of the base list.
//! - [`ValueStream`] — the subscription handle both of the above vend:
//!   `current()` / `latest()` / `changed()` over a watch channel, so late
//!   subscribers see the current state immediately.

pub mod most_expensive;
pub mod store;
pub mod stream;

pub use most_expensive::MostExpensiveDerivation;
pub use store::ProductStore;
pub use stream::{MostExpensiveStream, ProductsStream, StreamClosed, ValueStream};
