//! `storefront-remote` — remote catalog access.
//!
//! This crate owns everything that talks to (or stands in for) the remote
//! product-catalog REST API:
//!
//! - [`RemoteCatalog`] — the client contract: paged listing, create, delete.
//!   All three calls are single-shot futures; the store holds the client as
//!   `Arc<dyn RemoteCatalog>`.
//! - [`HttpRemoteCatalog`] — the production implementation over `reqwest`.
//! - [`InMemoryRemoteCatalog`] — scripted in-memory implementation for
//!   tests/dev.
//! - [`RemoteError`] — the only error kind the data layer surfaces.

pub mod catalog;
pub mod error;
pub mod http;
pub mod memory;

pub use catalog::{PageRequest, RemoteCatalog};
pub use error::RemoteError;
pub use http::{HttpRemoteCatalog, RemoteConfig};
pub use memory::InMemoryRemoteCatalog;
