//! `storefront-core` — catalog domain model.
//!
//! This crate contains the **pure domain** types shared by the rest of the
//! workspace (no IO, no HTTP, no channels).

pub mod error;
pub mod product;

pub use error::{DomainError, DomainResult};
pub use product::{Product, ProductDraft};
