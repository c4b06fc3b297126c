//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): the domain error taxonomy and the field validation rules shared
//! by every layer that accepts item input.

pub mod error;
pub mod validate;

pub use error::{DomainError, DomainResult};
