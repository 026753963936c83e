//! `shelfguard-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model shared by every validating constructor, and the marker traits
//! that distinguish value objects from entities.

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, FormatViolation};
pub use value_object::ValueObject;
