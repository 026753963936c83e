//! Catalog domain module.
//!
//! Self-validating primitives and the aggregates built from them, implemented
//! purely as deterministic domain logic (no IO, no storage). Every type here is
//! valid by construction: once a value exists, callers can rely on it without
//! checking it again.

pub mod book;
pub mod isbn;
pub mod metadata;
pub mod student;

pub use book::Book;
pub use isbn::{Isbn, IsbnKind};
pub use metadata::Metadata;
pub use student::Student;
