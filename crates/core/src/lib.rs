//! Domain logic for the row annotation service.
//!
//! Pure, I/O-free building blocks: the label codec, pagination arithmetic,
//! shared type aliases, and the domain error type. The `rowtag-db` and
//! `rowtag-api` crates build on these.

pub mod error;
pub mod labels;
pub mod pagination;
pub mod types;
