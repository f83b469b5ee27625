//! Request handlers.
//!
//! `tables` serves the annotatable-table listing; `tagging` is the review
//! controller (paginated render plus batch label submission). Handlers
//! delegate to the repositories in `rowtag_db` and map errors via
//! [`crate::error::AppError`].

pub mod tables;
pub mod tagging;
