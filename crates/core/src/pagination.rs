//! Offset arithmetic for paged table review.
//!
//! Offset-based pagination is only stable when the fetch uses a fixed sort
//! key; the data access layer orders by `text_id` ascending to match.

/// Clamp a user-provided page number to valid bounds.
///
/// Pages are 1-based; a missing or sub-1 value clamps to the first page.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Row offset of a page: `per_page * (page - 1)`.
pub fn offset(page: i64, per_page: i64) -> i64 {
    per_page * (page - 1)
}

/// Total page count, `ceil(total_rows / per_page)`.
///
/// Display affordance only; fetch correctness never depends on it.
pub fn total_pages(total_rows: i64, per_page: i64) -> i64 {
    (total_rows + per_page - 1) / per_page
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
