/// Row identity keys (`text_id`) are PostgreSQL BIGINT.
pub type DbId = i64;

/// Stored label codes are PostgreSQL INTEGER, nullable until annotated.
pub type LabelCode = i32;
