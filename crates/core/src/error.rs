use crate::types::LabelCode;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown label: {label}")]
    UnknownLabel { label: String },

    #[error("Unknown label code: {code}")]
    UnknownCode { code: LabelCode },

    #[error("Unknown table: {name}")]
    UnknownTable { name: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
