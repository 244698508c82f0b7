#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid identifier: {raw:?}")]
    InvalidId { raw: String },
}
