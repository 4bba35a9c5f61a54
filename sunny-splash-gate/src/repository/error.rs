#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Conditional update matched no document. The document either
    /// does not exist or was already past the state the filter
    /// required.
    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
