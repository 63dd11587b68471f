use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Document store error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Document store returned a non-ObjectId insert id")]
    UnexpectedInsertId,
}
