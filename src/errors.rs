// errors.rs
use thiserror::Error;

use crate::templates::TemplateError;

/// Errors raised while serving a request, either by routing itself
/// or by a downstream layer (store, templates).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Template Error: {0}")]
    Template(#[from] TemplateError),

    #[error("Internal Server Error")]
    InternalError,
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}
