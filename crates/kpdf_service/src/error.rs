use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Storage error: {0}")]
    Storage(#[source] kpdf_db::Error),
}

impl From<kpdf_db::Error> for Error {
    fn from(err: kpdf_db::Error) -> Self {
        match err {
            kpdf_db::Error::NotFound(id) => Error::NotFound(id),
            other => Error::Storage(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
