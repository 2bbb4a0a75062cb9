//! Application error type.

use thiserror::Error;

use crate::theme::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference store error: {0}")]
    Store(#[from] StoreError),
    #[error("home directory could not be determined")]
    MissingHome,
}
