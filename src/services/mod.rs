use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod command;

/// Failures surfaced by service workflows to the route layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid form: {0}")]
    Form(#[from] FormError),

    #[error("profile lookup failed: {0}")]
    Upstream(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
