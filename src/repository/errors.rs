use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Client setup error: {0}")]
    Setup(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else if err.is_builder() {
            RepositoryError::Setup(err.to_string())
        } else if err.is_timeout() {
            RepositoryError::Transport(format!("request timed out: {err}"))
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}
