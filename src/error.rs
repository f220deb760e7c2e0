use thiserror::Error;

pub type Result<T, E = TrackerError> = std::result::Result<T, E>;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("issue #{0} not found")]
    NotFound(i64),
}
