use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObotError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

pub type Result<T> = std::result::Result<T, ObotError>;
