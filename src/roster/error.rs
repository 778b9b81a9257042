use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Employee already exists: {0}")]
    DuplicateName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
