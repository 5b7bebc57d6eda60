use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Failed to serialize declarations: {0}.")]
    SerializeError(String),
}
