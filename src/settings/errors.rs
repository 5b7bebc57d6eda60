use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Failed to parse settings: {0}.")]
    ParseError(String),

    #[error("Unsupported settings format: {0}.")]
    UnsupportedFormat(String),

    #[error("Invalid setting: {0}.")]
    InvalidSetting(String),
}
