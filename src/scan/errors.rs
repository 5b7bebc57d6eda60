use thiserror::Error;

/// Which part of an entry appeared more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    ShortFlag,
    LongFlag,
    DataType,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FieldKind::ShortFlag => "short flag",
            FieldKind::LongFlag => "long flag",
            FieldKind::DataType => "data type",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("Unknown argument type: {0}.")]
    UnknownArgType(String),

    #[error("Only one {kind} allowed: {entry}.")]
    AmbiguousEntry { kind: FieldKind, entry: String },

    #[error("Flag in use for multiple options: {0}.")]
    FlagCollision(String),

    #[error("Long flag without short flag: {0}.")]
    MissingShortFlag(String),

    #[error("Empty declaration: '{0}'.")]
    EmptyEntry(String),
}
