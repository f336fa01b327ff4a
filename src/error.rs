use thiserror::Error;

/// Configuration errors, reported before any input is generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("input size {size} is not positive")]
    NonPositiveSize { size: i64 },

    #[error("input size {size} does not fit in memory on this platform")]
    SizeTooLarge { size: i64 },

    #[error("input size {size} is not supported (expected one of {supported:?})")]
    UnsupportedSize { size: i64, supported: &'static [i64] },

    #[error("no input sizes configured")]
    NoSizes,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
