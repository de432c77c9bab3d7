use thiserror::Error;

pub type Result<T> = std::result::Result<T, DnsError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    #[error("buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    #[error("unexpected end of data at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("label too long: {length} bytes exceeds maximum of 63")]
    LabelTooLong { length: usize },

    #[error("empty label in name {name:?}")]
    EmptyLabel { name: String },

    #[error("name too long: {length} bytes exceeds maximum of 255")]
    NameTooLong { length: usize },

    #[error("compression pointer or extended label at offset {offset} is not supported")]
    CompressionPointer { offset: usize },

    #[error("format error: {0}")]
    Format(String),
}
