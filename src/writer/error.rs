use crate::binary::CodecError;

/// Errors that can occur during writing
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error encoding or decoding a field
    #[error("Encoding error: {0}")]
    CodecError(#[from] CodecError),

    /// Invalid data provided to the writer
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The file is not a scan file or is damaged
    #[error("Invalid scan file: {0}")]
    InvalidFormat(String),
}
