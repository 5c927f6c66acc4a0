/// Errors that can occur while encoding or decoding binary primitives
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The byte count is not an exact multiple of the element width
    #[error("Size mismatch: {size} bytes is not a multiple of the {width}-byte element width")]
    SizeMismatch {
        /// Number of bytes supplied
        size: usize,
        /// Width of one element in bytes
        width: usize,
    },

    /// A 2-D array could not be split into the requested number of rows
    #[error("Cannot shape {elements} elements into {rows} rows")]
    RowMismatch {
        /// Number of decoded elements
        elements: usize,
        /// Requested row count
        rows: usize,
    },

    /// Rows of a 2-D array have different lengths
    #[error("Ragged 2-D array: row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// A size prefix was negative or does not fit in the prefix field
    #[error("Invalid size prefix: {0}")]
    InvalidSizePrefix(i64),

    /// String payload is not valid UTF-16
    #[error("Invalid UTF-16 string payload")]
    InvalidString(#[from] std::string::FromUtf16Error),

    /// Compressed payload could not be inflated
    #[error("Decompression error: {0}")]
    Decompression(#[source] std::io::Error),

    /// I/O error while reading or writing a stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
