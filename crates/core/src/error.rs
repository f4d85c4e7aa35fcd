//! Error types for huffpack.
//!
//! All operations return structured errors rather than panicking.
//! A corrupted or truncated artifact surfaces as an error value, never as
//! undefined decoder state.

use crate::symbol::Symbol;
use thiserror::Error;

/// Top-level error type for all operations in the crate.
///
/// Each variant corresponds to a specific failure domain:
/// - Bit I/O: reading/writing bits from/to byte buffers
/// - Huffman: tree construction or encode/decode failures
/// - Framing: artifact header serialization/parsing
/// - CRC: data corruption detected
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Huffman codec error (e.g., empty frequency table, truncated body)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Artifact framing error (e.g., invalid magic, malformed entry)
    #[error("framing error: {0}")]
    Framing(#[from] FramingError),

    /// CRC validation failed, indicating data corruption
    #[error("CRC mismatch: expected {expected:#010x}, got {actual:#010x}")]
    Crc { expected: u32, actual: u32 },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the buffer
    #[error("unexpected end of bit stream")]
    UnexpectedEof,
}

/// Huffman codec errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// No entries in the frequency map (cannot build a tree)
    #[error("empty frequency table: cannot build tree")]
    EmptyFrequencyTable,

    /// A frequency entry carries a zero count
    #[error("symbol {symbol} has zero weight")]
    ZeroWeight { symbol: Symbol },

    /// Summing two subtree weights overflowed
    #[error("combined weight overflows u64")]
    WeightOverflow,

    /// The code table has no entry for a symbol found in the input
    #[error("no code for symbol {symbol}")]
    MissingCode { symbol: Symbol },

    /// The bit source ran dry before the end-of-stream marker was decoded
    #[error("bit stream ended after {bits_read} bits without an end-of-stream marker")]
    TruncatedStream { bits_read: usize },

    /// Decoded length doesn't match the counts in the frequency table
    #[error("decoded length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: u64, actual: u64 },

    /// A bit sequence that does not lead to any leaf
    #[error("invalid huffman code at bit position {position}")]
    InvalidCode { position: usize },
}

/// Artifact framing errors.
#[derive(Debug, Error)]
pub enum FramingError {
    /// Invalid magic number in header
    #[error("invalid magic number: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Format version this build does not understand
    #[error("unsupported format version {0}")]
    UnsupportedVersion(u8),

    /// Artifact is too short to contain the header it announces
    #[error("artifact too short: need at least {required} bytes, got {actual}")]
    FrameTooShort { required: usize, actual: usize },

    /// Frequency table length disagrees with the entry count in the header
    #[error("frequency table length mismatch: header says {expected}, got {actual}")]
    MetadataLengthMismatch { expected: usize, actual: usize },

    /// Entry tag byte is neither a literal nor the end-of-stream marker
    #[error("unknown symbol tag {tag:#04x} in entry {index}")]
    UnknownSymbolTag { index: usize, tag: u8 },

    /// The same symbol appears twice in the frequency table
    #[error("duplicate symbol {symbol} in frequency table")]
    DuplicateSymbol { symbol: Symbol },

    /// A frequency entry with count zero
    #[error("symbol {symbol} has zero count")]
    ZeroCount { symbol: Symbol },

    /// The frequency table lacks the end-of-stream entry
    #[error("frequency table has no end-of-stream entry")]
    MissingEndOfStream,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
