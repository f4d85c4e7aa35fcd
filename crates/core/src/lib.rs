//! huffpack-core: static Huffman compression
//!
//! This library implements the classical two-pass Huffman codec:
//! - Counts byte frequencies and appends an end-of-stream marker
//! - Builds a prefix-code tree with a deterministic tie-break
//! - Derives a per-symbol code table from the tree paths
//! - Encodes/decodes the body bit by bit, stopping at the end-of-stream code
//! - Persists the frequency table as the artifact header
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `symbol`: literal bytes and the end-of-stream marker
//! - `frequency`: frequency map and input loading
//! - `tree`: tree construction
//! - `code_table`: symbol → bit path
//! - `encoder` / `decoder`: bit-level body codec
//! - `bitio`: bit sink/source traits and MSB-first byte buffers
//! - `framing`: artifact header serialization
//! - `codec`: compress/decompress pipelines
//! - `naming`: derived file names
//! - `metrics`: per-call statistics
//!
//! # Example
//! ```
//! use huffpack_core::codec::{compress_bytes, decompress_bytes};
//!
//! let compressed = compress_bytes(b"aaab").unwrap();
//! assert_eq!(compressed.bits(), "1110001");
//!
//! let restored = decompress_bytes(&compressed.artifact).unwrap();
//! assert_eq!(restored.bytes, b"aaab");
//! ```
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Deterministic**: The same frequency table always yields the same tree
//! - **Owned trees**: Each call builds, uses and drops its own tree

pub mod bitio;
pub mod code_table;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod framing;
pub mod frequency;
pub mod metrics;
pub mod naming;
pub mod symbol;
pub mod tree;

// Re-export commonly used types
pub use code_table::{Code, CodeTable};
pub use codec::{compress, compress_bytes, decompress, decompress_bytes, estimate_bytes};
pub use error::{Error, Result};
pub use frequency::FrequencyMap;
pub use symbol::Symbol;
pub use tree::{HuffmanNode, HuffmanTree};
