//! Artifact serialization and parsing.
//!
//! A compressed artifact packages the frequency map the body was coded with
//! and the body itself:
//! - Header: identifies the format, specifies lengths, includes CRC
//! - Frequency table: the model, entries in insertion order
//! - Payload: code bits, MSB-first
//!
//! # Artifact Format
//!
//! ```text
//! +------------------+
//! | Magic (4 bytes)  |  0x48 0x55 0x46 0x50 ("HUFP")
//! +------------------+
//! | version (1)      |  format version, currently 1
//! +------------------+
//! | entry_count (4)  |  u32 little-endian, frequency table entries
//! +------------------+
//! | payload_len (4)  |  u32 body length in bytes
//! +------------------+
//! | crc32 (4)        |  u32 checksum of everything below the magic
//! +------------------+
//! | frequency table  |  entry_count × 10 bytes
//! | (variable)       |  tag (1) | value (1) | count (8, u64 LE)
//! +------------------+
//! | payload          |  code bits (payload_len bytes, last byte
//! | (variable)       |  zero-padded)
//! +------------------+
//! ```
//!
//! # CRC Coverage
//!
//! The CRC32 covers version, entry_count, payload_len, the frequency table
//! and the payload. This detects corruption in headers or data before the
//! decoder ever sees it.

use crate::error::{Error, FramingError, Result};
use crate::frequency::{FrequencyMap, ENTRY_SIZE};

/// Magic number for artifacts: "HUFP"
pub const MAGIC: [u8; 4] = [0x48, 0x55, 0x46, 0x50];

/// Current artifact format version
pub const VERSION: u8 = 1;

/// Size of the fixed artifact header in bytes
pub const HEADER_SIZE: usize = 17;

/// A parsed artifact.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The model the payload was encoded with
    pub frequencies: FrequencyMap,

    /// Code bits, MSB-first
    pub payload: Vec<u8>,

    /// CRC32 checksum (for validation)
    pub crc32: u32,
}

/// Serialize an artifact.
///
/// # Errors
/// Returns `Error::Config` if the table or payload is too large for the
/// 32-bit length fields.
pub fn serialize_frame(frequencies: &FrequencyMap, payload: &[u8]) -> Result<Vec<u8>> {
    let table = frequencies.serialize_entries();

    let entry_count = u32::try_from(frequencies.len())
        .map_err(|_| Error::Config("frequency table too large".to_string()))?;
    let payload_len = u32::try_from(payload.len())
        .map_err(|_| Error::Config(format!("payload of {} bytes too large", payload.len())))?;

    let crc32 = compute_crc(VERSION, entry_count, payload_len, &table, payload);

    let mut frame = Vec::with_capacity(HEADER_SIZE + table.len() + payload.len());
    frame.extend_from_slice(&MAGIC);
    frame.push(VERSION);
    frame.extend_from_slice(&entry_count.to_le_bytes());
    frame.extend_from_slice(&payload_len.to_le_bytes());
    frame.extend_from_slice(&crc32.to_le_bytes());
    frame.extend_from_slice(&table);
    frame.extend_from_slice(payload);

    Ok(frame)
}

/// Parse an artifact.
///
/// # Errors
/// - `FramingError::FrameTooShort` if the buffer is shorter than announced
/// - `FramingError::InvalidMagic` if magic number doesn't match
/// - `FramingError::UnsupportedVersion` for an unknown version byte
/// - `Error::Crc` if CRC validation fails
/// - Frequency table errors from [`FrequencyMap::deserialize_entries`]
pub fn parse_frame(bytes: &[u8]) -> Result<Frame> {
    if bytes.len() < HEADER_SIZE {
        return Err(FramingError::FrameTooShort {
            required: HEADER_SIZE,
            actual: bytes.len(),
        }
        .into());
    }

    let magic = [bytes[0], bytes[1], bytes[2], bytes[3]];
    if magic != MAGIC {
        return Err(FramingError::InvalidMagic {
            expected: MAGIC,
            actual: magic,
        }
        .into());
    }

    let version = bytes[4];
    if version != VERSION {
        return Err(FramingError::UnsupportedVersion(version).into());
    }

    let entry_count = read_u32(bytes, 5);
    let payload_len = read_u32(bytes, 9);
    let crc32 = read_u32(bytes, 13);

    let table_len = entry_count as usize * ENTRY_SIZE;
    let expected_size = HEADER_SIZE + table_len + payload_len as usize;
    if bytes.len() != expected_size {
        return Err(FramingError::FrameTooShort {
            required: expected_size,
            actual: bytes.len(),
        }
        .into());
    }

    let table = &bytes[HEADER_SIZE..HEADER_SIZE + table_len];
    let payload = &bytes[HEADER_SIZE + table_len..];

    let computed_crc = compute_crc(version, entry_count, payload_len, table, payload);
    if computed_crc != crc32 {
        return Err(Error::Crc {
            expected: crc32,
            actual: computed_crc,
        });
    }

    let frequencies = FrequencyMap::deserialize_entries(table)?;

    Ok(Frame {
        frequencies,
        payload: payload.to_vec(),
        crc32,
    })
}

/// Size of the artifact header (fixed part plus frequency table) for a map.
pub fn header_len(frequencies: &FrequencyMap) -> usize {
    HEADER_SIZE + frequencies.len() * ENTRY_SIZE
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Compute CRC32 over the protected fields.
fn compute_crc(version: u8, entry_count: u32, payload_len: u32, table: &[u8], payload: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();

    hasher.update(&[version]);
    hasher.update(&entry_count.to_le_bytes());
    hasher.update(&payload_len.to_le_bytes());

    hasher.update(table);
    hasher.update(payload);

    hasher.finalize()
}
