//! Compression and decompression pipelines.
//!
//! Compression: count → build tree → derive codes → write header → encode body.
//! Decompression: parse header → rebuild tree → decode body.
//!
//! Each call owns its frequency map, tree and code table; none of them
//! outlive the call. The tree is dropped as soon as its last user is done:
//! right after the code table is derived when compressing, right after the
//! body is decoded when decompressing.

use std::path::Path;

use crate::bitio::{BitReader, BitWriter};
use crate::code_table::CodeTable;
use crate::decoder::BitDecoder;
use crate::encoder::{BitEncoder, Encoding};
use crate::error::{HuffmanError, Result};
use crate::framing::{header_len, parse_frame, serialize_frame};
use crate::frequency::FrequencyMap;
use crate::metrics::CompressionStats;
use crate::naming::{compressed_path, decompressed_path};
use crate::tree::HuffmanTree;

/// Result of compressing one input.
#[derive(Debug, Clone)]
pub struct Compressed {
    /// Header plus body, ready to persist
    pub artifact: Vec<u8>,
    /// The body bits, for verification
    pub encoding: Encoding,
    pub codes: CodeTable,
    pub stats: CompressionStats,
}

impl Compressed {
    /// The emitted body as `'0'` / `'1'` characters.
    pub fn bits(&self) -> &str {
        &self.encoding.bits
    }
}

/// Result of a dry run: what compression would produce, without an artifact.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub encoding: Encoding,
    pub codes: CodeTable,
    pub stats: CompressionStats,
}

/// Result of decompressing one artifact.
#[derive(Debug, Clone)]
pub struct Decompressed {
    pub bytes: Vec<u8>,
    pub stats: CompressionStats,
}

impl Decompressed {
    /// The decoded content as text (invalid UTF-8 is replaced).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Derive the code table for a counted input. The tree is dropped on return.
fn code_table(frequencies: &FrequencyMap) -> Result<CodeTable> {
    let tree = HuffmanTree::build(frequencies)?;
    Ok(CodeTable::from_tree(&tree))
}

fn model_stats(input: &[u8], frequencies: &FrequencyMap, codes: &CodeTable) -> CompressionStats {
    let mut stats = CompressionStats::new();
    stats.input_bytes = input.len() as u64;
    stats.distinct_symbols = frequencies.len();
    stats.max_code_len = codes.max_code_len();
    stats.header_bytes = header_len(frequencies) as u64;
    stats
}

/// Compress `input` into an artifact.
pub fn compress_bytes(input: &[u8]) -> Result<Compressed> {
    compress_counted(input, FrequencyMap::from_bytes(input))
}

fn compress_counted(input: &[u8], frequencies: FrequencyMap) -> Result<Compressed> {
    let codes = code_table(&frequencies)?;
    let mut stats = model_stats(input, &frequencies, &codes);

    let mut writer = BitWriter::new();
    let encoding = BitEncoder::encode(input, &codes, &mut writer)?;
    let artifact = serialize_frame(&frequencies, &writer.finish())?;

    stats.body_bits = encoding.bit_count as u64;
    stats.artifact_bytes = artifact.len() as u64;
    stats.complete();

    Ok(Compressed {
        artifact,
        encoding,
        codes,
        stats,
    })
}

/// Compute what [`compress_bytes`] would produce without building the artifact.
pub fn estimate_bytes(input: &[u8]) -> Result<Estimate> {
    let frequencies = FrequencyMap::from_bytes(input);
    let codes = code_table(&frequencies)?;
    let mut stats = model_stats(input, &frequencies, &codes);

    let encoding = BitEncoder::measure(input, &codes)?;

    stats.body_bits = encoding.bit_count as u64;
    stats.artifact_bytes = stats.header_bytes + stats.body_bytes();
    stats.complete();

    Ok(Estimate {
        encoding,
        codes,
        stats,
    })
}

/// Restore the original bytes from an artifact.
///
/// # Errors
/// - Framing and CRC errors from [`parse_frame`]
/// - `HuffmanError::TruncatedStream` / `InvalidCode` from the decoder
/// - `HuffmanError::LengthMismatch` if the output disagrees with the header counts
pub fn decompress_bytes(artifact: &[u8]) -> Result<Decompressed> {
    let mut stats = CompressionStats::new();
    let frame = parse_frame(artifact)?;

    let tree = HuffmanTree::build(&frame.frequencies)?;
    let decoding = BitDecoder::decode(&mut BitReader::new(&frame.payload), &tree)?;
    drop(tree);

    let expected = frame.frequencies.literal_total();
    let actual = decoding.bytes.len() as u64;
    if expected != actual {
        return Err(HuffmanError::LengthMismatch { expected, actual }.into());
    }

    stats.input_bytes = actual;
    stats.distinct_symbols = frame.frequencies.len();
    stats.header_bytes = header_len(&frame.frequencies) as u64;
    stats.body_bits = decoding.bits_read as u64;
    stats.artifact_bytes = artifact.len() as u64;
    stats.complete();

    Ok(Decompressed {
        bytes: decoding.bytes,
        stats,
    })
}

/// Compress the file called `name` (or, if there is none, the text of `name`)
/// and write the artifact to `name.huf`.
pub fn compress(name: &str) -> Result<Compressed> {
    compress_to(name, &compressed_path(name))
}

/// Like [`compress`], writing the artifact to `output`.
pub fn compress_to(name: &str, output: &Path) -> Result<Compressed> {
    let (frequencies, input) = FrequencyMap::from_source(name);
    log::debug!("compressing {:?} ({} bytes)", name, input.len());

    let compressed = compress_counted(&input, frequencies)?;
    std::fs::write(output, &compressed.artifact)?;

    log::info!(
        "wrote {} ({} -> {} bytes)",
        output.display(),
        input.len(),
        compressed.artifact.len()
    );
    Ok(compressed)
}

/// Decompress the artifact file `name` and write the output next to it
/// (`example.txt.huf` → `example_unc.txt`).
pub fn decompress(name: &str) -> Result<Decompressed> {
    decompress_to(name, &decompressed_path(name))
}

/// Like [`decompress`], writing the output to `output`.
pub fn decompress_to(name: &str, output: &Path) -> Result<Decompressed> {
    let artifact = std::fs::read(name)?;
    let decompressed = decompress_bytes(&artifact)?;
    std::fs::write(output, &decompressed.bytes)?;

    log::info!(
        "wrote {} ({} -> {} bytes)",
        output.display(),
        artifact.len(),
        decompressed.bytes.len()
    );
    Ok(decompressed)
}
