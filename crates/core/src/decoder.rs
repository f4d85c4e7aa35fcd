//! Bit-level decoding of the body.
//!
//! The decoder walks the tree one bit at a time and stops at the
//! end-of-stream leaf, so it never needs to know the body length and never
//! reads the padding after the last code.

use crate::bitio::BitSource;
use crate::error::{HuffmanError, Result};
use crate::symbol::Symbol;
use crate::tree::{HuffmanNode, HuffmanTree};

/// Output of a decoding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoding {
    pub bytes: Vec<u8>,
    /// Bits consumed, end-of-stream code included
    pub bits_read: usize,
}

impl Decoding {
    /// The decoded bytes as text (invalid UTF-8 is replaced).
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Turns code bits back into bytes.
pub struct BitDecoder;

impl BitDecoder {
    /// Decode symbols from `source` until the end-of-stream leaf.
    ///
    /// # Errors
    /// - `HuffmanError::TruncatedStream` if the source runs out first
    /// - `HuffmanError::InvalidCode` if a single-leaf body holds a `1` bit
    pub fn decode<S: BitSource>(source: &mut S, tree: &HuffmanTree) -> Result<Decoding> {
        let mut decoding = Decoding::default();

        loop {
            let symbol = if tree.is_single_leaf() {
                next_single(source, tree.root(), &mut decoding.bits_read)?
            } else {
                next_symbol(source, tree.root(), &mut decoding.bits_read)?
            };

            match symbol {
                Symbol::EndOfStream => break,
                Symbol::Byte(byte) => decoding.bytes.push(byte),
            }
        }

        log::debug!(
            "decoded {} bytes from {} bits",
            decoding.bytes.len(),
            decoding.bits_read
        );
        Ok(decoding)
    }
}

fn read<S: BitSource>(source: &mut S, bits_read: &mut usize) -> Result<bool> {
    if source.eof() {
        return Err(HuffmanError::TruncatedStream {
            bits_read: *bits_read,
        }
        .into());
    }
    let bit = source.read_bit()?;
    *bits_read += 1;
    Ok(bit)
}

/// Descend from the root to a leaf.
fn next_symbol<S: BitSource>(
    source: &mut S,
    root: &HuffmanNode,
    bits_read: &mut usize,
) -> Result<Symbol> {
    let mut node = root;
    loop {
        match node {
            HuffmanNode::Leaf { symbol, .. } => return Ok(*symbol),
            HuffmanNode::Internal { zero, one, .. } => {
                node = if read(source, bits_read)? { one } else { zero };
            }
        }
    }
}

/// The lone leaf of a single-leaf tree owns the one-bit code `0`.
fn next_single<S: BitSource>(
    source: &mut S,
    root: &HuffmanNode,
    bits_read: &mut usize,
) -> Result<Symbol> {
    let position = *bits_read;
    if read(source, bits_read)? {
        return Err(HuffmanError::InvalidCode { position }.into());
    }
    root.symbol()
        .ok_or_else(|| HuffmanError::InvalidCode { position }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitio::{BitReader, BitSink, BitWriter};
    use crate::code_table::CodeTable;
    use crate::encoder::BitEncoder;
    use crate::error::Error;
    use crate::frequency::FrequencyMap;

    fn encode(input: &[u8]) -> (HuffmanTree, Vec<u8>) {
        let tree = HuffmanTree::build(&FrequencyMap::from_bytes(input)).unwrap();
        let table = CodeTable::from_tree(&tree);
        let mut writer = BitWriter::new();
        BitEncoder::encode(input, &table, &mut writer).unwrap();
        (tree, writer.finish())
    }

    #[test]
    fn test_known_vector() {
        let (tree, body) = encode(b"aaab");
        let decoding = BitDecoder::decode(&mut BitReader::new(&body), &tree).unwrap();

        assert_eq!(decoding.bytes, b"aaab");
        assert_eq!(decoding.as_string(), "aaab");
        assert_eq!(decoding.bits_read, 7);
    }

    #[test]
    fn test_padding_is_never_read() {
        // 7 bits of body, 1 bit of padding
        let (tree, body) = encode(b"aaab");
        let mut reader = BitReader::new(&body);

        BitDecoder::decode(&mut reader, &tree).unwrap();
        assert_eq!(reader.bits_remaining(), 1);
    }

    #[test]
    fn test_empty_body_round_trip() {
        let (tree, body) = encode(b"");
        assert_eq!(body, vec![0]);

        let decoding = BitDecoder::decode(&mut BitReader::new(&body), &tree).unwrap();
        assert!(decoding.bytes.is_empty());
        assert_eq!(decoding.bits_read, 1);
    }

    #[test]
    fn test_truncated_body() {
        let input = b"this body will be cut short";
        let (tree, body) = encode(input);
        let truncated = &body[..body.len() / 2];

        let result = BitDecoder::decode(&mut BitReader::new(truncated), &tree);
        assert!(matches!(
            result,
            Err(Error::Huffman(HuffmanError::TruncatedStream { .. }))
        ));
    }

    #[test]
    fn test_no_bits_at_all() {
        let (tree, _) = encode(b"abc");
        let result = BitDecoder::decode(&mut BitReader::new(&[]), &tree);

        assert!(matches!(
            result,
            Err(Error::Huffman(HuffmanError::TruncatedStream { bits_read: 0 }))
        ));
    }

    #[test]
    fn test_single_leaf_rejects_one_bit() {
        let (tree, _) = encode(b"");
        let mut writer = BitWriter::new();
        writer.write_bit(true);
        let body = writer.finish();

        let result = BitDecoder::decode(&mut BitReader::new(&body), &tree);
        assert!(matches!(
            result,
            Err(Error::Huffman(HuffmanError::InvalidCode { position: 0 }))
        ));
    }

    #[test]
    fn test_binary_data() {
        let input: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).chain([0, 0, 0, 255]).collect();
        let (tree, body) = encode(&input);

        let decoding = BitDecoder::decode(&mut BitReader::new(&body), &tree).unwrap();
        assert_eq!(decoding.bytes, input);
    }
}
