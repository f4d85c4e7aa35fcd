//! Bit-level encoding of the body.

use crate::bitio::{BitCounter, BitSink};
use crate::code_table::{Code, CodeTable};
use crate::error::{HuffmanError, Result};
use crate::symbol::Symbol;

/// What an encoding pass emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoding {
    /// Number of bits emitted, end-of-stream code included
    pub bit_count: usize,
    /// The emitted bits as `'0'` / `'1'` characters
    pub bits: String,
}

/// Rewrites bytes as code bits.
pub struct BitEncoder;

impl BitEncoder {
    /// Emit the code of every input byte, then the end-of-stream code, onto `sink`.
    ///
    /// # Errors
    /// Returns `HuffmanError::MissingCode` if the table has no code for an
    /// input byte or for the end-of-stream marker.
    pub fn encode<S: BitSink>(input: &[u8], table: &CodeTable, sink: &mut S) -> Result<Encoding> {
        let mut encoding = Encoding::default();

        for &byte in input {
            emit(lookup(table, Symbol::Byte(byte))?, sink, &mut encoding);
        }
        emit(lookup(table, Symbol::EndOfStream)?, sink, &mut encoding);

        log::debug!("encoded {} bytes into {} bits", input.len(), encoding.bit_count);
        Ok(encoding)
    }

    /// Compute what [`BitEncoder::encode`] would emit, without a live sink.
    pub fn measure(input: &[u8], table: &CodeTable) -> Result<Encoding> {
        let mut counter = BitCounter::new();
        let encoding = Self::encode(input, table, &mut counter)?;
        debug_assert_eq!(counter.bit_len(), encoding.bit_count);
        Ok(encoding)
    }
}

fn lookup(table: &CodeTable, symbol: Symbol) -> Result<&Code> {
    table
        .get(symbol)
        .ok_or_else(|| HuffmanError::MissingCode { symbol }.into())
}

fn emit<S: BitSink>(code: &Code, sink: &mut S, encoding: &mut Encoding) {
    for &bit in code.bits() {
        sink.write_bit(bit);
        encoding.bits.push(if bit { '1' } else { '0' });
    }
    encoding.bit_count += code.len();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitio::BitWriter;
    use crate::error::Error;
    use crate::frequency::FrequencyMap;
    use crate::tree::HuffmanTree;

    fn table_for(input: &[u8]) -> CodeTable {
        CodeTable::from_tree(&HuffmanTree::build(&FrequencyMap::from_bytes(input)).unwrap())
    }

    #[test]
    fn test_known_vector() {
        let table = table_for(b"aaab");
        let mut writer = BitWriter::new();

        let encoding = BitEncoder::encode(b"aaab", &table, &mut writer).unwrap();

        assert_eq!(encoding.bits, "1110001");
        assert_eq!(encoding.bit_count, 7);
        assert_eq!(writer.bit_len(), 7);
        assert_eq!(writer.finish(), vec![0b1110_0010]);
    }

    #[test]
    fn test_measure_matches_encode() {
        let input = b"a man, a plan, a canal: panama";
        let table = table_for(input);
        let mut writer = BitWriter::new();

        let live = BitEncoder::encode(input, &table, &mut writer).unwrap();
        let dry = BitEncoder::measure(input, &table).unwrap();

        assert_eq!(live, dry);
    }

    #[test]
    fn test_empty_input_emits_only_end_of_stream() {
        let table = table_for(b"");
        let encoding = BitEncoder::measure(b"", &table).unwrap();

        assert_eq!(encoding.bits, "0");
        assert_eq!(encoding.bit_count, 1);
    }

    #[test]
    fn test_missing_code() {
        let table = table_for(b"abc");
        let result = BitEncoder::measure(b"abd", &table);

        assert!(matches!(
            result,
            Err(Error::Huffman(HuffmanError::MissingCode {
                symbol: Symbol::Byte(b'd')
            }))
        ));
    }
}
