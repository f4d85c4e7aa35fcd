//! Frequency analysis.
//!
//! A [`FrequencyMap`] is the model both halves of the codec agree on: the
//! compressor builds it from the input, persists it verbatim as the artifact
//! header, and the decompressor rebuilds the same tree from the parsed copy.
//!
//! Entry order is part of the model. Keys are kept in insertion order
//! (first occurrence in the input, end-of-stream last) and that order is the
//! tree builder's tie-break, so it must survive serialization unchanged.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{FramingError, Result};
use crate::symbol::Symbol;

/// Size of one serialized entry: tag (1) + value (1) + count (8).
pub const ENTRY_SIZE: usize = 10;

const TAG_BYTE: u8 = 0;
const TAG_END_OF_STREAM: u8 = 1;

/// Insertion-ordered symbol → count mapping with unique keys.
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    entries: Vec<(Symbol, u64)>,
    /// Position of each key in `entries`
    index: HashMap<Symbol, usize>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every byte of `bytes` and append the end-of-stream entry.
    ///
    /// Empty input still yields a usable map: `{EOF: 1}`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut map = Self::new();
        for &byte in bytes {
            let symbol = Symbol::Byte(byte);
            let count = map.get(symbol).unwrap_or(0);
            map.put(symbol, count + 1);
        }
        map.put(Symbol::EndOfStream, 1);

        log::debug!(
            "counted {} bytes, {} distinct symbols",
            bytes.len(),
            map.len()
        );
        map
    }

    /// Count the file called `name`, or the text of `name` itself when no
    /// readable file has that name.
    ///
    /// The counted bytes are returned alongside the map so the encoder
    /// consumes exactly what was counted.
    pub fn from_source(name: &str) -> (Self, Vec<u8>) {
        let (bytes, _) = load_source(name);
        (Self::from_bytes(&bytes), bytes)
    }

    /// Insert or overwrite a count. Overwriting keeps the key's original position.
    pub fn put(&mut self, symbol: Symbol, count: u64) {
        match self.index.get(&symbol) {
            Some(&pos) => self.entries[pos].1 = count,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, count));
            }
        }
    }

    pub fn get(&self, symbol: Symbol) -> Option<u64> {
        self.index.get(&symbol).map(|&pos| self.entries[pos].1)
    }

    pub fn contains_key(&self, symbol: Symbol) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.entries.iter().map(|&(symbol, _)| symbol)
    }

    /// `(symbol, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all literal byte counts, i.e. the length of the counted input.
    pub fn literal_total(&self) -> u64 {
        self.entries
            .iter()
            .filter(|(symbol, _)| !symbol.is_end_of_stream())
            .map(|&(_, count)| count)
            .sum()
    }

    /// Serialize entries in insertion order.
    ///
    /// Each entry is `tag (u8) | value (u8) | count (u64 LE)`, tag 0 for a
    /// literal byte and 1 for end-of-stream (value 0).
    pub fn serialize_entries(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.entries.len() * ENTRY_SIZE);
        for &(symbol, count) in &self.entries {
            match symbol {
                Symbol::Byte(b) => out.extend_from_slice(&[TAG_BYTE, b]),
                Symbol::EndOfStream => out.extend_from_slice(&[TAG_END_OF_STREAM, 0]),
            }
            out.extend_from_slice(&count.to_le_bytes());
        }
        out
    }

    /// Parse entries written by [`FrequencyMap::serialize_entries`].
    ///
    /// # Errors
    /// - `FramingError::MetadataLengthMismatch` if `bytes` is not a whole number of entries
    /// - `FramingError::UnknownSymbolTag` for a tag other than 0 or 1
    /// - `FramingError::DuplicateSymbol` if a key repeats
    /// - `FramingError::ZeroCount` for a zero count
    /// - `FramingError::MissingEndOfStream` if no end-of-stream entry is present
    pub fn deserialize_entries(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % ENTRY_SIZE != 0 {
            return Err(FramingError::MetadataLengthMismatch {
                expected: bytes.len() / ENTRY_SIZE * ENTRY_SIZE,
                actual: bytes.len(),
            }
            .into());
        }

        let mut map = Self::new();
        for (index, entry) in bytes.chunks_exact(ENTRY_SIZE).enumerate() {
            let symbol = match entry[0] {
                TAG_BYTE => Symbol::Byte(entry[1]),
                TAG_END_OF_STREAM => Symbol::EndOfStream,
                tag => return Err(FramingError::UnknownSymbolTag { index, tag }.into()),
            };

            let mut count_bytes = [0u8; 8];
            count_bytes.copy_from_slice(&entry[2..]);
            let count = u64::from_le_bytes(count_bytes);

            if count == 0 {
                return Err(FramingError::ZeroCount { symbol }.into());
            }
            if map.contains_key(symbol) {
                return Err(FramingError::DuplicateSymbol { symbol }.into());
            }
            map.put(symbol, count);
        }

        if !map.contains_key(Symbol::EndOfStream) {
            return Err(FramingError::MissingEndOfStream.into());
        }

        Ok(map)
    }
}

impl PartialEq for FrequencyMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for FrequencyMap {}

/// Where the counted bytes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Contents of the named file
    File,
    /// The name itself, because no readable file has that name
    Literal,
}

/// Resolve `name` to input bytes.
///
/// If `name` is a readable file its contents are returned; otherwise the
/// bytes of `name` itself stand in as the content.
pub fn load_source(name: &str) -> (Vec<u8>, SourceKind) {
    match std::fs::read(Path::new(name)) {
        Ok(bytes) => (bytes, SourceKind::File),
        Err(err) => {
            log::warn!("{:?} is not a readable file ({}), using the name as content", name, err);
            (name.as_bytes().to_vec(), SourceKind::Literal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_counts_and_end_of_stream() {
        let map = FrequencyMap::from_bytes(b"aaab");

        assert_eq!(map.get(Symbol::Byte(b'a')), Some(3));
        assert_eq!(map.get(Symbol::Byte(b'b')), Some(1));
        assert_eq!(map.get(Symbol::EndOfStream), Some(1));
        assert_eq!(map.len(), 3);
        assert_eq!(map.literal_total(), 4);
    }

    #[test]
    fn test_insertion_order_is_first_occurrence() {
        let map = FrequencyMap::from_bytes(b"cabbac");
        let keys: Vec<_> = map.keys().collect();

        assert_eq!(
            keys,
            vec![
                Symbol::Byte(b'c'),
                Symbol::Byte(b'a'),
                Symbol::Byte(b'b'),
                Symbol::EndOfStream
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let map = FrequencyMap::from_bytes(b"");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(Symbol::EndOfStream), Some(1));
        assert_eq!(map.literal_total(), 0);
    }

    #[test]
    fn test_put_overwrites_in_place() {
        let mut map = FrequencyMap::new();
        map.put(Symbol::Byte(1), 5);
        map.put(Symbol::Byte(2), 6);
        map.put(Symbol::Byte(1), 9);

        assert_eq!(map.iter().collect::<Vec<_>>(), vec![(Symbol::Byte(1), 9), (Symbol::Byte(2), 6)]);
        assert!(map.contains_key(Symbol::Byte(2)));
        assert!(!map.contains_key(Symbol::EndOfStream));
    }

    #[test]
    fn test_serialize_round_trip_keeps_order() {
        let map = FrequencyMap::from_bytes(b"zyx zyx \x00\xff");
        let bytes = map.serialize_entries();
        assert_eq!(bytes.len(), map.len() * ENTRY_SIZE);

        let parsed = FrequencyMap::deserialize_entries(&bytes).unwrap();
        assert_eq!(parsed, map);
        assert_eq!(parsed.keys().collect::<Vec<_>>(), map.keys().collect::<Vec<_>>());
    }

    #[test]
    fn test_deserialize_rejects_bad_tag() {
        let mut bytes = FrequencyMap::from_bytes(b"a").serialize_entries();
        bytes[0] = 7;

        let result = FrequencyMap::deserialize_entries(&bytes);
        assert!(matches!(
            result,
            Err(Error::Framing(FramingError::UnknownSymbolTag { index: 0, tag: 7 }))
        ));
    }

    #[test]
    fn test_deserialize_rejects_duplicate() {
        let mut map = FrequencyMap::new();
        map.put(Symbol::Byte(b'a'), 2);
        let mut bytes = map.serialize_entries();
        bytes.extend(map.serialize_entries());

        let result = FrequencyMap::deserialize_entries(&bytes);
        assert!(matches!(
            result,
            Err(Error::Framing(FramingError::DuplicateSymbol { .. }))
        ));
    }

    #[test]
    fn test_deserialize_rejects_zero_count() {
        let mut map = FrequencyMap::new();
        map.put(Symbol::Byte(b'a'), 0);
        map.put(Symbol::EndOfStream, 1);

        let result = FrequencyMap::deserialize_entries(&map.serialize_entries());
        assert!(matches!(result, Err(Error::Framing(FramingError::ZeroCount { .. }))));
    }

    #[test]
    fn test_deserialize_requires_end_of_stream() {
        let mut map = FrequencyMap::new();
        map.put(Symbol::Byte(b'a'), 2);

        let result = FrequencyMap::deserialize_entries(&map.serialize_entries());
        assert!(matches!(result, Err(Error::Framing(FramingError::MissingEndOfStream))));
    }

    #[test]
    fn test_deserialize_rejects_partial_entry() {
        let bytes = FrequencyMap::from_bytes(b"ab").serialize_entries();
        let result = FrequencyMap::deserialize_entries(&bytes[..bytes.len() - 1]);
        assert!(matches!(
            result,
            Err(Error::Framing(FramingError::MetadataLengthMismatch { .. }))
        ));
    }

    #[test]
    fn test_load_source_falls_back_to_name() {
        let name = "no such file, just text";
        let (bytes, kind) = load_source(name);
        assert_eq!(kind, SourceKind::Literal);
        assert_eq!(bytes, name.as_bytes());

        let (map, counted) = FrequencyMap::from_source(name);
        assert_eq!(counted, bytes);
        assert_eq!(map.literal_total(), name.len() as u64);
        assert_eq!(map.get(Symbol::Byte(b' ')), Some(4));
    }

    #[test]
    fn test_from_source_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.bin");
        std::fs::write(&path, [7u8, 7, 9]).unwrap();

        let name = path.to_str().unwrap();
        assert_eq!(load_source(name).1, SourceKind::File);

        let (map, counted) = FrequencyMap::from_source(name);
        assert_eq!(counted, vec![7, 7, 9]);
        assert_eq!(map.get(Symbol::Byte(7)), Some(2));
        assert_eq!(map.get(Symbol::Byte(9)), Some(1));
    }
}
