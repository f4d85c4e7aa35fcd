//! Symbols carried by the frequency map, the tree leaves and the code table.

use std::fmt;

/// A codable symbol: a literal byte or the end-of-stream marker.
///
/// Internal tree nodes carry no symbol at all (see [`crate::tree::HuffmanNode`]),
/// so there is no sentinel value that a literal byte could collide with.
///
/// Ordering puts every literal byte (ascending) before `EndOfStream`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// A literal input byte
    Byte(u8),
    /// Marks the logical end of the encoded body
    EndOfStream,
}

impl Symbol {
    /// Return the literal byte, or `None` for the end-of-stream marker.
    pub fn as_byte(self) -> Option<u8> {
        match self {
            Symbol::Byte(b) => Some(b),
            Symbol::EndOfStream => None,
        }
    }

    pub fn is_end_of_stream(self) -> bool {
        matches!(self, Symbol::EndOfStream)
    }
}

impl From<u8> for Symbol {
    fn from(byte: u8) -> Self {
        Symbol::Byte(byte)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Byte(b) if b.is_ascii_graphic() => write!(f, "'{}'", *b as char),
            Symbol::Byte(b) => write!(f, "{:#04x}", b),
            Symbol::EndOfStream => f.write_str("EOF"),
        }
    }
}
