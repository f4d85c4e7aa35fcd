//! Per-symbol bit codes derived from a tree.
//!
//! A code is the root-to-leaf path of its symbol: `0` for every `zero`
//! branch taken, `1` for every `one` branch. Codes of a multi-leaf tree are
//! prefix-free by construction. A single-leaf tree has no branches, so its
//! lone symbol is given the fixed one-bit code `0`.

use std::collections::BTreeMap;
use std::fmt;

use crate::symbol::Symbol;
use crate::tree::{HuffmanNode, HuffmanTree};

/// A bit path, root to leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code(Vec<bool>);

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn starts_with(&self, prefix: &Code) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Code(bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol → code mapping for one tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    /// Walk the tree depth-first and record the path to every leaf.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();

        if let HuffmanNode::Leaf { symbol, .. } = tree.root() {
            codes.insert(*symbol, Code(vec![false]));
        } else {
            let mut path = Vec::new();
            collect(tree.root(), &mut path, &mut codes);
        }

        let table = Self { codes };
        for (symbol, code) in table.iter() {
            log::trace!("code {} = {}", symbol, code);
        }
        table
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Entries in symbol order (bytes ascending, end-of-stream last).
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// True when no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !b.starts_with(a))
        })
    }
}

fn collect(node: &HuffmanNode, path: &mut Vec<bool>, codes: &mut BTreeMap<Symbol, Code>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            codes.insert(*symbol, Code(path.clone()));
        }
        HuffmanNode::Internal { zero, one, .. } => {
            path.push(false);
            collect(zero, path, codes);
            path.pop();

            path.push(true);
            collect(one, path, codes);
            path.pop();
        }
    }
}
