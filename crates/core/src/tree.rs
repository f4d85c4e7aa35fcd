//! Huffman tree construction.
//!
//! # Algorithm
//!
//! One leaf per frequency-map entry goes into a min-priority queue. While
//! more than one node is queued, the two lightest are removed and joined
//! under a new internal node: the first removed becomes the `zero` child,
//! the second the `one` child. The last node standing is the root.
//!
//! # Tie-break
//!
//! Every node gets a sequence number when it is created: leaves `0..n` in
//! frequency-map key order, internal nodes `n, n+1, ...` in creation order.
//! The queue orders by `(weight, sequence)` ascending, so equal weights are
//! always removed oldest first. The same map in the same order yields the
//! same tree on any platform, which is what lets the decompressor rebuild
//! the compressor's tree from the persisted header.
//!
//! # Ownership
//!
//! Each internal node owns its two children through `Box`. The tree is
//! released by a single recursive drop when its owner lets go of it.

use std::collections::BinaryHeap;

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyMap;
use crate::symbol::Symbol;

/// A node of the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        weight: u64,
        symbol: Symbol,
    },
    Internal {
        weight: u64,
        zero: Box<HuffmanNode>,
        one: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Symbol of a leaf; `None` for internal nodes.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// Follow one branch. Leaves have no children.
    pub fn child(&self, bit: bool) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { zero, one, .. } => Some(if bit { one } else { zero }),
        }
    }

    fn join(zero: HuffmanNode, one: HuffmanNode) -> Result<HuffmanNode> {
        let weight = zero
            .weight()
            .checked_add(one.weight())
            .ok_or(HuffmanError::WeightOverflow)?;

        Ok(HuffmanNode::Internal {
            weight,
            zero: Box::new(zero),
            one: Box::new(one),
        })
    }
}

/// A node waiting in the builder's priority queue.
#[derive(Debug)]
struct QueuedNode {
    node: HuffmanNode,
    sequence: u64,
}

impl QueuedNode {
    fn key(&self) -> (u64, u64) {
        (self.node.weight(), self.sequence)
    }
}

// Min-heap on (weight, sequence): lighter first, then older first
impl PartialEq for QueuedNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for QueuedNode {}

impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.key().cmp(&self.key())
    }
}

/// An owned Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// Build the tree for a frequency map.
    ///
    /// # Errors
    /// - `HuffmanError::EmptyFrequencyTable` if the map has no entries
    /// - `HuffmanError::ZeroWeight` if an entry has count zero
    /// - `HuffmanError::WeightOverflow` if subtree weights overflow `u64`
    pub fn build(frequencies: &FrequencyMap) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(HuffmanError::EmptyFrequencyTable.into());
        }

        let mut queue = BinaryHeap::with_capacity(frequencies.len());
        let mut next_sequence = 0u64;

        for (symbol, weight) in frequencies.iter() {
            if weight == 0 {
                return Err(HuffmanError::ZeroWeight { symbol }.into());
            }
            queue.push(QueuedNode {
                node: HuffmanNode::Leaf { weight, symbol },
                sequence: next_sequence,
            });
            next_sequence += 1;
        }

        while queue.len() > 1 {
            if let (Some(zero), Some(one)) = (queue.pop(), queue.pop()) {
                queue.push(QueuedNode {
                    node: HuffmanNode::join(zero.node, one.node)?,
                    sequence: next_sequence,
                });
                next_sequence += 1;
            }
        }

        let root = queue
            .pop()
            .map(|queued| queued.node)
            .ok_or(HuffmanError::EmptyFrequencyTable)?;

        let tree = Self { root };
        log::debug!(
            "built tree: {} leaves, depth {}, weight {}",
            tree.leaf_count(),
            tree.depth(),
            tree.root.weight()
        );
        Ok(tree)
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// True for the degenerate one-symbol tree.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn leaf_count(&self) -> usize {
        fn count(node: &HuffmanNode) -> usize {
            match node {
                HuffmanNode::Leaf { .. } => 1,
                HuffmanNode::Internal { zero, one, .. } => count(zero) + count(one),
            }
        }
        count(&self.root)
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn depth(node: &HuffmanNode) -> usize {
            match node {
                HuffmanNode::Leaf { .. } => 0,
                HuffmanNode::Internal { zero, one, .. } => 1 + depth(zero).max(depth(one)),
            }
        }
        depth(&self.root)
    }
}
