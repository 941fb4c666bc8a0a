use std::collections::HashMap;
use std::ptr;

use bitvec::prelude::*;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{InvalidCode, MalformedInput, UnknownSymbol};
use crate::tree::{build_tree, Node, Symbol};

/// Number of letters in the production alphabet.
pub const ALPHABET_LEN: usize = 26;

/// A fully initialized encoder/decoder for one probability set: the Huffman
/// tree plus the letter-to-bits table derived from it. Both are read-only
/// after construction, so a `&Codec` is freely shareable.
#[derive(Debug, Clone)]
pub struct Codec {
    tree: Node,
    table: HashMap<char, BitBox>,
}

impl Codec {
    /// Build a codec from a 26-letter probability table. Rejects anything
    /// that is not exactly one non-negative probability per uppercase letter.
    pub fn from_probabilities(pairs: &[(char, f64)]) -> Result<Self, MalformedInput> {
        let mut seen = [false; ALPHABET_LEN];
        for &(letter, probability) in pairs {
            if !letter.is_ascii_uppercase() {
                return Err(MalformedInput::NotALetter(letter));
            }
            let idx = letter as usize - 'A' as usize;
            if seen[idx] {
                return Err(MalformedInput::DuplicateLetter(letter));
            }
            seen[idx] = true;
            if probability < 0.0 {
                return Err(MalformedInput::NegativeProbability {
                    letter,
                    probability,
                });
            }
        }
        if pairs.len() != ALPHABET_LEN {
            return Err(MalformedInput::WrongLetterCount {
                expected: ALPHABET_LEN,
                actual: pairs.len(),
            });
        }

        let symbols = pairs
            .iter()
            .map(|&(letter, probability)| Symbol::new(letter, probability));
        // 26 validated entries always leave one tree standing
        let tree = build_tree(symbols).unwrap();
        Ok(Self::from_tree(tree))
    }

    /// Wrap an already built tree. The code table is derived once, here;
    /// `encode` and `decode` never reshape the tree afterwards.
    pub fn from_tree(tree: Node) -> Self {
        let table = derive_table(&tree);
        debug!(
            "derived {} code words, longest {} bits",
            table.len(),
            table.values().map(|code| code.len()).max().unwrap_or(0),
        );
        Self { tree, table }
    }

    /// The tree this codec serves.
    pub fn tree(&self) -> &Node {
        &self.tree
    }

    /// The code word derived for `letter`, if the letter is in the table.
    pub fn code_for(&self, letter: char) -> Option<&BitSlice> {
        self.table.get(&letter).map(|code| code.as_bitslice())
    }

    /// Replace every letter of `text` with its code, rendered as '0'/'1'
    /// characters. Spaces pass through verbatim as word separators.
    pub fn encode(&self, text: &str) -> Result<String, UnknownSymbol> {
        let mut out = String::new();
        for ch in text.chars() {
            if ch == ' ' {
                out.push(' ');
                continue;
            }
            let code = self.table.get(&ch).ok_or(UnknownSymbol(ch))?;
            for bit in code.iter().by_vals() {
                out.push(if bit { '1' } else { '0' });
            }
        }
        Ok(out)
    }

    /// Walk the tree bit by bit, emitting a letter and returning to the root
    /// each time a leaf is reached. A space is a hard separator: it is copied
    /// to the output and the cursor resets no matter where it was. The cursor
    /// lives entirely within this call.
    pub fn decode(&self, code: &str) -> Result<String, InvalidCode> {
        let mut out = String::new();
        let mut cursor = &self.tree;
        for ch in code.chars() {
            match ch {
                ' ' => {
                    out.push(' ');
                    cursor = &self.tree;
                }
                '0' | '1' => {
                    let next = match cursor {
                        Node::Internal { left, right, .. } => {
                            if ch == '0' {
                                left.as_ref()
                            } else {
                                right.as_ref()
                            }
                        }
                        // only reachable when the whole tree is one leaf
                        Node::Leaf(_) => return Err(InvalidCode::LeafOverrun),
                    };
                    if let Node::Leaf(symbol) = next {
                        out.push(symbol.letter());
                        cursor = &self.tree;
                    } else {
                        cursor = next;
                    }
                }
                other => return Err(InvalidCode::UnexpectedSymbol(other)),
            }
        }
        if !ptr::eq(cursor, &self.tree) {
            return Err(InvalidCode::Truncated);
        }
        Ok(out)
    }
}

/// Walk the tree once, recording the root-to-leaf path of every letter.
/// Descending left appends a 0, descending right a 1. A bare leaf at the
/// root gets the empty path.
fn derive_table(root: &Node) -> HashMap<char, BitBox> {
    fn walk(node: &Node, path: &mut BitVec, table: &mut HashMap<char, BitBox>) {
        match node {
            Node::Leaf(symbol) => {
                table.insert(symbol.letter(), path.clone().into_boxed_bitslice());
            }
            Node::Internal { left, right, .. } => {
                path.push(false);
                walk(left, path, table);
                path.pop();

                path.push(true);
                walk(right, path, table);
                path.pop();
            }
        }
    }

    let mut path = BitVec::new();
    let mut table = HashMap::new();
    walk(root, &mut path, &mut table);
    table
}

/// Wire form of a codec: the tree alone. The table is derived again on load,
/// so the two can never disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableCodec {
    tree: Node,
}

impl From<&Codec> for SerializableCodec {
    fn from(other: &Codec) -> Self {
        Self {
            tree: other.tree.clone(),
        }
    }
}

impl From<SerializableCodec> for Codec {
    fn from(other: SerializableCodec) -> Self {
        Codec::from_tree(other.tree)
    }
}
