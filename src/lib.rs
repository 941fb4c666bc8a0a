//! Prefix-free (Huffman) codes for the uppercase alphabet.
//!
//! Build a [`Codec`] from per-letter probabilities, then [`Codec::encode`]
//! lines of uppercase text into '0'/'1' strings and [`Codec::decode`] them
//! back. The code comes from one greedy pass that always merges the two
//! lightest remaining subtrees; spaces pass through both directions as word
//! separators, never coded.

mod codec;
mod error;
mod probabilities;
mod tree;

pub use codec::{Codec, SerializableCodec, ALPHABET_LEN};
pub use error::{InvalidCode, MalformedInput, UnknownSymbol};
pub use probabilities::{parse_probabilities, ENGLISH};
pub use tree::{build_tree, Node, Symbol};
