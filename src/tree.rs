use std::cmp::Reverse;
use std::collections::BinaryHeap;

use derivative::Derivative;
use serde::{Deserialize, Serialize};
use total_float_wrap::TotalF64;

/// An uppercase letter together with its occurrence probability.
/// Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    letter: char,
    probability: f64,
}

impl Symbol {
    pub fn new(letter: char, probability: f64) -> Self {
        Self {
            letter,
            probability,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

/// One tree in the Huffman forest: a single symbol, or the merge of two
/// lighter trees. An internal node always has exactly two children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Leaf(Symbol),
    Internal {
        weight: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Merge two trees under a new parent carrying their combined weight.
    pub(crate) fn merge(left: Node, right: Node) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            Node::Leaf(symbol) => symbol.probability(),
            Node::Internal { weight, .. } => *weight,
        }
    }
}

/// Where a merge candidate came from. `Merged` sorts first so that a freshly
/// merged subtree wins a weight tie against an original leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Origin {
    Merged,
    Source,
}

/// Heap entry: candidates order by weight, then origin, then age.
/// The tree itself takes no part in the ordering.
#[derive(Debug, Clone, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    weight: TotalF64,
    origin: Origin,
    seq: u64,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: Node,
}

/// Build the Huffman tree for `symbols` by repeatedly merging the two
/// lightest remaining trees, the first one popped becoming the left child.
/// Returns `None` for an empty input.
///
/// Ties on weight resolve the same way every run: a merged subtree beats an
/// original leaf, and within each group the older entry wins. The tie rule
/// never changes code lengths, only which exact bit patterns come out, so it
/// is kept as a stable contract.
pub fn build_tree(symbols: impl IntoIterator<Item = Symbol>) -> Option<Node> {
    let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
    let mut seq = 0;
    for symbol in symbols {
        heap.push(Reverse(Candidate {
            weight: TotalF64(symbol.probability()),
            origin: Origin::Source,
            seq,
            node: Node::Leaf(symbol),
        }));
        seq += 1;
    }

    while heap.len() > 1 {
        let Reverse(first) = heap.pop().unwrap();
        let Reverse(second) = heap.pop().unwrap();
        let parent = Node::merge(first.node, second.node);
        heap.push(Reverse(Candidate {
            weight: TotalF64(parent.weight()),
            origin: Origin::Merged,
            seq,
            node: parent,
        }));
        seq += 1;
    }

    heap.pop().map(|Reverse(candidate)| candidate.node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(letter: char, probability: f64) -> Node {
        Node::Leaf(Symbol::new(letter, probability))
    }

    fn candidate(weight: f64, origin: Origin, seq: u64) -> Candidate {
        Candidate {
            weight: TotalF64(weight),
            origin,
            seq,
            node: leaf('X', weight),
        }
    }

    #[test]
    fn merge_sums_weights() {
        let merged = Node::merge(leaf('A', 0.5), leaf('B', 0.25));
        assert_eq!(merged.weight(), 0.75);
        match merged {
            Node::Internal { left, right, .. } => {
                assert_eq!(*left, leaf('A', 0.5));
                assert_eq!(*right, leaf('B', 0.25));
            }
            Node::Leaf(_) => panic!("merge produced a leaf"),
        }
    }

    #[test]
    fn candidates_order_by_weight_first() {
        let light = candidate(0.1, Origin::Source, 7);
        let heavy = candidate(0.2, Origin::Merged, 0);
        assert!(light < heavy);
    }

    #[test]
    fn merged_wins_weight_tie() {
        let merged = candidate(0.3, Origin::Merged, 9);
        let source = candidate(0.3, Origin::Source, 0);
        assert!(merged < source);
    }

    #[test]
    fn older_candidate_wins_within_origin() {
        let older = candidate(0.3, Origin::Merged, 3);
        let newer = candidate(0.3, Origin::Merged, 4);
        assert!(older < newer);
    }

    #[test]
    fn empty_input_builds_nothing() {
        assert_eq!(build_tree(Vec::new()), None);
    }

    #[test]
    fn single_symbol_builds_bare_leaf() {
        let tree = build_tree(vec![Symbol::new('Q', 1.0)]).unwrap();
        assert_eq!(tree, leaf('Q', 1.0));
    }

    #[test]
    fn three_symbol_merge_order() {
        // C and B merge first; the tie at 0.5 goes to the merged subtree,
        // leaving A alone on the right of the root.
        let tree = build_tree(vec![
            Symbol::new('A', 0.5),
            Symbol::new('B', 0.3),
            Symbol::new('C', 0.2),
        ])
        .unwrap();

        let expected = Node::merge(Node::merge(leaf('C', 0.2), leaf('B', 0.3)), leaf('A', 0.5));
        assert_eq!(tree, expected);
    }

    #[test]
    fn four_symbol_tree_shape() {
        let tree = build_tree(vec![
            Symbol::new('A', 0.4),
            Symbol::new('B', 0.3),
            Symbol::new('C', 0.2),
            Symbol::new('D', 0.1),
        ])
        .unwrap();

        // D+C merge to 0.3, beat B on the tie, then join B; A stays a
        // direct child of the root.
        let expected = Node::merge(
            leaf('A', 0.4),
            Node::merge(Node::merge(leaf('D', 0.1), leaf('C', 0.2)), leaf('B', 0.3)),
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn internal_weights_are_sums_of_children() {
        fn check(node: &Node) {
            if let Node::Internal {
                weight,
                left,
                right,
            } = node
            {
                assert_eq!(*weight, left.weight() + right.weight());
                check(left);
                check(right);
            }
        }

        let symbols = ('A'..='Z')
            .enumerate()
            .map(|(i, letter)| Symbol::new(letter, (i + 1) as f64 / 351.0));
        let tree = build_tree(symbols).unwrap();
        check(&tree);
        assert!((tree.weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn repeated_builds_agree() {
        let symbols: Vec<Symbol> = ('A'..='Z').map(|letter| Symbol::new(letter, 0.25)).collect();
        let once = build_tree(symbols.clone()).unwrap();
        let twice = build_tree(symbols).unwrap();
        assert_eq!(once, twice);
    }
}
