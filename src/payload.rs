//! Filler values hung off every tree node.
//!
//! A payload is a perfect binary tree of heap records. It has no meaning to
//! the splay tree; it only gives each node a realistic allocation footprint.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    Leaf { array: Vec<u32>, string: String },
    Node { left: Box<Payload>, right: Box<Payload> },
}

impl Payload {
    /// Build a payload of the given depth. Both children of every internal
    /// record are allocated separately, never shared.
    pub fn build(depth: u32, tag: &str) -> Self {
        if depth == 0 {
            return Payload::Leaf {
                array: (0..10).collect(),
                string: format!("String for key {tag} in leaf node"),
            };
        }
        Payload::Node {
            left: Box::new(Self::build(depth - 1, tag)),
            right: Box::new(Self::build(depth - 1, tag)),
        }
    }

    pub fn depth(&self) -> u32 {
        match self {
            Payload::Leaf { .. } => 0,
            Payload::Node { left, right } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Payload::Leaf { .. } => 1,
            Payload::Node { left, right } => left.leaf_count() + right.leaf_count(),
        }
    }
}
