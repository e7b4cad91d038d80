//! The splay benchmark workload: build a large tree, churn it, validate it.

use std::fmt::Display;

use tracing::debug;

use crate::error::BenchError;
use crate::keygen::{Key, KeyGenerator};
use crate::payload::Payload;
use crate::tree::SplayTree;

/// Workload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplayConfig {
    /// Number of nodes the tree holds after setup and after every run.
    pub tree_size: usize,
    /// Replace-cycles performed by one [`SplayBenchmark::run`].
    pub modifications: usize,
    /// Depth of the payload tree attached to every node.
    pub payload_depth: u32,
}

impl Default for SplayConfig {
    fn default() -> Self {
        Self {
            tree_size: 12_000,
            modifications: 1_500,
            payload_depth: 5,
        }
    }
}

/// One benchmark instance. Owns its own tree and key stream, so separate
/// instances share no state.
pub struct SplayBenchmark {
    config: SplayConfig,
    keys: KeyGenerator,
    tree: SplayTree<Key, Payload>,
}

impl SplayBenchmark {
    /// Build a tree populated to `config.tree_size`. Not part of the timed
    /// region.
    pub fn setup(config: SplayConfig) -> Self {
        let mut bench = Self {
            config,
            keys: KeyGenerator::new(),
            tree: SplayTree::new(),
        };
        for _ in 0..config.tree_size {
            bench.insert_new_node();
        }
        debug!(
            tree_size = bench.tree.len(),
            payload_depth = config.payload_depth,
            "splay tree populated"
        );
        bench
    }

    pub fn tree(&self) -> &SplayTree<Key, Payload> {
        &self.tree
    }

    /// One timed iteration: insert a fresh node, then remove either its
    /// predecessor or, if it has none, the new node itself. Size is unchanged
    /// after every cycle.
    pub fn run(&mut self) -> Result<(), BenchError> {
        for _ in 0..self.config.modifications {
            let key = self.insert_new_node();
            let victim = match self.tree.find_greatest_less_than(&key) {
                Some((greatest, _)) => *greatest,
                None => key,
            };
            self.tree.remove(&victim)?;
        }
        Ok(())
    }

    /// Validate the tree and release it.
    ///
    /// An error here means the tree algorithm is broken; callers must abort
    /// rather than report timings.
    pub fn tear_down(self) -> Result<(), BenchError> {
        let keys = self.tree.export_keys_sorted();
        validate_keys(&keys, self.config.tree_size)?;
        debug!(tree_size = keys.len(), "splay tree validated");
        Ok(())
    }

    /// Draw keys until one is not in the tree, then insert it with a fresh
    /// payload.
    fn insert_new_node(&mut self) -> Key {
        let key = loop {
            let key = self.keys.next_key();
            if self.tree.find(&key).is_none() {
                break key;
            }
        };
        let payload = Payload::build(self.config.payload_depth, &key.to_string());
        self.tree.insert(key, payload);
        key
    }
}

/// Check that `keys` has exactly `expected_len` entries in strictly
/// ascending order.
pub fn validate_keys<K: Ord + Display>(keys: &[K], expected_len: usize) -> Result<(), BenchError> {
    if keys.len() != expected_len {
        return Err(BenchError::SizeMismatch {
            expected: expected_len,
            actual: keys.len(),
        });
    }
    if let Some(index) = keys.windows(2).position(|pair| pair[0] >= pair[1]) {
        return Err(BenchError::OrderingViolation {
            index,
            previous: keys[index].to_string(),
            next: keys[index + 1].to_string(),
        });
    }
    Ok(())
}
