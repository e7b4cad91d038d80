//! # splay-bench
//!
//! An allocation-churn micro-benchmark built on a top-down splay tree.
//!
//! The benchmark fills a [`SplayTree`] with 12000 nodes, each carrying a
//! small tree of heap-allocated [`Payload`] records, then repeatedly inserts
//! a fresh node and removes a neighbour. The tree size stays fixed while its
//! keys and shape churn, stressing allocation and reclamation of many small
//! objects.
//!
//! ## Example
//!
//! ```rust
//! use splay_bench::SplayTree;
//!
//! let mut tree: SplayTree<u32, &str> = SplayTree::new();
//! tree.insert(5, "five");
//! tree.insert(3, "three");
//! tree.insert(8, "eight");
//!
//! assert_eq!(tree.find(&3), Some((&3, &"three")));
//! assert_eq!(tree.root_key(), Some(&3));
//! assert_eq!(tree.find_greatest_less_than(&8), Some((&5, &"five")));
//! assert_eq!(tree.export_keys_sorted(), vec![3, 5, 8]);
//! ```
//!
//! Running the workload the way the `splay` binary does:
//!
//! ```rust
//! use splay_bench::{SplayBenchmark, SplayConfig};
//!
//! let config = SplayConfig { tree_size: 1000, modifications: 100, ..SplayConfig::default() };
//! let mut bench = SplayBenchmark::setup(config);
//! bench.run().unwrap();
//! bench.tear_down().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod harness;
pub mod keygen;
pub mod payload;
pub mod tree;
pub mod workload;

pub use error::{BenchError, TreeError};
pub use keygen::{Key, KeyGenerator};
pub use payload::Payload;
pub use tree::SplayTree;
pub use workload::{validate_keys, SplayBenchmark, SplayConfig};

#[cfg(test)]
mod proptests;
