//! Top-down splay tree.
//!
//! Every access (`insert`, `remove`, `find`, `find_greatest_less_than`)
//! splays the searched key to the root, so lookups take `&mut self`.
//! Children are owned boxes; there are no parent links because splaying
//! walks strictly downward.

use std::cmp::Ordering;

use crate::error::TreeError;

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    #[inline]
    fn boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    #[inline]
    fn entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Right-most node of this subtree. Does not splay.
    fn max(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }
}

/// Splay `key` towards the root of the subtree rooted at `current` and
/// return the new root.
///
/// The new root is `key`'s node when present, otherwise the last node on the
/// search path. Nodes passed on the way down are collected into two half
/// trees: `left_tree` holds nodes smaller than the final root (chained
/// through right links), `right_tree` holds larger ones (chained through left
/// links). `left_tail`/`right_tail` are the open slots where the next node of
/// each chain gets linked.
fn splay<K: Ord, V>(mut current: Box<Node<K, V>>, key: &K) -> Box<Node<K, V>> {
    let mut left_tree: Link<K, V> = None;
    let mut right_tree: Link<K, V> = None;
    let mut left_tail = &mut left_tree;
    let mut right_tail = &mut right_tree;

    loop {
        match key.cmp(&current.key) {
            Ordering::Less => {
                let Some(mut child) = current.left.take() else {
                    break;
                };
                if *key < child.key {
                    // Rotate right.
                    current.left = child.right.take();
                    child.right = Some(current);
                    current = child;
                    match current.left.take() {
                        Some(next) => child = next,
                        None => break,
                    }
                }
                // Link right.
                right_tail = &mut right_tail.insert(current).left;
                current = child;
            }
            Ordering::Greater => {
                let Some(mut child) = current.right.take() else {
                    break;
                };
                if *key > child.key {
                    // Rotate left.
                    current.right = child.left.take();
                    child.left = Some(current);
                    current = child;
                    match current.right.take() {
                        Some(next) => child = next,
                        None => break,
                    }
                }
                // Link left.
                left_tail = &mut left_tail.insert(current).right;
                current = child;
            }
            Ordering::Equal => break,
        }
    }

    // Assemble.
    *left_tail = current.left.take();
    *right_tail = current.right.take();
    current.left = left_tree;
    current.right = right_tree;
    current
}

/// Ordered map with unique keys, backed by a splay tree.
pub struct SplayTree<K, V> {
    pub(crate) root: Link<K, V>,
    len: usize,
}

impl<K, V> SplayTree<K, V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Key currently at the root, i.e. the most recently accessed one.
    pub fn root_key(&self) -> Option<&K> {
        self.root.as_deref().map(|node| &node.key)
    }

    /// Largest entry. Walks the right spine without splaying.
    pub fn find_max(&self) -> Option<(&K, &V)> {
        self.root.as_deref().map(|node| node.max().entry())
    }

    /// All keys in ascending order.
    pub fn export_keys_sorted(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<K, V>> = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            keys.push(node.key.clone());
            current = node.right.as_deref();
        }
        keys
    }
}

impl<K: Ord, V> SplayTree<K, V> {
    /// Insert `key` with `value`. Returns `false` and drops `value` if `key`
    /// is already present; the stored value is never replaced.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let Some(root) = self.root.take() else {
            self.root = Some(Node::boxed(key, value));
            self.len = 1;
            return true;
        };

        let mut root = splay(root, &key);
        let node = match key.cmp(&root.key) {
            Ordering::Equal => {
                self.root = Some(root);
                return false;
            }
            Ordering::Greater => {
                let mut node = Node::boxed(key, value);
                node.right = root.right.take();
                node.left = Some(root);
                node
            }
            Ordering::Less => {
                let mut node = Node::boxed(key, value);
                node.left = root.left.take();
                node.right = Some(root);
                node
            }
        };

        self.root = Some(node);
        self.len += 1;
        true
    }

    /// Remove `key` and return its entry.
    ///
    /// On a miss the key set is unchanged, though the shape is not: the
    /// search still splays.
    pub fn remove(&mut self, key: &K) -> Result<(K, V), TreeError> {
        let root = self.root.take().ok_or(TreeError::NotFound)?;
        let root = splay(root, key);
        if root.key != *key {
            self.root = Some(root);
            return Err(TreeError::NotFound);
        }

        let Node {
            key,
            value,
            left,
            right,
        } = *root;
        self.root = match left {
            None => right,
            Some(left) => {
                // Every key on the left is smaller, so splaying `key` brings
                // the left maximum up with an empty right child.
                let mut root = splay(left, &key);
                debug_assert!(root.right.is_none());
                root.right = right;
                Some(root)
            }
        };
        self.len -= 1;
        Ok((key, value))
    }

    /// Look up `key`, splaying it (or its nearest neighbour on a miss) to the
    /// root.
    pub fn find(&mut self, key: &K) -> Option<(&K, &V)> {
        let root = splay(self.root.take()?, key);
        let root: &Node<K, V> = self.root.insert(root);
        if root.key == *key {
            Some(root.entry())
        } else {
            None
        }
    }

    /// Entry with the greatest key strictly less than `key`.
    pub fn find_greatest_less_than(&mut self, key: &K) -> Option<(&K, &V)> {
        let root = splay(self.root.take()?, key);
        let root: &Node<K, V> = self.root.insert(root);
        if root.key < *key {
            return Some(root.entry());
        }
        root.left.as_deref().map(|left| left.max().entry())
    }
}

impl<K, V> Default for SplayTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// Splayed trees can be arbitrarily deep; the default recursive drop of
// nested boxes could overflow the stack.
impl<K, V> Drop for SplayTree<K, V> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: std::fmt::Debug, V> std::fmt::Debug for SplayTree<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplayTree")
            .field("len", &self.len)
            .field("root", &self.root_key())
            .finish()
    }
}
