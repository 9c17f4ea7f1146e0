//! An iterative BST-backed ordered set. Every operation — inserting,
//! deleting, membership lookup, and traversal — walks the tree with an
//! explicit loop, so the call stack never grows with the height of the tree.
//!
//! # Examples
//!
//! ```
//! use ordset::iterative::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting the same key again is rejected.
//! assert!(!tree.insert(1));
//!
//! // Deleting a key reports whether it was present.
//! assert!(tree.delete(&1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

/// An ownership slot: it holds at most one node and owns the whole subtree
/// below it. The root link and both child links of every node are slots, so
/// re-linking during deletion works the same wherever the node hangs.
type Link<K> = Option<Box<Node<K>>>;

/// A `Node` has a key that is used for searching/sorting and two child
/// slots, either of which may be empty. Construction aside, all behavior
/// lives on [`Tree`].
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

/// An ordered set of keys stored in a Binary Search Tree. This can be used
/// for inserting, finding, and deleting keys; iteration yields the keys in
/// ascending order. A key is stored at most once.
///
/// The tree is not self-balancing, so every operation is `O(height)` with
/// `height` dictated by insertion order.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // The derived drop would recurse once per level, and a degenerate tree
    // is as deep as its key count. Walk the nodes with a worklist instead.
    fn drop(&mut self) {
        let mut worklist = Vec::new();
        worklist.extend(self.root.take());
        while let Some(mut node) = worklist.pop() {
            worklist.extend(node.left.take());
            worklist.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    // Same depth concern as `drop`: clone slot by slot off a worklist
    // rather than recursing down the children.
    fn clone(&self) -> Self {
        let mut root = None;
        let mut worklist: Vec<(&Node<K>, &mut Link<K>)> = Vec::new();
        if let Some(node) = self.root.as_deref() {
            worklist.push((node, &mut root));
        }
        while let Some((source, slot)) = worklist.pop() {
            *slot = Some(Node::new_boxed(source.key.clone()));
            let copy = slot.as_mut().expect("the slot was just filled");
            if let Some(left) = source.left.as_deref() {
                worklist.push((left, &mut copy.left));
            }
            if let Some(right) = source.right.as_deref() {
                worklist.push((right, &mut copy.right));
            }
        }
        Tree {
            root,
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Adds the given key to the set. Returns `true` if the key was added
    /// and `false` if an equal key was already present; a duplicate leaves
    /// the tree untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    ///
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => cur = &mut node.right,
            }
        }
        *cur = Some(Node::new_boxed(key));
        self.len += 1;
        true
    }

    /// Returns `true` if an equal key is in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        false
    }

    /// Removes the given key from the set. Returns `true` if the key was
    /// present and `false` otherwise; deleting from an empty tree is an
    /// ordinary miss, not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.delete(&1));
    /// assert!(!tree.delete(&1));
    ///
    /// assert!(!tree.contains(&1));
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        // NB the descent steps by re-borrowing through `cur` instead of
        // through `node`: the `Equal` arm hands the slot itself to
        // `splice_out`, which a borrow chained through `node` would block.
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = &mut cur.as_mut().expect("matched a node above").left,
                Ordering::Greater => cur = &mut cur.as_mut().expect("matched a node above").right,
                Ordering::Equal => {
                    Self::splice_out(cur);
                    self.len -= 1;
                    return true;
                }
            }
        }
        false
    }

    /// Returns the largest key in the set, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.max(), None);
    ///
    /// tree.insert(1);
    /// tree.insert(3);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&K> {
        let mut cur = self.root.as_deref()?;
        while let Some(right) = cur.right.as_deref() {
            cur = right;
        }
        Some(&cur.key)
    }

    /// Returns an iterator over the keys in ascending order. The iterator
    /// is lazy, and each call starts a fresh pass from the smallest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::iterative::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root)
    }

    /// Unlinks the node held by `slot` and re-links its subtrees so the
    /// slot keeps every remaining key. The slot may be the root link or
    /// either child link of a parent; all of them splice the same way.
    ///
    /// ## Panics
    ///
    /// When `slot` is empty.
    fn splice_out(slot: &mut Link<K>) {
        let mut node = slot.take().expect("splice_out requires an occupied slot");
        match (node.left.take(), node.right.take()) {
            // A leaf: the slot stays empty.
            (None, None) => {}
            // One child: the child moves up into the slot.
            (Some(child), None) | (None, Some(child)) => *slot = Some(child),
            // Two children: the in-order successor — the leftmost node of
            // the right subtree — is detached, adopts both subtrees, and
            // takes the slot. When the successor is the right child itself,
            // `detach_min` leaves `rest` holding the successor's former
            // right subtree, so no separate branch is needed.
            (Some(left), Some(right)) => {
                let mut rest = Some(right);
                let mut successor = Self::detach_min(&mut rest);
                successor.left = Some(left);
                successor.right = rest;
                *slot = Some(successor);
            }
        }
    }

    /// Detaches the node with the smallest key from the subtree under
    /// `link`; the vacated slot takes over that node's right subtree.
    ///
    /// ## Panics
    ///
    /// When the subtree under `link` is empty.
    fn detach_min(link: &mut Link<K>) -> Box<Node<K>> {
        let mut cur = link;
        while cur
            .as_ref()
            .expect("detach_min requires a non-empty subtree")
            .left
            .is_some()
        {
            cur = &mut cur.as_mut().expect("checked in the loop condition").left;
        }
        let mut min = cur.take().expect("checked in the loop condition");
        *cur = min.right.take();
        min
    }
}

/// An iterator over the keys of a [`Tree`] in ascending order.
///
/// The iterator is lazy: it visits nodes as it is advanced, keeping only
/// the path back to unvisited ancestors on an explicit stack.
pub struct Iter<'a, K> {
    /// Nodes whose key and right subtree have not been yielded yet, with
    /// the holder of the smallest pending key on top.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: &'a Link<K>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes the node held by `link` and every node down its left spine.
    fn push_left_spine(&mut self, link: &'a Link<K>) {
        let mut cur = link.as_deref();
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.key)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}
