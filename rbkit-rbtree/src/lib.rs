//! Intrusive red-black tree
//!
//! The tree never allocates and never owns its nodes. Host records embed an
//! [`RbLink`] and are reached through a [`Store`](rbkit_core::Store), either
//! an index-addressed arena (`Vec`, slice, array) or the pointer-addressed
//! [`RawStore`](rbkit_core::RawStore). The tree itself is just the root
//! handle, a node count and a comparator.
//!
//! Keys are unique: inserting a record that compares equal to a member is
//! rejected and reported as [`Insert::Duplicate`].
//!
//! ```
//! use rbkit_rbtree::{Insert, RbLink, RbNode, RbTree};
//!
//! struct Entry {
//!     key: u32,
//!     link: RbLink<usize>,
//! }
//!
//! impl RbNode<usize> for Entry {
//!     fn link(&self) -> &RbLink<usize> { &self.link }
//!     fn link_mut(&mut self) -> &mut RbLink<usize> { &mut self.link }
//! }
//!
//! let mut nodes: Vec<Entry> = [5, 3, 8]
//!     .into_iter()
//!     .map(|key| Entry { key, link: RbLink::new() })
//!     .collect();
//! let mut tree = RbTree::new(|a: &Entry, b: &Entry| a.key.cmp(&b.key));
//! for slot in 0..nodes.len() {
//!     assert_eq!(tree.insert(&mut nodes, slot).unwrap(), Insert::Inserted);
//! }
//! let keys: Vec<u32> = tree.iter(&nodes).map(|slot| nodes[slot].key).collect();
//! assert_eq!(keys, [3, 5, 8]);
//! ```

#![cfg_attr(not(test), no_std)]

mod check;
mod compare;
mod delete;
mod error;
mod find;
mod insert;
mod iter;
mod node;
mod replace;
mod rotate;

use core::fmt;

pub use check::CheckReport;
pub use compare::{ByKey, Comparator, NaturalOrder};
pub use error::{InvariantViolation, Result, TreeError};
pub use insert::Insert;
pub use iter::{Cursor, Iter};
pub use node::{Color, RbLink, RbNode, RbStore};
pub use replace::Replace;

/// Red-Black tree root
///
/// `H` is the handle type of the store the nodes live in, `C` the
/// comparator. Every operation takes the store explicitly; using one tree
/// with two different stores is a logic error.
pub struct RbTree<H, C = NaturalOrder> {
    root: Option<H>,
    len: usize,
    cmp: C,
}

impl<H, C> RbTree<H, C>
where
    H: Copy + Eq + fmt::Debug,
{
    /// Create a new empty tree
    pub const fn new(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    pub fn root(&self) -> Option<H> {
        self.root
    }

    /// Number of linked nodes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The ordering this tree was built with.
    ///
    /// Useful for comparing a candidate against a member before calling
    /// `replace_node`, which requires equal keys.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Put a node into the unlinked state before its first insertion.
    ///
    /// Fails with `AlreadyLinked` if the node is still a member of a tree.
    pub fn init_node<S>(store: &mut S, node: H) -> Result<(), H>
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        if store.link(node).is_linked() {
            return Err(TreeError::AlreadyLinked(node));
        }
        store.link_mut(node).reset();
        Ok(())
    }

    /// Unlink every node and leave the tree empty.
    pub fn clear<S>(&mut self, store: &mut S)
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        let mut cursor = self.root.take();
        // Walk down to a leaf, unlink it, continue from its parent.
        while let Some(node) = cursor {
            if let Some(left) = store.left(node) {
                cursor = Some(left);
            } else if let Some(right) = store.right(node) {
                cursor = Some(right);
            } else {
                let parent = store.parent(node);
                if let Some(p) = parent {
                    if store.left(p) == Some(node) {
                        store.set_left(p, None);
                    } else {
                        store.set_right(p, None);
                    }
                }
                store.link_mut(node).reset();
                cursor = parent;
            }
        }
        self.len = 0;
    }

    /// Verify that `node` can be removed from or replaced in this tree.
    ///
    /// Linkage is always checked. Membership of this particular tree costs an
    /// ancestor walk and is only checked in debug builds.
    fn ensure_member<S>(&self, store: &S, node: H) -> Result<(), H>
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        if !store.link(node).is_linked() {
            tracing::debug!(?node, "node is not linked");
            return Err(TreeError::NotLinked(node));
        }
        #[cfg(debug_assertions)]
        {
            let mut top = node;
            while let Some(parent) = store.parent(top) {
                top = parent;
            }
            if self.root != Some(top) {
                tracing::debug!(?node, "node belongs to another tree");
                return Err(TreeError::NotMember(node));
            }
        }
        Ok(())
    }
}

impl<H> RbTree<H, NaturalOrder>
where
    H: Copy + Eq + fmt::Debug,
{
    /// Create an empty tree ordered by the records' `Ord` implementation.
    pub const fn natural() -> Self {
        Self::new(NaturalOrder)
    }
}

impl<H, C> Default for RbTree<H, C>
where
    H: Copy + Eq + fmt::Debug,
    C: Default,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<H: fmt::Debug, C> fmt::Debug for RbTree<H, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RbTree")
            .field("root", &self.root)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn test_rb_root_empty() {
        let tree = tree();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.root(), None);
    }

    #[test]
    fn test_init_node_rejects_linked() {
        let (_tree, mut nodes) = build(&[1, 2]);
        assert_eq!(
            Tree::init_node(&mut nodes, 0),
            Err(TreeError::AlreadyLinked(0))
        );
    }

    #[test]
    fn test_init_node_resets_unlinked() {
        let mut nodes = nodes(&[1]);
        nodes[0].link.color = Color::Red;
        Tree::init_node(&mut nodes, 0).unwrap();
        assert_eq!(nodes[0].link, RbLink::new());
    }

    #[test]
    fn test_clear_unlinks_everything() {
        let (mut tree, mut nodes) = build(&[4, 2, 6, 1, 3, 5, 7]);
        tree.clear(&mut nodes);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(nodes.iter().all(|n| n.link == RbLink::new()));
    }

    #[test]
    fn test_comparator_orders_like_the_tree() {
        let (tree, nodes) = build(&[2, 1, 3]);
        let spare = super::testing::nodes(&[2]);
        let cmp = tree.comparator();
        assert_eq!(cmp.compare(&nodes[1], &nodes[0]), core::cmp::Ordering::Less);
        assert_eq!(cmp.compare(&nodes[2], &nodes[0]), core::cmp::Ordering::Greater);
        assert_eq!(cmp.compare(&spare[0], &nodes[0]), core::cmp::Ordering::Equal);
    }

    #[test]
    fn test_natural_order_tree() {
        struct Key {
            key: u8,
            link: RbLink<usize>,
        }
        impl PartialEq for Key {
            fn eq(&self, other: &Self) -> bool {
                self.key == other.key
            }
        }
        impl Eq for Key {}
        impl PartialOrd for Key {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Key {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.key.cmp(&other.key)
            }
        }
        impl RbNode<usize> for Key {
            fn link(&self) -> &RbLink<usize> {
                &self.link
            }
            fn link_mut(&mut self) -> &mut RbLink<usize> {
                &mut self.link
            }
        }

        let mut keys: Vec<Key> = [9u8, 1, 5]
            .into_iter()
            .map(|key| Key {
                key,
                link: RbLink::new(),
            })
            .collect();
        let mut tree = RbTree::natural();
        for slot in 0..keys.len() {
            assert_eq!(tree.insert(&mut keys, slot), Ok(Insert::Inserted));
        }
        let order: Vec<u8> = tree.iter(&keys).map(|slot| keys[slot].key).collect();
        assert_eq!(order, [1, 5, 9]);
    }

    #[test]
    fn test_ensure_member_rejects_unlinked() {
        let (tree, mut nodes) = build(&[1, 2, 3]);
        nodes.push(Node {
            value: 10,
            link: RbLink::new(),
        });
        assert_eq!(tree.ensure_member(&nodes, 0), Ok(()));
        assert_eq!(tree.ensure_member(&nodes, 3), Err(TreeError::NotLinked(3)));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_ensure_member_detects_foreign_node() {
        let (tree, mut nodes) = build(&[1, 2, 3]);
        nodes.push(Node {
            value: 10,
            link: RbLink::new(),
        });
        let mut other = super::testing::tree();
        assert_eq!(other.insert(&mut nodes, 3), Ok(Insert::Inserted));

        assert_eq!(tree.ensure_member(&nodes, 3), Err(TreeError::NotMember(3)));
    }
}
