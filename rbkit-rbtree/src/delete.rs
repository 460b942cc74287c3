//! Deletion: node splice plus double-black repair
//!
//! The node handed to `delete_node` always leaves the tree. When it has two
//! children its in-order successor takes over its exact position and color;
//! no payload is ever moved, so handles to every other node stay valid.

use core::cmp::Ordering;
use core::fmt;

use crate::compare::Comparator;
use crate::node::{Color, RbStore, Sided};
use crate::{RbTree, Result};

impl<H, C> RbTree<H, C>
where
    H: Copy + Eq + fmt::Debug,
{
    /// Remove a linked node from the tree and reset its link.
    pub fn delete_node<S>(&mut self, store: &mut S, node: H) -> Result<(), H>
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        self.ensure_member(store, node)?;
        self.unlink(store, node);
        Ok(())
    }

    /// Splice out a node known to be a member of this tree.
    fn unlink<S>(&mut self, store: &mut S, node: H)
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        let left = store.left(node);
        let right = store.right(node);

        // The black deficit, if any, sits at `child` (possibly absent) below
        // `child_parent`.
        let (child, child_parent, removed) = match (left, right) {
            (Some(left), Some(right)) => {
                let successor = leftmost(store, right);
                let removed = store.color(successor);
                let child = store.right(successor);

                let child_parent = if successor == right {
                    successor
                } else {
                    // Detach the successor, it is the left child of its parent
                    let successor_parent = store.parent(successor).unwrap_or(right);
                    store.set_left(successor_parent, child);
                    if let Some(child) = child {
                        store.set_parent(child, Some(successor_parent));
                    }
                    store.set_right(successor, Some(right));
                    store.set_parent(right, Some(successor));
                    successor_parent
                };

                // Successor takes over the deleted node's position and color
                let parent = store.parent(node);
                self.replace_child(store, parent, node, Some(successor));
                store.set_parent(successor, parent);
                store.set_left(successor, Some(left));
                store.set_parent(left, Some(successor));
                let color = store.color(node);
                store.set_color(successor, color);

                (child, Some(child_parent), removed)
            }
            (only, None) | (None, only) => {
                let parent = store.parent(node);
                self.replace_child(store, parent, node, only);
                if let Some(only) = only {
                    store.set_parent(only, parent);
                }
                (only, parent, store.color(node))
            }
        };

        store.link_mut(node).reset();
        self.len -= 1;

        if removed == Color::Black {
            self.delete_fixup(store, child, child_parent);
        }
    }

    /// Find the member equal to `probe` and delete it.
    ///
    /// Returns the removed node, or `None` if no member matches.
    pub fn delete<S>(&mut self, store: &mut S, probe: &S::Item) -> Option<H>
    where
        S: RbStore<Handle = H> + ?Sized,
        C: Comparator<S::Item>,
    {
        let node = self.find(store, probe);
        self.delete_found(store, node)
    }

    /// Find the member matching `key` under `f` and delete it.
    ///
    /// `f` must order keys consistently with the tree's comparator.
    pub fn delete_by<S, K, F>(&mut self, store: &mut S, key: &K, f: F) -> Option<H>
    where
        S: RbStore<Handle = H> + ?Sized,
        K: ?Sized,
        F: FnMut(&K, &S::Item) -> Ordering,
    {
        let node = self.find_by(store, key, f);
        self.delete_found(store, node)
    }

    fn delete_found<S>(&mut self, store: &mut S, node: Option<H>) -> Option<H>
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        let Some(node) = node else {
            tracing::trace!("key not found, nothing deleted");
            return None;
        };
        // Reached from the root, so it is linked and a member
        self.unlink(store, node);
        Some(node)
    }

    /// Restore the black height after a black node was spliced out.
    ///
    /// `node` carries an extra unit of blackness. Each pass either absorbs it
    /// (red node, root, or a rotation that lends a red from the sibling side)
    /// or pushes it one level up.
    fn delete_fixup<S>(&mut self, store: &mut S, mut node: Option<H>, mut parent: Option<H>)
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        while node != self.root && !store.is_red(node) {
            let Some(p) = parent else {
                break;
            };
            let side = store.side_of(p, node);
            let far_side = side.opposite();

            // The sibling subtree holds at least one black node, so it exists
            let Some(mut sibling) = store.child(p, far_side) else {
                break;
            };

            if store.color(sibling) == Color::Red {
                store.set_color(sibling, Color::Black);
                store.set_color(p, Color::Red);
                self.rotate(store, p, side);
                sibling = match store.child(p, far_side) {
                    Some(s) => s,
                    None => break,
                };
            }

            let near = store.child(sibling, side);
            let far = store.child(sibling, far_side);

            if !store.is_red(near) && !store.is_red(far) {
                store.set_color(sibling, Color::Red);
                node = Some(p);
                parent = store.parent(p);
                continue;
            }

            if !store.is_red(far) {
                // Near red, far black: rotate the red to the far side
                if let Some(near) = near {
                    store.set_color(near, Color::Black);
                }
                store.set_color(sibling, Color::Red);
                self.rotate(store, sibling, far_side);
                sibling = match store.child(p, far_side) {
                    Some(s) => s,
                    None => break,
                };
            }

            let parent_color = store.color(p);
            store.set_color(sibling, parent_color);
            store.set_color(p, Color::Black);
            if let Some(far) = store.child(sibling, far_side) {
                store.set_color(far, Color::Black);
            }
            self.rotate(store, p, side);
            node = self.root;
            break;
        }

        if let Some(node) = node {
            store.set_color(node, Color::Black);
        }
    }
}

/// Leftmost node of the subtree rooted at `node`.
pub(crate) fn leftmost<S: RbStore + ?Sized>(store: &S, mut node: S::Handle) -> S::Handle {
    while let Some(left) = store.left(node) {
        node = left;
    }
    node
}

/// Rightmost node of the subtree rooted at `node`.
pub(crate) fn rightmost<S: RbStore + ?Sized>(store: &S, mut node: S::Handle) -> S::Handle {
    while let Some(right) = store.right(node) {
        node = right;
    }
    node
}
