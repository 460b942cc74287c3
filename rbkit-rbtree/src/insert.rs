//! Insertion: ordered leaf placement plus red-red repair

use core::cmp::Ordering;
use core::fmt;

use crate::compare::Comparator;
use crate::node::{Color, RbStore, Side, Sided};
use crate::{RbTree, Result, TreeError};

/// Outcome of `RbTree::insert`.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Insert<H> {
    /// The node is now a member of the tree.
    Inserted,
    /// A member with an equal key exists; the candidate was left unlinked.
    Duplicate(H),
}

impl<H> Insert<H> {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Insert::Inserted)
    }
}

impl<H, C> RbTree<H, C>
where
    H: Copy + Eq + fmt::Debug,
{
    /// Insert a node into the tree
    ///
    /// The node must be unlinked. It is placed as a leaf in key order,
    /// colored red and the tree is rebalanced. If a member compares equal the
    /// tree is left untouched and that member is returned as
    /// `Insert::Duplicate`.
    pub fn insert<S>(&mut self, store: &mut S, node: H) -> Result<Insert<H>, H>
    where
        S: RbStore<Handle = H> + ?Sized,
        C: Comparator<S::Item>,
    {
        if store.link(node).is_linked() {
            tracing::debug!(?node, "insert of a node that is already linked");
            return Err(TreeError::AlreadyLinked(node));
        }

        // Find insertion point
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(c) = current {
            side = match self.cmp.compare(store.get(node), store.get(c)) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    tracing::trace!(?node, existing = ?c, "duplicate key, insert rejected");
                    return Ok(Insert::Duplicate(c));
                }
            };
            parent = Some(c);
            current = store.child(c, side);
        }

        // Link as a red leaf
        {
            let link = store.link_mut(node);
            link.parent = parent;
            link.left = None;
            link.right = None;
            link.color = Color::Red;
            link.linked = true;
        }
        match parent {
            None => self.root = Some(node),
            Some(p) => store.set_child(p, side, Some(node)),
        }
        self.len += 1;

        self.insert_fixup(store, node);
        Ok(Insert::Inserted)
    }

    /// Rebalance tree after insertion
    ///
    /// Only a red parent can break the red-red rule, so the loop climbs while
    /// the cursor's parent is red. A red parent is never the root, hence the
    /// grandparent always exists inside the loop.
    fn insert_fixup<S>(&mut self, store: &mut S, mut node: H)
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        while let Some(mut parent) = store.parent(node) {
            if store.color(parent) == Color::Black {
                break;
            }
            let Some(grandparent) = store.parent(parent) else {
                break;
            };

            let side = store.side_of(grandparent, Some(parent));
            let uncle = store.child(grandparent, side.opposite());

            if let Some(uncle) = uncle.filter(|&u| store.color(u) == Color::Red) {
                // Red uncle: push the redness up
                store.set_color(parent, Color::Black);
                store.set_color(uncle, Color::Black);
                store.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if store.child(parent, side.opposite()) == Some(node) {
                // Inner child: turn it into an outer one
                self.rotate(store, parent, side);
                core::mem::swap(&mut node, &mut parent);
            }

            // Outer child: one rotation at the grandparent finishes the job
            store.set_color(parent, Color::Black);
            store.set_color(grandparent, Color::Red);
            self.rotate(store, grandparent, side.opposite());
            break;
        }

        if let Some(root) = self.root {
            store.set_color(root, Color::Black);
        }
    }
}
