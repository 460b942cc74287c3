//! Rotation engine
//!
//! Rotations are O(1) local rewirings that keep the in-order sequence
//! intact while changing which node is the local subtree root:
//!
//! ```text
//!          y      rotate right       x
//!         / \      -------->        / \
//!        x   C                     A   y
//!       / \       <--------           / \
//!      A   B      rotate left        B   C
//! ```

use core::fmt;

use crate::node::{RbStore, Side, Sided};
use crate::RbTree;

impl<H, C> RbTree<H, C>
where
    H: Copy + Eq + fmt::Debug,
{
    /// Hang `new` where `old` hung below `parent`, or make it the root.
    pub(crate) fn replace_child<S>(&mut self, store: &mut S, parent: Option<H>, old: H, new: Option<H>)
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        match parent {
            None => self.root = new,
            Some(p) if store.left(p) == Some(old) => store.set_left(p, new),
            Some(p) => store.set_right(p, new),
        }
    }

    /// Rotate `node` down towards `side`.
    ///
    /// The child on the opposite side (the pivot) takes `node`'s place and
    /// the pivot's inner subtree moves over to `node`. `Side::Left` is the
    /// classic left rotation.
    pub(crate) fn rotate<S>(&mut self, store: &mut S, node: H, side: Side)
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        // Nothing to rotate without a pivot
        let Some(pivot) = store.child(node, side.opposite()) else {
            return;
        };

        let inner = store.child(pivot, side);
        store.set_child(node, side.opposite(), inner);
        if let Some(inner) = inner {
            store.set_parent(inner, Some(node));
        }

        let parent = store.parent(node);
        store.set_parent(pivot, parent);
        self.replace_child(store, parent, node, Some(pivot));

        store.set_child(pivot, side, Some(node));
        store.set_parent(node, Some(pivot));
    }
}
