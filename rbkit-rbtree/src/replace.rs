//! In-place substitution of members
//!
//! Parent links are what make these O(1): the new node copies the old one's
//! links and color, and only the three neighbours are repointed. Nothing is
//! rotated or recolored.

use core::cmp::Ordering;
use core::fmt;

use crate::compare::Comparator;
use crate::node::{RbLink, RbStore, Side, Sided};
use crate::{RbTree, Result, TreeError};

/// Outcome of `RbTree::replace_node`.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Replace {
    /// The new node took the old one's position; the old one is unlinked.
    Replaced,
    /// The nodes do not compare equal; nothing changed.
    Rejected,
}

impl<H, C> RbTree<H, C>
where
    H: Copy + Eq + fmt::Debug,
{
    /// Swap `new` into the exact position of the member `old`.
    ///
    /// `new` must be unlinked and compare equal to `old`; otherwise the call
    /// is a no-op reported as `Replace::Rejected`.
    pub fn replace_node<S>(&mut self, store: &mut S, old: H, new: H) -> Result<Replace, H>
    where
        S: RbStore<Handle = H> + ?Sized,
        C: Comparator<S::Item>,
    {
        self.ensure_member(store, old)?;
        if store.link(new).is_linked() {
            tracing::debug!(?new, "replacement node is already linked");
            return Err(TreeError::AlreadyLinked(new));
        }
        if self.cmp.compare(store.get(old), store.get(new)) != Ordering::Equal {
            tracing::trace!(?old, ?new, "replacement key differs, replace rejected");
            return Ok(Replace::Rejected);
        }

        let link = *store.link(old);
        *store.link_mut(new) = link;
        self.replace_child(store, link.parent, old, Some(new));
        if let Some(left) = link.left {
            store.set_parent(left, Some(new));
        }
        if let Some(right) = link.right {
            store.set_parent(right, Some(new));
        }
        store.link_mut(old).reset();

        Ok(Replace::Replaced)
    }

    /// Replace the member equal to `new` with `new`.
    ///
    /// Returns the evicted member, or `None` if no member matches (then `new`
    /// stays unlinked).
    pub fn replace<S>(&mut self, store: &mut S, new: H) -> Result<Option<H>, H>
    where
        S: RbStore<Handle = H> + ?Sized,
        C: Comparator<S::Item>,
    {
        if store.link(new).is_linked() {
            tracing::debug!(?new, "replacement node is already linked");
            return Err(TreeError::AlreadyLinked(new));
        }
        let Some(old) = self.find(store, store.get(new)) else {
            tracing::trace!(?new, "no member to replace");
            return Ok(None);
        };
        match self.replace_node(store, old, new)? {
            Replace::Replaced => Ok(Some(old)),
            Replace::Rejected => Ok(None),
        }
    }

    /// Exchange the tree positions and colors of two members.
    ///
    /// The keys are not consulted: callers use this after swapping the
    /// payloads of `a` and `b`, so the in-order sequence of keys stays the
    /// same while the two records trade places.
    pub fn swap_positions<S>(&mut self, store: &mut S, a: H, b: H) -> Result<(), H>
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        self.ensure_member(store, a)?;
        self.ensure_member(store, b)?;
        if a == b {
            return Ok(());
        }

        let la = *store.link(a);
        let lb = *store.link(b);
        let a_slot = la.parent.map(|p| (p, store.side_of(p, Some(a))));
        let b_slot = lb.parent.map(|p| (p, store.side_of(p, Some(b))));

        // Each node takes the other's links; a link that pointed at the
        // node itself (adjacent pair) now points at its partner.
        *store.link_mut(a) = swapped(&lb, a, b);
        *store.link_mut(b) = swapped(&la, b, a);

        self.reattach(store, a_slot, b);
        self.reattach(store, b_slot, a);

        for (node, partner) in [(a, b), (b, a)] {
            let link = *store.link(node);
            for child in [link.left, link.right].into_iter().flatten() {
                if child != partner {
                    store.set_parent(child, Some(node));
                }
            }
        }
        Ok(())
    }

    /// Hang `node` in `slot` (or at the root), unless the slot belongs to
    /// `node` itself.
    fn reattach<S>(&mut self, store: &mut S, slot: Option<(H, Side)>, node: H)
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        match slot {
            None => self.root = Some(node),
            Some((parent, _)) if parent == node => {}
            Some((parent, side)) => store.set_child(parent, side, Some(node)),
        }
    }
}

/// `link` with every reference to `from` redirected to `to`.
fn swapped<H: Copy + Eq>(link: &RbLink<H>, from: H, to: H) -> RbLink<H> {
    let redirect = |h: Option<H>| if h == Some(from) { Some(to) } else { h };
    RbLink {
        parent: redirect(link.parent),
        left: redirect(link.left),
        right: redirect(link.right),
        color: link.color,
        linked: true,
    }
}
