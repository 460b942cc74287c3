//! Lookup by key and the extreme members

use core::cmp::Ordering;
use core::fmt;

use crate::compare::Comparator;
use crate::delete::{leftmost, rightmost};
use crate::node::RbStore;
use crate::RbTree;

impl<H, C> RbTree<H, C>
where
    H: Copy + Eq + fmt::Debug,
{
    /// Find the member that compares equal to `probe`.
    pub fn find<S>(&self, store: &S, probe: &S::Item) -> Option<H>
    where
        S: RbStore<Handle = H> + ?Sized,
        C: Comparator<S::Item>,
    {
        self.find_by(store, probe, |probe, node| self.cmp.compare(probe, node))
    }

    /// Find the member matching `key`.
    ///
    /// `f(key, node)` must return how `key` orders against `node`,
    /// consistently with the tree's comparator.
    pub fn find_by<S, K, F>(&self, store: &S, key: &K, mut f: F) -> Option<H>
    where
        S: RbStore<Handle = H> + ?Sized,
        K: ?Sized,
        F: FnMut(&K, &S::Item) -> Ordering,
    {
        let mut current = self.root;
        while let Some(node) = current {
            current = match f(key, store.get(node)) {
                Ordering::Less => store.left(node),
                Ordering::Greater => store.right(node),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Smallest member
    pub fn first<S>(&self, store: &S) -> Option<H>
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        self.root.map(|root| leftmost(store, root))
    }

    /// Largest member
    pub fn last<S>(&self, store: &S) -> Option<H>
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        self.root.map(|root| rightmost(store, root))
    }
}
