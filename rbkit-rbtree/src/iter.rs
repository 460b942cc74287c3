//! In-order traversal
//!
//! Both the cursor and the iterator walk parent links, so neither needs a
//! stack. Any structural change to the tree invalidates them, with one
//! exception: deleting the node under a cursor and then dropping the cursor.

use core::fmt;
use core::iter::FusedIterator;

use crate::delete::{leftmost, rightmost};
use crate::node::RbStore;
use crate::RbTree;

/// In-order successor of `node`, or `None` past the largest member.
pub(crate) fn successor<S>(store: &S, node: S::Handle) -> Option<S::Handle>
where
    S: RbStore + ?Sized,
{
    if let Some(right) = store.right(node) {
        return Some(leftmost(store, right));
    }
    let mut child = node;
    while let Some(parent) = store.parent(child) {
        if store.left(parent) == Some(child) {
            return Some(parent);
        }
        child = parent;
    }
    None
}

/// In-order predecessor of `node`, or `None` before the smallest member.
pub(crate) fn predecessor<S>(store: &S, node: S::Handle) -> Option<S::Handle>
where
    S: RbStore + ?Sized,
{
    if let Some(left) = store.left(node) {
        return Some(rightmost(store, left));
    }
    let mut child = node;
    while let Some(parent) = store.parent(child) {
        if store.right(parent) == Some(child) {
            return Some(parent);
        }
        child = parent;
    }
    None
}

/// A position in the tree, detached from any borrow of it.
///
/// The cursor is either on a member or at the end. Moving past either
/// extreme parks it at the end, where it stays; start over with
/// [`Cursor::first`] or [`Cursor::last`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cursor<H> {
    current: Option<H>,
}

impl<H: Copy + Eq + fmt::Debug> Cursor<H> {
    /// Cursor on the smallest member, or at the end if the tree is empty.
    pub fn first<S, C>(tree: &RbTree<H, C>, store: &S) -> Self
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        Self {
            current: tree.first(store),
        }
    }

    /// Cursor on the largest member, or at the end if the tree is empty.
    pub fn last<S, C>(tree: &RbTree<H, C>, store: &S) -> Self
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        Self {
            current: tree.last(store),
        }
    }

    /// Cursor on `node`, which must be a member.
    pub fn at(node: H) -> Self {
        Self {
            current: Some(node),
        }
    }

    pub fn current(&self) -> Option<H> {
        self.current
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Step to the in-order successor.
    pub fn move_next<S>(&mut self, store: &S)
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        self.current = self.current.and_then(|node| successor(store, node));
    }

    /// Step to the in-order predecessor.
    pub fn move_prev<S>(&mut self, store: &S)
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        self.current = self.current.and_then(|node| predecessor(store, node));
    }
}

/// Handles of the members in ascending order.
pub struct Iter<'a, S: RbStore + ?Sized> {
    store: &'a S,
    head: Option<S::Handle>,
    tail: Option<S::Handle>,
    remaining: usize,
}

impl<'a, S: RbStore + ?Sized> Iterator for Iter<'a, S> {
    type Item = S::Handle;

    fn next(&mut self) -> Option<S::Handle> {
        let head = self.head?;
        self.remaining -= 1;
        if self.remaining == 0 {
            self.head = None;
            self.tail = None;
        } else {
            self.head = successor(self.store, head);
        }
        Some(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, S: RbStore + ?Sized> DoubleEndedIterator for Iter<'a, S> {
    fn next_back(&mut self) -> Option<S::Handle> {
        let tail = self.tail?;
        self.remaining -= 1;
        if self.remaining == 0 {
            self.head = None;
            self.tail = None;
        } else {
            self.tail = predecessor(self.store, tail);
        }
        Some(tail)
    }
}

impl<'a, S: RbStore + ?Sized> ExactSizeIterator for Iter<'a, S> {}

impl<'a, S: RbStore + ?Sized> FusedIterator for Iter<'a, S> {}

impl<'a, S: RbStore + ?Sized> Clone for Iter<'a, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            head: self.head,
            tail: self.tail,
            remaining: self.remaining,
        }
    }
}

impl<H, C> RbTree<H, C>
where
    H: Copy + Eq + fmt::Debug,
{
    /// Iterate over the members in ascending order.
    pub fn iter<'a, S>(&self, store: &'a S) -> Iter<'a, S>
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        Iter {
            store,
            head: self.first(store),
            tail: self.last(store),
            remaining: self.len,
        }
    }

    /// Cursor on the smallest member.
    pub fn cursor<S>(&self, store: &S) -> Cursor<H>
    where
        S: RbStore<Handle = H> + ?Sized,
    {
        Cursor::first(self, store)
    }
}
