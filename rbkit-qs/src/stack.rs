//! LIFO stack

use core::fmt;
use core::iter::FusedIterator;

use crate::{ensure_unlinked, QsStore, Result};

/// LIFO stack threaded through the members' `next` links.
pub struct Stack<H> {
    top: Option<H>,
    len: usize,
}

impl<H> Stack<H>
where
    H: Copy + Eq + fmt::Debug,
{
    pub const fn new() -> Self {
        Self { top: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn push<S>(&mut self, store: &mut S, node: H) -> Result<(), H>
    where
        S: QsStore<Handle = H> + ?Sized,
    {
        ensure_unlinked(store, node)?;
        store.link_to(node, self.top);
        self.top = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the top member, resetting its link.
    pub fn pop<S>(&mut self, store: &mut S) -> Option<H>
    where
        S: QsStore<Handle = H> + ?Sized,
    {
        let top = self.top?;
        self.top = store.next(top);
        store.qs_link_mut(top).reset();
        self.len -= 1;
        Some(top)
    }

    pub fn peek(&self) -> Option<H> {
        self.top
    }

    /// Members from top to bottom.
    pub fn iter<'a, S>(&self, store: &'a S) -> StackIter<'a, S>
    where
        S: QsStore<Handle = H> + ?Sized,
    {
        StackIter {
            store,
            current: self.top,
            remaining: self.len,
        }
    }
}

impl<H> Default for Stack<H>
where
    H: Copy + Eq + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<H: fmt::Debug> fmt::Debug for Stack<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top", &self.top)
            .field("len", &self.len)
            .finish()
    }
}

/// Iterator over a [`Stack`], top first
pub struct StackIter<'a, S: QsStore + ?Sized> {
    store: &'a S,
    current: Option<S::Handle>,
    remaining: usize,
}

impl<'a, S: QsStore + ?Sized> Iterator for StackIter<'a, S> {
    type Item = S::Handle;

    fn next(&mut self) -> Option<S::Handle> {
        let current = self.current?;
        self.remaining -= 1;
        self.current = self.store.next(current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, S: QsStore + ?Sized> ExactSizeIterator for StackIter<'a, S> {}

impl<'a, S: QsStore + ?Sized> FusedIterator for StackIter<'a, S> {}
