//! Intrusive queue and stack
//!
//! Both containers thread their members through a single `next` link held in
//! a [`QsLink`] embedded in the host record. The stack is a plain singly
//! linked list. The queue is a ring: only the tail is kept, and the head is
//! the tail's successor, so enqueue and dequeue are both O(1) without a
//! second handle.
//!
//! ```text
//!   .---.        .---.
//!   | 2 |<-next--| 1 |   head = next(tail)
//!   '---'        '---'
//!     |next        ^
//!     v        next|
//!   .---.        .---.
//!   | 3 |--next->| 4 |<--tail
//!   '---'        '---'
//! ```

#![cfg_attr(not(test), no_std)]

mod queue;
mod stack;

use rbkit_core::Store;

pub use queue::{Queue, QueueIter};
pub use stack::{Stack, StackIter};

/// Single forward link embedded in queue and stack members
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QsLink<H> {
    next: Option<H>,
    linked: bool,
}

impl<H> QsLink<H> {
    /// Unlinked link
    pub const fn new() -> Self {
        Self {
            next: None,
            linked: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_linked(&self) -> bool {
        self.linked
    }
}

impl<H: Copy> QsLink<H> {
    pub fn next(&self) -> Option<H> {
        self.next
    }
}

impl<H> Default for QsLink<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// A record that can sit in a [`Queue`] or a [`Stack`].
///
/// A record with one link can be in at most one of them at a time.
pub trait QsNode<H> {
    fn qs_link(&self) -> &QsLink<H>;
    fn qs_link_mut(&mut self) -> &mut QsLink<H>;
}

/// Link access through a store whose items are [`QsNode`]s.
pub trait QsStore: Store {
    fn qs_link(&self, node: Self::Handle) -> &QsLink<Self::Handle>;
    fn qs_link_mut(&mut self, node: Self::Handle) -> &mut QsLink<Self::Handle>;

    fn next(&self, node: Self::Handle) -> Option<Self::Handle> {
        self.qs_link(node).next
    }

    /// Point `node` at `next` and mark it linked.
    fn link_to(&mut self, node: Self::Handle, next: Option<Self::Handle>) {
        let link = self.qs_link_mut(node);
        link.next = next;
        link.linked = true;
    }
}

impl<S> QsStore for S
where
    S: Store + ?Sized,
    S::Item: QsNode<S::Handle>,
{
    fn qs_link(&self, node: S::Handle) -> &QsLink<S::Handle> {
        self.get(node).qs_link()
    }

    fn qs_link_mut(&mut self, node: S::Handle) -> &mut QsLink<S::Handle> {
        self.get_mut(node).qs_link_mut()
    }
}

/// Errors from queue and stack operations
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QsError<H> {
    #[error("node {0:?} is already in a queue or stack")]
    AlreadyLinked(H),
}

/// Result type for queue and stack operations
pub type Result<T, H> = core::result::Result<T, QsError<H>>;

/// Shared precondition for `enqueue` and `push`.
fn ensure_unlinked<S>(store: &S, node: S::Handle) -> Result<(), S::Handle>
where
    S: QsStore + ?Sized,
{
    if store.qs_link(node).is_linked() {
        tracing::debug!(?node, "node is already in a queue or stack");
        return Err(QsError::AlreadyLinked(node));
    }
    Ok(())
}

static_assertions::assert_eq_size!(QsLink<u32>, [u32; 3]);
static_assertions::assert_impl_all!(QsLink<usize>: Send, Sync, Copy);
