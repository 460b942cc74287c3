//! FIFO ring queue

use core::fmt;
use core::iter::FusedIterator;

use crate::{ensure_unlinked, QsStore, Result};

/// FIFO queue threaded through the members' `next` links.
///
/// The members form a ring; the queue keeps only the tail, whose successor
/// is the head.
pub struct Queue<H> {
    tail: Option<H>,
    len: usize,
}

impl<H> Queue<H>
where
    H: Copy + Eq + fmt::Debug,
{
    pub const fn new() -> Self {
        Self { tail: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Append `node` behind the current tail.
    pub fn enqueue<S>(&mut self, store: &mut S, node: H) -> Result<(), H>
    where
        S: QsStore<Handle = H> + ?Sized,
    {
        ensure_unlinked(store, node)?;
        match self.tail {
            None => store.link_to(node, Some(node)),
            Some(tail) => {
                let head = store.next(tail);
                store.link_to(node, head);
                store.link_to(tail, Some(node));
            }
        }
        self.tail = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the head, resetting its link.
    pub fn dequeue<S>(&mut self, store: &mut S) -> Option<H>
    where
        S: QsStore<Handle = H> + ?Sized,
    {
        let tail = self.tail?;
        // Every ring member has a successor; a lone tail points at itself.
        let head = store.next(tail).unwrap_or(tail);
        if head == tail {
            self.tail = None;
        } else {
            let after = store.next(head);
            store.link_to(tail, after);
        }
        store.qs_link_mut(head).reset();
        self.len -= 1;
        Some(head)
    }

    /// The member `dequeue` would return next.
    pub fn peek<S>(&self, store: &S) -> Option<H>
    where
        S: QsStore<Handle = H> + ?Sized,
    {
        self.tail.and_then(|tail| store.next(tail))
    }

    /// Members from head to tail.
    pub fn iter<'a, S>(&self, store: &'a S) -> QueueIter<'a, S>
    where
        S: QsStore<Handle = H> + ?Sized,
    {
        QueueIter {
            store,
            current: self.peek(store),
            tail: self.tail,
            remaining: self.len,
        }
    }
}

impl<H> Default for Queue<H>
where
    H: Copy + Eq + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<H: fmt::Debug> fmt::Debug for Queue<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("tail", &self.tail)
            .field("len", &self.len)
            .finish()
    }
}

/// Iterator over a [`Queue`], head first
pub struct QueueIter<'a, S: QsStore + ?Sized> {
    store: &'a S,
    current: Option<S::Handle>,
    tail: Option<S::Handle>,
    remaining: usize,
}

impl<'a, S: QsStore + ?Sized> Iterator for QueueIter<'a, S> {
    type Item = S::Handle;

    fn next(&mut self) -> Option<S::Handle> {
        let current = self.current?;
        self.remaining -= 1;
        self.current = if Some(current) == self.tail {
            None
        } else {
            self.store.next(current)
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, S: QsStore + ?Sized> ExactSizeIterator for QueueIter<'a, S> {}

impl<'a, S: QsStore + ?Sized> FusedIterator for QueueIter<'a, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use crate::{QsError, QsLink};

    fn values(queue: &Queue<usize>, store: &[Item]) -> Vec<i32> {
        queue.iter(store).map(|h| store[h].value).collect()
    }

    #[test]
    fn test_queue_fifo() {
        let mut store = items(&[1, 2, 3, 4]);
        let mut queue = Queue::new();
        for slot in 0..4 {
            queue.enqueue(&mut store, slot).unwrap();
        }
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.dequeue(&mut store), Some(0));
        assert_eq!(store[0].link, QsLink::new());
        assert_eq!(values(&queue, &store), [2, 3, 4]);
    }

    #[test]
    fn test_single_member_ring() {
        let mut store = items(&[7]);
        let mut queue = Queue::new();
        queue.enqueue(&mut store, 0).unwrap();
        assert_eq!(store[0].link.next(), Some(0));
        assert_eq!(queue.peek(&store), Some(0));
        assert_eq!(queue.dequeue(&mut store), Some(0));
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(&mut store), None);
        assert_eq!(queue.peek(&store), None);
    }

    #[test]
    fn test_tail_points_at_head() {
        let mut store = items(&[1, 2, 3]);
        let mut queue = Queue::new();
        for slot in 0..3 {
            queue.enqueue(&mut store, slot).unwrap();
        }
        assert_eq!(store[2].link.next(), Some(0));
        assert_eq!(store[0].link.next(), Some(1));
        assert_eq!(store[1].link.next(), Some(2));
    }

    #[test]
    fn test_enqueue_linked_node_fails() {
        let mut store = items(&[1, 2]);
        let mut queue = Queue::new();
        queue.enqueue(&mut store, 0).unwrap();
        assert_eq!(
            queue.enqueue(&mut store, 0),
            Err(QsError::AlreadyLinked(0))
        );
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_requeue_after_dequeue() {
        let mut store = items(&[1, 2, 3]);
        let mut queue = Queue::new();
        for slot in 0..3 {
            queue.enqueue(&mut store, slot).unwrap();
        }
        let head = queue.dequeue(&mut store).unwrap();
        queue.enqueue(&mut store, head).unwrap();
        assert_eq!(values(&queue, &store), [2, 3, 1]);
        assert_eq!(queue.iter(&store).len(), 3);
    }

    #[test]
    fn test_empty_iter() {
        let store = items(&[]);
        let queue: Queue<usize> = Queue::default();
        assert_eq!(queue.iter(&store).next(), None);
    }
}
