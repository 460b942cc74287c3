//! The `Store` trait and its index-addressed implementations

use alloc::vec::Vec;
use core::fmt::Debug;

/// Maps handles to the host records that embed container links.
///
/// A handle is only meaningful for the store that produced it. Passing a
/// handle that does not address a record of this store panics for the
/// index-addressed stores.
pub trait Store {
    /// Copyable reference to one record.
    type Handle: Copy + Eq + Debug;
    /// The host record.
    type Item: ?Sized;

    fn get(&self, handle: Self::Handle) -> &Self::Item;

    fn get_mut(&mut self, handle: Self::Handle) -> &mut Self::Item;
}

impl<T> Store for [T] {
    type Handle = usize;
    type Item = T;

    #[inline]
    fn get(&self, handle: usize) -> &T {
        &self[handle]
    }

    #[inline]
    fn get_mut(&mut self, handle: usize) -> &mut T {
        &mut self[handle]
    }
}

impl<T, const N: usize> Store for [T; N] {
    type Handle = usize;
    type Item = T;

    #[inline]
    fn get(&self, handle: usize) -> &T {
        &self[handle]
    }

    #[inline]
    fn get_mut(&mut self, handle: usize) -> &mut T {
        &mut self[handle]
    }
}

impl<T> Store for Vec<T> {
    type Handle = usize;
    type Item = T;

    #[inline]
    fn get(&self, handle: usize) -> &T {
        &self[handle]
    }

    #[inline]
    fn get_mut(&mut self, handle: usize) -> &mut T {
        &mut self[handle]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bump<S: Store<Item = u32> + ?Sized>(store: &mut S, handle: S::Handle) {
        *store.get_mut(handle) += 1;
    }

    #[test]
    fn test_slice_store() {
        let mut items = [1u32, 2, 3];
        bump(&mut items[..], 1);
        assert_eq!(*Store::get(&items[..], 1), 3);
    }

    #[test]
    fn test_array_store() {
        let mut items = [10u32; 4];
        bump(&mut items, 3);
        assert_eq!(items, [10, 10, 10, 11]);
    }

    #[test]
    fn test_vec_store() {
        let mut items = vec![5u32, 6];
        bump(&mut items, 0);
        assert_eq!(*Store::get(&items, 0), 6);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_handle_panics() {
        let items: Vec<u32> = Vec::new();
        let _ = Store::get(&items, 0);
    }
}
