//! Pointer-addressed store for records the caller allocates itself

use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::Store;

/// Store whose handles are raw pointers to the host records.
///
/// This is the classic intrusive setup: records are allocated by the caller
/// (boxed, static, on the stack) and the containers only rewrite the links
/// embedded in them. The store itself is zero-sized.
pub struct RawStore<T: ?Sized> {
    _marker: PhantomData<*mut T>,
}

impl<T: ?Sized> RawStore<T> {
    /// Create a pointer store.
    ///
    /// # Safety
    /// For as long as the store is used, every handle passed to it must point
    /// to a live `T` that is not read or written through any other path while
    /// a reference returned by the store is alive. A record must stay alive
    /// until it has been unlinked from every container holding it.
    pub const unsafe fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> core::fmt::Debug for RawStore<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("RawStore")
    }
}

impl<T: ?Sized> Store for RawStore<T> {
    type Handle = NonNull<T>;
    type Item = T;

    #[inline]
    fn get(&self, handle: NonNull<T>) -> &T {
        // Safety: guaranteed by the contract of `RawStore::new`
        unsafe { handle.as_ref() }
    }

    #[inline]
    fn get_mut(&mut self, handle: NonNull<T>) -> &mut T {
        // Safety: guaranteed by the contract of `RawStore::new`
        unsafe { &mut *handle.as_ptr() }
    }
}

static_assertions::assert_eq_size!(RawStore<u64>, ());
static_assertions::assert_not_impl_any!(RawStore<u64>: Send, Sync);
