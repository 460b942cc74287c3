//! Node storage for the rbkit intrusive containers
//!
//! The containers never own their nodes. Every operation receives a [`Store`]
//! that maps a small copyable handle to the host record carrying the links.
//! Two kinds of store are provided:
//!
//! - slices, arrays and `Vec`s, addressed by slot index (`usize`)
//! - [`RawStore`], addressed by `NonNull<T>`, for records that live wherever
//!   the caller put them (boxes, statics, the stack)

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod raw;
pub mod store;

pub use raw::RawStore;
pub use store::Store;
