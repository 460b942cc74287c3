//! rbkit - intrusive ordered containers
//!
//! A red-black tree, a FIFO queue and a LIFO stack whose structural links
//! live inside the caller's records. The containers never allocate; nodes
//! are reached through a [`Store`], either an index arena (`Vec`, slice) or
//! raw pointers via [`RawStore`].
//!
//! This crate re-exports the container crates and adds the pieces shared by
//! the binaries: configuration, tracing bootstrap and the perf runner.

pub mod config;
pub mod perf;
pub mod utils;

pub use rbkit_core::{RawStore, Store};
pub use rbkit_qs as qs;
pub use rbkit_rbtree as rbtree;
