//! Structural consistency checker
//!
//! Read-only; meant for tests, debug builds and the perf harness's verify
//! mode. Each node is visited once, and the walk gives up as soon as it has
//! seen more nodes than the tree records, so corrupted links that form a
//! cycle still terminate.

use core::cmp::Ordering;
use core::fmt;

use crate::compare::Comparator;
use crate::node::RbStore;
use crate::{InvariantViolation, RbTree};

/// Summary of a tree that passed `RbTree::check`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Black nodes on every path from the root down to an absent child.
    pub black_height: usize,
    /// Reachable nodes.
    pub nodes: usize,
}

struct Walk<'a, S: ?Sized, C> {
    store: &'a S,
    cmp: &'a C,
    limit: usize,
    seen: usize,
}

type Verdict<T, H> = core::result::Result<T, InvariantViolation<H>>;

impl<'a, S, C> Walk<'a, S, C>
where
    S: RbStore + ?Sized,
    C: Comparator<S::Item>,
{
    /// Check the subtree at `node` whose keys must lie strictly between the
    /// `lo` and `hi` ancestors. Returns its black height.
    fn subtree(
        &mut self,
        node: Option<S::Handle>,
        parent: Option<S::Handle>,
        lo: Option<S::Handle>,
        hi: Option<S::Handle>,
    ) -> Verdict<usize, S::Handle> {
        let Some(node) = node else {
            return Ok(0);
        };
        self.seen += 1;
        if self.seen > self.limit {
            return Err(InvariantViolation::Length {
                recorded: self.limit,
                found: self.seen,
            });
        }

        let link = self.store.link(node);
        if !link.is_linked() {
            return Err(InvariantViolation::Unlinked(node));
        }
        if link.parent != parent {
            return Err(InvariantViolation::ParentMismatch {
                node,
                recorded: link.parent,
                actual: parent,
            });
        }

        let item = self.store.get(node);
        if let Some(lo) = lo {
            if self.cmp.compare(self.store.get(lo), item) != Ordering::Less {
                return Err(InvariantViolation::Order { node, ancestor: lo });
            }
        }
        if let Some(hi) = hi {
            if self.cmp.compare(item, self.store.get(hi)) != Ordering::Less {
                return Err(InvariantViolation::Order { node, ancestor: hi });
            }
        }

        let (left, right) = (link.left, link.right);
        if link.is_red() {
            for child in [left, right].into_iter().flatten() {
                if self.store.is_red(Some(child)) {
                    return Err(InvariantViolation::RedRed { node, child });
                }
            }
        }

        let black = usize::from(link.is_black());
        let left_height = self.subtree(left, Some(node), lo, Some(node))?;
        let right_height = self.subtree(right, Some(node), Some(node), hi)?;
        if left_height != right_height {
            return Err(InvariantViolation::BlackHeight {
                parent: Some(node),
                expected: left_height,
                found: right_height,
            });
        }
        Ok(left_height + black)
    }
}

impl<H, C> RbTree<H, C>
where
    H: Copy + Eq + fmt::Debug,
{
    /// Verify every red-black and search-tree invariant.
    ///
    /// Checks that the root is black and parentless, that every reachable
    /// node is linked and points back at its parent, that keys are strictly
    /// ordered, that no red node has a red child, that all paths carry the
    /// same number of black nodes, and that the recorded length matches.
    pub fn check<S>(&self, store: &S) -> Verdict<CheckReport, H>
    where
        S: RbStore<Handle = H> + ?Sized,
        C: Comparator<S::Item>,
    {
        if let Some(root) = self.root {
            if store.is_red(Some(root)) {
                return Err(InvariantViolation::RedRoot(root));
            }
            if store.parent(root).is_some() {
                return Err(InvariantViolation::RootHasParent(root));
            }
        }

        let mut walk = Walk {
            store,
            cmp: &self.cmp,
            limit: self.len,
            seen: 0,
        };
        let black_height = walk.subtree(self.root, None, None, None)?;
        if walk.seen != self.len {
            return Err(InvariantViolation::Length {
                recorded: self.len,
                found: walk.seen,
            });
        }
        Ok(CheckReport {
            black_height,
            nodes: walk.seen,
        })
    }
}
