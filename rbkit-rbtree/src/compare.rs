//! Comparators ordering the host records of a tree

use core::cmp::Ordering;

/// Total order over host records.
///
/// Must be deterministic and consistent for as long as the records are in a
/// tree. Records comparing `Equal` are the same key; the tree holds at most
/// one of them.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders records by their own `Ord` implementation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders records by a key extracted from each of them.
#[derive(Debug, Default, Copy, Clone)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Comparator<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_comparator() {
        let reversed = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
    }

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&3, &3), Ordering::Equal);
        assert_eq!(NaturalOrder.compare("a", "b"), Ordering::Less);
    }

    #[test]
    fn test_by_key() {
        let by_len = ByKey(|s: &&str| s.len());
        assert_eq!(by_len.compare(&"abc", &"xy"), Ordering::Greater);
        assert_eq!(by_len.compare(&"ab", &"xy"), Ordering::Equal);
    }
}
