//! Node model: colour, the embedded link record and the accessor traits

use rbkit_core::Store;

/// Red-Black tree node color
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Red = 0,
    Black = 1,
}

/// Which child slot of a node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Tree links embedded in a host record.
///
/// Absent neighbours are `None`; an absent node reads as black. A link that
/// is not part of any tree has no neighbours, is black and reports
/// `is_linked() == false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RbLink<H> {
    pub(crate) parent: Option<H>,
    pub(crate) left: Option<H>,
    pub(crate) right: Option<H>,
    pub(crate) color: Color,
    pub(crate) linked: bool,
}

impl<H> RbLink<H> {
    /// Create an unlinked node
    pub const fn new() -> Self {
        Self {
            parent: None,
            left: None,
            right: None,
            color: Color::Black,
            linked: false,
        }
    }

    /// Return the link to the unlinked state.
    ///
    /// Only meaningful for links that are not part of a live tree; resetting
    /// a member leaves its neighbours pointing at it.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Check if the node is currently a tree member
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_red(&self) -> bool {
        self.linked && self.color == Color::Red
    }

    pub fn is_black(&self) -> bool {
        !self.is_red()
    }
}

impl<H: Copy> RbLink<H> {
    pub fn parent(&self) -> Option<H> {
        self.parent
    }

    pub fn left(&self) -> Option<H> {
        self.left
    }

    pub fn right(&self) -> Option<H> {
        self.right
    }
}

impl<H> Default for RbLink<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Host records that can be linked into an `RbTree`.
///
/// This is the field binding: implementors hand out the `RbLink` they embed,
/// wherever it sits in the record.
pub trait RbNode<H> {
    fn link(&self) -> &RbLink<H>;

    fn link_mut(&mut self) -> &mut RbLink<H>;
}

/// Link accessors over a store of `RbNode`s.
///
/// Implemented for every store whose items are `RbNode`s; the tree
/// algorithms only ever touch nodes through these methods.
pub trait RbStore: Store {
    fn link(&self, node: Self::Handle) -> &RbLink<Self::Handle>;

    fn link_mut(&mut self, node: Self::Handle) -> &mut RbLink<Self::Handle>;

    #[inline]
    fn parent(&self, node: Self::Handle) -> Option<Self::Handle> {
        self.link(node).parent
    }

    #[inline]
    fn left(&self, node: Self::Handle) -> Option<Self::Handle> {
        self.link(node).left
    }

    #[inline]
    fn right(&self, node: Self::Handle) -> Option<Self::Handle> {
        self.link(node).right
    }

    #[inline]
    fn color(&self, node: Self::Handle) -> Color {
        self.link(node).color
    }

    /// Color of a possibly absent node; absent nodes are black.
    #[inline]
    fn color_of(&self, node: Option<Self::Handle>) -> Color {
        node.map_or(Color::Black, |n| self.color(n))
    }

    #[inline]
    fn is_red(&self, node: Option<Self::Handle>) -> bool {
        self.color_of(node) == Color::Red
    }

    #[inline]
    fn set_parent(&mut self, node: Self::Handle, parent: Option<Self::Handle>) {
        self.link_mut(node).parent = parent;
    }

    #[inline]
    fn set_left(&mut self, node: Self::Handle, left: Option<Self::Handle>) {
        self.link_mut(node).left = left;
    }

    #[inline]
    fn set_right(&mut self, node: Self::Handle, right: Option<Self::Handle>) {
        self.link_mut(node).right = right;
    }

    #[inline]
    fn set_color(&mut self, node: Self::Handle, color: Color) {
        self.link_mut(node).color = color;
    }
}

impl<S> RbStore for S
where
    S: Store + ?Sized,
    S::Item: RbNode<S::Handle>,
{
    #[inline]
    fn link(&self, node: S::Handle) -> &RbLink<S::Handle> {
        self.get(node).link()
    }

    #[inline]
    fn link_mut(&mut self, node: S::Handle) -> &mut RbLink<S::Handle> {
        self.get_mut(node).link_mut()
    }
}

/// Side-indexed access used by the mirrored fix-up cases.
pub(crate) trait Sided: RbStore {
    #[inline]
    fn child(&self, node: Self::Handle, side: Side) -> Option<Self::Handle> {
        match side {
            Side::Left => self.left(node),
            Side::Right => self.right(node),
        }
    }

    #[inline]
    fn set_child(&mut self, node: Self::Handle, side: Side, child: Option<Self::Handle>) {
        match side {
            Side::Left => self.set_left(node, child),
            Side::Right => self.set_right(node, child),
        }
    }

    /// Which side of `parent` holds `child` (absent children included).
    #[inline]
    fn side_of(&self, parent: Self::Handle, child: Option<Self::Handle>) -> Side {
        if self.left(parent) == child {
            Side::Left
        } else {
            Side::Right
        }
    }
}

impl<S: RbStore + ?Sized> Sided for S {}

static_assertions::assert_eq_size!(RbLink<u32>, [u32; 7]);
static_assertions::assert_impl_all!(RbLink<usize>: Send, Sync, Copy);
