use alloc::{sync::Arc, vec::Vec};
use core::fmt::{self, Formatter, Debug};
use arrayvec::ArrayVec;
use crate::Side;

/// A shared reference to an optional child subtree.
pub(super) type Link<V> = Option<Arc<Node<V>>>;

/// An immutable vertex of a binary tree.
///
/// Nodes are always handed out behind an [`Arc`], since every cursor and breadcrumb which passes through a node holds a strong reference to it. There is no way to obtain a mutable reference to a node once it's been built; edits go through a [`Cursor`], which builds new nodes around the unchanged ones instead.
///
/// [`Arc`]: https://doc.rust-lang.org/std/sync/struct.Arc.html " "
/// [`Cursor`]: struct.Cursor.html " "
pub struct Node<V> {
    pub(super) value: V,
    pub(super) left: Link<V>,
    pub(super) right: Link<V>,
}
impl<V> Node<V> {
    /// Builds a node with the specified value and children.
    #[inline]
    pub fn new(value: V, left: Option<Arc<Self>>, right: Option<Arc<Self>>) -> Arc<Self> {
        Arc::new(Self { value, left, right })
    }
    /// Builds a node without children.
    #[inline]
    pub fn leaf(value: V) -> Arc<Self> {
        Self::new(value, None, None)
    }
    /// Returns a reference to the value stored in the node.
    #[inline(always)]
    pub const fn value(&self) -> &V {
        &self.value
    }
    /// Returns the left subtree, if there is one.
    #[inline(always)]
    pub const fn left(&self) -> Option<&Arc<Self>> {
        self.left.as_ref()
    }
    /// Returns the right subtree, if there is one.
    #[inline(always)]
    pub const fn right(&self) -> Option<&Arc<Self>> {
        self.right.as_ref()
    }
    /// Returns the subtree on the specified side, if there is one.
    #[inline]
    pub const fn child(&self, side: Side) -> Option<&Arc<Self>> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }
    /// Returns the children which are present, the left one first.
    #[inline]
    pub fn children(&self) -> ArrayVec<[&Arc<Self>; 2]> {
        let mut children = ArrayVec::new();
        children.extend(self.left.iter());
        children.extend(self.right.iter());
        children
    }
    /// Returns `true` if the node has no children, `false` otherwise.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
    /// Counts the nodes in the subtree rooted at this node, including itself.
    ///
    /// Shared subtrees are counted once for every place they appear in.
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut pending = Vec::new();
        pending.push(self);
        while let Some(node) = pending.pop() {
            size += 1;
            pending.extend(node.children().into_iter().map(|child| &**child));
        }
        size
    }
}
impl<V> Drop for Node<V> {
    /// Tears the subtree down without recursion. Children which are still shared with other trees are only released, not dismantled.
    fn drop(&mut self) {
        let mut pending: Vec<Arc<Self>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(node) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(node) {
                pending.extend(node.left.take());
                pending.extend(node.right.take());
            }
        }
    }
}
impl<V: PartialEq> PartialEq for Node<V> {
    /// Compares two subtrees by value. Subtrees which are literally the same allocation are equal without being walked.
    fn eq(&self, other: &Self) -> bool {
        // Pairs of subtrees still to be compared. Kept on the heap, since trees can be arbitrarily deep.
        let mut pending: Vec<(&Self, &Self)> = Vec::new();
        pending.push((self, other));
        while let Some((a, b)) = pending.pop() {
            if core::ptr::eq(a, b) {
                continue;
            }
            if a.value != b.value {
                return false;
            }
            for &(x, y) in [(&a.left, &b.left), (&a.right, &b.right)].iter() {
                match (x, y) {
                    (Some(x), Some(y)) => pending.push((&**x, &**y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}
impl<V: Eq> Eq for Node<V> {}
impl<V: Debug> Debug for Node<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}
