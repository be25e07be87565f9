use alloc::sync::Arc;
use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use crate::Side;
use super::node::{Node, Link};

/// One step of the path from a cursor's focus back towards the root.
///
/// A breadcrumb holds what's left of an ancestor after the cursor descended into one of its children: the ancestor's value, the subtree on the side which was *not* descended into, and which side *was*. Breadcrumbs are linked into an immutable chain which may be shared by any number of cursors.
pub struct Breadcrumb<V> {
    pub(super) parent_value: V,
    pub(super) from_left: bool,
    pub(super) sibling: Link<V>,
    pub(super) parent: Option<Arc<Breadcrumb<V>>>,
}
impl<V> Breadcrumb<V> {
    /// Returns the value of the ancestor this breadcrumb stands for.
    #[inline(always)]
    pub const fn parent_value(&self) -> &V {
        &self.parent_value
    }
    /// Returns the side of the ancestor which was descended into.
    #[inline]
    pub const fn side(&self) -> Side {
        if self.from_left {
            Side::Left
        } else {
            Side::Right
        }
    }
    /// Returns the subtree on the opposite side of the one which was descended into.
    #[inline(always)]
    pub const fn sibling(&self) -> Option<&Arc<Node<V>>> {
        self.sibling.as_ref()
    }
    /// Returns the next breadcrumb towards the root, or `None` if the ancestor is the root itself.
    #[inline(always)]
    pub const fn parent(&self) -> Option<&Arc<Self>> {
        self.parent.as_ref()
    }
    /// Rebuilds the ancestor node with `focus` reinserted on the side it was taken from.
    pub(super) fn rebuild(&self, focus: Arc<Node<V>>) -> Arc<Node<V>>
    where
        V: Clone,
    {
        let value = self.parent_value.clone();
        let sibling = self.sibling.clone();
        if self.from_left {
            Node::new(value, Some(focus), sibling)
        } else {
            Node::new(value, sibling, Some(focus))
        }
    }
}
impl<V> Drop for Breadcrumb<V> {
    /// Releases the chain towards the root one breadcrumb at a time, stopping at the first one which is shared.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(crumb) = next {
            next = match Arc::try_unwrap(crumb) {
                Ok(mut crumb) => crumb.parent.take(),
                Err(_) => None,
            };
        }
    }
}
impl<V: PartialEq> PartialEq for Breadcrumb<V> {
    fn eq(&self, other: &Self) -> bool {
        // Walk the chain iteratively, since it can get as long as the tree is deep.
        let mut a = self;
        let mut b = other;
        loop {
            if core::ptr::eq(a, b) {
                return true;
            }
            if a.from_left != b.from_left
                || a.parent_value != b.parent_value
                || a.sibling != b.sibling
            {
                return false;
            }
            match (&a.parent, &b.parent) {
                (Some(next_a), Some(next_b)) => {
                    a = next_a;
                    b = next_b;
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}
impl<V: Eq> Eq for Breadcrumb<V> {}
impl<V: Debug> Debug for Breadcrumb<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Breadcrumb")
            .field("parent_value", &self.parent_value)
            .field("side", &self.side())
            .field("sibling", &self.sibling)
            .field("parent", &self.parent)
            .finish()
    }
}

/// An iterator over the ancestors of a cursor's focus, from the closest one to the root.
///
/// Yields the side of each ancestor which leads to the focus together with the ancestor's value. Created by [`Cursor::ancestors`].
///
/// [`Cursor::ancestors`]: struct.Cursor.html#method.ancestors " "
pub struct Ancestors<'a, V> {
    pub(super) next: Option<&'a Breadcrumb<V>>,
}
impl<'a, V> Iterator for Ancestors<'a, V> {
    type Item = (Side, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let crumb = self.next?;
        self.next = crumb.parent.as_deref();
        Some((crumb.side(), &crumb.parent_value))
    }
}
impl<V> FusedIterator for Ancestors<'_, V> {}
impl<V> Clone for Ancestors<'_, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}
impl<V: Debug> Debug for Ancestors<'_, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
