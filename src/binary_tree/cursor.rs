use alloc::sync::Arc;
use core::fmt::{self, Formatter, Debug};
use tracing::trace;
use crate::Side;
use super::{
    node::Node,
    breadcrumb::{Breadcrumb, Ancestors},
};

/// A focused position inside an immutable binary tree.
///
/// The cursor is a pair of the subtree currently in focus and the chain of breadcrumbs leading from it back to the root. It's a plain value: every operation takes the cursor by reference and returns a new one, leaving the original (and every tree version it can see) untouched. Cloning a cursor only bumps two reference counts.
///
/// Operations which cannot be carried out, such as moving towards a missing child or moving up from the root, return an unchanged clone of the cursor instead of failing.
pub struct Cursor<V> {
    focus: Arc<Node<V>>,
    path: Option<Arc<Breadcrumb<V>>>,
}
impl<V> Cursor<V> {
    /// Creates a tree consisting of a single node with the specified value and returns a cursor at its root.
    #[inline]
    pub fn new(value: V) -> Self {
        Self::from_root(Node::leaf(value))
    }
    /// Returns a cursor at the root of an existing tree.
    #[inline(always)]
    pub const fn from_root(root: Arc<Node<V>>) -> Self {
        Self {
            focus: root,
            path: None,
        }
    }
    /// Returns the subtree in focus.
    #[inline(always)]
    pub const fn focus(&self) -> &Arc<Node<V>> {
        &self.focus
    }
    /// Returns the breadcrumb closest to the focus, or `None` at the root.
    #[inline(always)]
    pub const fn path(&self) -> Option<&Arc<Breadcrumb<V>>> {
        self.path.as_ref()
    }
    /// Returns `true` if the focus is the root of the tree, `false` otherwise.
    #[inline(always)]
    pub const fn is_root(&self) -> bool {
        self.path.is_none()
    }
    /// Returns `true` if the focus has a left child, `false` otherwise.
    #[inline(always)]
    pub fn has_left(&self) -> bool {
        self.focus.left.is_some()
    }
    /// Returns `true` if the focus has a right child, `false` otherwise.
    #[inline(always)]
    pub fn has_right(&self) -> bool {
        self.focus.right.is_some()
    }
    /// Returns `true` if the focus has a child on the specified side, `false` otherwise.
    #[inline]
    pub fn has_child(&self, side: Side) -> bool {
        match side {
            Side::Left => self.has_left(),
            Side::Right => self.has_right(),
        }
    }
    /// Returns a reference to the value of the focus.
    #[inline(always)]
    pub fn value(&self) -> &V {
        &self.focus.value
    }
    /// Returns which side of its parent the focus is on, or `None` at the root.
    #[inline]
    pub fn side(&self) -> Option<Side> {
        self.path.as_deref().map(Breadcrumb::side)
    }
    /// Returns the number of steps between the focus and the root.
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }
    /// Returns an iterator over the ancestors of the focus, from its parent up to the root.
    #[inline]
    pub fn ancestors(&self) -> Ancestors<'_, V> {
        Ancestors {
            next: self.path.as_deref(),
        }
    }
    /// Returns `true` if both cursors share the very same focus and path allocations, meaning that they are indistinguishable without comparing any values.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.focus, &other.focus)
            && match (&self.path, &other.path) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }

    /// Discards the left subtree and the focus itself, replacing the focus with its right child in the same position.
    ///
    /// The suffix names the side which gets *discarded*. If there is no right child, returns an unchanged cursor.
    pub fn prune_left(&self) -> Self {
        self.replace_with_child(Side::Right)
    }
    /// Discards the right subtree and the focus itself, replacing the focus with its left child in the same position.
    ///
    /// The suffix names the side which gets *discarded*. If there is no left child, returns an unchanged cursor.
    pub fn prune_right(&self) -> Self {
        self.replace_with_child(Side::Left)
    }
    fn replace_with_child(&self, kept: Side) -> Self {
        match self.focus.child(kept) {
            Some(child) => Self {
                focus: Arc::clone(child),
                path: self.path.clone(),
            },
            None => {
                trace!(%kept, "no child to keep, pruning nothing");
                self.clone()
            }
        }
    }
}
impl<V: Clone> Cursor<V> {
    /// Returns a copy of the value of the focus.
    #[inline]
    pub fn get(&self) -> V {
        self.focus.value.clone()
    }
    /// Replaces the value of the focus, keeping its children and position.
    pub fn set(&self, value: V) -> Self {
        Self {
            focus: Node::new(value, self.focus.left.clone(), self.focus.right.clone()),
            path: self.path.clone(),
        }
    }

    /// Moves to the parent of the focus, rebuilding it around the current focus.
    ///
    /// At the root, returns an unchanged cursor.
    pub fn move_up(&self) -> Self {
        match &self.path {
            Some(crumb) => Self {
                focus: crumb.rebuild(Arc::clone(&self.focus)),
                path: crumb.parent.clone(),
            },
            None => {
                trace!("move_up requested at the root, staying in place");
                self.clone()
            }
        }
    }
    /// Moves to the left child of the focus.
    ///
    /// If there is no left child, returns an unchanged cursor.
    #[inline]
    pub fn move_left(&self) -> Self {
        self.move_to(Side::Left)
    }
    /// Moves to the right child of the focus.
    ///
    /// If there is no right child, returns an unchanged cursor.
    #[inline]
    pub fn move_right(&self) -> Self {
        self.move_to(Side::Right)
    }
    /// Moves to the child on the specified side of the focus, leaving a breadcrumb behind.
    ///
    /// If there is no such child, returns an unchanged cursor.
    pub fn move_to(&self, side: Side) -> Self {
        let child = match self.focus.child(side) {
            Some(child) => Arc::clone(child),
            None => {
                trace!(%side, "no child to move to, staying in place");
                return self.clone();
            }
        };
        let crumb = Breadcrumb {
            parent_value: self.focus.value.clone(),
            from_left: side.is_left(),
            sibling: self.focus.child(side.opposite()).cloned(),
            parent: self.path.clone(),
        };
        Self {
            focus: child,
            path: Some(Arc::new(crumb)),
        }
    }
    /// Moves up until the focus is the root of the tree.
    pub fn to_root(&self) -> Self {
        let mut cursor = self.clone();
        while !cursor.is_root() {
            cursor = cursor.move_up();
        }
        cursor
    }
    /// Returns the whole tree the cursor is in, including every edit made along the way.
    #[inline]
    pub fn tree(&self) -> Arc<Node<V>> {
        self.to_root().focus
    }

    /// Inserts a new focus above the current one, which becomes its left child.
    ///
    /// The old right subtree is moved up one level to become the right child of the new focus, while the old focus is rebuilt without a right child. The path is left intact.
    pub fn push_left(&self, value: V) -> Self {
        let demoted = Node::new(self.focus.value.clone(), self.focus.left.clone(), None);
        Self {
            focus: Node::new(value, Some(demoted), self.focus.right.clone()),
            path: self.path.clone(),
        }
    }
    /// Inserts a new focus above the current one, which becomes its right child.
    ///
    /// The old left subtree is moved up one level to become the left child of the new focus, while the old focus is rebuilt without a left child. The path is left intact.
    pub fn push_right(&self, value: V) -> Self {
        let demoted = Node::new(self.focus.value.clone(), None, self.focus.right.clone());
        Self {
            focus: Node::new(value, self.focus.left.clone(), Some(demoted)),
            path: self.path.clone(),
        }
    }
}
impl<V> Clone for Cursor<V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            focus: Arc::clone(&self.focus),
            path: self.path.clone(),
        }
    }
}
impl<V: PartialEq> PartialEq for Cursor<V> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || (self.focus == other.focus && self.path == other.path)
    }
}
impl<V: Eq> Eq for Cursor<V> {}
impl<V: Debug> Debug for Cursor<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("focus", &self.focus)
            .field("path", &self.path)
            .finish()
    }
}
impl<V> From<Arc<Node<V>>> for Cursor<V> {
    #[inline]
    fn from(root: Arc<Node<V>>) -> Self {
        Self::from_root(root)
    }
}
