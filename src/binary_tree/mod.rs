//! Persistent binary trees and the zipper cursor used to walk and edit them.
//!
//! A tree is made of immutable, reference-counted [`Node`]s. A [`Cursor`] focuses on one of them and remembers the way back to the root as a chain of [`Breadcrumb`]s. Both nodes and breadcrumbs are shared between every cursor which can reach them, so keeping old versions of a tree around is free: they simply continue to hold on to the nodes they were built from.
//!
//! # Example
//! ```rust
//! use zipwood::binary_tree::{Cursor, Node};
//!
//! // Build the tree `1(2, 3)` directly from nodes.
//! let tree = Node::new(1, Some(Node::leaf(2)), Some(Node::leaf(3)));
//! let root = Cursor::from_root(tree.clone());
//!
//! // Walk down to the right child and change its value.
//! let edited = root.move_right().set(30);
//! assert_eq!(edited.get(), 30);
//! assert_eq!(edited.depth(), 1);
//!
//! // Going back up rebuilds the root with the edit in place...
//! let edited_root = edited.move_up();
//! assert_eq!(edited_root.move_right().get(), 30);
//! // ...and reuses the left subtree rather than copying it.
//! assert!(std::sync::Arc::ptr_eq(
//!     edited_root.focus().left().unwrap(),
//!     tree.left().unwrap(),
//! ));
//! // The tree we started with is unaffected.
//! assert_eq!(root.move_right().get(), 3);
//! ```

mod node;
mod breadcrumb;
mod cursor;

pub use node::Node;
pub use breadcrumb::{Breadcrumb, Ancestors};
pub use cursor::Cursor;

#[cfg(test)]
mod tests;
