//! Implements a persistent binary tree and a zipper-based cursor to navigate and edit it.
//!
//! ------------------------
//!
//! # Overview
//! Zipwood's trees are *immutable*: once a node is built, nothing ever writes to it again. Instead of mutating the tree in place, every navigation and editing operation on a [`Cursor`] produces a brand new cursor, and the new cursor reuses every subtree that the operation did not touch. Old cursors stay valid and keep observing the exact tree they were created for, so previous versions of a tree can be kept around for free and shared between threads without locking.
//!
//! The technique used for this is the [zipper] described by Gérard Huet. A cursor is a pair of the subtree currently in *focus* and a chain of *breadcrumbs* leading back to the root. Each breadcrumb remembers the value of an ancestor, the sibling subtree which was not descended into and the side which was. This is exactly enough information to rebuild the ancestor when moving back up, so moving around costs `O(1)` per step and an edit deep down in the tree only allocates new nodes along the path to the root, never copying unrelated subtrees.
//!
//! # Example
//! ```rust
//! use zipwood::Cursor;
//!
//! let root = Cursor::new(10);
//! // Make 5 the new focus, demoting 10 to become its left child.
//! let pushed = root.push_left(5);
//! assert_eq!(pushed.get(), 5);
//! assert!(pushed.has_left() && !pushed.has_right());
//!
//! let down = pushed.move_left();
//! assert_eq!(down.get(), 10);
//! assert_eq!(down.move_up(), pushed);
//! // The original cursor was never touched.
//! assert_eq!(root.get(), 10);
//! assert!(!root.has_left());
//! ```
//!
//! # Failing operations
//! Navigating towards a child which does not exist, pruning a subtree when the kept side is missing and moving up from the root never fail and never panic: they return an unchanged copy of the cursor. Use [`has_left`], [`has_right`] and [`is_root`] beforehand if the difference between "moved" and "stayed" matters.
//!
//! # Feature flags
//! - `std` (**enabled by default**) - enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the evaluator's error type and forwards to the `std` feature of `tracing`. The crate always requires `alloc`, since nodes are shared using [`Arc`].
//! - `expr` (**enabled by default**) - adds the [`expr`] module, which evaluates binary expression trees by walking a cursor.
//! - `doc_cfg` - annotates feature-gated items for documentation builds. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `arrayvec` (**required**) - `^0.5`
//!
//! [zipper]: https://www.st.cs.uni-saarland.de/edu/seminare/2005/advanced-fp/docs/huet-zipper.pdf " "
//! [`Cursor`]: binary_tree/struct.Cursor.html " "
//! [`has_left`]: binary_tree/struct.Cursor.html#method.has_left " "
//! [`has_right`]: binary_tree/struct.Cursor.html#method.has_right " "
//! [`is_root`]: binary_tree/struct.Cursor.html#method.is_root " "
//! [`expr`]: expr/index.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Arc`]: https://doc.rust-lang.org/std/sync/struct.Arc.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod binary_tree;
#[doc(no_inline)]
pub use binary_tree::{Cursor, Node, Breadcrumb};

#[cfg(feature = "expr")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "expr")))]
pub mod expr;

/// A prelude for using Zipwood, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        Cursor as TreeCursor,
        Node as TreeNode,
        Breadcrumb as TreeBreadcrumb,
    };
    #[doc(no_inline)]
    pub use crate::Side as TreeSide;
    #[cfg(feature = "expr")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "expr")))]
    #[doc(no_inline)]
    pub use crate::expr::{
        ExprNode,
        BinaryFn,
        EvalOptions,
        EvalError,
        MissingOperand,
    };
}

use core::fmt::{self, Formatter, Display};

/// One of the two sides of a binary tree node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child, or the direction towards it.
    Left,
    /// The right child, or the direction towards it.
    Right,
}
impl Side {
    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
    /// Returns `true` for `Side::Left`, `false` otherwise.
    #[inline(always)]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::Left)
    }
    /// Returns `true` for `Side::Right`, `false` otherwise.
    #[inline(always)]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }
}
impl Display for Side {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}
