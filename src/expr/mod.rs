//! Binary expression trees evaluated by walking a [`Cursor`].
//!
//! Every node of an expression tree is an [`ExprNode`]: a constant, a binary function applied to the values of its two subtrees, or the variable placeholder which gets substituted with a caller-supplied value. Evaluation starts at the cursor's focus, so any subexpression can be evaluated on its own by navigating to it first.
//!
//! # Example
//! ```rust
//! use zipwood::{Cursor, binary_tree::Node, expr::ExprNode};
//!
//! // x * (x + 1)
//! let tree = Node::new(
//!     ExprNode::func(|a: i64, b| a * b),
//!     Some(Node::leaf(ExprNode::Var)),
//!     Some(Node::new(
//!         ExprNode::func(|a: i64, b| a + b),
//!         Some(Node::leaf(ExprNode::Var)),
//!         Some(Node::leaf(ExprNode::Const(1))),
//!     )),
//! );
//! let cursor = Cursor::from_root(tree);
//! assert_eq!(cursor.evaluate(4), Ok(20));
//! // Only the right-hand side.
//! assert_eq!(cursor.move_right().evaluate(4), Ok(5));
//!
//! let square_plus_x = cursor.calculation();
//! assert_eq!(square_plus_x(2), Ok(6));
//! ```
//!
//! [`Cursor`]: ../binary_tree/struct.Cursor.html " "
//! [`ExprNode`]: enum.ExprNode.html " "

use alloc::sync::Arc;
use core::fmt::{self, Formatter, Debug, Display};
use tracing::{debug, trace};
use crate::{binary_tree::Cursor, Side};

/// A stored binary function over the values of an expression tree.
///
/// Cloning only clones the reference to the function. Two `BinaryFn`s are equal if and only if they are clones of each other.
pub struct BinaryFn<Q>(Arc<dyn Fn(Q, Q) -> Q + Send + Sync>);
impl<Q> BinaryFn<Q> {
    /// Wraps a closure or function.
    #[inline]
    pub fn new(f: impl Fn(Q, Q) -> Q + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }
    /// Applies the function to the values of the left and right operands.
    #[inline]
    pub fn call(&self, left: Q, right: Q) -> Q {
        (self.0)(left, right)
    }
}
impl<Q> Clone for BinaryFn<Q> {
    #[inline]
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
impl<Q> PartialEq for BinaryFn<Q> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl<Q> Eq for BinaryFn<Q> {}
impl<Q> Debug for BinaryFn<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BinaryFn")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

/// The payload of a node of an expression tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprNode<Q> {
    /// A constant, evaluating to itself regardless of children.
    Const(Q),
    /// A binary function, evaluating to the result of applying it to the values of the left and right subtrees.
    Func(BinaryFn<Q>),
    /// The variable, evaluating to the value supplied by the caller regardless of children.
    Var,
}
impl<Q> ExprNode<Q> {
    /// Creates a function node from a closure or function.
    #[inline]
    pub fn func(f: impl Fn(Q, Q) -> Q + Send + Sync + 'static) -> Self {
        Self::Func(BinaryFn::new(f))
    }
    /// Returns a short name for the kind of the node.
    #[inline]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Const(..) => "const",
            Self::Func(..) => "func",
            Self::Var => "var",
        }
    }
}
impl<Q> From<BinaryFn<Q>> for ExprNode<Q> {
    #[inline]
    fn from(f: BinaryFn<Q>) -> Self {
        Self::Func(f)
    }
}

/// What to do when a function node lacks one of its operands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MissingOperand {
    /// Use `Q::default()` (zero, for numbers) in place of the missing operand.
    Default,
    /// Fail with [`EvalError::MissingOperand`].
    ///
    /// [`EvalError::MissingOperand`]: enum.EvalError.html#variant.MissingOperand " "
    Error,
}
impl Default for MissingOperand {
    #[inline(always)]
    fn default() -> Self {
        Self::Default
    }
}

/// Settings for evaluating expression trees.
///
/// The default settings substitute missing operands with `Q::default()` and do not limit the depth of recursion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EvalOptions {
    /// What to do when a function node lacks one of its operands.
    pub missing_operand: MissingOperand,
    /// The deepest level below the starting focus which may be evaluated, with the focus itself being level `0`. `None` disables the limit.
    pub max_depth: Option<usize>,
}
impl EvalOptions {
    /// Sets the behavior for function nodes with missing operands.
    #[inline]
    pub fn missing_operand(mut self, missing_operand: MissingOperand) -> Self {
        self.missing_operand = missing_operand;
        self
    }
    /// Sets the depth limit.
    #[inline]
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// The error type returned when evaluating an expression tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EvalError {
    /// A function node lacked an operand and [`MissingOperand::Error`] was requested.
    ///
    /// [`MissingOperand::Error`]: enum.MissingOperand.html#variant.Error " "
    MissingOperand {
        /// The side on which the operand is missing.
        side: Side,
        /// The level of the function node below the starting focus.
        depth: usize,
    },
    /// The expression is nested deeper than the configured limit.
    DepthLimitExceeded {
        /// The limit which was exceeded.
        limit: usize,
    },
}
impl Display for EvalError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOperand { side, depth } => f.pad(&alloc::format!(
                "function node at depth {} has no {} operand",
                depth, side,
            )),
            Self::DepthLimitExceeded { limit } => f.pad(&alloc::format!(
                "expression is nested deeper than the limit of {} levels",
                limit,
            )),
        }
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for EvalError {}

impl<Q: Clone + Default> Cursor<ExprNode<Q>> {
    /// Evaluates the expression rooted at the focus with the default [`EvalOptions`], substituting `var` for the variable.
    ///
    /// [`EvalOptions`]: ../expr/struct.EvalOptions.html " "
    #[inline]
    pub fn evaluate(&self, var: Q) -> Result<Q, EvalError> {
        self.evaluate_with(var, EvalOptions::default())
    }
    /// Evaluates the expression rooted at the focus with the specified options, substituting `var` for the variable.
    pub fn evaluate_with(&self, var: Q, options: EvalOptions) -> Result<Q, EvalError> {
        let result = evaluate_at(self, &var, &options, 0);
        if let Err(error) = &result {
            debug!(%error, "expression evaluation failed");
        }
        result
    }
    /// Returns the expression rooted at the focus as a function of the variable.
    ///
    /// The function holds on to a clone of the cursor, so later edits made through other cursors do not affect it.
    pub fn calculation(&self) -> impl Fn(Q) -> Result<Q, EvalError> {
        let cursor = self.clone();
        move |var| cursor.evaluate(var)
    }
}

fn evaluate_at<Q: Clone + Default>(
    cursor: &Cursor<ExprNode<Q>>,
    var: &Q,
    options: &EvalOptions,
    depth: usize,
) -> Result<Q, EvalError> {
    if let Some(limit) = options.max_depth {
        if depth > limit {
            return Err(EvalError::DepthLimitExceeded { limit });
        }
    }
    let node = cursor.value();
    trace!(kind = node.kind_name(), depth, "evaluating expression node");
    match node {
        ExprNode::Const(value) => Ok(value.clone()),
        ExprNode::Var => Ok(var.clone()),
        ExprNode::Func(f) => {
            let left = operand(cursor, Side::Left, var, options, depth)?;
            let right = operand(cursor, Side::Right, var, options, depth)?;
            Ok(f.call(left, right))
        }
    }
}

fn operand<Q: Clone + Default>(
    cursor: &Cursor<ExprNode<Q>>,
    side: Side,
    var: &Q,
    options: &EvalOptions,
    depth: usize,
) -> Result<Q, EvalError> {
    if cursor.has_child(side) {
        return evaluate_at(&cursor.move_to(side), var, options, depth + 1);
    }
    match options.missing_operand {
        MissingOperand::Default => Ok(Q::default()),
        MissingOperand::Error => Err(EvalError::MissingOperand { side, depth }),
    }
}
