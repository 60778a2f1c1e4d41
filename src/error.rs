//! Registry and stylesheet errors.

use thiserror::Error;

/// Error returned by the host stylesheet when it refuses an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// The rule text is not exactly one well-formed rule.
    #[error("failed to parse rule: {rule}")]
    Syntax { rule: String },
    /// The index lies outside the current rule list.
    #[error("rule index {index} out of bounds for sheet of {len} rules")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Error returned by [`Registry`](crate::Registry) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The style container has no usable stylesheet.
    ///
    /// The container is created when the registry attaches, so this only
    /// happens when something detached it afterwards.
    #[error("unavailable")]
    Unavailable,
    /// The animation shorthand passed to `keyframed` has no trailing name.
    #[error("invalid animation: {0}")]
    InvalidAnimation(String),
    /// The host stylesheet rejected the rule.
    #[error(transparent)]
    Rejected(#[from] SheetError),
}
