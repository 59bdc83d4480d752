//! Error taxonomy for store operations.

use thiserror::Error;

/// Recoverable errors raised by `TodoStore` operations.
///
/// Every failure is checked before any mutation, so a returned error means
/// the store is unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("parent todo with ID {0} not found")]
    InvalidParent(u32),

    #[error("todo with ID {0} not found")]
    NotFound(u32),
}
