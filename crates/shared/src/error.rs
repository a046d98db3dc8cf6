use thiserror::Error;

use crate::domain::UserId;

/// Store lookup failures. Normal orchestrator flow never produces these
/// (ids are allocated by the store itself), so callers treat them as
/// programming faults rather than recoverable user errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("user id {0} already present in store")]
    DuplicateId(UserId),
    #[error("no user with id {0}")]
    NotFound(UserId),
}
