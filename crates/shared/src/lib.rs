pub mod domain;
pub mod error;

pub use domain::{Role, UserDraft, UserId, UserRecord};
pub use error::StoreError;

#[cfg(test)]
mod tests;
