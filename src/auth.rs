//! Auth-domain identifiers and credential models.

pub mod credential;
pub mod id;

pub use credential::*;
pub use id::*;
