//! Credential lookup contract and the built-in in-memory implementation.

pub mod memory;

pub use memory::MemoryStore;

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, UserId},
};

/// Boxed future returned by [`CredentialStore`] implementations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Lookup collaborator mapping user identifiers to stored provider tokens.
///
/// The publisher only consults the store when a publish request carries a user
/// identifier instead of a direct token; requests with a direct token never touch it.
pub trait CredentialStore
where
	Self: Send + Sync,
{
	/// Fetches the stored token for a user, if present.
	fn fetch_token<'a>(&'a self, user: &'a UserId) -> StoreFuture<'a, Option<AccessToken>>;

	/// Persists or replaces the stored token for a user.
	fn save_token(&self, user: UserId, token: AccessToken) -> StoreFuture<'_, ()>;
}

/// Error type produced by [`CredentialStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
