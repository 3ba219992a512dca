//! Session collaborator contract finalizing social logins.

pub mod memory;

pub use memory::MemorySessions;

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, UserId},
};

/// Provider label attached to every profile produced by the login flow.
pub const PROVIDER: &str = "facebook";

/// Boxed future returned by [`SessionBackend`] implementations.
pub type SessionFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SessionError>> + 'a + Send>>;

/// Normalized profile handed to the session backend after a `me` lookup.
#[derive(Clone, Debug)]
pub struct SocialProfile {
	/// Provider label (always [`PROVIDER`] for this crate).
	pub provider: &'static str,
	/// User identifier assigned by the provider.
	pub provider_user_id: String,
	/// Given name reported by the provider.
	pub first_name: Option<String>,
	/// Family name reported by the provider.
	pub last_name: Option<String>,
	/// Email address, when the granted scope exposes one.
	pub email: Option<String>,
	/// Bearer token the profile was fetched with; stored for later publishing.
	pub token: AccessToken,
}

/// Session record returned once a social login has been finalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRecord {
	/// Local user the login resolved to.
	pub user_id: UserId,
	/// Whether the login imported a new user rather than matching an existing one.
	pub created: bool,
}

/// Auth collaborator that turns a normalized profile into a logged-in session.
///
/// Implementations own user import and whatever session state the host application
/// keeps; the publisher only forwards the normalized profile and surfaces the result.
pub trait SessionBackend
where
	Self: Send + Sync,
{
	/// Finalizes a login for the provided profile.
	fn social_login(&self, profile: SocialProfile) -> SessionFuture<'_, SessionRecord>;
}

/// Error type produced by [`SessionBackend`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum SessionError {
	/// The backend refused to log the profile in.
	#[error("Login rejected: {reason}.")]
	Rejected {
		/// Human-readable rejection reason.
		reason: String,
	},
	/// Backend-level failure for the session engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
