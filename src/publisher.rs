//! High-level publish orchestration against a single Graph API application.

pub mod common;
pub mod feed;
pub mod login;
pub mod object;
pub mod story;

mod share;

pub use common::*;
pub use feed::*;
pub use login::*;
pub use object::*;
pub use share::*;
pub use story::*;

// self
use crate::{
	_prelude::*, config::GraphConfig, http::GraphHttpClient, session::SessionBackend,
	store::CredentialStore,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Publisher specialized for the crate's default reqwest transport.
pub type ReqwestPublisher = Publisher<ReqwestHttpClient>;

/// Coordinates Graph API operations for one configured application.
///
/// The publisher owns the HTTP client, the credential store, the session backend, and
/// the application configuration so individual operations can focus on
/// endpoint-specific logic (credential resolution, payload encoding, composite
/// chaining). Every operation issues its calls strictly sequentially; there is no
/// shared mutable state across invocations.
#[derive(Clone)]
pub struct Publisher<C>
where
	C: ?Sized + GraphHttpClient,
{
	/// HTTP client wrapper used for every outbound Graph API request.
	pub http_client: Arc<C>,
	/// Lookup collaborator resolving user identifiers to stored tokens.
	pub store: Arc<dyn CredentialStore>,
	/// Auth collaborator finalizing social logins.
	pub sessions: Arc<dyn SessionBackend>,
	/// Application configuration (id, secret, scope, API base).
	pub config: GraphConfig,
}
impl<C> Publisher<C>
where
	C: ?Sized + GraphHttpClient,
{
	/// Creates a publisher that reuses the caller-provided transport.
	pub fn with_http_client(
		config: GraphConfig,
		store: Arc<dyn CredentialStore>,
		sessions: Arc<dyn SessionBackend>,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), store, sessions, config }
	}
}
#[cfg(feature = "reqwest")]
impl Publisher<ReqwestHttpClient> {
	/// Creates a new publisher with the default reqwest-backed transport.
	pub fn new(
		config: GraphConfig,
		store: Arc<dyn CredentialStore>,
		sessions: Arc<dyn SessionBackend>,
	) -> Self {
		Self::with_http_client(config, store, sessions, ReqwestHttpClient::default())
	}
}
impl<C> Debug for Publisher<C>
where
	C: ?Sized + GraphHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Publisher").field("config", &self.config).finish()
	}
}
