//! Shared helpers for publish operations (credential resolution, request dispatch).

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credential},
	graph::GraphResponse,
	http::{GraphHttpClient, GraphRequest},
	publisher::Publisher,
};

/// Receipt returned by story and feed publishes.
///
/// The Graph API answers write calls with a post identifier; older API versions
/// occasionally answer with a bare confirmation instead, so the id stays optional.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PublishReceipt {
	/// Identifier of the published post, when the remote returned one.
	#[serde(default)]
	pub id: Option<String>,
}

impl<C> Publisher<C>
where
	C: ?Sized + GraphHttpClient,
{
	/// Resolves exactly one credential source before a publish call fires.
	///
	/// A direct token is used verbatim and never consults the store; a user identifier
	/// is looked up first and fails with [`Error::CredentialNotFound`] when no token is
	/// stored; an absent credential fails with [`Error::MissingCredential`] without any
	/// network traffic.
	pub(crate) async fn resolve_token(
		&self,
		credential: Option<&Credential>,
	) -> Result<AccessToken> {
		match credential {
			Some(Credential::Token(token)) => Ok(token.clone()),
			Some(Credential::User(user)) => self
				.store
				.fetch_token(user)
				.await?
				.ok_or_else(|| Error::CredentialNotFound { user_id: user.clone() }),
			None => Err(Error::MissingCredential),
		}
	}

	/// Executes one request and normalizes the response.
	pub(crate) async fn send(&self, request: GraphRequest) -> Result<GraphResponse> {
		let raw = self.http_client.execute(request).await?;

		GraphResponse::from_raw(raw)
	}
}
