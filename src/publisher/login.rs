//! Social login via the `me` endpoint.

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	http::{GraphHttpClient, GraphRequest},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	publisher::Publisher,
	session::{PROVIDER, SessionRecord, SocialProfile},
};

/// Profile fields returned by the `me` endpoint.
///
/// Only the fields the session backend consumes are decoded; anything else the
/// provider returns is ignored. Name parts are optional because the granted scope
/// controls which fields are visible.
#[derive(Clone, Debug, Deserialize)]
pub struct MeProfile {
	/// Provider-assigned user identifier.
	pub id: String,
	/// Given name, when visible.
	#[serde(default)]
	pub first_name: Option<String>,
	/// Family name, when visible.
	#[serde(default)]
	pub last_name: Option<String>,
	/// Email address; only present when the `email` scope was granted.
	#[serde(default)]
	pub email: Option<String>,
}

impl<C> Publisher<C>
where
	C: ?Sized + GraphHttpClient,
{
	/// Fetches the token owner's profile and finalizes a login with the session backend.
	///
	/// The `me` call and the session finalization run strictly sequentially; a failure
	/// in either step surfaces untouched and the other collaborator is never invoked
	/// out of order.
	pub async fn login_with_token(&self, token: AccessToken) -> Result<SessionRecord> {
		const KIND: FlowKind = FlowKind::Login;

		let span = FlowSpan::new(KIND, "login_with_token");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.config.endpoint("me")?;
				let request = GraphRequest::get(url).query("access_token", token.expose());
				let profile: MeProfile = self.send(request).await?.decode()?;
				let profile = SocialProfile {
					provider: PROVIDER,
					provider_user_id: profile.id,
					first_name: profile.first_name,
					last_name: profile.last_name,
					email: profile.email,
					token,
				};

				let record = self.sessions.social_login(profile).await?;

				Ok(record)
			})
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}
}
