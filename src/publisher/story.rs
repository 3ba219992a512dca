//! Story publishing: attaching a created object to a user action.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credential, ObjectId, UserId},
	http::{GraphHttpClient, GraphRequest},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	publisher::{Publisher, common::PublishReceipt},
};

/// Request describing one story publish against `me/{action_type}`.
#[derive(Clone, Debug)]
pub struct StoryRequest {
	/// Action type; dot separated for common actions (`og.likes`, `books.reads`) or
	/// colon separated for custom ones (`cookbook:eat`).
	pub action_type: String,
	/// Identifier of the previously created object the story references.
	pub object_id: ObjectId,
	/// Credential source; a request without one fails before any network call.
	pub credential: Option<Credential>,
}
impl StoryRequest {
	/// Creates a request without a credential attached.
	pub fn new(action_type: impl Into<String>, object_id: ObjectId) -> Self {
		Self { action_type: action_type.into(), object_id, credential: None }
	}

	/// Attaches a direct access token.
	pub fn with_token(mut self, token: AccessToken) -> Self {
		self.credential = Some(Credential::Token(token));

		self
	}

	/// Attaches a user identifier whose stored token will be looked up.
	pub fn for_user(mut self, user: UserId) -> Self {
		self.credential = Some(Credential::User(user));

		self
	}
}

impl<C> Publisher<C>
where
	C: ?Sized + GraphHttpClient,
{
	/// Publishes a story referencing a previously created object.
	///
	/// The credential is resolved first (direct token, or store lookup by user id);
	/// only then does the network call fire. Despite what the endpoint documentation
	/// suggests, the object id must travel under the `object` form key.
	pub async fn publish_story(&self, request: StoryRequest) -> Result<PublishReceipt> {
		const KIND: FlowKind = FlowKind::StoryPublish;

		let span = FlowSpan::new(KIND, "publish_story");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let token = self.resolve_token(request.credential.as_ref()).await?;
				let url = self.config.endpoint(&format!("me/{}", request.action_type))?;
				let request = GraphRequest::post(url)
					.form("access_token", token.expose())
					.form("object", request.object_id.as_ref());

				self.send(request).await?.decode()
			})
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}
}
