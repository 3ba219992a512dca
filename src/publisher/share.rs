//! Composite share: create an object, then publish the story referencing it.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credential, ObjectId, UserId},
	http::GraphHttpClient,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	publisher::{
		Publisher,
		common::PublishReceipt,
		object::{ObjectPayload, ObjectRequest},
		story::StoryRequest,
	},
};

/// Request describing one composite share.
#[derive(Clone, Debug)]
pub struct ShareRequest {
	/// Open Graph object type, e.g. `books.book` or `product.item`.
	pub object_type: String,
	/// Object payload to create before publishing.
	pub object: ObjectPayload,
	/// Action type the published story uses.
	pub action_type: String,
	/// Credential source; a request without one fails before any network call.
	pub credential: Option<Credential>,
}
impl ShareRequest {
	/// Creates a request without a credential attached.
	pub fn new(
		object_type: impl Into<String>,
		object: ObjectPayload,
		action_type: impl Into<String>,
	) -> Self {
		Self {
			object_type: object_type.into(),
			object,
			action_type: action_type.into(),
			credential: None,
		}
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

/// Receipt returned by a composite share.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareReceipt {
	/// Identifier of the object created in the first step.
	pub object_id: ObjectId,
	/// Receipt of the story published in the second step.
	pub story: PublishReceipt,
}

impl<C> Publisher<C>
where
	C: ?Sized + GraphHttpClient,
{
	/// Creates an object and publishes the story referencing it, i.e. "share on Facebook".
	///
	/// The two calls run strictly sequentially: the story call never fires when object
	/// creation failed, and either step's error surfaces untouched. A remote object
	/// left behind by a failed story publish is not cleaned up; the remote system owns
	/// its persistence.
	pub async fn share(&self, request: ShareRequest) -> Result<ShareReceipt> {
		const KIND: FlowKind = FlowKind::Share;

		let span = FlowSpan::new(KIND, "share");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let object_id = self
					.create_object(ObjectRequest::new(request.object_type, request.object))
					.await?;
				let story = StoryRequest {
					action_type: request.action_type,
					object_id: object_id.clone(),
					credential: request.credential,
				};
				let story = self.publish_story(story).await?;

				Ok(ShareReceipt { object_id, story })
			})
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}
}
