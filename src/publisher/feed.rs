//! Feed posting: the plain "share on the user's timeline" operation.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, Credential, UserId},
	error::ConfigError,
	http::{GraphHttpClient, GraphRequest},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	publisher::{Publisher, common::PublishReceipt},
};

/// Request describing one post against `me/feed`.
///
/// One of `message` or `link` is required; the remaining fields only apply when a
/// link is set. Local-only fields (the credential) never reach the wire.
#[derive(Clone, Debug, Default)]
pub struct FeedPost {
	/// User message for the post.
	pub message: Option<String>,
	/// Publicly accessible URL the post links to.
	pub link: Option<Url>,
	/// Preview image URL; only relevant when `link` is set.
	pub picture: Option<Url>,
	/// Link name; only relevant when `link` is set.
	pub name: Option<String>,
	/// Link caption; only relevant when `link` is set.
	pub caption: Option<String>,
	/// Link description; only relevant when `link` is set.
	pub description: Option<String>,
	/// Credential source; a request without one fails before any network call.
	pub credential: Option<Credential>,
}
impl FeedPost {
	/// Creates an empty post; set at least a message or a link before publishing.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the user message.
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());

		self
	}

	/// Sets the link the post points at.
	pub fn with_link(mut self, link: Url) -> Self {
		self.link = Some(link);

		self
	}

	/// Sets the preview image.
	pub fn with_picture(mut self, picture: Url) -> Self {
		self.picture = Some(picture);

		self
	}

	/// Sets the link name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	/// Sets the link caption.
	pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
		self.caption = Some(caption.into());

		self
	}

	/// Sets the link description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());

		self
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

	fn validate(&self) -> Result<(), ConfigError> {
		if self.message.is_none() && self.link.is_none() {
			return Err(ConfigError::EmptyFeedPost);
		}

		Ok(())
	}

	fn apply(&self, mut request: GraphRequest) -> GraphRequest {
		if let Some(message) = &self.message {
			request = request.form("message", message);
		}
		if let Some(link) = &self.link {
			request = request.form("link", link.as_str());
		}
		if let Some(picture) = &self.picture {
			request = request.form("picture", picture.as_str());
		}
		if let Some(name) = &self.name {
			request = request.form("name", name);
		}
		if let Some(caption) = &self.caption {
			request = request.form("caption", caption);
		}
		if let Some(description) = &self.description {
			request = request.form("description", description);
		}

		request
	}
}

impl<C> Publisher<C>
where
	C: ?Sized + GraphHttpClient,
{
	/// Publishes a post to the credential owner's feed.
	///
	/// The post is validated and the credential resolved before the network call
	/// fires; only the set fields travel on the wire.
	pub async fn publish_feed(&self, post: FeedPost) -> Result<PublishReceipt> {
		const KIND: FlowKind = FlowKind::FeedPublish;

		let span = FlowSpan::new(KIND, "publish_feed");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				post.validate()?;

				let token = self.resolve_token(post.credential.as_ref()).await?;
				let url = self.config.endpoint("me/feed")?;
				let request =
					post.apply(GraphRequest::post(url).form("access_token", token.expose()));

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
