//! Open Graph object creation under the application namespace.

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	auth::ObjectId,
	error::ConfigError,
	http::{GraphHttpClient, GraphRequest},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	publisher::Publisher,
};

/// Open Graph object payload sent to `app/objects/{object_type}`.
///
/// The payload is JSON-stringified into the `object` form field, which is how the
/// Graph API expects it. `data` carries the type-specific required properties (they
/// vary by object type).
#[derive(Clone, Debug, Serialize)]
pub struct ObjectPayload {
	/// Publicly accessible image URL for the object.
	pub image: Url,
	/// Publicly accessible URL the object links to.
	pub url: Url,
	/// Object title.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	/// Object description.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Type-specific object properties.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
}
impl ObjectPayload {
	/// Creates a payload with the two required URLs.
	pub fn new(image: Url, url: Url) -> Self {
		Self { image, url, title: None, description: None, data: None }
	}

	/// Sets the object title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());

		self
	}

	/// Sets the object description.
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());

		self
	}

	/// Sets the type-specific properties.
	pub fn with_data(mut self, data: Value) -> Self {
		self.data = Some(data);

		self
	}

	pub(crate) fn encode(&self) -> Result<String, ConfigError> {
		serde_json::to_string(self).map_err(|source| ConfigError::ObjectPayloadEncode { source })
	}
}

/// Request describing one object creation.
#[derive(Clone, Debug)]
pub struct ObjectRequest {
	/// Open Graph object type, e.g. `books.book` or `product.item`.
	pub object_type: String,
	/// Object payload.
	pub object: ObjectPayload,
}
impl ObjectRequest {
	/// Creates a request for the provided type and payload.
	pub fn new(object_type: impl Into<String>, object: ObjectPayload) -> Self {
		Self { object_type: object_type.into(), object }
	}
}

#[derive(Debug, Deserialize)]
struct CreatedObject {
	id: ObjectId,
}

impl<C> Publisher<C>
where
	C: ?Sized + GraphHttpClient,
{
	/// Creates an Open Graph object owned by the application and returns its id.
	///
	/// Authorization uses the composite app token; no user credential is involved.
	pub async fn create_object(&self, request: ObjectRequest) -> Result<ObjectId> {
		const KIND: FlowKind = FlowKind::ObjectCreate;

		let span = FlowSpan::new(KIND, "create_object");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.config.endpoint(&format!("app/objects/{}", request.object_type))?;
				let object = request.object.encode()?;
				let request = GraphRequest::post(url)
					.form("access_token", self.config.app_token().expose())
					.form("object", object);
				let created: CreatedObject = self.send(request).await?.decode()?;

				Ok(created.id)
			})
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}
}
