//! Graph API response normalization.
//!
//! The Graph API sometimes returns JSON with a `text/plain` content type, so bodies
//! are normalized here instead of trusting headers: a body that parses as JSON is
//! treated identically to structured JSON, and anything else is kept as a plain
//! string value. A response whose JSON carries an `error` field is a failure carrying
//! that raw payload, regardless of the HTTP status code.

// crates.io
use serde::de::DeserializeOwned;
use serde_json::Value;
// self
use crate::{_prelude::*, error::RemoteError, http::RawResponse};

/// Normalized Graph API response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphResponse(Value);
impl GraphResponse {
	/// Normalizes a raw transport response.
	///
	/// Returns [`Error::Remote`] when the body carries an `error` field; the full
	/// payload travels inside the error untouched.
	pub(crate) fn from_raw(raw: RawResponse) -> Result<Self> {
		let value = match serde_json::from_slice::<Value>(&raw.body) {
			Ok(value) => value,
			Err(_) => Value::String(String::from_utf8_lossy(&raw.body).into_owned()),
		};

		if value.get("error").is_some() {
			return Err(RemoteError::from_payload(raw.status, value).into());
		}

		Ok(Self(value))
	}

	/// Borrows the normalized body.
	pub fn value(&self) -> &Value {
		&self.0
	}

	/// Consumes the response, yielding the normalized body.
	pub fn into_value(self) -> Value {
		self.0
	}

	/// Decodes the body into a typed payload, reporting the offending path on failure.
	pub fn decode<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		serde_path_to_error::deserialize(&self.0).map_err(|source| Error::Decode { source })
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn raw(status: u16, body: &str) -> RawResponse {
		RawResponse { status, body: body.as_bytes().to_vec() }
	}

	#[test]
	fn structured_and_stringified_json_normalize_identically() {
		let body = "{\"id\":\"obj-1\",\"created\":true}";
		let response = GraphResponse::from_raw(raw(200, body))
			.expect("JSON body should normalize successfully.");

		assert_eq!(response.value(), &json!({ "id": "obj-1", "created": true }));
	}

	#[test]
	fn non_json_body_stays_a_string() {
		let response = GraphResponse::from_raw(raw(200, "not json at all"))
			.expect("Plain text body should still resolve.");

		assert_eq!(response.value(), &Value::String("not json at all".into()));
	}

	#[test]
	fn error_field_rejects_with_payload() {
		let body = "{\"error\":{\"message\":\"(#200) Permissions error\",\"code\":200}}";
		let err = GraphResponse::from_raw(raw(200, body))
			.expect_err("An error field must produce a rejection, never a resolution.");

		match err {
			Error::Remote(remote) => {
				assert_eq!(remote.message, "(#200) Permissions error");
				assert_eq!(remote.status, 200);
				assert_eq!(
					remote.payload,
					json!({ "error": { "message": "(#200) Permissions error", "code": 200 } })
				);
			},
			other => panic!("Expected a remote error, got: {other:?}"),
		}
	}

	#[test]
	fn decode_reports_the_offending_path() {
		#[derive(Debug, Deserialize)]
		struct Created {
			#[allow(dead_code)]
			id: String,
		}

		let response = GraphResponse::from_raw(raw(200, "{\"id\":42}"))
			.expect("Body without an error field should resolve.");
		let err = response.decode::<Created>().expect_err("Type mismatch should fail decoding.");

		match err {
			Error::Decode { source } => assert_eq!(source.path().to_string(), "id"),
			other => panic!("Expected a decode error, got: {other:?}"),
		}
	}
}
