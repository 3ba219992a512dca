//! Crate-level error types shared across the transport, store, and publish flows.

// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, auth::UserId};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Credential-store failure.
	#[error("{0}")]
	Store(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Session-backend failure while finalizing a social login.
	#[error("{0}")]
	Session(
		#[from]
		#[source]
		crate::session::SessionError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Graph API reported an error payload.
	#[error(transparent)]
	Remote(#[from] RemoteError),

	/// Graph response could not be decoded into the expected shape.
	#[error("Graph response could not be decoded.")]
	Decode {
		/// Structured decoding failure carrying the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Neither a direct access token nor a user identifier was supplied.
	#[error("Either an access token or a user identifier must be supplied.")]
	MissingCredential,
	/// A user identifier was supplied but no stored token exists for it.
	#[error("No stored access token was found for user `{user_id}`.")]
	CredentialNotFound {
		/// User identifier whose lookup came back empty.
		user_id: UserId,
	},
}

/// Configuration and validation failures raised before any network call.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// API base URL cannot be parsed.
	#[error("API base URL is invalid.")]
	InvalidApiBase {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoint path cannot be joined onto the API base.
	#[error("Endpoint path `{path}` cannot be joined onto the API base.")]
	InvalidEndpoint {
		/// Relative path that failed to join.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Open Graph object payload could not be JSON-encoded.
	#[error("Object payload could not be encoded.")]
	ObjectPayloadEncode {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Feed post carries neither a message nor a link.
	#[error("A feed post must carry a message or a link.")]
	EmptyFeedPost,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for ConfigError {
	fn from(e: reqwest::Error) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Graph API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Graph API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Error payload reported by the Graph API inside an otherwise well-formed response.
///
/// The raw payload is preserved untouched so callers can inspect provider-specific
/// fields (`type`, `code`, `error_subcode`, ...).
#[derive(Clone, Debug, ThisError)]
#[error("Graph API reported an error: {message}.")]
pub struct RemoteError {
	/// Human-readable message extracted from the payload.
	pub message: String,
	/// HTTP status code of the response carrying the payload.
	pub status: u16,
	/// Full response body, exactly as the remote returned it.
	pub payload: Value,
}
impl RemoteError {
	/// Builds a remote error from a response body whose `error` field was present.
	pub(crate) fn from_payload(status: u16, payload: Value) -> Self {
		let message = payload
			.get("error")
			.map(|error| match error.get("message").and_then(Value::as_str) {
				Some(message) => message.to_owned(),
				None => error.to_string(),
			})
			.unwrap_or_else(|| payload.to_string());

		Self { message, status, payload }
	}
}
