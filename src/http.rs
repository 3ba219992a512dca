//! Transport primitives for Graph API calls.
//!
//! The module exposes [`GraphHttpClient`] alongside [`GraphRequest`] and
//! [`RawResponse`] so downstream crates can integrate custom HTTP clients. The trait
//! is the crate's only dependency on an HTTP stack: implementations execute one
//! request, hand back the raw status and body, and report network failures as
//! [`TransportError`]. Response normalization (JSON parsing, error-payload
//! detection) happens above the transport in [`graph`](crate::graph).

// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`GraphHttpClient`] implementations.
pub type TransportFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, TransportError>> + 'a + Send>>;

/// HTTP methods used against the Graph API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
	/// Read calls; parameters travel in the query string.
	Get,
	/// Write calls; parameters travel as a form-urlencoded body.
	Post,
}
impl Method {
	/// Returns the canonical method name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One outbound Graph API request.
///
/// The URL is absolute (the publisher joins the relative path onto its configured API
/// base before building the request). Query pairs apply to every method; form pairs
/// are encoded as an `application/x-www-form-urlencoded` body and only meaningful for
/// [`Method::Post`].
#[derive(Clone, Debug)]
pub struct GraphRequest {
	/// HTTP method for the call.
	pub method: Method,
	/// Absolute request URL.
	pub url: Url,
	/// Query string pairs.
	pub query: Vec<(String, String)>,
	/// Form body pairs.
	pub form: Vec<(String, String)>,
}
impl GraphRequest {
	/// Starts a GET request for the provided URL.
	pub fn get(url: Url) -> Self {
		Self { method: Method::Get, url, query: Vec::new(), form: Vec::new() }
	}

	/// Starts a POST request for the provided URL.
	pub fn post(url: Url) -> Self {
		Self { method: Method::Post, url, query: Vec::new(), form: Vec::new() }
	}

	/// Appends a query string pair.
	pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((key.into(), value.into()));

		self
	}

	/// Appends a form body pair.
	pub fn form(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.form.push((key.into(), value.into()));

		self
	}
}

/// Raw response handed back by a transport before normalization.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Unparsed response body.
	pub body: Vec<u8>,
}

/// Abstraction over HTTP transports capable of executing Graph API calls.
///
/// Implementations must be `Send + Sync + 'static` so they can be shared behind
/// `Arc<C>` across publisher instances, and the futures they return must be `Send` so
/// publish flows can hop executors.
pub trait GraphHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes a single request and returns the raw status + body.
	fn execute(&self, request: GraphRequest) -> TransportFuture<'_, RawResponse>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl GraphHttpClient for ReqwestHttpClient {
	fn execute(&self, request: GraphRequest) -> TransportFuture<'_, RawResponse> {
		let client = self.0.clone();

		Box::pin(async move {
			let method = match request.method {
				Method::Get => reqwest::Method::GET,
				Method::Post => reqwest::Method::POST,
			};
			let mut builder = client.request(method, request.url);

			if !request.query.is_empty() {
				builder = builder.query(&request.query);
			}
			if request.method == Method::Post {
				builder = builder.form(&request.form);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(RawResponse { status, body })
		})
	}
}
