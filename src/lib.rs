//! Async Facebook Graph client for social login and Open Graph publishing: credential
//! resolution, composite share flows, and transport-aware observability in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod graph;
pub mod http;
pub mod obs;
pub mod publisher;
pub mod session;
pub mod store;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		config::GraphConfig,
		http::ReqwestHttpClient,
		publisher::Publisher,
		session::{MemorySessions, SessionBackend},
		store::{CredentialStore, MemoryStore},
	};

	/// Publisher type alias used by reqwest-backed integration tests.
	pub type ReqwestTestPublisher = Publisher<ReqwestHttpClient>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a [`Publisher`] backed by in-memory collaborators and the reqwest
	/// transport used across integration tests.
	pub fn build_reqwest_test_publisher(
		config: GraphConfig,
	) -> (ReqwestTestPublisher, Arc<MemoryStore>, Arc<MemorySessions>) {
		let store_backend = Arc::new(MemoryStore::default());
		let store: Arc<dyn CredentialStore> = store_backend.clone();
		let (publisher, sessions) = build_reqwest_test_publisher_with_store(config, store);

		(publisher, store_backend, sessions)
	}

	/// Constructs a [`Publisher`] around a caller-provided credential store so tests can
	/// observe lookup traffic.
	pub fn build_reqwest_test_publisher_with_store(
		config: GraphConfig,
		store: Arc<dyn CredentialStore>,
	) -> (ReqwestTestPublisher, Arc<MemorySessions>) {
		let session_backend = Arc::new(MemorySessions::default());
		let sessions: Arc<dyn SessionBackend> = session_backend.clone();
		let http_client = test_reqwest_http_client();
		let publisher = Publisher::with_http_client(config, store, sessions, http_client);

		(publisher, session_backend)
	}
}

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {graph_publisher as _, httpmock as _, tokio as _};
