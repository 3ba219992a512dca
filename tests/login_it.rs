// crates.io
use httpmock::prelude::*;
// self
use graph_publisher::{
	_preludet::*,
	auth::{AccessToken, AppSecret},
	config::GraphConfig,
	session::PROVIDER,
};

fn build_config(server: &MockServer) -> GraphConfig {
	GraphConfig::new("app-id", AppSecret::new("app-secret"))
		.try_with_api_base(&server.url("/v2.0/"))
		.expect("Mock API base should parse successfully.")
}

#[tokio::test]
async fn login_finalizes_session_with_normalized_profile() {
	let server = MockServer::start_async().await;
	let (publisher, _store, sessions) = build_reqwest_test_publisher(build_config(&server));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2.0/me").query_param("access_token", "user-token");
			then.status(200).header("content-type", "application/json").body(
				"{\"id\":\"fb-100\",\"first_name\":\"Ada\",\"last_name\":\"Lovelace\",\"email\":\"ada@example.test\"}",
			);
		})
		.await;
	let record = publisher
		.login_with_token(AccessToken::new("user-token"))
		.await
		.expect("Login should succeed for a valid profile response.");

	assert!(record.created);

	mock.assert_async().await;

	let logins = sessions.logins();

	assert_eq!(logins.len(), 1);
	assert_eq!(logins[0].provider, PROVIDER);
	assert_eq!(logins[0].provider_user_id, "fb-100");
	assert_eq!(logins[0].first_name.as_deref(), Some("Ada"));
	assert_eq!(logins[0].last_name.as_deref(), Some("Lovelace"));
	assert_eq!(logins[0].email.as_deref(), Some("ada@example.test"));
	assert_eq!(logins[0].token.expose(), "user-token");
}

#[tokio::test]
async fn login_tolerates_a_missing_email() {
	let server = MockServer::start_async().await;
	let (publisher, _store, sessions) = build_reqwest_test_publisher(build_config(&server));
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2.0/me");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"fb-200\",\"first_name\":\"Grace\",\"last_name\":\"Hopper\"}");
		})
		.await;

	publisher
		.login_with_token(AccessToken::new("user-token"))
		.await
		.expect("Login should succeed without an email field.");

	assert_eq!(sessions.logins()[0].email, None);
}

#[tokio::test]
async fn login_accepts_json_served_as_text() {
	let server = MockServer::start_async().await;
	let (publisher, _store, sessions) = build_reqwest_test_publisher(build_config(&server));
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2.0/me");
			then.status(200)
				.header("content-type", "text/plain")
				.body("{\"id\":\"fb-300\",\"first_name\":\"Alan\",\"last_name\":\"Turing\"}");
		})
		.await;

	publisher
		.login_with_token(AccessToken::new("user-token"))
		.await
		.expect("A text body that parses as JSON should behave like structured JSON.");

	assert_eq!(sessions.logins()[0].provider_user_id, "fb-300");
}

#[tokio::test]
async fn login_surfaces_remote_error_payload_and_skips_the_session() {
	let server = MockServer::start_async().await;
	let (publisher, _store, sessions) = build_reqwest_test_publisher(build_config(&server));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2.0/me");
			then.status(400).header("content-type", "application/json").body(
				"{\"error\":{\"message\":\"Invalid OAuth access token.\",\"type\":\"OAuthException\",\"code\":190}}",
			);
		})
		.await;
	let err = publisher
		.login_with_token(AccessToken::new("expired-token"))
		.await
		.expect_err("A remote error payload must reject the login.");

	match err {
		Error::Remote(remote) => {
			assert_eq!(remote.message, "Invalid OAuth access token.");
			assert_eq!(remote.payload["error"]["code"], 190);
		},
		other => panic!("Expected a remote error, got: {other:?}"),
	}

	assert!(sessions.logins().is_empty(), "The session backend must not see failed logins.");

	mock.assert_async().await;
}
