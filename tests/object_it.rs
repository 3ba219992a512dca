// crates.io
use httpmock::prelude::*;
// self
use graph_publisher::{
	_preludet::*,
	auth::AppSecret,
	config::GraphConfig,
	publisher::{ObjectPayload, ObjectRequest},
};

fn build_config(server: &MockServer) -> GraphConfig {
	GraphConfig::new("app-id", AppSecret::new("app-secret"))
		.try_with_api_base(&server.url("/v2.0/"))
		.expect("Mock API base should parse successfully.")
}

fn build_payload() -> ObjectPayload {
	let image = Url::parse("https://example.test/cover.png").expect("Image URL should parse.");
	let url = Url::parse("https://example.test/book").expect("Object URL should parse.");

	ObjectPayload::new(image, url).with_title("og title!").with_description("og description!")
}

#[tokio::test]
async fn create_object_posts_the_app_token_and_encoded_payload() {
	let server = MockServer::start_async().await;
	let (publisher, _store, _sessions) = build_reqwest_test_publisher(build_config(&server));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v2.0/app/objects/books.book")
				.form_urlencoded_tuple("access_token", "app-id|app-secret")
				.form_urlencoded_tuple_exists("object");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"id\":\"obj-1\"}");
		})
		.await;
	let object_id = publisher
		.create_object(ObjectRequest::new("books.book", build_payload()))
		.await
		.expect("Object creation should succeed.");

	assert_eq!(object_id.as_ref(), "obj-1");

	mock.assert_async().await;
}

#[tokio::test]
async fn create_object_surfaces_remote_error_payload() {
	let server = MockServer::start_async().await;
	let (publisher, _store, _sessions) = build_reqwest_test_publisher(build_config(&server));
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/v2.0/app/objects/books.book");
			then.status(400).header("content-type", "application/json").body(
				"{\"error\":{\"message\":\"Invalid object property.\",\"type\":\"Exception\",\"code\":100}}",
			);
		})
		.await;
	let err = publisher
		.create_object(ObjectRequest::new("books.book", build_payload()))
		.await
		.expect_err("A remote error payload must reject the creation.");

	match err {
		Error::Remote(remote) => {
			assert_eq!(remote.message, "Invalid object property.");
			assert_eq!(remote.payload["error"]["code"], 100);
		},
		other => panic!("Expected a remote error, got: {other:?}"),
	}

	mock.assert_async().await;
}
