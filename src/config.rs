//! Application configuration passed into the publisher constructor.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, AppSecret},
	error::ConfigError,
};

/// Graph API base used when none is supplied explicitly.
pub const DEFAULT_API_BASE: &str = "https://graph.facebook.com/v2.0/";
/// Login scope requested when none is supplied explicitly.
pub const DEFAULT_SCOPE: &str = "email,publish_actions";

/// Immutable configuration consumed by [`Publisher`](crate::publisher::Publisher).
///
/// All values are provided by the caller at construction time; nothing is read from
/// process-wide state.
#[derive(Clone)]
pub struct GraphConfig {
	/// Application identifier issued by the provider.
	pub app_id: String,
	/// Application secret; combined with the id to form the app access token.
	pub app_secret: AppSecret,
	/// Permission scope string requested during login.
	pub scope: String,
	/// Base URL all request paths are joined onto.
	pub api_base: Url,
}
impl GraphConfig {
	/// Creates a configuration with the default API base and scope.
	pub fn new(app_id: impl Into<String>, app_secret: AppSecret) -> Self {
		let api_base =
			Url::parse(DEFAULT_API_BASE).expect("Default API base is a valid URL constant.");

		Self { app_id: app_id.into(), app_secret, scope: DEFAULT_SCOPE.into(), api_base }
	}

	/// Overrides the permission scope string.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = scope.into();

		self
	}

	/// Overrides the API base URL. The base should end with a trailing slash so relative
	/// paths join underneath it.
	pub fn with_api_base(mut self, api_base: Url) -> Self {
		self.api_base = api_base;

		self
	}

	/// Parses and applies an API base URL from a string.
	pub fn try_with_api_base(self, api_base: &str) -> Result<Self, ConfigError> {
		let parsed =
			Url::parse(api_base).map_err(|source| ConfigError::InvalidApiBase { source })?;

		Ok(self.with_api_base(parsed))
	}

	/// Returns the composite `app_id|app_secret` token used for app-level calls.
	pub fn app_token(&self) -> AccessToken {
		AccessToken::new(format!("{}|{}", self.app_id, self.app_secret.expose()))
	}

	/// Joins a relative path onto the API base.
	pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		self.api_base
			.join(path)
			.map_err(|source| ConfigError::InvalidEndpoint { path: path.to_owned(), source })
	}
}
impl Debug for GraphConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("GraphConfig")
			.field("app_id", &self.app_id)
			.field("app_secret", &"<redacted>")
			.field("scope", &self.scope)
			.field("api_base", &self.api_base.as_str())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn fixture() -> GraphConfig {
		GraphConfig::new("app-id", AppSecret::new("app-secret"))
	}

	#[test]
	fn app_token_combines_id_and_secret() {
		assert_eq!(fixture().app_token().expose(), "app-id|app-secret");
	}

	#[test]
	fn endpoint_joins_relative_paths() {
		let config = fixture();
		let url = config.endpoint("me/feed").expect("Relative path should join onto the base.");

		assert_eq!(url.as_str(), "https://graph.facebook.com/v2.0/me/feed");

		let nested = config
			.endpoint("app/objects/books.book")
			.expect("Nested path should join onto the base.");

		assert_eq!(nested.as_str(), "https://graph.facebook.com/v2.0/app/objects/books.book");
	}

	#[test]
	fn debug_redacts_the_secret() {
		assert!(!format!("{:?}", fixture()).contains("app-secret"));
	}

	#[test]
	fn invalid_base_is_rejected() {
		assert!(fixture().try_with_api_base("not a url").is_err());
	}
}
