//! Secret wrappers and the credential source resolved before every publish call.

// self
use crate::{_prelude::*, auth::UserId};

macro_rules! def_secret {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
		pub struct $name(String);
		impl $name {
			/// Wraps a new secret string.
			pub fn new(value: impl Into<String>) -> Self {
				Self(value.into())
			}

			/// Returns the inner secret value. Callers must avoid logging this string.
			pub fn expose(&self) -> &str {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				self.expose()
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.debug_tuple($kind).field(&"<redacted>").finish()
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str("<redacted>")
			}
		}
	};
}

def_secret! {
	AccessToken,
	"Opaque bearer token authorizing Graph API calls on behalf of a user or application.",
	"AccessToken"
}
def_secret! {
	AppSecret,
	"Application secret combined with the application id to form the app access token.",
	"AppSecret"
}

/// Credential source attached to a publish request.
///
/// Publish requests carry `Option<Credential>`; a request constructed with neither a
/// token nor a user identifier fails with [`Error::MissingCredential`](crate::error::Error::MissingCredential)
/// before any network call fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credential {
	/// Direct bearer token, used verbatim without consulting the credential store.
	Token(AccessToken),
	/// User identifier whose stored token is looked up before the call.
	User(UserId),
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let token = AccessToken::new("super-secret");

		assert_eq!(format!("{token:?}"), "AccessToken(\"<redacted>\")");
		assert_eq!(format!("{token}"), "<redacted>");

		let secret = AppSecret::new("app-secret");

		assert_eq!(format!("{secret:?}"), "AppSecret(\"<redacted>\")");
	}

	#[test]
	fn credential_debug_redacts_tokens() {
		let credential = Credential::Token(AccessToken::new("super-secret"));

		assert!(!format!("{credential:?}").contains("super-secret"));
	}
}
