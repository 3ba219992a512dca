//! Thread-safe in-memory [`SessionBackend`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	auth::UserId,
	session::{SessionBackend, SessionError, SessionFuture, SessionRecord, SocialProfile},
};

#[derive(Debug, Default)]
struct MemorySessionsInner {
	users: HashMap<String, UserId>,
	logins: Vec<SocialProfile>,
	counter: u64,
}

type SessionState = Arc<RwLock<MemorySessionsInner>>;

/// Session backend that keeps user imports in-process for tests and demos.
///
/// The first login for a provider user id imports a fresh local user (`user-1`,
/// `user-2`, ...); subsequent logins resolve to the same user with `created` unset.
/// Every received profile is recorded so tests can assert normalization.
#[derive(Clone, Debug, Default)]
pub struct MemorySessions(SessionState);
impl MemorySessions {
	/// Returns every profile received so far, in arrival order.
	pub fn logins(&self) -> Vec<SocialProfile> {
		self.0.read().logins.clone()
	}

	fn login_now(
		state: SessionState,
		profile: SocialProfile,
	) -> Result<SessionRecord, SessionError> {
		let mut inner = state.write();

		let existing = inner.users.get(&profile.provider_user_id).cloned();
		let record = match existing {
			Some(user_id) => SessionRecord { user_id, created: false },
			None => {
				inner.counter += 1;

				let user_id = UserId::new(format!("user-{}", inner.counter))
					.map_err(|e| SessionError::Backend { message: e.to_string() })?;

				inner.users.insert(profile.provider_user_id.clone(), user_id.clone());

				SessionRecord { user_id, created: true }
			},
		};

		inner.logins.push(profile);

		Ok(record)
	}
}
impl SessionBackend for MemorySessions {
	fn social_login(&self, profile: SocialProfile) -> SessionFuture<'_, SessionRecord> {
		let state = self.0.clone();

		Box::pin(async move { Self::login_now(state, profile) })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{auth::AccessToken, session::PROVIDER};

	fn profile(provider_user_id: &str) -> SocialProfile {
		SocialProfile {
			provider: PROVIDER,
			provider_user_id: provider_user_id.into(),
			first_name: Some("Ada".into()),
			last_name: Some("Lovelace".into()),
			email: None,
			token: AccessToken::new("user-token"),
		}
	}

	#[tokio::test]
	async fn first_login_imports_then_reuses_the_user() {
		let sessions = MemorySessions::default();
		let first = sessions
			.social_login(profile("fb-100"))
			.await
			.expect("First login should succeed.");

		assert!(first.created);

		let second = sessions
			.social_login(profile("fb-100"))
			.await
			.expect("Repeat login should succeed.");

		assert!(!second.created);
		assert_eq!(first.user_id, second.user_id);
		assert_eq!(sessions.logins().len(), 2);
	}

	#[tokio::test]
	async fn distinct_provider_users_import_distinct_users() {
		let sessions = MemorySessions::default();
		let first =
			sessions.social_login(profile("fb-1")).await.expect("First login should succeed.");
		let second =
			sessions.social_login(profile("fb-2")).await.expect("Second login should succeed.");

		assert_ne!(first.user_id, second.user_id);
	}
}
