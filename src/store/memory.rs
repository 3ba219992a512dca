//! Thread-safe in-memory [`CredentialStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	auth::{AccessToken, UserId},
	store::{CredentialStore, StoreError, StoreFuture},
};

type StoreMap = Arc<RwLock<HashMap<UserId, AccessToken>>>;

/// Thread-safe credential store that keeps tokens in-process for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(StoreMap);
impl MemoryStore {
	fn fetch_now(map: StoreMap, user: UserId) -> Option<AccessToken> {
		map.read().get(&user).cloned()
	}

	fn save_now(map: StoreMap, user: UserId, token: AccessToken) -> Result<(), StoreError> {
		map.write().insert(user, token);

		Ok(())
	}
}
impl CredentialStore for MemoryStore {
	fn fetch_token<'a>(&'a self, user: &'a UserId) -> StoreFuture<'a, Option<AccessToken>> {
		let map = self.0.clone();
		let user = user.to_owned();

		Box::pin(async move { Ok(Self::fetch_now(map, user)) })
	}

	fn save_token(&self, user: UserId, token: AccessToken) -> StoreFuture<'_, ()> {
		let map = self.0.clone();

		Box::pin(async move { Self::save_now(map, user, token) })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn save_then_fetch_round_trips() {
		let store = MemoryStore::default();
		let user = UserId::new("user-1").expect("User fixture should be valid.");

		assert_eq!(
			store.fetch_token(&user).await.expect("Fetch should succeed on an empty store."),
			None
		);

		store
			.save_token(user.clone(), AccessToken::new("stored-token"))
			.await
			.expect("Save should succeed.");

		let fetched = store
			.fetch_token(&user)
			.await
			.expect("Fetch should succeed.")
			.expect("Saved token should be present.");

		assert_eq!(fetched.expose(), "stored-token");
	}

	#[tokio::test]
	async fn save_replaces_previous_token() {
		let store = MemoryStore::default();
		let user = UserId::new("user-2").expect("User fixture should be valid.");

		store
			.save_token(user.clone(), AccessToken::new("first"))
			.await
			.expect("First save should succeed.");
		store
			.save_token(user.clone(), AccessToken::new("second"))
			.await
			.expect("Second save should succeed.");

		let fetched = store
			.fetch_token(&user)
			.await
			.expect("Fetch should succeed.")
			.expect("Replaced token should be present.");

		assert_eq!(fetched.expose(), "second");
	}
}
