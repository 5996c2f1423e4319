use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::user::application::domain::entities::{User, UserId};
use crate::modules::user::application::ports::outgoing::{
    NewUserRecord, UserPatch, UserRepository, UserRepositoryError,
};

#[derive(Default)]
struct State {
    users: BTreeMap<UserId, User>,
    read_failure: Option<String>,
    write_failure: Option<String>,
}

/// Process-local stand-in for the remote `users` collection.
///
/// Used by `USER_STORE=memory` for local runs and by the test suite. Clones
/// share the same underlying map.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent read fail with `StoreError(message)`.
    pub async fn fail_reads(&self, message: &str) {
        self.state.lock().await.read_failure = Some(message.to_string());
    }

    /// Make every subsequent write fail with `StoreError(message)`.
    pub async fn fail_writes(&self, message: &str) {
        self.state.lock().await.write_failure = Some(message.to_string());
    }

    fn generate_key() -> UserId {
        UserId::from(Uuid::new_v4().simple().to_string())
    }
}

fn check(failure: &Option<String>) -> Result<(), UserRepositoryError> {
    match failure {
        Some(msg) => Err(UserRepositoryError::StoreError(msg.clone())),
        None => Ok(()),
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let state = self.state.lock().await;
        check(&state.read_failure)?;
        Ok(state.users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &UserId) -> Result<User, UserRepositoryError> {
        let state = self.state.lock().await;
        check(&state.read_failure)?;
        state
            .users
            .get(id)
            .cloned()
            .ok_or(UserRepositoryError::NotFound)
    }

    async fn create(&self, record: NewUserRecord) -> Result<User, UserRepositoryError> {
        let mut state = self.state.lock().await;
        check(&state.write_failure)?;
        let user = record.into_user(Self::generate_key());
        state.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_partial(
        &self,
        id: &UserId,
        patch: UserPatch,
    ) -> Result<User, UserRepositoryError> {
        let mut state = self.state.lock().await;
        check(&state.write_failure)?;
        let user = state
            .users
            .get_mut(id)
            .ok_or(UserRepositoryError::NotFound)?;
        patch.apply_to(user);
        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError> {
        let mut state = self.state.lock().await;
        check(&state.write_failure)?;
        state.users.remove(id);
        Ok(())
    }
}
