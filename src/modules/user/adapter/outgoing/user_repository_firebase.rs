use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::modules::user::adapter::outgoing::firebase_auth::FirebaseCredentials;
use crate::modules::user::application::domain::entities::{User, UserId};
use crate::modules::user::application::ports::outgoing::{
    NewUserRecord, UserPatch, UserRepository, UserRepositoryError,
};

const COLLECTION: &str = "users";
const MAX_KEY_BYTES: usize = 768;

// ============================================================================
// Stored shape
// ============================================================================

/// Record body as kept under `users/{key}`. A stored `id` field, if any, is
/// ignored: the key is authoritative.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredUser {
    name: String,
    zip: String,
    latitude: f64,
    longitude: f64,
    timezone: String,
    created_at: i64,
    updated_at: i64,
}

impl StoredUser {
    fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            zip: self.zip,
            latitude: self.latitude,
            longitude: self.longitude,
            timezone: self.timezone,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Reply to a push: `{"name": "<generated key>"}`
#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

/// Keys Firebase would reject in a path: empty, too long, `. $ # [ ] /` or
/// control characters.
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_KEY_BYTES
        && !key
            .chars()
            .any(|c| matches!(c, '.' | '$' | '#' | '[' | ']' | '/') || c.is_control())
}

fn map_http_err(err: reqwest::Error) -> UserRepositoryError {
    UserRepositoryError::StoreError(err.to_string())
}

// ============================================================================
// Repository Implementation
// ============================================================================

/// `users` collection in a Firebase Realtime Database, through its REST API.
#[derive(Clone)]
pub struct UserRepositoryFirebase {
    client: Arc<Client>,
    database_url: Url,
    credentials: FirebaseCredentials,
}

impl UserRepositoryFirebase {
    pub fn new(
        client: Arc<Client>,
        database_url: &str,
        credentials: FirebaseCredentials,
    ) -> Result<Self, UserRepositoryError> {
        let database_url = Url::parse(database_url).map_err(|e| {
            UserRepositoryError::StoreError(format!("invalid database url: {}", e))
        })?;

        if database_url.cannot_be_a_base() {
            return Err(UserRepositoryError::StoreError(
                "invalid database url: not a base url".to_string(),
            ));
        }

        Ok(Self {
            client,
            database_url,
            credentials,
        })
    }

    /// `{database}/users.json` or `{database}/users/{key}.json`
    fn node_url(&self, key: Option<&UserId>) -> Url {
        let mut url = self.database_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            match key {
                None => {
                    segments.push(&format!("{}.json", COLLECTION));
                }
                Some(key) => {
                    segments
                        .push(COLLECTION)
                        .push(&format!("{}.json", key.as_str()));
                }
            }
        }
        url
    }

    async fn request(
        &self,
        method: Method,
        key: Option<&UserId>,
    ) -> Result<RequestBuilder, UserRepositoryError> {
        let builder = self.client.request(method, self.node_url(key));

        let token = self
            .credentials
            .access_token()
            .await
            .map_err(|e| UserRepositoryError::StoreError(e.to_string()))?;

        Ok(match token {
            Some(token) => builder.query(&[("access_token", token)]),
            None => builder,
        })
    }

    async fn send(builder: RequestBuilder) -> Result<Response, UserRepositoryError> {
        let response = builder.send().await.map_err(map_http_err)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UserRepositoryError::StoreError(format!(
                "{}: {}",
                status, body
            )));
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, UserRepositoryError> {
        response
            .json::<T>()
            .await
            .map_err(|e| UserRepositoryError::SerializationError(e.to_string()))
    }

    async fn fetch(&self, id: &UserId) -> Result<User, UserRepositoryError> {
        if !is_valid_key(id.as_str()) {
            return Err(UserRepositoryError::NotFound);
        }

        let response = Self::send(self.request(Method::GET, Some(id)).await?).await?;
        let stored: Option<StoredUser> = Self::read_json(response).await?;

        stored
            .map(|s| s.into_user(id.clone()))
            .ok_or(UserRepositoryError::NotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryFirebase {
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        let response = Self::send(self.request(Method::GET, None).await?).await?;
        let nodes: Option<BTreeMap<String, Value>> = Self::read_json(response).await?;

        // Push keys sort chronologically, so BTreeMap order is creation order.
        let users = nodes
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, value)| match serde_json::from_value::<StoredUser>(value) {
                Ok(stored) => Some(stored.into_user(UserId::from(key))),
                Err(e) => {
                    warn!("Skipping malformed user record {}: {}", key, e);
                    None
                }
            })
            .collect();

        Ok(users)
    }

    async fn get_by_id(&self, id: &UserId) -> Result<User, UserRepositoryError> {
        self.fetch(id).await
    }

    async fn create(&self, record: NewUserRecord) -> Result<User, UserRepositoryError> {
        let builder = self.request(Method::POST, None).await?.json(&record);
        let response = Self::send(builder).await?;
        let pushed: PushResponse = Self::read_json(response).await?;

        Ok(record.into_user(UserId::from(pushed.name)))
    }

    async fn update_partial(
        &self,
        id: &UserId,
        patch: UserPatch,
    ) -> Result<User, UserRepositoryError> {
        // A PATCH on a missing node would create it.
        self.fetch(id).await?;

        let builder = self.request(Method::PATCH, Some(id)).await?.json(&patch);
        Self::send(builder).await?;

        self.fetch(id).await
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError> {
        if !is_valid_key(id.as_str()) {
            return Ok(());
        }

        Self::send(self.request(Method::DELETE, Some(id)).await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo(server: &MockServer) -> UserRepositoryFirebase {
        UserRepositoryFirebase::new(
            Arc::new(Client::new()),
            &server.uri(),
            FirebaseCredentials::Anonymous,
        )
        .unwrap()
    }

    fn stored_json(name: &str, zip: &str) -> Value {
        json!({
            "name": name,
            "zip": zip,
            "latitude": 40.7484,
            "longitude": -73.9967,
            "timezone": "America/New_York",
            "createdAt": 1_700_000_000_000_i64,
            "updatedAt": 1_700_000_000_000_i64
        })
    }

    #[test]
    fn test_is_valid_key() {
        assert!(is_valid_key("-NqK3x9aXbYc1dEfGhIj"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("a.b"));
        assert!(!is_valid_key("a#b"));
        assert!(!is_valid_key("a[0]"));
        assert!(!is_valid_key(&"k".repeat(MAX_KEY_BYTES + 1)));
    }

    #[test]
    fn test_node_url_handles_trailing_slash() {
        let repo = UserRepositoryFirebase::new(
            Arc::new(Client::new()),
            "https://demo-default-rtdb.firebaseio.com/",
            FirebaseCredentials::Anonymous,
        )
        .unwrap();

        assert_eq!(
            repo.node_url(None).as_str(),
            "https://demo-default-rtdb.firebaseio.com/users.json"
        );
        assert_eq!(
            repo.node_url(Some(&UserId::from("-Nabc"))).as_str(),
            "https://demo-default-rtdb.firebaseio.com/users/-Nabc.json"
        );
    }

    #[tokio::test]
    async fn test_list_all_null_collection_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
            .mount(&server)
            .await;

        let users = repo(&server).list_all().await.unwrap();

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_uses_keys_as_ids() {
        let server = MockServer::start().await;
        let mut spoofed = stored_json("Bo", "94105");
        spoofed["id"] = json!("spoofed");
        Mock::given(method("GET"))
            .and(path("/users.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "-Nb": spoofed,
                "-Na": stored_json("Ana", "10001"),
                "-Nc": { "name": "broken" }
            })))
            .mount(&server)
            .await;

        let users = repo(&server).list_all().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, UserId::from("-Na"));
        assert_eq!(users[0].name, "Ana");
        assert_eq!(users[1].id, UserId::from("-Nb"));
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/-Nmissing.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
            .mount(&server)
            .await;

        let result = repo(&server).get_by_id(&UserId::from("-Nmissing")).await;

        assert_eq!(result, Err(UserRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_get_by_id_invalid_key_skips_network() {
        let server = MockServer::start().await;

        let result = repo(&server).get_by_id(&UserId::from("a.b")).await;

        assert_eq!(result, Err(UserRepositoryError::NotFound));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_pushes_record_and_uses_generated_key() {
        let server = MockServer::start().await;
        let record = NewUserRecord {
            name: "Ana".to_string(),
            zip: "10001".to_string(),
            latitude: 40.7484,
            longitude: -73.9967,
            timezone: "America/New_York".to_string(),
            created_at: 1_700_000_000_000,
            updated_at: 1_700_000_000_000,
        };
        Mock::given(method("POST"))
            .and(path("/users.json"))
            .and(body_json(stored_json("Ana", "10001")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "-Nnew" })))
            .expect(1)
            .mount(&server)
            .await;

        let user = repo(&server).create(record).await.unwrap();

        assert_eq!(user.id, UserId::from("-Nnew"));
        assert_eq!(user.name, "Ana");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[tokio::test]
    async fn test_update_partial_absent_does_not_write() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/-Nx.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = repo(&server)
            .update_partial(&UserId::from("-Nx"), UserPatch::new(1))
            .await;

        assert_eq!(result, Err(UserRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn test_update_partial_patches_then_rereads() {
        let server = MockServer::start().await;
        let mut after = stored_json("Bo", "10001");
        after["updatedAt"] = json!(1_700_000_000_500_i64);

        Mock::given(method("GET"))
            .and(path("/users/-Na.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored_json("Ana", "10001")))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/users/-Na.json"))
            .and(body_json(json!({ "name": "Bo", "updatedAt": 1_700_000_000_500_i64 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Bo" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/-Na.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(after))
            .mount(&server)
            .await;

        let patch = UserPatch {
            name: Some("Bo".to_string()),
            ..UserPatch::new(1_700_000_000_500)
        };
        let user = repo(&server)
            .update_partial(&UserId::from("-Na"), patch)
            .await
            .unwrap();

        assert_eq!(user.name, "Bo");
        assert_eq!(user.updated_at, 1_700_000_000_500);
        assert_eq!(user.latitude, 40.7484);
    }

    #[tokio::test]
    async fn test_delete_sends_delete() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/users/-Na.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
            .expect(1)
            .mount(&server)
            .await;

        repo(&server).delete(&UserId::from("-Na")).await.unwrap();
    }

    #[tokio::test]
    async fn test_store_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "error": "Permission denied" })),
            )
            .mount(&server)
            .await;

        let result = repo(&server).list_all().await;

        match result {
            Err(UserRepositoryError::StoreError(msg)) => {
                assert!(msg.contains("Permission denied"))
            }
            other => panic!("expected store error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_access_token_is_sent_as_query_param() {
        use crate::modules::user::adapter::outgoing::firebase_auth::ServiceAccountTokenSource;

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "ya29.abc",
                "expires_in": 3600
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users.json"))
            .and(query_param("access_token", "ya29.abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Value::Null))
            .expect(1)
            .mount(&server)
            .await;

        let client = Arc::new(Client::new());
        let source = ServiceAccountTokenSource::new(
            Arc::clone(&client),
            "svc@demo.iam.gserviceaccount.com",
            include_str!("../../../../tests/support/test_service_account_key.pem"),
        )
        .unwrap()
        .with_token_uri(format!("{}/token", server.uri()));
        let repo = UserRepositoryFirebase::new(
            client,
            &server.uri(),
            FirebaseCredentials::ServiceAccount(source),
        )
        .unwrap();

        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
