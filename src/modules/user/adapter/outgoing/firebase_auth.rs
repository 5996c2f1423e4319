use std::fmt;
use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

pub const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const SCOPES: &str = "https://www.googleapis.com/auth/firebase.database \
                      https://www.googleapis.com/auth/userinfo.email";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Refresh this long before Google's reported expiry.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FirebaseAuthError {
    #[error("Invalid service account key: {0}")]
    InvalidKey(String),

    #[error("Failed to sign token assertion: {0}")]
    Signing(String),

    #[error("Token exchange failed: {0}")]
    Exchange(String),
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: i64,
}

/// OAuth2 access tokens for a Google service account (JWT bearer grant).
#[derive(Clone)]
pub struct ServiceAccountTokenSource {
    client: Arc<Client>,
    client_email: String,
    encoding_key: EncodingKey,
    token_uri: String,
    cache: Arc<Mutex<Option<CachedToken>>>,
}

impl fmt::Debug for ServiceAccountTokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountTokenSource")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

impl ServiceAccountTokenSource {
    /// `private_key` may carry literal `\n` sequences, as it usually does when
    /// pasted into an env file.
    pub fn new(
        client: Arc<Client>,
        client_email: impl Into<String>,
        private_key: &str,
    ) -> Result<Self, FirebaseAuthError> {
        let pem = private_key.replace("\\n", "\n");
        let encoding_key = EncodingKey::from_rsa_pem(pem.as_bytes())
            .map_err(|e| FirebaseAuthError::InvalidKey(e.to_string()))?;

        Ok(Self {
            client,
            client_email: client_email.into(),
            encoding_key,
            token_uri: GOOGLE_TOKEN_URI.to_string(),
            cache: Arc::new(Mutex::new(None)),
        })
    }

    pub fn with_token_uri(mut self, token_uri: impl Into<String>) -> Self {
        self.token_uri = token_uri.into();
        self
    }

    fn sign_assertion(&self, now: i64) -> Result<String, FirebaseAuthError> {
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: SCOPES,
            aud: &self.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(|e| FirebaseAuthError::Signing(e.to_string()))
    }

    pub async fn access_token(&self) -> Result<String, FirebaseAuthError> {
        let mut cache = self.cache.lock().await;
        let now = Utc::now().timestamp();

        if let Some(token) = cache.as_ref() {
            if token.expires_at - EXPIRY_MARGIN_SECS > now {
                return Ok(token.value.clone());
            }
        }

        let assertion = self.sign_assertion(now)?;
        let response = self
            .client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|e| FirebaseAuthError::Exchange(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FirebaseAuthError::Exchange(format!("{}: {}", status, body)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| FirebaseAuthError::Exchange(e.to_string()))?;

        let expires_at = (Utc::now() + Duration::seconds(token.expires_in)).timestamp();
        debug!("Obtained Firebase access token valid for {}s", token.expires_in);

        *cache = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at,
        });

        Ok(token.access_token)
    }
}

/// How requests to the Realtime Database are authorised.
#[derive(Debug, Clone)]
pub enum FirebaseCredentials {
    /// No credentials, e.g. against the local emulator
    Anonymous,
    ServiceAccount(ServiceAccountTokenSource),
}

impl FirebaseCredentials {
    pub async fn access_token(&self) -> Result<Option<String>, FirebaseAuthError> {
        match self {
            FirebaseCredentials::Anonymous => Ok(None),
            FirebaseCredentials::ServiceAccount(source) => source.access_token().await.map(Some),
        }
    }
}
