//! Hosted identity adapter
//!
//! Implements `IdentityPort` against the provider's identity REST API
//! (password grant sign-in, sign-up with profile metadata, token logout).
//! When the provider JWT secret is configured, access tokens are decoded to
//! populate the session expiry; otherwise the token stays fully opaque.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use core_kernel::UserId;
use domain_session::{AuthError, IdentityPort, Session, SignUpOutcome};

use crate::error::ProviderError;

/// Configuration for the hosted identity API
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Base URL of the provider project (e.g. `https://xyz.provider.co`)
    pub base_url: String,
    /// Project API key sent with every request
    pub api_key: String,
    /// Provider JWT secret; enables local token expiry decoding when set
    pub jwt_secret: Option<String>,
}

/// REST client for the hosted identity provider
#[derive(Debug, Clone)]
pub struct RestIdentityProvider {
    http: reqwest::Client,
    config: IdentityConfig,
}

impl RestIdentityProvider {
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn expires_at(&self, access_token: &str) -> Option<DateTime<Utc>> {
        let secret = self.config.jwt_secret.as_deref()?;
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        let decoded = decode::<TokenClaims>(
            access_token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .ok()?;
        Utc.timestamp_opt(decoded.claims.exp, 0).single()
    }

    fn session_from(&self, grant: TokenGrant) -> Result<Session, AuthError> {
        let user = grant.user;
        Ok(Session {
            user_id: UserId::from_uuid(user.id),
            email: user.email.unwrap_or_default(),
            full_name: user
                .user_metadata
                .and_then(|m| m.full_name)
                .unwrap_or_default(),
            expires_at: self.expires_at(&grant.access_token),
            access_token: grant.access_token,
        })
    }
}

#[async_trait]
impl IdentityPort for RestIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .http
            .post(self.endpoint("token?grant_type=password"))
            .header("apikey", &self.config.api_key)
            .json(&CredentialsBody { email, password })
            .send()
            .await
            .map_err(|e| ProviderError::from(e).into_auth())?;

        let status = response.status();
        if status.is_success() {
            let grant: TokenGrant = response
                .json()
                .await
                .map_err(|e| ProviderError::from(e).into_auth())?;
            return self.session_from(grant);
        }

        let failure: ApiFailure = response.json().await.unwrap_or_default();
        debug!(%status, code = ?failure.error_code, "Sign-in rejected");
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                if failure.mentions("email_not_confirmed") {
                    Err(AuthError::VerificationPending)
                } else {
                    Err(AuthError::InvalidCredentials)
                }
            }
            _ => Err(AuthError::provider(failure.message())),
        }
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<SignUpOutcome, AuthError> {
        let body = SignUpBody {
            email,
            password,
            data: ProfileMetadata {
                full_name: Some(full_name.to_string()),
            },
        };
        let response = self
            .http
            .post(self.endpoint("signup"))
            .header("apikey", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::from(e).into_auth())?;

        let status = response.status();
        if status.is_success() {
            // With email confirmation enabled the provider returns the bare
            // user without a token; with it disabled a full session grant.
            let created: SignUpResponse = response
                .json()
                .await
                .map_err(|e| ProviderError::from(e).into_auth())?;
            return match created.access_token {
                Some(access_token) => {
                    let grant = TokenGrant {
                        access_token,
                        user: created.user.ok_or_else(|| {
                            AuthError::provider("sign-up grant without a user object")
                        })?,
                    };
                    Ok(SignUpOutcome::Active(self.session_from(grant)?))
                }
                None => Ok(SignUpOutcome::VerificationPending),
            };
        }

        let failure: ApiFailure = response.json().await.unwrap_or_default();
        debug!(%status, code = ?failure.error_code, "Sign-up rejected");
        if status == StatusCode::UNPROCESSABLE_ENTITY
            || status == StatusCode::CONFLICT
            || failure.mentions("already registered")
            || failure.mentions("user_already_exists")
        {
            return Err(AuthError::DuplicateEmail);
        }
        if status == StatusCode::BAD_REQUEST {
            return Err(AuthError::validation(failure.message()));
        }
        Err(AuthError::provider(failure.message()))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .http
            .post(self.endpoint("logout"))
            .header("apikey", &self.config.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| ProviderError::from(e).into_auth())?;

        if response.status().is_success() {
            Ok(())
        } else {
            let failure: ApiFailure = response.json().await.unwrap_or_default();
            Err(AuthError::provider(failure.message()))
        }
    }
}

#[derive(Debug, Serialize)]
struct CredentialsBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: ProfileMetadata,
}

#[derive(Debug, Serialize, Deserialize)]
struct ProfileMetadata {
    full_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    id: Uuid,
    email: Option<String>,
    user_metadata: Option<ProfileMetadata>,
}

#[derive(Debug, Deserialize)]
struct TokenGrant {
    access_token: String,
    user: ApiUser,
}

#[derive(Debug, Deserialize)]
struct SignUpResponse {
    access_token: Option<String>,
    user: Option<ApiUser>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiFailure {
    error_code: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
}

impl ApiFailure {
    fn message(&self) -> String {
        self.msg
            .clone()
            .or_else(|| self.error_description.clone())
            .unwrap_or_else(|| "unexpected identity provider response".to_string())
    }

    fn mentions(&self, needle: &str) -> bool {
        let code = self.error_code.as_deref().unwrap_or_default();
        code.contains(needle) || self.message().to_ascii_lowercase().contains(needle)
    }
}

#[derive(Debug, Deserialize)]
struct TokenClaims {
    #[allow(dead_code)]
    sub: String,
    exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_cleanly() {
        let provider = RestIdentityProvider::new(IdentityConfig {
            base_url: "https://proj.provider.co/".to_string(),
            api_key: "key".to_string(),
            jwt_secret: None,
        });
        assert_eq!(
            provider.endpoint("signup"),
            "https://proj.provider.co/auth/v1/signup"
        );
    }

    #[test]
    fn test_failure_message_fallbacks() {
        let failure = ApiFailure {
            error_code: None,
            msg: None,
            error_description: Some("bad grant".to_string()),
        };
        assert_eq!(failure.message(), "bad grant");
        assert!(failure.mentions("bad grant"));
    }

    #[test]
    fn test_expires_at_requires_secret() {
        let provider = RestIdentityProvider::new(IdentityConfig {
            base_url: "https://proj.provider.co".to_string(),
            api_key: "key".to_string(),
            jwt_secret: None,
        });
        assert_eq!(provider.expires_at("not-a-jwt"), None);
    }
}
