//! JWT token service
//!
//! Issues and validates access/refresh token pairs for the two actor
//! kinds (officer, website user).

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::client::TokenPair;

/// Actor kind claim values
pub const KIND_OFFICER: &str = "officer";
pub const KIND_USER: &str = "user";

const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret (at least 32 bytes)
    pub secret: String,
    /// Access token lifetime (minutes)
    pub expiration_minutes: i64,
    /// Refresh token lifetime (minutes)
    pub refresh_expiration_minutes: i64,
    pub issuer: String,
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: load_jwt_secret(),
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1440),
            refresh_expiration_minutes: std::env::var("JWT_REFRESH_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(7 * 1440),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "challan-server".to_string()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "challan-clients".to_string()),
        }
    }
}

/// Claims stored in every token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Actor ID (Subject)
    pub sub: String,
    /// Actor kind: "officer" | "user"
    pub kind: String,
    /// Display name (officer name or user email)
    pub name: String,
    /// "access" | "refresh"
    pub token_type: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// Load the signing secret from the environment, falling back to a
/// freshly generated development key (with a loud warning).
fn load_jwt_secret() -> String {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if secret.len() >= 32 => secret,
        Ok(_) => {
            tracing::warn!("JWT_SECRET shorter than 32 bytes; generating a temporary key");
            generate_printable_secret()
        }
        Err(_) => {
            tracing::warn!("JWT_SECRET not set; generating a temporary key for this process");
            generate_printable_secret()
        }
    }
}

/// Generate a printable 64-character random secret.
fn generate_printable_secret() -> String {
    let allowed =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";
    let allowed: Vec<char> = allowed.chars().collect();
    let rng = SystemRandom::new();
    let mut key = String::with_capacity(64);
    for _ in 0..64 {
        let mut byte = [0u8; 1];
        if rng.fill(&mut byte).is_err() {
            // Random source unavailable; deterministic fallback for dev only
            return "ChallanServerDevelopmentFallbackKey-ReplaceInProduction".to_string();
        }
        key.push(allowed[(byte[0] as usize) % allowed.len()]);
    }
    key
}

/// JWT token service
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate an access/refresh token pair for an actor.
    pub fn generate_token_pair(
        &self,
        actor_id: i64,
        kind: &str,
        name: &str,
    ) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access: self.generate_token(actor_id, kind, name, TOKEN_TYPE_ACCESS)?,
            refresh: self.generate_token(actor_id, kind, name, TOKEN_TYPE_REFRESH)?,
        })
    }

    fn generate_token(
        &self,
        actor_id: i64,
        kind: &str,
        name: &str,
        token_type: &str,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let minutes = if token_type == TOKEN_TYPE_REFRESH {
            self.config.refresh_expiration_minutes
        } else {
            self.config.expiration_minutes
        };
        let expiration = now + Duration::minutes(minutes);

        let claims = Claims {
            sub: actor_id.to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
            token_type: token_type.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token, requiring the access token type.
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        let claims = self.validate_token(token)?;
        if claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(JwtError::InvalidToken(
                "Refresh token used where an access token is required".to_string(),
            ));
        }
        Ok(claims)
    }

    /// Validate and decode a token of either type.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the bearer token from an Authorization header value.
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}
