use anyhow::Result;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// JWT claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id, decimal string)
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Token type, always "access" for tokens accepted by the API
    #[serde(rename = "type")]
    pub token_type: String,
}

impl Claims {
    pub fn new_access_token(user_id: i64, expiry_seconds: i64) -> Self {
        let now = OffsetDateTime::now_utc().unix_timestamp();
        Self {
            sub: user_id.to_string(),
            iat: now,
            exp: now + expiry_seconds,
            token_type: "access".to_string(),
        }
    }

    pub fn user_id(&self) -> Result<i64> {
        self.sub
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid user id in claims: {}", e))
    }
}

/// Token verification seam; implemented by the JWT service.
pub trait AuthService: Send + Sync {
    /// Mint an access token for a user
    fn generate_access_token(&self, user_id: i64) -> Result<String>;

    /// Validate and decode a token
    fn validate_token(&self, token: &str) -> Result<Claims>;
}
