use crate::domain::auth::{AuthService, Claims};
use anyhow::Result;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// JWT service using HS256 with a shared secret.
///
/// Token issuance lives outside this API; the same secret lets the
/// composing system mint tokens this service will accept.
pub struct JwtAuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtAuthService {
    pub fn new(secret: &str, access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
        }
    }
}

impl AuthService for JwtAuthService {
    fn generate_access_token(&self, user_id: i64) -> Result<String> {
        let claims = Claims::new_access_token(user_id, self.access_token_expiry);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| anyhow::anyhow!("Failed to generate access token: {}", e))
    }

    fn validate_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_validate_access_token() {
        let service = JwtAuthService::new("test-secret", 900);

        let token = service.generate_access_token(42).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_validate_token_wrong_secret() {
        let issuer = JwtAuthService::new("secret-a", 900);
        let verifier = JwtAuthService::new("secret-b", 900);

        let token = issuer.generate_access_token(42).unwrap();
        assert!(verifier.validate_token(&token).is_err());
    }

    #[test]
    fn test_validate_garbage_token() {
        let service = JwtAuthService::new("test-secret", 900);
        assert!(service.validate_token("not.a.jwt").is_err());
    }
}
