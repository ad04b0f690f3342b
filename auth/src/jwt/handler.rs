use chrono::DateTime;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::JwtError;

/// JWT token handler for encoding and decoding access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Expiry is enforced against a
/// caller-supplied instant rather than the library's internal clock, so
/// every check within one request uses a single time snapshot.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    /// - Rotating the secret invalidates every outstanding token
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a compact three-part JWT.
    ///
    /// # Arguments
    /// * `claims` - Claims to encode
    ///
    /// # Returns
    /// JWT token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &AccessClaims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode a token, verifying structure, signature, and expiry.
    ///
    /// Expiry is checked against `now`: a token with `exp` in the past is
    /// rejected, one expiring exactly at `now` is still accepted. A token
    /// without an `exp` claim is rejected outright.
    ///
    /// # Arguments
    /// * `token` - JWT token string to decode
    /// * `now` - Instant to evaluate expiry against
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `DecodingFailed` - Token structure is malformed
    /// * `InvalidSignature` - Signature does not match
    /// * `MissingClaim` - Token carries no `exp` claim
    /// * `TokenExpired` - Token expired before `now`
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is evaluated below against the injected instant
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(
            |e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::DecodingFailed(e.to_string()),
            },
        )?;

        let claims = token_data.claims;

        if claims.exp.is_none() {
            return Err(JwtError::MissingClaim("exp".to_string()));
        }

        if claims.is_expired(now.timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::jwt::claims::ACCESS_TOKEN_EXPIRE_MINUTES;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(SECRET);
        let now = Utc::now();

        let claims = AccessClaims::for_subject("alice", now);

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);

        let decoded = handler.decode(&token, now).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_preserves_extra_claims() {
        let handler = JwtHandler::new(SECRET);
        let now = Utc::now();

        let claims = AccessClaims::for_subject("alice", now).with_extra("scope", "todos");

        let token = handler.encode(&claims).expect("Failed to encode token");
        let decoded = handler.decode(&token, now).expect("Failed to decode token");

        assert_eq!(decoded.subject(), Some("alice"));
        assert_eq!(decoded.extra.get("scope").unwrap().as_str(), Some("todos"));
    }

    #[test]
    fn test_decode_malformed_token() {
        let handler = JwtHandler::new(SECRET);

        let result = handler.decode("invalid.token.here", Utc::now());
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let now = Utc::now();
        let claims = AccessClaims::for_subject("alice", now);
        let token = handler1.encode(&claims).expect("Failed to encode token");

        let result = handler2.decode(&token, now);
        assert!(matches!(result, Err(JwtError::InvalidSignature)));
    }

    #[test]
    fn test_decode_tampered_signature() {
        let handler = JwtHandler::new(SECRET);
        let now = Utc::now();

        let claims = AccessClaims::for_subject("alice", now);
        let token = handler.encode(&claims).expect("Failed to encode token");

        // Flip one character in the signature segment
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        let mut signature: Vec<char> = parts[2].chars().collect();
        signature[0] = if signature[0] == 'A' { 'B' } else { 'A' };
        parts[2] = signature.into_iter().collect();
        let tampered = parts.join(".");

        let result = handler.decode(&tampered, now);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(SECRET);

        let issued = Utc::now() - Duration::minutes(ACCESS_TOKEN_EXPIRE_MINUTES + 1);
        let claims = AccessClaims::for_subject("alice", issued);
        let token = handler.encode(&claims).expect("Failed to encode token");

        let result = handler.decode(&token, Utc::now());
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_decode_at_exact_expiry_is_valid() {
        let handler = JwtHandler::new(SECRET);

        let now = Utc::now();
        let claims = AccessClaims::for_subject("alice", now);
        let token = handler.encode(&claims).expect("Failed to encode token");

        let at_expiry = now + Duration::minutes(ACCESS_TOKEN_EXPIRE_MINUTES);
        assert!(handler.decode(&token, at_expiry).is_ok());
        assert!(handler
            .decode(&token, at_expiry + Duration::seconds(1))
            .is_err());
    }

    #[test]
    fn test_decode_token_without_exp() {
        let handler = JwtHandler::new(SECRET);

        let claims = AccessClaims::new().with_subject("alice");
        let token = handler.encode(&claims).expect("Failed to encode token");

        let result = handler.decode(&token, Utc::now());
        assert!(matches!(result, Err(JwtError::MissingClaim(_))));
    }
}
