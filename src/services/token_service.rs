//! Session token service - Issues and verifies signed admin session tokens.
//!
//! Tokens are HS256 JWTs carrying `sub`, `iat`, `exp` and `scope`.
//! Nothing is stored server side: validity depends only on the signature,
//! the clock and the scope claim.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{Config, SCOPE_ADMIN};
use crate::errors::{AppError, AppResult, AuthError};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    /// Missing scope decodes as empty and is rejected as insufficient.
    #[serde(default)]
    pub scope: String,
}

impl Claims {
    /// Check if the token grants administrative capability.
    pub fn is_admin(&self) -> bool {
        self.scope == SCOPE_ADMIN
    }
}

/// Signs and verifies session tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service for the given secret and lifetime.
    pub fn new(secret: &[u8], ttl_minutes: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify_at` against an explicit instant, with no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            // Out-of-range lifetimes saturate here and fail in `issue_at`.
            ttl: Duration::try_minutes(ttl_minutes).unwrap_or(Duration::MAX),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret_bytes(), config.jwt_expire_minutes)
    }

    /// Issue an admin token for `subject`, valid from now.
    pub fn issue(&self, subject: &str) -> AppResult<String> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue an admin token for `subject` as if created at `now`.
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> AppResult<String> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal("Session token expiry is out of range"))?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            scope: SCOPE_ADMIN.to_string(),
        };

        self.sign(&claims)
    }

    /// Sign arbitrary claims with this service's key.
    pub(crate) fn sign(&self, claims: &Claims) -> AppResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign session token: {}", e)))
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify signature, then expiry at `now`, then scope.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!("Session token rejected: {}", e);
                AuthError::InvalidToken
            })?
            .claims;

        if now.timestamp() >= claims.exp {
            return Err(AuthError::ExpiredToken);
        }

        if !claims.is_admin() {
            return Err(AuthError::InsufficientScope);
        }

        Ok(claims)
    }

    /// Gate check: a missing token fails before verification is attempted.
    pub fn authorize(&self, token: Option<&str>) -> Result<Claims, AuthError> {
        match token {
            Some(token) => self.verify(token),
            None => Err(AuthError::MissingToken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_then_verify_round_trip() {
        let tokens = TokenService::new(SECRET, 240);

        for subject in ["admin", "", "ops team", "ünïcode-ü"] {
            let token = tokens.issue(subject).unwrap();
            let claims = tokens.verify(&token).unwrap();

            assert_eq!(claims.sub, subject);
            assert_eq!(claims.scope, "admin");
        }
    }

    #[test]
    fn test_claim_timestamps_follow_ttl() {
        let tokens = TokenService::new(SECRET, 240);
        let token = tokens.issue_at("admin", t0()).unwrap();
        let claims = tokens.verify_at(&token, t0()).unwrap();

        assert_eq!(claims.iat, t0().timestamp());
        assert_eq!(claims.exp, t0().timestamp() + 240 * 60);
    }

    #[test]
    fn test_out_of_range_ttl_fails_issue_without_panicking() {
        for ttl_minutes in [i64::MAX, 200_000_000_000] {
            let tokens = TokenService::new(SECRET, ttl_minutes);

            assert!(matches!(tokens.issue("admin"), Err(AppError::Internal(_))));
        }
    }

    #[test]
    fn test_token_is_three_url_safe_segments() {
        let tokens = TokenService::new(SECRET, 1);
        let token = tokens.issue("admin").unwrap();

        assert_eq!(token.split('.').count(), 3);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')));
    }

    #[test]
    fn test_valid_before_expiry() {
        let tokens = TokenService::new(SECRET, 1);
        let token = tokens.issue_at("admin", t0()).unwrap();

        assert!(tokens.verify_at(&token, t0() + Duration::seconds(30)).is_ok());
        assert!(tokens.verify_at(&token, t0() + Duration::seconds(59)).is_ok());
    }

    #[test]
    fn test_expired_at_and_after_expiry() {
        let tokens = TokenService::new(SECRET, 1);
        let token = tokens.issue_at("admin", t0()).unwrap();

        assert_eq!(
            tokens.verify_at(&token, t0() + Duration::seconds(60)),
            Err(AuthError::ExpiredToken)
        );
        assert_eq!(
            tokens.verify_at(&token, t0() + Duration::seconds(61)),
            Err(AuthError::ExpiredToken)
        );
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let tokens = TokenService::new(SECRET, 60);
        let token = tokens.issue("admin").unwrap();
        let sig_start = token.rfind('.').unwrap() + 1;

        // Last character only carries padding bits in part, so skip it.
        for pos in sig_start..token.len() - 1 {
            let mut bytes = token.clone().into_bytes();
            bytes[pos] = if bytes[pos] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();

            assert_eq!(tokens.verify(&tampered), Err(AuthError::InvalidToken));
        }
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let tokens = TokenService::new(SECRET, 60);
        let token = tokens.issue("admin").unwrap();
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        parts[1] = parts[1].replacen(|c: char| c.is_ascii_alphabetic(), "x", 1);

        assert_eq!(tokens.verify(&parts.join(".")), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let issuer = TokenService::new(b"some-other-secret-nobody-configured", 60);
        let verifier = TokenService::new(SECRET, 60);
        let token = issuer.issue("admin").unwrap();

        assert_eq!(verifier.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let tokens = TokenService::new(SECRET, 60);

        for garbage in ["", "abc", "abc.def.ghi", "a.b", "....", "Bearer x.y.z"] {
            assert_eq!(tokens.verify(garbage), Err(AuthError::InvalidToken));
        }
    }

    #[test]
    fn test_wrong_scope_forbidden() {
        let tokens = TokenService::new(SECRET, 60);
        let now = Utc::now();
        let claims = Claims {
            sub: "admin".to_string(),
            iat: now.timestamp(),
            exp: now.timestamp() + 600,
            scope: "viewer".to_string(),
        };
        let token = tokens.sign(&claims).unwrap();

        assert_eq!(tokens.verify(&token), Err(AuthError::InsufficientScope));
    }

    #[test]
    fn test_missing_scope_forbidden() {
        #[derive(Serialize)]
        struct NoScope {
            sub: String,
            iat: i64,
            exp: i64,
        }

        let tokens = TokenService::new(SECRET, 60);
        let now = Utc::now().timestamp();
        let token = encode(
            &Header::new(Algorithm::HS256),
            &NoScope {
                sub: "admin".to_string(),
                iat: now,
                exp: now + 600,
            },
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(tokens.verify(&token), Err(AuthError::InsufficientScope));
    }

    #[test]
    fn test_expiry_checked_before_scope() {
        let tokens = TokenService::new(SECRET, 60);
        let claims = Claims {
            sub: "admin".to_string(),
            iat: t0().timestamp(),
            exp: t0().timestamp() + 60,
            scope: "viewer".to_string(),
        };
        let token = tokens.sign(&claims).unwrap();

        assert_eq!(
            tokens.verify_at(&token, t0() + Duration::seconds(120)),
            Err(AuthError::ExpiredToken)
        );
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let tokens = TokenService::new(SECRET, 60);
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "admin".to_string(),
            iat: now,
            exp: now + 600,
            scope: "admin".to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(tokens.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_authorize_without_token() {
        let tokens = TokenService::new(SECRET, 60);

        assert_eq!(tokens.authorize(None), Err(AuthError::MissingToken));
    }

    #[test]
    fn test_authorize_with_valid_token() {
        let tokens = TokenService::new(SECRET, 60);
        let token = tokens.issue("admin").unwrap();

        assert_eq!(tokens.authorize(Some(&token)).unwrap().sub, "admin");
    }
}
