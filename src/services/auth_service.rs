//! Authentication service - Verifies the admin credential and guards sessions.
//!
//! There is a single configured principal. A principal store keyed by
//! username can replace the comparison in `authenticate` without touching
//! the token contract.

use crate::config::Config;
use crate::errors::{AppResult, AuthError};

use super::token_service::{Claims, TokenService};

/// Authentication service trait for dependency injection.
pub trait AuthService: Send + Sync {
    /// Check credentials and mint a session token
    fn authenticate(&self, username: &str, password: &str) -> AppResult<String>;

    /// Verify a presented session token
    fn verify_token(&self, token: &str) -> Result<Claims, AuthError>;

    /// Gate check for protected operations; `None` means no token was presented
    fn authorize(&self, token: Option<&str>) -> Result<Claims, AuthError>;
}

/// Concrete implementation of AuthService backed by the configured admin identity.
pub struct Authenticator {
    admin_username: String,
    admin_password: String,
    tokens: TokenService,
}

impl Authenticator {
    /// Create new auth service instance from configuration
    pub fn new(config: &Config) -> Self {
        Self::with_tokens(
            config.admin_username.clone(),
            config.admin_password().to_string(),
            TokenService::from_config(config),
        )
    }

    /// Create an auth service with an explicit token service.
    pub fn with_tokens(
        admin_username: impl Into<String>,
        admin_password: impl Into<String>,
        tokens: TokenService,
    ) -> Self {
        Self {
            admin_username: admin_username.into(),
            admin_password: admin_password.into(),
            tokens,
        }
    }
}

impl AuthService for Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> AppResult<String> {
        // Both comparisons always run; failures are reported identically.
        let user_ok = username == self.admin_username;
        let pass_ok = password == self.admin_password;

        if !(user_ok & pass_ok) {
            tracing::warn!("Rejected admin login attempt");
            return Err(AuthError::BadCredentials.into());
        }

        let token = self.tokens.issue(&self.admin_username)?;
        tracing::info!(subject = %self.admin_username, "Admin session issued");
        Ok(token)
    }

    fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.tokens.verify(token)
    }

    fn authorize(&self, token: Option<&str>) -> Result<Claims, AuthError> {
        self.tokens.authorize(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

    fn authenticator() -> Authenticator {
        Authenticator::with_tokens("admin", "correct horse", TokenService::new(SECRET, 240))
    }

    fn assert_bad_credentials(result: AppResult<String>) {
        match result {
            Err(AppError::Auth(AuthError::BadCredentials)) => {}
            other => panic!("expected BadCredentials, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_credentials_yield_admin_token() {
        let auth = authenticator();
        let token = auth.authenticate("admin", "correct horse").unwrap();
        let claims = auth.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.scope, "admin");
    }

    #[test]
    fn test_wrong_username() {
        assert_bad_credentials(authenticator().authenticate("root", "correct horse"));
    }

    #[test]
    fn test_wrong_password() {
        assert_bad_credentials(authenticator().authenticate("admin", "battery staple"));
    }

    #[test]
    fn test_both_wrong() {
        assert_bad_credentials(authenticator().authenticate("root", "battery staple"));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        assert_bad_credentials(authenticator().authenticate("Admin", "correct horse"));
        assert_bad_credentials(authenticator().authenticate("admin", "Correct Horse"));
    }

    #[test]
    fn test_empty_credentials_rejected() {
        assert_bad_credentials(authenticator().authenticate("", ""));
    }

    #[test]
    fn test_authorize_delegates_to_verification() {
        let auth = authenticator();
        let token = auth.authenticate("admin", "correct horse").unwrap();

        assert!(auth.authorize(Some(&token)).is_ok());
        assert_eq!(auth.authorize(None), Err(AuthError::MissingToken));
        assert_eq!(auth.authorize(Some("nope")), Err(AuthError::InvalidToken));
    }

    #[test]
    fn test_token_from_other_deployment_rejected() {
        let other = Authenticator::with_tokens(
            "admin",
            "correct horse",
            TokenService::new(b"another-deployment-secret-value!", 240),
        );
        let token = other.authenticate("admin", "correct horse").unwrap();

        assert_eq!(authenticator().verify_token(&token), Err(AuthError::InvalidToken));
    }
}
