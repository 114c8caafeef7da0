//! Authentication service for HTTP basic credentials.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Validates basic-auth credentials against the single configured user.
///
/// The plain password is not retained. The service keeps an HMAC-SHA256 tag of it
/// under a random per-process key and checks candidates with the MAC's
/// constant-time verification.
pub struct AuthService {
    username: String,
    key: [u8; 32],
    password_tag: Vec<u8>,
}

impl AuthService {
    /// Creates an authentication service for one user.
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        let key: [u8; 32] = rand::random();
        let password_tag = Self::mac(&key, password).finalize().into_bytes().to_vec();

        Self {
            username: username.into(),
            key,
            password_tag,
        }
    }

    fn mac(key: &[u8], password: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
        mac.update(password.as_bytes());
        mac
    }

    /// Authenticates a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the username is unknown, the password
    /// is missing, or the password does not match.
    pub fn authenticate(&self, username: &str, password: Option<&str>) -> Result<(), AppError> {
        let password_ok = password
            .map(|p| {
                Self::mac(&self.key, p)
                    .verify_slice(&self.password_tag)
                    .is_ok()
            })
            .unwrap_or(false);

        if username != self.username || !password_ok {
            tracing::debug!(username, "Rejected basic credentials");
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid username or password" }),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let service = AuthService::new("axa", "secret");
        assert!(service.authenticate("axa", Some("secret")).is_ok());
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let service = AuthService::new("axa", "secret");

        let result = service.authenticate("axa", Some("wrong"));

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }

    #[test]
    fn test_authenticate_wrong_username() {
        let service = AuthService::new("axa", "secret");
        assert!(service.authenticate("admin", Some("secret")).is_err());
    }

    #[test]
    fn test_authenticate_missing_password() {
        let service = AuthService::new("axa", "secret");
        assert!(service.authenticate("axa", None).is_err());
    }

    #[test]
    fn test_password_not_stored_in_plain_form() {
        let service = AuthService::new("axa", "secret");
        assert_ne!(service.password_tag, b"secret".to_vec());
        assert_eq!(service.password_tag.len(), 32);
    }
}
