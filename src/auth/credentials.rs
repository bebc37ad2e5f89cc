//! Credential verification

/// Verifies login credentials and request bearer tokens.
///
/// The shipped implementation is a single fixed pair
/// ([`FixedCredentials`]); the trait is the seam where a real identity
/// provider would plug in without changing any handler contract.
pub trait CredentialVerifier: Send + Sync {
    /// Check a login pair. On match returns the bearer token to hand out;
    /// unknown email and wrong password collapse to the same `None`.
    fn verify_login(&self, email: &str, password: &str) -> Option<String>;

    /// Check a bearer token presented on a request.
    fn verify_token(&self, token: &str) -> bool;
}

/// One hardcoded email/password pair issuing one static token.
///
/// There is no expiry, refresh or per-user scoping: the token is a shared
/// secret standing in for a session.
#[derive(Debug, Clone)]
pub struct FixedCredentials {
    email: String,
    password: String,
    token: String,
}

impl FixedCredentials {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            token: token.into(),
        }
    }
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self::new("bilgi@gallaxdesign.com", "gallax11", "authenticated")
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify_login(&self, email: &str, password: &str) -> Option<String> {
        if email == self.email && password == self.password {
            Some(self.token.clone())
        } else {
            None
        }
    }

    fn verify_token(&self, token: &str) -> bool {
        token == self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_pair_yields_token() {
        let creds = FixedCredentials::new("a@b.c", "secret", "tok");
        assert_eq!(creds.verify_login("a@b.c", "secret").as_deref(), Some("tok"));
    }

    #[test]
    fn any_other_pair_is_rejected() {
        let creds = FixedCredentials::new("a@b.c", "secret", "tok");
        assert!(creds.verify_login("a@b.c", "wrong").is_none());
        assert!(creds.verify_login("other@b.c", "secret").is_none());
        assert!(creds.verify_login("", "").is_none());
    }

    #[test]
    fn only_the_issued_token_passes() {
        let creds = FixedCredentials::new("a@b.c", "secret", "tok");
        assert!(creds.verify_token("tok"));
        assert!(!creds.verify_token("TOK"));
        assert!(!creds.verify_token(""));
    }
}
