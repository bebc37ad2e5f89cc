//! Authentication - fixed-credential login and bearer-token gate

pub mod credentials;
pub mod middleware;

pub use credentials::{CredentialVerifier, FixedCredentials};
pub use middleware::{auth_middleware, AuthState};
