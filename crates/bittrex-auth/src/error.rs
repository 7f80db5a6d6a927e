//! Error types for authentication operations

/// Errors that can occur while preparing authenticated requests
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
