use std::{io::Error, path::PathBuf};

use chrono::Utc;

use crate::types::Token;

#[derive(Debug)]
pub enum TokenError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for TokenError {
    fn from(err: Error) -> Self {
        TokenError::IoError(err)
    }
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::IoError(e) => write!(f, "{}", e),
            TokenError::SerdeError(e) => write!(f, "{}", e),
        }
    }
}

/// Owns the one persisted credential of the application: the bearer token
/// obtained from the implicit grant. The token is written once after a
/// successful authorization and never refreshed; `load` is the returning
/// session fast path that short-circuits a new authorization.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, TokenError> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path).await?;
        let token: Token = serde_json::from_str(&content).map_err(TokenError::SerdeError)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), TokenError> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(TokenError::SerdeError)?;
        async_fs::write(path, json).await.map_err(TokenError::from)
    }

    pub async fn clear() -> Result<(), TokenError> {
        async_fs::remove_file(Self::token_path())
            .await
            .map_err(TokenError::from)
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    /// Whether the token's advertised lifetime has elapsed. Advisory only:
    /// the implicit grant has no refresh token, so an expired token keeps
    /// being sent and the poller reports the resulting unauthorized status.
    pub fn is_likely_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self.token.obtained_at + self.token.expires_in
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotally/cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
