pub mod login;
pub mod refresh_token;

pub use login::login;
pub use refresh_token::refresh_token;

use serde::Serialize;

/// Response body for token-issuing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponseData {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}
