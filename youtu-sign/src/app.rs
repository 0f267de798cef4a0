use serde::{Deserialize, Serialize};
use std::fmt;

/// Application identity used to sign every request
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSign {
    pub app_id: u32,
    pub secret_id: String,
    pub secret_key: String,
    pub user_id: String,
}

impl AppSign {
    pub fn new(
        app_id: u32,
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            app_id,
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            user_id: user_id.into(),
        }
    }
}

// Keep the secret key out of logs and panics.
impl fmt::Debug for AppSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSign")
            .field("app_id", &self.app_id)
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"***")
            .field("user_id", &self.user_id)
            .finish()
    }
}
