pub mod app;
pub mod sign;

// Re-export commonly used types
pub use app::AppSign;
pub use sign::{sign, sign_with, SignError, DEFAULT_EXPIRE_SECS};
