use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("signing request: {0}")]
    Sign(#[from] youtu_sign::SignError),

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("http transport: {0}")]
    Http(#[from] reqwest::Error),

    #[error("http status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("decoding response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("service error {code}: {message}")]
    Service { code: i64, message: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}
