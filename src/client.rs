use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Map, Value};
use std::time::Duration;

use crate::config::Config;
use crate::endpoint::Domain;
use crate::error::{Error, Result};
use youtu_sign::{AppSign, DEFAULT_EXPIRE_SECS};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Request body under construction
pub type Body = Map<String, Value>;

/// Blocking client for the Youtu open API.
///
/// Every operation posts a signed JSON body to one endpoint and returns the
/// parsed reply. A non-zero `errorcode` inside a well-formed reply is not an
/// error here; see [`crate::reply`] for that.
#[derive(Debug, Clone)]
pub struct YoutuClient {
    app: AppSign,
    host: String,
    expire_secs: u64,
    http: reqwest::blocking::Client,
}

impl YoutuClient {
    pub fn new(app: AppSign, domain: Domain) -> Result<Self> {
        Self::with_timeout(app, domain, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(app: AppSign, domain: Domain, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".into()));
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("youtu-rust/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            app,
            host: domain.base_url(),
            expire_secs: DEFAULT_EXPIRE_SECS,
            http,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        if cfg.app_id == 0 {
            return Err(Error::Config("app_id is not set".into()));
        }
        let mut client = Self::with_timeout(
            cfg.app_sign(),
            cfg.domain.clone(),
            Duration::from_secs(cfg.timeout_secs),
        )?;
        client.expire_secs = cfg.expire_secs;
        Ok(client)
    }

    /// Lifetime of each request signature
    pub fn expire_secs(mut self, secs: u64) -> Self {
        self.expire_secs = secs;
        self
    }

    pub fn app(&self) -> &AppSign {
        &self.app
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Fresh body carrying the `app_id` every endpoint expects
    pub(crate) fn body(&self) -> Body {
        let mut body = Map::new();
        body.insert("app_id".into(), Value::String(self.app.app_id.to_string()));
        body
    }

    /// Sign and post `body` to `path`, returning the decoded reply
    pub(crate) fn request(&self, path: &str, body: Body) -> Result<Value> {
        let signature = youtu_sign::sign(&self.app, self.expire_secs)?;
        let url = format!("{}{}", self.host, path);
        let payload = serde_json::to_vec(&Value::Object(body))?;

        debug!("POST {} ({} bytes)", url, payload.len());

        let rsp = self
            .http
            .post(&url)
            .header(AUTHORIZATION, signature)
            .header(CONTENT_TYPE, "text/json")
            .body(payload)
            .send()?;

        let status = rsp.status();
        let text = rsp.text()?;
        if !status.is_success() {
            warn!("{} returned {}", path, status);
            return Err(Error::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!("{} replied {} bytes", path, text.len());
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppSign {
        AppSign::new(1007152, "AKID", "key", "10001")
    }

    #[test]
    fn test_body_carries_app_id_as_string() {
        let client = YoutuClient::new(app(), Domain::Youtu).unwrap();
        let body = client.body();
        assert_eq!(body["app_id"], Value::String("1007152".into()));
        assert_eq!(client.host(), "https://api.youtu.qq.com/");
    }

    #[test]
    fn test_from_config_requires_app_id() {
        let cfg = Config::default();
        assert!(matches!(YoutuClient::from_config(&cfg), Err(Error::Config(_))));

        let cfg = Config {
            app_id: 5,
            secret_id: "s".into(),
            secret_key: "k".into(),
            domain: Domain::FaceIn,
            ..Config::default()
        };
        let client = YoutuClient::from_config(&cfg).unwrap();
        assert_eq!(client.host(), "https://faceinapi.youtu.qq.com/");
        assert_eq!(client.app().app_id, 5);
    }

    #[test]
    fn test_from_config_rejects_zero_timeout() {
        let cfg = Config {
            app_id: 5,
            secret_id: "s".into(),
            secret_key: "k".into(),
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(matches!(YoutuClient::from_config(&cfg), Err(Error::Config(_))));
        assert!(matches!(
            YoutuClient::with_timeout(app(), Domain::Youtu, Duration::ZERO),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_oversized_expiry_fails_without_panicking() {
        let cfg = Config {
            app_id: 5,
            secret_id: "s".into(),
            secret_key: "k".into(),
            expire_secs: u64::MAX,
            domain: Domain::Custom("http://127.0.0.1:1".into()),
            ..Config::default()
        };
        let client = YoutuClient::from_config(&cfg).unwrap();
        assert!(matches!(client.get_group_ids(), Err(Error::Sign(_))));
    }
}
