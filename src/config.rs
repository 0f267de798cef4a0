use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::endpoint::Domain;
use youtu_sign::{AppSign, DEFAULT_EXPIRE_SECS};

pub static CONFIG_PATH: Lazy<PathBuf> = Lazy::new(|| {
    if let Some(path) = option_env!("YOUTU_CONFIG_PATH") {
        return PathBuf::from(path);
    }
    directories::ProjectDirs::from("com", "tencent", "youtu")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("youtu.toml"))
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub app_id: u32,
    pub secret_id: String,
    pub secret_key: String,
    pub user_id: String,
    pub domain: Domain,
    pub timeout_secs: u64,
    pub expire_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_id: 0,
            secret_id: String::new(),
            secret_key: String::new(),
            user_id: String::new(),
            domain: Domain::Youtu,
            timeout_secs: 30,
            expire_secs: DEFAULT_EXPIRE_SECS,
        }
    }
}

impl Config {
    pub fn app_sign(&self) -> AppSign {
        AppSign::new(
            self.app_id,
            self.secret_id.clone(),
            self.secret_key.clone(),
            self.user_id.clone(),
        )
    }

    /// Override identity fields from `YOUTU_*` environment variables
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(app_id) = lookup("YOUTU_APP_ID") {
            self.app_id = app_id
                .trim()
                .parse()
                .with_context(|| format!("YOUTU_APP_ID is not a number: {app_id}"))?;
        }
        if let Some(v) = lookup("YOUTU_SECRET_ID") {
            self.secret_id = v;
        }
        if let Some(v) = lookup("YOUTU_SECRET_KEY") {
            self.secret_key = v;
        }
        if let Some(v) = lookup("YOUTU_USER_ID") {
            self.user_id = v;
        }
        Ok(())
    }

    /// Copy with `secret_key` hidden; `secret_id` is left as is
    pub fn masked(&self) -> Self {
        let mut cfg = self.clone();
        if !cfg.secret_key.is_empty() {
            cfg.secret_key = "***".to_string();
        }
        cfg
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path.unwrap_or(&CONFIG_PATH);
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config at {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
}

pub fn save_config(cfg: &Config, path: Option<&Path>) -> Result<()> {
    let path = path.unwrap_or(&CONFIG_PATH);
    let data = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(Some(dir.path().join("absent.toml").as_path())).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.expire_secs, 2_592_000);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        let cfg = Config {
            app_id: 1007152,
            secret_id: "AKID".into(),
            secret_key: "key".into(),
            user_id: "10001".into(),
            domain: Domain::FaceIn,
            ..Config::default()
        };
        save_config(&cfg, Some(path.as_path())).unwrap();
        assert_eq!(load_config(Some(path.as_path())).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "app_id = 42\nsecret_id = \"s\"\n").unwrap();
        let cfg = load_config(Some(path.as_path())).unwrap();
        assert_eq!(cfg.app_id, 42);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.domain, Domain::Youtu);
    }

    #[test]
    fn test_custom_domain_as_url_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "app_id = 1\ndomain = \"https://private.example/\"\n").unwrap();
        let cfg = load_config(Some(path.as_path())).unwrap();
        assert_eq!(cfg.domain, Domain::Custom("https://private.example/".into()));

        save_config(&cfg, Some(path.as_path())).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("domain = \"https://private.example/\""));
        assert_eq!(load_config(Some(path.as_path())).unwrap(), cfg);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [("YOUTU_APP_ID", " 77 "), ("YOUTU_SECRET_KEY", "k2")]
            .into_iter()
            .collect();
        let mut cfg = Config::default();
        cfg.apply_env_from(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.app_id, 77);
        assert_eq!(cfg.secret_key, "k2");
        assert!(cfg.secret_id.is_empty());

        let bad = |k: &str| (k == "YOUTU_APP_ID").then(|| "abc".to_string());
        assert!(Config::default().apply_env_from(bad).is_err());
    }

    #[test]
    fn test_masked_hides_key() {
        let cfg = Config {
            secret_id: "AKIDvisible".into(),
            secret_key: "hunter2".into(),
            ..Config::default()
        };
        assert_eq!(cfg.masked().secret_key, "***");
        assert_eq!(cfg.masked().secret_id, "AKIDvisible");
        assert_eq!(Config::default().masked().secret_key, "");
    }
}
