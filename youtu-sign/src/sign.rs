use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha1::Sha1;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::AppSign;

type HmacSha1 = Hmac<Sha1>;

/// Default signature lifetime: 30 days
pub const DEFAULT_EXPIRE_SECS: u64 = 2_592_000;

/// Longest user id the service accepts
pub const MAX_USER_ID_LEN: usize = 64;

const MAX_NONCE: u32 = 999_999_999;

#[derive(Debug, thiserror::Error)]
pub enum SignError {
    #[error("secret_id is empty")]
    EmptySecretId,
    #[error("secret_key is empty")]
    EmptySecretKey,
    #[error("user_id is {0} bytes, longer than 64")]
    UserIdTooLong(usize),
    #[error("system clock is before the unix epoch")]
    Clock,
    #[error("hmac key rejected: {0}")]
    Key(String),
    #[error("signature lifetime of {0}s overflows the expiry time")]
    ExpireOverflow(u64),
}

/// Sign with the current time and a fresh nonce, valid for `expire_secs`.
pub fn sign(app: &AppSign, expire_secs: u64) -> Result<String, SignError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| SignError::Clock)?
        .as_secs();
    let nonce = rand::thread_rng().gen_range(0..=MAX_NONCE);
    let expired = now
        .checked_add(expire_secs)
        .ok_or(SignError::ExpireOverflow(expire_secs))?;
    sign_with(app, expired, now, nonce)
}

/// Deterministic signature over explicit `expired`, `now` and `nonce`.
///
/// Layout: `base64(hmac_sha1(secret_key, plain) ++ plain)` where `plain` is
/// `a=<app_id>&k=<secret_id>&e=<expired>&t=<now>&r=<nonce>&u=<user_id>&f=`.
pub fn sign_with(app: &AppSign, expired: u64, now: u64, nonce: u32) -> Result<String, SignError> {
    if app.secret_id.is_empty() {
        return Err(SignError::EmptySecretId);
    }
    if app.secret_key.is_empty() {
        return Err(SignError::EmptySecretKey);
    }
    if app.user_id.len() > MAX_USER_ID_LEN {
        return Err(SignError::UserIdTooLong(app.user_id.len()));
    }

    let plain = plain_text(app, expired, now, nonce);

    let mut mac = HmacSha1::new_from_slice(app.secret_key.as_bytes())
        .map_err(|e| SignError::Key(e.to_string()))?;
    mac.update(plain.as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut raw = Vec::with_capacity(digest.len() + plain.len());
    raw.extend_from_slice(&digest);
    raw.extend_from_slice(plain.as_bytes());

    log::trace!("signed request for app {} (expires {})", app.app_id, expired);
    Ok(BASE64.encode(raw))
}

fn plain_text(app: &AppSign, expired: u64, now: u64, nonce: u32) -> String {
    format!(
        "a={}&k={}&e={}&t={}&r={}&u={}&f=",
        app.app_id, app.secret_id, expired, now, nonce, app.user_id
    )
}
