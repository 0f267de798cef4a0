use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use youtu_sign::{sign, sign_with, AppSign, DEFAULT_EXPIRE_SECS};

fn app() -> AppSign {
    AppSign::new(1007152, "AKIDtest", "test-secret-key", "10001")
}

/// Split a signature back into its 20-byte digest and plain text
fn decode(signature: &str) -> (Vec<u8>, String) {
    let raw = BASE64.decode(signature).expect("signature is base64");
    assert!(raw.len() > 20, "signature too short");
    let (digest, plain) = raw.split_at(20);
    (digest.to_vec(), String::from_utf8(plain.to_vec()).expect("plain is utf-8"))
}

fn field<'a>(plain: &'a str, key: &str) -> &'a str {
    plain
        .split('&')
        .find_map(|kv| kv.strip_prefix(key).and_then(|v| v.strip_prefix('=')))
        .unwrap_or_else(|| panic!("missing {key} in {plain}"))
}

#[test]
fn test_digest_is_hmac_sha1_of_plain_text() {
    env_logger::try_init().ok();
    let signature = sign_with(&app(), 1_700_086_400, 1_700_000_000, 123_456_789).unwrap();
    let (digest, plain) = decode(&signature);

    assert_eq!(
        plain,
        "a=1007152&k=AKIDtest&e=1700086400&t=1700000000&r=123456789&u=10001&f="
    );

    let mut mac = Hmac::<Sha1>::new_from_slice(b"test-secret-key").unwrap();
    mac.update(plain.as_bytes());
    mac.verify_slice(&digest).expect("digest matches");
}

#[test]
fn test_wrong_key_does_not_verify() {
    let signature = sign_with(&app(), 10, 5, 1).unwrap();
    let (digest, plain) = decode(&signature);

    let mut mac = Hmac::<Sha1>::new_from_slice(b"other-key").unwrap();
    mac.update(plain.as_bytes());
    assert!(mac.verify_slice(&digest).is_err());
}

#[test]
fn test_live_signature_expiry_window() {
    let signature = sign(&app(), DEFAULT_EXPIRE_SECS).unwrap();
    let (_, plain) = decode(&signature);

    let now: u64 = field(&plain, "t").parse().unwrap();
    let expired: u64 = field(&plain, "e").parse().unwrap();
    let nonce: u64 = field(&plain, "r").parse().unwrap();

    assert_eq!(expired - now, DEFAULT_EXPIRE_SECS);
    assert!(nonce <= 999_999_999);
    assert_eq!(field(&plain, "a"), "1007152");
    assert_eq!(field(&plain, "u"), "10001");
    assert!(plain.ends_with("&f="));
}

#[test]
fn test_empty_user_id_is_allowed() {
    let mut app = app();
    app.user_id.clear();
    let signature = sign_with(&app, 2, 1, 0).unwrap();
    let (_, plain) = decode(&signature);
    assert!(plain.contains("&u=&f="));
}
