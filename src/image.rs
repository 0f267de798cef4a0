use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Where an image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Local file, uploaded as base64
    Path(PathBuf),
    /// Remote image the service fetches itself
    Url(String),
    /// In-memory image bytes, uploaded as base64
    Bytes(Vec<u8>),
}

impl ImageSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        ImageSource::Path(path.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        ImageSource::Url(url.into())
    }

    /// `url` selects a remote image, otherwise `input` is a local path
    pub fn from_arg(input: &str, url: bool) -> Self {
        if url {
            ImageSource::url(input)
        } else {
            ImageSource::path(input)
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, ImageSource::Url(_))
    }

    /// Base64 payload for uploads, or the url itself
    fn payload(&self) -> Result<String> {
        match self {
            ImageSource::Path(path) => read_base64(path),
            ImageSource::Url(url) => Ok(url.clone()),
            ImageSource::Bytes(bytes) => Ok(BASE64.encode(bytes)),
        }
    }

    /// Write this image into `body` under `data_key` or `url_key`
    pub fn insert_into(
        &self,
        body: &mut Map<String, Value>,
        data_key: &str,
        url_key: &str,
    ) -> Result<()> {
        let key = if self.is_url() { url_key } else { data_key };
        body.insert(key.to_string(), Value::String(self.payload()?));
        Ok(())
    }
}

/// Write a list of images under `data_key` or `url_key`.
///
/// The service takes one kind per request, so uploads and urls cannot be mixed.
pub fn insert_many(
    sources: &[ImageSource],
    body: &mut Map<String, Value>,
    data_key: &str,
    url_key: &str,
) -> Result<()> {
    let Some(first) = sources.first() else {
        return Err(Error::Config("at least one image is required".into()));
    };
    let urls = first.is_url();
    if sources.iter().any(|s| s.is_url() != urls) {
        return Err(Error::Config(
            "cannot mix urls and uploaded images in one request".into(),
        ));
    }

    let payloads = sources
        .iter()
        .map(|s| s.payload().map(Value::String))
        .collect::<Result<Vec<_>>>()?;
    let key = if urls { url_key } else { data_key };
    body.insert(key.to_string(), Value::Array(payloads));
    Ok(())
}

/// Read a file and base64-encode it
pub fn read_base64(path: &Path) -> Result<String> {
    let data = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BASE64.encode(data))
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        ImageSource::Path(path)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        ImageSource::Bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_path_is_uploaded_as_base64() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG fake").unwrap();

        let mut body = Map::new();
        ImageSource::path(file.path())
            .insert_into(&mut body, "image", "url")
            .unwrap();

        assert_eq!(body["image"], Value::String(BASE64.encode(b"\x89PNG fake")));
        assert!(!body.contains_key("url"));
    }

    #[test]
    fn test_url_is_sent_verbatim() {
        let mut body = Map::new();
        ImageSource::url("http://img.test/a.jpg")
            .insert_into(&mut body, "imageA", "urlA")
            .unwrap();
        assert_eq!(body["urlA"], "http://img.test/a.jpg");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let mut body = Map::new();
        let err = ImageSource::path("/nonexistent/face.jpg")
            .insert_into(&mut body, "image", "url")
            .unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, PathBuf::from("/nonexistent/face.jpg")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_insert_many_rejects_mixed_sources() {
        let mut body = Map::new();
        let sources = [ImageSource::url("http://a"), ImageSource::Bytes(vec![1, 2])];
        assert!(matches!(
            insert_many(&sources, &mut body, "images", "urls"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            insert_many(&[], &mut body, "images", "urls"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_insert_many_urls() {
        let mut body = Map::new();
        let sources = [ImageSource::url("http://a"), ImageSource::url("http://b")];
        insert_many(&sources, &mut body, "images", "urls").unwrap();
        assert_eq!(body["urls"], serde_json::json!(["http://a", "http://b"]));
    }
}
