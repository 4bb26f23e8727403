// SPDX-License-Identifier: MPL-2.0
//! Custom avatar uploads: file handles, content-type validation and data URL
//! encoding.

use crate::error::{Result, ValidationError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;
use std::path::{Path, PathBuf};

const IMAGE_MIME_PREFIX: &str = "image/";
const DATA_URL_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A locally chosen file together with its declared content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: PathBuf,
    content_type: Option<String>,
}

impl FileHandle {
    /// Declares the content type from the file extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let content_type = mime_guess::from_path(&path)
            .first()
            .map(|mime| mime.essence_str().to_string());
        Self { path, content_type }
    }

    pub fn with_content_type(path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_type: Some(content_type.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Rejects files whose declared type is not `image/*`.
pub fn validate(file: &FileHandle) -> std::result::Result<(), ValidationError> {
    match file.content_type() {
        Some(mime) if mime.starts_with(IMAGE_MIME_PREFIX) => Ok(()),
        declared => Err(ValidationError::NotAnImage {
            declared: declared.map(str::to_string),
        }),
    }
}

/// Reads the file and encodes it as a data URL.
///
/// Callers are expected to have run [`validate`] first.
pub async fn decode(file: FileHandle) -> Result<DataUrl> {
    let bytes = tokio::fs::read(file.path()).await?;
    let mime = file
        .content_type()
        .unwrap_or("application/octet-stream");
    tracing::debug!(path = %file.path().display(), bytes = bytes.len(), "decoded upload");
    Ok(DataUrl::encode(mime, &bytes))
}

/// A self-contained `data:<mime>;base64,<payload>` image source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataUrl {
    value: String,
    payload_start: usize,
}

impl DataUrl {
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        let header = format!("{DATA_URL_SCHEME}{mime}{BASE64_MARKER}");
        let payload_start = header.len();
        let mut value = header;
        STANDARD.encode_string(bytes, &mut value);
        Self {
            value,
            payload_start,
        }
    }

    /// Accepts an already encoded base64 data URL. The payload itself is not
    /// checked.
    pub fn parse(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let rest = value.strip_prefix(DATA_URL_SCHEME)?;
        let marker = rest.find(BASE64_MARKER)?;
        let payload_start = DATA_URL_SCHEME.len() + marker + BASE64_MARKER.len();
        Some(Self {
            value,
            payload_start,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn mime(&self) -> &str {
        &self.value[DATA_URL_SCHEME.len()..self.payload_start - BASE64_MARKER.len()]
    }

    pub fn is_svg(&self) -> bool {
        self.mime() == "image/svg+xml"
    }

    /// Decodes the payload back into bytes for rendering.
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        STANDARD.decode(&self.value[self.payload_start..]).ok()
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn content_type_is_declared_from_extension() {
        assert_eq!(
            FileHandle::from_path("me.png").content_type(),
            Some("image/png")
        );
        assert_eq!(
            FileHandle::from_path("me.svg").content_type(),
            Some("image/svg+xml")
        );
        assert_eq!(
            FileHandle::from_path("notes.txt").content_type(),
            Some("text/plain")
        );
        assert_eq!(FileHandle::from_path("README").content_type(), None);
    }

    #[test]
    fn validate_accepts_any_image_subtype() {
        for mime in ["image/png", "image/jpeg", "image/webp", "image/svg+xml"] {
            assert!(validate(&FileHandle::with_content_type("f", mime)).is_ok());
        }
    }

    #[test]
    fn validate_rejects_non_images() {
        let err = validate(&FileHandle::with_content_type("doc.pdf", "application/pdf"))
            .expect_err("pdf is not an image");
        assert_eq!(
            err,
            ValidationError::NotAnImage {
                declared: Some("application/pdf".into())
            }
        );

        let untyped = FileHandle::from_path("Makefile");
        assert_eq!(
            validate(&untyped),
            Err(ValidationError::NotAnImage { declared: None })
        );
    }

    #[test]
    fn encode_matches_browser_data_urls() {
        let url = DataUrl::encode("image/png", b"hello");
        assert_eq!(url.as_str(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(url.mime(), "image/png");
        assert_eq!(url.to_bytes().as_deref(), Some(&b"hello"[..]));
    }

    #[test]
    fn parse_accepts_encoded_urls() {
        let url = DataUrl::parse("data:image/png;base64,XYZ").expect("valid data url");
        assert_eq!(url.mime(), "image/png");
        assert_eq!(url.as_str(), "data:image/png;base64,XYZ");
        assert!(!url.is_svg());

        assert!(DataUrl::parse("https://example.com/a.png").is_none());
        assert!(DataUrl::parse("data:image/png,raw").is_none());
    }

    #[tokio::test]
    async fn decode_reads_file_into_data_url() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("avatar.svg");
        fs::write(&path, "<svg/>").expect("failed to write svg");

        let url = decode(FileHandle::from_path(&path))
            .await
            .expect("decode should succeed");

        assert!(url.is_svg());
        assert_eq!(url.to_bytes().as_deref(), Some(&b"<svg/>"[..]));
    }

    #[tokio::test]
    async fn decode_missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing = FileHandle::from_path(dir.path().join("gone.png"));

        match decode(missing).await {
            Err(crate::error::Error::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
