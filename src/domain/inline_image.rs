//! Base64 images carried as `data:` URIs.

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::domain::AppError;

/// MIME type assumed when the image API omits one.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// An image held in memory as a MIME type plus base64 payload.
#[derive(Clone, PartialEq, Eq)]
pub struct InlineImage {
    mime_type: String,
    data: String,
}

impl fmt::Debug for InlineImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InlineImage")
            .field("mime_type", &self.mime_type)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl InlineImage {
    /// Wrap an already base64-encoded payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self { mime_type: mime_type.into(), data: data.into() }
    }

    /// Encode raw image bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(mime_type, STANDARD.encode(bytes))
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Base64 payload without the `data:` prefix.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Decode the payload back into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, AppError> {
        STANDARD
            .decode(self.data.as_bytes())
            .map_err(|e| AppError::InvalidDataUri(format!("payload is not valid base64: {}", e)))
    }

    /// File extension matching the MIME type.
    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            _ => "png",
        }
    }

    pub fn to_data_uri(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InlineImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime_type, self.data)
    }
}

impl FromStr for InlineImage {
    type Err = AppError;

    /// Parse `data:<mime>;base64,<payload>`.
    fn from_str(uri: &str) -> Result<Self, Self::Err> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| AppError::InvalidDataUri("missing 'data:' prefix".into()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| AppError::InvalidDataUri("missing ',' separator".into()))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| AppError::InvalidDataUri("only base64 payloads are supported".into()))?;
        if mime_type.is_empty() {
            return Err(AppError::InvalidDataUri("missing MIME type".into()));
        }
        Ok(Self::new(mime_type, payload))
    }
}
