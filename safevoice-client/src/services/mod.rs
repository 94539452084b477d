//! Domain service facades
//!
//! Three independent operation groups, each a 1:1 mapping onto one
//! backend endpoint. Payloads are validated before dispatch; the
//! backend stays authoritative for everything else.

pub mod auth;
pub mod official;
pub mod problems;

pub use auth::AuthService;
pub use official::OfficialService;
pub use problems::{NewProblem, ProblemService};

use crate::error::{ClientError, ClientResult};

/// Maximum image file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// An image payload for a multipart upload
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    /// Reject payloads the backend would refuse anyway: empty files,
    /// files over 5MB, unsupported formats.
    pub(crate) fn validate(&self) -> ClientResult<()> {
        if self.bytes.is_empty() {
            return Err(ClientError::Validation("Image file is empty".into()));
        }
        if self.bytes.len() > MAX_FILE_SIZE {
            return Err(ClientError::Validation(
                "Image size must be less than 5MB".into(),
            ));
        }
        match self.extension() {
            Some(ext) if SUPPORTED_FORMATS.contains(&ext.as_str()) => Ok(()),
            _ => Err(ClientError::Validation(format!(
                "Unsupported image format, expected one of: {}",
                SUPPORTED_FORMATS.join(", ")
            ))),
        }
    }

    fn mime(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("png") => "image/png",
            Some("webp") => "image/webp",
            _ => "image/jpeg",
        }
    }

    /// Build a multipart part carrying this image
    pub(crate) fn into_part(self) -> ClientResult<reqwest::multipart::Part> {
        let mime = self.mime();
        let part = reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(mime)?;
        Ok(part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_image_is_rejected() {
        let image = ImageUpload::new("pothole.jpg", Vec::new());
        assert!(matches!(
            image.validate(),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn oversized_image_is_rejected() {
        let image = ImageUpload::new("pothole.jpg", vec![0u8; MAX_FILE_SIZE + 1]);
        let err = image.validate().unwrap_err();
        assert_eq!(
            err.user_message("fallback"),
            "Image size must be less than 5MB"
        );
    }

    #[test]
    fn unsupported_format_is_rejected() {
        let image = ImageUpload::new("report.gif", vec![1, 2, 3]);
        assert!(image.validate().is_err());

        let no_extension = ImageUpload::new("report", vec![1, 2, 3]);
        assert!(no_extension.validate().is_err());
    }

    #[test]
    fn supported_formats_pass() {
        for name in ["a.png", "b.jpg", "c.JPEG", "d.webp"] {
            let image = ImageUpload::new(name, vec![1, 2, 3]);
            assert!(image.validate().is_ok(), "{name} should validate");
        }
    }

    #[test]
    fn mime_follows_extension() {
        assert_eq!(ImageUpload::new("a.png", vec![1]).mime(), "image/png");
        assert_eq!(ImageUpload::new("a.webp", vec![1]).mime(), "image/webp");
        assert_eq!(ImageUpload::new("a.jpg", vec![1]).mime(), "image/jpeg");
    }
}
