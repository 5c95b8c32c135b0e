use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display, Formatter};
use std::path::Path;

use crate::utils::{article_names_to_array, Result};

#[cfg(test)]
mod tests;

/// Status code the picture backend returns for a successful call.
pub const SUCCESS_CODE: &str = "20000";

// ============================================================================
// Picture Models
// ============================================================================

/// Backend identifier of a picture or its folder.
///
/// The backend sends these as JSON strings, integers or whole floats; all are
/// normalized to text here. `"0"` (or `null`) marks a picture that was never
/// saved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PictureId(String);

impl PictureId {
    const UNSET: &'static str = "0";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn unset() -> Self {
        Self(Self::UNSET.to_string())
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_empty() || self.0 == Self::UNSET
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for PictureId {
    fn default() -> Self {
        Self::unset()
    }
}

impl Display for PictureId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PictureId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for PictureId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for PictureId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PictureIdVisitor;

        impl<'de> Visitor<'de> for PictureIdVisitor {
            type Value = PictureId;

            fn expecting(&self, f: &mut Formatter) -> fmt::Result {
                f.write_str("a picture id as string, integer or null")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<PictureId, E> {
                Ok(PictureId::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<PictureId, E> {
                Ok(PictureId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<PictureId, E> {
                Ok(PictureId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<PictureId, E> {
                Ok(PictureId(v.to_string()))
            }

            // Whole floats only; `5.0` is the same id as `5`
            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<PictureId, E> {
                if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                    Ok(PictureId((v as i64).to_string()))
                } else {
                    Err(E::invalid_value(de::Unexpected::Float(v), &self))
                }
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<PictureId, E> {
                Ok(PictureId::unset())
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<PictureId, E> {
                Ok(PictureId::unset())
            }
        }

        deserializer.deserialize_any(PictureIdVisitor)
    }
}

/// One stored image and its metadata, as the backend describes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Picture {
    pub id: PictureId,
    pub pid: PictureId,
    pub name: String,
    pub source_name: String,
    pub path_name: String,
    pub url: String,
    pub size: u64,
    pub star_status: u8,
    /// Display text from the backend, not an epoch.
    pub cre_time: String,
    /// Comma-joined titles of the articles that reference this picture.
    pub article_names: String,
    pub del_time: i64,
}

impl Picture {
    pub fn is_starred(&self) -> bool {
        self.star_status == 1
    }

    pub fn is_deleted(&self) -> bool {
        self.del_time != 0
    }

    pub fn article_names(&self) -> Vec<String> {
        article_names_to_array(&self.article_names)
    }
}

/// Blank picture used to seed a new-upload form.
pub fn build_default_picture() -> Picture {
    Picture::default()
}

// ============================================================================
// Upload Related Models
// ============================================================================

/// The file a user picked, as seen before it is handed to the uploader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadFile {
    pub name: String,
    pub size: u64,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self {
            name,
            size: metadata.len(),
        })
    }

    pub fn size_in_mib(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }
}

/// Response body of the picture upload endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub code: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl UploadResponse {
    pub fn new(code: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            msg: msg.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Transport failure reported by the upload widget.
///
/// `message` is either plain text or a JSON encoded `{code, msg}` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadError {
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

// ============================================================================
// Notification Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            title: None,
        }
    }

    pub fn error(message: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            title: Some(title.into()),
        }
    }
}

// ============================================================================
// Configuration Models
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PicStyle {
    /// Largest accepted upload, in MB.
    pub max_size: f64,
}

impl Default for PicStyle {
    fn default() -> Self {
        Self { max_size: 10.0 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureConfig {
    #[serde(default)]
    pub pic_style: PicStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}
