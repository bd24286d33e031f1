//! File descriptor and category types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of an uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    /// Create a new file id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An uploaded artifact as supplied by the host application
///
/// Read-only to this crate. Identity is `id`; ids must be unique within any
/// file list handed to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    /// Unique identifier
    pub id: FileId,
    /// Original filename, including extension
    pub filename: String,
    /// Declared MIME type (may be empty or generic)
    #[serde(default)]
    pub mime_type: String,
    /// Size in bytes
    #[serde(default)]
    pub size_bytes: u64,
    /// Server-rendered thumbnail, if one exists
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Upload timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl FileDescriptor {
    /// Create a descriptor stamped with the current time
    #[must_use]
    pub fn new(
        id: impl Into<FileId>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            mime_type: mime_type.into(),
            size_bytes,
            thumbnail_url: None,
            created_at: Utc::now(),
        }
    }

    /// Attach a thumbnail URL
    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Override the creation timestamp
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Whether a non-blank thumbnail URL is present
    #[must_use]
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    /// Lowercased extension of the filename, if any
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.filename)
    }
}

/// Lowercased final extension of a filename
pub(crate) fn extension_of(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Closed set of file categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileCategory {
    /// Raster image
    Image,
    /// PDF document
    Pdf,
    /// Video
    Video,
    /// Audio
    Audio,
    /// Office/text document
    Document,
    /// Compressed archive
    Archive,
    /// EPS/PS-family export that carries a thumbnail
    VectorWithThumbnail,
    /// EPS/PS-family export without a thumbnail
    VectorWithoutThumbnail,
    /// Anything else
    Other,
}

impl FileCategory {
    /// Whether an in-app preview surface exists for this category
    #[must_use]
    pub const fn is_previewable(self) -> bool {
        matches!(
            self,
            Self::Image | Self::Pdf | Self::Video | Self::VectorWithThumbnail
        )
    }

    /// Short machine-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Document => "document",
            Self::Archive => "archive",
            Self::VectorWithThumbnail => "vectorWithThumbnail",
            Self::VectorWithoutThumbnail => "vectorWithoutThumbnail",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
