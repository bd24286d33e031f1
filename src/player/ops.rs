//! Download and share through the host's file capability

use super::error::{OperationError, Result};
use crate::classify::FileDescriptor;
use serde::Serialize;
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Which rendition of a file to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeHint {
    /// Small preview image
    Thumbnail,
    /// Original file
    Full,
}

/// File-operation capability supplied by the host application
///
/// All three operations are fallible. Implementations decide where files
/// land and how the share sheet is presented.
pub trait FileOperations {
    /// Build the URL for a file rendition
    ///
    /// # Errors
    ///
    /// Returns `OperationError::ResolveUrl` if no URL can be built.
    fn resolve_url(&self, file: &FileDescriptor, size: SizeHint) -> Result<String>;

    /// Download `url` to local storage, using `destination_hint` as the
    /// preferred file name
    fn download(&self, url: &str, destination_hint: &str) -> impl Future<Output = Result<PathBuf>>;

    /// Present the system share sheet for a local file
    fn share(&self, path: &Path, mime_type: &str) -> impl Future<Output = Result<()>>;
}

/// Result of a user-triggered file operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum OperationOutcome {
    /// File saved locally
    Downloaded {
        /// Where it landed
        path: PathBuf,
    },
    /// Share sheet presented
    Shared,
    /// Operation failed; show `alert` to the user
    Failed {
        /// User-facing alert text
        alert: String,
    },
}

impl OperationOutcome {
    /// Whether the operation completed
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    /// Alert text for a failure
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        match self {
            Self::Failed { alert } => Some(alert),
            _ => None,
        }
    }
}

/// Download and share actions over a [`FileOperations`] capability
///
/// Each call runs to completion on its own. Triggering the same action twice
/// while the first is in flight starts a second operation.
#[derive(Debug, Clone)]
pub struct FileActions<O> {
    ops: O,
}

impl<O: FileOperations> FileActions<O> {
    /// Wrap a host capability
    pub const fn new(ops: O) -> Self {
        Self { ops }
    }

    /// The wrapped capability
    pub const fn operations(&self) -> &O {
        &self.ops
    }

    /// URL of a file rendition
    ///
    /// A non-blank `thumbnail_url` on the descriptor wins for thumbnails.
    ///
    /// # Errors
    ///
    /// Propagates the capability's `ResolveUrl` failure.
    pub fn url_for(&self, file: &FileDescriptor, size: SizeHint) -> Result<String> {
        if size == SizeHint::Thumbnail
            && file.has_thumbnail()
            && let Some(url) = &file.thumbnail_url
        {
            return Ok(url.clone());
        }
        self.ops.resolve_url(file, size)
    }

    /// Save the full file locally
    pub async fn download(&self, file: &FileDescriptor) -> OperationOutcome {
        match self.fetch(file).await {
            Ok(path) => {
                info!(file = %file.id, path = %path.display(), "download complete");
                OperationOutcome::Downloaded { path }
            }
            Err(err) => Self::failed("download", file, &err),
        }
    }

    /// Download the file, then hand it to the share sheet
    pub async fn share(&self, file: &FileDescriptor) -> OperationOutcome {
        match self.fetch_and_share(file).await {
            Ok(()) => {
                info!(file = %file.id, "share sheet presented");
                OperationOutcome::Shared
            }
            Err(err) => Self::failed("share", file, &err),
        }
    }

    async fn fetch(&self, file: &FileDescriptor) -> Result<PathBuf> {
        let url = self.url_for(file, SizeHint::Full)?;
        self.ops.download(&url, &file.filename).await
    }

    async fn fetch_and_share(&self, file: &FileDescriptor) -> Result<()> {
        let path = self.fetch(file).await?;
        self.ops.share(&path, &file.mime_type).await
    }

    fn failed(action: &str, file: &FileDescriptor, err: &OperationError) -> OperationOutcome {
        warn!(file = %file.id, action, error = %err, "file operation failed");
        OperationOutcome::Failed {
            alert: format!("Could not {action} {}. {err}", file.filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingOps {
        fail_resolve: bool,
        fail_download: bool,
        fail_share: bool,
        downloads: Cell<u32>,
        shared: RefCell<Vec<(PathBuf, String)>>,
    }

    impl FileOperations for RecordingOps {
        fn resolve_url(&self, file: &FileDescriptor, size: SizeHint) -> Result<String> {
            if self.fail_resolve {
                return Err(OperationError::ResolveUrl("no base url".into()));
            }
            let rendition = match size {
                SizeHint::Thumbnail => "thumb",
                SizeHint::Full => "full",
            };
            Ok(format!("https://files.test/{}/{rendition}", file.id))
        }

        async fn download(&self, url: &str, destination_hint: &str) -> Result<PathBuf> {
            if self.fail_download {
                return Err(OperationError::Download(format!("{url} returned 503")));
            }
            self.downloads.set(self.downloads.get() + 1);
            Ok(PathBuf::from("/downloads").join(destination_hint))
        }

        async fn share(&self, path: &Path, mime_type: &str) -> Result<()> {
            if self.fail_share {
                return Err(OperationError::Share("sheet dismissed".into()));
            }
            self.shared
                .borrow_mut()
                .push((path.to_path_buf(), mime_type.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_download_returns_local_path() {
        let actions = FileActions::new(RecordingOps::default());
        let outcome = actions.download(&testing::pdf("report")).await;

        assert_eq!(
            outcome,
            OperationOutcome::Downloaded {
                path: PathBuf::from("/downloads/report.pdf")
            }
        );
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_share_downloads_then_shares() {
        let actions = FileActions::new(RecordingOps::default());
        let outcome = actions.share(&testing::video("clip")).await;

        assert_eq!(outcome, OperationOutcome::Shared);
        let shared = actions.operations().shared.borrow();
        assert_eq!(
            shared.as_slice(),
            &[(PathBuf::from("/downloads/clip.mp4"), "video/mp4".to_string())]
        );
    }

    #[tokio::test]
    async fn test_failures_become_alerts() {
        let actions = FileActions::new(RecordingOps {
            fail_download: true,
            ..RecordingOps::default()
        });
        let outcome = actions.download(&testing::pdf("report")).await;
        let alert = outcome.alert().unwrap();
        assert!(alert.contains("report.pdf"));
        assert!(alert.contains("503"));

        let actions = FileActions::new(RecordingOps {
            fail_share: true,
            ..RecordingOps::default()
        });
        let outcome = actions.share(&testing::pdf("report")).await;
        assert!(!outcome.is_success());
        assert_eq!(actions.operations().downloads.get(), 1);

        let actions = FileActions::new(RecordingOps {
            fail_resolve: true,
            ..RecordingOps::default()
        });
        let outcome = actions.share(&testing::pdf("report")).await;
        assert!(outcome.alert().unwrap().contains("no base url"));
        assert_eq!(actions.operations().downloads.get(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_triggers_are_not_deduplicated() {
        let actions = FileActions::new(RecordingOps::default());
        let file = testing::pdf("report");

        let (first, second) = tokio::join!(actions.download(&file), actions.download(&file));
        assert!(first.is_success());
        assert!(second.is_success());
        assert_eq!(actions.operations().downloads.get(), 2);
    }

    #[test]
    fn test_thumbnail_url_prefers_descriptor() {
        let actions = FileActions::new(RecordingOps::default());
        let file = testing::file("logo", "logo.svg", "image/svg+xml", 2048)
            .with_thumbnail("https://cdn.test/logo.png");

        assert_eq!(
            actions.url_for(&file, SizeHint::Thumbnail).unwrap(),
            "https://cdn.test/logo.png"
        );
        assert_eq!(
            actions.url_for(&file, SizeHint::Full).unwrap(),
            "https://files.test/logo/full"
        );
        assert_eq!(
            actions
                .url_for(&testing::image("a"), SizeHint::Thumbnail)
                .unwrap(),
            "https://files.test/a/thumb"
        );
    }
}
