//! Size-threshold routing over file categories

use crate::classify::{FileCategory, FileDescriptor, classify};
use crate::output::format_size;
use tracing::debug;

use super::decision::{ActionDecision, ModalComponent, RoutedAction};
use super::security::validate_security;

const MIB: u64 = 1024 * 1024;

/// Warning shown when an image is too large for the in-app viewer
pub const IMAGE_TOO_LARGE_WARNING: &str = "File too large, opening externally";

/// Warning shown for vector exports with nothing to render
pub const NO_PREVIEW_WARNING: &str = "No preview available for this file";

/// Thresholds and switches for the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    /// Largest image shown in-app (bytes)
    pub max_file_size: u64,
    /// Largest PDF shown in-app (bytes)
    pub pdf_max_file_size: u64,
    /// Largest video shown in-app (bytes)
    pub video_max_file_size: u64,
    /// Attach security advisories in [`ActionRouter::route`]
    pub enable_security: bool,
    /// Oversize threshold for advisories (bytes)
    pub security_max_file_size: u64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_file_size: 30 * MIB,
            pdf_max_file_size: 50 * MIB,
            video_max_file_size: 100 * MIB,
            enable_security: true,
            security_max_file_size: 200 * MIB,
        }
    }
}

/// Decides how each file is presented
#[derive(Debug, Clone, Default)]
pub struct ActionRouter {
    config: RouterConfig,
}

impl ActionRouter {
    /// Create a router with the given thresholds
    #[must_use]
    pub const fn new(config: RouterConfig) -> Self {
        Self { config }
    }

    /// Get the router's configuration
    #[must_use]
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Decide the action for a file
    ///
    /// Always returns exactly one action. A file above its category's size
    /// threshold is never routed to a modal.
    ///
    /// # Examples
    /// ```
    /// use peekr::classify::FileDescriptor;
    /// use peekr::routing::{ActionDecision, ActionRouter};
    ///
    /// let router = ActionRouter::default();
    /// let file = FileDescriptor::new("1", "notes.docx", "", 4096);
    /// assert_eq!(router.decide(&file), ActionDecision::Share { warning: None });
    /// ```
    #[must_use]
    pub fn decide(&self, file: &FileDescriptor) -> ActionDecision {
        let category = classify(file);
        let decision = match category {
            FileCategory::Image => {
                if file.size_bytes > self.config.max_file_size {
                    ActionDecision::Share {
                        warning: Some(IMAGE_TOO_LARGE_WARNING.to_string()),
                    }
                } else {
                    modal(ModalComponent::Image, file)
                }
            }
            FileCategory::Pdf => {
                self.sized_modal(ModalComponent::Pdf, file, self.config.pdf_max_file_size)
            }
            FileCategory::Video => {
                self.sized_modal(ModalComponent::Video, file, self.config.video_max_file_size)
            }
            // The thumbnail stands in for the vector artwork
            FileCategory::VectorWithThumbnail => modal(ModalComponent::Image, file),
            FileCategory::VectorWithoutThumbnail => ActionDecision::Share {
                warning: Some(NO_PREVIEW_WARNING.to_string()),
            },
            FileCategory::Document | FileCategory::Archive => {
                ActionDecision::Share { warning: None }
            }
            FileCategory::Audio | FileCategory::Other => ActionDecision::Download { warning: None },
        };

        debug!(
            file = %file.id,
            %category,
            action = decision.label(),
            "routed file"
        );
        decision
    }

    /// Decide the action and attach security advisories
    ///
    /// Advisories are only collected when `enable_security` is set.
    #[must_use]
    pub fn route(&self, file: &FileDescriptor) -> RoutedAction {
        let decision = self.decide(file);
        let advisories = if self.config.enable_security {
            validate_security(file, self.config.security_max_file_size)
        } else {
            Vec::new()
        };
        RoutedAction {
            decision,
            advisories,
        }
    }

    fn sized_modal(
        &self,
        component: ModalComponent,
        file: &FileDescriptor,
        limit: u64,
    ) -> ActionDecision {
        if file.size_bytes > limit {
            ActionDecision::Share {
                warning: Some(format!(
                    "This {} is {}, larger than the {} in-app limit. Opening externally.",
                    match component {
                        ModalComponent::Pdf => "PDF",
                        ModalComponent::Video => "video",
                        ModalComponent::Image => "image",
                    },
                    format_size(file.size_bytes),
                    format_size(limit)
                )),
            }
        } else {
            modal(component, file)
        }
    }
}

fn modal(component: ModalComponent, file: &FileDescriptor) -> ActionDecision {
    ActionDecision::Modal {
        component,
        file: file.clone(),
    }
}
