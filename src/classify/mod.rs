//! File classification
//!
//! Maps a file's MIME type and filename to a [`FileCategory`] and decides
//! whether an in-app preview surface exists for it.
//!
//! Classification is total: every input lands in some category, with
//! [`FileCategory::Other`] as the catch-all. Nothing here touches the
//! filesystem or network.

mod classifier;
mod types;

pub use classifier::{classify, classify_parts, is_previewable};
pub(crate) use classifier::{is_known_extension, normalize_mime};
pub use types::{FileCategory, FileDescriptor, FileId};
