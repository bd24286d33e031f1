//! Testing utilities for peekr
//!
//! This module provides fixture builders for `FileDescriptor` values so
//! tests can describe galleries tersely.
//!
//! Only available when compiled with `cfg(test)`.

use crate::classify::FileDescriptor;
use chrono::{TimeZone, Utc};

/// One mebibyte
pub const MIB: u64 = 1024 * 1024;

/// Build a descriptor with a fixed creation time
///
/// Fixtures use a fixed timestamp so equality comparisons between
/// descriptors built at different moments still hold.
///
/// # Panics
/// Never in practice; the fixed timestamp is valid.
pub fn file(id: &str, filename: &str, mime_type: &str, size_bytes: u64) -> FileDescriptor {
    let created_at = Utc
        .with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp");
    FileDescriptor::new(id, filename, mime_type, size_bytes).with_created_at(created_at)
}

/// A 1 MiB JPEG named after its id
pub fn image(id: &str) -> FileDescriptor {
    file(id, &format!("{id}.jpg"), "image/jpeg", MIB)
}

/// A 2 MiB PDF named after its id
pub fn pdf(id: &str) -> FileDescriptor {
    file(id, &format!("{id}.pdf"), "application/pdf", 2 * MIB)
}

/// A 10 MiB MP4 named after its id
pub fn video(id: &str) -> FileDescriptor {
    file(id, &format!("{id}.mp4"), "video/mp4", 10 * MIB)
}

/// A small spreadsheet named after its id
pub fn document(id: &str) -> FileDescriptor {
    file(
        id,
        &format!("{id}.xlsx"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        64 * 1024,
    )
}
