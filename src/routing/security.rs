//! Advisory security checks
//!
//! These never fail and never change a routing decision. The caller decides
//! whether an advisory warrants a confirmation prompt.

use crate::classify::{FileDescriptor, is_known_extension, normalize_mime};
use crate::output::format_size;
use serde::Serialize;
use std::fmt;

const DANGEROUS_EXTENSIONS: &[&str] = &[
    "exe", "bat", "cmd", "com", "msi", "scr", "ps1", "vbs", "js", "jar", "sh", "apk", "app",
    "dmg", "dll",
];

const DANGEROUS_MIME_TYPES: &[&str] = &[
    "application/x-msdownload",
    "application/x-msdos-program",
    "application/x-executable",
    "application/x-sh",
    "application/x-bat",
    "application/java-archive",
    "application/vnd.android.package-archive",
    "application/javascript",
    "text/javascript",
];

/// A non-blocking security finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SecurityAdvisory {
    /// Executable or script extension
    DangerousExtension {
        /// Offending extension, lowercased
        extension: String,
    },
    /// Executable or script MIME type
    DangerousMimeType {
        /// Offending MIME type
        mime: String,
    },
    /// A harmless-looking extension followed by a dangerous one
    DoubleExtension {
        /// The full filename
        filename: String,
    },
    /// Larger than the configured security limit
    Oversize {
        /// Actual size in bytes
        size: u64,
        /// Limit in bytes
        limit: u64,
    },
}

impl fmt::Display for SecurityAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DangerousExtension { extension } => {
                write!(f, "'.{extension}' files can run code on this device")
            }
            Self::DangerousMimeType { mime } => {
                write!(f, "file type '{mime}' is executable content")
            }
            Self::DoubleExtension { filename } => {
                write!(f, "'{filename}' hides its real type behind a second extension")
            }
            Self::Oversize { size, limit } => write!(
                f,
                "file is {}, above the {} safety limit",
                format_size(*size),
                format_size(*limit)
            ),
        }
    }
}

/// Run all advisory checks against a file
///
/// `max_size` is the oversize threshold in bytes.
#[must_use]
pub fn validate_security(file: &FileDescriptor, max_size: u64) -> Vec<SecurityAdvisory> {
    let mut advisories = Vec::new();
    let name = file.filename.to_ascii_lowercase();
    let parts: Vec<&str> = name.split('.').collect();

    if let Some(ext) = file.extension()
        && DANGEROUS_EXTENSIONS.contains(&ext.as_str())
    {
        // name.pdf.exe: a non-empty stem, a known inner extension, then the dangerous one
        let disguised = parts.len() > 2
            && parts.first().is_some_and(|stem| !stem.is_empty())
            && is_known_extension(parts[parts.len() - 2]);
        if disguised {
            advisories.push(SecurityAdvisory::DoubleExtension {
                filename: file.filename.clone(),
            });
        }
        advisories.push(SecurityAdvisory::DangerousExtension { extension: ext });
    }

    let mime = normalize_mime(&file.mime_type);
    if DANGEROUS_MIME_TYPES.contains(&mime.as_str()) {
        advisories.push(SecurityAdvisory::DangerousMimeType { mime });
    }

    if file.size_bytes > max_size {
        advisories.push(SecurityAdvisory::Oversize {
            size: file.size_bytes,
            limit: max_size,
        });
    }

    advisories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MIB, file};

    #[test]
    fn test_plain_image_has_no_advisories() {
        let f = file("1", "photo.jpg", "image/jpeg", 2 * MIB);
        assert!(validate_security(&f, 100 * MIB).is_empty());
    }

    #[test]
    fn test_executable_extension_flagged() {
        let f = file("1", "setup.EXE", "", 10);
        assert_eq!(
            validate_security(&f, 100 * MIB),
            vec![SecurityAdvisory::DangerousExtension {
                extension: "exe".into()
            }]
        );
    }

    #[test]
    fn test_double_extension_flagged() {
        let f = file("1", "invoice.pdf.exe", "application/x-msdownload", 10);
        let advisories = validate_security(&f, 100 * MIB);

        assert!(advisories.contains(&SecurityAdvisory::DoubleExtension {
            filename: "invoice.pdf.exe".into()
        }));
        assert!(advisories.contains(&SecurityAdvisory::DangerousMimeType {
            mime: "application/x-msdownload".into()
        }));
    }

    #[test]
    fn test_dotted_script_name_is_not_double_extension() {
        let f = file("1", "deploy.prod.sh", "", 10);
        assert_eq!(
            validate_security(&f, 100 * MIB),
            vec![SecurityAdvisory::DangerousExtension {
                extension: "sh".into()
            }]
        );
    }

    #[test]
    fn test_mime_parameters_do_not_hide_dangerous_type() {
        let f = file("1", "run", "Application/X-SH; charset=utf-8", 10);
        assert_eq!(
            validate_security(&f, 100 * MIB),
            vec![SecurityAdvisory::DangerousMimeType {
                mime: "application/x-sh".into()
            }]
        );
    }

    #[test]
    fn test_oversize_flagged() {
        let f = file("1", "movie.mp4", "video/mp4", 300 * MIB);
        let advisories = validate_security(&f, 200 * MIB);
        assert_eq!(
            advisories,
            vec![SecurityAdvisory::Oversize {
                size: 300 * MIB,
                limit: 200 * MIB
            }]
        );
        assert!(advisories[0].to_string().contains("MiB"));
    }

    #[test]
    fn test_archive_with_dots_is_not_double_extension() {
        let f = file("1", "backup.tar.gz", "application/gzip", 10);
        assert!(validate_security(&f, 100 * MIB).is_empty());
    }
}
