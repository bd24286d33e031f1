use super::types::{FileCategory, FileDescriptor, extension_of};

/// Category family before the thumbnail split for vector exports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Image,
    Pdf,
    Video,
    Audio,
    Document,
    Archive,
    Vector,
}

/// Exact MIME matches. Checked before the `image/`, `video/`, `audio/` prefixes
/// so that EPS types registered under `image/` land in the vector family.
const MIME_TABLE: &[(&str, Family)] = &[
    ("application/pdf", Family::Pdf),
    ("application/x-pdf", Family::Pdf),
    ("application/postscript", Family::Vector),
    ("application/eps", Family::Vector),
    ("application/x-eps", Family::Vector),
    ("image/eps", Family::Vector),
    ("image/x-eps", Family::Vector),
    ("application/illustrator", Family::Vector),
    ("application/msword", Family::Document),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Family::Document,
    ),
    ("application/vnd.ms-excel", Family::Document),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Family::Document,
    ),
    ("application/vnd.ms-powerpoint", Family::Document),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        Family::Document,
    ),
    ("application/vnd.oasis.opendocument.text", Family::Document),
    ("application/vnd.oasis.opendocument.spreadsheet", Family::Document),
    ("application/vnd.oasis.opendocument.presentation", Family::Document),
    ("application/rtf", Family::Document),
    ("text/rtf", Family::Document),
    ("text/plain", Family::Document),
    ("text/csv", Family::Document),
    ("application/zip", Family::Archive),
    ("application/x-zip-compressed", Family::Archive),
    ("application/x-rar-compressed", Family::Archive),
    ("application/vnd.rar", Family::Archive),
    ("application/x-7z-compressed", Family::Archive),
    ("application/x-tar", Family::Archive),
    ("application/gzip", Family::Archive),
    ("application/x-gzip", Family::Archive),
];

const EXTENSION_TABLE: &[(&str, Family)] = &[
    ("jpg", Family::Image),
    ("jpeg", Family::Image),
    ("png", Family::Image),
    ("gif", Family::Image),
    ("webp", Family::Image),
    ("bmp", Family::Image),
    ("heic", Family::Image),
    ("heif", Family::Image),
    ("tif", Family::Image),
    ("tiff", Family::Image),
    ("pdf", Family::Pdf),
    ("mp4", Family::Video),
    ("mov", Family::Video),
    ("m4v", Family::Video),
    ("avi", Family::Video),
    ("mkv", Family::Video),
    ("webm", Family::Video),
    ("3gp", Family::Video),
    ("mp3", Family::Audio),
    ("wav", Family::Audio),
    ("aac", Family::Audio),
    ("m4a", Family::Audio),
    ("ogg", Family::Audio),
    ("flac", Family::Audio),
    ("doc", Family::Document),
    ("docx", Family::Document),
    ("xls", Family::Document),
    ("xlsx", Family::Document),
    ("ppt", Family::Document),
    ("pptx", Family::Document),
    ("odt", Family::Document),
    ("ods", Family::Document),
    ("odp", Family::Document),
    ("rtf", Family::Document),
    ("txt", Family::Document),
    ("csv", Family::Document),
    ("zip", Family::Archive),
    ("rar", Family::Archive),
    ("7z", Family::Archive),
    ("tar", Family::Archive),
    ("gz", Family::Archive),
    ("tgz", Family::Archive),
    ("eps", Family::Vector),
    ("ps", Family::Vector),
    ("ai", Family::Vector),
];

/// Classify a file descriptor
///
/// # Examples
/// ```
/// use peekr::classify::{classify, FileCategory, FileDescriptor};
///
/// let file = FileDescriptor::new("1", "photo.jpg", "image/jpeg", 1024);
/// assert_eq!(classify(&file), FileCategory::Image);
/// ```
#[must_use]
pub fn classify(file: &FileDescriptor) -> FileCategory {
    classify_parts(&file.mime_type, &file.filename, file.has_thumbnail())
}

/// Classify from raw parts
///
/// Rule order: MIME table, then extension table, then the `mime_guess`
/// registry for extensions the table does not list, then `Other`.
#[must_use]
pub fn classify_parts(mime_type: &str, filename: &str, has_thumbnail: bool) -> FileCategory {
    let family = family_for_mime(&normalize_mime(mime_type))
        .or_else(|| family_for_filename(filename));

    match family {
        Some(Family::Image) => FileCategory::Image,
        Some(Family::Pdf) => FileCategory::Pdf,
        Some(Family::Video) => FileCategory::Video,
        Some(Family::Audio) => FileCategory::Audio,
        Some(Family::Document) => FileCategory::Document,
        Some(Family::Archive) => FileCategory::Archive,
        Some(Family::Vector) if has_thumbnail => FileCategory::VectorWithThumbnail,
        Some(Family::Vector) => FileCategory::VectorWithoutThumbnail,
        None => FileCategory::Other,
    }
}

/// Whether the file can be shown in an in-app modal
#[must_use]
pub fn is_previewable(file: &FileDescriptor) -> bool {
    classify(file).is_previewable()
}

/// Lowercase and strip parameters (`; charset=...`)
pub(crate) fn normalize_mime(mime_type: &str) -> String {
    mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn family_for_mime(mime: &str) -> Option<Family> {
    if let Some((_, family)) = MIME_TABLE.iter().find(|(known, _)| *known == mime) {
        return Some(*family);
    }

    let (top, sub) = mime.split_once('/')?;
    if sub.is_empty() {
        return None;
    }
    match top {
        "image" => Some(Family::Image),
        "video" => Some(Family::Video),
        "audio" => Some(Family::Audio),
        _ => None,
    }
}

/// Whether `ext` (lowercase, no dot) is a registered file extension
pub(crate) fn is_known_extension(ext: &str) -> bool {
    EXTENSION_TABLE.iter().any(|(known, _)| *known == ext)
        || mime_guess::from_ext(ext).first_raw().is_some()
}

fn family_for_filename(filename: &str) -> Option<Family> {
    let ext = extension_of(filename)?;

    if let Some((_, family)) = EXTENSION_TABLE.iter().find(|(known, _)| *known == ext) {
        return Some(*family);
    }

    mime_guess::from_ext(&ext)
        .first_raw()
        .and_then(family_for_mime)
}
