//! Media classification.

use vendorscope_core::{MediaDescriptor, MediaType};

/// Extension used when a document's mime type is absent or not in the table.
pub const DEFAULT_EXTENSION: &str = ".bin";

const PHOTO_EXTENSION: &str = ".jpg";

const MIME_EXTENSIONS: &[(&str, &str)] = &[
    ("image/jpeg", ".jpg"),
    ("image/png", ".png"),
    ("video/mp4", ".mp4"),
    ("application/pdf", ".pdf"),
    ("application/zip", ".zip"),
];

/// Result of classifying a post's attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaClass {
    pub media_type: MediaType,
    /// File extension (with leading dot) for persisting the payload.
    /// `None` when there is nothing to persist.
    pub extension: Option<&'static str>,
}

impl MediaClass {
    const NONE: Self = Self {
        media_type: MediaType::None,
        extension: None,
    };
}

/// Resolves an attachment to a media type and file extension.
///
/// Total over every input: photos are always `.jpg`, documents resolve
/// through the mime table with [`DEFAULT_EXTENSION`] as fallback, and
/// missing or unsupported attachments yield no media.
#[must_use]
pub fn classify(media: Option<&MediaDescriptor>) -> MediaClass {
    match media {
        Some(MediaDescriptor::Photo) => MediaClass {
            media_type: MediaType::Photo,
            extension: Some(PHOTO_EXTENSION),
        },
        Some(MediaDescriptor::Document { mime_type }) => MediaClass {
            media_type: MediaType::Document,
            extension: Some(extension_for_mime(mime_type.as_deref())),
        },
        Some(MediaDescriptor::Unsupported) | None => MediaClass::NONE,
    }
}

fn extension_for_mime(mime_type: Option<&str>) -> &'static str {
    let Some(mime_type) = mime_type.filter(|m| !m.is_empty()) else {
        return DEFAULT_EXTENSION;
    };
    MIME_EXTENSIONS
        .iter()
        .find(|(mime, _)| *mime == mime_type)
        .map_or(DEFAULT_EXTENSION, |(_, ext)| *ext)
}
