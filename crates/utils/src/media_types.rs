use tgcloud_models::FileKind;

/// Fallback media type for extensions we do not recognise.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Classifies a declared media type by its top-level prefix.
///
/// `image/*` is a photo, `video/*` is a video, everything else (including an
/// empty or malformed type) is a document.
#[must_use]
pub fn classify_media_type(media_type: &str) -> FileKind {
    let media_type = media_type.trim().to_ascii_lowercase();
    if media_type.starts_with("image/") {
        FileKind::Photo
    } else if media_type.starts_with("video/") {
        FileKind::Video
    } else {
        FileKind::Document
    }
}

/// Declared media type for a file extension (without the dot).
#[must_use]
pub fn media_type_for_extension(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        "heif" => "image/heif",

        // Videos
        "mp4" | "m4v" => "video/mp4",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        "mpg" | "mpeg" => "video/mpeg",
        "3gp" => "video/3gpp",
        "ogv" => "video/ogg",

        // Documents
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "txt" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "xml" => "application/xml",
        "zip" => "application/zip",
        "mp3" => "audio/mpeg",

        _ => OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_classify_named_examples() {
        assert_eq!(classify_media_type("image/png"), FileKind::Photo);
        assert_eq!(classify_media_type("video/mp4"), FileKind::Video);
        assert_eq!(classify_media_type("application/pdf"), FileKind::Document);
    }

    #[test]
    fn test_classify_edge_cases() {
        assert_eq!(classify_media_type(""), FileKind::Document);
        assert_eq!(classify_media_type("image"), FileKind::Document);
        assert_eq!(classify_media_type("IMAGE/JPEG"), FileKind::Photo);
        assert_eq!(classify_media_type(" video/webm"), FileKind::Video);
        assert_eq!(classify_media_type("audio/mpeg"), FileKind::Document);
        assert_eq!(classify_media_type("text/image/png"), FileKind::Document);
    }

    #[test]
    fn test_extension_lookup() {
        assert_eq!(media_type_for_extension("png"), "image/png");
        assert_eq!(media_type_for_extension("JPG"), "image/jpeg");
        assert_eq!(media_type_for_extension("mp4"), "video/mp4");
        assert_eq!(media_type_for_extension("pdf"), "application/pdf");
        assert_eq!(media_type_for_extension(""), OCTET_STREAM);
        assert_eq!(media_type_for_extension("xyz"), OCTET_STREAM);
        assert_eq!(media_type_for_extension(".png"), OCTET_STREAM);
    }

    #[test]
    fn test_extension_lookup_agrees_with_classifier() {
        for ext in ["jpg", "jpeg", "png", "gif", "webp", "heic"] {
            assert_eq!(
                classify_media_type(media_type_for_extension(ext)),
                FileKind::Photo,
                "Extension '{ext}' should classify as photo"
            );
        }
        for ext in ["mp4", "mov", "avi", "mkv", "webm"] {
            assert_eq!(
                classify_media_type(media_type_for_extension(ext)),
                FileKind::Video,
                "Extension '{ext}' should classify as video"
            );
        }
        for ext in ["pdf", "docx", "txt", "zip", "mp3", "bin"] {
            assert_eq!(
                classify_media_type(media_type_for_extension(ext)),
                FileKind::Document,
                "Extension '{ext}' should classify as document"
            );
        }
    }

    proptest! {
        #[test]
        fn image_prefix_is_always_photo(subtype in "[a-z0-9.+-]{0,20}") {
            prop_assert_eq!(classify_media_type(&format!("image/{subtype}")), FileKind::Photo);
        }

        #[test]
        fn video_prefix_is_always_video(subtype in "[a-z0-9.+-]{0,20}") {
            prop_assert_eq!(classify_media_type(&format!("video/{subtype}")), FileKind::Video);
        }

        #[test]
        fn other_prefixes_are_documents(top in "(application|text|audio|font|model)", subtype in "[a-z0-9.+-]{0,20}") {
            prop_assert_eq!(classify_media_type(&format!("{top}/{subtype}")), FileKind::Document);
        }
    }
}
