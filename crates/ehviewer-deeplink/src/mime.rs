//! MIME type inference for files opened through deep links.

use std::path::Path;

/// MIME type used when the extension is unknown.
pub const WILDCARD_MIME_TYPE: &str = "*/*";

/// Infers a MIME type from a file extension, ignoring case.
pub fn mime_type_for_extension(ext: &str) -> &'static str {
	match ext.to_ascii_lowercase().as_str() {
		"pdf" => "application/pdf",
		"epub" => "application/epub+zip",
		"jpg" | "jpeg" => "image/jpeg",
		"png" => "image/png",
		"gif" => "image/gif",
		"mp4" => "video/mp4",
		"txt" => "text/plain",
		"html" => "text/html",
		_ => WILDCARD_MIME_TYPE,
	}
}

/// Infers a MIME type from the extension of the final component of `path`.
///
/// Paths without an extension, including dot-files such as `.pdf`, map to
/// [`WILDCARD_MIME_TYPE`].
pub fn mime_type_for_path(path: &str) -> &'static str {
	Path::new(path)
		.extension()
		.and_then(|ext| ext.to_str())
		.map(mime_type_for_extension)
		.unwrap_or(WILDCARD_MIME_TYPE)
}

/// Returns true if `mime_type` names a concrete type.
pub fn is_resolved(mime_type: &str) -> bool {
	mime_type != WILDCARD_MIME_TYPE
}
