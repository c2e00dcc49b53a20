//! Upload naming helpers: extension allow-list, filename sanitization, and
//! collision-free object names.

use uuid::Uuid;

/// Image extensions accepted for upload (matched case-insensitively).
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Checks whether a filename carries an allowed image extension.
///
/// A filename without an extension is rejected. A disallowed extension is
/// not an error at the service level; the record is simply created without
/// an image.
#[must_use]
pub fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Reduces a client-supplied filename to a safe object name component.
///
/// Strips any path components, maps everything outside `[A-Za-z0-9.-]` to
/// underscores (collapsing runs), and trims leading/trailing dots and
/// underscores so the result cannot traverse or hide.
#[must_use]
pub fn sanitize_filename(filename: &str) -> String {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let mut cleaned = String::with_capacity(name.len());
    let mut last_was_sep = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
            cleaned.push(c);
            last_was_sep = false;
        } else if !last_was_sep {
            cleaned.push('_');
            last_was_sep = true;
        }
    }

    let cleaned = cleaned
        .trim_matches(|c: char| c == '.' || c == '_')
        .to_string();

    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

/// Generates a unique object name for an upload.
///
/// A fresh random identifier prefixes the sanitized filename so concurrent
/// uploads of the same file cannot collide.
#[must_use]
pub fn unique_object_name(filename: &str) -> String {
    format!("{}_{}", Uuid::new_v4(), sanitize_filename(filename))
}
