//! Filename sanitisation for uploaded media.
//!
//! Uploaded files are stored flat under a single directory, keyed by the
//! sanitised client filename. A sanitised name never contains a path
//! separator, never starts with a dot and only uses `[A-Za-z0-9._-]`.

/// Reduce a client-supplied filename to a safe flat name.
///
/// Path separators and whitespace runs become a single `_`, non-ASCII and
/// other unsafe characters are dropped, and leading/trailing `.` and `_`
/// are stripped. Returns `None` if nothing usable is left.
///
/// ```
/// use relief_core::media::sanitize_filename;
///
/// assert_eq!(sanitize_filename("flood photo.jpg").as_deref(), Some("flood_photo.jpg"));
/// assert_eq!(sanitize_filename("../../etc/passwd").as_deref(), Some("etc_passwd"));
/// assert_eq!(sanitize_filename("../.."), None);
/// ```
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let separated = raw.replace(['/', '\\'], " ");

    let joined = separated.split_whitespace().collect::<Vec<_>>().join("_");

    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Returns `true` if `name` is already in sanitised form.
///
/// Used on the retrieval path so a request can only address files that
/// the store itself could have written.
pub fn is_sanitized(name: &str) -> bool {
    sanitize_filename(name).as_deref() == Some(name)
}
