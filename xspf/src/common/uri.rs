//! URI validation for URI-, URL- and URN-typed playlist fields.
//!
//! XSPF distinguishes three classes of resource reference that differ only in
//! which schemes they admit. All three require an absolute reference with a
//! scheme; URLs are further restricted to [`URL_SCHEMES`].

use url::Url;

use crate::error::{UriKind, ValidationError};

/// Schemes accepted for URL-typed fields.
pub const URL_SCHEMES: &[&str] = &["file", "ftp", "http", "https"];

/// Check that `value` is an absolute URI of any scheme.
pub fn is_valid_uri(value: &str) -> bool {
    parse_absolute(value).is_some()
}

/// Check that `value` is an absolute URI whose scheme is in [`URL_SCHEMES`].
pub fn is_valid_url(value: &str) -> bool {
    parse_absolute(value)
        .map(|url| URL_SCHEMES.contains(&url.scheme()))
        .unwrap_or(false)
}

/// Check that `value` is a URN. URNs use the unrestricted URI check.
pub fn is_valid_urn(value: &str) -> bool {
    is_valid_uri(value)
}

/// Run the check matching `kind`, turning a failure into a [`ValidationError`].
pub fn validate(kind: UriKind, value: &str) -> Result<(), ValidationError> {
    let valid = match kind {
        UriKind::Uri => is_valid_uri(value),
        UriKind::Url => is_valid_url(value),
        UriKind::Urn => is_valid_urn(value),
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new(kind, value))
    }
}

/// Store `value` in `field` if it passes the `kind` check. A rejected value
/// leaves `field` untouched.
pub(crate) fn assign(
    field: &mut Option<String>,
    kind: UriKind,
    value: String,
) -> Result<(), ValidationError> {
    validate(kind, &value)?;
    *field = Some(value);
    Ok(())
}

fn parse_absolute(value: &str) -> Option<Url> {
    // `Url::parse` strips surrounding whitespace, which would let the stored
    // value differ from the validated one.
    if value.is_empty() || value.trim() != value {
        return None;
    }
    Url::parse(value).ok()
}
