//! Scalar site metadata validation (title, site URL, base path).

use crate::config::ConfigDiagnostics;

/// Validate the site title.
///
/// # Checks
/// - `title` must not be empty
pub(crate) fn validate_title(title: &str, diag: &mut ConfigDiagnostics) {
    if title.is_empty() {
        diag.error_with_hint(
            "title".into(),
            "title must not be empty",
            "set a short site name, e.g. \"Team Playbook\"",
        );
    }
}

/// Validate the optional site URL.
///
/// # Checks
/// - must parse as an absolute URL with a host
/// - non-http(s) schemes are suspicious but not fatal
pub(crate) fn validate_site_url(site: Option<&str>, diag: &mut ConfigDiagnostics) {
    let Some(url_str) = site else { return };

    match url::Url::parse(url_str) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.warn_with_hint(
                    "site".into(),
                    format!("scheme '{}' is unusual for a site URL", parsed.scheme()),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    "site".into(),
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                "site".into(),
                format!("invalid URL: {e}"),
                "use format like https://example.com",
            );
        }
    }
}

/// Sanity-check the optional base path.
///
/// Shape oddities are warnings only: the value is stored verbatim and the
/// renderer decides what to do with it.
pub(crate) fn validate_base_path(base_path: Option<&str>, diag: &mut ConfigDiagnostics) {
    let Some(value) = base_path else { return };

    if value.is_empty() {
        diag.warn_with_hint(
            "base_path".into(),
            "empty base path",
            "omit the field to serve from the site root",
        );
        return;
    }

    if !value.starts_with('/') {
        diag.warn_with_hint(
            "base_path".into(),
            "base path does not start with '/'",
            format!("did you mean \"/{value}\""),
        );
    }

    if value.ends_with('/') && value != "/" {
        diag.warn(
            "base_path".into(),
            "trailing '/' in base path, generated links may contain '//'",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_is_error() {
        let mut diag = ConfigDiagnostics::new();
        validate_title("", &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "title");
    }

    #[test]
    fn test_nonempty_title_passes() {
        let mut diag = ConfigDiagnostics::new();
        validate_title("Team Playbook", &mut diag);
        assert!(diag.is_empty());
        assert!(!diag.has_warnings());
    }

    #[test]
    fn test_valid_site_url_passes() {
        let mut diag = ConfigDiagnostics::new();
        validate_site_url(Some("https://acme.dev"), &mut diag);
        assert!(diag.is_empty());
        assert!(!diag.has_warnings());
    }

    #[test]
    fn test_missing_site_url_passes() {
        let mut diag = ConfigDiagnostics::new();
        validate_site_url(None, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_invalid_site_url_is_error() {
        let mut diag = ConfigDiagnostics::new();
        validate_site_url(Some("acme dot dev"), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site");
        assert!(diag.errors()[0].message.contains("invalid URL"));
    }

    #[test]
    fn test_relative_site_url_is_error() {
        // No scheme means the url crate refuses to parse it
        let mut diag = ConfigDiagnostics::new();
        validate_site_url(Some("acme.dev/playbook"), &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_unusual_scheme_warns_only() {
        let mut diag = ConfigDiagnostics::new();
        validate_site_url(Some("ftp://acme.dev"), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].message.contains("ftp"));
    }

    #[test]
    fn test_base_path_with_leading_slash_passes() {
        let mut diag = ConfigDiagnostics::new();
        validate_base_path(Some("/playbook"), &mut diag);
        assert!(diag.is_empty());
        assert!(!diag.has_warnings());
    }

    #[test]
    fn test_base_path_without_leading_slash_warns() {
        let mut diag = ConfigDiagnostics::new();
        validate_base_path(Some("playbook"), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        let hint = diag.warnings()[0].hint.as_deref().unwrap();
        assert!(hint.contains("/playbook"));
    }

    #[test]
    fn test_base_path_trailing_slash_warns() {
        let mut diag = ConfigDiagnostics::new();
        validate_base_path(Some("/playbook/"), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_empty_base_path_warns() {
        let mut diag = ConfigDiagnostics::new();
        validate_base_path(Some(""), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
