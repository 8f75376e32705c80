//! # Provider name resolution and handle cleanup
//!
//! Two pieces of URL-adjacent logic shared by the normalizer and the creation
//! forms:
//!
//! - [`resolve_label`] — derives a display label ("Instagram", "WhatsApp", ...)
//!   from a raw URL when no explicit label is stored. Total: every input maps to
//!   some label, with `"Link"` as the final fallback.
//! - [`sanitize_handle`] — reduces whatever the user pasted into the social
//!   account form (full profile URL, `@handle`, masked phone number) to the bare
//!   handle the provider's base URL expects.

use url::Url;

/// Derive a display label from a raw URL.
///
/// Resolution order: `mailto:` addresses are "Email"; otherwise the URL is
/// parsed as-is, then retried with an `https://` prefix for scheme-less input.
/// The host, lowercased and with a leading `www.` stripped, is matched against
/// the known providers. Unknown hosts label as themselves, and anything that
/// never yields a host labels as "Link".
pub fn resolve_label(raw: &str) -> String {
    let raw = raw.trim();
    if raw.to_ascii_lowercase().starts_with("mailto:") {
        return "Email".to_string();
    }

    let parsed = Url::parse(raw)
        .ok()
        .filter(|u| u.host_str().is_some())
        .or_else(|| Url::parse(&format!("https://{raw}")).ok());
    let host = match parsed.as_ref().and_then(|u| u.host_str()) {
        Some(host) => host.to_ascii_lowercase(),
        None => return "Link".to_string(),
    };
    let host = host.strip_prefix("www.").unwrap_or(&host);

    if host.contains("instagram.com") {
        return "Instagram".to_string();
    }
    if host.contains("facebook.com") {
        return "Facebook".to_string();
    }
    if host == "x.com" || host.contains("twitter.com") {
        return "X".to_string();
    }
    if host.contains("wa.me") || host.contains("whatsapp.com") {
        return "WhatsApp".to_string();
    }
    if host.contains("youtube.com") || host == "youtu.be" {
        return "YouTube".to_string();
    }
    if host.contains("linkedin.com") {
        return "LinkedIn".to_string();
    }

    if host.is_empty() {
        "Link".to_string()
    } else {
        host.to_string()
    }
}

/// How [`sanitize_handle`] should interpret the pasted input.
///
/// Derived from the provider label at the creation form: WhatsApp keeps digits,
/// email addresses pass through, LinkedIn keeps the last path segment, and
/// everything else is a plain handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    WhatsApp,
    Email,
    LinkedIn,
    Other,
}

impl ProviderKind {
    /// Classify a provider by its catalog label.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("whats") {
            ProviderKind::WhatsApp
        } else if label == "email" {
            ProviderKind::Email
        } else if label.contains("linkedin") {
            ProviderKind::LinkedIn
        } else {
            ProviderKind::Other
        }
    }
}

/// Reduce pasted input to the bare handle for a provider.
///
/// A pasted profile URL (`http...` or `www....`) is cut down to its path with
/// leading slashes removed; when the path is empty the first query parameter
/// value is used instead (share links like `...?phone=5511...`). Then per kind:
/// WhatsApp keeps digits and drops a leading country code 55, email passes
/// through, LinkedIn keeps the last path segment, and anything else loses a
/// leading `@`.
pub fn sanitize_handle(input: &str, kind: ProviderKind) -> String {
    let mut value = input.trim().to_string();
    if value.is_empty() {
        return value;
    }

    if value.starts_with("http") || value.starts_with("www.") {
        let candidate = if value.starts_with("http") {
            value.clone()
        } else {
            format!("https://{value}")
        };
        if let Ok(url) = Url::parse(&candidate) {
            value = url.path().trim_start_matches('/').to_string();
            if value.is_empty() {
                if let Some((_, first)) = url.query_pairs().next() {
                    value = first.into_owned();
                }
            }
        }
    }

    match kind {
        ProviderKind::WhatsApp => {
            let number: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
            match number.strip_prefix("55") {
                Some(rest) => rest.to_string(),
                None => number,
            }
        }
        ProviderKind::Email => value,
        ProviderKind::LinkedIn => {
            let last = value.split('/').next_back().unwrap_or("");
            if last.is_empty() {
                value
            } else {
                last.to_string()
            }
        }
        ProviderKind::Other => match value.strip_prefix('@') {
            Some(rest) => rest.to_string(),
            None => value,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_providers() {
        assert_eq!(resolve_label("https://instagram.com/someuser"), "Instagram");
        assert_eq!(resolve_label("https://www.instagram.com/someuser"), "Instagram");
        assert_eq!(resolve_label("https://facebook.com/page"), "Facebook");
        assert_eq!(resolve_label("https://x.com/handle"), "X");
        assert_eq!(resolve_label("https://twitter.com/handle"), "X");
        assert_eq!(resolve_label("https://wa.me/5511999999999"), "WhatsApp");
        assert_eq!(resolve_label("https://api.whatsapp.com/send?phone=1"), "WhatsApp");
        assert_eq!(resolve_label("https://youtube.com/@channel"), "YouTube");
        assert_eq!(resolve_label("https://youtu.be/abc123"), "YouTube");
        assert_eq!(resolve_label("https://linkedin.com/in/someone"), "LinkedIn");
    }

    #[test]
    fn test_resolve_mailto() {
        assert_eq!(resolve_label("mailto:someone@example.com"), "Email");
        assert_eq!(resolve_label("  mailto:x@y.z"), "Email");
    }

    #[test]
    fn test_resolve_schemeless_input() {
        assert_eq!(resolve_label("instagram.com/someuser"), "Instagram");
        assert_eq!(resolve_label("www.youtube.com/watch?v=1"), "YouTube");
    }

    #[test]
    fn test_resolve_unknown_host_labels_as_host() {
        assert_eq!(resolve_label("https://example.com/path"), "example.com");
        assert_eq!(resolve_label("https://www.blog.example.org"), "blog.example.org");
    }

    #[test]
    fn test_resolve_unparseable_is_link() {
        assert_eq!(resolve_label(""), "Link");
        assert_eq!(resolve_label("   "), "Link");
        assert_eq!(resolve_label("not a url at all"), "Link");
    }

    #[test]
    fn test_x_requires_exact_host() {
        // Only x.com itself is X; lookalike hosts fall through to the bare host.
        assert_eq!(resolve_label("https://notx.com/a"), "notx.com");
        assert_eq!(resolve_label("https://sub.twitter.com/a"), "X");
    }

    #[test]
    fn test_provider_kind_from_label() {
        assert_eq!(ProviderKind::from_label("WhatsApp"), ProviderKind::WhatsApp);
        assert_eq!(ProviderKind::from_label("whatsapp business"), ProviderKind::WhatsApp);
        assert_eq!(ProviderKind::from_label("Email"), ProviderKind::Email);
        assert_eq!(ProviderKind::from_label("LinkedIn"), ProviderKind::LinkedIn);
        assert_eq!(ProviderKind::from_label("Instagram"), ProviderKind::Other);
    }

    #[test]
    fn test_sanitize_plain_handle() {
        assert_eq!(sanitize_handle("@maria", ProviderKind::Other), "maria");
        assert_eq!(sanitize_handle("  maria  ", ProviderKind::Other), "maria");
    }

    #[test]
    fn test_sanitize_pasted_profile_url() {
        assert_eq!(
            sanitize_handle("https://instagram.com/maria", ProviderKind::Other),
            "maria"
        );
        assert_eq!(
            sanitize_handle("www.instagram.com/maria", ProviderKind::Other),
            "maria"
        );
    }

    #[test]
    fn test_sanitize_whatsapp_number() {
        assert_eq!(
            sanitize_handle("(11) 9 8765-4321", ProviderKind::WhatsApp),
            "11987654321"
        );
        // Leading country code is dropped
        assert_eq!(
            sanitize_handle("5511987654321", ProviderKind::WhatsApp),
            "11987654321"
        );
        // Share links with an empty path carry the number in the query string
        assert_eq!(
            sanitize_handle("https://wa.me/?phone=5511987654321", ProviderKind::WhatsApp),
            "11987654321"
        );
        assert_eq!(
            sanitize_handle("https://wa.me/5511987654321", ProviderKind::WhatsApp),
            "11987654321"
        );
    }

    #[test]
    fn test_sanitize_linkedin_last_segment() {
        assert_eq!(
            sanitize_handle("https://www.linkedin.com/in/maria-silva", ProviderKind::LinkedIn),
            "maria-silva"
        );
        assert_eq!(sanitize_handle("maria-silva", ProviderKind::LinkedIn), "maria-silva");
    }

    #[test]
    fn test_sanitize_email_passthrough() {
        assert_eq!(
            sanitize_handle("someone@example.com", ProviderKind::Email),
            "someone@example.com"
        );
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_handle("", ProviderKind::Other), "");
        assert_eq!(sanitize_handle("   ", ProviderKind::WhatsApp), "");
    }
}
