//! # Domain models for profiles, links, and ordering
//!
//! Defines the data structures that cross the server/client boundary via Dioxus
//! server functions. The server loads database rows, projects them into these
//! types, and the client normalizes them into display items (see [`crate::items`]).
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`OrderEntry`] | One row of a user's ordered bio list. Carries the server-assigned `sequence` and exactly one of a nested [`LinkRecord`] or [`SocialMediaRecord`]. Entries violating that exclusivity are dropped during normalization. |
//! | [`LinkRecord`] | A free-form link: display name plus target URL. |
//! | [`SocialMediaRecord`] | A social account: resolved URL, optional stored provider label, optional handle. |
//! | [`Theme`] | Background and text colors the public bio page styles itself with. |
//! | [`UserProfile`] | Everything the customize and bio views need for one user: identity fields, account status, the active theme, and the full order list. |
//! | [`OrderUpdate`] | Minimal reorder payload: `order_id` plus its new 1-based `sequence`. |
//!
//! ## Helper functions
//!
//! - [`is_light_color`] — relative-luminance check on a `#rrggbb` color, used to
//!   pick dark or light chrome on top of a theme background.
//! - [`format_phone`] / [`unmask_phone`] — Brazilian phone display mask and its
//!   inverse (digits only), used by the registration and WhatsApp forms.

use serde::{Deserialize, Serialize};

/// One entry of a user's ordered bio list.
///
/// Exactly one of `link` / `social_media` is populated. `link_id` and
/// `social_media_id` mirror which one it is, the way the server stores it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderEntry {
    /// Order row id, the key reorder payloads are addressed by
    pub id: String,
    /// Server-assigned position, 1-based; gaps appear after deletions
    pub sequence: i32,
    pub link_id: Option<String>,
    pub social_media_id: Option<String>,
    pub link: Option<LinkRecord>,
    pub social_media: Option<SocialMediaRecord>,
}

/// A free-form link attached to a profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: String,
    /// Display name: "My portfolio"
    pub name: String,
    pub url: String,
}

/// A social-media account attached to a profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaRecord {
    pub id: String,
    /// Stored display label; when absent or blank the label is resolved from `url`
    pub provider_name: Option<String>,
    pub url: String,
    /// Handle as entered at creation time: "maria", "5511999999999"
    pub username: Option<String>,
}

/// Colors of a bio theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    /// `#rrggbb`
    pub background_color: String,
    /// `#rrggbb`
    pub text_color: String,
}

impl Theme {
    /// Palette a bio renders with before its user picks a theme.
    pub fn fallback() -> Self {
        Theme {
            id: String::new(),
            background_color: "#052E16".to_string(),
            text_color: "#FFFFFF".to_string(),
        }
    }
}

/// A user's profile as served to the customize and public bio views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    /// Claimed slug, always lowercase: "maria"
    pub username: String,
    pub name: Option<String>,
    pub email: String,
    pub avatar_url: Option<String>,
    /// "pending" until the activation token is consumed, then "active"
    pub status: String,
    pub theme: Option<Theme>,
    pub order: Vec<OrderEntry>,
}

/// One element of a reorder submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub order_id: String,
    pub sequence: i32,
}

/// Whether a `#rrggbb` color is light enough to need dark foreground chrome.
///
/// Uses the perceived-luminance weighting (0.299 R + 0.587 G + 0.114 B) with a
/// 0.6 cutoff. Unparseable colors count as dark.
pub fn is_light_color(hex: &str) -> bool {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return false;
    }
    let Ok(r) = u8::from_str_radix(&hex[0..2], 16) else {
        return false;
    };
    let Ok(g) = u8::from_str_radix(&hex[2..4], 16) else {
        return false;
    };
    let Ok(b) = u8::from_str_radix(&hex[4..6], 16) else {
        return false;
    };
    let luminance =
        (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
    luminance > 0.6
}

/// Apply the Brazilian display mask `(dd) d dddd-dddd` to a phone number,
/// truncating at 11 digits. Partial input is masked as far as it goes.
pub fn format_phone(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).take(11).collect();
    match digits.len() {
        0..=2 => digits,
        3 => format!("({}) {}", &digits[0..2], &digits[2..]),
        4..=7 => format!("({}) {} {}", &digits[0..2], &digits[2..3], &digits[3..]),
        _ => format!(
            "({}) {} {}-{}",
            &digits[0..2],
            &digits[2..3],
            &digits[3..7],
            &digits[7..]
        ),
    }
}

/// Strip a masked phone number back to digits.
pub fn unmask_phone(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_light_color() {
        assert!(is_light_color("#ffffff"));
        assert!(is_light_color("#FFEE99"));
        assert!(!is_light_color("#000000"));
        assert!(!is_light_color("#123456"));
        // grays straddling the 0.6 cutoff
        assert!(is_light_color("#a0a0a0"));
        assert!(!is_light_color("#808080"));
    }

    #[test]
    fn test_is_light_color_rejects_malformed() {
        assert!(!is_light_color(""));
        assert!(!is_light_color("#fff"));
        assert!(!is_light_color("#zzzzzz"));
        assert!(!is_light_color("ffffff0"));
    }

    #[test]
    fn test_format_phone_progressive() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("11987"), "(11) 9 87");
        assert_eq!(format_phone("1198765"), "(11) 9 8765");
        assert_eq!(format_phone("11987654321"), "(11) 9 8765-4321");
    }

    #[test]
    fn test_format_phone_ignores_mask_and_overflow() {
        assert_eq!(format_phone("(11) 9 8765-4321"), "(11) 9 8765-4321");
        assert_eq!(format_phone("119876543219999"), "(11) 9 8765-4321");
    }

    #[test]
    fn test_unmask_phone() {
        assert_eq!(unmask_phone("(11) 9 8765-4321"), "11987654321");
        assert_eq!(unmask_phone("abc"), "");
    }
}
