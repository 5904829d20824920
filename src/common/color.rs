//! Display color attached to bodies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque display color, stored as the host supplied it (usually a CSS
/// color string such as `"#00FFFF"`). Physics never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Color(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Best-effort parse of `#RGB` / `#RRGGBB` hex notation for hosts that
    /// need numeric channels. Returns `None` for anything else.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.0.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17)
                };
                Some((channel(0)?, channel(1)?, channel(2)?))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some((channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::new("#000000")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Color::new(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Color(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_long_form() {
        assert_eq!(Color::new("#00FFFF").rgb(), Some((0, 255, 255)));
        assert_eq!(Color::new("#740093").rgb(), Some((0x74, 0x00, 0x93)));
    }

    #[test]
    fn test_rgb_short_form() {
        assert_eq!(Color::new("#f0a").rgb(), Some((255, 0, 170)));
    }

    #[test]
    fn test_rgb_rejects_other_notations() {
        assert_eq!(Color::new("red").rgb(), None);
        assert_eq!(Color::new("#12345").rgb(), None);
        assert_eq!(Color::new("#zzzzzz").rgb(), None);
        assert_eq!(Color::new("rgb(0, 0, 100)").rgb(), None);
    }

    #[test]
    fn test_rgb_rejects_signed_channels() {
        assert_eq!(Color::new("#+f+f+f").rgb(), None);
        assert_eq!(Color::new("#+ff+ff").rgb(), None);
        assert_eq!(Color::new("#-1-1-1").rgb(), None);
    }

    #[test]
    fn test_color_is_kept_verbatim() {
        let color: Color = "rgb(0, 0, 100)".into();
        assert_eq!(color.as_str(), "rgb(0, 0, 100)");
        assert_eq!(color.to_string(), "rgb(0, 0, 100)");
    }

    #[test]
    fn test_color_serializes_as_plain_string() {
        let json = serde_json::to_string(&Color::new("#000000")).unwrap();
        assert_eq!(json, "\"#000000\"");
    }
}
