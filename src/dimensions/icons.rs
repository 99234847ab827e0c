//! Icon selection rules for dimension values.
//!
//! Only the rule is modelled here: which glyph a value should be shown with.
//! Rendering is left to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Widest viewport still shown as a phone.
pub const MOBILE_MAX_WIDTH: u32 = 480;
/// Widest viewport still shown as a tablet.
pub const TABLET_MAX_WIDTH: u32 = 1024;

/// Glyph to show next to a dimension value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionIcon {
    Mobile,
    Tablet,
    Desktop,
    /// Browser logo, or a globe for unknown browsers
    Browser(BrowserFamily),
    Moon,
    Sun,
    Language,
    Tag,
    /// Stacked layers, for a variant count
    Stack,
}

impl fmt::Display for DimensionIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mobile => write!(f, "mobile"),
            Self::Tablet => write!(f, "tablet"),
            Self::Desktop => write!(f, "desktop"),
            Self::Browser(family) => write!(f, "browser:{family}"),
            Self::Moon => write!(f, "moon"),
            Self::Sun => write!(f, "sun"),
            Self::Language => write!(f, "language"),
            Self::Tag => write!(f, "tag"),
            Self::Stack => write!(f, "stack"),
        }
    }
}

/// Size class of a viewport, by width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    /// Classify a width in CSS pixels.
    #[must_use]
    pub const fn from_width(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Classify a `"WxH"` string by its leading width.
    ///
    /// A missing or non-numeric width counts as zero, i.e. mobile.
    #[must_use]
    pub fn from_viewport(viewport: &str) -> Self {
        let digits: String = viewport
            .trim_start()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        Self::from_width(digits.parse().unwrap_or(0))
    }

    /// Icon for this class.
    #[must_use]
    pub const fn icon(self) -> DimensionIcon {
        match self {
            Self::Mobile => DimensionIcon::Mobile,
            Self::Tablet => DimensionIcon::Tablet,
            Self::Desktop => DimensionIcon::Desktop,
        }
    }
}

/// Browser family used to pick a logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrowserFamily {
    Chrome,
    Firefox,
    Safari,
    SafariIos,
    Edge,
    Opera,
    Brave,
    Vivaldi,
    Chromium,
    Webkit,
    SamsungInternet,
    Android,
    InternetExplorer,
    Tor,
    DuckDuckGo,
    Yandex,
    UcBrowser,
    /// No logo; shown as a generic globe
    Unknown,
}

impl BrowserFamily {
    /// Resolve a browser name, case-insensitively, including common aliases
    /// such as `mobile safari` or `chrome-android`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "chrome" | "chrome-android" | "chrome_android" | "android chrome" => Self::Chrome,
            "firefox" | "firefox-android" | "firefox_android" | "android firefox" => Self::Firefox,
            "safari" => Self::Safari,
            "safari-ios" | "safari_ios" | "ios" | "mobile safari" => Self::SafariIos,
            "edge" => Self::Edge,
            "opera" => Self::Opera,
            "brave" => Self::Brave,
            "vivaldi" => Self::Vivaldi,
            "chromium" => Self::Chromium,
            "webkit" => Self::Webkit,
            "samsung" | "samsung internet" | "samsung-internet" => Self::SamsungInternet,
            "android" | "android browser" => Self::Android,
            "ie" | "internet explorer" => Self::InternetExplorer,
            "tor" => Self::Tor,
            "duckduckgo" => Self::DuckDuckGo,
            "yandex" => Self::Yandex,
            "uc" | "uc browser" => Self::UcBrowser,
            _ => Self::Unknown,
        }
    }

    /// Stable slug, e.g. `safari-ios`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Safari => "safari",
            Self::SafariIos => "safari-ios",
            Self::Edge => "edge",
            Self::Opera => "opera",
            Self::Brave => "brave",
            Self::Vivaldi => "vivaldi",
            Self::Chromium => "chromium",
            Self::Webkit => "webkit",
            Self::SamsungInternet => "samsung-internet",
            Self::Android => "android",
            Self::InternetExplorer => "internet-explorer",
            Self::Tor => "tor",
            Self::DuckDuckGo => "duck-duck-go",
            Self::Yandex => "yandex",
            Self::UcBrowser => "uc-browser",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
