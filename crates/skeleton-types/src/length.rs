use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SkeletonError;

/// A CSS length used for skeleton dimensions.
///
/// Serialized as its CSS text (`"1.5rem"`, `"60%"`, `"8px"`, `"auto"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Length {
    Px(f32),
    Rem(f32),
    Percent(f32),
    Auto,
}

impl Length {
    pub const FULL: Length = Length::Percent(100.0);

    pub fn px(value: f32) -> Self {
        Length::Px(value)
    }

    pub fn rem(value: f32) -> Self {
        Length::Rem(value)
    }

    pub fn percent(value: f32) -> Self {
        Length::Percent(value)
    }

    /// Multiply the magnitude, keeping the unit. `Auto` is unchanged.
    pub fn scale(self, factor: f32) -> Self {
        match self {
            Length::Px(v) => Length::Px(v * factor),
            Length::Rem(v) => Length::Rem(v * factor),
            Length::Percent(v) => Length::Percent(v * factor),
            Length::Auto => Length::Auto,
        }
    }

    /// Whether the length is independent of the parent's size.
    pub fn is_absolute(&self) -> bool {
        matches!(self, Length::Px(_) | Length::Rem(_))
    }
}

/// Format a float for CSS output, rounded to four decimals with trailing
/// zeros dropped so `1.5 + 3.0 * 0.1` prints as `1.8`.
pub fn css_number(value: f32) -> String {
    let rounded = (f64::from(value) * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", css_number(*v)),
            Length::Rem(v) => write!(f, "{}rem", css_number(*v)),
            Length::Percent(v) => write!(f, "{}%", css_number(*v)),
            Length::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for Length {
    type Err = SkeletonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "auto" {
            return Ok(Length::Auto);
        }
        let (number, ctor): (&str, fn(f32) -> Length) = if let Some(n) = s.strip_suffix("rem") {
            (n, Length::Rem)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, Length::Px)
        } else if let Some(n) = s.strip_suffix('%') {
            (n, Length::Percent)
        } else {
            // Bare numbers are pixels.
            (s, Length::Px)
        };
        number
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .map(ctor)
            .ok_or_else(|| SkeletonError::config_parse(format!("invalid length `{s}`")))
    }
}

impl TryFrom<String> for Length {
    type Error = SkeletonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Length> for String {
    fn from(value: Length) -> Self {
        value.to_string()
    }
}

/// A width-to-height ratio, written `16/9` in CSS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AspectRatio {
    pub width: f32,
    pub height: f32,
}

impl AspectRatio {
    pub const WIDESCREEN: AspectRatio = AspectRatio::new(16.0, 9.0);
    pub const BANNER: AspectRatio = AspectRatio::new(3.0, 1.0);
    pub const FEATURED: AspectRatio = AspectRatio::new(2.0, 1.0);
    pub const SQUARE: AspectRatio = AspectRatio::new(1.0, 1.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Height implied by `width` under this ratio.
    ///
    /// Percent widths are relative to the parent's width while percent
    /// heights are relative to its height, so they cannot be converted and
    /// resolve to `auto` (the browser then applies `aspect-ratio`).
    pub fn height_for(&self, width: Length) -> Length {
        match width {
            Length::Px(v) => Length::Px(v * self.height / self.width),
            Length::Rem(v) => Length::Rem(v * self.height / self.width),
            Length::Percent(_) | Length::Auto => Length::Auto,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", css_number(self.width), css_number(self.height))
    }
}

impl FromStr for AspectRatio {
    type Err = SkeletonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SkeletonError::config_parse(format!("invalid aspect ratio `{s}`"));
        let (w, h) = s.split_once('/').ok_or_else(invalid)?;
        let width: f32 = w.trim().parse().map_err(|_| invalid())?;
        let height: f32 = h.trim().parse().map_err(|_| invalid())?;
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            Ok(AspectRatio::new(width, height))
        } else {
            Err(invalid())
        }
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = SkeletonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(value: AspectRatio) -> Self {
        format!("{}/{}", css_number(value.width), css_number(value.height))
    }
}
