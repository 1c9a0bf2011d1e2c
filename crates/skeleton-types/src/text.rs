//! Multi-line text placeholders.
//!
//! A text spec lowers to a [`TextLayout`]: either one standalone line or a
//! labelled group of lines. The two shapes are distinct on purpose so a
//! single line never carries the group role.

use rand::Rng;

use crate::animation::LINE_SPEED_STEP_SECONDS;
use crate::{normalize_speed, BlockSpec, Length, Responsive};

pub const DEFAULT_FIRST_LINE_WIDTH: Length = Length::FULL;
pub const DEFAULT_LAST_LINE_WIDTH: Length = Length::Percent(60.0);

/// Lower bound (inclusive) of a random line width, in percent.
pub const RANDOM_WIDTH_MIN: u32 = 60;
/// Upper bound (exclusive) of a random line width, in percent.
pub const RANDOM_WIDTH_MAX: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVariant {
    #[default]
    Paragraph,
    Heading,
    Caption,
}

impl TextVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextVariant::Paragraph => "paragraph",
            TextVariant::Heading => "heading",
            TextVariant::Caption => "caption",
        }
    }

    /// Parse a variant key, falling back to `paragraph`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "paragraph" => TextVariant::Paragraph,
            "heading" => TextVariant::Heading,
            "caption" => TextVariant::Caption,
            other => {
                tracing::debug!(key = other, "unknown text variant, using paragraph");
                TextVariant::Paragraph
            }
        }
    }

    pub fn default_lines(&self) -> usize {
        match self {
            TextVariant::Paragraph => 3,
            TextVariant::Heading => 1,
            TextVariant::Caption => 2,
        }
    }

    pub fn line_height(&self) -> Length {
        match self {
            TextVariant::Paragraph => Length::Rem(1.0),
            TextVariant::Heading => Length::Rem(2.0),
            TextVariant::Caption => Length::Rem(0.75),
        }
    }

    pub fn gap(&self) -> Length {
        match self {
            TextVariant::Paragraph => Length::Rem(0.5),
            TextVariant::Heading => Length::Rem(0.75),
            TextVariant::Caption => Length::Rem(0.25),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    /// Parse a font size key, falling back to `medium`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "small" => FontSize::Small,
            "medium" => FontSize::Medium,
            "large" => FontSize::Large,
            other => {
                tracing::debug!(key = other, "unknown font size, using medium");
                FontSize::Medium
            }
        }
    }

    pub fn multiplier(&self) -> f32 {
        match self {
            FontSize::Small => 0.75,
            FontSize::Medium => 1.0,
            FontSize::Large => 1.25,
        }
    }
}

/// How each line's width is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthPolicy {
    /// Every line is 100%.
    Uniform,
    /// First and last lines take their own widths, the rest are 100%.
    #[default]
    FirstLastDistinct,
    /// Each line is drawn from [60%, 100%) on every render. Not stable
    /// across re-renders: the variation is meant to look organic.
    Random,
}

impl WidthPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidthPolicy::Uniform => "uniform",
            WidthPolicy::FirstLastDistinct => "first-last-distinct",
            WidthPolicy::Random => "random",
        }
    }

    /// Parse a policy key, falling back to `first-last-distinct`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "uniform" => WidthPolicy::Uniform,
            "first-last-distinct" => WidthPolicy::FirstLastDistinct,
            "random" => WidthPolicy::Random,
            other => {
                tracing::debug!(key = other, "unknown width policy, using first-last-distinct");
                WidthPolicy::FirstLastDistinct
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextSpec {
    /// Shared block settings. `width` sizes a single line or the group
    /// container; `height` is replaced by the line height.
    pub base: BlockSpec,
    /// `None` or `Some(0)` use the variant's line count.
    pub line_count: Option<usize>,
    pub variant: TextVariant,
    pub font_size: FontSize,
    pub width_policy: WidthPolicy,
    pub first_line_width: Option<Length>,
    pub last_line_width: Option<Length>,
    /// Overrides the variant line height before the font multiplier.
    pub line_height: Option<Length>,
    /// Overrides the variant gap before the font multiplier.
    pub gap: Option<Length>,
}

/// A resolved text placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum TextLayout {
    /// One standalone line, no group wrapper.
    Single(BlockSpec),
    /// A vertical stack of lines with a group label.
    Group {
        label: String,
        gap: Length,
        width: Length,
        lines: Vec<BlockSpec>,
    },
}

impl TextLayout {
    pub fn lines(&self) -> &[BlockSpec] {
        match self {
            TextLayout::Single(line) => std::slice::from_ref(line),
            TextLayout::Group { lines, .. } => lines,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, TextLayout::Group { .. })
    }
}

impl TextSpec {
    pub fn line_count(&self) -> usize {
        match self.line_count {
            Some(n) if n > 0 => n,
            _ => self.variant.default_lines(),
        }
    }

    pub fn line_height(&self) -> Length {
        self.line_height
            .unwrap_or_else(|| self.variant.line_height())
            .scale(self.font_size.multiplier())
    }

    pub fn gap(&self) -> Length {
        self.gap
            .unwrap_or_else(|| self.variant.gap())
            .scale(self.font_size.multiplier())
    }

    /// Width of every line under the configured policy.
    pub fn line_widths<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Length> {
        let n = self.line_count();
        let first = self.first_line_width.unwrap_or(DEFAULT_FIRST_LINE_WIDTH);
        let last = self.last_line_width.unwrap_or(DEFAULT_LAST_LINE_WIDTH);
        (0..n)
            .map(|i| match self.width_policy {
                WidthPolicy::Uniform => Length::FULL,
                WidthPolicy::Random => {
                    Length::Percent(rng.gen_range(RANDOM_WIDTH_MIN..RANDOM_WIDTH_MAX) as f32)
                }
                WidthPolicy::FirstLastDistinct if i == 0 => first,
                WidthPolicy::FirstLastDistinct if i == n - 1 => last,
                WidthPolicy::FirstLastDistinct => Length::FULL,
            })
            .collect()
    }

    pub fn layout<R: Rng + ?Sized>(&self, rng: &mut R) -> TextLayout {
        let n = self.line_count();
        let widths = self.line_widths(rng);
        let line_height = Responsive::fixed(self.line_height());

        if n == 1 {
            let width = self.base.width.or(Responsive::fixed(widths[0]));
            return TextLayout::Single(BlockSpec {
                width,
                height: line_height,
                aspect_ratio: None,
                label: Some(self.base.label.clone().unwrap_or_else(|| {
                    format!("Loading {} text", self.variant.as_str())
                })),
                ..self.base.clone()
            });
        }

        let speed = normalize_speed(self.base.speed);
        let lines = widths
            .into_iter()
            .enumerate()
            .map(|(i, width)| BlockSpec {
                width: Responsive::fixed(width),
                height: line_height,
                aspect_ratio: None,
                speed: speed + i as f32 * LINE_SPEED_STEP_SECONDS,
                label: Some(format!("Loading line {} of {n}", i + 1)),
                ..self.base.clone()
            })
            .collect();

        TextLayout::Group {
            label: self.base.label.clone().unwrap_or_else(|| {
                format!("Loading {} with {n} lines", self.variant.as_str())
            }),
            gap: self.gap(),
            width: self.base.width.base.unwrap_or(Length::FULL),
            lines,
        }
    }
}
