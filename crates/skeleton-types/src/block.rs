//! The base skeleton primitive.
//!
//! Every other primitive lowers itself to a [`BlockSpec`] and resolves it
//! against the active [`ThemePalette`]. Resolution is a pure function of
//! the block and the palette.

use crate::{css_number, normalize_speed, AnimationKind, AspectRatio, Length, ThemePalette};
use crate::animation::DEFAULT_SPEED_SECONDS;

pub const DEFAULT_WIDTH: Length = Length::FULL;
pub const DEFAULT_HEIGHT: Length = Length::Rem(1.0);
pub const DEFAULT_RADIUS: Length = Length::Px(4.0);
pub const DEFAULT_LABEL: &str = "Loading content";

/// ARIA role emitted on every block.
pub const BLOCK_ROLE: &str = "progressbar";

/// Tab index that keeps a block out of the default tab order.
pub const UNFOCUSABLE: i32 = -1;

/// One value per layout breakpoint: desktop, mobile (≤768px) and
/// small-mobile (≤480px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints<T> {
    pub base: T,
    pub mobile: T,
    pub small_mobile: T,
}

impl<T: Copy> Breakpoints<T> {
    pub fn uniform(value: T) -> Self {
        Self {
            base: value,
            mobile: value,
            small_mobile: value,
        }
    }
}

/// Optional per-breakpoint overrides for a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Responsive {
    pub base: Option<Length>,
    pub mobile: Option<Length>,
    pub small_mobile: Option<Length>,
}

impl Responsive {
    pub fn new(base: Option<Length>, mobile: Option<Length>, small_mobile: Option<Length>) -> Self {
        Self {
            base,
            mobile,
            small_mobile,
        }
    }

    pub fn fixed(value: Length) -> Self {
        Self {
            base: Some(value),
            ..Self::default()
        }
    }

    /// Cascade missing breakpoints from the next-larger one, ending at
    /// `default`.
    pub fn resolve(&self, default: Length) -> Breakpoints<Length> {
        let base = self.base.unwrap_or(default);
        let mobile = self.mobile.unwrap_or(base);
        let small_mobile = self.small_mobile.unwrap_or(mobile);
        Breakpoints {
            base,
            mobile,
            small_mobile,
        }
    }

    /// Fill only the slots the caller left empty.
    pub fn or(self, fallback: Responsive) -> Responsive {
        Responsive {
            base: self.base.or(fallback.base),
            mobile: self.mobile.or(fallback.mobile),
            small_mobile: self.small_mobile.or(fallback.small_mobile),
        }
    }
}

/// Shared configuration accepted by every primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSpec {
    pub width: Responsive,
    pub height: Responsive,
    pub animation: AnimationKind,
    pub speed: f32,
    /// Overrides the palette background.
    pub background_color: Option<String>,
    /// Overrides the palette highlight.
    pub highlight_color: Option<String>,
    pub border_radius: Option<Length>,
    /// When set, height follows the width through this ratio.
    pub aspect_ratio: Option<AspectRatio>,
    pub label: Option<String>,
    pub tab_index: Option<i32>,
}

impl Default for BlockSpec {
    fn default() -> Self {
        Self {
            width: Responsive::default(),
            height: Responsive::default(),
            animation: AnimationKind::default(),
            speed: DEFAULT_SPEED_SECONDS,
            background_color: None,
            highlight_color: None,
            border_radius: None,
            aspect_ratio: None,
            label: None,
            tab_index: None,
        }
    }
}

impl BlockSpec {
    pub fn resolve(&self, palette: &ThemePalette) -> ResolvedBlock {
        let width = self.width.resolve(DEFAULT_WIDTH);
        let height = match self.aspect_ratio {
            Some(ratio) => Breakpoints {
                base: ratio.height_for(width.base),
                mobile: ratio.height_for(width.mobile),
                small_mobile: ratio.height_for(width.small_mobile),
            },
            None => self.height.resolve(DEFAULT_HEIGHT),
        };

        ResolvedBlock {
            width,
            height,
            background_color: self
                .background_color
                .clone()
                .unwrap_or_else(|| palette.background_color.clone()),
            highlight_color: self
                .highlight_color
                .clone()
                .unwrap_or_else(|| palette.highlight_color.clone()),
            border_radius: self.border_radius.unwrap_or(DEFAULT_RADIUS),
            animation: self.animation,
            speed: normalize_speed(self.speed),
            aspect_ratio: self.aspect_ratio,
            label: self.label.clone().unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            tab_index: self.tab_index.unwrap_or(UNFOCUSABLE),
        }
    }
}

/// A block with every value concrete, ready to be turned into attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBlock {
    pub width: Breakpoints<Length>,
    pub height: Breakpoints<Length>,
    pub background_color: String,
    pub highlight_color: String,
    pub border_radius: Length,
    pub animation: AnimationKind,
    pub speed: f32,
    pub aspect_ratio: Option<AspectRatio>,
    pub label: String,
    pub tab_index: i32,
}

impl ResolvedBlock {
    /// Inline `style` value. The stylesheet reads these custom properties
    /// inside its breakpoint and animation rules.
    pub fn style(&self) -> String {
        let mut style = format!(
            "--skeleton-width: {}; --skeleton-height: {}; \
             --skeleton-mobile-width: {}; --skeleton-mobile-height: {}; \
             --skeleton-small-width: {}; --skeleton-small-height: {}; \
             --skeleton-bg: {}; --skeleton-highlight: {}; \
             --skeleton-radius: {}; --skeleton-speed: {}s;",
            self.width.base,
            self.height.base,
            self.width.mobile,
            self.height.mobile,
            self.width.small_mobile,
            self.height.small_mobile,
            self.background_color,
            self.highlight_color,
            self.border_radius,
            css_number(self.speed),
        );
        if let Some(ratio) = self.aspect_ratio {
            style.push_str(&format!(" aspect-ratio: {ratio};"));
        }
        style
    }

    pub fn is_focusable(&self) -> bool {
        self.tab_index >= 0
    }
}
