use crate::{AnimationKind, BlockSpec, Length, ResolvedBlock, Responsive};

pub const DEFAULT_BADGE_COLOR: &str = "#10B981";

/// Badge diameter relative to the circle.
pub const BADGE_FRACTION: Length = Length::Percent(25.0);

/// Named circle diameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum CircleSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Xxl,
}

/// All circle sizes, smallest first.
pub const ALL_CIRCLE_SIZES: &[CircleSize] = &[
    CircleSize::Xs,
    CircleSize::Sm,
    CircleSize::Md,
    CircleSize::Lg,
    CircleSize::Xl,
    CircleSize::Xxl,
];

impl CircleSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CircleSize::Xs => "xs",
            CircleSize::Sm => "sm",
            CircleSize::Md => "md",
            CircleSize::Lg => "lg",
            CircleSize::Xl => "xl",
            CircleSize::Xxl => "2xl",
        }
    }

    /// Parse a size key, falling back to `md`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "xs" => CircleSize::Xs,
            "sm" => CircleSize::Sm,
            "md" => CircleSize::Md,
            "lg" => CircleSize::Lg,
            "xl" => CircleSize::Xl,
            "2xl" => CircleSize::Xxl,
            other => {
                tracing::debug!(key = other, "unknown circle size, using md");
                CircleSize::Md
            }
        }
    }

    pub fn diameter(&self) -> Length {
        match self {
            CircleSize::Xs => Length::Rem(1.5),
            CircleSize::Sm => Length::Rem(2.0),
            CircleSize::Md => Length::Rem(2.5),
            CircleSize::Lg => Length::Rem(3.5),
            CircleSize::Xl => Length::Rem(5.0),
            CircleSize::Xxl => Length::Rem(6.0),
        }
    }
}

/// What the circle stands in for. Only changes the default label, except
/// `Dot` which is always `xs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CircleVariant {
    #[default]
    Avatar,
    Icon,
    Button,
    Dot,
}

impl CircleVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CircleVariant::Avatar => "avatar",
            CircleVariant::Icon => "icon",
            CircleVariant::Button => "button",
            CircleVariant::Dot => "dot",
        }
    }

    /// Parse a variant key, falling back to `avatar`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "avatar" => CircleVariant::Avatar,
            "icon" => CircleVariant::Icon,
            "button" => CircleVariant::Button,
            "dot" => CircleVariant::Dot,
            other => {
                tracing::debug!(key = other, "unknown circle variant, using avatar");
                CircleVariant::Avatar
            }
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            CircleVariant::Avatar => "Loading profile picture",
            CircleVariant::Icon => "Loading icon",
            CircleVariant::Button => "Loading button",
            CircleVariant::Dot => "Loading indicator",
        }
    }

    /// Status badges are an avatar affordance.
    pub fn allows_badge(&self) -> bool {
        matches!(self, CircleVariant::Avatar)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CircleSpec {
    /// Colors, animation, label and tab index. Width, height and radius
    /// are replaced by the circle geometry.
    pub base: BlockSpec,
    pub size: Option<CircleSize>,
    /// Overrides `size` and the variant tier.
    pub diameter: Option<Length>,
    pub variant: CircleVariant,
    pub show_badge: bool,
    pub badge_color: Option<String>,
}

impl CircleSpec {
    /// Size tier after variant rules: `dot` forces `xs`, otherwise the
    /// requested tier or `md`.
    pub fn tier(&self) -> CircleSize {
        match self.variant {
            CircleVariant::Dot => CircleSize::Xs,
            _ => self.size.unwrap_or_default(),
        }
    }

    pub fn diameter(&self) -> Length {
        self.diameter.unwrap_or_else(|| self.tier().diameter())
    }

    pub fn to_block(&self) -> BlockSpec {
        let diameter = self.diameter();
        BlockSpec {
            width: Responsive::fixed(diameter),
            height: Responsive::fixed(diameter),
            border_radius: Some(Length::Percent(50.0)),
            aspect_ratio: None,
            label: Some(
                self.base
                    .label
                    .clone()
                    .unwrap_or_else(|| self.variant.default_label().to_string()),
            ),
            ..self.base.clone()
        }
    }

    /// Badge overlay for a resolved circle, when one should be drawn.
    pub fn badge(&self, circle: &ResolvedBlock) -> Option<CircleBadge> {
        if !(self.show_badge && self.variant.allows_badge()) {
            return None;
        }
        Some(CircleBadge {
            color: self
                .badge_color
                .clone()
                .unwrap_or_else(|| DEFAULT_BADGE_COLOR.to_string()),
            border_color: circle.background_color.clone(),
            size: BADGE_FRACTION,
            pulses: circle.animation == AnimationKind::Pulse,
        })
    }
}

/// Status dot anchored at the bottom-right of a circle. Its border uses the
/// circle's background so it looks cut out.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleBadge {
    pub color: String,
    pub border_color: String,
    pub size: Length,
    pub pulses: bool,
}

impl CircleBadge {
    pub fn style(&self) -> String {
        format!(
            "--skeleton-badge-color: {}; --skeleton-badge-border: {}; --skeleton-badge-size: {};",
            self.color, self.border_color, self.size
        )
    }
}
