use crate::{BlockSpec, Length, Responsive, DEFAULT_LABEL};

/// Named rectangle shapes. Each supplies default dimensions and radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RectVariant {
    #[default]
    Default,
    Card,
    Banner,
    Thumbnail,
    Button,
    Input,
    Badge,
    Chip,
}

pub const ALL_RECT_VARIANTS: &[RectVariant] = &[
    RectVariant::Default,
    RectVariant::Card,
    RectVariant::Banner,
    RectVariant::Thumbnail,
    RectVariant::Button,
    RectVariant::Input,
    RectVariant::Badge,
    RectVariant::Chip,
];

impl RectVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            RectVariant::Default => "default",
            RectVariant::Card => "card",
            RectVariant::Banner => "banner",
            RectVariant::Thumbnail => "thumbnail",
            RectVariant::Button => "button",
            RectVariant::Input => "input",
            RectVariant::Badge => "badge",
            RectVariant::Chip => "chip",
        }
    }

    /// Parse a variant key, falling back to `default`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "default" => RectVariant::Default,
            "card" => RectVariant::Card,
            "banner" => RectVariant::Banner,
            "thumbnail" => RectVariant::Thumbnail,
            "button" => RectVariant::Button,
            "input" => RectVariant::Input,
            "badge" => RectVariant::Badge,
            "chip" => RectVariant::Chip,
            other => {
                tracing::debug!(key = other, "unknown rect variant, using default");
                RectVariant::Default
            }
        }
    }

    /// Default width across breakpoints. `None` defers to the block default.
    pub fn width(&self) -> Responsive {
        match self {
            RectVariant::Default => Responsive::default(),
            RectVariant::Card | RectVariant::Banner | RectVariant::Input => {
                Responsive::fixed(Length::FULL)
            }
            RectVariant::Thumbnail => Responsive::new(
                Some(Length::Rem(6.0)),
                None,
                Some(Length::Rem(4.0)),
            ),
            RectVariant::Button => Responsive::fixed(Length::Rem(8.0)),
            RectVariant::Badge => Responsive::fixed(Length::Rem(4.0)),
            RectVariant::Chip => Responsive::fixed(Length::Rem(6.0)),
        }
    }

    /// Default height across breakpoints, including the mobile shrink for
    /// the large shapes.
    pub fn height(&self) -> Responsive {
        match self {
            RectVariant::Default => Responsive::default(),
            RectVariant::Card => Responsive::new(
                Some(Length::Rem(12.0)),
                Some(Length::Rem(10.0)),
                Some(Length::Rem(8.0)),
            ),
            RectVariant::Banner => Responsive::new(
                Some(Length::Rem(8.0)),
                Some(Length::Rem(6.0)),
                Some(Length::Rem(5.0)),
            ),
            RectVariant::Thumbnail => Responsive::new(
                Some(Length::Rem(6.0)),
                None,
                Some(Length::Rem(4.0)),
            ),
            RectVariant::Button | RectVariant::Input => Responsive::fixed(Length::Rem(2.5)),
            RectVariant::Badge => Responsive::fixed(Length::Rem(1.5)),
            RectVariant::Chip => Responsive::fixed(Length::Rem(2.0)),
        }
    }

    pub fn border_radius(&self) -> Length {
        match self {
            RectVariant::Default | RectVariant::Thumbnail | RectVariant::Input => Length::Px(4.0),
            RectVariant::Card => Length::Px(8.0),
            RectVariant::Banner | RectVariant::Button => Length::Px(6.0),
            RectVariant::Badge => Length::Px(12.0),
            RectVariant::Chip => Length::Px(16.0),
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            RectVariant::Default => DEFAULT_LABEL,
            RectVariant::Card => "Loading card",
            RectVariant::Banner => "Loading banner",
            RectVariant::Thumbnail => "Loading thumbnail",
            RectVariant::Button => "Loading button",
            RectVariant::Input => "Loading input field",
            RectVariant::Badge => "Loading badge",
            RectVariant::Chip => "Loading chip",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RectSpec {
    pub base: BlockSpec,
    pub variant: RectVariant,
}

/// Caller values win. Variant breakpoints only apply when the caller left
/// the base value unset, so an explicit height is never shrunk.
fn dimension(caller: Responsive, variant: Responsive) -> Responsive {
    if caller.base.is_some() {
        caller
    } else {
        caller.or(variant)
    }
}

impl RectSpec {
    pub fn to_block(&self) -> BlockSpec {
        BlockSpec {
            width: dimension(self.base.width, self.variant.width()),
            height: dimension(self.base.height, self.variant.height()),
            border_radius: Some(
                self.base
                    .border_radius
                    .unwrap_or_else(|| self.variant.border_radius()),
            ),
            label: Some(
                self.base
                    .label
                    .clone()
                    .unwrap_or_else(|| self.variant.default_label().to_string()),
            ),
            ..self.base.clone()
        }
    }
}
