use serde::{Deserialize, Serialize};

/// Default animation period in seconds.
pub const DEFAULT_SPEED_SECONDS: f32 = 1.5;

/// Per-line speed increment applied inside multi-line text blocks.
pub const LINE_SPEED_STEP_SECONDS: f32 = 0.1;

/// Looping animation applied to a skeleton block.
///
/// The kinds are mutually exclusive and all loop indefinitely while the
/// block is mounted. The keyframes live in the block stylesheet and are
/// selected through the `data-animation` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    /// Gradient band (background → highlight → background) sweeping across.
    #[default]
    Shimmer,
    /// Opacity 1 → 0.4 → 1.
    Pulse,
    /// Vertical scale dip at 30% of the period.
    Wave,
    /// Scale 1 → 1.05 → 1.
    Breathe,
    /// Outer shadow blur and opacity oscillation.
    Glow,
    None,
}

/// All animation kinds in display order.
pub const ALL_ANIMATIONS: &[AnimationKind] = &[
    AnimationKind::Shimmer,
    AnimationKind::Pulse,
    AnimationKind::Wave,
    AnimationKind::Breathe,
    AnimationKind::Glow,
    AnimationKind::None,
];

impl AnimationKind {
    /// Value of the `data-animation` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationKind::Shimmer => "shimmer",
            AnimationKind::Pulse => "pulse",
            AnimationKind::Wave => "wave",
            AnimationKind::Breathe => "breathe",
            AnimationKind::Glow => "glow",
            AnimationKind::None => "none",
        }
    }

    /// Parse an animation key. Unknown keys render statically.
    pub fn from_key(s: &str) -> Self {
        match s {
            "shimmer" => AnimationKind::Shimmer,
            "pulse" => AnimationKind::Pulse,
            "wave" => AnimationKind::Wave,
            "breathe" => AnimationKind::Breathe,
            "glow" => AnimationKind::Glow,
            "none" => AnimationKind::None,
            other => {
                tracing::debug!(key = other, "unknown animation kind, rendering static");
                AnimationKind::None
            }
        }
    }

    pub fn is_animated(&self) -> bool {
        !matches!(self, AnimationKind::None)
    }
}

/// Replace a non-positive or non-finite speed with the default period.
pub fn normalize_speed(speed: f32) -> f32 {
    if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        tracing::debug!(speed, "invalid animation speed, using default");
        DEFAULT_SPEED_SECONDS
    }
}
