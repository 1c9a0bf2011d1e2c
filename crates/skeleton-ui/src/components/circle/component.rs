use dioxus::prelude::*;
use skeleton_types::{
    AnimationKind, BlockSpec, CircleSize, CircleSpec, CircleVariant, Length, DEFAULT_SPEED_SECONDS,
};

use crate::components::block::{block_attributes, class, BLOCK_STYLE};
use crate::theme::use_skeleton_palette;

#[derive(Props, Clone, PartialEq)]
pub struct SkeletonCircleProps {
    #[props(default)]
    pub size: Option<CircleSize>,
    /// Overrides `size` and the variant tier.
    #[props(default)]
    pub diameter: Option<Length>,
    #[props(default)]
    pub variant: CircleVariant,
    #[props(default = false)]
    pub show_badge: bool,
    #[props(default)]
    pub badge_color: Option<String>,
    #[props(default)]
    pub animation: AnimationKind,
    #[props(default = DEFAULT_SPEED_SECONDS)]
    pub speed: f32,
    #[props(default)]
    pub background_color: Option<String>,
    #[props(default)]
    pub highlight_color: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub tab_index: Option<i32>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// A circular placeholder with optional status badge.
#[component]
pub fn SkeletonCircle(props: SkeletonCircleProps) -> Element {
    let palette = use_skeleton_palette();
    let spec = CircleSpec {
        base: BlockSpec {
            animation: props.animation,
            speed: props.speed,
            background_color: props.background_color,
            highlight_color: props.highlight_color,
            label: props.label,
            tab_index: props.tab_index,
            ..BlockSpec::default()
        },
        size: props.size,
        diameter: props.diameter,
        variant: props.variant,
        show_badge: props.show_badge,
        badge_color: props.badge_color,
    };
    let block = spec.to_block().resolve(&palette);
    let badge = spec.badge(&block);
    let shape = block_attributes(&block, class("skeleton-circle-shape"));

    let base = vec![
        Attribute::new("class", "skeleton-circle", None, false),
        Attribute::new("data-variant", spec.variant.as_str(), None, false),
        Attribute::new("data-size", spec.tier().as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: BLOCK_STYLE }
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div {
                ..shape,
            }
            if let Some(badge) = badge {
                span {
                    class: "skeleton-circle-badge",
                    "data-pulse": badge.pulses.to_string(),
                    style: badge.style(),
                    "aria-hidden": "true",
                }
            }
        }
    }
}

/// Profile picture placeholder, `md` unless sized.
#[component]
pub fn SkeletonAvatar(mut props: SkeletonCircleProps) -> Element {
    props.variant = CircleVariant::Avatar;

    rsx! {
        SkeletonCircle { ..props }
    }
}

/// Icon placeholder, `sm` unless sized.
#[component]
pub fn SkeletonIcon(mut props: SkeletonCircleProps) -> Element {
    props.variant = CircleVariant::Icon;
    props.size = props.size.or(Some(CircleSize::Sm));

    rsx! {
        SkeletonCircle { ..props }
    }
}

/// Status indicator dot. Always `xs` unless a diameter is given.
#[component]
pub fn SkeletonDot(mut props: SkeletonCircleProps) -> Element {
    props.variant = CircleVariant::Dot;

    rsx! {
        SkeletonCircle { ..props }
    }
}

/// Round icon-button placeholder.
#[component]
pub fn SkeletonCircleButton(mut props: SkeletonCircleProps) -> Element {
    props.variant = CircleVariant::Button;

    rsx! {
        SkeletonCircle { ..props }
    }
}
