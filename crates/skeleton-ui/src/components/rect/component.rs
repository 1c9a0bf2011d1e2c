use dioxus::prelude::*;
use skeleton_types::{
    AnimationKind, AspectRatio, BlockSpec, Length, RectSpec, RectVariant, Responsive,
    DEFAULT_SPEED_SECONDS,
};

use crate::components::block::{block_attributes, BLOCK_STYLE};
use crate::theme::use_skeleton_palette;

#[derive(Props, Clone, PartialEq)]
pub struct SkeletonRectProps {
    #[props(default)]
    pub variant: RectVariant,
    #[props(default)]
    pub width: Option<Length>,
    #[props(default)]
    pub height: Option<Length>,
    #[props(default)]
    pub mobile_width: Option<Length>,
    #[props(default)]
    pub mobile_height: Option<Length>,
    #[props(default)]
    pub small_mobile_width: Option<Length>,
    #[props(default)]
    pub small_mobile_height: Option<Length>,
    /// Derives the height from the width, ignoring explicit and variant
    /// heights.
    #[props(default)]
    pub aspect_ratio: Option<AspectRatio>,
    #[props(default)]
    pub animation: AnimationKind,
    #[props(default = DEFAULT_SPEED_SECONDS)]
    pub speed: f32,
    #[props(default)]
    pub background_color: Option<String>,
    #[props(default)]
    pub highlight_color: Option<String>,
    #[props(default)]
    pub border_radius: Option<Length>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub tab_index: Option<i32>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// A rectangular placeholder whose variant supplies default dimensions.
#[component]
pub fn SkeletonRect(props: SkeletonRectProps) -> Element {
    let palette = use_skeleton_palette();
    let spec = RectSpec {
        base: BlockSpec {
            width: Responsive::new(props.width, props.mobile_width, props.small_mobile_width),
            height: Responsive::new(props.height, props.mobile_height, props.small_mobile_height),
            animation: props.animation,
            speed: props.speed,
            background_color: props.background_color,
            highlight_color: props.highlight_color,
            border_radius: props.border_radius,
            aspect_ratio: props.aspect_ratio,
            label: props.label,
            tab_index: props.tab_index,
        },
        variant: props.variant,
    };
    let block = spec.to_block().resolve(&palette);

    let mut extra = vec![
        Attribute::new("class", "skeleton-rect", None, false),
        Attribute::new("data-variant", spec.variant.as_str(), None, false),
    ];
    extra.extend(props.attributes);
    let merged = block_attributes(&block, extra);

    rsx! {
        document::Link { rel: "stylesheet", href: BLOCK_STYLE }
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// Card image placeholder, 16:9 unless told otherwise.
#[component]
pub fn SkeletonCard(mut props: SkeletonRectProps) -> Element {
    props.variant = RectVariant::Card;
    props.aspect_ratio = props.aspect_ratio.or(Some(AspectRatio::WIDESCREEN));

    rsx! {
        SkeletonRect { ..props }
    }
}

/// Wide banner placeholder, 3:1 unless told otherwise.
#[component]
pub fn SkeletonBanner(mut props: SkeletonRectProps) -> Element {
    props.variant = RectVariant::Banner;
    props.aspect_ratio = props.aspect_ratio.or(Some(AspectRatio::BANNER));

    rsx! {
        SkeletonRect { ..props }
    }
}

/// Square thumbnail placeholder.
#[component]
pub fn SkeletonThumbnail(mut props: SkeletonRectProps) -> Element {
    props.variant = RectVariant::Thumbnail;
    props.aspect_ratio = props.aspect_ratio.or(Some(AspectRatio::SQUARE));

    rsx! {
        SkeletonRect { ..props }
    }
}

#[component]
pub fn SkeletonButton(mut props: SkeletonRectProps) -> Element {
    props.variant = RectVariant::Button;

    rsx! {
        SkeletonRect { ..props }
    }
}

#[component]
pub fn SkeletonInput(mut props: SkeletonRectProps) -> Element {
    props.variant = RectVariant::Input;

    rsx! {
        SkeletonRect { ..props }
    }
}

#[component]
pub fn SkeletonBadge(mut props: SkeletonRectProps) -> Element {
    props.variant = RectVariant::Badge;

    rsx! {
        SkeletonRect { ..props }
    }
}

#[component]
pub fn SkeletonChip(mut props: SkeletonRectProps) -> Element {
    props.variant = RectVariant::Chip;

    rsx! {
        SkeletonRect { ..props }
    }
}
