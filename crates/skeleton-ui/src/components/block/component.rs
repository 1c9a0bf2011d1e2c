use dioxus::prelude::*;
use skeleton_types::{
    AnimationKind, BlockSpec, Length, ResolvedBlock, Responsive, BLOCK_ROLE, DEFAULT_SPEED_SECONDS,
};

use crate::theme::use_skeleton_palette;

/// Stylesheet shared by every shape built on a block.
pub(crate) const BLOCK_STYLE: Asset = asset!("./style.css");

/// Attributes every rendered block carries, merged with `extra`. Text
/// values such as `class` accumulate.
pub(crate) fn block_attributes(block: &ResolvedBlock, extra: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new("data-animation", block.animation.as_str(), None, false),
        Attribute::new("style", block.style(), None, false),
        Attribute::new("role", BLOCK_ROLE, None, false),
        Attribute::new("aria-label", block.label.clone(), None, false),
        Attribute::new("aria-busy", "true", None, false),
        Attribute::new("tabindex", block.tab_index.to_string(), None, false),
    ];
    dioxus_primitives::merge_attributes(vec![base, extra])
}

/// A single `class` attribute, for merging into [`block_attributes`].
pub(crate) fn class(name: &'static str) -> Vec<Attribute> {
    vec![Attribute::new("class", name, None, false)]
}

/// A themed rectangular loading placeholder.
///
/// Mobile and small-mobile sizes inherit the next larger value when unset.
#[component]
pub fn SkeletonBlock(
    width: Option<Length>,
    height: Option<Length>,
    mobile_width: Option<Length>,
    mobile_height: Option<Length>,
    small_mobile_width: Option<Length>,
    small_mobile_height: Option<Length>,
    #[props(default)] animation: AnimationKind,
    #[props(default = DEFAULT_SPEED_SECONDS)] speed: f32,
    background_color: Option<String>,
    highlight_color: Option<String>,
    border_radius: Option<Length>,
    label: Option<String>,
    tab_index: Option<i32>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let palette = use_skeleton_palette();
    let spec = BlockSpec {
        width: Responsive::new(width, mobile_width, small_mobile_width),
        height: Responsive::new(height, mobile_height, small_mobile_height),
        animation,
        speed,
        background_color,
        highlight_color,
        border_radius,
        aspect_ratio: None,
        label,
        tab_index,
    };
    let merged = block_attributes(&spec.resolve(&palette), attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: BLOCK_STYLE }
        div {
            ..merged,
        }
    }
}
