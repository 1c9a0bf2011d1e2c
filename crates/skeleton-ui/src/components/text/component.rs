use dioxus::prelude::*;
use skeleton_types::{
    AnimationKind, BlockSpec, FontSize, Length, Responsive, TextLayout, TextSpec, TextVariant,
    WidthPolicy, DEFAULT_SPEED_SECONDS,
};

use crate::components::block::{block_attributes, class, BLOCK_STYLE};
use crate::theme::use_skeleton_palette;

#[derive(Props, Clone, PartialEq)]
pub struct SkeletonTextProps {
    /// `0` uses the variant's line count.
    #[props(default)]
    pub line_count: usize,
    #[props(default)]
    pub variant: TextVariant,
    #[props(default)]
    pub font_size: FontSize,
    #[props(default)]
    pub width_policy: WidthPolicy,
    #[props(default)]
    pub first_line_width: Option<Length>,
    #[props(default)]
    pub last_line_width: Option<Length>,
    #[props(default)]
    pub line_height: Option<Length>,
    #[props(default)]
    pub gap: Option<Length>,
    /// Width of a single line, or of the whole group.
    #[props(default)]
    pub width: Option<Length>,
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

/// Stacked lines standing in for a run of text.
///
/// A single line renders as one bare block; two or more are wrapped in a
/// labelled group. Random widths are drawn again on every render.
#[component]
pub fn SkeletonText(props: SkeletonTextProps) -> Element {
    let palette = use_skeleton_palette();
    let spec = TextSpec {
        base: BlockSpec {
            width: Responsive::new(props.width, None, None),
            animation: props.animation,
            speed: props.speed,
            background_color: props.background_color,
            highlight_color: props.highlight_color,
            border_radius: props.border_radius,
            label: props.label,
            tab_index: props.tab_index,
            ..BlockSpec::default()
        },
        line_count: Some(props.line_count),
        variant: props.variant,
        font_size: props.font_size,
        width_policy: props.width_policy,
        first_line_width: props.first_line_width,
        last_line_width: props.last_line_width,
        line_height: props.line_height,
        gap: props.gap,
    };
    let variant = spec.variant.as_str();

    match spec.layout(&mut rand::thread_rng()) {
        TextLayout::Single(line) => {
            let mut extra = vec![
                Attribute::new("class", "skeleton-text-line", None, false),
                Attribute::new("data-variant", variant, None, false),
            ];
            extra.extend(props.attributes);
            let merged = block_attributes(&line.resolve(&palette), extra);

            rsx! {
                document::Link { rel: "stylesheet", href: BLOCK_STYLE }
                document::Link { rel: "stylesheet", href: asset!("./style.css") }
                div {
                    ..merged,
                }
            }
        }
        TextLayout::Group {
            label,
            gap,
            width,
            lines,
        } => {
            let lines: Vec<Vec<Attribute>> = lines
                .iter()
                .map(|line| block_attributes(&line.resolve(&palette), class("skeleton-text-line")))
                .collect();
            let base = vec![
                Attribute::new("class", "skeleton-text", None, false),
                Attribute::new("data-variant", variant, None, false),
                Attribute::new("role", "group", None, false),
                Attribute::new("aria-label", label, None, false),
                Attribute::new(
                    "style",
                    format!("--skeleton-text-gap: {gap}; --skeleton-text-width: {width};"),
                    None,
                    false,
                ),
            ];
            let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

            rsx! {
                document::Link { rel: "stylesheet", href: BLOCK_STYLE }
                document::Link { rel: "stylesheet", href: asset!("./style.css") }
                div {
                    ..merged,
                    for (i, line) in lines.into_iter().enumerate() {
                        div {
                            key: "{i}",
                            ..line,
                        }
                    }
                }
            }
        }
    }
}

/// One tall line unless `line_count` says otherwise.
#[component]
pub fn SkeletonHeading(mut props: SkeletonTextProps) -> Element {
    props.variant = TextVariant::Heading;

    rsx! {
        SkeletonText { ..props }
    }
}

#[component]
pub fn SkeletonParagraph(mut props: SkeletonTextProps) -> Element {
    props.variant = TextVariant::Paragraph;

    rsx! {
        SkeletonText { ..props }
    }
}

#[component]
pub fn SkeletonCaption(mut props: SkeletonTextProps) -> Element {
    props.variant = TextVariant::Caption;

    rsx! {
        SkeletonText { ..props }
    }
}
