use dioxus::prelude::*;
use skeleton_types::{
    article_paragraph_lines, frame_style, stagger_delay_ms, table_cells, AnimationKind,
    AspectRatio, CircleSize, CommentSpec, FontSize, Length, RectVariant, ThemePalette,
    WidthPolicy, DEFAULT_SPEED_SECONDS, GRID_DEFAULT_COLUMNS, GRID_DEFAULT_ITEMS,
    GRID_DEFAULT_MOBILE_COLUMNS, LIST_DEFAULT_ITEMS,
};

use crate::components::circle::{SkeletonAvatar, SkeletonCircle};
use crate::components::rect::{SkeletonBadge, SkeletonButton, SkeletonRect};
use crate::components::text::{SkeletonHeading, SkeletonParagraph, SkeletonText};
use crate::theme::use_skeleton_palette;

/// Padded preset frame, bordered in the palette's border color when asked.
fn frame_attributes(
    preset: &'static str,
    show_border: bool,
    palette: &ThemePalette,
    attributes: Vec<Attribute>,
) -> Vec<Attribute> {
    let base = vec![
        Attribute::new("class", "skeleton-preset", None, false),
        Attribute::new("data-preset", preset, None, false),
        Attribute::new("style", frame_style(show_border, palette), None, false),
    ];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

/// Image, optional author row, title, description and meta row.
#[component]
pub fn SkeletonMediaCard(
    #[props(default = true)] show_image: bool,
    #[props(default = AspectRatio::WIDESCREEN)] image_aspect_ratio: AspectRatio,
    #[props(default = false)] show_avatar: bool,
    #[props(default = 1)] title_lines: usize,
    #[props(default = 2)] description_lines: usize,
    #[props(default = true)] show_meta: bool,
    #[props(default = false)] show_border: bool,
    #[props(default)] animation: AnimationKind,
    #[props(default = DEFAULT_SPEED_SECONDS)] speed: f32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let palette = use_skeleton_palette();
    let merged = frame_attributes("media-card", show_border, &palette, attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if show_image {
                SkeletonRect {
                    class: "skeleton-media-image",
                    variant: RectVariant::Card,
                    aspect_ratio: image_aspect_ratio,
                    animation,
                    speed,
                }
            }
            div { class: "skeleton-media-body",
                if show_avatar {
                    div { class: "skeleton-row skeleton-media-author",
                        SkeletonCircle { size: CircleSize::Sm, animation, speed }
                        SkeletonText { class: "skeleton-fill", line_count: 1, animation, speed }
                    }
                }
                SkeletonHeading {
                    class: "skeleton-media-title",
                    line_count: title_lines,
                    animation,
                    speed,
                }
                SkeletonParagraph {
                    class: "skeleton-media-description",
                    line_count: description_lines,
                    last_line_width: Length::percent(70.0),
                    animation,
                    speed,
                }
                if show_meta {
                    div { class: "skeleton-row skeleton-media-meta",
                        SkeletonBadge { animation, speed }
                        SkeletonText { line_count: 1, width: Length::rem(4.0), animation, speed }
                    }
                }
            }
        }
    }
}

/// Centered avatar with name, subtitle, bio and a three-column stats row.
#[component]
pub fn SkeletonProfileCard(
    #[props(default)] size: CircleSize,
    #[props(default = false)] show_banner: bool,
    #[props(default = true)] show_badge: bool,
    #[props(default = true)] show_bio: bool,
    #[props(default = true)] show_stats: bool,
    #[props(default = false)] show_border: bool,
    #[props(default)] animation: AnimationKind,
    #[props(default = DEFAULT_SPEED_SECONDS)] speed: f32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let palette = use_skeleton_palette();
    let merged = frame_attributes("profile-card", show_border, &palette, attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if show_banner {
                SkeletonRect {
                    class: "skeleton-profile-banner",
                    variant: RectVariant::Banner,
                    aspect_ratio: AspectRatio::BANNER,
                    animation,
                    speed,
                }
            }
            div { class: "skeleton-profile-body",
                SkeletonAvatar { size, show_badge, animation, speed }
                div { class: "skeleton-profile-details",
                    SkeletonHeading {
                        class: "skeleton-centered",
                        line_count: 1,
                        width: Length::percent(60.0),
                        animation,
                        speed,
                    }
                    SkeletonText {
                        class: "skeleton-centered",
                        line_count: 1,
                        width: Length::percent(40.0),
                        animation,
                        speed,
                    }
                    if show_bio {
                        SkeletonText {
                            line_count: 2,
                            last_line_width: Length::percent(80.0),
                            animation,
                            speed,
                        }
                    }
                    if show_stats {
                        div { class: "skeleton-profile-stats",
                            for i in 0..3 {
                                div { key: "{i}", class: "skeleton-profile-stat",
                                    SkeletonText {
                                        class: "skeleton-centered",
                                        line_count: 1,
                                        width: Length::rem(3.0),
                                        animation,
                                        speed,
                                    }
                                    SkeletonText {
                                        class: "skeleton-centered",
                                        line_count: 1,
                                        width: Length::rem(4.0),
                                        animation,
                                        speed,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Author row, headline, meta, featured image and body paragraphs.
///
/// Paragraph line counts and widths are drawn again on every render.
#[component]
pub fn SkeletonArticle(
    #[props(default = true)] show_author: bool,
    #[props(default = true)] show_featured_image: bool,
    #[props(default = true)] show_meta: bool,
    #[props(default = 3)] paragraphs: usize,
    #[props(default = false)] show_border: bool,
    #[props(default)] animation: AnimationKind,
    #[props(default = DEFAULT_SPEED_SECONDS)] speed: f32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let palette = use_skeleton_palette();
    let merged = frame_attributes("article", show_border, &palette, attributes);
    let paragraph_lines = article_paragraph_lines(&mut rand::thread_rng(), paragraphs);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if show_author {
                div { class: "skeleton-row skeleton-article-author",
                    SkeletonCircle { size: CircleSize::Sm, animation, speed }
                    div { class: "skeleton-fill skeleton-stack",
                        SkeletonText { line_count: 1, width: Length::percent(30.0), animation, speed }
                        SkeletonText { line_count: 1, width: Length::percent(20.0), animation, speed }
                    }
                }
            }
            SkeletonHeading {
                class: "skeleton-article-title",
                font_size: FontSize::Large,
                line_count: 2,
                last_line_width: Length::percent(80.0),
                animation,
                speed,
            }
            if show_meta {
                div { class: "skeleton-row skeleton-article-meta",
                    SkeletonText { line_count: 1, width: Length::rem(6.0), animation, speed }
                    SkeletonBadge { animation, speed }
                    SkeletonBadge { animation, speed }
                }
            }
            if show_featured_image {
                SkeletonRect {
                    class: "skeleton-article-image",
                    variant: RectVariant::Banner,
                    aspect_ratio: AspectRatio::FEATURED,
                    animation,
                    speed,
                }
            }
            for (i, lines) in paragraph_lines.into_iter().enumerate() {
                SkeletonParagraph {
                    key: "{i}",
                    class: "skeleton-article-paragraph",
                    line_count: lines,
                    width_policy: WidthPolicy::Random,
                    animation,
                    speed,
                }
            }
        }
    }
}

/// One table row: optional avatar, text cells and trailing action buttons.
#[component]
pub fn SkeletonTableRow(
    #[props(default = 4)] columns: usize,
    #[props(default = false)] show_avatar: bool,
    #[props(default = true)] show_actions: bool,
    #[props(default)] animation: AnimationKind,
    #[props(default = DEFAULT_SPEED_SECONDS)] speed: f32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let palette = use_skeleton_palette();
    let base = vec![
        Attribute::new("class", "skeleton-row skeleton-table-row", None, false),
        Attribute::new("data-preset", "table-row", None, false),
        Attribute::new(
            "style",
            format!("--skeleton-row-border: {};", palette.border_color),
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let cells: Vec<_> = table_cells(columns)
        .into_iter()
        .map(|cell| (cell.flex, cell.width))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if show_avatar {
                SkeletonCircle { size: CircleSize::Sm, animation, speed }
            }
            for (i, (flex, width)) in cells.into_iter().enumerate() {
                div { key: "{i}", class: "skeleton-table-cell", style: "flex: {flex};",
                    SkeletonText { line_count: 1, width, animation, speed }
                }
            }
            if show_actions {
                div { class: "skeleton-row skeleton-table-actions",
                    SkeletonButton {
                        width: Length::rem(2.0),
                        height: Length::rem(2.0),
                        animation,
                        speed,
                    }
                    SkeletonButton {
                        width: Length::rem(2.0),
                        height: Length::rem(2.0),
                        animation,
                        speed,
                    }
                }
            }
        }
    }
}

fn comment_body(show_actions: bool, animation: AnimationKind, speed: f32) -> Element {
    rsx! {
        div { class: "skeleton-row skeleton-comment-main",
            SkeletonCircle { size: CircleSize::Sm, animation, speed }
            div { class: "skeleton-fill",
                div { class: "skeleton-row skeleton-comment-header",
                    SkeletonText { line_count: 1, width: Length::rem(8.0), animation, speed }
                    SkeletonText { line_count: 1, width: Length::rem(4.0), animation, speed }
                }
                SkeletonText {
                    class: "skeleton-comment-text",
                    line_count: 2,
                    width_policy: WidthPolicy::Random,
                    animation,
                    speed,
                }
                if show_actions {
                    div { class: "skeleton-row skeleton-comment-actions",
                        SkeletonText { line_count: 1, width: Length::rem(3.0), animation, speed }
                        SkeletonText { line_count: 1, width: Length::rem(3.0), animation, speed }
                        SkeletonText { line_count: 1, width: Length::rem(4.0), animation, speed }
                    }
                }
            }
        }
    }
}

/// A comment, optionally followed by indented replies. Replies never carry
/// replies of their own.
#[component]
pub fn SkeletonComment(
    #[props(default = false)] show_replies: bool,
    #[props(default = 2)] reply_count: usize,
    #[props(default = true)] show_actions: bool,
    #[props(default)] animation: AnimationKind,
    #[props(default = DEFAULT_SPEED_SECONDS)] speed: f32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let tree = CommentSpec {
        show_replies,
        reply_count,
        show_actions,
    }
    .tree();
    let base = vec![
        Attribute::new("class", "skeleton-comment", None, false),
        Attribute::new("data-preset", "comment", None, false),
        Attribute::new("data-depth", tree.depth.to_string(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let replies: Vec<(usize, bool)> = tree
        .replies
        .iter()
        .map(|reply| (reply.depth, reply.show_actions))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {comment_body(tree.show_actions, animation, speed)}
            if !replies.is_empty() {
                div { class: "skeleton-comment-replies",
                    for (i, (depth, show_actions)) in replies.into_iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "skeleton-comment",
                            "data-depth": depth.to_string(),
                            {comment_body(show_actions, animation, speed)}
                        }
                    }
                }
            }
        }
    }
}

/// Props handed to each repeated Grid or List item.
#[derive(Props, Clone, PartialEq)]
pub struct PresetItemProps {
    #[props(default)]
    pub animation: AnimationKind,
    #[props(default = DEFAULT_SPEED_SECONDS)]
    pub speed: f32,
    #[props(default = true)]
    pub show_border: bool,
}

/// A component repeated by [`SkeletonGrid`] and [`SkeletonList`].
#[derive(Clone, Copy, Debug)]
pub struct PresetItem(pub fn(PresetItemProps) -> Element);

impl PartialEq for PresetItem {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.0, other.0)
    }
}

#[component]
pub fn MediaCardItem(props: PresetItemProps) -> Element {
    rsx! {
        SkeletonMediaCard {
            animation: props.animation,
            speed: props.speed,
            show_border: props.show_border,
        }
    }
}

#[component]
pub fn ProfileCardItem(props: PresetItemProps) -> Element {
    rsx! {
        SkeletonProfileCard {
            animation: props.animation,
            speed: props.speed,
            show_border: props.show_border,
        }
    }
}

#[component]
pub fn CommentItem(props: PresetItemProps) -> Element {
    rsx! {
        SkeletonComment { animation: props.animation, speed: props.speed }
    }
}

/// Repeats `item` in a responsive grid, staggering each entrance.
#[component]
pub fn SkeletonGrid(
    #[props(default = GRID_DEFAULT_ITEMS)] items: usize,
    #[props(default = GRID_DEFAULT_COLUMNS.to_string())] columns: String,
    #[props(default = GRID_DEFAULT_MOBILE_COLUMNS.to_string())] mobile_columns: String,
    #[props(default = "1rem".to_string())] gap: String,
    #[props(default = PresetItem(MediaCardItem))] item: PresetItem,
    #[props(default)] animation: AnimationKind,
    #[props(default = DEFAULT_SPEED_SECONDS)] speed: f32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "skeleton-grid", None, false),
        Attribute::new("data-preset", "grid", None, false),
        Attribute::new(
            "style",
            format!(
                "--skeleton-grid-columns: {columns}; --skeleton-grid-mobile-columns: {mobile_columns}; --skeleton-grid-gap: {gap};"
            ),
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let delays: Vec<u64> = (0..items).map(stagger_delay_ms).collect();
    #[allow(non_snake_case)]
    let Item = item.0;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            for (i, delay) in delays.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "skeleton-stagger",
                    style: "--skeleton-delay: {delay}ms;",
                    Item { animation, speed }
                }
            }
        }
    }
}

/// Repeats `item` in a vertical stack, staggering each entrance.
#[component]
pub fn SkeletonList(
    #[props(default = LIST_DEFAULT_ITEMS)] items: usize,
    #[props(default = "1rem".to_string())] gap: String,
    #[props(default = PresetItem(MediaCardItem))] item: PresetItem,
    #[props(default)] animation: AnimationKind,
    #[props(default = DEFAULT_SPEED_SECONDS)] speed: f32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "skeleton-list", None, false),
        Attribute::new("data-preset", "list", None, false),
        Attribute::new("style", format!("--skeleton-list-gap: {gap};"), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let delays: Vec<u64> = (0..items).map(stagger_delay_ms).collect();
    #[allow(non_snake_case)]
    let Item = item.0;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            for (i, delay) in delays.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "skeleton-stagger",
                    style: "--skeleton-delay: {delay}ms;",
                    Item { animation, speed }
                }
            }
        }
    }
}
