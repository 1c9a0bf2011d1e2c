use dioxus::prelude::*;
use skeleton_types::{
    staggered_delays, LoadPhase, WrapperLayout, WrapperStyle, DEFAULT_WRAPPER_LABEL,
};

#[derive(Props, Clone, PartialEq)]
pub struct SkeletonWrapperProps {
    /// Owned by the caller and read on every render.
    pub loading: bool,
    /// Shown while loading. Without it the children double as the skeleton.
    #[props(default)]
    pub skeleton: Option<Element>,
    /// Shown once settled in place of the children.
    #[props(default)]
    pub fallback: Option<Element>,
    /// Shown while loading, one after another. Takes precedence over
    /// `skeleton`.
    #[props(default)]
    pub skeleton_items: Vec<Element>,
    /// Offset each of `skeleton_items` by `stagger_delay_ms` times its index.
    #[props(default = false)]
    pub animate_children: bool,
    #[props(default)]
    pub stagger_delay_ms: u64,
    /// Play the swap transition. `false` swaps trees instantly.
    #[props(default = true)]
    pub fade_out: bool,
    #[props(default)]
    pub display: Option<String>,
    #[props(default)]
    pub layout: WrapperLayout,
    #[props(default)]
    pub gap: Option<String>,
    #[props(default = "repeat(auto-fit, minmax(200px, 1fr))".to_string())]
    pub grid_columns: String,
    #[props(default = "1fr".to_string())]
    pub mobile_grid_columns: String,
    #[props(default = "row".to_string())]
    pub flex_direction: String,
    #[props(default = "column".to_string())]
    pub mobile_flex_direction: String,
    #[props(default = "stretch".to_string())]
    pub align_items: String,
    #[props(default = "flex-start".to_string())]
    pub justify_content: String,
    #[props(default = "nowrap".to_string())]
    pub flex_wrap: String,
    /// Announced while loading.
    #[props(default)]
    pub label: Option<String>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Shows the skeleton tree while `loading`, the content tree otherwise.
///
/// Exactly one tree is mounted at a time. Each one plays a short entry
/// transition when it mounts.
#[component]
pub fn SkeletonWrapper(props: SkeletonWrapperProps) -> Element {
    let phase = LoadPhase::from_loading(props.loading);
    let layout = WrapperStyle {
        layout: props.layout,
        gap: props.gap,
        display: props.display,
        grid_columns: props.grid_columns,
        mobile_grid_columns: props.mobile_grid_columns,
        flex_direction: props.flex_direction,
        mobile_flex_direction: props.mobile_flex_direction,
        align_items: props.align_items,
        justify_content: props.justify_content,
        flex_wrap: props.flex_wrap,
    };

    let transition = if props.fade_out { "fade" } else { "none" };

    match phase {
        LoadPhase::Loading => {
            let delays = if props.animate_children {
                staggered_delays(props.stagger_delay_ms, props.skeleton_items.len())
            } else {
                vec![0; props.skeleton_items.len()]
            };
            let items: Vec<(u64, Element)> =
                delays.into_iter().zip(props.skeleton_items).collect();
            let tree = props.skeleton.unwrap_or(props.children);
            let label = props
                .label
                .unwrap_or_else(|| DEFAULT_WRAPPER_LABEL.to_string());
            let base = vec![
                Attribute::new("class", "skeleton-wrapper", None, false),
                Attribute::new("data-state", phase.as_str(), None, false),
                Attribute::new("data-transition", transition, None, false),
                Attribute::new("data-layout", layout.layout.as_str(), None, false),
                Attribute::new("style", layout.style(), None, false),
                Attribute::new("role", "status", None, false),
                Attribute::new("aria-live", "polite", None, false),
                Attribute::new("aria-busy", "true", None, false),
                Attribute::new("aria-label", label, None, false),
            ];
            let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

            rsx! {
                document::Link { rel: "stylesheet", href: asset!("./style.css") }
                div {
                    ..merged,
                    if items.is_empty() {
                        {tree}
                    } else {
                        for (i, (delay, item)) in items.into_iter().enumerate() {
                            div {
                                key: "{i}",
                                class: "skeleton-wrapper-item",
                                style: "--skeleton-delay: {delay}ms;",
                                {item}
                            }
                        }
                    }
                }
            }
        }
        LoadPhase::Settled => {
            let tree = props.fallback.unwrap_or(props.children);
            let base = vec![
                Attribute::new("class", "skeleton-content", None, false),
                Attribute::new("data-state", phase.as_str(), None, false),
                Attribute::new("data-transition", transition, None, false),
                Attribute::new("aria-busy", "false", None, false),
            ];
            let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

            rsx! {
                document::Link { rel: "stylesheet", href: asset!("./style.css") }
                div {
                    ..merged,
                    {tree}
                }
            }
        }
    }
}

/// A component shown by [`WithSkeleton`] once loading settles.
#[derive(Clone, Copy, Debug)]
pub struct WrappedComponent(pub fn() -> Element);

impl PartialEq for WrappedComponent {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.0, other.0)
    }
}

/// Puts `content` behind a [`SkeletonWrapper`] driven by `loading`.
#[component]
pub fn WithSkeleton(
    loading: bool,
    content: WrappedComponent,
    #[props(default)] skeleton: Option<Element>,
    #[props(default)] layout: WrapperLayout,
    #[props(default)] gap: Option<String>,
    #[props(default)] label: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    #[allow(non_snake_case)]
    let Content = content.0;

    rsx! {
        SkeletonWrapper {
            loading,
            skeleton,
            layout,
            gap,
            label,
            attributes,
            Content {}
        }
    }
}
