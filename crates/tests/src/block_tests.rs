use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use skeleton_types::{AnimationKind, Length};
use skeleton_ui::SkeletonBlock;

use crate::common::{config_with_theme, render, render_with, widths};

#[test]
fn default_block_fills_width_at_one_rem() {
    let html = render(|| rsx! { SkeletonBlock {} });

    assert!(html.contains("class=\"skeleton\""));
    assert!(html.contains("--skeleton-width: 100%;"));
    assert!(html.contains("--skeleton-height: 1rem;"));
    assert!(html.contains("--skeleton-radius: 4px;"));
    assert!(html.contains("--skeleton-speed: 1.5s;"));
    assert!(html.contains("data-animation=\"shimmer\""));
}

#[test]
fn block_exposes_loading_accessibility_surface() {
    let html = render(|| rsx! { SkeletonBlock {} });

    assert!(html.contains("role=\"progressbar\""));
    assert!(html.contains("aria-label=\"Loading content\""));
    assert!(html.contains("aria-busy=\"true\""));
    assert!(html.contains("tabindex=\"-1\""));
}

#[test]
fn explicit_label_and_tab_index_win() {
    let html = render(|| {
        rsx! {
            SkeletonBlock { label: "Loading chart".to_string(), tab_index: 0 }
        }
    });

    assert!(html.contains("aria-label=\"Loading chart\""));
    assert!(html.contains("tabindex=\"0\""));
}

#[test]
fn breakpoints_cascade_from_larger_values() {
    let html = render(|| {
        rsx! {
            SkeletonBlock {
                width: Length::rem(20.0),
                small_mobile_width: Length::rem(10.0),
                height: Length::rem(3.0),
            }
        }
    });

    assert!(html.contains("--skeleton-mobile-width: 20rem;"));
    assert!(html.contains("--skeleton-small-width: 10rem;"));
    assert!(html.contains("--skeleton-mobile-height: 3rem;"));
    assert!(html.contains("--skeleton-small-height: 3rem;"));
}

#[test]
fn colors_default_to_active_palette() {
    let light = render(|| rsx! { SkeletonBlock {} });
    assert!(light.contains("--skeleton-bg: #f0f0f0;"));
    assert!(light.contains("--skeleton-highlight: #ffffff;"));

    let dark = render_with(config_with_theme("dark"), || rsx! { SkeletonBlock {} });
    assert!(dark.contains("--skeleton-bg: #2a2a2a;"));
    assert!(dark.contains("--skeleton-highlight: #404040;"));
}

#[test]
fn explicit_colors_override_palette() {
    let html = render(|| {
        rsx! {
            SkeletonBlock {
                background_color: "#123456".to_string(),
                highlight_color: "#abcdef".to_string(),
            }
        }
    });

    assert!(html.contains("--skeleton-bg: #123456;"));
    assert!(html.contains("--skeleton-highlight: #abcdef;"));
}

#[test]
fn unrecognized_animation_renders_static() {
    let html = render(|| {
        rsx! {
            SkeletonBlock { animation: AnimationKind::from_key("spin") }
        }
    });

    assert!(html.contains("data-animation=\"none\""));
}

#[test]
fn non_positive_speed_uses_default() {
    let html = render(|| rsx! { SkeletonBlock { speed: -2.0 } });
    assert!(html.contains("--skeleton-speed: 1.5s;"));
}

#[test]
fn caller_classes_merge_with_base() {
    let html = render(|| rsx! { SkeletonBlock { class: "hero", width: Length::px(320.0) } });

    assert!(html.contains("hero"));
    assert_eq!(widths(&html), vec!["320px".to_string()]);
}
