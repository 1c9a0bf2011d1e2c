use dioxus::prelude::*;
use skeleton_types::{AnimationKind, CircleSize, CircleVariant, Length};
use skeleton_ui::{SkeletonAvatar, SkeletonCircle, SkeletonDot, SkeletonIcon};

use crate::common::{config_with_theme, count, render, render_with};

#[test]
fn default_circle_is_medium_avatar() {
    let html = render(|| rsx! { SkeletonCircle {} });

    assert!(html.contains("data-variant=\"avatar\""));
    assert!(html.contains("data-size=\"md\""));
    assert!(html.contains("--skeleton-width: 2.5rem;"));
    assert!(html.contains("--skeleton-height: 2.5rem;"));
    assert!(html.contains("--skeleton-radius: 50%;"));
    assert!(html.contains("aria-label=\"Loading profile picture\""));
}

#[test]
fn size_tier_sets_diameter() {
    let html = render(|| rsx! { SkeletonCircle { size: CircleSize::Xxl } });
    assert!(html.contains("--skeleton-width: 6rem;"));
    assert!(html.contains("data-size=\"2xl\""));
}

#[test]
fn explicit_diameter_overrides_tier() {
    let html = render(|| {
        rsx! {
            SkeletonCircle { size: CircleSize::Xl, diameter: Length::px(42.0) }
        }
    });

    assert!(html.contains("--skeleton-width: 42px;"));
    assert!(html.contains("--skeleton-height: 42px;"));
}

#[test]
fn dot_forces_extra_small() {
    let html = render(|| rsx! { SkeletonDot { size: CircleSize::Lg } });

    assert!(html.contains("data-variant=\"dot\""));
    assert!(html.contains("--skeleton-width: 1.5rem;"));
    assert!(html.contains("aria-label=\"Loading indicator\""));
}

#[test]
fn icon_defaults_to_small() {
    let html = render(|| rsx! { SkeletonIcon {} });

    assert!(html.contains("--skeleton-width: 2rem;"));
    assert!(html.contains("aria-label=\"Loading icon\""));
}

#[test]
fn badge_is_cut_out_of_resolved_background() {
    let html = render_with(config_with_theme("ocean"), || {
        rsx! {
            SkeletonAvatar { show_badge: true }
        }
    });

    assert_eq!(count(&html, "skeleton-circle-badge"), 1);
    assert!(html.contains("--skeleton-badge-color: #10B981;"));
    assert!(html.contains("--skeleton-badge-border: #e3f2fd;"));
    assert!(html.contains("--skeleton-badge-size: 25%;"));
    assert!(html.contains("data-pulse=\"false\""));
}

#[test]
fn badge_pulses_only_with_pulse_animation() {
    let html = render(|| {
        rsx! {
            SkeletonAvatar {
                show_badge: true,
                badge_color: "#ff0000".to_string(),
                animation: AnimationKind::Pulse,
            }
        }
    });

    assert!(html.contains("data-pulse=\"true\""));
    assert!(html.contains("--skeleton-badge-color: #ff0000;"));
}

#[test]
fn badge_is_avatar_only() {
    let html = render(|| {
        rsx! {
            SkeletonCircle { variant: CircleVariant::Icon, show_badge: true }
        }
    });

    assert_eq!(count(&html, "skeleton-circle-badge"), 0);
}

#[test]
fn no_badge_unless_requested() {
    let html = render(|| rsx! { SkeletonAvatar {} });
    assert_eq!(count(&html, "skeleton-circle-badge"), 0);
}
