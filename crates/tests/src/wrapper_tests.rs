use std::cell::Cell;

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use skeleton_types::{SkeletonConfig, WrapperLayout};
use skeleton_ui::{
    MemoryStorage, SkeletonCircle, SkeletonRect, SkeletonText, SkeletonWrapper,
    ThemeStorageHandle, WithSkeleton, WrappedComponent,
};

use crate::common::{count, mount, render, settle};

thread_local! {
    static LOADING: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
}

fn loading_flag() -> Signal<bool> {
    LOADING.with(|slot| slot.get()).expect("ToggledWrapper has rendered")
}

/// Wrapper whose `loading` flag lives in a signal the test can flip.
#[component]
fn ToggledWrapper() -> Element {
    let loading = use_signal(|| true);
    LOADING.with(|slot| slot.set(Some(loading)));

    rsx! {
        SkeletonWrapper { loading: loading(), skeleton: rsx! { SkeletonText {} },
            p { "Real content" }
        }
    }
}

fn toggled_wrapper() -> Element {
    rsx! {
        ToggledWrapper {}
    }
}

fn loading_with_skeleton() -> Element {
    rsx! {
        SkeletonWrapper { loading: true, skeleton: rsx! { SkeletonText {} },
            p { "Real content" }
        }
    }
}

fn settled_with_skeleton() -> Element {
    rsx! {
        SkeletonWrapper { loading: false, skeleton: rsx! { SkeletonText {} },
            p { "Real content" }
        }
    }
}

fn render_wrapper(loading: bool) -> String {
    if loading {
        render(loading_with_skeleton)
    } else {
        render(settled_with_skeleton)
    }
}

#[test]
fn loading_shows_only_the_skeleton() {
    let html = render_wrapper(true);

    assert!(html.contains("role=\"status\""));
    assert!(html.contains("aria-live=\"polite\""));
    assert!(html.contains("aria-busy=\"true\""));
    assert!(html.contains("aria-label=\"Loading content\""));
    assert!(html.contains("data-state=\"loading\""));
    assert!(html.contains("role=\"progressbar\""));
    assert!(!html.contains("Real content"));
}

#[test]
fn settled_shows_only_the_content() {
    let html = render_wrapper(false);

    assert!(html.contains("Real content"));
    assert!(html.contains("data-state=\"settled\""));
    assert!(html.contains("aria-busy=\"false\""));
    assert_eq!(count(&html, "role=\"progressbar\""), 0);
    assert_eq!(count(&html, "role=\"status\""), 0);
}

#[test]
fn fallback_replaces_children_once_settled() {
    let html = render(|| {
        rsx! {
            SkeletonWrapper { loading: false, fallback: rsx! { p { "Nothing here" } },
                p { "Real content" }
            }
        }
    });

    assert!(html.contains("Nothing here"));
    assert!(!html.contains("Real content"));
}

#[test]
fn children_double_as_skeleton_without_explicit_tree() {
    let html = render(|| {
        rsx! {
            SkeletonWrapper { loading: true, label: "Loading profile".to_string(),
                SkeletonText { line_count: 2 }
            }
        }
    });

    assert!(html.contains("aria-label=\"Loading profile\""));
    assert_eq!(count(&html, "role=\"progressbar\""), 2);
}

#[test]
fn even_number_of_toggles_returns_to_original_tree() {
    let mut dom = mount(
        SkeletonConfig::default(),
        ThemeStorageHandle::memory(MemoryStorage::new()),
        toggled_wrapper,
    );
    settle(&mut dom);
    let original = dioxus_ssr::render(&dom);
    assert!(original.contains("data-state=\"loading\""));

    let mut states = Vec::new();
    for _ in 0..4 {
        dom.in_runtime(|| {
            let mut loading = loading_flag();
            let next = !*loading.peek();
            loading.set(next);
        });
        settle(&mut dom);
        states.push(dioxus_ssr::render(&dom).contains("data-state=\"loading\""));
    }

    assert_eq!(states, vec![false, true, false, true]);
    let toggled = dioxus_ssr::render(&dom);
    assert!(!toggled.contains("Real content"));
    assert_eq!(
        count(&toggled, "role=\"progressbar\""),
        count(&original, "role=\"progressbar\"")
    );
}

#[test]
fn grid_layout_passes_through_columns() {
    let html = render(|| {
        rsx! {
            SkeletonWrapper {
                loading: true,
                layout: WrapperLayout::Grid,
                grid_columns: "repeat(3, 1fr)".to_string(),
                SkeletonText {}
            }
        }
    });

    assert!(html.contains("data-layout=\"grid\""));
    assert!(html.contains("--skeleton-gap: 1rem;"));
    assert!(html.contains("--skeleton-grid-columns: repeat(3, 1fr);"));
}

#[test]
fn flex_layout_passes_through_alignment() {
    let html = render(|| {
        rsx! {
            SkeletonWrapper {
                loading: true,
                layout: WrapperLayout::Flex,
                gap: "2rem".to_string(),
                align_items: "center".to_string(),
                SkeletonText {}
            }
        }
    });

    assert!(html.contains("data-layout=\"flex\""));
    assert!(html.contains("--skeleton-gap: 2rem;"));
    assert!(html.contains("--skeleton-align-items: center;"));
    assert!(html.contains("--skeleton-mobile-flex-direction: column;"));
}

#[test]
fn animated_children_are_staggered() {
    let html = render(|| {
        rsx! {
            SkeletonWrapper {
                loading: true,
                animate_children: true,
                stagger_delay_ms: 150,
                skeleton_items: vec![
                    rsx! { SkeletonCircle {} },
                    rsx! { SkeletonText {} },
                    rsx! { SkeletonRect {} },
                ],
                p { "Real content" }
            }
        }
    });

    assert_eq!(count(&html, "skeleton-wrapper-item"), 3);
    assert!(html.contains("--skeleton-delay: 0ms;"));
    assert!(html.contains("--skeleton-delay: 150ms;"));
    assert!(html.contains("--skeleton-delay: 300ms;"));
    assert!(!html.contains("Real content"));
}

#[test]
fn skeleton_items_without_animation_share_zero_delay() {
    let html = render(|| {
        rsx! {
            SkeletonWrapper {
                loading: true,
                stagger_delay_ms: 150,
                skeleton_items: vec![rsx! { SkeletonText {} }, rsx! { SkeletonText {} }],
                p { "Real content" }
            }
        }
    });

    assert_eq!(count(&html, "--skeleton-delay: 0ms;"), 2);
    assert!(!html.contains("--skeleton-delay: 150ms;"));
}

#[test]
fn display_and_transition_pass_through() {
    let loading = render(|| {
        rsx! {
            SkeletonWrapper { loading: true, display: "inline-block".to_string(),
                SkeletonText {}
            }
        }
    });
    assert!(loading.contains("--skeleton-display: inline-block;"));
    assert!(loading.contains("data-transition=\"fade\""));

    let settled = render(|| {
        rsx! {
            SkeletonWrapper { loading: false, fade_out: false,
                p { "Real content" }
            }
        }
    });
    assert!(settled.contains("data-transition=\"none\""));
    assert!(settled.contains("Real content"));
}

fn profile_view() -> Element {
    rsx! {
        p { "Jane Doe" }
    }
}

#[test]
fn with_skeleton_wraps_component() {
    let loading = render(|| {
        rsx! {
            WithSkeleton {
                loading: true,
                content: WrappedComponent(profile_view),
                skeleton: rsx! { SkeletonText { line_count: 2 } },
                label: "Loading profile".to_string(),
            }
        }
    });
    assert!(loading.contains("aria-label=\"Loading profile\""));
    assert!(loading.contains("Loading paragraph with 2 lines"));
    assert!(!loading.contains("Jane Doe"));

    let settled = render(|| {
        rsx! {
            WithSkeleton { loading: false, content: WrappedComponent(profile_view) }
        }
    });
    assert!(settled.contains("Jane Doe"));
    assert!(settled.contains("data-state=\"settled\""));
}
