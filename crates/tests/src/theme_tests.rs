use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use skeleton_types::{SkeletonConfig, DEFAULT_STORAGE_KEY};
use skeleton_ui::{
    use_skeleton_theme, LoadFuture, MemoryStorage, SkeletonBlock, SkeletonTheme, ThemeProvider,
    ThemeStorage, ThemeStorageHandle,
};
use tokio::sync::Notify;

use crate::common::{config_with_theme, mount, render, render_with, settle};

thread_local! {
    static THEME: Cell<Option<SkeletonTheme>> = const { Cell::new(None) };
}

/// Block that hands its theme context out to the test.
#[component]
fn ThemedBlock() -> Element {
    let theme = use_skeleton_theme();
    THEME.with(|slot| slot.set(Some(theme)));

    rsx! {
        SkeletonBlock {}
    }
}

fn themed_block() -> Element {
    rsx! {
        ThemedBlock {}
    }
}

fn theme() -> SkeletonTheme {
    THEME.with(|slot| slot.get()).expect("ThemedBlock has rendered")
}

/// Memory storage whose first load answers only once `gate` is notified.
struct GatedStorage {
    inner: MemoryStorage,
    gate: Rc<Notify>,
}

impl ThemeStorage for GatedStorage {
    fn load(&self, key: &str) -> LoadFuture {
        let saved = self.inner.get(key);
        let gate = self.gate.clone();
        Box::pin(async move {
            gate.notified().await;
            saved
        })
    }

    fn save(&self, key: &str, name: &str) {
        self.inner.save(key, name);
    }

    fn apply(&self, name: &str) {
        self.inner.apply(name);
    }
}

const CUSTOM: &str = r##"
[theme]
default = "sunset"

[theme.palettes.sunset]
background_color = "#ffccaa"
highlight_color = "#ffeedd"
text_color = "#331100"
border_color = "#ff8844"
"##;

#[test]
fn unknown_theme_renders_light_palette() {
    let html = render_with(config_with_theme("purple"), || rsx! { SkeletonBlock {} });

    assert!(html.contains("--skeleton-bg: #f0f0f0;"));
    assert!(html.contains("--skeleton-highlight: #ffffff;"));
}

#[test]
fn builtin_palettes_reach_blocks() {
    let neon = render_with(config_with_theme("neon"), || rsx! { SkeletonBlock {} });
    assert!(neon.contains("--skeleton-bg: #1a1a2e;"));

    let ocean = render_with(config_with_theme("ocean"), || rsx! { SkeletonBlock {} });
    assert!(ocean.contains("--skeleton-bg: #e3f2fd;"));
}

#[test]
fn configured_custom_palette_is_used() {
    let config = SkeletonConfig::from_toml_str(CUSTOM).unwrap();
    let html = render_with(config, || rsx! { SkeletonBlock {} });

    assert!(html.contains("--skeleton-bg: #ffccaa;"));
    assert!(html.contains("--skeleton-highlight: #ffeedd;"));
}

#[test]
fn initial_theme_overrides_configured_default() {
    let html = render(|| {
        rsx! {
            ThemeProvider {
                initial_theme: "dark".to_string(),
                storage: ThemeStorageHandle::memory(MemoryStorage::new()),
                SkeletonBlock {}
            }
        }
    });

    assert!(html.contains("--skeleton-bg: #2a2a2a;"));
}

#[test]
fn nearest_provider_wins() {
    let html = render_with(config_with_theme("dark"), || {
        rsx! {
            SkeletonBlock { class: "outer" }
            ThemeProvider {
                config: crate::common::config_with_theme("ocean"),
                storage: ThemeStorageHandle::memory(MemoryStorage::new()),
                SkeletonBlock { class: "inner" }
            }
        }
    });

    assert!(html.contains("--skeleton-bg: #2a2a2a;"));
    assert!(html.contains("--skeleton-bg: #e3f2fd;"));
}

#[tokio::test]
async fn memory_storage_loads_saved_name() {
    let storage = MemoryStorage::seeded(DEFAULT_STORAGE_KEY, "ocean");

    assert_eq!(
        storage.load(DEFAULT_STORAGE_KEY).await.as_deref(),
        Some("ocean")
    );
    assert_eq!(storage.load("other-key").await, None);
}

#[tokio::test]
async fn storage_handle_forwards_to_backend() {
    let backend = MemoryStorage::new();
    let handle = ThemeStorageHandle::memory(backend.clone());

    handle.save(DEFAULT_STORAGE_KEY, "neon");

    assert_eq!(backend.get(DEFAULT_STORAGE_KEY).as_deref(), Some("neon"));
    assert_eq!(
        handle.load(DEFAULT_STORAGE_KEY).await.as_deref(),
        Some("neon")
    );
}

#[test]
fn set_active_rerenders_mounted_skeletons() {
    let storage = MemoryStorage::new();
    let mut dom = mount(
        SkeletonConfig::default(),
        ThemeStorageHandle::memory(storage.clone()),
        themed_block,
    );
    settle(&mut dom);
    assert!(dioxus_ssr::render(&dom).contains("--skeleton-bg: #f0f0f0;"));

    dom.in_runtime(|| theme().set_active("dark"));
    settle(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("--skeleton-bg: #2a2a2a;"));
    assert!(!html.contains("--skeleton-bg: #f0f0f0;"));
    assert_eq!(storage.get(DEFAULT_STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(storage.applied().as_deref(), Some("dark"));
}

#[test]
fn toggle_switches_between_light_and_dark() {
    let mut dom = mount(
        config_with_theme("ocean"),
        ThemeStorageHandle::memory(MemoryStorage::new()),
        themed_block,
    );
    settle(&mut dom);

    dom.in_runtime(|| theme().toggle());
    settle(&mut dom);
    assert_eq!(dom.in_runtime(|| theme().active_name()), "light");

    dom.in_runtime(|| theme().toggle());
    settle(&mut dom);
    assert_eq!(dom.in_runtime(|| theme().active_name()), "dark");
    assert!(dioxus_ssr::render(&dom).contains("--skeleton-bg: #2a2a2a;"));
}

#[test]
fn persisted_name_is_restored_on_mount() {
    let storage = MemoryStorage::seeded(DEFAULT_STORAGE_KEY, "ocean");
    let mut dom = mount(
        SkeletonConfig::default(),
        ThemeStorageHandle::memory(storage.clone()),
        themed_block,
    );
    assert!(dioxus_ssr::render(&dom).contains("--skeleton-bg: #f0f0f0;"));

    settle(&mut dom);

    assert!(dioxus_ssr::render(&dom).contains("--skeleton-bg: #e3f2fd;"));
    assert_eq!(storage.applied().as_deref(), Some("ocean"));
}

#[test]
fn late_storage_answer_keeps_user_choice() {
    let inner = MemoryStorage::seeded(DEFAULT_STORAGE_KEY, "ocean");
    let gate = Rc::new(Notify::new());
    let storage = ThemeStorageHandle::new(GatedStorage {
        inner: inner.clone(),
        gate: gate.clone(),
    });
    let mut dom = mount(SkeletonConfig::default(), storage, themed_block);
    settle(&mut dom);

    dom.in_runtime(|| theme().set_active("dark"));
    settle(&mut dom);
    gate.notify_one();
    settle(&mut dom);

    assert_eq!(dom.in_runtime(|| theme().active_name()), "dark");
    assert_eq!(inner.get(DEFAULT_STORAGE_KEY).as_deref(), Some("dark"));
    assert!(dioxus_ssr::render(&dom).contains("--skeleton-bg: #2a2a2a;"));
}

#[test]
fn disabled_persistence_still_applies_theme() {
    let mut config = SkeletonConfig::default();
    config.theme.persist = false;
    let storage = MemoryStorage::new();
    let mut dom = mount(config, ThemeStorageHandle::memory(storage.clone()), themed_block);
    settle(&mut dom);
    assert_eq!(storage.applied().as_deref(), Some("light"));

    dom.in_runtime(|| theme().set_active("neon"));
    settle(&mut dom);

    assert_eq!(storage.applied().as_deref(), Some("neon"));
    assert_eq!(storage.get(DEFAULT_STORAGE_KEY), None);
}

#[component]
fn WithoutProvider() -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_: ErrorContext| rsx! { p { "theme provider missing" } },
            SkeletonBlock {}
        }
    }
}

#[test]
fn skeleton_without_provider_fails_loudly() {
    let mut dom = VirtualDom::new(WithoutProvider);
    dom.rebuild_in_place();
    settle(&mut dom);

    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("theme provider missing"));
    assert!(!html.contains("role=\"progressbar\""));
}
