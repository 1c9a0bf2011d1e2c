use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use skeleton_types::SkeletonConfig;
use skeleton_ui::{MemoryStorage, ThemeProvider, ThemeStorageHandle};

#[derive(Props, Clone)]
pub struct HarnessProps {
    config: SkeletonConfig,
    storage: ThemeStorageHandle,
    content: fn() -> Element,
}

impl PartialEq for HarnessProps {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.storage == other.storage
            && std::ptr::fn_addr_eq(self.content, other.content)
    }
}

/// Root component: `content` rendered below a provider.
#[component]
fn Harness(props: HarnessProps) -> Element {
    let content = props.content;

    rsx! {
        ThemeProvider { config: props.config.clone(), storage: props.storage.clone(),
            {content()}
        }
    }
}

/// Build and rebuild a dom rendering `content` below a provider. Effects and
/// tasks have not run yet; see [`settle`].
pub fn mount(
    config: SkeletonConfig,
    storage: ThemeStorageHandle,
    content: fn() -> Element,
) -> VirtualDom {
    let mut dom = VirtualDom::new_with_props(
        Harness,
        HarnessProps {
            config,
            storage,
            content,
        },
    );
    dom.rebuild_in_place();
    dom
}

/// Run queued effects, ready tasks and dirty scopes until nothing is left.
pub fn settle(dom: &mut VirtualDom) {
    for _ in 0..8 {
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Render `content` to HTML under the given configuration.
pub fn render_with(config: SkeletonConfig, content: fn() -> Element) -> String {
    let dom = mount(
        config,
        ThemeStorageHandle::memory(MemoryStorage::new()),
        content,
    );
    dioxus_ssr::render(&dom)
}

/// Render `content` to HTML under the default (light) theme.
pub fn render(content: fn() -> Element) -> String {
    render_with(SkeletonConfig::default(), content)
}

/// Configuration whose default palette is `theme`.
pub fn config_with_theme(theme: &str) -> SkeletonConfig {
    let mut config = SkeletonConfig::default();
    config.theme.default = theme.to_string();
    config
}

/// Number of non-overlapping occurrences of `needle`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Every value of `--skeleton-width` in document order.
pub fn widths(html: &str) -> Vec<String> {
    html.split("--skeleton-width: ")
        .skip(1)
        .filter_map(|rest| rest.split(';').next())
        .map(str::to_string)
        .collect()
}
