use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use dioxus::prelude::*;
use skeleton_types::{SkeletonConfig, ThemePalette, ThemeStore};

/// Boxed future returned by [`ThemeStorage::load`].
pub type LoadFuture = Pin<Box<dyn Future<Output = Option<String>>>>;

/// A persistent string store for the active theme name.
pub trait ThemeStorage {
    fn load(&self, key: &str) -> LoadFuture;
    fn save(&self, key: &str, name: &str);

    /// Reflect the active name on the host document. Runs whether or not
    /// persistence is enabled.
    fn apply(&self, _name: &str) {}
}

/// Browser `localStorage`. Applying stamps `data-theme` on `<html>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

/// Encode a value as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

impl ThemeStorage for LocalStorage {
    fn load(&self, key: &str) -> LoadFuture {
        let script = format!(
            r#"
            try {{
                return localStorage.getItem({key});
            }} catch(e) {{
                return null;
            }}
            "#,
            key = js_string(key),
        );
        Box::pin(async move {
            match document::eval(&script).join::<Option<String>>().await {
                Ok(saved) => saved,
                Err(err) => {
                    tracing::debug!(error = ?err, "could not read persisted skeleton theme");
                    None
                }
            }
        })
    }

    fn save(&self, key: &str, name: &str) {
        document::eval(&format!(
            r#"
            try {{ localStorage.setItem({key}, {name}); }} catch(e) {{}}
            "#,
            key = js_string(key),
            name = js_string(name),
        ));
    }

    fn apply(&self, name: &str) {
        document::eval(&format!(
            "document.documentElement.setAttribute('data-theme', {name});",
            name = js_string(name),
        ));
    }
}

/// In-process storage, for tests and non-browser renderers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
    applied: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage holding `name` under `key` already.
    pub fn seeded(key: &str, name: &str) -> Self {
        let storage = Self::new();
        storage.save(key, name);
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Name most recently applied to the document.
    pub fn applied(&self) -> Option<String> {
        self.applied.borrow().clone()
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> LoadFuture {
        let saved = self.get(key);
        Box::pin(async move { saved })
    }

    fn save(&self, key: &str, name: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), name.to_string());
    }

    fn apply(&self, name: &str) {
        *self.applied.borrow_mut() = Some(name.to_string());
    }
}

/// Shared handle to a storage backend, usable as a component prop.
#[derive(Clone)]
pub struct ThemeStorageHandle(Rc<dyn ThemeStorage>);

impl ThemeStorageHandle {
    pub fn new(storage: impl ThemeStorage + 'static) -> Self {
        Self(Rc::new(storage))
    }

    pub fn local() -> Self {
        Self::new(LocalStorage)
    }

    pub fn memory(storage: MemoryStorage) -> Self {
        Self::new(storage)
    }

    pub fn load(&self, key: &str) -> LoadFuture {
        self.0.load(key)
    }

    pub fn save(&self, key: &str, name: &str) {
        self.0.save(key, name);
    }

    pub fn apply(&self, name: &str) {
        self.0.apply(name);
    }
}

impl Default for ThemeStorageHandle {
    fn default() -> Self {
        Self::local()
    }
}

impl PartialEq for ThemeStorageHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone)]
struct Persistence {
    storage: ThemeStorageHandle,
    key: String,
    enabled: bool,
    /// Set once the user picks a theme. A late storage answer is ignored.
    touched: bool,
}

/// Theme state provided as context by [`ThemeProvider`].
///
/// Every skeleton reads its palette through this handle, so a write to the
/// store re-renders all mounted skeletons.
#[derive(Clone, Copy)]
pub struct SkeletonTheme {
    store: Signal<ThemeStore>,
    persistence: CopyValue<Persistence>,
}

impl SkeletonTheme {
    /// Palette for the active theme.
    pub fn current(&self) -> ThemePalette {
        self.store.read().current().clone()
    }

    /// Palette for `name`, or the light palette when it is unknown.
    pub fn resolve(&self, name: &str) -> ThemePalette {
        self.store.read().resolve(name).clone()
    }

    pub fn active_name(&self) -> String {
        self.store.read().active_name().to_string()
    }

    pub fn names(&self) -> Vec<String> {
        self.store.read().names().map(str::to_string).collect()
    }

    /// Switch the active palette and persist the choice.
    pub fn set_active(&mut self, name: &str) {
        self.persistence.write().touched = true;
        if self.store.peek().active_name() == name {
            return;
        }
        self.store.write().set_active(name);
        tracing::info!(theme = name, "skeleton theme changed");
        self.persist(name);
    }

    /// `light` becomes `dark`; anything else becomes `light`.
    pub fn toggle(&mut self) {
        self.persistence.write().touched = true;
        let next = self.store.write().toggle().to_string();
        tracing::info!(theme = %next, "skeleton theme toggled");
        self.persist(&next);
    }

    /// Add or replace a named palette.
    pub fn register(&mut self, name: &str, palette: ThemePalette) {
        self.store.write().register(name, palette);
    }

    /// Apply a persisted name once storage has answered, unless the user has
    /// already chosen one. The resulting name is written back so the document
    /// root carries `data-theme`.
    fn hydrate(&mut self, saved: Option<String>) {
        if self.persistence.peek().touched {
            tracing::debug!("skeleton theme already chosen, ignoring persisted name");
            return;
        }
        let name = match saved {
            Some(saved) if saved != self.store.peek().active_name() => {
                tracing::debug!(theme = %saved, "restoring persisted skeleton theme");
                self.store.write().set_active(&saved);
                saved
            }
            _ => self.store.peek().active_name().to_string(),
        };
        self.persist(&name);
    }

    fn persist(&self, name: &str) {
        let persistence = self.persistence.read();
        persistence.storage.apply(name);
        if persistence.enabled {
            persistence.storage.save(&persistence.key, name);
        }
    }
}

/// Provide [`SkeletonTheme`] to every skeleton below it.
///
/// The initial palette is `initial_theme`, else the configured default. A
/// name found in storage replaces it once loaded.
#[component]
pub fn ThemeProvider(
    #[props(default)] config: SkeletonConfig,
    #[props(default)] initial_theme: Option<String>,
    #[props(default)] storage: ThemeStorageHandle,
    children: Element,
) -> Element {
    let theme = use_context_provider(|| SkeletonTheme {
        store: Signal::new(config.build_store(initial_theme.as_deref())),
        persistence: CopyValue::new(Persistence {
            storage: storage.clone(),
            key: config.theme.storage_key.clone(),
            enabled: config.theme.persist,
            touched: false,
        }),
    });

    use_effect(move || {
        let mut theme = theme;
        spawn(async move {
            let (storage, key) = {
                let persistence = theme.persistence.read();
                (persistence.storage.clone(), persistence.key.clone())
            };
            let saved = storage.load(&key).await;
            theme.hydrate(saved);
        });
    });

    rsx! {
        {children}
    }
}

/// The theme context. Panics outside a [`ThemeProvider`].
pub fn use_skeleton_theme() -> SkeletonTheme {
    match try_use_context::<SkeletonTheme>() {
        Some(theme) => theme,
        None => panic!("skeleton components must be rendered inside a ThemeProvider"),
    }
}

/// Active palette, subscribing the calling component to theme changes.
pub fn use_skeleton_palette() -> ThemePalette {
    use_skeleton_theme().current()
}
