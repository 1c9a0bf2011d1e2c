use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the palette every unknown name resolves to.
pub const FALLBACK_THEME: &str = "light";

/// Concrete colors consumed by every skeleton primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background_color: String,
    pub highlight_color: String,
    pub text_color: String,
    pub border_color: String,
}

impl ThemePalette {
    pub fn new(
        background_color: impl Into<String>,
        highlight_color: impl Into<String>,
        text_color: impl Into<String>,
        border_color: impl Into<String>,
    ) -> Self {
        Self {
            background_color: background_color.into(),
            highlight_color: highlight_color.into(),
            text_color: text_color.into(),
            border_color: border_color.into(),
        }
    }

    /// Name of the first empty color field, if any.
    pub fn first_empty_field(&self) -> Option<&'static str> {
        [
            ("background_color", &self.background_color),
            ("highlight_color", &self.highlight_color),
            ("text_color", &self.text_color),
            ("border_color", &self.border_color),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// Palettes shipped with the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinTheme {
    #[default]
    Light,
    Dark,
    Neon,
    Ocean,
}

/// All built-in palettes in display order.
pub const ALL_BUILTINS: &[BuiltinTheme] = &[
    BuiltinTheme::Light,
    BuiltinTheme::Dark,
    BuiltinTheme::Neon,
    BuiltinTheme::Ocean,
];

impl BuiltinTheme {
    /// Internal key used for storage and lookups.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinTheme::Light => "light",
            BuiltinTheme::Dark => "dark",
            BuiltinTheme::Neon => "neon",
            BuiltinTheme::Ocean => "ocean",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            BuiltinTheme::Light => "Light",
            BuiltinTheme::Dark => "Dark",
            BuiltinTheme::Neon => "Neon",
            BuiltinTheme::Ocean => "Ocean",
        }
    }

    /// Parse a built-in key. Custom names return `None`.
    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "light" => Some(BuiltinTheme::Light),
            "dark" => Some(BuiltinTheme::Dark),
            "neon" => Some(BuiltinTheme::Neon),
            "ocean" => Some(BuiltinTheme::Ocean),
            _ => None,
        }
    }

    pub fn palette(&self) -> ThemePalette {
        match self {
            BuiltinTheme::Light => ThemePalette::new("#f0f0f0", "#ffffff", "#333333", "#e0e0e0"),
            BuiltinTheme::Dark => ThemePalette::new("#2a2a2a", "#404040", "#ffffff", "#444444"),
            BuiltinTheme::Neon => ThemePalette::new("#1a1a2e", "#16213e", "#00ff88", "#00ff88"),
            BuiltinTheme::Ocean => ThemePalette::new("#e3f2fd", "#ffffff", "#1565c0", "#90caf9"),
        }
    }
}

/// Named palettes plus the currently active selection.
///
/// Lookups never fail: an unknown name resolves to the `light` palette.
/// The active name is stored as given, so a custom palette registered
/// after it was selected takes effect on the next resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeStore {
    palettes: BTreeMap<String, ThemePalette>,
    fallback: ThemePalette,
    active: String,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore {
    /// A store holding the built-in palettes with `light` active.
    pub fn new() -> Self {
        let palettes = ALL_BUILTINS
            .iter()
            .map(|theme| (theme.as_str().to_string(), theme.palette()))
            .collect();
        Self {
            palettes,
            fallback: BuiltinTheme::Light.palette(),
            active: FALLBACK_THEME.to_string(),
        }
    }

    pub fn with_active(name: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.active = name.into();
        store
    }

    /// Add or replace a named palette.
    pub fn register(&mut self, name: impl Into<String>, palette: ThemePalette) {
        let name = name.into();
        if name == FALLBACK_THEME {
            self.fallback = palette.clone();
        }
        self.palettes.insert(name, palette);
    }

    /// Look up a palette by name, falling back to `light`.
    pub fn resolve(&self, name: &str) -> &ThemePalette {
        match self.palettes.get(name) {
            Some(palette) => palette,
            None => {
                tracing::debug!(name, "unknown theme, falling back to {FALLBACK_THEME}");
                &self.fallback
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.palettes.contains_key(name)
    }

    /// Select the active palette. Returns whether the selection changed.
    pub fn set_active(&mut self, name: &str) -> bool {
        if self.active == name {
            return false;
        }
        if !self.contains(name) {
            tracing::debug!(name, "activating unknown theme, colors fall back to {FALLBACK_THEME}");
        }
        self.active = name.to_string();
        true
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    /// Palette for the active name.
    pub fn current(&self) -> &ThemePalette {
        self.resolve(&self.active)
    }

    /// Flip between `light` and `dark`; any other name goes to `light`.
    pub fn toggle(&mut self) -> &str {
        let next = if self.active == FALLBACK_THEME {
            BuiltinTheme::Dark.as_str()
        } else {
            FALLBACK_THEME
        };
        self.set_active(next);
        &self.active
    }

    /// Registered palette names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }
}
