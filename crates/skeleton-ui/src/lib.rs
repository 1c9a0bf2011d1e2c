//! Dioxus skeleton placeholders: themed primitives, preset compositions
//! and a loading/content wrapper.

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::{
    use_skeleton_palette, use_skeleton_theme, LoadFuture, LocalStorage, MemoryStorage,
    SkeletonTheme, ThemeProvider, ThemeStorage, ThemeStorageHandle,
};

// The model types appear in every component's props.
pub use skeleton_types as types;
pub use skeleton_types::{
    AnimationKind, AspectRatio, CircleSize, CircleVariant, FontSize, Length, RectVariant,
    SkeletonConfig, TextVariant, ThemePalette, WidthPolicy, WrapperLayout,
};
