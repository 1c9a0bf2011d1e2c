/// Duration of the skeleton/content entry transition.
pub const TRANSITION_SECONDS: f32 = 0.3;

pub const DEFAULT_WRAPPER_LABEL: &str = "Loading content";

/// Animation delay for each of `count` staggered children, `step_ms` apart.
pub fn staggered_delays(step_ms: u64, count: usize) -> Vec<u64> {
    (0..count).map(|i| i as u64 * step_ms).collect()
}

/// Which tree a wrapper shows. Derived from the caller's `loading` flag on
/// every render; the wrapper holds no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Settled,
}

impl LoadPhase {
    pub fn from_loading(loading: bool) -> Self {
        if loading {
            LoadPhase::Loading
        } else {
            LoadPhase::Settled
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    /// Value of the `data-state` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPhase::Loading => "loading",
            LoadPhase::Settled => "settled",
        }
    }
}

/// Layout applied to the skeleton container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapperLayout {
    #[default]
    Block,
    Flex,
    Grid,
}

impl WrapperLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            WrapperLayout::Block => "block",
            WrapperLayout::Flex => "flex",
            WrapperLayout::Grid => "grid",
        }
    }

    /// Parse a layout key, falling back to `block`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "block" => WrapperLayout::Block,
            "flex" => WrapperLayout::Flex,
            "grid" => WrapperLayout::Grid,
            other => {
                tracing::debug!(key = other, "unknown wrapper layout, using block");
                WrapperLayout::Block
            }
        }
    }

    pub fn default_gap(&self) -> &'static str {
        match self {
            WrapperLayout::Block | WrapperLayout::Flex => "0.5rem",
            WrapperLayout::Grid => "1rem",
        }
    }
}

/// Pass-through presentation options. None of these affect which tree is
/// shown.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapperStyle {
    pub layout: WrapperLayout,
    pub gap: Option<String>,
    /// CSS `display` of a block-layout container. Grid and flex ignore it.
    pub display: Option<String>,
    pub grid_columns: String,
    pub mobile_grid_columns: String,
    pub flex_direction: String,
    pub mobile_flex_direction: String,
    pub align_items: String,
    pub justify_content: String,
    pub flex_wrap: String,
}

impl Default for WrapperStyle {
    fn default() -> Self {
        Self {
            layout: WrapperLayout::Block,
            gap: None,
            display: None,
            grid_columns: "repeat(auto-fit, minmax(200px, 1fr))".to_string(),
            mobile_grid_columns: "1fr".to_string(),
            flex_direction: "row".to_string(),
            mobile_flex_direction: "column".to_string(),
            align_items: "stretch".to_string(),
            justify_content: "flex-start".to_string(),
            flex_wrap: "nowrap".to_string(),
        }
    }
}

impl WrapperStyle {
    pub fn gap(&self) -> &str {
        self.gap.as_deref().unwrap_or(self.layout.default_gap())
    }

    /// Inline custom properties read by the wrapper stylesheet.
    pub fn style(&self) -> String {
        let mut style = format!("--skeleton-gap: {};", self.gap());
        match self.layout {
            WrapperLayout::Block => {
                if let Some(display) = &self.display {
                    style.push_str(&format!(" --skeleton-display: {display};"));
                }
            }
            WrapperLayout::Grid => style.push_str(&format!(
                " --skeleton-grid-columns: {}; --skeleton-mobile-grid-columns: {};",
                self.grid_columns, self.mobile_grid_columns
            )),
            WrapperLayout::Flex => style.push_str(&format!(
                " --skeleton-flex-direction: {}; --skeleton-mobile-flex-direction: {}; \
                 --skeleton-align-items: {}; --skeleton-justify-content: {}; \
                 --skeleton-flex-wrap: {};",
                self.flex_direction,
                self.mobile_flex_direction,
                self.align_items,
                self.justify_content,
                self.flex_wrap
            )),
        }
        style
    }
}
