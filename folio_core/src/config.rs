//! Page configuration.
//!
//! Every section is optional; a missing key keeps its default. The landing
//! page embeds `folio.toml` at compile time and parses it with
//! [`PageConfig::load_or_default`].

use serde::Deserialize;
use tracing::warn;

use crate::error::FolioError;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub nav: NavConfig,
    pub scroll: ScrollConfig,
    pub anchors: AnchorConfig,
    pub reveal: RevealConfig,
    pub images: ImageConfig,
    pub token_mode: TokenModeConfig,
}

/// Mobile menu selectors and state class.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub toggle_selector: String,
    pub menu_selector: String,
    pub link_selector: String,
    /// Class carried by both the toggle and the menu while open.
    pub open_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".menu-toggle".into(),
            menu_selector: ".nav-menu".into(),
            link_selector: ".nav-menu a".into(),
            open_class: "active".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub top_nav_selector: String,
    pub scrolled_class: String,
    /// The top bar is "scrolled" strictly past this offset.
    pub scrolled_threshold: f64,
    pub section_selector: String,
    /// A section becomes current this many pixels before its top.
    pub section_margin: f64,
    pub link_selector: String,
    pub active_class: String,
    /// Wrap the scroll handler in a leading-edge debounce.
    pub debounce: bool,
    pub debounce_ms: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            top_nav_selector: ".top-nav".into(),
            scrolled_class: "scrolled".into(),
            scrolled_threshold: 100.0,
            section_selector: "section[id]".into(),
            section_margin: 150.0,
            link_selector: ".nav-menu a".into(),
            active_class: "active".into(),
            debounce: false,
            debounce_ms: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub anchor_selector: String,
    /// Height of the fixed header the target must clear.
    pub header_offset: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            anchor_selector: "a[href^=\"#\"]".into(),
            header_offset: 80.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    pub root_margin: String,
    pub visible_class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".section, .experience-item".into(),
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".into(),
            visible_class: "fade-in".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub deferred_attribute: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            deferred_attribute: "data-src".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TokenModeConfig {
    pub storage_key: String,
    pub enabled_value: String,
    /// Typed sequence that toggles token mode.
    pub trigger: String,
    pub exit_key: String,
    /// Elements whose text gets tokenized.
    pub text_selector: String,
    pub tokenized_class: String,
    pub token_class: String,
    pub palette_size: usize,
    /// Added to `<body>` while active.
    pub active_class: String,
    /// Added to `<html>` before first render when the flag is set.
    pub loading_class: String,
    pub counter_id: String,
    pub tokens_per_unit: f64,
    pub cost_per_unit: f64,
}

impl Default for TokenModeConfig {
    fn default() -> Self {
        Self {
            storage_key: "tokenMode".into(),
            enabled_value: "enabled".into(),
            trigger: "token".into(),
            exit_key: "Escape".into(),
            text_selector: "p, h1, h2, h3, h4, h5, h6, li, span, a, button, label".into(),
            tokenized_class: "tokenized".into(),
            token_class: "token".into(),
            palette_size: 5,
            active_class: "token-mode".into(),
            loading_class: "token-mode-loading".into(),
            counter_id: "token-counter".into(),
            tokens_per_unit: 750.0,
            cost_per_unit: 0.0001,
        }
    }
}

impl PageConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, FolioError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a TOML document, falling back to defaults when it is invalid.
    pub fn load_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                warn!("[folio][warn] {e}; using default page config");
                Self::default()
            }
        }
    }
}
