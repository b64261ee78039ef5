//! Mode-aware colors - light/dark palette synthesis for utility-CSS themes.
//!
//! Themes often define a color twice, once per appearance mode:
//!
//! ```text
//! colors: { surface: { light: "#ffffff", dark: "#111111" } }
//! ```
//!
//! This crate finds those pairs and adds a single semantic color
//! (`surface`) that switches automatically. The switch happens through CSS
//! custom properties: the light values are declared under `:root`, the dark
//! values under a dark-mode media query or selector, and the semantic color
//! refers to the variables instead of a literal value.
//!
//! # Quick Start
//!
//! ```rust
//! use mode_aware_colors::{with_mode_aware_colors, Config, Options};
//! use serde_json::json;
//!
//! let config = Config::from_value(json!({
//!     "darkMode": "class",
//!     "theme": {
//!         "colors": { "surface": { "light": "#ffffff", "dark": "#111111" } }
//!     },
//! })).unwrap();
//!
//! let config = with_mode_aware_colors(config, &Options::default()).unwrap();
//!
//! let colors = config.theme.as_ref().unwrap().colors.as_ref().unwrap();
//! assert_eq!(colors.color("surface-light"), Some("#ffffff"));
//! assert_eq!(
//!     colors.get("surface").unwrap().resolve(None),
//!     "rgb(var(--color-surface) / var(--opacity-surface, 1))"
//! );
//!
//! assert_eq!(
//!     config.base_styles().unwrap().to_css(),
//!     ":root {\n  --color-surface: 255 255 255;\n}\n\
//!      .dark {\n  --color-surface: 17 17 17;\n}\n"
//! );
//! ```
//!
//! # Pipeline
//!
//! Each color slot of the theme goes through two stages:
//!
//! 1. [`flatten`] turns the nested [`ColorNode`] tree into dash-joined
//!    names (`surface-light`, `surface-dark`), eliding `DEFAULT` keys.
//! 2. [`synthesize`] matches `<prefix>-light-<suffix>` names against their
//!    dark siblings, declares the state variables in a shared
//!    [`StyleTree`], and adds a [`ModeAwareColor`] under `<prefix>-<suffix>`.
//!
//! After every slot is processed the tree is appended to the plugin list as
//! [`Plugin::BaseStyles`].
//!
//! # Slots and Variables
//!
//! | Slot | Variable names |
//! |------|----------------|
//! | `colors` | `--color-<name>`, `--opacity-<name>` |
//! | `textColor` | `--color-text-<name>`, `--opacity-text-<name>` |
//! | `backgroundColor` | `--color-background-<name>`, `--opacity-background-<name>` |
//! | `borderColor` | `--color-border-<name>`, `--opacity-border-<name>` |
//! | `outlineColor` | `--color-outline-<name>`, `--opacity-outline-<name>` |
//!
//! The `extend` variant of each slot uses the same names.

mod color;
mod config;
mod error;
mod node;
mod pairing;
mod palette;
mod styles;
mod synthesize;
mod transform;

pub use color::Rgba;
pub use config::{
    ColorSlot, Config, DarkModeSetting, Options, Plugin, PluginApi, ThemeConfig, ThemeExtension,
};
pub use error::{ColorParseError, Error, Result};
pub use node::{flatten, ColorNode, FlatColors, DEFAULT_KEY};
pub use pairing::{ModePair, PairMatcher};
pub use palette::{ModeAwareColor, OpacityValue, Palette, PaletteEntry};
pub use styles::{
    ColorMode, DarkStrategy, Declarations, RuleBody, StyleRules, StyleTree, DARK_MEDIA_QUERY,
    DEFAULT_DARK_SELECTOR, ROOT_SELECTOR,
};
pub use synthesize::{find_pairs, synthesize};
pub use transform::{transform_value, with_mode_aware_colors};
