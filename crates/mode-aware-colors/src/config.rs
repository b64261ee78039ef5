//! Configuration types.
//!
//! The transform consumes the same configuration object a styling host
//! reads: an optional `darkMode` setting, a `theme` with color-bearing
//! slots (and their `extend` overlay), and a `plugins` list. Everything
//! else is carried through untouched.
//!
//! [`Config`] is generic over the slot payload. Input configurations hold
//! nested [`ColorNode`] trees; the transform returns a `Config<Palette>`
//! whose slots are flat palettes.
//!
//! ```rust
//! use mode_aware_colors::{Config, DarkStrategy};
//! use serde_json::json;
//!
//! let config = Config::from_value(json!({
//!     "darkMode": ["class", ".night"],
//!     "content": ["./src/**/*.html"],
//!     "theme": { "colors": { "a": { "light": "#fff", "dark": "#000" } } },
//! })).unwrap();
//!
//! assert_eq!(config.dark_strategy(), DarkStrategy::Selector(".night".into()));
//! assert!(config.extra.contains_key("content"));
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::node::ColorNode;
use crate::styles::{DarkStrategy, StyleRules, StyleTree, DEFAULT_DARK_SELECTOR};

/// Identifiers used to detect light/dark pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Segment marking the light variant. Defaults to `light`.
    #[serde(default = "default_light_id")]
    pub light_id: String,
    /// Segment marking the dark variant. Defaults to `dark`.
    #[serde(default = "default_dark_id")]
    pub dark_id: String,
}

fn default_light_id() -> String {
    "light".to_string()
}

fn default_dark_id() -> String {
    "dark".to_string()
}

impl Options {
    pub fn new(light_id: impl Into<String>, dark_id: impl Into<String>) -> Self {
        Self {
            light_id: light_id.into(),
            dark_id: dark_id.into(),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            light_id: default_light_id(),
            dark_id: default_dark_id(),
        }
    }
}

/// A color-bearing theme slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Colors,
    TextColor,
    BackgroundColor,
    BorderColor,
    OutlineColor,
}

impl ColorSlot {
    /// Slots in processing order.
    pub const ALL: [ColorSlot; 5] = [
        ColorSlot::Colors,
        ColorSlot::TextColor,
        ColorSlot::BackgroundColor,
        ColorSlot::BorderColor,
        ColorSlot::OutlineColor,
    ];

    /// Key of the slot inside `theme`.
    pub fn key(self) -> &'static str {
        match self {
            ColorSlot::Colors => "colors",
            ColorSlot::TextColor => "textColor",
            ColorSlot::BackgroundColor => "backgroundColor",
            ColorSlot::BorderColor => "borderColor",
            ColorSlot::OutlineColor => "outlineColor",
        }
    }

    /// Tag inserted into the slot's variable names. Base colors have none.
    pub fn variable_prefix(self) -> Option<&'static str> {
        match self {
            ColorSlot::Colors => None,
            ColorSlot::TextColor => Some("text"),
            ColorSlot::BackgroundColor => Some("background"),
            ColorSlot::BorderColor => Some("border"),
            ColorSlot::OutlineColor => Some("outline"),
        }
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The `darkMode` setting: a strategy token, or `[token, selector]`.
///
/// Shapes this crate does not interpret (the host's `["variant", [...]]`
/// form, for one) are kept as [`DarkModeSetting::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DarkModeSetting {
    Token(String),
    WithSelector(Vec<String>),
    Flag(bool),
    Other(Value),
}

impl DarkModeSetting {
    /// Resolves the strategy. `class` and `selector` toggle dark mode with a
    /// selector (`.dark` unless one is given); anything else follows the OS
    /// preference.
    pub fn strategy(&self) -> DarkStrategy {
        let (token, selector) = match self {
            DarkModeSetting::Token(token) => (Some(token.as_str()), None),
            DarkModeSetting::WithSelector(parts) => (
                parts.first().map(String::as_str),
                parts.get(1).map(String::as_str),
            ),
            DarkModeSetting::Other(value) => (
                value.get(0).and_then(Value::as_str),
                value.get(1).and_then(Value::as_str),
            ),
            DarkModeSetting::Flag(_) => (None, None),
        };

        match token {
            Some("class") | Some("selector") => DarkStrategy::Selector(
                selector
                    .filter(|s| !s.is_empty())
                    .unwrap_or(DEFAULT_DARK_SELECTOR)
                    .to_string(),
            ),
            _ => DarkStrategy::Media,
        }
    }
}

/// Color slots of a theme, with the `extend` overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "S: Deserialize<'de>"))]
pub struct ThemeConfig<S> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extend: Option<ThemeExtension<S>>,
    /// Non-color theme keys (`fontFamily`, `spacing`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<S> ThemeConfig<S> {
    pub fn slot(&self, slot: ColorSlot) -> Option<&S> {
        match slot {
            ColorSlot::Colors => self.colors.as_ref(),
            ColorSlot::TextColor => self.text_color.as_ref(),
            ColorSlot::BackgroundColor => self.background_color.as_ref(),
            ColorSlot::BorderColor => self.border_color.as_ref(),
            ColorSlot::OutlineColor => self.outline_color.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, slot: ColorSlot) -> &mut Option<S> {
        match slot {
            ColorSlot::Colors => &mut self.colors,
            ColorSlot::TextColor => &mut self.text_color,
            ColorSlot::BackgroundColor => &mut self.background_color,
            ColorSlot::BorderColor => &mut self.border_color,
            ColorSlot::OutlineColor => &mut self.outline_color,
        }
    }
}

impl<S> Default for ThemeConfig<S> {
    fn default() -> Self {
        Self {
            colors: None,
            text_color: None,
            background_color: None,
            border_color: None,
            outline_color: None,
            extend: None,
            extra: Map::new(),
        }
    }
}

/// The additive `theme.extend` overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "S: Deserialize<'de>"))]
pub struct ThemeExtension<S> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<S>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<S> ThemeExtension<S> {
    pub fn slot(&self, slot: ColorSlot) -> Option<&S> {
        match slot {
            ColorSlot::Colors => self.colors.as_ref(),
            ColorSlot::TextColor => self.text_color.as_ref(),
            ColorSlot::BackgroundColor => self.background_color.as_ref(),
            ColorSlot::BorderColor => self.border_color.as_ref(),
            ColorSlot::OutlineColor => self.outline_color.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, slot: ColorSlot) -> &mut Option<S> {
        match slot {
            ColorSlot::Colors => &mut self.colors,
            ColorSlot::TextColor => &mut self.text_color,
            ColorSlot::BackgroundColor => &mut self.background_color,
            ColorSlot::BorderColor => &mut self.border_color,
            ColorSlot::OutlineColor => &mut self.outline_color,
        }
    }
}

impl<S> Default for ThemeExtension<S> {
    fn default() -> Self {
        Self {
            colors: None,
            text_color: None,
            background_color: None,
            border_color: None,
            outline_color: None,
            extra: Map::new(),
        }
    }
}

/// Hook through which a plugin registers base styles with the host.
pub trait PluginApi {
    fn add_base(&mut self, rules: &StyleRules);
}

/// An entry of the configuration's plugin list.
#[derive(Debug, Clone, PartialEq)]
pub enum Plugin {
    /// A plugin owned by the host; carried through as-is.
    External(Value),
    /// Injects accumulated mode-aware declarations as base styles.
    BaseStyles(StyleTree),
}

impl Plugin {
    /// Invokes the plugin against the host's API. External plugins are the
    /// host's own business and register nothing here.
    pub fn register<A: PluginApi + ?Sized>(&self, api: &mut A) {
        if let Plugin::BaseStyles(styles) = self {
            api.add_base(&styles.rules());
        }
    }
}

impl Serialize for Plugin {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Plugin::External(value) => value.serialize(serializer),
            Plugin::BaseStyles(styles) => {
                let mut map = Map::new();
                map.insert(
                    "addBase".to_string(),
                    serde_json::to_value(styles).map_err(serde::ser::Error::custom)?,
                );
                map.serialize(serializer)
            }
        }
    }
}

impl<'de> Deserialize<'de> for Plugin {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Plugin::External)
    }
}

/// A styling host configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "S: Deserialize<'de>"))]
pub struct Config<S = ColorNode> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<DarkModeSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig<S>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,
    /// Keys this crate does not interpret (`content`, `prefix`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<S> Config<S> {
    /// Dark-mode strategy, defaulting to the media query.
    pub fn dark_strategy(&self) -> DarkStrategy {
        self.dark_mode
            .as_ref()
            .map(DarkModeSetting::strategy)
            .unwrap_or_default()
    }

    /// The most recently appended base-style plugin, if any.
    pub fn base_styles(&self) -> Option<&StyleTree> {
        self.plugins.iter().rev().find_map(|plugin| match plugin {
            Plugin::BaseStyles(styles) => Some(styles),
            Plugin::External(_) => None,
        })
    }
}

impl<S> Default for Config<S> {
    fn default() -> Self {
        Self {
            dark_mode: None,
            theme: None,
            plugins: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl Config<ColorNode> {
    /// Reads a configuration from a JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl<S: Serialize> Config<S> {
    /// Converts the configuration back into a JSON value.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
