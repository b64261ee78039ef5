//! Flat palettes and mode-aware color references.
//!
//! After synthesis a slot holds a [`Palette`]: every flattened leaf is kept
//! as a plain [`PaletteEntry::Color`], and each light/dark pair adds a
//! [`PaletteEntry::ModeAware`] entry under its semantic name.
//!
//! A [`ModeAwareColor`] is resolved by the host when it generates utility
//! classes, optionally with the utility's opacity:
//!
//! ```rust
//! use mode_aware_colors::{ModeAwareColor, OpacityValue};
//!
//! let color = ModeAwareColor::new("outline-a");
//! assert_eq!(
//!     color.resolve(None),
//!     "rgb(var(--color-outline-a) / var(--opacity-outline-a, 1))"
//! );
//! assert_eq!(
//!     color.resolve(Some(&OpacityValue::Number(0.4))),
//!     "rgb(var(--color-outline-a) / calc(var(--opacity-outline-a, 1) * 0.4))"
//! );
//! assert_eq!(
//!     color.resolve(Some(&"var(--tw-outline-opacity)".into())),
//!     "rgb(var(--color-outline-a) / var(--opacity-outline-a, var(--tw-outline-opacity)))"
//! );
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::node::FlatColors;

/// A color reference backed by `--color-*` and `--opacity-*` state variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModeAwareColor {
    color_var: String,
    opacity_var: String,
}

impl ModeAwareColor {
    /// Creates a reference for the given variable suffix, e.g. `text-primary`
    /// yields `--color-text-primary` and `--opacity-text-primary`.
    pub fn new(var_suffix: &str) -> Self {
        Self {
            color_var: format!("--color-{}", var_suffix),
            opacity_var: format!("--opacity-{}", var_suffix),
        }
    }

    /// Name of the variable holding the space-separated RGB channels.
    pub fn color_var(&self) -> &str {
        &self.color_var
    }

    /// Name of the variable holding the color's own opacity, if any.
    pub fn opacity_var(&self) -> &str {
        &self.opacity_var
    }

    /// Resolves to a CSS color expression.
    ///
    /// Without an override the color's own opacity applies (falling back to
    /// fully opaque). A numeric override is multiplied with the color's own
    /// opacity; any other override becomes the fallback of the opacity
    /// variable.
    pub fn resolve(&self, opacity: Option<&OpacityValue>) -> String {
        let alpha = match opacity {
            None => format!("var({}, 1)", self.opacity_var),
            Some(OpacityValue::Number(n)) => format!("calc(var({}, 1) * {})", self.opacity_var, n),
            Some(OpacityValue::Expression(expr)) => {
                format!("var({}, {})", self.opacity_var, expr)
            }
        };
        format!("rgb(var({}) / {})", self.color_var, alpha)
    }
}

impl fmt::Display for ModeAwareColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve(None))
    }
}

impl Serialize for ModeAwareColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Opacity supplied by a utility class, e.g. `bg-primary/40` or the
/// host's `var(--tw-bg-opacity)`.
#[derive(Debug, Clone, PartialEq)]
pub enum OpacityValue {
    Number(f64),
    Expression(String),
}

impl From<f64> for OpacityValue {
    fn from(value: f64) -> Self {
        OpacityValue::Number(value)
    }
}

impl From<&str> for OpacityValue {
    fn from(value: &str) -> Self {
        match value.trim().parse::<f64>() {
            Ok(n) => OpacityValue::Number(n),
            Err(_) => OpacityValue::Expression(value.to_string()),
        }
    }
}

/// A single entry of a flat palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PaletteEntry {
    /// A literal color value carried over from the source tree.
    Color(String),
    /// A synthesized semantic color.
    ModeAware(ModeAwareColor),
}

impl PaletteEntry {
    /// The literal color, if this entry is not synthesized.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            PaletteEntry::Color(value) => Some(value),
            PaletteEntry::ModeAware(_) => None,
        }
    }

    /// The mode-aware reference, if this entry was synthesized.
    pub fn as_mode_aware(&self) -> Option<&ModeAwareColor> {
        match self {
            PaletteEntry::ModeAware(color) => Some(color),
            PaletteEntry::Color(_) => None,
        }
    }

    /// Resolves the entry to a CSS value; literals ignore `opacity`.
    pub fn resolve(&self, opacity: Option<&OpacityValue>) -> String {
        match self {
            PaletteEntry::Color(value) => value.clone(),
            PaletteEntry::ModeAware(color) => color.resolve(opacity),
        }
    }
}

/// A flat, ordered mapping from color names to entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    entries: IndexMap<String, PaletteEntry>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&PaletteEntry> {
        self.entries.get(name)
    }

    /// Shorthand for the literal color stored under `name`.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PaletteEntry::as_color)
    }

    /// Shorthand for the mode-aware reference stored under `name`.
    pub fn mode_aware(&self, name: &str) -> Option<&ModeAwareColor> {
        self.get(name).and_then(PaletteEntry::as_mode_aware)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Inserts an entry, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, entry: PaletteEntry) -> Option<PaletteEntry> {
        self.entries.insert(name.into(), entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PaletteEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<FlatColors> for Palette {
    fn from(flat: FlatColors) -> Self {
        Self {
            entries: flat
                .into_iter()
                .map(|(name, value)| (name, PaletteEntry::Color(value)))
                .collect(),
        }
    }
}
