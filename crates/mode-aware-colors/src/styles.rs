//! State-variable declarations for both appearance modes.
//!
//! Every synthesized pair contributes declarations to two partitions: the
//! light partition under the document root, which always applies, and the
//! dark partition, which applies either through the OS preference media
//! query or through a selector the page toggles.
//!
//! ```rust
//! use mode_aware_colors::{ColorMode, DarkStrategy, StyleTree};
//!
//! let mut styles = StyleTree::new(DarkStrategy::Media);
//! styles.declare(ColorMode::Light, "--color-a", "255 255 255");
//! styles.declare(ColorMode::Dark, "--color-a", "0 0 0");
//!
//! assert_eq!(
//!     styles.to_css(),
//!     ":root {\n  --color-a: 255 255 255;\n}\n\
//!      @media (prefers-color-scheme: dark) {\n  :root {\n    --color-a: 0 0 0;\n  }\n}\n"
//! );
//! ```

use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::Error;

/// Selector of the light (default) partition.
pub const ROOT_SELECTOR: &str = ":root";

/// Media query wrapping the dark partition under the media strategy.
pub const DARK_MEDIA_QUERY: &str = "@media (prefers-color-scheme: dark)";

/// Dark selector used by the selector strategy when none is configured.
pub const DEFAULT_DARK_SELECTOR: &str = ".dark";

/// An appearance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Light mode (light background, dark text).
    Light,
    /// Dark mode (dark background, light text).
    Dark,
}

/// How the dark partition is activated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DarkStrategy {
    /// Follow the OS preference via `prefers-color-scheme`.
    #[default]
    Media,
    /// Apply when the given selector matches, e.g. `.dark` on `<html>`.
    Selector(String),
}

impl DarkStrategy {
    pub fn uses_media(&self) -> bool {
        matches!(self, DarkStrategy::Media)
    }

    /// Rejects a dark selector that is the light partition's own selector;
    /// both blocks would land under one key in [`StyleTree::rules`].
    pub fn validate(self) -> crate::error::Result<Self> {
        match &self {
            DarkStrategy::Selector(selector) if selector.trim() == ROOT_SELECTOR => {
                Err(Error::InvalidDarkSelector {
                    selector: selector.clone(),
                })
            }
            _ => Ok(self),
        }
    }
}

/// Custom property declarations, in insertion order.
pub type Declarations = IndexMap<String, String>;

/// The body of a rule: either declarations or nested rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RuleBody {
    Declarations(Declarations),
    Nested(StyleRules),
}

/// Rules keyed by selector or at-rule prelude, in the shape a host's
/// base-style injection consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleRules(IndexMap<String, RuleBody>);

impl StyleRules {
    pub fn get(&self, key: &str) -> Option<&RuleBody> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleBody)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Declarations found by following `path` through nested rules.
    pub fn declarations(&self, path: &[&str]) -> Option<&Declarations> {
        let (first, rest) = path.split_first()?;
        match (self.0.get(*first)?, rest.is_empty()) {
            (RuleBody::Declarations(decls), true) => Some(decls),
            (RuleBody::Nested(nested), false) => nested.declarations(rest),
            _ => None,
        }
    }

    fn insert(&mut self, key: impl Into<String>, body: RuleBody) {
        self.0.insert(key.into(), body);
    }

    fn write_css(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        for (key, body) in &self.0 {
            if body.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{}{} {{", indent, key);
            match body {
                RuleBody::Declarations(decls) => {
                    for (name, value) in decls {
                        let _ = writeln!(out, "{}  {}: {};", indent, name, value);
                    }
                }
                RuleBody::Nested(nested) => nested.write_css(out, depth + 1),
            }
            let _ = writeln!(out, "{}}}", indent);
        }
    }
}

impl RuleBody {
    fn is_empty(&self) -> bool {
        match self {
            RuleBody::Declarations(decls) => decls.is_empty(),
            RuleBody::Nested(nested) => nested.0.values().all(RuleBody::is_empty),
        }
    }
}

/// Accumulated state-variable declarations for one transform.
///
/// Shared by every slot of a single invocation and handed to the host at
/// the end; nothing in the transform reads it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTree {
    strategy: DarkStrategy,
    light: Declarations,
    dark: Declarations,
}

impl StyleTree {
    pub fn new(strategy: DarkStrategy) -> Self {
        Self {
            strategy,
            light: Declarations::new(),
            dark: Declarations::new(),
        }
    }

    pub fn strategy(&self) -> &DarkStrategy {
        &self.strategy
    }

    /// Declares a variable in the partition for `mode`.
    pub fn declare(&mut self, mode: ColorMode, name: impl Into<String>, value: impl Into<String>) {
        let partition = match mode {
            ColorMode::Light => &mut self.light,
            ColorMode::Dark => &mut self.dark,
        };
        partition.insert(name.into(), value.into());
    }

    /// Declarations for `mode`.
    pub fn declarations(&self, mode: ColorMode) -> &Declarations {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }

    /// Path of keys leading to the dark declarations in [`rules`](Self::rules).
    pub fn dark_path(&self) -> Vec<&str> {
        match &self.strategy {
            DarkStrategy::Media => vec![DARK_MEDIA_QUERY, ROOT_SELECTOR],
            DarkStrategy::Selector(selector) => vec![selector.as_str()],
        }
    }

    /// Builds the selector-keyed rules. Both partitions are always present.
    pub fn rules(&self) -> StyleRules {
        let mut rules = StyleRules::default();
        rules.insert(ROOT_SELECTOR, RuleBody::Declarations(self.light.clone()));
        match &self.strategy {
            DarkStrategy::Media => {
                let mut nested = StyleRules::default();
                nested.insert(ROOT_SELECTOR, RuleBody::Declarations(self.dark.clone()));
                rules.insert(DARK_MEDIA_QUERY, RuleBody::Nested(nested));
            }
            DarkStrategy::Selector(selector) => {
                rules.insert(selector.clone(), RuleBody::Declarations(self.dark.clone()));
            }
        }
        rules
    }

    /// Renders the rules as CSS, omitting empty blocks.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        self.rules().write_css(&mut out, 0);
        out
    }
}

impl Serialize for StyleTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rules().serialize(serializer)
    }
}
