//! The mode-aware synthesizer.
//!
//! Walks a flattened slot, finds complete light/dark pairs, and for each one
//! declares the state variables in both partitions of the [`StyleTree`] and
//! adds a [`ModeAwareColor`] under the pair's semantic name. The source
//! leaves stay in the palette so they can still be used directly.

use tracing::{debug, trace};

use crate::color::Rgba;
use crate::config::ColorSlot;
use crate::error::{Error, Result};
use crate::node::{FlatColors, DEFAULT_KEY};
use crate::pairing::{join_segments, ModePair, PairMatcher};
use crate::palette::{ModeAwareColor, Palette, PaletteEntry};
use crate::styles::{ColorMode, StyleTree};

const OPAQUE: &str = "100%";

/// Synthesizes mode-aware colors for one flattened slot.
///
/// Declarations are added to `styles`, which is shared by all slots of a
/// single transform. Names are visited in flattening order; synthesized
/// entries are appended after the flattened ones.
///
/// # Errors
///
/// - [`Error::Collision`] if a semantic name is already taken, either by a
///   source color or by an earlier pair.
/// - [`Error::MalformedColor`] if either side of a pair is not a parsable
///   color.
///
/// # Example
///
/// ```rust
/// use mode_aware_colors::{
///     flatten, synthesize, ColorMode, ColorNode, ColorSlot, DarkStrategy, Options, PairMatcher,
///     StyleTree,
/// };
/// use serde_json::json;
///
/// let tree = json!({ "a": { "light": "#ffffff", "dark": "#000000" } });
/// let tree = ColorNode::try_from(tree).unwrap();
/// let matcher = PairMatcher::new(&Options::default()).unwrap();
/// let mut styles = StyleTree::new(DarkStrategy::Media);
///
/// let flat = flatten(Some(&tree));
/// let palette = synthesize(flat, &mut styles, &matcher, ColorSlot::Colors).unwrap();
///
/// assert_eq!(palette.color("a-light"), Some("#ffffff"));
/// assert_eq!(palette.mode_aware("a").unwrap().color_var(), "--color-a");
/// assert_eq!(styles.declarations(ColorMode::Dark)["--color-a"], "0 0 0");
/// ```
pub fn synthesize(
    flat: FlatColors,
    styles: &mut StyleTree,
    matcher: &PairMatcher,
    slot: ColorSlot,
) -> Result<Palette> {
    let names: Vec<String> = flat.keys().cloned().collect();
    let mut palette = Palette::from(flat);

    for name in &names {
        let Some(pair) = matcher.match_light(name) else {
            continue;
        };

        let sides = (palette.color(&pair.light_name), palette.color(&pair.dark_name));
        let (light, dark) = match sides {
            (Some(light), Some(dark)) => (light.to_string(), dark.to_string()),
            _ => {
                trace!(
                    %slot,
                    light = %pair.light_name,
                    dark = %pair.dark_name,
                    "incomplete mode pair, skipping"
                );
                continue;
            }
        };

        let semantic = pair.semantic_name();
        let key = semantic.clone().unwrap_or_else(|| DEFAULT_KEY.to_string());
        if palette.contains(&key) {
            return Err(Error::Collision { name: key, slot });
        }

        let light_rgba = parse_leaf(&key, &pair.light_name, &light)?;
        let dark_rgba = parse_leaf(&key, &pair.dark_name, &dark)?;

        let color = declare_pair(styles, slot, semantic.as_deref(), &light_rgba, &dark_rgba)?;
        debug!(
            %slot,
            name = %key,
            color_var = color.color_var(),
            "synthesized mode-aware color"
        );
        palette.insert(key, PaletteEntry::ModeAware(color));
    }

    Ok(palette)
}

fn parse_leaf(name: &str, leaf: &str, value: &str) -> Result<Rgba> {
    Rgba::parse(value).map_err(|source| Error::MalformedColor {
        name: name.to_string(),
        leaf: leaf.to_string(),
        value: value.to_string(),
        source,
    })
}

/// Declares both partitions for a pair and returns the color reference.
///
/// Opacity is declared on both sides as soon as either side is
/// translucent, so the light opacity never carries over into dark mode.
/// Nothing is declared if any variable already holds something else.
fn declare_pair(
    styles: &mut StyleTree,
    slot: ColorSlot,
    semantic: Option<&str>,
    light: &Rgba,
    dark: &Rgba,
) -> Result<ModeAwareColor> {
    let var_suffix = join_segments(&[slot.variable_prefix(), semantic])
        .unwrap_or_else(|| DEFAULT_KEY.to_string());
    let color = ModeAwareColor::new(&var_suffix);
    let translucent = light.is_translucent() || dark.is_translucent();

    let mut planned: Vec<(ColorMode, &str, Option<String>)> = Vec::with_capacity(4);
    for (mode, rgba) in [(ColorMode::Light, light), (ColorMode::Dark, dark)] {
        planned.push((mode, color.color_var(), Some(rgba.channels())));
        let opacity = translucent.then(|| rgba.opacity().unwrap_or_else(|| OPAQUE.to_string()));
        planned.push((mode, color.opacity_var(), opacity));
    }

    for (mode, variable, value) in &planned {
        let existing = styles.declarations(*mode).get(*variable);
        if existing.is_some() && existing != value.as_ref() {
            return Err(Error::VariableCollision {
                variable: variable.to_string(),
                slot,
            });
        }
    }

    for (mode, variable, value) in planned {
        if let Some(value) = value {
            styles.declare(mode, variable, value);
        }
    }

    Ok(color)
}

/// Pairs in `flat` that [`synthesize`] would merge, without touching styles.
pub fn find_pairs(flat: &FlatColors, matcher: &PairMatcher) -> Vec<ModePair> {
    flat.keys()
        .filter_map(|name| matcher.match_light(name))
        .filter(|pair| flat.contains_key(&pair.dark_name))
        .collect()
}
