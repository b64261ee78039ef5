//! Slot dispatch: runs flattening and synthesis over every color slot of a
//! configuration and attaches the accumulated base styles.

use serde_json::Value;
use tracing::debug;

use crate::config::{ColorSlot, Config, Options, Plugin, ThemeConfig, ThemeExtension};
use crate::error::Result;
use crate::node::{flatten, ColorNode};
use crate::palette::Palette;
use crate::pairing::PairMatcher;
use crate::styles::{ColorMode, StyleTree};
use crate::synthesize::synthesize;

/// Transforms a configuration so its color slots carry mode-aware colors.
///
/// Slots are visited as `colors`, `extend.colors`, `textColor`,
/// `extend.textColor`, and so on through `outlineColor`. Absent slots stay
/// absent. All slots share one [`StyleTree`], which is appended to the
/// plugin list as [`Plugin::BaseStyles`] even when no pairs were found.
///
/// # Errors
///
/// Fails on invalid tokens in `options`, on a `:root` dark-mode selector, on a
/// semantic-name or state-variable collision, and on a pair side that is not
/// a valid color. No partial result is returned.
///
/// ```rust
/// use mode_aware_colors::{with_mode_aware_colors, ColorMode, Config, Options};
/// use serde_json::json;
///
/// let config = Config::from_value(json!({
///     "theme": { "textColor": { "a": { "light": "#fefefe", "dark": "#010101" } } },
/// })).unwrap();
///
/// let config = with_mode_aware_colors(config, &Options::default()).unwrap();
/// let text = config.theme.as_ref().unwrap().text_color.as_ref().unwrap();
/// assert_eq!(text.mode_aware("a").unwrap().color_var(), "--color-text-a");
///
/// let styles = config.base_styles().unwrap();
/// assert_eq!(styles.declarations(ColorMode::Light)["--color-text-a"], "254 254 254");
/// ```
pub fn with_mode_aware_colors(
    config: Config<ColorNode>,
    options: &Options,
) -> Result<Config<Palette>> {
    let matcher = PairMatcher::new(options)?;
    let mut styles = StyleTree::new(config.dark_strategy().validate()?);

    let Config {
        dark_mode,
        theme,
        mut plugins,
        extra,
    } = config;

    let theme = match theme {
        Some(theme) => Some(transform_theme(theme, &matcher, &mut styles)?),
        None => None,
    };

    debug!(
        light = styles.declarations(ColorMode::Light).len(),
        dark = styles.declarations(ColorMode::Dark).len(),
        "registering base styles"
    );
    plugins.push(Plugin::BaseStyles(styles));

    Ok(Config {
        dark_mode,
        theme,
        plugins,
        extra,
    })
}

/// Transforms a JSON configuration object and returns the resulting JSON.
///
/// Mode-aware entries serialize as their default color expression and the
/// base styles plugin as `{ "addBase": <rules> }`.
pub fn transform_value(value: Value, options: &Options) -> Result<Value> {
    let config = Config::from_value(value)?;
    with_mode_aware_colors(config, options)?.to_value()
}

fn transform_theme(
    mut theme: ThemeConfig<ColorNode>,
    matcher: &PairMatcher,
    styles: &mut StyleTree,
) -> Result<ThemeConfig<Palette>> {
    let mut extension = theme.extend.take();

    let mut out = ThemeConfig {
        extra: std::mem::take(&mut theme.extra),
        ..ThemeConfig::default()
    };
    let mut out_extension = extension.as_mut().map(|ext| ThemeExtension {
        extra: std::mem::take(&mut ext.extra),
        ..ThemeExtension::default()
    });

    for slot in ColorSlot::ALL {
        let base = theme.slot_mut(slot).take();
        *out.slot_mut(slot) = transform_slot(base, slot, false, matcher, styles)?;

        if let (Some(ext), Some(out_ext)) = (extension.as_mut(), out_extension.as_mut()) {
            let extended = ext.slot_mut(slot).take();
            *out_ext.slot_mut(slot) = transform_slot(extended, slot, true, matcher, styles)?;
        }
    }

    out.extend = out_extension;
    Ok(out)
}

fn transform_slot(
    node: Option<ColorNode>,
    slot: ColorSlot,
    extend: bool,
    matcher: &PairMatcher,
    styles: &mut StyleTree,
) -> Result<Option<Palette>> {
    let Some(node) = node else {
        return Ok(None);
    };

    let flat = flatten(Some(&node));
    debug!(
        %slot,
        extend,
        variable_prefix = slot.variable_prefix().unwrap_or_default(),
        entries = flat.len(),
        "processing color slot"
    );
    synthesize(flat, styles, matcher, slot).map(Some)
}
