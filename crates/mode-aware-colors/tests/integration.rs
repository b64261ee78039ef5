//! End-to-end tests over JSON configurations shaped like real themes.

use mode_aware_colors::{
    transform_value, with_mode_aware_colors, ColorMode, ColorSlot, Config, DarkStrategy, Error,
    OpacityValue, Options, Palette, Plugin, PluginApi, StyleRules, DARK_MEDIA_QUERY, ROOT_SELECTOR,
};
use serde_json::{json, Value};

// ============================================================================
// Helpers
// ============================================================================

fn transform(value: Value) -> Config<Palette> {
    transform_with(value, &Options::default())
}

fn transform_with(value: Value, options: &Options) -> Config<Palette> {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
    let config = Config::from_value(value).expect("valid config");
    with_mode_aware_colors(config, options).expect("transform succeeds")
}

fn slot(config: &Config<Palette>, slot: ColorSlot) -> &Palette {
    config
        .theme
        .as_ref()
        .and_then(|theme| theme.slot(slot))
        .expect("slot present")
}

fn light_decls(config: &Config<Palette>) -> Vec<(String, String)> {
    config
        .base_styles()
        .unwrap()
        .declarations(ColorMode::Light)
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn dark_decls(config: &Config<Palette>) -> Vec<(String, String)> {
    config
        .base_styles()
        .unwrap()
        .declarations(ColorMode::Dark)
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn decls(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn four_slot_theme(dark_mode: Value) -> Value {
    json!({
        "darkMode": dark_mode,
        "content": [{ "raw": "bg-a text-a/50 border-a outline-a/20" }],
        "theme": {
            "colors": { "a": { "light": "#fcfcfc", "dark": "#030303" } },
            "borderColor": { "a": { "light": "#ffffff", "dark": "#000000" } },
            "textColor": { "a": { "light": "#fefefe", "dark": "#010101" } },
            "backgroundColor": { "a": { "light": "#fdfdfd", "dark": "#020202" } },
        },
    })
}

// ============================================================================
// Slots
// ============================================================================

#[test]
fn test_colors_slot() {
    let config = transform(json!({
        "theme": { "colors": { "a": { "light": "#ffffff", "dark": "#000000" } } }
    }));

    let colors = slot(&config, ColorSlot::Colors);
    assert_eq!(colors.color("a-light"), Some("#ffffff"));
    assert_eq!(colors.color("a-dark"), Some("#000000"));
    assert_eq!(
        colors.get("a").unwrap().resolve(None),
        "rgb(var(--color-a) / var(--opacity-a, 1))"
    );
    assert_eq!(light_decls(&config), decls(&[("--color-a", "255 255 255")]));
    assert_eq!(dark_decls(&config), decls(&[("--color-a", "0 0 0")]));
}

#[test]
fn test_outline_color_resolution() {
    let config = transform(json!({
        "theme": { "outlineColor": { "a": { "light": "#ffffff", "dark": "#000000" } } }
    }));
    let color = slot(&config, ColorSlot::OutlineColor).get("a").unwrap();

    assert_eq!(
        color.resolve(None),
        "rgb(var(--color-outline-a) / var(--opacity-outline-a, 1))"
    );
    assert_eq!(
        color.resolve(Some(&OpacityValue::Number(0.4))),
        "rgb(var(--color-outline-a) / calc(var(--opacity-outline-a, 1) * 0.4))"
    );
    assert_eq!(
        color.resolve(Some(&OpacityValue::from("var(--tw-outline-opacity)"))),
        "rgb(var(--color-outline-a) / var(--opacity-outline-a, var(--tw-outline-opacity)))"
    );
}

#[test]
fn test_extend_slots() {
    let config = transform(json!({
        "theme": {
            "extend": {
                "backgroundColor": { "a": { "light": "#fdfdfd", "dark": "#020202" } },
                "borderColor": { "a": { "light": "#ffffff", "dark": "#000000" } },
            }
        }
    }));

    let extend = config.theme.as_ref().unwrap().extend.as_ref().unwrap();
    let background = extend.slot(ColorSlot::BackgroundColor).unwrap();
    assert_eq!(
        background.mode_aware("a").unwrap().color_var(),
        "--color-background-a"
    );
    assert_eq!(
        light_decls(&config),
        decls(&[
            ("--color-background-a", "253 253 253"),
            ("--color-border-a", "255 255 255"),
        ])
    );
}

#[test]
fn test_complex_theme_declaration_order() {
    let config = transform(four_slot_theme(Value::Null));

    assert_eq!(
        light_decls(&config),
        decls(&[
            ("--color-a", "252 252 252"),
            ("--color-text-a", "254 254 254"),
            ("--color-background-a", "253 253 253"),
            ("--color-border-a", "255 255 255"),
        ])
    );
    assert_eq!(
        dark_decls(&config),
        decls(&[
            ("--color-a", "3 3 3"),
            ("--color-text-a", "1 1 1"),
            ("--color-background-a", "2 2 2"),
            ("--color-border-a", "0 0 0"),
        ])
    );

    for s in [
        ColorSlot::Colors,
        ColorSlot::TextColor,
        ColorSlot::BackgroundColor,
        ColorSlot::BorderColor,
    ] {
        let keys: Vec<&str> = slot(&config, s).keys().collect();
        assert_eq!(keys, ["a-light", "a-dark", "a"], "{s}");
    }
}

// ============================================================================
// Dark mode strategies
// ============================================================================

#[test]
fn test_dark_mode_strategies() {
    let cases = [
        (Value::Null, vec![DARK_MEDIA_QUERY, ROOT_SELECTOR]),
        (json!("media"), vec![DARK_MEDIA_QUERY, ROOT_SELECTOR]),
        (json!(["media", ".something"]), vec![DARK_MEDIA_QUERY, ROOT_SELECTOR]),
        (json!("class"), vec![".dark"]),
        (json!("selector"), vec![".dark"]),
        (json!(["selector"]), vec![".dark"]),
        (json!(["selector", ".custom-selector"]), vec![".custom-selector"]),
        (json!(["class", ".night"]), vec![".night"]),
        (json!(["variant", ["&:is(.dark *)"]]), vec![DARK_MEDIA_QUERY, ROOT_SELECTOR]),
    ];

    for (dark_mode, path) in cases {
        let config = transform(four_slot_theme(dark_mode.clone()));
        let rules = config.base_styles().unwrap().rules();

        let root = rules.declarations(&[ROOT_SELECTOR]).unwrap();
        assert_eq!(root["--color-a"], "252 252 252", "{dark_mode}");

        let dark = rules
            .declarations(&path)
            .unwrap_or_else(|| panic!("no dark block for {dark_mode}"));
        assert_eq!(dark["--color-border-a"], "0 0 0", "{dark_mode}");
    }
}

#[test]
fn test_css_output_for_media_strategy() {
    let config = transform(json!({
        "theme": { "colors": { "a": { "light": "#fcfcfc", "dark": "#030303" } } }
    }));
    let styles = config.base_styles().unwrap();
    assert_eq!(styles.strategy(), &DarkStrategy::Media);
    assert_eq!(
        styles.to_css(),
        ":root {\n  --color-a: 252 252 252;\n}\n\
         @media (prefers-color-scheme: dark) {\n  :root {\n    --color-a: 3 3 3;\n  }\n}\n"
    );
}

// ============================================================================
// Naming
// ============================================================================

#[test]
fn test_nested_names() {
    let config = transform(json!({
        "theme": {
            "colors": {
                "primary": {
                    "DEFAULT": "#123456",
                    "surface": { "light": "#ffffff", "dark": "#000000" },
                },
            }
        }
    }));
    let colors = slot(&config, ColorSlot::Colors);
    let keys: Vec<&str> = colors.keys().collect();
    assert_eq!(
        keys,
        [
            "primary",
            "primary-surface-light",
            "primary-surface-dark",
            "primary-surface",
        ]
    );
    assert_eq!(
        colors.mode_aware("primary-surface").unwrap().color_var(),
        "--color-primary-surface"
    );
}

#[test]
fn test_token_in_middle_and_leading_segments() {
    let config = transform(json!({
        "theme": {
            "textColor": {
                "a": { "light": { "b": "#ffffff" }, "dark": { "b": "#000000" } },
                "light": { "c": "#eeeeee" },
                "dark": { "c": "#111111" },
            }
        }
    }));
    let text = slot(&config, ColorSlot::TextColor);
    assert_eq!(text.mode_aware("a-b").unwrap().color_var(), "--color-text-a-b");
    assert_eq!(text.mode_aware("c").unwrap().color_var(), "--color-text-c");
    assert_eq!(text.color("a-light-b"), Some("#ffffff"));
    assert_eq!(text.color("dark-c"), Some("#111111"));
}

#[test]
fn test_custom_tokens() {
    let config = transform_with(
        json!({
            "theme": {
                "colors": {
                    "a": { "claro": "#ffffff", "oscuro": "#000000" },
                    "b": { "light": "#ffffff", "dark": "#000000" },
                }
            }
        }),
        &Options::new("claro", "oscuro"),
    );
    let colors = slot(&config, ColorSlot::Colors);
    assert!(colors.mode_aware("a").is_some());
    assert!(colors.mode_aware("b").is_none());
    assert_eq!(colors.color("b-light"), Some("#ffffff"));
}

#[test]
fn test_incomplete_pair_is_untouched() {
    let config = transform(json!({
        "theme": { "colors": { "a": { "light": "#ffffff" }, "b": "#abcdef" } }
    }));
    let colors = slot(&config, ColorSlot::Colors);
    let keys: Vec<&str> = colors.keys().collect();
    assert_eq!(keys, ["a-light", "b"]);
    assert!(config.base_styles().unwrap().is_empty());
    assert_eq!(config.base_styles().unwrap().to_css(), "");
}

// ============================================================================
// Color formats
// ============================================================================

#[test]
fn test_alpha_is_extracted_to_opacity_variables() {
    let config = transform(json!({
        "theme": { "colors": { "a": { "light": "#ffffff33", "dark": "rgba(0, 0, 0, 0.5)" } } }
    }));
    assert_eq!(
        light_decls(&config),
        decls(&[("--color-a", "255 255 255"), ("--opacity-a", "20%")])
    );
    assert_eq!(
        dark_decls(&config),
        decls(&[("--color-a", "0 0 0"), ("--opacity-a", "50%")])
    );
}

#[test]
fn test_translucent_pair_with_numeric_override() {
    let config = transform(json!({
        "theme": { "backgroundColor": { "a": { "light": "#ffffff33", "dark": "#000000" } } }
    }));
    let color = slot(&config, ColorSlot::BackgroundColor).get("a").unwrap();

    assert_eq!(
        light_decls(&config),
        decls(&[
            ("--color-background-a", "255 255 255"),
            ("--opacity-background-a", "20%"),
        ])
    );
    // 20% of the light color times the utility's 50%
    assert_eq!(
        color.resolve(Some(&OpacityValue::Number(0.5))),
        "rgb(var(--color-background-a) / calc(var(--opacity-background-a, 1) * 0.5))"
    );
}

#[test]
fn test_mixed_color_formats() {
    let config = transform(json!({
        "theme": {
            "colors": {
                "a": { "light": "white", "dark": "hsl(0, 0%, 0%)" },
                "b": { "light": "rgb(255 0 0)", "dark": "#0f0" },
            }
        }
    }));
    assert_eq!(
        light_decls(&config),
        decls(&[("--color-a", "255 255 255"), ("--color-b", "255 0 0")])
    );
    assert_eq!(
        dark_decls(&config),
        decls(&[("--color-a", "0 0 0"), ("--color-b", "0 255 0")])
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_collision_with_existing_key() {
    let config = Config::from_value(json!({
        "theme": {
            "colors": { "a": { "DEFAULT": "#aaaaaa", "light": "#ffffff", "dark": "#000000" } }
        }
    }))
    .unwrap();
    let err = with_mode_aware_colors(config, &Options::default()).unwrap_err();
    assert!(matches!(err, Error::Collision { ref name, slot: ColorSlot::Colors } if name == "a"));
    assert!(err.to_string().contains("'a'"));
}

#[test]
fn test_malformed_color_is_reported() {
    let err = transform_value(
        json!({ "theme": { "backgroundColor": { "a": { "light": "#ffffff", "dark": "#12" } } } }),
        &Options::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::MalformedColor { ref leaf, .. } if leaf == "a-dark"));
}

#[test]
fn test_non_string_leaf_is_rejected() {
    let err = Config::from_value(json!({
        "theme": { "colors": { "a": { "light": 12 } } }
    }))
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("a-light"), "{message}");
}

// ============================================================================
// Host integration
// ============================================================================

#[derive(Default)]
struct RecordingHost {
    base: Vec<StyleRules>,
}

impl PluginApi for RecordingHost {
    fn add_base(&mut self, rules: &StyleRules) {
        self.base.push(rules.clone());
    }
}

#[test]
fn test_plugins_register_through_host_api() {
    let config = transform(json!({
        "plugins": [{ "name": "forms" }],
        "theme": { "colors": { "a": { "light": "#ffffff", "dark": "#000000" } } },
    }));

    let mut host = RecordingHost::default();
    for plugin in &config.plugins {
        plugin.register(&mut host);
    }

    assert_eq!(host.base.len(), 1);
    assert_eq!(
        host.base[0].declarations(&[DARK_MEDIA_QUERY, ROOT_SELECTOR]).unwrap()["--color-a"],
        "0 0 0"
    );
    assert_eq!(config.plugins[0], Plugin::External(json!({ "name": "forms" })));
}

#[test]
fn test_transform_value_preserves_unknown_keys() {
    let out = transform_value(
        json!({
            "prefix": "tw-",
            "theme": {
                "spacing": { "1": "4px" },
                "colors": { "a": { "light": "#fff", "dark": "#000" } },
            },
        }),
        &Options::default(),
    )
    .unwrap();

    assert_eq!(out["prefix"], "tw-");
    assert_eq!(out["theme"]["spacing"], json!({ "1": "4px" }));
    assert_eq!(
        out["theme"]["colors"],
        json!({
            "a-light": "#fff",
            "a-dark": "#000",
            "a": "rgb(var(--color-a) / var(--opacity-a, 1))",
        })
    );
}
