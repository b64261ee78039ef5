//! Color value normalization.
//!
//! Leaf colors are reduced to an RGB triple plus an optional alpha fraction,
//! which is the shape the emitted state variables need (`255 255 255` and
//! `20%`). Input is tokenized with `cssparser`, so anything a stylesheet
//! author would write as a plain color value is accepted:
//!
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb()` / `rgba()` with comma or space syntax, numeric or percentage
//!   channels, and an optional alpha after `,` or `/`
//! - `hsl()` / `hsla()` with the hue as a number or an angle dimension
//! - CSS named colors and `transparent`
//!
//! # Example
//!
//! ```rust
//! use mode_aware_colors::Rgba;
//!
//! let color = Rgba::parse("#ffffff33").unwrap();
//! assert_eq!(color.channels(), "255 255 255");
//! assert_eq!(color.opacity().as_deref(), Some("20%"));
//!
//! let color = Rgba::parse("rgb(10 20 30 / 50%)").unwrap();
//! assert_eq!(color.channels(), "10 20 30");
//! assert_eq!(color.alpha, Some(0.5));
//! ```

use std::collections::HashMap;

use cssparser::{ParseError, ParseErrorKind, Parser, ParserInput, Token};
use once_cell::sync::Lazy;

use crate::error::ColorParseError;

/// A color normalized to 8-bit channels and an optional alpha.
///
/// `alpha` is `None` for fully opaque colors; a present alpha is always in
/// `0.0..1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: Option<f64>,
}

impl Rgba {
    /// Creates an opaque color.
    pub fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    /// Creates a color with the given alpha. An alpha of 1 (or more) is
    /// treated as opaque.
    pub fn with_alpha(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: normalize_alpha(alpha),
        }
    }

    /// Parses a color string.
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ColorParseError::Empty);
        }

        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);
        parser.parse_entirely(parse_color).map_err(into_color_error)
    }

    /// Space-joined channel values, as stored in a `--color-*` variable.
    pub fn channels(&self) -> String {
        format!("{} {} {}", self.red, self.green, self.blue)
    }

    /// Alpha as a CSS percentage, if the color is translucent.
    pub fn opacity(&self) -> Option<String> {
        self.alpha.map(format_percentage)
    }

    /// Whether the color carries an alpha channel below 1.
    pub fn is_translucent(&self) -> bool {
        self.alpha.is_some()
    }
}

/// Formats an alpha fraction as a percentage without trailing zeros.
pub(crate) fn format_percentage(alpha: f64) -> String {
    let percent = (alpha * 10_000.0).round() / 100.0;
    format!("{}%", percent)
}

fn normalize_alpha(alpha: f64) -> Option<f64> {
    let alpha = alpha.clamp(0.0, 1.0);
    if alpha >= 1.0 {
        None
    } else {
        Some((alpha * 10_000.0).round() / 10_000.0)
    }
}

fn into_color_error(err: ParseError<'_, ColorParseError>) -> ColorParseError {
    match err.kind {
        ParseErrorKind::Custom(e) => e,
        ParseErrorKind::Basic(_) => ColorParseError::Syntax,
    }
}

fn parse_color<'i, 't>(
    input: &mut Parser<'i, 't>,
) -> Result<Rgba, ParseError<'i, ColorParseError>> {
    let location = input.current_source_location();
    match input.next()?.clone() {
        Token::Hash(digits) | Token::IDHash(digits) => {
            parse_hex(&digits).map_err(|e| location.new_custom_error(e))
        }
        Token::Ident(name) => named_color(&name).ok_or_else(|| {
            location.new_custom_error(ColorParseError::UnknownName(name.to_string()))
        }),
        Token::Function(name) => {
            let function = name.to_ascii_lowercase();
            match function.as_str() {
                "rgb" | "rgba" => input.parse_nested_block(parse_rgb),
                "hsl" | "hsla" => input.parse_nested_block(parse_hsl),
                _ => Err(location.new_custom_error(ColorParseError::UnknownFunction(function))),
            }
        }
        other => Err(location.new_unexpected_token_error(other)),
    }
}

fn parse_hex(digits: &str) -> Result<Rgba, ColorParseError> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::HexDigits(digits.to_string()));
    }

    let byte = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| ColorParseError::HexDigits(digits.to_string()))
    };
    // Short forms repeat each digit: #f80 -> #ff8800
    let nibble = |s: &str| byte(s).map(|v| v * 17);

    match digits.len() {
        3 => Ok(Rgba::opaque(
            nibble(&digits[0..1])?,
            nibble(&digits[1..2])?,
            nibble(&digits[2..3])?,
        )),
        4 => Ok(Rgba::with_alpha(
            nibble(&digits[0..1])?,
            nibble(&digits[1..2])?,
            nibble(&digits[2..3])?,
            hex_alpha(nibble(&digits[3..4])?),
        )),
        6 => Ok(Rgba::opaque(
            byte(&digits[0..2])?,
            byte(&digits[2..4])?,
            byte(&digits[4..6])?,
        )),
        8 => Ok(Rgba::with_alpha(
            byte(&digits[0..2])?,
            byte(&digits[2..4])?,
            byte(&digits[4..6])?,
            hex_alpha(byte(&digits[6..8])?),
        )),
        n => Err(ColorParseError::HexLength(n)),
    }
}

/// Hex alpha is rounded to two decimals, so `33` reads as exactly 0.2.
fn hex_alpha(value: u8) -> f64 {
    (value as f64 / 255.0 * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    Number(f64),
    Percentage(f64),
    Degrees(f64),
}

/// Collects the numeric components of a color function, skipping the `,`
/// and `/` separators of both the legacy and the space syntax.
fn parse_components<'i, 't>(
    input: &mut Parser<'i, 't>,
) -> Result<Vec<Component>, ParseError<'i, ColorParseError>> {
    let mut components = Vec::new();
    while !input.is_exhausted() {
        let location = input.current_source_location();
        match input.next()?.clone() {
            Token::Number { value, .. } => components.push(Component::Number(value as f64)),
            Token::Percentage { unit_value, .. } => {
                components.push(Component::Percentage(unit_value as f64))
            }
            Token::Dimension { value, unit, .. } => {
                let value = value as f64;
                let degrees = match unit.to_ascii_lowercase().as_str() {
                    "deg" => value,
                    "grad" => value * 0.9,
                    "rad" => value.to_degrees(),
                    "turn" => value * 360.0,
                    _ => return Err(location.new_custom_error(ColorParseError::Syntax)),
                };
                components.push(Component::Degrees(degrees));
            }
            Token::Comma | Token::Delim('/') => {}
            other => return Err(location.new_unexpected_token_error(other)),
        }
    }
    Ok(components)
}

fn parse_rgb<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Rgba, ParseError<'i, ColorParseError>> {
    let location = input.current_source_location();
    let components = parse_components(input)?;
    let arity = |found| ColorParseError::Arity {
        function: "rgb",
        expected: "3 or 4",
        found,
    };

    let channel = |component: Component| match component {
        Component::Number(v) => Ok(to_channel(v)),
        Component::Percentage(v) => Ok(to_channel(v * 255.0)),
        Component::Degrees(_) => Err(ColorParseError::Syntax),
    };

    match components.as_slice() {
        [r, g, b] => Ok(Rgba::opaque(
            channel(*r).map_err(|e| location.new_custom_error(e))?,
            channel(*g).map_err(|e| location.new_custom_error(e))?,
            channel(*b).map_err(|e| location.new_custom_error(e))?,
        )),
        [r, g, b, a] => Ok(Rgba::with_alpha(
            channel(*r).map_err(|e| location.new_custom_error(e))?,
            channel(*g).map_err(|e| location.new_custom_error(e))?,
            channel(*b).map_err(|e| location.new_custom_error(e))?,
            alpha(*a).map_err(|e| location.new_custom_error(e))?,
        )),
        other => Err(location.new_custom_error(arity(other.len()))),
    }
}

fn parse_hsl<'i, 't>(input: &mut Parser<'i, 't>) -> Result<Rgba, ParseError<'i, ColorParseError>> {
    let location = input.current_source_location();
    let components = parse_components(input)?;

    let hue = |component: Component| match component {
        Component::Number(v) | Component::Degrees(v) => Ok(v),
        Component::Percentage(_) => Err(ColorParseError::Syntax),
    };
    // Modern syntax allows bare numbers for saturation and lightness.
    let fraction = |component: Component| match component {
        Component::Percentage(v) => Ok(v.clamp(0.0, 1.0)),
        Component::Number(v) => Ok((v / 100.0).clamp(0.0, 1.0)),
        Component::Degrees(_) => Err(ColorParseError::Syntax),
    };

    let (h, s, l, a) = match components.as_slice() {
        [h, s, l] => (*h, *s, *l, None),
        [h, s, l, a] => (*h, *s, *l, Some(*a)),
        other => {
            return Err(location.new_custom_error(ColorParseError::Arity {
                function: "hsl",
                expected: "3 or 4",
                found: other.len(),
            }))
        }
    };

    let (red, green, blue) = hsl_to_rgb(
        hue(h).map_err(|e| location.new_custom_error(e))?,
        fraction(s).map_err(|e| location.new_custom_error(e))?,
        fraction(l).map_err(|e| location.new_custom_error(e))?,
    );

    match a {
        Some(a) => Ok(Rgba::with_alpha(
            red,
            green,
            blue,
            alpha(a).map_err(|e| location.new_custom_error(e))?,
        )),
        None => Ok(Rgba::opaque(red, green, blue)),
    }
}

fn alpha(component: Component) -> Result<f64, ColorParseError> {
    match component {
        Component::Number(v) | Component::Percentage(v) => Ok(v),
        Component::Degrees(_) => Err(ColorParseError::Syntax),
    }
}

fn to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let hue = hue.rem_euclid(360.0) / 360.0;
    if saturation == 0.0 {
        let v = to_channel(lightness * 255.0);
        return (v, v, v);
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    let component = |t: f64| {
        let t = t.rem_euclid(1.0);
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        to_channel(v * 255.0)
    };

    (
        component(hue + 1.0 / 3.0),
        component(hue),
        component(hue - 1.0 / 3.0),
    )
}

fn named_color(name: &str) -> Option<Rgba> {
    let name = name.to_ascii_lowercase();
    if name == "transparent" {
        return Some(Rgba::with_alpha(0, 0, 0, 0.0));
    }
    NAMED_COLORS
        .get(name.as_str())
        .map(|&(r, g, b)| Rgba::opaque(r, g, b))
}

static NAMED_COLORS: Lazy<HashMap<&'static str, (u8, u8, u8)>> = Lazy::new(|| {
    [
        ("aliceblue", (240, 248, 255)),
        ("antiquewhite", (250, 235, 215)),
        ("aqua", (0, 255, 255)),
        ("aquamarine", (127, 255, 212)),
        ("azure", (240, 255, 255)),
        ("beige", (245, 245, 220)),
        ("bisque", (255, 228, 196)),
        ("black", (0, 0, 0)),
        ("blanchedalmond", (255, 235, 205)),
        ("blue", (0, 0, 255)),
        ("blueviolet", (138, 43, 226)),
        ("brown", (165, 42, 42)),
        ("burlywood", (222, 184, 135)),
        ("cadetblue", (95, 158, 160)),
        ("chartreuse", (127, 255, 0)),
        ("chocolate", (210, 105, 30)),
        ("coral", (255, 127, 80)),
        ("cornflowerblue", (100, 149, 237)),
        ("cornsilk", (255, 248, 220)),
        ("crimson", (220, 20, 60)),
        ("cyan", (0, 255, 255)),
        ("darkblue", (0, 0, 139)),
        ("darkcyan", (0, 139, 139)),
        ("darkgoldenrod", (184, 134, 11)),
        ("darkgray", (169, 169, 169)),
        ("darkgreen", (0, 100, 0)),
        ("darkgrey", (169, 169, 169)),
        ("darkkhaki", (189, 183, 107)),
        ("darkmagenta", (139, 0, 139)),
        ("darkolivegreen", (85, 107, 47)),
        ("darkorange", (255, 140, 0)),
        ("darkorchid", (153, 50, 204)),
        ("darkred", (139, 0, 0)),
        ("darksalmon", (233, 150, 122)),
        ("darkseagreen", (143, 188, 143)),
        ("darkslateblue", (72, 61, 139)),
        ("darkslategray", (47, 79, 79)),
        ("darkslategrey", (47, 79, 79)),
        ("darkturquoise", (0, 206, 209)),
        ("darkviolet", (148, 0, 211)),
        ("deeppink", (255, 20, 147)),
        ("deepskyblue", (0, 191, 255)),
        ("dimgray", (105, 105, 105)),
        ("dimgrey", (105, 105, 105)),
        ("dodgerblue", (30, 144, 255)),
        ("firebrick", (178, 34, 34)),
        ("floralwhite", (255, 250, 240)),
        ("forestgreen", (34, 139, 34)),
        ("fuchsia", (255, 0, 255)),
        ("gainsboro", (220, 220, 220)),
        ("ghostwhite", (248, 248, 255)),
        ("gold", (255, 215, 0)),
        ("goldenrod", (218, 165, 32)),
        ("gray", (128, 128, 128)),
        ("green", (0, 128, 0)),
        ("greenyellow", (173, 255, 47)),
        ("grey", (128, 128, 128)),
        ("honeydew", (240, 255, 240)),
        ("hotpink", (255, 105, 180)),
        ("indianred", (205, 92, 92)),
        ("indigo", (75, 0, 130)),
        ("ivory", (255, 255, 240)),
        ("khaki", (240, 230, 140)),
        ("lavender", (230, 230, 250)),
        ("lavenderblush", (255, 240, 245)),
        ("lawngreen", (124, 252, 0)),
        ("lemonchiffon", (255, 250, 205)),
        ("lightblue", (173, 216, 230)),
        ("lightcoral", (240, 128, 128)),
        ("lightcyan", (224, 255, 255)),
        ("lightgoldenrodyellow", (250, 250, 210)),
        ("lightgray", (211, 211, 211)),
        ("lightgreen", (144, 238, 144)),
        ("lightgrey", (211, 211, 211)),
        ("lightpink", (255, 182, 193)),
        ("lightsalmon", (255, 160, 122)),
        ("lightseagreen", (32, 178, 170)),
        ("lightskyblue", (135, 206, 250)),
        ("lightslategray", (119, 136, 153)),
        ("lightslategrey", (119, 136, 153)),
        ("lightsteelblue", (176, 196, 222)),
        ("lightyellow", (255, 255, 224)),
        ("lime", (0, 255, 0)),
        ("limegreen", (50, 205, 50)),
        ("linen", (250, 240, 230)),
        ("magenta", (255, 0, 255)),
        ("maroon", (128, 0, 0)),
        ("mediumaquamarine", (102, 205, 170)),
        ("mediumblue", (0, 0, 205)),
        ("mediumorchid", (186, 85, 211)),
        ("mediumpurple", (147, 112, 219)),
        ("mediumseagreen", (60, 179, 113)),
        ("mediumslateblue", (123, 104, 238)),
        ("mediumspringgreen", (0, 250, 154)),
        ("mediumturquoise", (72, 209, 204)),
        ("mediumvioletred", (199, 21, 133)),
        ("midnightblue", (25, 25, 112)),
        ("mintcream", (245, 255, 250)),
        ("mistyrose", (255, 228, 225)),
        ("moccasin", (255, 228, 181)),
        ("navajowhite", (255, 222, 173)),
        ("navy", (0, 0, 128)),
        ("oldlace", (253, 245, 230)),
        ("olive", (128, 128, 0)),
        ("olivedrab", (107, 142, 35)),
        ("orange", (255, 165, 0)),
        ("orangered", (255, 69, 0)),
        ("orchid", (218, 112, 214)),
        ("palegoldenrod", (238, 232, 170)),
        ("palegreen", (152, 251, 152)),
        ("paleturquoise", (175, 238, 238)),
        ("palevioletred", (219, 112, 147)),
        ("papayawhip", (255, 239, 213)),
        ("peachpuff", (255, 218, 185)),
        ("peru", (205, 133, 63)),
        ("pink", (255, 192, 203)),
        ("plum", (221, 160, 221)),
        ("powderblue", (176, 224, 230)),
        ("purple", (128, 0, 128)),
        ("rebeccapurple", (102, 51, 153)),
        ("red", (255, 0, 0)),
        ("rosybrown", (188, 143, 143)),
        ("royalblue", (65, 105, 225)),
        ("saddlebrown", (139, 69, 19)),
        ("salmon", (250, 128, 114)),
        ("sandybrown", (244, 164, 96)),
        ("seagreen", (46, 139, 87)),
        ("seashell", (255, 245, 238)),
        ("sienna", (160, 82, 45)),
        ("silver", (192, 192, 192)),
        ("skyblue", (135, 206, 235)),
        ("slateblue", (106, 90, 205)),
        ("slategray", (112, 128, 144)),
        ("slategrey", (112, 128, 144)),
        ("snow", (255, 250, 250)),
        ("springgreen", (0, 255, 127)),
        ("steelblue", (70, 130, 180)),
        ("tan", (210, 180, 140)),
        ("teal", (0, 128, 128)),
        ("thistle", (216, 191, 216)),
        ("tomato", (255, 99, 71)),
        ("turquoise", (64, 224, 208)),
        ("violet", (238, 130, 238)),
        ("wheat", (245, 222, 179)),
        ("white", (255, 255, 255)),
        ("whitesmoke", (245, 245, 245)),
        ("yellow", (255, 255, 0)),
        ("yellowgreen", (154, 205, 50)),
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Hex
    // =========================================================================

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(Rgba::parse("#ffffff").unwrap(), Rgba::opaque(255, 255, 255));
        assert_eq!(Rgba::parse("#000000").unwrap(), Rgba::opaque(0, 0, 0));
        assert_eq!(Rgba::parse("#ff6b35").unwrap(), Rgba::opaque(255, 107, 53));
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(Rgba::parse("#fff").unwrap(), Rgba::opaque(255, 255, 255));
        assert_eq!(Rgba::parse("#f80").unwrap(), Rgba::opaque(255, 136, 0));
    }

    #[test]
    fn test_parse_hex_digit_leading() {
        // Tokenized as a plain hash rather than an id hash
        assert_eq!(Rgba::parse("#1e1e1e").unwrap(), Rgba::opaque(30, 30, 30));
        assert_eq!(Rgba::parse("#030303").unwrap(), Rgba::opaque(3, 3, 3));
    }

    #[test]
    fn test_parse_hex_case_insensitive() {
        assert_eq!(Rgba::parse("#FF6B35").unwrap(), Rgba::opaque(255, 107, 53));
    }

    #[test]
    fn test_parse_hex_8_digit_alpha() {
        let color = Rgba::parse("#ffffff33").unwrap();
        assert_eq!(color.channels(), "255 255 255");
        assert_eq!(color.alpha, Some(0.2));
        assert_eq!(color.opacity().as_deref(), Some("20%"));
    }

    #[test]
    fn test_parse_hex_4_digit_alpha() {
        let color = Rgba::parse("#0008").unwrap();
        assert_eq!(color.channels(), "0 0 0");
        assert_eq!(color.alpha, Some(0.53));
    }

    #[test]
    fn test_parse_hex_full_alpha_is_opaque() {
        assert_eq!(Rgba::parse("#ffffffff").unwrap().alpha, None);
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(Rgba::parse("#12"), Err(ColorParseError::HexLength(2)));
        assert_eq!(Rgba::parse("#1234567"), Err(ColorParseError::HexLength(7)));
        assert!(matches!(
            Rgba::parse("#ggg"),
            Err(ColorParseError::HexDigits(_))
        ));
    }

    // =========================================================================
    // Functional notation
    // =========================================================================

    #[test]
    fn test_parse_rgb_commas() {
        assert_eq!(
            Rgba::parse("rgb(255, 107, 53)").unwrap(),
            Rgba::opaque(255, 107, 53)
        );
    }

    #[test]
    fn test_parse_rgba_commas() {
        let color = Rgba::parse("rgba(0, 0, 0, 0.5)").unwrap();
        assert_eq!(color.channels(), "0 0 0");
        assert_eq!(color.opacity().as_deref(), Some("50%"));
    }

    #[test]
    fn test_parse_rgb_space_syntax_with_slash_alpha() {
        let color = Rgba::parse("rgb(10 20 30 / 25%)").unwrap();
        assert_eq!(color.channels(), "10 20 30");
        assert_eq!(color.alpha, Some(0.25));
    }

    #[test]
    fn test_parse_rgb_percentage_channels() {
        assert_eq!(
            Rgba::parse("rgb(100%, 50%, 0%)").unwrap(),
            Rgba::opaque(255, 128, 0)
        );
    }

    #[test]
    fn test_parse_rgb_clamps_channels() {
        assert_eq!(
            Rgba::parse("rgb(300, -5, 12.6)").unwrap(),
            Rgba::opaque(255, 0, 13)
        );
    }

    #[test]
    fn test_parse_rgb_function_name_case_insensitive() {
        assert_eq!(Rgba::parse("RGB(1, 2, 3)").unwrap(), Rgba::opaque(1, 2, 3));
    }

    #[test]
    fn test_parse_rgb_wrong_arity() {
        assert!(matches!(
            Rgba::parse("rgb(1, 2)"),
            Err(ColorParseError::Arity { found: 2, .. })
        ));
    }

    #[test]
    fn test_parse_hsl() {
        assert_eq!(
            Rgba::parse("hsl(0, 100%, 50%)").unwrap(),
            Rgba::opaque(255, 0, 0)
        );
        assert_eq!(
            Rgba::parse("hsl(120deg 100% 25%)").unwrap(),
            Rgba::opaque(0, 128, 0)
        );
        assert_eq!(
            Rgba::parse("hsl(0.5turn, 100%, 50%)").unwrap(),
            Rgba::opaque(0, 255, 255)
        );
    }

    #[test]
    fn test_parse_hsla_alpha() {
        let color = Rgba::parse("hsla(0, 0%, 100%, 0.125)").unwrap();
        assert_eq!(color.channels(), "255 255 255");
        assert_eq!(color.opacity().as_deref(), Some("12.5%"));
    }

    #[test]
    fn test_parse_unknown_function() {
        assert_eq!(
            Rgba::parse("lab(50% 40 59)"),
            Err(ColorParseError::UnknownFunction("lab".to_string()))
        );
    }

    // =========================================================================
    // Named colors and garbage
    // =========================================================================

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(Rgba::parse("red").unwrap(), Rgba::opaque(255, 0, 0));
        assert_eq!(
            Rgba::parse("RebeccaPurple").unwrap(),
            Rgba::opaque(102, 51, 153)
        );
    }

    #[test]
    fn test_parse_transparent() {
        let color = Rgba::parse("transparent").unwrap();
        assert_eq!(color.channels(), "0 0 0");
        assert_eq!(color.opacity().as_deref(), Some("0%"));
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            Rgba::parse("banana"),
            Err(ColorParseError::UnknownName("banana".to_string()))
        );
    }

    #[test]
    fn test_parse_empty_and_trailing_input() {
        assert_eq!(Rgba::parse("   "), Err(ColorParseError::Empty));
        assert!(Rgba::parse("#fff #000").is_err());
        assert!(Rgba::parse("12px").is_err());
    }

    #[test]
    fn test_format_percentage_trims_float_noise() {
        assert_eq!(format_percentage(0.3), "30%");
        assert_eq!(format_percentage(0.07), "7%");
        assert_eq!(format_percentage(0.125), "12.5%");
        assert_eq!(format_percentage(1.0), "100%");
    }
}
