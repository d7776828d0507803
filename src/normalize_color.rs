/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Pure conversion of caller-supplied color input into validated palette /
//! RGB values, and of validated values into escape-sequence strings. No side
//! effects; identical input always yields an identical output or an identical
//! failure.

use crate::{Ansi256Color, ColorSpec, ColorValue, ColorizeError, RgbColor, SgrCode};

/// Validate a 256-color palette index.
///
/// # Errors
///
/// - [ColorizeError::BooleanValue] if `value` is a boolean.
/// - [ColorizeError::OutOfRange] if `value` is outside `0..=255`.
pub fn normalize_palette_index(
    value: impl Into<ColorValue>,
) -> Result<Ansi256Color, ColorizeError> {
    match value.into() {
        ColorValue::Bool(_) => Err(ColorizeError::BooleanValue {
            name: "color_index",
        }),
        ColorValue::Int(value) => u8::try_from(value)
            .map(|index| Ansi256Color { index })
            .map_err(|_| ColorizeError::OutOfRange {
                name: "color_index",
                value,
            }),
    }
}

/// Convert any accepted [ColorSpec] shape into a validated [RgbColor].
///
/// After the three raw values are extracted (by whichever shape), each is
/// validated independently, strictly red then green then blue, so failure
/// messages are deterministic.
///
/// # Errors
///
/// - [ColorizeError::HexLength] / [ColorizeError::HexFormat] for a malformed
///   hex string.
/// - [ColorizeError::TripleArity] for a sequence whose length is not 3.
/// - [ColorizeError::MissingGreenBlue] for the separate-components shape with
///   green or blue absent.
/// - [ColorizeError::BooleanValue] / [ColorizeError::OutOfRange] for an
///   invalid component.
pub fn normalize_color(spec: impl Into<ColorSpec>) -> Result<RgbColor, ColorizeError> {
    match spec.into() {
        ColorSpec::Hex(hex) => parse_hex(&hex),
        ColorSpec::Triple(values) => {
            if values.len() != 3 {
                return Err(ColorizeError::TripleArity { len: values.len() });
            }
            let red = validate_component("red", values[0])?;
            let green = validate_component("green", values[1])?;
            let blue = validate_component("blue", values[2])?;
            Ok(RgbColor { red, green, blue })
        }
        ColorSpec::Components { red, green, blue } => {
            let (Some(green), Some(blue)) = (green, blue) else {
                return Err(ColorizeError::MissingGreenBlue);
            };
            let red = validate_component("red", red)?;
            let green = validate_component("green", green)?;
            let blue = validate_component("blue", blue)?;
            Ok(RgbColor { red, green, blue })
        }
    }
}

/// 256-color foreground escape code, eg `normalize` then `"\x1b[38;5;{i}m"`.
///
/// # Errors
///
/// Same as [normalize_palette_index].
pub fn foreground_256(value: impl Into<ColorValue>) -> Result<String, ColorizeError> {
    let color = normalize_palette_index(value)?;
    Ok(SgrCode::ForegroundAnsi256(color.index).to_string())
}

/// 256-color background escape code, eg `normalize` then `"\x1b[48;5;{i}m"`.
///
/// # Errors
///
/// Same as [normalize_palette_index].
pub fn background_256(value: impl Into<ColorValue>) -> Result<String, ColorizeError> {
    let color = normalize_palette_index(value)?;
    Ok(SgrCode::BackgroundAnsi256(color.index).to_string())
}

/// Truecolor (24-bit) foreground escape code for any accepted [ColorSpec]
/// shape.
///
/// # Errors
///
/// Same as [normalize_color].
pub fn foreground_rgb(spec: impl Into<ColorSpec>) -> Result<String, ColorizeError> {
    let RgbColor { red, green, blue } = normalize_color(spec)?;
    Ok(SgrCode::ForegroundRGB(red, green, blue).to_string())
}

/// Truecolor (24-bit) background escape code for any accepted [ColorSpec]
/// shape.
///
/// # Errors
///
/// Same as [normalize_color].
pub fn background_rgb(spec: impl Into<ColorSpec>) -> Result<String, ColorizeError> {
    let RgbColor { red, green, blue } = normalize_color(spec)?;
    Ok(SgrCode::BackgroundRGB(red, green, blue).to_string())
}

/// Boolean check runs ahead of the range check. See
/// [ColorizeError::BooleanValue].
fn validate_component(
    name: &'static str,
    value: ColorValue,
) -> Result<u8, ColorizeError> {
    match value {
        ColorValue::Bool(_) => Err(ColorizeError::BooleanValue { name }),
        ColorValue::Int(value) => {
            u8::try_from(value).map_err(|_| ColorizeError::OutOfRange { name, value })
        }
    }
}

/// Parse `"#FF8800"`, `"FF8800"`, or the 3-digit shorthand `"F80"` (each
/// digit doubled, so `"F80"` reads as `"FF8800"`). At most one leading `#` is
/// stripped. Surrounding whitespace is ignored.
fn parse_hex(input: &str) -> Result<RgbColor, ColorizeError> {
    let trimmed = input.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let expanded: String = if body.len() == 3 {
        body.chars().flat_map(|c| [c, c]).collect()
    } else {
        body.to_string()
    };

    if expanded.len() != 6 {
        return Err(ColorizeError::HexLength { hex: expanded });
    }

    // Guards the byte-range slicing below against multi-byte characters.
    if !expanded.is_ascii() {
        return Err(ColorizeError::HexFormat { hex: expanded });
    }

    let parse_pair = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16).map_err(|_| ColorizeError::HexFormat {
            hex: expanded.clone(),
        })
    };

    let red = parse_pair(0..2)?;
    let green = parse_pair(2..4)?;
    let blue = parse_pair(4..6)?;
    Ok(RgbColor { red, green, blue })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::ErrorKind;

    #[test_case(0)]
    #[test_case(42)]
    #[test_case(255)]
    fn palette_index_round_trips(index: u8) {
        assert_eq!(
            normalize_palette_index(index),
            Ok(Ansi256Color { index })
        );
    }

    #[test_case(-1)]
    #[test_case(256)]
    #[test_case(999)]
    fn palette_index_out_of_range(value: i64) {
        let err = normalize_palette_index(value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(
            err,
            ColorizeError::OutOfRange {
                name: "color_index",
                value
            }
        );
    }

    #[test]
    fn palette_index_rejects_boolean() {
        let err = normalize_palette_index(true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(
            err,
            ColorizeError::BooleanValue {
                name: "color_index"
            }
        );
    }

    #[test_case("#FF8800" ; "hash_ff8800")]
    #[test_case("FF8800" ; "bare_ff8800")]
    #[test_case("F80" ; "bare_f80")]
    #[test_case("  #F80  " ; "padded_hash_f80")]
    fn hex_forms_are_representation_invariant(hex: &str) {
        assert_eq!(
            normalize_color(hex),
            Ok(RgbColor {
                red: 255,
                green: 136,
                blue: 0
            })
        );
    }

    #[test]
    fn hex_shorthand_doubles_each_digit() {
        assert_eq!(
            normalize_color("19A"),
            Ok(RgbColor {
                red: 0x11,
                green: 0x99,
                blue: 0xAA
            })
        );
        assert_eq!(
            normalize_color("#333"),
            Ok(RgbColor {
                red: 51,
                green: 51,
                blue: 51
            })
        );
    }

    #[test]
    fn hex_parses_lowercase() {
        assert_eq!(
            normalize_color("00aabb"),
            Ok(RgbColor {
                red: 0,
                green: 170,
                blue: 187
            })
        );
    }

    #[test_case("1234")]
    #[test_case("FF88001")]
    #[test_case("")]
    fn hex_wrong_length(hex: &str) {
        let err = normalize_color(hex).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(
            err,
            ColorizeError::HexLength {
                hex: hex.to_string()
            }
        );
    }

    #[test]
    fn hex_invalid_digits() {
        let err = normalize_color("GGGGGG").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(
            err,
            ColorizeError::HexFormat {
                hex: "GGGGGG".to_string()
            }
        );
    }

    #[test]
    fn hex_non_ascii_is_a_format_error_not_a_panic() {
        let err = normalize_color("€€").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn triple_and_components_forms_are_representation_invariant() {
        let expected = Ok(RgbColor {
            red: 10,
            green: 20,
            blue: 30,
        });
        assert_eq!(normalize_color((10, 20, 30)), expected);
        assert_eq!(normalize_color([10, 20, 30]), expected);
        assert_eq!(normalize_color(ColorSpec::components(10, 20, 30)), expected);
    }

    #[test_case(0; "empty")]
    #[test_case(2; "too short")]
    #[test_case(4; "too long")]
    fn triple_wrong_arity(len: usize) {
        let values = vec![ColorValue::Int(1); len];
        assert_eq!(
            normalize_color(values),
            Err(ColorizeError::TripleArity { len })
        );
    }

    #[test]
    fn components_missing_green_or_blue() {
        let missing_both = ColorSpec::Components {
            red: ColorValue::Int(10),
            green: None,
            blue: None,
        };
        let err = normalize_color(missing_both).unwrap_err();
        assert_eq!(err, ColorizeError::MissingGreenBlue);
        assert_eq!(err.kind(), ErrorKind::Arity);

        let missing_blue = ColorSpec::Components {
            red: ColorValue::Int(10),
            green: Some(ColorValue::Int(20)),
            blue: None,
        };
        assert_eq!(
            normalize_color(missing_blue),
            Err(ColorizeError::MissingGreenBlue)
        );
    }

    /// The arity of the separate-components shape is checked before any
    /// component is validated.
    #[test]
    fn components_arity_check_precedes_component_validation() {
        let bad_red_and_missing_blue = ColorSpec::Components {
            red: ColorValue::Bool(true),
            green: Some(ColorValue::Int(20)),
            blue: None,
        };
        assert_eq!(
            normalize_color(bad_red_and_missing_blue),
            Err(ColorizeError::MissingGreenBlue)
        );
    }

    #[test]
    fn booleans_are_rejected_in_every_slot() {
        for (slot, name) in [(0_usize, "red"), (1, "green"), (2, "blue")] {
            let mut values = vec![
                ColorValue::Int(1),
                ColorValue::Int(2),
                ColorValue::Int(3),
            ];
            values[slot] = ColorValue::Bool(false);
            assert_eq!(
                normalize_color(values),
                Err(ColorizeError::BooleanValue { name })
            );
        }
    }

    /// Red is validated before green, green before blue.
    #[test]
    fn component_validation_order_is_red_green_blue() {
        let both_bad = vec![
            ColorValue::Int(300),
            ColorValue::Bool(true),
            ColorValue::Int(3),
        ];
        assert_eq!(
            normalize_color(both_bad),
            Err(ColorizeError::OutOfRange {
                name: "red",
                value: 300
            })
        );

        let green_and_blue_bad = vec![
            ColorValue::Int(1),
            ColorValue::Int(-5),
            ColorValue::Int(999),
        ];
        assert_eq!(
            normalize_color(green_and_blue_bad),
            Err(ColorizeError::OutOfRange {
                name: "green",
                value: -5
            })
        );
    }

    #[test_case(1, 2, 300, "blue", 300)]
    #[test_case(1, 2, -1, "blue", -1)]
    fn component_out_of_range(r: i64, g: i64, b: i64, name: &'static str, value: i64) {
        let values = vec![
            ColorValue::Int(r),
            ColorValue::Int(g),
            ColorValue::Int(b),
        ];
        assert_eq!(
            normalize_color(values),
            Err(ColorizeError::OutOfRange { name, value })
        );
    }

    #[test]
    fn fg_256_code() {
        assert_eq!(foreground_256(0).as_deref(), Ok("\x1b[38;5;0m"));
        assert_eq!(foreground_256(42).as_deref(), Ok("\x1b[38;5;42m"));
        assert_eq!(foreground_256(255).as_deref(), Ok("\x1b[38;5;255m"));
    }

    #[test]
    fn bg_256_code() {
        assert_eq!(background_256(0).as_deref(), Ok("\x1b[48;5;0m"));
        assert_eq!(background_256(100).as_deref(), Ok("\x1b[48;5;100m"));
        assert_eq!(background_256(255).as_deref(), Ok("\x1b[48;5;255m"));
    }

    #[test]
    fn fg_rgb_code_from_each_shape() {
        assert_eq!(
            foreground_rgb((1, 2, 3)).as_deref(),
            Ok("\x1b[38;2;1;2;3m")
        );
        assert_eq!(
            foreground_rgb([255, 128, 0]).as_deref(),
            Ok("\x1b[38;2;255;128;0m")
        );
        assert_eq!(
            foreground_rgb("#FF8800").as_deref(),
            Ok("\x1b[38;2;255;136;0m")
        );
        assert_eq!(
            foreground_rgb(ColorSpec::components(10, 20, 30)).as_deref(),
            Ok("\x1b[38;2;10;20;30m")
        );
    }

    #[test]
    fn bg_rgb_code_from_each_shape() {
        assert_eq!(
            background_rgb((11, 22, 33)).as_deref(),
            Ok("\x1b[48;2;11;22;33m")
        );
        assert_eq!(
            background_rgb("00AABB").as_deref(),
            Ok("\x1b[48;2;0;170;187m")
        );
    }

    /// Shorthand hex all the way through to the escape code.
    #[test]
    fn hex_shorthand_to_truecolor_code() {
        assert_eq!(
            foreground_rgb("19A").as_deref(),
            Ok("\x1b[38;2;17;153;170m")
        );
    }
}
