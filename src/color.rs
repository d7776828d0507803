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

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

/// A validated truecolor (24-bit) color. Only ever produced from components
/// that passed [crate::normalize_color].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// A validated position in the 256-entry indexed palette. Only ever produced
/// by [crate::normalize_palette_index].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ansi256Color {
    pub index: u8,
}

/// A caller-supplied scalar for a numeric color slot, prior to validation.
///
/// The `Bool` variant exists so that a boolean smuggled into a numeric slot is
/// rejected at runtime with a type error rather than silently read as 0 or 1.
/// This keeps the validation behavior identical across every representation a
/// caller can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorValue {
    Int(i64),
    Bool(bool),
}

/// A caller-supplied color in one of the accepted input shapes, prior to
/// normalization. Exactly one shape is active per call.
///
/// - `Hex`: 3 or 6 hex digits with an optional single leading `#`, eg
///   `"#FF8800"`, `"CC33AA"`, or the shorthand `"F80"`.
/// - `Triple`: an ordered sequence which must hold exactly 3 values, mapping
///   positionally to red, green, blue.
/// - `Components`: three independently supplied values; green and blue must
///   both be present or normalization fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    Hex(String),
    Triple(Vec<ColorValue>),
    Components {
        red: ColorValue,
        green: Option<ColorValue>,
        blue: Option<ColorValue>,
    },
}

mod color_value_impl {
    use super::*;

    impl From<i64> for ColorValue {
        fn from(value: i64) -> Self { ColorValue::Int(value) }
    }

    impl From<i32> for ColorValue {
        fn from(value: i32) -> Self { ColorValue::Int(i64::from(value)) }
    }

    impl From<u8> for ColorValue {
        fn from(value: u8) -> Self { ColorValue::Int(i64::from(value)) }
    }

    impl From<bool> for ColorValue {
        fn from(value: bool) -> Self { ColorValue::Bool(value) }
    }
}

mod color_spec_impl {
    use super::*;

    impl ColorSpec {
        /// The separate-components shape with all three values present.
        pub fn components(
            red: impl Into<ColorValue>,
            green: impl Into<ColorValue>,
            blue: impl Into<ColorValue>,
        ) -> Self {
            ColorSpec::Components {
                red: red.into(),
                green: Some(green.into()),
                blue: Some(blue.into()),
            }
        }
    }

    impl From<&str> for ColorSpec {
        fn from(hex: &str) -> Self { ColorSpec::Hex(hex.to_string()) }
    }

    impl From<String> for ColorSpec {
        fn from(hex: String) -> Self { ColorSpec::Hex(hex) }
    }

    impl From<(u8, u8, u8)> for ColorSpec {
        fn from((red, green, blue): (u8, u8, u8)) -> Self {
            ColorSpec::Triple(vec![red.into(), green.into(), blue.into()])
        }
    }

    impl From<[u8; 3]> for ColorSpec {
        fn from([red, green, blue]: [u8; 3]) -> Self {
            ColorSpec::Triple(vec![red.into(), green.into(), blue.into()])
        }
    }

    impl From<(ColorValue, ColorValue, ColorValue)> for ColorSpec {
        fn from((red, green, blue): (ColorValue, ColorValue, ColorValue)) -> Self {
            ColorSpec::Triple(vec![red, green, blue])
        }
    }

    impl From<Vec<ColorValue>> for ColorSpec {
        fn from(values: Vec<ColorValue>) -> Self { ColorSpec::Triple(values) }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tuple_and_array_forms_build_the_same_triple() {
        let from_tuple = ColorSpec::from((1, 2, 3));
        let from_array = ColorSpec::from([1, 2, 3]);
        assert_eq!(from_tuple, from_array);
        assert_eq!(
            from_tuple,
            ColorSpec::Triple(vec![
                ColorValue::Int(1),
                ColorValue::Int(2),
                ColorValue::Int(3)
            ])
        );
    }

    #[test]
    fn str_form_builds_hex() {
        assert_eq!(
            ColorSpec::from("#FF8800"),
            ColorSpec::Hex("#FF8800".to_string())
        );
    }

    #[test]
    fn components_helper_fills_all_three_slots() {
        assert_eq!(
            ColorSpec::components(10, 20, 30),
            ColorSpec::Components {
                red: ColorValue::Int(10),
                green: Some(ColorValue::Int(20)),
                blue: Some(ColorValue::Int(30)),
            }
        );
    }
}
