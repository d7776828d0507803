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
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

/// Every escape sequence this crate knows how to emit. Rendering one via
/// [Display] produces the bit-exact SGR wire format, eg:
/// `SgrCode::Bold.to_string() == "\x1b[1m"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    DoubleUnderline,
    Invert,
    Hidden,
    Strikethrough,
    Overline,
    ResetBoldDim,
    ResetItalic,
    ResetUnderline,
    ResetInvert,
    ResetHidden,
    ResetStrikethrough,
    ResetOverline,
    ResetForeground,
    ResetBackground,
    Foreground(BasicColor),
    Background(BasicColor),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

/// The standard 16-color palette (8 normal + 8 bright). Background code
/// numbers are foreground + 10 across the whole palette.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount, EnumIter)]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

mod basic_color_impl {
    use super::*;

    impl BasicColor {
        #[rustfmt::skip]
        pub fn foreground_code(self) -> u8 {
            match self {
                BasicColor::Black         => 30,
                BasicColor::Red           => 31,
                BasicColor::Green         => 32,
                BasicColor::Yellow        => 33,
                BasicColor::Blue          => 34,
                BasicColor::Magenta       => 35,
                BasicColor::Cyan          => 36,
                BasicColor::White         => 37,
                BasicColor::BrightBlack   => 90,
                BasicColor::BrightRed     => 91,
                BasicColor::BrightGreen   => 92,
                BasicColor::BrightYellow  => 93,
                BasicColor::BrightBlue    => 94,
                BasicColor::BrightMagenta => 95,
                BasicColor::BrightCyan    => 96,
                BasicColor::BrightWhite   => 97,
            }
        }

        pub fn background_code(self) -> u8 { self.foreground_code() + 10 }
    }
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                    => write!(f, "{CSI}0{SGR}"),
                SgrCode::Bold                     => write!(f, "{CSI}1{SGR}"),
                SgrCode::Dim                      => write!(f, "{CSI}2{SGR}"),
                SgrCode::Italic                   => write!(f, "{CSI}3{SGR}"),
                SgrCode::Underline                => write!(f, "{CSI}4{SGR}"),
                SgrCode::DoubleUnderline          => write!(f, "{CSI}21{SGR}"),
                SgrCode::Invert                   => write!(f, "{CSI}7{SGR}"),
                SgrCode::Hidden                   => write!(f, "{CSI}8{SGR}"),
                SgrCode::Strikethrough            => write!(f, "{CSI}9{SGR}"),
                SgrCode::Overline                 => write!(f, "{CSI}53{SGR}"),
                SgrCode::ResetBoldDim             => write!(f, "{CSI}22{SGR}"),
                SgrCode::ResetItalic              => write!(f, "{CSI}23{SGR}"),
                SgrCode::ResetUnderline           => write!(f, "{CSI}24{SGR}"),
                SgrCode::ResetInvert              => write!(f, "{CSI}27{SGR}"),
                SgrCode::ResetHidden              => write!(f, "{CSI}28{SGR}"),
                SgrCode::ResetStrikethrough       => write!(f, "{CSI}29{SGR}"),
                SgrCode::ResetOverline            => write!(f, "{CSI}55{SGR}"),
                SgrCode::ResetForeground          => write!(f, "{CSI}39{SGR}"),
                SgrCode::ResetBackground          => write!(f, "{CSI}49{SGR}"),
                SgrCode::Foreground(color)        => write!(f, "{CSI}{}{SGR}", color.foreground_code()),
                SgrCode::Background(color)        => write!(f, "{CSI}{}{SGR}", color.background_code()),
                SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
                SgrCode::ForegroundRGB(r, g, b)   => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
                SgrCode::BackgroundRGB(r, g, b)   => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
            }
        }
    }
}
