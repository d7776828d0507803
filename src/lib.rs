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

//! # r3bl_colorize
//!
//! Style terminal text with ANSI escape sequences: the standard 16-color
//! palette, ANSI 256 (8-bit) indexed color, and truecolor (24-bit RGB)
//! output, with awareness of whether stdout is an interactive terminal.
//!
//! There are three cooperating pieces:
//!
//! 1. [SgrCode] is the static catalogue of escape sequences: text styles,
//!    selective resets, and the 16-color foreground / background palette.
//!    Rendering one via `Display` produces the bit-exact wire format.
//! 2. [normalize_color()] and friends convert any accepted color
//!    representation (hex string, component triple, separate components, or
//!    a palette index) into validated values and escape-sequence strings.
//!    Invalid input fails with a specific [ColorizeError]; see [ErrorKind]
//!    for the failure classes.
//! 3. [colorize()] applies arbitrarily nested [CodeGroup]s of escape codes to
//!    a text payload, flattened depth-first in caller order, and decides per
//!    call whether to emit raw escape sequences or plain text (the
//!    process-wide [global_force_color] flag, a per-call override, or an
//!    interactive stdout all enable styling).
//!
//! # Example usage:
//!
//! ```rust
//! use r3bl_colorize::{BasicColor, CodeGroup, SgrCode, colorize_with, foreground_rgb};
//!
//! let styled = colorize_with(
//!     "hello",
//!     &[
//!         SgrCode::Bold.into(),
//!         SgrCode::Foreground(BasicColor::Red).into(),
//!     ],
//!     Some(true),
//! );
//! assert_eq!(styled, "\x1b[1m\x1b[31mhello\x1b[0m");
//!
//! let orange = foreground_rgb("#FF8800").unwrap();
//! let styled = colorize_with("hello", &[CodeGroup::from(orange)], Some(true));
//! assert_eq!(styled, "\x1b[38;2;255;136;0mhello\x1b[0m");
//! ```
//!
//! Truecolor support may vary depending on the terminal. On Windows, call
//! [try_enable_ansi_support] once at startup; if it reports `false`, either
//! print plain text or force styling via [global_force_color].

// Attach.
pub mod ansi_escape_codes;
pub mod color;
pub mod colorize;
pub mod detect_ansi_support;
pub mod error;
pub mod normalize_color;
pub mod term;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use colorize::*;
pub use detect_ansi_support::*;
pub use error::*;
pub use normalize_color::*;
pub use term::*;
