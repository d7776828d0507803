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

/// Validation failures raised by color normalization. These are
/// programmer-error-class failures (an invalid call), not recoverable runtime
/// conditions; nothing in this crate catches or suppresses them.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, miette::Diagnostic)]
pub enum ColorizeError {
    /// A boolean was supplied where an integer is required. The numeric value
    /// of `true` / `false` would pass range validation silently, so the type
    /// tag is checked ahead of any range check.
    #[error("{name} cannot be a boolean")]
    BooleanValue { name: &'static str },

    #[error("{name} must be between 0 and 255, got {value}")]
    OutOfRange { name: &'static str, value: i64 },

    #[error("hex color must be 6 characters (RRGGBB), got '{hex}'")]
    HexLength { hex: String },

    #[error("invalid hex color format: '{hex}'")]
    HexFormat { hex: String },

    #[error("RGB sequence must have exactly 3 values, got {len}")]
    TripleArity { len: usize },

    #[error("when providing a single red value, green and blue must also be provided")]
    MissingGreenBlue,
}

/// The four failure classes of [ColorizeError].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Range,
    Format,
    Arity,
}

mod colorize_error_impl {
    use super::*;

    impl ColorizeError {
        #[rustfmt::skip]
        pub fn kind(&self) -> ErrorKind {
            match self {
                ColorizeError::BooleanValue { .. }    => ErrorKind::Type,
                ColorizeError::OutOfRange { .. }      => ErrorKind::Range,
                ColorizeError::HexLength { .. }       => ErrorKind::Format,
                ColorizeError::HexFormat { .. }       => ErrorKind::Format,
                ColorizeError::TripleArity { .. }     => ErrorKind::Arity,
                ColorizeError::MissingGreenBlue       => ErrorKind::Arity,
            }
        }
    }
}
