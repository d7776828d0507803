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

//! Apply a set of escape codes to a text payload, honoring the current
//! output-capability policy. The composer never writes to any stream; the
//! returned [String] is its only effect.

use smallvec::SmallVec;

use crate::{SgrCode, should_colorize};

/// An arbitrarily nested, ordered group of escape codes. Leaves hold one
/// complete escape sequence each; groups nest to any depth and flatten in
/// left-to-right, depth-first order.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_colorize::{BasicColor, CodeGroup, SgrCode, colorize_with};
///
/// let styled = colorize_with(
///     "hello",
///     &[
///         CodeGroup::from(SgrCode::Bold),
///         CodeGroup::from(vec![
///             SgrCode::Foreground(BasicColor::Red).into(),
///             SgrCode::Underline.into(),
///         ]),
///     ],
///     Some(true),
/// );
/// assert_eq!(styled, "\x1b[1m\x1b[31m\x1b[4mhello\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeGroup {
    Code(String),
    Group(Vec<CodeGroup>),
}

pub mod sizing {
    use super::*;

    /// Most call sites combine a handful of styles plus a foreground and a
    /// background color. Flattening spills to the heap past this size.
    pub const MAX_FLATTENED_CODE_COUNT: usize = 12;
    pub type InlineVecCodes<'a> = SmallVec<[&'a str; MAX_FLATTENED_CODE_COUNT]>;
}

mod code_group_impl {
    use super::*;

    impl From<&str> for CodeGroup {
        fn from(code: &str) -> Self { CodeGroup::Code(code.to_string()) }
    }

    impl From<String> for CodeGroup {
        fn from(code: String) -> Self { CodeGroup::Code(code) }
    }

    impl From<SgrCode> for CodeGroup {
        fn from(code: SgrCode) -> Self { CodeGroup::Code(code.to_string()) }
    }

    impl From<Vec<CodeGroup>> for CodeGroup {
        fn from(group: Vec<CodeGroup>) -> Self { CodeGroup::Group(group) }
    }

    impl<const N: usize> From<[CodeGroup; N]> for CodeGroup {
        fn from(group: [CodeGroup; N]) -> Self {
            CodeGroup::Group(Vec::from(group))
        }
    }
}

/// Depth-first, left-to-right descent. Relative leaf order is exactly the
/// order a straightforward recursive walk visits them; nested-group order is
/// preserved, never reversed.
fn flatten<'a>(group: &'a CodeGroup, acc: &mut sizing::InlineVecCodes<'a>) {
    match group {
        CodeGroup::Code(code) => acc.push(code.as_str()),
        CodeGroup::Group(children) => {
            for child in children {
                flatten(child, acc);
            }
        }
    }
}

/// Apply the given escape codes to `text`, deciding capability from the
/// process-wide force flag and the output stream. Equivalent to
/// [`colorize_with(text, codes, None)`](colorize_with).
pub fn colorize(text: &str, codes: &[CodeGroup]) -> String {
    colorize_with(text, codes, None)
}

/// Apply the given escape codes to `text`.
///
/// - With no codes, returns `text` unchanged (a no-op, not an error).
/// - The capability decision is `force` if given, else the process-wide
///   force flag, ORed with whether stdout is interactive; it is recomputed on
///   every call. When false, returns `text` unchanged.
/// - Otherwise returns all flattened codes in order, then `text`, then the
///   reset sequence.
pub fn colorize_with(text: &str, codes: &[CodeGroup], force: Option<bool>) -> String {
    if codes.is_empty() {
        return text.to_string();
    }

    let mut flattened = sizing::InlineVecCodes::new();
    for group in codes {
        flatten(group, &mut flattened);
    }

    if !should_colorize(force) {
        return text.to_string();
    }

    let reset = SgrCode::Reset.to_string();
    let codes_len: usize = flattened.iter().map(|code| code.len()).sum();
    let mut styled = String::with_capacity(codes_len + text.len() + reset.len());
    for code in &flattened {
        styled.push_str(code);
    }
    styled.push_str(text);
    styled.push_str(&reset);
    styled
}
