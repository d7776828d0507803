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

use crossterm::terminal::size;

pub const DEFAULT_WIDTH: usize = 80;

/// Get the terminal width. If there is a problem, return the default width.
pub fn get_terminal_width() -> usize {
    match size() {
        Ok((columns, _rows)) => usize::from(columns),
        Err(_) => DEFAULT_WIDTH,
    }
}

/// One-shot, best-effort attempt to make the console render ANSI escape
/// sequences. On Windows this delegates to Crossterm, which flips
/// `ENABLE_VIRTUAL_TERMINAL_PROCESSING` via `SetConsoleMode()` the first time
/// it is asked. Everywhere else ANSI rendering is assumed available.
///
/// There is no retry: a `false` result means the caller must fall back to
/// plain output (or force styling explicitly).
pub fn try_enable_ansi_support() -> bool {
    #[cfg(windows)]
    {
        crossterm::ansi_support::supports_ansi()
    }
    #[cfg(not(windows))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(windows))]
    #[test]
    fn ansi_support_is_assumed_outside_windows() {
        assert!(super::try_enable_ansi_support());
    }
}
