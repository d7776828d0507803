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

use std::{io::IsTerminal as _,
          sync::atomic::{AtomicBool, AtomicI8, Ordering}};

/// The stream to check for interactivity.
#[derive(Clone, Copy, Debug)]
pub enum Stream {
    Stdout,
    Stderr,
}

pub fn is_a_tty(stream: Stream) -> bool {
    match stream {
        Stream::Stdout => std::io::stdout().is_terminal(),
        Stream::Stderr => std::io::stderr().is_terminal(),
    }
}

/// Process-wide force flag. When set, styling calls emit escape sequences
/// even when the output stream is not interactive.
///
/// This is a global variable because it is explicit process-wide
/// configuration: set it at startup (or from a CLI flag), and every
/// subsequent styling call reads it. It has no effect on already-produced
/// strings. A single scalar with no cross-field invariant, so relaxed
/// atomic access is all that is needed.
pub mod global_force_color {
    use super::*;

    static FORCE_COLOR_GLOBAL: AtomicBool = AtomicBool::new(false);

    pub fn set_override(force: bool) {
        FORCE_COLOR_GLOBAL.store(force, Ordering::Relaxed);
    }

    pub fn clear_override() { FORCE_COLOR_GLOBAL.store(false, Ordering::Relaxed); }

    pub fn is_forced() -> bool { FORCE_COLOR_GLOBAL.load(Ordering::Relaxed) }
}

/// Override for the output-interactivity signal.
///
/// [output_is_interactive] asks the real stream unless an override is set
/// here. Tests use this to pin the signal to a known value.
///
/// # Testing support
///
/// The [serial_test](https://crates.io/crates/serial_test) crate is used to
/// test behavior that depends on this override. In any test that sets it,
/// please use the `#[serial]` attribute, and clear the override before the
/// test ends. Otherwise there will be flakiness in the test results (tests
/// are run in parallel using many threads).
pub mod global_tty_override {
    use super::*;

    static TTY_OVERRIDE_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    const NOT_SET_VALUE: i8 = -1;

    pub fn set_override(interactive: bool) {
        TTY_OVERRIDE_GLOBAL.store(i8::from(interactive), Ordering::SeqCst);
    }

    pub fn clear_override() {
        TTY_OVERRIDE_GLOBAL.store(NOT_SET_VALUE, Ordering::SeqCst);
    }

    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<bool, ()> {
        match TTY_OVERRIDE_GLOBAL.load(Ordering::SeqCst) {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(()),
        }
    }
}

/// Whether the output stream can render escape sequences. The override wins
/// if set; otherwise the real stream is queried. Called fresh on every
/// styling call, never cached.
pub fn output_is_interactive(stream: Stream) -> bool {
    match global_tty_override::try_get_override() {
        Ok(interactive) => interactive,
        Err(()) => is_a_tty(stream),
    }
}

/// The capability decision for one styling call: the per-call `force`
/// argument if given, else the process-wide force flag; ORed with stdout
/// interactivity.
pub fn should_colorize(force: Option<bool>) -> bool {
    force.unwrap_or_else(global_force_color::is_forced)
        || output_is_interactive(Stream::Stdout)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn force_flag_cycle() {
        global_force_color::set_override(true);
        assert!(global_force_color::is_forced());

        global_force_color::set_override(false);
        assert!(!global_force_color::is_forced());

        global_force_color::set_override(true);
        global_force_color::clear_override();
        assert!(!global_force_color::is_forced());
    }

    #[test]
    #[serial]
    fn tty_override_cycle() {
        global_tty_override::set_override(true);
        assert_eq!(global_tty_override::try_get_override(), Ok(true));

        global_tty_override::set_override(false);
        assert_eq!(global_tty_override::try_get_override(), Ok(false));

        global_tty_override::clear_override();
        assert_eq!(global_tty_override::try_get_override(), Err(()));
    }

    #[test]
    #[serial]
    fn decision_precedence() {
        global_tty_override::set_override(false);

        global_force_color::clear_override();
        assert!(!should_colorize(None));
        assert!(should_colorize(Some(true)));

        global_force_color::set_override(true);
        assert!(should_colorize(None));
        // The per-call argument takes precedence over the process-wide flag.
        assert!(!should_colorize(Some(false)));

        global_force_color::clear_override();
        global_tty_override::set_override(true);
        assert!(should_colorize(None));
        // An interactive stream styles even when force is explicitly off.
        assert!(should_colorize(Some(false)));

        global_tty_override::clear_override();
    }
}
