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

//! Demo utility for the `r3bl_colorize` library: renders the text styles,
//! the 16-color and 256-color palettes, and truecolor gradients, sized to
//! the current terminal width.

use clap::{CommandFactory as _, Parser};
use r3bl_colorize::{BasicColor,
                    SgrCode,
                    colorize,
                    get_terminal_width,
                    global_force_color,
                    try_enable_ansi_support};

fn main() -> miette::Result<()> {
    use clap_config::*;

    let args = CliArgs::parse();

    if args.enable_logging {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
        tracing::debug!(?args, "parsed CLI args");
    }

    let ansi_supported = try_enable_ansi_support();
    if args.force {
        global_force_color::set_override(true);
    }

    let run_styles = args.styles || args.all;
    let run_palette16 = args.palette16 || args.all;
    let run_palette256 = args.palette256 || args.all;
    let run_rgb = args.rgb || args.all;

    validate_rgb_flags(&args, run_rgb)?;

    if !(run_styles || run_palette16 || run_palette256 || run_rgb) {
        CliArgs::command().print_help().ok();
        return Ok(());
    }

    if run_rgb && !(1..=255).contains(&args.rgb_step) {
        miette::bail!("invalid --rgb-step value {}; must be between 1 and 255", args.rgb_step);
    }

    if !ansi_supported && !args.force {
        println!(
            "Failed to enable ANSI support.\n\
             Ensure your terminal supports ANSI escape sequences.\n\
             To bypass this check, use the '--force' flag."
        );
        std::process::exit(1);
    }

    let status = if ansi_supported {
        "ANSI terminal support enabled."
    } else {
        "Continuing with --force."
    };
    println!(
        "{}",
        colorize(
            status,
            &[
                SgrCode::Bold.into(),
                SgrCode::Foreground(BasicColor::BrightGreen).into()
            ]
        )
    );

    tracing::debug!(
        width = get_terminal_width(),
        run_styles,
        run_palette16,
        run_palette256,
        run_rgb,
        "running demos"
    );

    if run_styles {
        demo_render::render_text_styles();
    }
    if run_palette16 {
        demo_render::render_16_palette();
    }
    if run_palette256 {
        demo_render::render_256_palette(true);
        demo_render::render_256_palette(false);
    }
    if run_rgb {
        let fg_block = args.rgb_block_fg.as_deref().unwrap_or(DEFAULT_BLOCK);
        let bg_block = args.rgb_block_bg.as_deref().unwrap_or(DEFAULT_BLOCK);
        demo_render::render_rgb_gradient(true, args.rgb_step, fg_block);
        demo_render::render_rgb_gradient(false, args.rgb_step, bg_block);
    }

    Ok(())
}

const DEFAULT_RGB_STEP: u16 = 51;
const DEFAULT_BLOCK: &str = "ABC";

/// RGB-only options are a usage error unless `--rgb` (or `--all`) is on.
fn validate_rgb_flags(args: &clap_config::CliArgs, run_rgb: bool) -> miette::Result<()> {
    if run_rgb {
        return Ok(());
    }

    let mut flags_used: Vec<&str> = vec![];
    if args.rgb_step != DEFAULT_RGB_STEP {
        flags_used.push("--rgb-step");
    }
    if args.rgb_block_fg.is_some() {
        flags_used.push("--rgb-block-fg");
    }
    if args.rgb_block_bg.is_some() {
        flags_used.push("--rgb-block-bg");
    }

    if flags_used.is_empty() {
        Ok(())
    } else {
        miette::bail!(
            "RGB options specified without '--rgb' enabled. These options require '--rgb': {}",
            flags_used.join(", ")
        )
    }
}

/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
mod clap_config {
    use super::*;

    #[derive(Debug, Parser)]
    #[command(bin_name = "rcz")]
    #[command(
        about = "Demo utility for the r3bl_colorize terminal styling library",
        long_about = None
    )]
    #[command(version)]
    #[command(next_line_help = true)]
    pub struct CliArgs {
        /// Run all available demos
        #[arg(long, short = 'a')]
        pub all: bool,

        /// Display all available text styles
        #[arg(long, short = 's')]
        pub styles: bool,

        /// Display the standard 16-color ANSI palette
        #[arg(long)]
        pub palette16: bool,

        /// Display the extended 256-color ANSI palette
        #[arg(long)]
        pub palette256: bool,

        /// Display the truecolor (RGB) gradient demo
        #[arg(long, short = 'r')]
        pub rgb: bool,

        /// Step size for RGB components in the gradient demo
        #[arg(long, value_name = "N", default_value_t = DEFAULT_RGB_STEP)]
        pub rgb_step: u16,

        /// Text block for the foreground RGB gradient
        #[arg(long, value_name = "BLOCK")]
        pub rgb_block_fg: Option<String>,

        /// Text block for the background RGB gradient
        #[arg(long, value_name = "BLOCK")]
        pub rgb_block_bg: Option<String>,

        /// Force styled output even when stdout is not an interactive terminal
        #[arg(long, short = 'f')]
        pub force: bool,

        /// Print debug output to stdout
        #[arg(long, short = 'l')]
        pub enable_logging: bool,
    }
}

mod demo_render {
    use strum::IntoEnumIterator as _;

    use super::*;
    use r3bl_colorize::{background_256, background_rgb, foreground_256, foreground_rgb};

    const GRID_CELL_PADDING: usize = 2;

    /// The nine text styles, paired with display labels for the grid.
    #[rustfmt::skip]
    fn text_styles() -> [(&'static str, SgrCode); 9] {
        [
            ("Bold",            SgrCode::Bold),
            ("Dim",             SgrCode::Dim),
            ("Italic",          SgrCode::Italic),
            ("Underline",       SgrCode::Underline),
            ("DoubleUnderline", SgrCode::DoubleUnderline),
            ("Invert",          SgrCode::Invert),
            ("Hidden",          SgrCode::Hidden),
            ("Strikethrough",   SgrCode::Strikethrough),
            ("Overline",        SgrCode::Overline),
        ]
    }

    fn items_per_row(item_width: usize, padding: usize) -> usize {
        let terminal_width = get_terminal_width();
        (terminal_width / (item_width + padding)).max(1)
    }

    pub fn render_header(section_title: &str) {
        let header = format!(" {section_title} ");
        let width = get_terminal_width();
        let fill = width.saturating_sub(header.len());
        let left = fill / 2;
        let right = fill - left;
        let line = format!("{}{header}{}", "=".repeat(left), "=".repeat(right));
        println!(
            "\n{}\n",
            colorize(
                &line,
                &[
                    SgrCode::Bold.into(),
                    SgrCode::Foreground(BasicColor::Cyan).into()
                ]
            )
        );
    }

    fn render_grid(title: &str, items: &[(String, String)]) {
        if items.is_empty() {
            return;
        }

        let max_len = items
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or_default()
            + GRID_CELL_PADDING;
        let per_row = items_per_row(max_len, GRID_CELL_PADDING);
        render_header(title);

        for row in items.chunks(per_row) {
            let row_text: Vec<String> = row
                .iter()
                .map(|(name, code)| format!("{code}{name:<max_len$}{}", SgrCode::Reset))
                .collect();
            println!("{}", row_text.join(" "));
        }
    }

    pub fn render_text_styles() {
        let items: Vec<(String, String)> = text_styles()
            .iter()
            .map(|(name, code)| ((*name).to_string(), code.to_string()))
            .collect();
        render_grid("Text Styles", &items);
    }

    pub fn render_16_palette() {
        let foreground: Vec<(String, String)> = BasicColor::iter()
            .map(|color| {
                (format!("{color:?}"), SgrCode::Foreground(color).to_string())
            })
            .collect();
        render_grid("16-Color Foreground Palette", &foreground);

        let background: Vec<(String, String)> = BasicColor::iter()
            .map(|color| {
                (format!("{color:?}"), SgrCode::Background(color).to_string())
            })
            .collect();
        render_grid("16-Color Background Palette", &background);
    }

    pub fn render_256_palette(is_foreground: bool) {
        let title = format!(
            "256-Color Palette ({})",
            if is_foreground { "Foreground" } else { "Background" }
        );
        render_header(&title);

        let per_row = items_per_row(4, 1);
        for index in 0..=255u8 {
            // The whole index range is valid, so these cannot fail.
            let code = if is_foreground {
                foreground_256(index)
            } else {
                background_256(index)
            }
            .unwrap_or_default();
            print!("{code}{index:>3}{} ", SgrCode::Reset);
            if usize::from(index) % per_row == per_row - 1 {
                println!();
            }
        }
        if 256 % per_row != 0 {
            println!();
        }
    }

    pub fn render_rgb_gradient(is_foreground: bool, step: u16, block: &str) {
        let title = format!(
            "Truecolor RGB Gradient ({})",
            if is_foreground { "Foreground" } else { "Background" }
        );
        render_header(&title);

        let per_row = items_per_row(block.len() + 1, GRID_CELL_PADDING);
        let step = usize::from(step);
        let mut count: usize = 0;

        for red in (0..256).step_by(step) {
            for green in (0..256).step_by(step) {
                for blue in (0..256).step_by(step) {
                    let spec = vec![red.into(), green.into(), blue.into()];
                    let code = if is_foreground {
                        foreground_rgb(spec)
                    } else {
                        background_rgb(spec)
                    }
                    .unwrap_or_default();
                    print!("{code}{block}{} ", SgrCode::Reset);
                    count += 1;
                    if count % per_row == 0 {
                        println!();
                    }
                }
            }
        }
        if count % per_row != 0 {
            println!();
        }
    }
}
