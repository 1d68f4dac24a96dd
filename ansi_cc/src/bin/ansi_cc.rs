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

//! Small demo for `r3bl_ansi_cc`. It is also the binary under test for the stdout
//! tests in `tests/ansi_cc_bin.rs`, since there is no easy way to test `stdout`
//! without spawning a new process.
//!
//! ```text
//! ansi_cc palette
//! ansi_cc print --color light-blue hello world
//! ansi_cc --log-level debug print --no-newline -c red "no newline"
//! ```

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_ansi_cc::{Operand, print, print_available_colors, println};

use crate::clap_config::{CLIArgs, CLICommand};

fn main() -> miette::Result<()> {
    let cli_args = CLIArgs::parse();

    if let Some(level_filter) = cli_args.global_options.log_level {
        tracing_subscriber::fmt()
            .with_max_level(level_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    match cli_args.command {
        CLICommand::Palette => print_available_colors().into_diagnostic()?,
        CLICommand::Print {
            color,
            no_newline,
            words,
        } => {
            let text = words.join(" ");
            let operands = [Operand::from(&text)];
            if no_newline {
                print(color, &operands).into_diagnostic()?;
            } else {
                println(color, &operands).into_diagnostic()?;
            }
            tracing::debug!(color = color.name(), %text, "printed");
        }
    }

    Ok(())
}

mod clap_config {
    use clap::{Args, Parser, Subcommand};
    use r3bl_ansi_cc::AnsiColor;
    use tracing_core::LevelFilter;

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "ansi_cc")]
    #[command(about = "Print text in basic ANSI colors")]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(true))]
    pub struct CLIArgs {
        #[command(subcommand)]
        pub command: CLICommand,

        #[command(flatten)]
        pub global_options: GlobalOption,
    }

    #[derive(Debug, Subcommand)]
    pub enum CLICommand {
        /// Print every available color name in its own color.
        Palette,
        /// Print the given words, separated by spaces, in one color.
        Print {
            #[arg(
                long,
                short = 'c',
                default_value = "none",
                help = "Color name, eg: red, light-blue, none"
            )]
            color: AnsiColor,

            #[arg(long, short = 'n', help = "Do not append a newline.")]
            no_newline: bool,

            #[arg(required = true)]
            words: Vec<String>,
        },
    }

    #[derive(Debug, Args)]
    pub struct GlobalOption {
        #[arg(
            global = true,
            long,
            short = 'l',
            help = "Log to stderr at this level (error, warn, info, debug, trace)."
        )]
        pub log_level: Option<LevelFilter>,
    }
}
