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

//! # r3bl_ansi_cc
//!
//! Write text wrapped in one of the 16 basic ANSI terminal colors to any
//! [`std::io::Write`] sink.
//!
//! Every colored write is three writes to the sink: the color's escape sequence, the
//! payload, and the reset sequence (`ESC[0m`). If a write fails, the operation stops
//! there and returns that [`std::io::Error`] untouched. A failed payload write therefore
//! leaves the terminal in the opened color. There is no terminal capability detection;
//! the escape sequences are always written.
//!
//! ## Colors
//!
//! [`AnsiColor`] has one variant per color. [`COLOR_TABLE`] maps the names (`"red"`,
//! `"light-blue"`, `"none"`, ...) to them, in sorted order.
//!
//! ```text
//! none          ESC[0m      dark-gray     ESC[1;30m
//! black         ESC[0;30m   light-red     ESC[1;31m
//! red           ESC[0;31m   light-green   ESC[1;32m
//! green         ESC[0;32m   yellow        ESC[1;33m
//! orange        ESC[0;33m   light-blue    ESC[1;34m
//! blue          ESC[0;34m   light-purple  ESC[1;35m
//! purple        ESC[0;35m   light-cyan    ESC[1;36m
//! cyan          ESC[0;36m   white         ESC[1;37m
//! light-gray    ESC[0;37m
//! ```
//!
//! ## Writing
//!
//! | shape     | stdout                          | explicit sink                   |
//! | :-------- | :------------------------------ | :------------------------------ |
//! | plain     | [`print()`], [`cc_print!`]      | [`fprint()`], [`ColorWriter::print()`]     |
//! | formatted | [`printf()`], [`cc_printf!`]    | [`fprintf()`], [`ColorWriter::printf()`]   |
//! | line      | [`println()`], [`cc_println!`]  | [`fprintln()`], [`ColorWriter::println()`] |
//!
//! Plain and line writes take a slice of [`Operand`]. Plain writes put a space between
//! two operands only when neither is a string; line writes put a space between all of
//! them and end with `\n`. Formatted writes take [`format_args!`].
//!
//! ```rust
//! use r3bl_ansi_cc::{AnsiColor, ColorWriter, cc_println, operands, print_available_colors};
//!
//! // To stdout.
//! cc_println!(AnsiColor::LightGreen, "build", "passed").unwrap();
//! print_available_colors().unwrap();
//!
//! // To any io::Write.
//! let mut writer = ColorWriter::new(Vec::<u8>::new());
//! writer.print(AnsiColor::Red, &operands!["error:", 404]).unwrap();
//! assert_eq!(writer.into_inner(), b"\x1b[0;31merror:404\x1b[0m");
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod ansi_cc_error;
pub mod ansi_color;
pub mod color_table;
pub mod color_writer;
pub mod decl_macros;
pub mod operand;
pub mod public_api;

// Re-export.
pub use ansi_cc_error::*;
pub use ansi_color::*;
pub use color_table::*;
pub use color_writer::*;
pub use operand::*;
pub use public_api::*;
