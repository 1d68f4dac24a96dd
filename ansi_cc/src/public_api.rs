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

//! Free functions that write to the process's standard output. There is no shared
//! global writer: each call creates a [`ColorWriter::stdout()`], which only holds a
//! handle to [`std::io::stdout()`].
//!
//! These are exercised end to end by the `ansi_cc` binary tests, since stdout can't be
//! captured from inside the test process.

use std::{fmt, io};

use crate::{AnsiColor, ColorWriter, Operand};

/// Write `operands` to stdout wrapped in `color`. See [`crate::fprint()`].
///
/// # Errors
///
/// Returns the [`io::Error`] of the first failed write to stdout.
pub fn print(color: AnsiColor, operands: &[Operand<'_>]) -> io::Result<usize> {
    ColorWriter::stdout().print(color, operands)
}

/// Write `args` to stdout wrapped in `color`. See [`crate::fprintf()`].
///
/// # Errors
///
/// Returns the [`io::Error`] of the first failed write to stdout.
pub fn printf(color: AnsiColor, args: fmt::Arguments<'_>) -> io::Result<usize> {
    ColorWriter::stdout().printf(color, args)
}

/// Write `operands` and a newline to stdout wrapped in `color`. See
/// [`crate::fprintln()`].
///
/// # Errors
///
/// Returns the [`io::Error`] of the first failed write to stdout.
pub fn println(color: AnsiColor, operands: &[Operand<'_>]) -> io::Result<usize> {
    ColorWriter::stdout().println(color, operands)
}

/// Print every available color name to stdout, each one in its own color, in sorted
/// order.
///
/// # Errors
///
/// Returns the [`io::Error`] of the first line that could not be written.
pub fn print_available_colors() -> io::Result<()> {
    ColorWriter::stdout().print_available_colors()
}
