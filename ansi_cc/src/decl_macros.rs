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

/// Build an array of [`crate::Operand`] from a list of expressions. Each expression is
/// borrowed and converted with [`From`], so it has to be a string (`&str`, `String`,
/// `&String`, `Cow<str>`), a number, a [bool], a [char] or a `&dyn Display`. Wrap any
/// other [`std::fmt::Display`] value with [`crate::Operand::display()`], or bind it to a
/// `&dyn Display` first.
///
/// ```rust
/// use r3bl_ansi_cc::{JoinRule, operands, render_operands};
///
/// let name = String::from("disk");
/// let it = render_operands(&operands![name, 90, 5], JoinRule::Print).unwrap();
/// assert_eq!(it.as_str(), "disk90 5");
/// ```
#[macro_export]
macro_rules! operands {
    ($($arg:expr),* $(,)?) => {
        [$($crate::Operand::from(&$arg)),*]
    };
}

/// Plain write to stdout. Returns the [`std::io::Result`] of [`crate::print()`].
///
/// ```rust
/// use r3bl_ansi_cc::{AnsiColor, cc_print};
///
/// cc_print!(AnsiColor::Cyan, "files: ", 12).unwrap();
/// ```
#[macro_export]
macro_rules! cc_print {
    ($color:expr $(, $arg:expr)* $(,)?) => {
        $crate::print($color, &$crate::operands![$($arg),*])
    };
}

/// Line write to stdout. Returns the [`std::io::Result`] of [`crate::println()`].
#[macro_export]
macro_rules! cc_println {
    ($color:expr $(, $arg:expr)* $(,)?) => {
        $crate::println($color, &$crate::operands![$($arg),*])
    };
}

/// Formatted write to stdout, using [`format_args!`] syntax for the template. Returns
/// the [`std::io::Result`] of [`crate::printf()`].
///
/// ```rust
/// use r3bl_ansi_cc::{AnsiColor, cc_printf};
///
/// cc_printf!(AnsiColor::Green, "{} items", 3).unwrap();
/// ```
#[macro_export]
macro_rules! cc_printf {
    ($color:expr, $($fmt_args:tt)+) => {
        $crate::printf($color, format_args!($($fmt_args)+))
    };
}
