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

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter, IntoStaticStr};

/// One of the 16 basic ANSI foreground colors, plus [`AnsiColor::Reset`].
///
/// Each variant maps to a fixed escape sequence of the form `ESC[<style>;<code>m`,
/// where `<style>` is `0` (normal) or `1` (bright). The [Display] implementation writes
/// that escape sequence, not the name. Use [`AnsiColor::name()`] to get the name.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_cc::AnsiColor;
///
/// assert_eq!(AnsiColor::Red.to_string(), "\x1b[0;31m");
/// assert_eq!(AnsiColor::LightBlue.name(), "light-blue");
/// assert_eq!(AnsiColor::Reset.name(), "none");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum AnsiColor {
    /// Terminates every colored write, whichever color opened it.
    #[strum(serialize = "none")]
    Reset,
    Black,
    Red,
    Green,
    Orange,
    Blue,
    Purple,
    Cyan,
    LightGray,
    DarkGray,
    LightRed,
    LightGreen,
    Yellow,
    LightBlue,
    LightPurple,
    LightCyan,
    White,
}

pub mod ansi_color_impl {
    use const_format::concatcp;

    use super::{AnsiColor, Display, Formatter, Result};

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl AnsiColor {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
        #[rustfmt::skip]
        #[must_use]
        pub const fn escape_code(self) -> &'static str {
            match self {
                AnsiColor::Reset       => concatcp!(CSI, "0", SGR),
                AnsiColor::Black       => concatcp!(CSI, "0;30", SGR),
                AnsiColor::Red         => concatcp!(CSI, "0;31", SGR),
                AnsiColor::Green       => concatcp!(CSI, "0;32", SGR),
                AnsiColor::Orange      => concatcp!(CSI, "0;33", SGR),
                AnsiColor::Blue        => concatcp!(CSI, "0;34", SGR),
                AnsiColor::Purple      => concatcp!(CSI, "0;35", SGR),
                AnsiColor::Cyan        => concatcp!(CSI, "0;36", SGR),
                AnsiColor::LightGray   => concatcp!(CSI, "0;37", SGR),
                AnsiColor::DarkGray    => concatcp!(CSI, "1;30", SGR),
                AnsiColor::LightRed    => concatcp!(CSI, "1;31", SGR),
                AnsiColor::LightGreen  => concatcp!(CSI, "1;32", SGR),
                AnsiColor::Yellow      => concatcp!(CSI, "1;33", SGR),
                AnsiColor::LightBlue   => concatcp!(CSI, "1;34", SGR),
                AnsiColor::LightPurple => concatcp!(CSI, "1;35", SGR),
                AnsiColor::LightCyan   => concatcp!(CSI, "1;36", SGR),
                AnsiColor::White       => concatcp!(CSI, "1;37", SGR),
            }
        }

        /// The raw bytes that are written to a sink for this color.
        #[must_use]
        pub const fn as_bytes(self) -> &'static [u8] { self.escape_code().as_bytes() }

        /// The table name of this color, eg: `"light-gray"`, or `"none"` for
        /// [`AnsiColor::Reset`].
        #[must_use]
        pub fn name(self) -> &'static str { self.into() }
    }

    impl Display for AnsiColor {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(self.escape_code()) }
    }
}
