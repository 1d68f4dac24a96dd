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

use std::{borrow::Cow,
          fmt::{self, Debug, Display, Formatter, Write as _}};

use self::sizing::InlinePayload;

/// A single value in the payload of a plain or line write. Whether an operand is
/// string-like decides where spaces are inserted when several operands are joined (see
/// [`JoinRule`]).
///
/// The [`From`] impls cover strings, numbers, [bool] and [char]. For any other
/// [Display] type use [`Operand::display()`]. The [`crate::operands!`] macro builds a
/// slice of these from a list of expressions.
///
/// ```rust
/// use r3bl_ansi_cc::{JoinRule, Operand, render_operands};
///
/// let count = 3;
/// let it = render_operands(&[Operand::from(&count), Operand::from("items")], JoinRule::Print);
/// assert_eq!(it.unwrap().as_str(), "3items");
/// ```
#[derive(Clone, Copy)]
pub enum Operand<'a> {
    Str(&'a str),
    Value(&'a dyn Display),
}

pub mod sizing {
    use smallstr::SmallString;

    // PERF: Most colored messages are a short line. Longer payloads spill to the heap.
    pub const DEFAULT_PAYLOAD_STORAGE_SIZE: usize = 64;
    pub type InlinePayload = SmallString<[u8; DEFAULT_PAYLOAD_STORAGE_SIZE]>;
}

/// How adjacent operands are separated when they are rendered into one payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinRule {
    /// A space goes between two operands only when neither of them is string-like.
    Print,
    /// A space goes between every two operands, and a `\n` is appended.
    Println,
}

mod operand_impl {
    use super::{Debug, Display, Formatter, Operand, fmt};

    impl<'a> Operand<'a> {
        #[must_use]
        pub fn display(value: &'a dyn Display) -> Self { Operand::Value(value) }
    }

    impl Operand<'_> {
        #[must_use]
        pub fn is_string_like(&self) -> bool { matches!(self, Operand::Str(_)) }
    }

    impl Display for Operand<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            match self {
                Operand::Str(text) => f.write_str(text),
                Operand::Value(value) => Display::fmt(*value, f),
            }
        }
    }

    impl Debug for Operand<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            match self {
                Operand::Str(text) => f.debug_tuple("Str").field(text).finish(),
                Operand::Value(value) => f
                    .debug_tuple("Value")
                    .field(&format_args!("{value}"))
                    .finish(),
            }
        }
    }
}

mod convert_into_operand {
    use super::{Cow, Display, Operand};

    impl<'a> From<&'a str> for Operand<'a> {
        fn from(it: &'a str) -> Self { Operand::Str(it) }
    }

    impl<'a, 'b: 'a> From<&'a &'b str> for Operand<'a> {
        fn from(it: &'a &'b str) -> Self { Operand::Str(it) }
    }

    impl<'a> From<&'a String> for Operand<'a> {
        fn from(it: &'a String) -> Self { Operand::Str(it.as_str()) }
    }

    impl<'a, 'b: 'a> From<&'a &'b String> for Operand<'a> {
        fn from(it: &'a &'b String) -> Self { Operand::Str(it.as_str()) }
    }

    impl<'a> From<&'a Cow<'_, str>> for Operand<'a> {
        fn from(it: &'a Cow<'_, str>) -> Self { Operand::Str(it.as_ref()) }
    }

    impl<'a> From<&'a dyn Display> for Operand<'a> {
        fn from(it: &'a dyn Display) -> Self { Operand::Value(it) }
    }

    impl<'a, 'b: 'a> From<&'a &'b (dyn Display + 'b)> for Operand<'a> {
        fn from(it: &'a &'b (dyn Display + 'b)) -> Self { Operand::Value(*it) }
    }

    macro_rules! impl_from_display_value {
        ($($ty:ty),* $(,)?) => {
            $(
                impl<'a> From<&'a $ty> for Operand<'a> {
                    fn from(it: &'a $ty) -> Self { Operand::Value(it) }
                }
            )*
        };
    }

    impl_from_display_value!(
        i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
        char,
    );
}

/// Render `operands` into a single payload using `rule`. The whole payload is built
/// before anything is written so the sink receives it in one write.
///
/// # Errors
///
/// Returns [`fmt::Error`] if the [Display] impl of an operand fails.
pub fn render_operands(
    operands: &[Operand<'_>],
    rule: JoinRule,
) -> Result<InlinePayload, fmt::Error> {
    let mut acc = InlinePayload::new();
    let mut prev_is_string_like = false;

    for (index, operand) in operands.iter().enumerate() {
        let is_string_like = operand.is_string_like();
        let needs_space = index > 0
            && match rule {
                JoinRule::Print => !is_string_like && !prev_is_string_like,
                JoinRule::Println => true,
            };
        if needs_space {
            acc.push(' ');
        }
        write!(acc, "{operand}")?;
        prev_is_string_like = is_string_like;
    }

    if rule == JoinRule::Println {
        acc.push('\n');
    }

    Ok(acc)
}

/// Render a [`fmt::Arguments`] payload (built with [`format_args!`]).
///
/// # Errors
///
/// Returns [`fmt::Error`] if a [Display] impl referenced by `args` fails.
pub fn render_arguments(args: fmt::Arguments<'_>) -> Result<InlinePayload, fmt::Error> {
    let mut acc = InlinePayload::new();
    acc.write_fmt(args)?;
    Ok(acc)
}
