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

use miette::Diagnostic;

/// A color name that is not in [`crate::COLOR_TABLE`]. Names are case-sensitive and
/// multi-word names are hyphenated, eg: `light-blue`.
///
/// Sink write failures are never wrapped in this type; they are returned as the
/// [`std::io::Error`] the sink produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("Unknown color name: '{name}'")]
#[diagnostic(
    code(r3bl_ansi_cc::unknown_color_name),
    help("Valid names are: {valid_names}")
)]
pub struct UnknownColorName {
    pub name: String,
    pub valid_names: String,
}

impl UnknownColorName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            valid_names: crate::sorted_color_names().collect::<Vec<_>>().join(", "),
        }
    }
}
