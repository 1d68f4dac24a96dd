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

use std::{collections::BTreeMap, str::FromStr, sync::LazyLock};

use strum::IntoEnumIterator;

use crate::{AnsiColor, UnknownColorName};

/// Every known color keyed by its name. The map is built on first access and never
/// mutated, so it is safe to read from any thread. Iteration order is lexicographic by
/// name.
pub static COLOR_TABLE: LazyLock<BTreeMap<&'static str, AnsiColor>> =
    LazyLock::new(|| AnsiColor::iter().map(|color| (color.name(), color)).collect());

/// All color names in sorted order.
pub fn sorted_color_names() -> impl Iterator<Item = &'static str> {
    COLOR_TABLE.keys().copied()
}

/// All `(name, color)` pairs in sorted name order.
pub fn sorted_colors() -> impl Iterator<Item = (&'static str, AnsiColor)> {
    COLOR_TABLE.iter().map(|(name, color)| (*name, *color))
}

/// Find a color by its exact table name.
///
/// # Errors
///
/// Returns [`UnknownColorName`] if `name` is not one of the 17 table names.
pub fn lookup(name: &str) -> Result<AnsiColor, UnknownColorName> {
    COLOR_TABLE
        .get(name)
        .copied()
        .ok_or_else(|| UnknownColorName::new(name))
}

impl FromStr for AnsiColor {
    type Err = UnknownColorName;

    fn from_str(name: &str) -> Result<Self, Self::Err> { lookup(name) }
}
