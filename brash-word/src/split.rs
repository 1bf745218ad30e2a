// This file is part of brash, a Bash script syntax library.
// Copyright (C) 2026 the brash authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Field splitting
//!
//! A word splits at its unquoted literal characters that are members of
//! the delimiter set. Quoted regions and substitutions never act as
//! delimiters. Runs of delimiters collapse, so no empty field is ever
//! produced.

use brash_syntax::syntax::{Word, WordUnit, WordUnit::Literal};

/// Splits a word into fields at the given delimiter characters.
///
/// Leading and trailing delimiters are discarded. The fields share the
/// location of the input word.
#[must_use]
pub fn split_word(ifs: &str, word: &Word) -> Vec<Word> {
    let mut fields = vec![];
    let mut current: Vec<WordUnit> = vec![];

    for unit in &word.units {
        let is_delimiter = matches!(unit, Literal(c) if ifs.contains(*c));
        if is_delimiter {
            if !current.is_empty() {
                fields.push(std::mem::take(&mut current));
            }
        } else {
            current.push(unit.clone());
        }
    }
    if !current.is_empty() {
        fields.push(current);
    }

    fields
        .into_iter()
        .map(|units| Word {
            units,
            location: word.location.clone(),
        })
        .collect()
}
