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

//! Source code representation
//!
//! This module defines [`Code`], which pairs a piece of source code with the
//! name it was read under, and [`Location`], which identifies a character
//! position in a `Code`. Locations are attached to parsed words and to parse
//! errors; the 1-based line and column numbers reported in error messages are
//! computed lazily from the character index.

use std::num::NonZeroU64;
use std::rc::Rc;

/// Source code fragment with its name
///
/// A `Code` instance is created per [`parse`](crate::parser::parse) call and
/// shared, reference-counted, by all the locations pointing into it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Code {
    /// Name the source code was read under, e.g. a file path or `"<stdin>"`
    pub source_name: String,
    /// Entire source code text
    pub value: String,
}

impl Code {
    /// Creates a reference-counted `Code`.
    #[must_use]
    pub fn new<N, V>(source_name: N, value: V) -> Rc<Code>
    where
        N: Into<String>,
        V: Into<String>,
    {
        Rc::new(Code {
            source_name: source_name.into(),
            value: value.into(),
        })
    }
}

/// Position of a character in source code
///
/// The position is counted in characters, not bytes, starting from zero.
/// An index equal to the character count of the code represents the
/// end-of-input position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Location {
    /// Code this location points into
    pub code: Rc<Code>,
    /// Character index in the code, counted from zero
    pub index: usize,
}

impl Location {
    /// Creates a location that points into a standalone piece of code.
    ///
    /// This is mainly useful in tests and for AST nodes synthesized outside
    /// a parse, e.g. by brace expansion.
    #[must_use]
    pub fn dummy<V: Into<String>>(value: V) -> Location {
        Location {
            code: Code::new("<unknown>", value),
            index: 0,
        }
    }

    /// Computes the 1-based line and column numbers of this location.
    #[must_use]
    pub fn line_column(&self) -> (NonZeroU64, NonZeroU64) {
        let mut line = 1;
        let mut column = 1;
        for c in self.code.value.chars().take(self.index) {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        let line = NonZeroU64::new(line).unwrap();
        let column = NonZeroU64::new(column).unwrap();
        (line, column)
    }
}
