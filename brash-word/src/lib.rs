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

//! Word expansion operations for parsed Bash words
//!
//! This crate implements the purely lexical word operations that apply to
//! a [`Word`] after parsing and before any evaluation: [brace
//! expansion](brace_expand), [field splitting](split_word), and [quote
//! removal](unquote). All three are total functions; none of them can
//! fail on a parsed word.
//!
//! ```
//! use brash_syntax::syntax::Word;
//! use brash_word::brace_expand;
//!
//! let word: Word = "img{01..03}.png".parse().unwrap();
//! let expanded: Vec<String> = brace_expand(&word).iter().map(Word::to_string).collect();
//! assert_eq!(expanded, ["img01.png", "img02.png", "img03.png"]);
//! ```

mod brace;
mod split;

pub use brace::brace_expand;
pub use split::split_word;

use brash_syntax::syntax::{Unquote, Word};

/// Removes all quoting from a word.
///
/// Characters and escapes contribute their character value, quoted regions
/// contribute their content, and substitutions re-emit verbatim. This is a
/// convenience wrapper around the [`Unquote`] trait.
#[must_use]
pub fn unquote(word: &Word) -> String {
    word.unquote().0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquote_removes_quoting() {
        let word: Word = r#"a\ b'c d'"e f""#.parse().unwrap();
        assert_eq!(unquote(&word), "a bc de f");
    }

    #[test]
    fn unquote_is_identity_on_plain_strings() {
        for s in ["", "abc", "a_b-c.d", "path/to/file"] {
            let word: Word = s.parse().unwrap();
            assert_eq!(unquote(&word), s);
        }
    }

    #[test]
    fn unquote_keeps_substitutions_verbatim() {
        let word: Word = "$(date)$x${y:-z}".parse().unwrap();
        assert_eq!(unquote(&word), "$(date)$x${y:-z}");
    }
}
