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

//! Part of the lexer that parses backquotes

use super::core::Lexer;
use super::word::WordContext;
use crate::parser::core::Result;
use crate::parser::error::{Error, SyntaxError};
use crate::source::Location;
use crate::syntax::{Word, WordUnit::{self, Backquote, Backslashed, Literal}};

impl Lexer {
    /// Parses a backquoted command substitution.
    ///
    /// The opening backquote must have been consumed. Inside backquotes,
    /// a backslash escapes `$`, `` ` `` and `\`, and additionally `"` when
    /// the backquote itself appears inside double quotations; any other
    /// backslash stands for itself. The inner word therefore only contains
    /// `Literal` and `Backslashed` units.
    pub(super) fn backquote(
        &mut self,
        context: WordContext,
        opening_location: Location,
    ) -> Result<WordUnit> {
        let double_quote_escapable = context == WordContext::Text;
        self.peek_char();
        let location = self.location();
        let mut units = vec![];
        loop {
            match self.peek_char() {
                Some('`') => {
                    self.consume_char();
                    return Ok(Backquote(Word { units, location }));
                }
                Some('\\') => {
                    self.consume_char();
                    match self.peek_char_raw() {
                        Some(c @ ('$' | '`' | '\\')) => {
                            self.consume_char();
                            units.push(Backslashed(c));
                        }
                        Some('"') if double_quote_escapable => {
                            self.consume_char();
                            units.push(Backslashed('"'));
                        }
                        _ => units.push(Literal('\\')),
                    }
                }
                Some(c) => {
                    self.consume_char();
                    units.push(Literal(c));
                }
                None => {
                    return Err(Error {
                        cause: SyntaxError::UnclosedBackquote { opening_location },
                        location: self.location(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::word::is_token_delimiter_char;
    use crate::syntax::WordUnit::DoubleQuote;
    use assert_matches::assert_matches;

    fn parse_word(source: &str) -> Word {
        let mut lexer = Lexer::new("test", source);
        let word = lexer.word(is_token_delimiter_char).unwrap();
        assert_eq!(lexer.peek_char(), None, "word did not consume {source:?}");
        word
    }

    #[test]
    fn backquote_with_escapes() {
        let word = parse_word(r"`echo \$x \\ \a`");
        assert_matches!(&word.units[..], [Backquote(inner)] => {
            assert_eq!(inner.to_string(), r"echo \$x \\ \a");
            assert!(inner.units.contains(&Backslashed('$')));
            assert!(inner.units.contains(&Literal('a')));
        });
    }

    #[test]
    fn backquote_escaped_double_quote_only_inside_double_quotes() {
        let word = parse_word(r#"`a\"b`"#);
        assert_matches!(&word.units[..], [Backquote(inner)] => {
            assert_eq!(inner.units[1], Literal('\\'));
        });

        let word = parse_word(r#""`a\"b`""#);
        assert_matches!(&word.units[..], [DoubleQuote(outer)] => {
            assert_matches!(&outer.units[..], [Backquote(inner)] => {
                assert_eq!(inner.units[1], Backslashed('"'));
            });
        });
    }

    #[test]
    fn backquote_unclosed() {
        let mut lexer = Lexer::new("test", "`echo");
        let e = lexer.word(is_token_delimiter_char).unwrap_err();
        assert_matches!(e.cause, SyntaxError::UnclosedBackquote { opening_location } => {
            assert_eq!(opening_location.index, 0);
        });
    }
}
