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

//! Part of the lexer that parses units starting with `$`
//!
//! The character after `$` selects the unit: `{` opens a braced parameter
//! expansion, `((` an arithmetic expansion, `(` a command substitution,
//! `'` and `"` the ANSI-C and locale quotations, and a name character a
//! bare parameter expansion. Any other character leaves the `$` literal.

use super::core::Lexer;
use super::word::WordContext;
use crate::parser::core::Result;
use crate::parser::error::{Error, SyntaxError};
use crate::source::Location;
use crate::syntax::{Param, ParamSubst, Word, WordUnit::{self, *}};

/// Tests if a character is a special parameter name.
#[must_use]
fn is_special_param_char(c: char) -> bool {
    matches!(c, '@' | '*' | '#' | '?' | '-' | '$' | '!')
}

impl Lexer {
    /// Parses a word unit that starts with `$`.
    ///
    /// The `$` must not have been consumed.
    pub(super) fn dollar_unit(&mut self, context: WordContext) -> Result<WordUnit> {
        let opening_location = self.location();
        self.consume_char();

        match self.peek_char() {
            Some('{') => {
                self.consume_char();
                self.braced_param(opening_location).map(Param)
            }
            Some('(') => {
                self.consume_char();
                if self.peek_char() == Some('(') {
                    // `$((…))` is arithmetic only if a matching `))` closes
                    // it; otherwise the first `(` opens a command
                    // substitution that starts with a subshell.
                    let fallback = self.index();
                    self.consume_char();
                    if let Some(content) = self.arith_body() {
                        return Ok(Arith(content));
                    }
                    self.rewind(fallback);
                }
                let content = self.substitution_body(&opening_location, |opening_location| {
                    SyntaxError::UnclosedCommandSubstitution { opening_location }
                })?;
                Ok(CommandSubst(content))
            }
            Some('\'') if context == WordContext::Word => {
                self.consume_char();
                self.dollar_single_quote(opening_location)
            }
            Some('"') if context == WordContext::Word => {
                self.consume_char();
                let content = self.quoted_text(&opening_location, |opening_location| {
                    SyntaxError::UnclosedDollarDoubleQuote { opening_location }
                })?;
                Ok(DollarDoubleQuote(content))
            }
            Some(c) if c == '_' || c.is_ascii_alphabetic() => {
                let mut id = String::new();
                while let Some(c) = self.consume_char_if(|c| c == '_' || c.is_ascii_alphanumeric())
                {
                    id.push(c);
                }
                Ok(Param(ParamSubst::Bare(Param::variable(id))))
            }
            Some(c) if c.is_ascii_digit() => {
                // A bare positional parameter is a single digit; `$10` is
                // `${1}0`.
                self.consume_char();
                Ok(Param(ParamSubst::Bare(Param::variable(c.to_string()))))
            }
            Some(c) if is_special_param_char(c) => {
                self.consume_char();
                Ok(Param(ParamSubst::Bare(Param::variable(c.to_string()))))
            }
            _ => Ok(Literal('$')),
        }
    }

    /// Parses a `$'…'` quotation after the opening quote.
    ///
    /// Escape sequences are preserved undecoded: a backslash and the
    /// following character become one `Backslashed` unit, which keeps
    /// `\'` from closing the quotation.
    fn dollar_single_quote(&mut self, opening_location: Location) -> Result<WordUnit> {
        self.with_line_continuation_disabled(|lexer| {
            let location = lexer.location();
            let mut units = vec![];
            loop {
                match lexer.peek_char() {
                    Some('\'') => {
                        lexer.consume_char();
                        return Ok(DollarSingleQuote(Word { units, location }));
                    }
                    Some('\\') => {
                        lexer.consume_char();
                        match lexer.peek_char_raw() {
                            Some(c) => {
                                lexer.consume_char();
                                units.push(Backslashed(c));
                            }
                            None => units.push(Literal('\\')),
                        }
                    }
                    Some(c) => {
                        lexer.consume_char();
                        units.push(Literal(c));
                    }
                    None => {
                        return Err(Error {
                            cause: SyntaxError::UnclosedDollarSingleQuote { opening_location },
                            location: lexer.location(),
                        });
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::word::is_token_delimiter_char;
    use assert_matches::assert_matches;

    fn parse_word(source: &str) -> Word {
        let mut lexer = Lexer::new("test", source);
        let word = lexer.word(is_token_delimiter_char).unwrap();
        assert_eq!(lexer.peek_char(), None, "word did not consume {source:?}");
        word
    }

    #[test]
    fn bare_named_param() {
        let word = parse_word("$foo_1");
        assert_matches!(&word.units[..], [Param(ParamSubst::Bare(param))] => {
            assert_eq!(param.id, "foo_1");
            assert_eq!(param.subscript, None);
        });
    }

    #[test]
    fn bare_positional_param_is_one_digit() {
        let word = parse_word("$10");
        assert_matches!(&word.units[..], [Param(ParamSubst::Bare(param)), Literal('0')] => {
            assert_eq!(param.id, "1");
        });
    }

    #[test]
    fn bare_special_params() {
        for (source, id) in [("$@", "@"), ("$*", "*"), ("$#", "#"), ("$?", "?"), ("$!", "!")] {
            let word = parse_word(source);
            assert_matches!(&word.units[..], [Param(ParamSubst::Bare(param))] => {
                assert_eq!(param.id, id, "source: {source:?}");
            });
        }
    }

    #[test]
    fn lone_dollar_is_literal() {
        let word = parse_word("$");
        assert_eq!(word.units, [Literal('$')]);

        let word = parse_word("$%x");
        assert_eq!(word.units, [Literal('$'), Literal('%'), Literal('x')]);
    }

    #[test]
    fn command_substitution() {
        let word = parse_word("$(echo \"$(date)\")");
        assert_matches!(&word.units[..], [CommandSubst(content)] => {
            assert_eq!(content, "echo \"$(date)\"");
        });
    }

    #[test]
    fn command_substitution_with_case_pattern() {
        // The unmatched `)` in the case pattern must not close the
        // substitution early.
        let word = parse_word("$(case x in a) echo y;; esac)");
        assert_matches!(&word.units[..], [CommandSubst(content)] => {
            assert_eq!(content, "case x in a) echo y;; esac");
        });
    }

    #[test]
    fn arithmetic_expansion() {
        let word = parse_word("$((1 + (2 * 3)))");
        assert_matches!(&word.units[..], [Arith(content)] => {
            assert_eq!(content, "1 + (2 * 3)");
        });
    }

    #[test]
    fn arith_falls_back_to_command_substitution() {
        let word = parse_word("$((echo a); echo b)");
        assert_matches!(&word.units[..], [CommandSubst(content)] => {
            assert_eq!(content, "(echo a); echo b");
        });
    }

    #[test]
    fn dollar_single_quote_preserves_escapes() {
        let word = parse_word(r"$'a\n\'b'");
        assert_matches!(&word.units[..], [DollarSingleQuote(inner)] => {
            assert_eq!(
                inner.units,
                [Literal('a'), Backslashed('n'), Backslashed('\''), Literal('b')]
            );
        });
    }

    #[test]
    fn dollar_double_quote() {
        let word = parse_word("$\"hello $x\"");
        assert_matches!(&word.units[..], [DollarDoubleQuote(inner)] => {
            assert_eq!(inner.to_string(), "hello $x");
        });
    }

    #[test]
    fn dollar_quotes_are_literal_inside_double_quotes() {
        let word = parse_word("\"$'a'\"");
        assert_matches!(&word.units[..], [DoubleQuote(inner)] => {
            assert_eq!(
                inner.units,
                [Literal('$'), Literal('\''), Literal('a'), Literal('\'')]
            );
        });
    }

    #[test]
    fn unclosed_command_substitution() {
        let mut lexer = Lexer::new("test", "$(echo");
        let e = lexer.word(is_token_delimiter_char).unwrap_err();
        assert_matches!(
            e.cause,
            SyntaxError::UnclosedCommandSubstitution { opening_location } => {
                assert_eq!(opening_location.index, 0);
            }
        );
    }
}
