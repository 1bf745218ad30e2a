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

//! Part of the lexer that parses words
//!
//! A word is scanned one [unit](WordUnit) at a time. The caller chooses
//! where the word ends by passing an `is_delimiter` function, which is
//! consulted for every unquoted character that would start a new unit; this
//! is how the same scanner serves command words, redirection targets, and
//! the interior words of parameter expansions, which all stop at different
//! characters.

use super::core::Lexer;
use crate::parser::core::Result;
use crate::parser::error::{Error, SyntaxError};
use crate::source::Location;
use crate::syntax::{SubstDirection, Word, WordUnit::{self, *}};

/// Returns true if the character delimits a normal command word token.
#[must_use]
pub fn is_token_delimiter_char(c: char) -> bool {
    matches!(c, ';' | '&' | '|' | '<' | '>' | '(' | ')' | '\n') || super::core::is_blank(c)
}

/// Context that selects which units the word scanner may produce
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WordContext {
    /// Unquoted word: all units are allowed.
    Word,
    /// Interior of a double quotation: quote units and process
    /// substitutions are not recognized, and only `$`, `` ` ``, `"` and
    /// `\` are escapable.
    Text,
}

impl Lexer {
    /// Parses a word token.
    ///
    /// `is_delimiter` decides which unquoted character ends the word. To
    /// parse a normal word token, pass [`is_token_delimiter_char`].
    pub fn word<F>(&mut self, mut is_delimiter: F) -> Result<Word>
    where
        F: FnMut(char) -> bool,
    {
        self.peek_char();
        let location = self.location();
        let mut units = vec![];
        while let Some(unit) = self.word_unit(WordContext::Word, &mut is_delimiter)? {
            units.push(unit);
        }
        Ok(Word { units, location })
    }

    /// Parses a single word unit.
    ///
    /// Returns `Ok(None)` when the next character is a delimiter or the
    /// input has ended.
    pub(super) fn word_unit<F>(
        &mut self,
        context: WordContext,
        is_delimiter: &mut F,
    ) -> Result<Option<WordUnit>>
    where
        F: FnMut(char) -> bool,
    {
        let Some(c) = self.peek_char() else {
            return Ok(None);
        };

        // `<(` and `>(` start a process substitution even where `<` and `>`
        // would otherwise delimit the word.
        if context == WordContext::Word && (c == '<' || c == '>') {
            let start = self.index();
            self.consume_char();
            if self.peek_char() == Some('(') {
                let opening_location = self.location_at(start);
                self.consume_char();
                let direction = if c == '<' {
                    SubstDirection::In
                } else {
                    SubstDirection::Out
                };
                let content = self.substitution_body(&opening_location, |opening_location| {
                    SyntaxError::UnclosedProcessSubstitution { opening_location }
                })?;
                return Ok(Some(ProcessSubst { direction, content }));
            }
            self.rewind(start);
        }

        if is_delimiter(c) {
            return Ok(None);
        }

        match c {
            '\\' => {
                self.consume_char();
                self.escape_unit(context).map(Some)
            }
            '\'' if context == WordContext::Word => {
                let opening_location = self.location();
                self.consume_char();
                self.single_quote(opening_location).map(Some)
            }
            '"' if context == WordContext::Word => {
                let opening_location = self.location();
                self.consume_char();
                self.double_quote(opening_location).map(Some)
            }
            '$' => self.dollar_unit(context).map(Some),
            '`' => {
                let opening_location = self.location();
                self.consume_char();
                self.backquote(context, opening_location).map(Some)
            }
            _ => {
                self.consume_char();
                Ok(Some(Literal(c)))
            }
        }
    }

    /// Parses the character after a backslash.
    ///
    /// The backslash must have been consumed. A backslash at the end of the
    /// input stands for itself.
    fn escape_unit(&mut self, context: WordContext) -> Result<WordUnit> {
        match context {
            WordContext::Word => match self.peek_char_raw() {
                Some(c) => {
                    self.consume_char();
                    Ok(Backslashed(c))
                }
                None => Ok(Literal('\\')),
            },
            WordContext::Text => match self.peek_char_raw() {
                Some(c @ ('$' | '`' | '"' | '\\')) => {
                    self.consume_char();
                    Ok(Backslashed(c))
                }
                _ => Ok(Literal('\\')),
            },
        }
    }

    /// Parses a single-quoted string.
    ///
    /// The opening `'` must have been consumed. The closing `'` is consumed
    /// in this function. No escapes are recognized in between, not even
    /// line continuations.
    fn single_quote(&mut self, opening_location: Location) -> Result<WordUnit> {
        self.with_line_continuation_disabled(|lexer| {
            let mut content = String::new();
            loop {
                match lexer.peek_char() {
                    Some('\'') => {
                        lexer.consume_char();
                        return Ok(SingleQuote(content));
                    }
                    Some(c) => {
                        lexer.consume_char();
                        content.push(c);
                    }
                    None => {
                        return Err(Error {
                            cause: SyntaxError::UnclosedSingleQuote { opening_location },
                            location: lexer.location(),
                        });
                    }
                }
            }
        })
    }

    /// Parses a double-quoted word.
    ///
    /// The opening `"` must have been consumed. The closing `"` is consumed
    /// in this function.
    fn double_quote(&mut self, opening_location: Location) -> Result<WordUnit> {
        let content = self.quoted_text(&opening_location, |opening_location| {
            SyntaxError::UnclosedDoubleQuote { opening_location }
        })?;
        Ok(DoubleQuote(content))
    }

    /// Parses the interior of a `"…"` or `$"…"` quotation up to and
    /// including the closing `"`.
    pub(super) fn quoted_text(
        &mut self,
        opening_location: &Location,
        unclosed: fn(Location) -> SyntaxError,
    ) -> Result<Word> {
        self.peek_char();
        let location = self.location();
        let mut units = vec![];
        let mut is_delimiter = |c| c == '"';
        loop {
            match self.word_unit(WordContext::Text, &mut is_delimiter)? {
                Some(unit) => units.push(unit),
                None => {
                    if self.skip_if(|c| c == '"') {
                        return Ok(Word { units, location });
                    }
                    return Err(Error {
                        cause: unclosed(opening_location.clone()),
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
    use crate::syntax::ParamSubst;
    use assert_matches::assert_matches;

    fn parse_word(source: &str) -> Word {
        let mut lexer = Lexer::new("test", source);
        let word = lexer.word(is_token_delimiter_char).unwrap();
        assert_eq!(lexer.peek_char(), None, "word did not consume {source:?}");
        word
    }

    #[test]
    fn word_of_literals_and_escapes() {
        let word = parse_word(r"a\ b");
        assert_eq!(
            word.units,
            [Literal('a'), Backslashed(' '), Literal('b')]
        );
    }

    #[test]
    fn word_stops_at_delimiter() {
        let mut lexer = Lexer::new("test", "foo;bar");
        let word = lexer.word(is_token_delimiter_char).unwrap();
        assert_eq!(word.to_string(), "foo");
        assert_eq!(lexer.peek_char(), Some(';'));
    }

    #[test]
    fn word_with_line_continuation() {
        let word = parse_word("ec\\\nho");
        assert_eq!(word.to_string(), "echo");
    }

    #[test]
    fn escaped_backslash_before_newline_is_not_a_continuation() {
        let mut lexer = Lexer::new("test", "a\\\\\nb");
        let word = lexer.word(is_token_delimiter_char).unwrap();
        assert_eq!(word.units, [Literal('a'), Backslashed('\\')]);
        assert_eq!(lexer.peek_char(), Some('\n'));
    }

    #[test]
    fn single_quote_is_verbatim() {
        let word = parse_word("'a\\\n$b`'");
        assert_matches!(&word.units[..], [SingleQuote(content)] => {
            assert_eq!(content, "a\\\n$b`");
        });
    }

    #[test]
    fn single_quote_unclosed() {
        let mut lexer = Lexer::new("test", "'abc");
        let e = lexer.word(is_token_delimiter_char).unwrap_err();
        assert_matches!(e.cause, SyntaxError::UnclosedSingleQuote { opening_location } => {
            assert_eq!(opening_location.index, 0);
        });
        assert_eq!(e.location.index, 4);
    }

    #[test]
    fn double_quote_inner_units() {
        let word = parse_word(r#""a\$b\x$c""#);
        assert_matches!(&word.units[..], [DoubleQuote(inner)] => {
            assert_eq!(
                inner.units,
                [
                    Literal('a'),
                    Backslashed('$'),
                    Literal('b'),
                    Literal('\\'),
                    Literal('x'),
                    Param(ParamSubst::Bare(crate::syntax::Param::variable("c"))),
                ]
            );
        });
    }

    #[test]
    fn double_quote_does_not_recognize_single_quotes() {
        let word = parse_word(r#""don't""#);
        assert_matches!(&word.units[..], [DoubleQuote(inner)] => {
            assert_eq!(inner.to_string(), "don't");
        });
    }

    #[test]
    fn double_quote_unclosed() {
        let mut lexer = Lexer::new("test", "\"abc");
        let e = lexer.word(is_token_delimiter_char).unwrap_err();
        assert_matches!(e.cause, SyntaxError::UnclosedDoubleQuote { opening_location } => {
            assert_eq!(opening_location.index, 0);
        });
    }

    #[test]
    fn process_substitution_mid_word() {
        let word = parse_word("a<(b)");
        assert_matches!(&word.units[..], [Literal('a'), ProcessSubst { direction, content }] => {
            assert_eq!(*direction, SubstDirection::In);
            assert_eq!(content, "b");
        });

        let word = parse_word(">(tee log)");
        assert_matches!(&word.units[..], [ProcessSubst { direction, content }] => {
            assert_eq!(*direction, SubstDirection::Out);
            assert_eq!(content, "tee log");
        });
    }

    #[test]
    fn lone_redirection_char_still_delimits() {
        let mut lexer = Lexer::new("test", "a<b");
        let word = lexer.word(is_token_delimiter_char).unwrap();
        assert_eq!(word.to_string(), "a");
        assert_eq!(lexer.peek_char(), Some('<'));
    }

    #[test]
    fn trailing_backslash_is_literal() {
        let word = parse_word("a\\");
        assert_eq!(word.units, [Literal('a'), Literal('\\')]);
    }
}
