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

//! Syntax parser for for loops, arithmetic for loops, and select loops
//!
//! A select loop has the same shape as a for loop without the arithmetic
//! form, so both share the name and word-list productions. The word list
//! distinguishes three cases: an `in` clause, a bare `;` (an empty list),
//! and nothing at all, which leaves the values `None` for consumers to
//! default to the positional parameters.

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Keyword, Operator, TokenId};
use crate::syntax::{CompoundCommand, MaybeLiteral as _, Word, is_name_char, is_name_start};

/// Tests if a string is a valid loop variable name.
fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_name_start(c) => chars.all(is_name_char),
        _ => false,
    }
}

impl Parser<'_> {
    /// Parses a for loop after the `for` token has been peeked.
    pub(super) fn for_loop(&mut self) -> Result<CompoundCommand> {
        let opening_location = self.take_token()?.word.location;

        if self.peek_token()?.id == TokenId::Operator(Operator::OpenParen) {
            return self.arith_for(&opening_location);
        }

        let name = self.loop_name()?;
        let values = self.loop_word_list()?;
        let body = self.do_group(&opening_location)?;
        Ok(CompoundCommand::For { name, values, body })
    }

    /// Parses a select loop after the `select` token has been peeked.
    pub(super) fn select_loop(&mut self) -> Result<CompoundCommand> {
        let opening_location = self.take_token()?.word.location;
        let name = self.loop_name()?;
        let values = self.loop_word_list()?;
        let body = self.do_group(&opening_location)?;
        Ok(CompoundCommand::Select { name, values, body })
    }

    /// Parses the variable name of a for or select loop.
    fn loop_name(&mut self) -> Result<String> {
        match self.peek_token()?.id {
            TokenId::Token(None) => (),
            _ => {
                let location = self.peek_token()?.word.location.clone();
                return Err(Error {
                    cause: SyntaxError::MissingLoopName,
                    location,
                });
            }
        }
        let token = self.take_token()?;
        match token.word.to_string_if_literal() {
            Some(name) if is_name(&name) => Ok(name),
            _ => Err(Error {
                cause: SyntaxError::InvalidLoopName,
                location: token.word.location,
            }),
        }
    }

    /// Parses the optional word list of a for or select loop.
    ///
    /// Returns `None` when the loop has no word list, `Some(vec![])` for a
    /// bare `;`, and `Some(words)` for an `in` clause. Keyword-looking
    /// tokens in the `in` clause are ordinary words.
    fn loop_word_list(&mut self) -> Result<Option<Vec<Word>>> {
        self.newline_list()?;
        match self.peek_token()?.id {
            TokenId::Operator(Operator::Semicolon) => {
                self.take_token()?;
                self.newline_list()?;
                Ok(Some(vec![]))
            }
            TokenId::Token(Some(Keyword::In)) => {
                self.take_token()?;
                let mut words = vec![];
                loop {
                    match self.peek_token()?.id {
                        TokenId::Token(_) => words.push(self.take_token()?.word),
                        TokenId::Operator(Operator::Semicolon) => {
                            self.take_token()?;
                            break;
                        }
                        TokenId::Operator(Operator::Newline) => break,
                        TokenId::EndOfInput => break,
                        _ => {
                            let location = self.peek_token()?.word.location.clone();
                            return Err(Error {
                                cause: SyntaxError::InvalidLoopValue,
                                location,
                            });
                        }
                    }
                }
                self.newline_list()?;
                Ok(Some(words))
            }
            _ => Ok(None),
        }
    }

    /// Parses an arithmetic for loop after the `for` keyword.
    ///
    /// The current token is the `(` of `((`. The raw text between `((` and
    /// `))` becomes the loop header expression.
    fn arith_for(&mut self, opening_location: &crate::source::Location) -> Result<CompoundCommand> {
        let index = self.peek_token()?.index;
        self.rewind_to(index);

        let expr = {
            let lexer = self.lexer();
            lexer.consume_char();
            if lexer.peek_char() != Some('(') {
                let location = lexer.location();
                return Err(Error {
                    cause: SyntaxError::MissingLoopName,
                    location,
                });
            }
            let arith_location = lexer.location_at(index);
            lexer.consume_char();
            match lexer.arith_body() {
                Some(expr) => expr,
                None => {
                    let location = lexer.location();
                    return Err(Error {
                        cause: SyntaxError::UnclosedArith {
                            opening_location: arith_location,
                        },
                        location,
                    });
                }
            }
        };

        if self.peek_token()?.id == TokenId::Operator(Operator::Semicolon) {
            self.take_token()?;
        }
        self.newline_list()?;
        let body = self.do_group(opening_location)?;
        Ok(CompoundCommand::ArithFor { expr, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lex::Lexer;
    use assert_matches::assert_matches;

    fn parse_loop(source: &str) -> CompoundCommand {
        let mut lexer = Lexer::new("test", source);
        let mut parser = Parser::new(&mut lexer);
        parser.compound_command().unwrap().unwrap()
    }

    #[test]
    fn for_with_word_list() {
        let command = parse_loop("for i in a b c; do echo $i; done");
        assert_matches!(command, CompoundCommand::For { name, values, body } => {
            assert_eq!(name, "i");
            let values = values.unwrap();
            assert_eq!(values.len(), 3);
            assert_eq!(values[0].to_string(), "a");
            assert_eq!(body.to_string(), "echo $i");
        });
    }

    #[test]
    fn for_with_empty_word_list() {
        let command = parse_loop("for i; do :; done");
        assert_matches!(command, CompoundCommand::For { values: Some(values), .. } => {
            assert_eq!(values, []);
        });

        let command = parse_loop("for i in; do :; done");
        assert_matches!(command, CompoundCommand::For { values: Some(values), .. } => {
            assert_eq!(values, []);
        });
    }

    #[test]
    fn for_without_word_list() {
        let command = parse_loop("for i do :; done");
        assert_matches!(command, CompoundCommand::For { values: None, .. });

        let command = parse_loop("for i\ndo :; done");
        assert_matches!(command, CompoundCommand::For { values: None, .. });
    }

    #[test]
    fn for_word_list_terminated_by_newline() {
        let command = parse_loop("for i in a b\ndo :; done");
        assert_matches!(command, CompoundCommand::For { values: Some(values), .. } => {
            assert_eq!(values.len(), 2);
        });
    }

    #[test]
    fn keywords_are_words_in_the_list() {
        let command = parse_loop("for i in do done if; do :; done");
        assert_matches!(command, CompoundCommand::For { values: Some(values), .. } => {
            assert_eq!(values.len(), 3);
        });
    }

    #[test]
    fn for_with_brace_body() {
        let command = parse_loop("for i in x; { echo $i; }");
        assert_matches!(command, CompoundCommand::For { body, .. } => {
            assert_eq!(body.to_string(), "echo $i");
        });
    }

    #[test]
    fn arith_for() {
        let command = parse_loop("for ((i = 0; i < 5; i++)); do echo $i; done");
        assert_matches!(command, CompoundCommand::ArithFor { expr, body } => {
            assert_eq!(expr, "i = 0; i < 5; i++");
            assert_eq!(body.to_string(), "echo $i");
        });
    }

    #[test]
    fn arith_for_without_semicolon() {
        let command = parse_loop("for ((;;)) do :; done");
        assert_matches!(command, CompoundCommand::ArithFor { expr, .. } => {
            assert_eq!(expr, ";;");
        });
    }

    #[test]
    fn select_loop() {
        let command = parse_loop("select s in a b; do break; done");
        assert_matches!(command, CompoundCommand::Select { name, values, .. } => {
            assert_eq!(name, "s");
            assert_eq!(values.unwrap().len(), 2);
        });
    }

    #[test]
    fn invalid_loop_name() {
        let mut lexer = Lexer::new("test", "for 1i in x; do :; done");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.compound_command().unwrap_err();
        assert_eq!(e.cause, SyntaxError::InvalidLoopName);
    }

    #[test]
    fn missing_loop_name() {
        let mut lexer = Lexer::new("test", "for ; do :; done");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.compound_command().unwrap_err();
        assert_eq!(e.cause, SyntaxError::MissingLoopName);
    }

    #[test]
    fn invalid_word_in_list() {
        let mut lexer = Lexer::new("test", "for i in a & b; do :; done");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.compound_command().unwrap_err();
        assert_eq!(e.cause, SyntaxError::InvalidLoopValue);
    }
}
