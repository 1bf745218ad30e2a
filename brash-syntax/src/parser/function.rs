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

//! Syntax parser for function definitions
//!
//! Two forms are recognized: `function NAME [()] BODY`, parsed here after
//! the `function` reserved word, and `NAME () BODY`, entered from the
//! command dispatcher when an unreserved word is followed by `(`. The body
//! must be a compound command.

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Operator, TokenId};
use crate::syntax::{Command, FunctionDefinition, MaybeLiteral as _};

impl Parser<'_> {
    /// Parses a function definition after the `function` token has been
    /// peeked.
    pub(super) fn function_definition(&mut self) -> Result<Command> {
        self.take_token()?; // `function`

        let name = match self.peek_token()?.id {
            TokenId::Token(None) => {
                let token = self.take_token()?;
                match token.word.to_string_if_literal() {
                    Some(name) => name,
                    None => {
                        return Err(Error {
                            cause: SyntaxError::InvalidFunctionName,
                            location: token.word.location,
                        });
                    }
                }
            }
            _ => {
                let location = self.peek_token()?.word.location.clone();
                return Err(Error {
                    cause: SyntaxError::InvalidFunctionName,
                    location,
                });
            }
        };

        let parens = if self.peek_token()?.id == TokenId::Operator(Operator::OpenParen) {
            self.take_token()?;
            match self.peek_token()?.id {
                TokenId::Operator(Operator::CloseParen) => {
                    self.take_token()?;
                }
                _ => {
                    let location = self.peek_token()?.word.location.clone();
                    return Err(Error {
                        cause: SyntaxError::UnmatchedParenthesis,
                        location,
                    });
                }
            }
            true
        } else {
            false
        };

        self.function_body(true, parens, name)
    }

    /// Parses the body of a function definition.
    ///
    /// For the keywordless form, the dispatcher calls this after consuming
    /// `NAME ( )`.
    pub(super) fn function_body(
        &mut self,
        has_keyword: bool,
        parens: bool,
        name: String,
    ) -> Result<Command> {
        self.newline_list()?;
        match self.full_compound_command()? {
            Some(body) => Ok(Command::Function(FunctionDefinition {
                has_keyword,
                parens,
                name,
                body: Box::new(body),
            })),
            None => {
                let location = self.peek_token()?.word.location.clone();
                Err(Error {
                    cause: SyntaxError::MissingFunctionBody,
                    location,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lex::Lexer;
    use crate::syntax::CompoundCommand;
    use assert_matches::assert_matches;

    fn parse_command(source: &str) -> Command {
        let mut lexer = Lexer::new("test", source);
        let mut parser = Parser::new(&mut lexer);
        parser.command().unwrap().unwrap()
    }

    #[test]
    fn posix_style_definition() {
        let command = parse_command("f() { echo hi; }");
        assert_matches!(command, Command::Function(definition) => {
            assert!(!definition.has_keyword);
            assert!(definition.parens);
            assert_eq!(definition.name, "f");
            assert_matches!(definition.body.command, CompoundCommand::Grouping(_));
        });
    }

    #[test]
    fn keyword_definition_without_parens() {
        let command = parse_command("function g { :; }");
        assert_matches!(command, Command::Function(definition) => {
            assert!(definition.has_keyword);
            assert!(!definition.parens);
            assert_eq!(definition.name, "g");
        });
    }

    #[test]
    fn keyword_definition_with_parens() {
        let command = parse_command("function g() (exit)");
        assert_matches!(command, Command::Function(definition) => {
            assert!(definition.has_keyword);
            assert!(definition.parens);
            assert_matches!(definition.body.command, CompoundCommand::Subshell(_));
        });
    }

    #[test]
    fn body_on_next_line() {
        let command = parse_command("f()\n{ :; }");
        assert_matches!(command, Command::Function(_));
    }

    #[test]
    fn body_with_redirections() {
        let command = parse_command("f() { :; } >log 2>&1");
        assert_matches!(command, Command::Function(definition) => {
            assert_eq!(definition.body.redirs.len(), 2);
        });
    }

    #[test]
    fn space_between_name_and_parens() {
        let command = parse_command("f () { :; }");
        assert_matches!(command, Command::Function(definition) => {
            assert_eq!(definition.name, "f");
        });
    }

    #[test]
    fn missing_body() {
        let mut lexer = Lexer::new("test", "f()");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.command().unwrap_err();
        assert_eq!(e.cause, SyntaxError::MissingFunctionBody);
    }

    #[test]
    fn unmatched_parenthesis() {
        let mut lexer = Lexer::new("test", "f(x)");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.command().unwrap_err();
        assert_eq!(e.cause, SyntaxError::UnmatchedParenthesis);
    }

    #[test]
    fn simple_command_is_not_a_function_body() {
        let mut lexer = Lexer::new("test", "function f echo");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.command().unwrap_err();
        assert_eq!(e.cause, SyntaxError::MissingFunctionBody);
    }
}
