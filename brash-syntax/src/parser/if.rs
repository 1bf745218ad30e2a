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

//! Syntax parser for the if conditional construct
//!
//! `elif` clauses are desugared while parsing: each becomes the sole
//! content of the enclosing `else` branch, nested right to left. The
//! pretty-printer reverses the desugaring when it re-emits the command.

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Keyword, TokenId};
use crate::syntax::{
    AndOrList, Command, CompoundCommand, FullCompoundCommand, Item, List, Pipeline,
};

/// Wraps a compound command in a single-statement list.
fn singleton_list(command: CompoundCommand) -> List {
    List(vec![Item {
        and_or: AndOrList {
            first: Pipeline {
                commands: vec![Command::Compound(FullCompoundCommand {
                    command,
                    redirs: vec![],
                })],
                negation: false,
                time: None,
            },
            rest: vec![],
        },
        is_async: false,
    }])
}

impl Parser<'_> {
    /// Parses an if command after the `if` token has been peeked.
    pub(super) fn if_command(&mut self) -> Result<CompoundCommand> {
        let if_location = self.take_token()?.word.location;

        let condition = self.condition_then_body(
            SyntaxError::IfMissingThen {
                if_location: if_location.clone(),
            },
            SyntaxError::EmptyIfCondition,
        )?;
        let body = self.clause_body(SyntaxError::EmptyIfBody)?;

        let mut branches = vec![(condition, body)];
        let else_part = loop {
            match self.peek_token()?.id {
                TokenId::Token(Some(Keyword::Elif)) => {
                    let elif_location = self.take_token()?.word.location;
                    let condition = self.condition_then_body(
                        SyntaxError::ElifMissingThen { elif_location },
                        SyntaxError::EmptyElifCondition,
                    )?;
                    let body = self.clause_body(SyntaxError::EmptyElifBody)?;
                    branches.push((condition, body));
                }
                TokenId::Token(Some(Keyword::Else)) => {
                    self.take_token()?;
                    let list = self.maybe_compound_list()?;
                    if list.0.is_empty() {
                        let location = self.peek_token()?.word.location.clone();
                        return Err(Error {
                            cause: SyntaxError::EmptyElse,
                            location,
                        });
                    }
                    self.close_fi(&if_location)?;
                    break Some(list);
                }
                TokenId::Token(Some(Keyword::Fi)) => {
                    self.take_token()?;
                    break None;
                }
                _ => {
                    let location = self.peek_token()?.word.location.clone();
                    return Err(Error {
                        cause: SyntaxError::UnclosedIf {
                            opening_location: if_location,
                        },
                        location,
                    });
                }
            }
        };

        // Nest the elif branches from the inside out.
        let mut else_part = else_part;
        while branches.len() > 1 {
            let (condition, body) = branches.pop().unwrap();
            else_part = Some(singleton_list(CompoundCommand::If {
                condition,
                body,
                else_part,
            }));
        }
        let (condition, body) = branches.pop().unwrap();
        Ok(CompoundCommand::If {
            condition,
            body,
            else_part,
        })
    }

    /// Parses a condition list and the following `then` token.
    fn condition_then_body(
        &mut self,
        missing_then: SyntaxError,
        empty_condition: SyntaxError,
    ) -> Result<List> {
        let condition = self.maybe_compound_list()?;
        match self.peek_token()?.id {
            TokenId::Token(Some(Keyword::Then)) => {
                if condition.0.is_empty() {
                    let location = self.peek_token()?.word.location.clone();
                    return Err(Error {
                        cause: empty_condition,
                        location,
                    });
                }
                self.take_token()?;
                Ok(condition)
            }
            _ => {
                let location = self.peek_token()?.word.location.clone();
                Err(Error {
                    cause: missing_then,
                    location,
                })
            }
        }
    }

    /// Parses the body list of a `then`, `elif`, or `else` clause.
    fn clause_body(&mut self, empty_body: SyntaxError) -> Result<List> {
        let body = self.maybe_compound_list()?;
        if body.0.is_empty() {
            let location = self.peek_token()?.word.location.clone();
            return Err(Error {
                cause: empty_body,
                location,
            });
        }
        Ok(body)
    }

    /// Consumes the closing `fi`.
    fn close_fi(&mut self, if_location: &crate::source::Location) -> Result<()> {
        match self.peek_token()?.id {
            TokenId::Token(Some(Keyword::Fi)) => {
                self.take_token()?;
                Ok(())
            }
            _ => {
                let location = self.peek_token()?.word.location.clone();
                Err(Error {
                    cause: SyntaxError::UnclosedIf {
                        opening_location: if_location.clone(),
                    },
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
    use assert_matches::assert_matches;

    fn parse_if(source: &str) -> CompoundCommand {
        let mut lexer = Lexer::new("test", source);
        let mut parser = Parser::new(&mut lexer);
        parser.compound_command().unwrap().unwrap()
    }

    #[test]
    fn simple_if() {
        let command = parse_if("if a; then b; fi");
        assert_matches!(command, CompoundCommand::If { condition, body, else_part } => {
            assert_eq!(condition.to_string(), "a");
            assert_eq!(body.to_string(), "b");
            assert_eq!(else_part, None);
        });
    }

    #[test]
    fn if_with_else() {
        let command = parse_if("if a; then b; else c; fi");
        assert_matches!(command, CompoundCommand::If { else_part: Some(else_part), .. } => {
            assert_eq!(else_part.to_string(), "c");
        });
    }

    #[test]
    fn elif_desugars_to_nested_if() {
        let command = parse_if("if x; then a; elif y; then b; else c; fi");
        assert_matches!(command, CompoundCommand::If { condition, body, else_part } => {
            assert_eq!(condition.to_string(), "x");
            assert_eq!(body.to_string(), "a");
            let else_part = else_part.unwrap();
            assert_eq!(else_part.0.len(), 1);
            assert_eq!(else_part.to_string(), "if y; then b; else c; fi");
        });
    }

    #[test]
    fn multiple_elifs_nest_rightwards() {
        let command = parse_if("if a; then 1; elif b; then 2; elif c; then 3; fi");
        let printed = format!(
            "{}",
            crate::syntax::FullCompoundCommand {
                command,
                redirs: vec![]
            }
        );
        assert_eq!(printed, "if a; then 1; elif b; then 2; elif c; then 3; fi");
    }

    #[test]
    fn if_missing_then() {
        let mut lexer = Lexer::new("test", "if a; fi");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.compound_command().unwrap_err();
        assert_matches!(e.cause, SyntaxError::IfMissingThen { .. });
    }

    #[test]
    fn if_empty_condition() {
        let mut lexer = Lexer::new("test", "if then a; fi");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.compound_command().unwrap_err();
        assert_eq!(e.cause, SyntaxError::EmptyIfCondition);
    }

    #[test]
    fn if_unclosed() {
        let mut lexer = Lexer::new("test", "if a; then b;");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.compound_command().unwrap_err();
        assert_matches!(e.cause, SyntaxError::UnclosedIf { .. });
    }
}
