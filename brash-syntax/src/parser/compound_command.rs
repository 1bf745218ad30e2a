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

//! Syntax parser for compound commands
//!
//! This module dispatches on the opening token of a compound command and
//! also implements the constructs that have no module of their own: the
//! arithmetic command `((…))`, the `do…done` group shared by all loops,
//! and coprocesses.

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Keyword, Operator, TokenId};
use crate::source::Location;
use crate::syntax::{
    Command, CompoundCommand, FullCompoundCommand, List, MaybeLiteral as _,
};

impl Parser<'_> {
    /// Parses a compound command, if any.
    ///
    /// Coprocesses and function definitions are not compound commands; see
    /// [`command`](Self::command).
    pub fn compound_command(&mut self) -> Result<Option<CompoundCommand>> {
        match self.peek_token()?.id {
            TokenId::Operator(Operator::OpenParen) => self.subshell_or_arith().map(Some),
            TokenId::Token(Some(keyword)) => match keyword {
                Keyword::OpenBrace => self.grouping().map(Some),
                Keyword::If => self.if_command().map(Some),
                Keyword::While | Keyword::Until => self.while_or_until(keyword).map(Some),
                Keyword::For => self.for_loop().map(Some),
                Keyword::Select => self.select_loop().map(Some),
                Keyword::Case => self.case_command().map(Some),
                Keyword::OpenBracketBracket => self.cond_command().map(Some),
                _ => Ok(None),
            },
            _ => Ok(None),
        }
    }

    /// Parses a compound command with its trailing redirections.
    pub fn full_compound_command(&mut self) -> Result<Option<FullCompoundCommand>> {
        let Some(command) = self.compound_command()? else {
            return Ok(None);
        };
        let redirs = self.redirections()?;
        Ok(Some(FullCompoundCommand { command, redirs }))
    }

    /// Distinguishes an arithmetic command `((…))` from a subshell.
    ///
    /// A `((` is an arithmetic command only if a matching `))` closes it;
    /// otherwise the input is re-read as a subshell, as in `((a); b)`.
    fn subshell_or_arith(&mut self) -> Result<CompoundCommand> {
        let index = self.peek_token()?.index;
        self.rewind_to(index);
        {
            let lexer = self.lexer();
            lexer.consume_char();
            if lexer.peek_char() == Some('(') {
                let fallback = lexer.index();
                lexer.consume_char();
                if let Some(expr) = lexer.arith_body() {
                    return Ok(CompoundCommand::Arith(expr));
                }
                lexer.rewind(fallback);
            }
            lexer.rewind(index);
        }
        self.subshell()
    }

    /// Parses the `do…done` group of a loop.
    ///
    /// A brace group is accepted in place of `do…done`.
    pub(super) fn do_group(&mut self, opening_location: &Location) -> Result<List> {
        match self.peek_token()?.id {
            TokenId::Token(Some(Keyword::Do)) => {
                let do_location = self.take_token()?.word.location;
                let body = self.maybe_compound_list()?;
                if body.0.is_empty() {
                    let location = self.peek_token()?.word.location.clone();
                    return Err(Error {
                        cause: SyntaxError::EmptyDoClause,
                        location,
                    });
                }
                match self.peek_token()?.id {
                    TokenId::Token(Some(Keyword::Done)) => {
                        self.take_token()?;
                        Ok(body)
                    }
                    _ => {
                        let location = self.peek_token()?.word.location.clone();
                        Err(Error {
                            cause: SyntaxError::UnclosedDoClause {
                                opening_location: do_location,
                            },
                            location,
                        })
                    }
                }
            }
            TokenId::Token(Some(Keyword::OpenBrace)) => match self.grouping()? {
                CompoundCommand::Grouping(body) => Ok(body),
                _ => unreachable!("grouping returns a grouping"),
            },
            _ => {
                let location = self.peek_token()?.word.location.clone();
                Err(Error {
                    cause: SyntaxError::MissingDoGroup {
                        opening_location: opening_location.clone(),
                    },
                    location,
                })
            }
        }
    }

    /// Parses a coprocess after the `coproc` reserved word has been peeked.
    ///
    /// The optional name is recognized only when the following token opens
    /// a compound command; otherwise the word belongs to the coprocess's
    /// simple command.
    pub(super) fn coproc(&mut self) -> Result<CompoundCommand> {
        self.take_token()?; // `coproc`

        if let TokenId::Token(None) = self.peek_token()?.id {
            let token = self.take_token()?;
            let opens_compound = match self.peek_token()?.id {
                TokenId::Operator(Operator::OpenParen) => true,
                TokenId::Token(Some(keyword)) => matches!(
                    keyword,
                    Keyword::OpenBrace
                        | Keyword::If
                        | Keyword::While
                        | Keyword::Until
                        | Keyword::For
                        | Keyword::Select
                        | Keyword::Case
                        | Keyword::OpenBracketBracket
                ),
                _ => false,
            };
            if opens_compound {
                if let Some(name) = token.word.to_string_if_literal() {
                    let command = self
                        .full_compound_command()?
                        .expect("peeked token opens a compound command");
                    return Ok(CompoundCommand::Coproc {
                        name: Some(name),
                        command: Box::new(Command::Compound(command)),
                    });
                }
            }
            self.rewind_to(token.index);
        }

        if let Some(command) = self.full_compound_command()? {
            return Ok(CompoundCommand::Coproc {
                name: None,
                command: Box::new(Command::Compound(command)),
            });
        }
        match self.simple_command()? {
            Some(command) => Ok(CompoundCommand::Coproc {
                name: None,
                command: Box::new(command),
            }),
            None => {
                let location = self.peek_token()?.word.location.clone();
                Err(Error {
                    cause: SyntaxError::MissingCoprocCommand,
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

    fn parse_compound(source: &str) -> CompoundCommand {
        let mut lexer = Lexer::new("test", source);
        let mut parser = Parser::new(&mut lexer);
        parser.compound_command().unwrap().unwrap()
    }

    #[test]
    fn arithmetic_command() {
        assert_matches!(parse_compound("((x = 1 + (2 * 3)))"), CompoundCommand::Arith(expr) => {
            assert_eq!(expr, "x = 1 + (2 * 3)");
        });
    }

    #[test]
    fn double_paren_subshell() {
        // `((a); b)` is a subshell starting with a subshell.
        assert_matches!(parse_compound("((a); b)"), CompoundCommand::Subshell(list) => {
            assert_eq!(list.to_string(), "(a); b");
        });
    }

    #[test]
    fn coproc_unnamed_simple() {
        let mut lexer = Lexer::new("test", "coproc cat file");
        let mut parser = Parser::new(&mut lexer);
        let command = parser.command().unwrap().unwrap();
        assert_matches!(command, Command::Compound(full) => {
            assert_matches!(full.command, CompoundCommand::Coproc { name: None, command } => {
                assert_matches!(*command, Command::Simple(simple) => {
                    assert_eq!(simple.words.len(), 2);
                });
            });
        });
    }

    #[test]
    fn coproc_named_compound() {
        let mut lexer = Lexer::new("test", "coproc worker { sort; }");
        let mut parser = Parser::new(&mut lexer);
        let command = parser.command().unwrap().unwrap();
        assert_matches!(command, Command::Compound(full) => {
            assert_matches!(full.command, CompoundCommand::Coproc { name, command } => {
                assert_eq!(name.as_deref(), Some("worker"));
                assert_matches!(*command, Command::Compound(_));
            });
        });
    }

    #[test]
    fn coproc_word_is_not_a_name_without_compound() {
        let mut lexer = Lexer::new("test", "coproc sort -u");
        let mut parser = Parser::new(&mut lexer);
        let command = parser.command().unwrap().unwrap();
        assert_matches!(command, Command::Compound(full) => {
            assert_matches!(full.command, CompoundCommand::Coproc { name: None, command } => {
                assert_matches!(*command, Command::Simple(simple) => {
                    assert_eq!(simple.words[0].to_string(), "sort");
                });
            });
        });
    }
}
