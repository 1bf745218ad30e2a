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

//! Syntax parser for commands
//!
//! The dispatcher looks at the first token of a command: an opening
//! parenthesis or a reserved word selects a compound command, coprocess,
//! or function definition; anything else is a simple command, unless an
//! unreserved word followed by `()` makes it a function definition.

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Keyword, Operator, TokenId};
use crate::syntax::{Command, FullCompoundCommand, MaybeLiteral as _};

impl Parser<'_> {
    /// Parses a command, if any.
    ///
    /// Returns `Ok(None)` when the next token cannot begin a command, such
    /// as a separator, a clause-delimiter keyword, or the end of input.
    pub fn command(&mut self) -> Result<Option<Command>> {
        match self.peek_token()?.id {
            TokenId::EndOfInput => Ok(None),
            TokenId::Operator(Operator::OpenParen) => {
                let command = self.full_compound_command()?
                    .expect("`(` opens a compound command");
                Ok(Some(Command::Compound(command)))
            }
            TokenId::Operator(_) => {
                // A redirection operator can begin a simple command;
                // separators and closers cannot begin anything.
                self.simple_command()
            }
            TokenId::IoNumber(_) => self.simple_command(),
            TokenId::Token(Some(keyword)) => self.keyword_command(keyword),
            TokenId::Token(None) => self.simple_or_function(),
        }
    }

    /// Parses the command selected by a reserved word in command position.
    fn keyword_command(&mut self, keyword: Keyword) -> Result<Option<Command>> {
        match keyword {
            Keyword::Function => self.function_definition().map(Some),
            Keyword::Coproc => {
                let command = self.coproc()?;
                Ok(Some(Command::Compound(FullCompoundCommand {
                    command,
                    redirs: vec![],
                })))
            }
            _ => Ok(self.full_compound_command()?.map(Command::Compound)),
        }
    }

    /// Parses a simple command, or a function definition if the first word
    /// is followed by `()`.
    fn simple_or_function(&mut self) -> Result<Option<Command>> {
        let token = self.take_token()?;

        if self.peek_token()?.id == TokenId::Operator(Operator::OpenParen) {
            if let Some(name) = token.word.to_string_if_literal() {
                if !name.is_empty() && !name.contains('=') {
                    self.take_token()?; // `(`
                    return match self.peek_token()?.id {
                        TokenId::Operator(Operator::CloseParen) => {
                            self.take_token()?;
                            self.function_body(false, true, name).map(Some)
                        }
                        _ => {
                            let location = self.peek_token()?.word.location.clone();
                            Err(Error {
                                cause: SyntaxError::UnmatchedParenthesis,
                                location,
                            })
                        }
                    };
                }
            }
        }

        self.rewind_to(token.index);
        self.simple_command()
    }
}
