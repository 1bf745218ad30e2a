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

//! Syntax parser for pipelines
//!
//! A pipeline is an optional `time [-p]`, an optional `!`, and commands
//! joined by `|` or `|&`. The `|&` operator is desugared while parsing: it
//! appends a `2>&1` redirection to the command on its left and continues
//! like `|`.

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Keyword, Operator, TokenId};
use crate::syntax::{
    Command, Fd, MaybeLiteral as _, Pipeline, Redir, RedirBody, RedirOp, TimeFormat, Word,
    WordUnit::Literal,
};
use crate::source::Location;

/// Appends a redirection to the last command of a pipeline under
/// construction.
fn push_redir(command: &mut Command, redir: Redir) {
    match command {
        Command::Simple(simple) => simple.redirs.push(redir),
        Command::Decl(decl) => decl.redirs.push(redir),
        Command::Compound(full) => full.redirs.push(redir),
        Command::Function(function) => function.body.redirs.push(redir),
    }
}

/// Builds the `2>&1` redirection that `|&` stands for.
fn stderr_to_stdout(location: Location) -> Redir {
    Redir {
        fd: Some(Fd::STDERR),
        body: RedirBody::Normal {
            operator: RedirOp::FdOut,
            operand: Word {
                units: vec![Literal('1')],
                location,
            },
        },
    }
}

impl Parser<'_> {
    /// Parses a pipeline, if any.
    pub fn pipeline(&mut self) -> Result<Option<Pipeline>> {
        let time = self.time_prefix()?;

        let negation = if self.peek_token()?.id == TokenId::Token(Some(Keyword::Bang)) {
            self.take_token()?;
            if self.peek_token()?.id == TokenId::Token(Some(Keyword::Bang)) {
                let location = self.peek_token()?.word.location.clone();
                return Err(Error {
                    cause: SyntaxError::DoubleNegation,
                    location,
                });
            }
            true
        } else {
            false
        };

        let Some(first) = self.command()? else {
            let location = self.peek_token()?.word.location.clone();
            if negation {
                return Err(Error {
                    cause: SyntaxError::MissingCommandAfterBang,
                    location,
                });
            }
            if time.is_some() {
                return Err(Error {
                    cause: SyntaxError::MissingCommandAfterTime,
                    location,
                });
            }
            return Ok(None);
        };

        let mut commands = vec![first];
        loop {
            let merge_stderr = match self.peek_token()?.id {
                TokenId::Operator(Operator::Bar) => false,
                TokenId::Operator(Operator::BarAnd) => true,
                _ => break,
            };
            let operator_location = self.take_token()?.word.location;
            if merge_stderr {
                let last = commands.last_mut().expect("pipeline has a command");
                push_redir(last, stderr_to_stdout(operator_location.clone()));
            }

            self.newline_list()?;
            let Some(next) = self.command()? else {
                let location = self.peek_token()?.word.location.clone();
                return Err(Error {
                    cause: SyntaxError::MissingCommandAfterBar,
                    location,
                });
            };
            commands.push(next);
        }

        Ok(Some(Pipeline {
            commands,
            negation,
            time,
        }))
    }

    /// Parses the optional `time [-p]` prefix of a pipeline.
    fn time_prefix(&mut self) -> Result<Option<TimeFormat>> {
        if self.peek_token()?.id != TokenId::Token(Some(Keyword::Time)) {
            return Ok(None);
        }
        self.take_token()?;

        let posix = match self.peek_token()?.id {
            TokenId::Token(None) => {
                let is_p_flag = self
                    .peek_token()?
                    .word
                    .to_string_if_literal()
                    .is_some_and(|s| s == "-p");
                if is_p_flag {
                    self.take_token()?;
                }
                is_p_flag
            }
            _ => false,
        };
        Ok(Some(if posix {
            TimeFormat::Posix
        } else {
            TimeFormat::Default
        }))
    }
}
