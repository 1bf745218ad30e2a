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

//! Syntax parser for grouping and subshell

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Keyword, Operator, TokenId};
use crate::syntax::CompoundCommand;

impl Parser<'_> {
    /// Parses a `{ … }` grouping after the `{` token has been peeked.
    pub(super) fn grouping(&mut self) -> Result<CompoundCommand> {
        let opening_location = self.take_token()?.word.location;
        let list = self.maybe_compound_list()?;

        match self.peek_token()?.id {
            TokenId::Token(Some(Keyword::CloseBrace)) => {
                self.take_token()?;
            }
            _ => {
                let location = self.peek_token()?.word.location.clone();
                return Err(Error {
                    cause: SyntaxError::UnclosedGrouping { opening_location },
                    location,
                });
            }
        }

        if list.0.is_empty() {
            return Err(Error {
                cause: SyntaxError::EmptyGrouping,
                location: opening_location,
            });
        }

        Ok(CompoundCommand::Grouping(list))
    }

    /// Parses a `(…)` subshell after the `(` token has been peeked.
    pub(super) fn subshell(&mut self) -> Result<CompoundCommand> {
        let opening_location = self.take_token()?.word.location;
        let list = self.maybe_compound_list()?;

        match self.peek_token()?.id {
            TokenId::Operator(Operator::CloseParen) => {
                self.take_token()?;
            }
            _ => {
                let location = self.peek_token()?.word.location.clone();
                return Err(Error {
                    cause: SyntaxError::UnclosedSubshell { opening_location },
                    location,
                });
            }
        }

        if list.0.is_empty() {
            return Err(Error {
                cause: SyntaxError::EmptySubshell,
                location: opening_location,
            });
        }

        Ok(CompoundCommand::Subshell(list))
    }
}
