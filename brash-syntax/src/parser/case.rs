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

//! Syntax parser for the case conditional construct

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Keyword, Operator, TokenId};
use crate::syntax::{CaseContinuation, CaseItem, CompoundCommand, Word};

impl Parser<'_> {
    /// Parses a case command after the `case` token has been peeked.
    pub(super) fn case_command(&mut self) -> Result<CompoundCommand> {
        let opening_location = self.take_token()?.word.location;

        let subject = match self.peek_token()?.id {
            TokenId::Token(_) => self.take_token()?.word,
            TokenId::EndOfInput | TokenId::Operator(Operator::Newline) => {
                let location = self.peek_token()?.word.location.clone();
                return Err(Error {
                    cause: SyntaxError::MissingCaseSubject,
                    location,
                });
            }
            _ => {
                let location = self.peek_token()?.word.location.clone();
                return Err(Error {
                    cause: SyntaxError::InvalidCaseSubject,
                    location,
                });
            }
        };
        self.newline_list()?;

        match self.peek_token()?.id {
            TokenId::Token(Some(Keyword::In)) => {
                self.take_token()?;
            }
            _ => {
                let location = self.peek_token()?.word.location.clone();
                return Err(Error {
                    cause: SyntaxError::MissingIn { opening_location },
                    location,
                });
            }
        }
        self.newline_list()?;

        let mut items = vec![];
        loop {
            if self.peek_token()?.id == TokenId::Token(Some(Keyword::Esac)) {
                self.take_token()?;
                break;
            }

            let (item, terminated) = self.case_item()?;
            items.push(item);
            if !terminated {
                // The last item may omit its terminator before `esac`.
                match self.peek_token()?.id {
                    TokenId::Token(Some(Keyword::Esac)) => {
                        self.take_token()?;
                        break;
                    }
                    _ => {
                        let location = self.peek_token()?.word.location.clone();
                        return Err(Error {
                            cause: SyntaxError::UnclosedCase { opening_location },
                            location,
                        });
                    }
                }
            }
            self.newline_list()?;
        }

        Ok(CompoundCommand::Case { subject, items })
    }

    /// Parses one case item.
    ///
    /// The second element of the returned pair tells whether the item had
    /// its own `;;`-style terminator.
    fn case_item(&mut self) -> Result<(CaseItem, bool)> {
        if self.peek_token()?.id == TokenId::Operator(Operator::OpenParen) {
            self.take_token()?;
        }

        let mut patterns: Vec<Word> = vec![];
        loop {
            match self.peek_token()?.id {
                TokenId::Token(_) => patterns.push(self.take_token()?.word),
                _ => {
                    let location = self.peek_token()?.word.location.clone();
                    let cause = if patterns.is_empty() {
                        SyntaxError::MissingPattern
                    } else {
                        SyntaxError::InvalidPattern
                    };
                    return Err(Error { cause, location });
                }
            }
            match self.peek_token()?.id {
                TokenId::Operator(Operator::Bar) => {
                    self.take_token()?;
                }
                TokenId::Operator(Operator::CloseParen) => {
                    self.take_token()?;
                    break;
                }
                _ => {
                    let location = self.peek_token()?.word.location.clone();
                    return Err(Error {
                        cause: SyntaxError::UnclosedPatternList,
                        location,
                    });
                }
            }
        }

        let body = self.maybe_compound_list()?;

        let terminator = match self.peek_token()?.id {
            TokenId::Operator(op) => CaseContinuation::try_from(op).ok(),
            _ => None,
        };
        let continuation = match terminator {
            Some(continuation) => {
                self.take_token()?;
                continuation
            }
            None => CaseContinuation::default(),
        };
        let item = CaseItem {
            patterns,
            body,
            continuation,
        };
        Ok((item, terminator.is_some()))
    }
}
