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

//! Syntax parser for and-or lists and statement lists

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Operator, TokenId};
use crate::syntax::{AndOr, AndOrList, Item, List};

impl Parser<'_> {
    /// Parses an and-or list: pipelines joined by `&&` and `||`.
    pub fn and_or_list(&mut self) -> Result<Option<AndOrList>> {
        let Some(first) = self.pipeline()? else {
            return Ok(None);
        };

        let mut rest = vec![];
        loop {
            let and_or = match self.peek_token()?.id {
                TokenId::Operator(Operator::AndAnd) => AndOr::AndThen,
                TokenId::Operator(Operator::BarBar) => AndOr::OrElse,
                _ => break,
            };
            self.take_token()?;
            self.newline_list()?;

            let Some(next) = self.pipeline()? else {
                let location = self.peek_token()?.word.location.clone();
                return Err(Error {
                    cause: SyntaxError::MissingPipeline(and_or),
                    location,
                });
            };
            rest.push((and_or, next));
        }

        Ok(Some(AndOrList { first, rest }))
    }

    /// Parses a possibly empty list of statements.
    ///
    /// Statements are and-or lists terminated by `;`, `&`, or newlines.
    /// The list ends before the first token that cannot begin a command,
    /// which the caller is expected to handle.
    pub fn maybe_compound_list(&mut self) -> Result<List> {
        let mut items = vec![];
        loop {
            self.newline_list()?;

            let Some(and_or) = self.and_or_list()? else {
                break;
            };

            match self.peek_token()?.id {
                TokenId::Operator(Operator::Semicolon) => {
                    self.take_token()?;
                    items.push(Item {
                        and_or,
                        is_async: false,
                    });
                }
                TokenId::Operator(Operator::And) => {
                    self.take_token()?;
                    items.push(Item {
                        and_or,
                        is_async: true,
                    });
                }
                TokenId::Operator(Operator::Newline) => {
                    // Consumed by `newline_list` on the next iteration,
                    // which also reads pending here-document contents.
                    items.push(Item {
                        and_or,
                        is_async: false,
                    });
                }
                _ => {
                    // A closer or the end of input stays for the caller.
                    items.push(Item {
                        and_or,
                        is_async: false,
                    });
                    break;
                }
            }
        }
        Ok(List(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lex::Lexer;
    use assert_matches::assert_matches;

    fn parse_list(source: &str) -> List {
        let mut lexer = Lexer::new("test", source);
        let mut parser = Parser::new(&mut lexer);
        parser.maybe_compound_list().unwrap()
    }

    #[test]
    fn empty_list() {
        assert_eq!(parse_list(""), List(vec![]));
        assert_eq!(parse_list("\n\n"), List(vec![]));
    }

    #[test]
    fn statements_with_terminators() {
        let list = parse_list("a; b& c\nd");
        assert_eq!(list.0.len(), 4);
        assert!(!list.0[0].is_async);
        assert!(list.0[1].is_async);
        assert!(!list.0[2].is_async);
        assert_eq!(list.to_string(), "a; b& c; d");
    }

    #[test]
    fn and_or_chains() {
        let list = parse_list("a && b || c");
        assert_eq!(list.0.len(), 1);
        let and_or = &list.0[0].and_or;
        assert_eq!(and_or.rest.len(), 2);
        assert_eq!(and_or.rest[0].0, AndOr::AndThen);
        assert_eq!(and_or.rest[1].0, AndOr::OrElse);
    }

    #[test]
    fn and_or_continues_after_newlines() {
        let list = parse_list("a &&\n\nb");
        assert_eq!(list.0.len(), 1);
        assert_eq!(list.0[0].and_or.rest.len(), 1);
    }

    #[test]
    fn missing_pipeline_after_and_and() {
        let mut lexer = Lexer::new("test", "a && ;");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.maybe_compound_list().unwrap_err();
        assert_eq!(e.cause, SyntaxError::MissingPipeline(AndOr::AndThen));
    }

    #[test]
    fn list_stops_at_closer() {
        let mut lexer = Lexer::new("test", "a; b; fi");
        let mut parser = Parser::new(&mut lexer);
        let list = parser.maybe_compound_list().unwrap();
        assert_eq!(list.0.len(), 2);
        assert_eq!(parser.peek_token().unwrap().word.to_string(), "fi");
    }

    #[test]
    fn async_chain() {
        let list = parse_list("a && b& c");
        assert_eq!(list.0.len(), 2);
        assert!(list.0[0].is_async);
        assert_matches!(&list.0[0].and_or.rest[..], [(AndOr::AndThen, _)]);
    }
}
