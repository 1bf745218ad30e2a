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

//! Syntax parser for while and until loops

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::Keyword;
use crate::syntax::CompoundCommand;

impl Parser<'_> {
    /// Parses a while or until loop after its keyword has been peeked.
    pub(super) fn while_or_until(&mut self, keyword: Keyword) -> Result<CompoundCommand> {
        debug_assert!(matches!(keyword, Keyword::While | Keyword::Until));
        let opening_location = self.take_token()?.word.location;

        let condition = self.maybe_compound_list()?;
        if condition.0.is_empty() {
            let cause = if keyword == Keyword::While {
                SyntaxError::EmptyWhileCondition
            } else {
                SyntaxError::EmptyUntilCondition
            };
            let location = self.peek_token()?.word.location.clone();
            return Err(Error { cause, location });
        }

        let body = self.do_group(&opening_location)?;
        Ok(if keyword == Keyword::While {
            CompoundCommand::While { condition, body }
        } else {
            CompoundCommand::Until { condition, body }
        })
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
    fn while_loop() {
        let command = parse_loop("while read line; do echo $line; done");
        assert_matches!(command, CompoundCommand::While { condition, body } => {
            assert_eq!(condition.to_string(), "read line");
            assert_eq!(body.to_string(), "echo $line");
        });
    }

    #[test]
    fn until_loop() {
        let command = parse_loop("until test -e f; do sleep 1; done");
        assert_matches!(command, CompoundCommand::Until { condition, body } => {
            assert_eq!(condition.to_string(), "test -e f");
            assert_eq!(body.to_string(), "sleep 1");
        });
    }

    #[test]
    fn while_with_multiple_condition_commands() {
        let command = parse_loop("while a; b; do c; done");
        assert_matches!(command, CompoundCommand::While { condition, .. } => {
            assert_eq!(condition.0.len(), 2);
        });
    }

    #[test]
    fn while_missing_do() {
        let mut lexer = Lexer::new("test", "while a; done");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.compound_command().unwrap_err();
        assert_matches!(e.cause, SyntaxError::MissingDoGroup { .. });
    }

    #[test]
    fn while_empty_condition() {
        let mut lexer = Lexer::new("test", "while do a; done");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.compound_command().unwrap_err();
        assert_eq!(e.cause, SyntaxError::EmptyWhileCondition);
    }

    #[test]
    fn until_unclosed_do() {
        let mut lexer = Lexer::new("test", "until a; do b;");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.compound_command().unwrap_err();
        assert_matches!(e.cause, SyntaxError::UnclosedDoClause { .. });
    }
}
