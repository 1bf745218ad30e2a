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

//! Syntax parser for the conditional expression `[[ … ]]`
//!
//! The token sequence between `[[` and `]]` is collected verbatim: every
//! token becomes a word, including the conditional operators, which appear
//! as words of literal characters. Only the operators meaningful inside a
//! conditional expression are accepted; shell control operators such as
//! `;` or `&` are rejected as Bash does.

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Keyword, Operator, TokenId};
use crate::syntax::{CompoundCommand, Word};

/// Operators that may appear between `[[` and `]]`.
const COND_OPERATORS: &[Operator] = &[
    Operator::AndAnd,
    Operator::BarBar,
    Operator::Less,
    Operator::Greater,
    Operator::OpenParen,
    Operator::CloseParen,
];

impl Parser<'_> {
    /// Parses a conditional expression after the `[[` token has been
    /// peeked.
    pub(super) fn cond_command(&mut self) -> Result<CompoundCommand> {
        let opening_location = self.take_token()?.word.location;

        let mut words: Vec<Word> = vec![];
        loop {
            match self.peek_token()?.id {
                TokenId::Token(Some(Keyword::CloseBracketBracket)) => {
                    self.take_token()?;
                    return Ok(CompoundCommand::Cond(words));
                }
                TokenId::Token(_) => words.push(self.take_token()?.word),
                TokenId::Operator(Operator::Newline) => {
                    self.newline()?;
                }
                TokenId::Operator(op) if COND_OPERATORS.contains(&op) => {
                    words.push(self.take_token()?.word);
                }
                TokenId::EndOfInput => {
                    let location = self.peek_token()?.word.location.clone();
                    return Err(Error {
                        cause: SyntaxError::UnclosedCond { opening_location },
                        location,
                    });
                }
                _ => {
                    let location = self.peek_token()?.word.location.clone();
                    return Err(Error {
                        cause: SyntaxError::InvalidCondToken,
                        location,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lex::Lexer;
    use assert_matches::assert_matches;

    fn parse_cond(source: &str) -> CompoundCommand {
        let mut lexer = Lexer::new("test", source);
        let mut parser = Parser::new(&mut lexer);
        parser.compound_command().unwrap().unwrap()
    }

    #[test]
    fn unary_test() {
        assert_matches!(parse_cond("[[ -n $x ]]"), CompoundCommand::Cond(words) => {
            let words: Vec<String> = words.iter().map(Word::to_string).collect();
            assert_eq!(words, ["-n", "$x"]);
        });
    }

    #[test]
    fn operators_become_words() {
        assert_matches!(
            parse_cond("[[ ( $a < $b || $a == $b ) && ! $c ]]"),
            CompoundCommand::Cond(words) => {
                let words: Vec<String> = words.iter().map(Word::to_string).collect();
                assert_eq!(
                    words,
                    ["(", "$a", "<", "$b", "||", "$a", "==", "$b", ")", "&&", "!", "$c"]
                );
            }
        );
    }

    #[test]
    fn regex_match_tokens() {
        assert_matches!(parse_cond("[[ $x =~ ^a+$ ]]"), CompoundCommand::Cond(words) => {
            let words: Vec<String> = words.iter().map(Word::to_string).collect();
            assert_eq!(words, ["$x", "=~", "^a+$"]);
        });
    }

    #[test]
    fn newlines_allowed_inside() {
        assert_matches!(parse_cond("[[ -f a &&\n-r a ]]"), CompoundCommand::Cond(words) => {
            assert_eq!(words.len(), 4);
        });
    }

    #[test]
    fn unclosed_cond() {
        let mut lexer = Lexer::new("test", "[[ -n $x");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.compound_command().unwrap_err();
        assert_matches!(e.cause, SyntaxError::UnclosedCond { .. });
    }

    #[test]
    fn control_operator_rejected() {
        let mut lexer = Lexer::new("test", "[[ a; b ]]");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.compound_command().unwrap_err();
        assert_eq!(e.cause, SyntaxError::InvalidCondToken);
    }
}
