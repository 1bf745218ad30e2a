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

//! Token classification and the token-level entry point of the lexer

use super::core::Lexer;
use super::keyword::Keyword;
use super::op::Operator;
use super::word::is_token_delimiter_char;
use crate::parser::core::Result;
use crate::parser::error::{Error, SyntaxError};
use crate::syntax::{Fd, MaybeLiteral as _, Word, WordUnit::Literal};
use std::fmt;

/// Token identifier, or classification of tokens
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenId {
    /// Ordinary word token
    ///
    /// If this token _looks like_ a reserved word, this variant has some
    /// associated `Keyword` that describes the word. However, it depends on
    /// context whether a token is actually regarded as a reserved word or
    /// just as an ordinary word. You must ensure that you're in an
    /// applicable context when examining the `Keyword` value.
    Token(Option<Keyword>),
    /// Operator
    Operator(Operator),
    /// Digits immediately preceding a redirection operator
    IoNumber(Fd),
    /// Imaginary token identifier for the end of input
    EndOfInput,
}

/// Result of lexical analysis produced by the [`Lexer`]
#[derive(Clone, Debug)]
pub struct Token {
    /// Content of the token
    ///
    /// An operator token also has a word value, made of the literal
    /// characters of the operator.
    pub word: Word,
    /// Token identifier
    pub id: TokenId,
    /// Position of the first character of the word
    pub index: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

impl Lexer {
    /// Parses a token.
    ///
    /// The caller must have skipped blanks and comments. Token scans are
    /// memoized by start position, so re-scanning after a parser rewind is
    /// amortized-linear.
    pub fn token(&mut self) -> Result<Token> {
        self.peek_char();
        let index = self.index();

        if let Some((token, end)) = self.token_memo.get(&index) {
            let token = token.clone();
            let end = *end;
            self.jump(end);
            return Ok(token);
        }

        let token = self.token_uncached(index)?;
        self.token_memo.insert(index, (token.clone(), self.index()));
        Ok(token)
    }

    fn token_uncached(&mut self, index: usize) -> Result<Token> {
        let location = self.location_at(index);

        let Some(c) = self.peek_char() else {
            return Ok(Token {
                word: Word {
                    units: vec![],
                    location,
                },
                id: TokenId::EndOfInput,
                index,
            });
        };

        if let Some(token) = self.io_number(index)? {
            return Ok(token);
        }

        // `<(` and `>(` begin a word, not an operator.
        let is_process_subst = (c == '<' || c == '>') && {
            self.consume_char();
            let second = self.peek_char();
            self.rewind(index);
            second == Some('(')
        };

        if !is_process_subst {
            if let Some(op) = self.take_operator() {
                let word = Word {
                    units: op.as_str().chars().map(Literal).collect(),
                    location,
                };
                return Ok(Token {
                    word,
                    id: TokenId::Operator(op),
                    index,
                });
            }
        }

        let word = self.word(is_token_delimiter_char)?;
        let keyword = word
            .to_string_if_literal()
            .and_then(|s| s.parse::<Keyword>().ok());
        Ok(Token {
            word,
            id: TokenId::Token(keyword),
            index,
        })
    }

    /// Recognizes an IO_NUMBER token: digits immediately followed by `<`
    /// or `>` (but not by `<(` or `>(`, which extend the word as a process
    /// substitution).
    fn io_number(&mut self, index: usize) -> Result<Option<Token>> {
        if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            return Ok(None);
        }

        let mut digits = String::new();
        while let Some(c) = self.consume_char_if(|c| c.is_ascii_digit()) {
            digits.push(c);
        }
        let followed_by_redir = match self.peek_char() {
            Some('<' | '>') => {
                let save = self.index();
                self.consume_char();
                let second = self.peek_char();
                self.rewind(save);
                second != Some('(')
            }
            _ => false,
        };
        if !followed_by_redir {
            self.rewind(index);
            return Ok(None);
        }

        let Ok(fd) = digits.parse::<i32>() else {
            return Err(Error {
                cause: SyntaxError::FdOutOfRange,
                location: self.location_at(index),
            });
        };
        let word = Word {
            units: digits.chars().map(Literal).collect(),
            location: self.location_at(index),
        };
        Ok(Some(Token {
            word,
            id: TokenId::IoNumber(Fd(fd)),
            index,
        }))
    }
}
