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

//! Part of the lexer that parses operators
//!
//! Operator recognition is longest-match over a static trie. The trie nodes
//! are sorted arrays of edges, so each step is a binary search and the only
//! characters consumed beyond the match are rewound.

use super::core::Lexer;
use crate::syntax::{CaseContinuation, RedirOp};
use std::fmt;
use thiserror::Error;

/// Operator token identifier
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    /// Newline
    Newline,
    /// `&`
    And,
    /// `&&`
    AndAnd,
    /// `&>`
    AndGreater,
    /// `&>>`
    AndGreaterGreater,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `;`
    Semicolon,
    /// `;;`
    SemicolonSemicolon,
    /// `;&`
    SemicolonAnd,
    /// `;;&`
    SemicolonSemicolonAnd,
    /// `<`
    Less,
    /// `<&`
    LessAnd,
    /// `<<`
    LessLess,
    /// `<<-`
    LessLessDash,
    /// `<<<`
    LessLessLess,
    /// `<>`
    LessGreater,
    /// `>`
    Greater,
    /// `>&`
    GreaterAnd,
    /// `>>`
    GreaterGreater,
    /// `>|`
    GreaterBar,
    /// `|`
    Bar,
    /// `||`
    BarBar,
    /// `|&`
    BarAnd,
}

impl Operator {
    /// Returns the literal string representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        use Operator::*;
        match self {
            Newline => "\n",
            And => "&",
            AndAnd => "&&",
            AndGreater => "&>",
            AndGreaterGreater => "&>>",
            OpenParen => "(",
            CloseParen => ")",
            Semicolon => ";",
            SemicolonSemicolon => ";;",
            SemicolonAnd => ";&",
            SemicolonSemicolonAnd => ";;&",
            Less => "<",
            LessAnd => "<&",
            LessLess => "<<",
            LessLessDash => "<<-",
            LessLessLess => "<<<",
            LessGreater => "<>",
            Greater => ">",
            GreaterAnd => ">&",
            GreaterGreater => ">>",
            GreaterBar => ">|",
            Bar => "|",
            BarBar => "||",
            BarAnd => "|&",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trie data structure that defines a set of operator tokens.
///
/// This struct represents a node of the trie. A node is a sorted array of
/// [`Edge`]s.
#[derive(Copy, Clone, Debug)]
pub struct Trie(&'static [Edge]);

/// Edge of a [`Trie`].
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    /// Character value of this edge.
    pub key: char,
    /// Final operator token that is delimited after taking this edge if
    /// there are no longer matches.
    pub value: Option<Operator>,
    /// Sub-trie containing values for keys that have the common prefix.
    pub next: Trie,
}

impl Trie {
    /// Finds an edge for the given key.
    #[must_use]
    pub fn edge(&self, key: char) -> Option<&Edge> {
        self.0
            .binary_search_by_key(&key, |edge| edge.key)
            .ok()
            .map(|i| &self.0[i])
    }
}

/// Empty trie.
const NONE: Trie = Trie(&[]);

/// Trie of the operators that start with `&`.
const AND: Trie = Trie(&[
    Edge {
        key: '&',
        value: Some(Operator::AndAnd),
        next: NONE,
    },
    Edge {
        key: '>',
        value: Some(Operator::AndGreater),
        next: AND_GREATER,
    },
]);

/// Trie of the operators that start with `&>`.
const AND_GREATER: Trie = Trie(&[Edge {
    key: '>',
    value: Some(Operator::AndGreaterGreater),
    next: NONE,
}]);

/// Trie of the operators that start with `;`.
const SEMICOLON: Trie = Trie(&[
    Edge {
        key: '&',
        value: Some(Operator::SemicolonAnd),
        next: NONE,
    },
    Edge {
        key: ';',
        value: Some(Operator::SemicolonSemicolon),
        next: SEMICOLON_SEMICOLON,
    },
]);

/// Trie of the operators that start with `;;`.
const SEMICOLON_SEMICOLON: Trie = Trie(&[Edge {
    key: '&',
    value: Some(Operator::SemicolonSemicolonAnd),
    next: NONE,
}]);

/// Trie of the operators that start with `<`.
const LESS: Trie = Trie(&[
    Edge {
        key: '&',
        value: Some(Operator::LessAnd),
        next: NONE,
    },
    Edge {
        key: '<',
        value: Some(Operator::LessLess),
        next: LESS_LESS,
    },
    Edge {
        key: '>',
        value: Some(Operator::LessGreater),
        next: NONE,
    },
]);

/// Trie of the operators that start with `<<`.
const LESS_LESS: Trie = Trie(&[
    Edge {
        key: '-',
        value: Some(Operator::LessLessDash),
        next: NONE,
    },
    Edge {
        key: '<',
        value: Some(Operator::LessLessLess),
        next: NONE,
    },
]);

/// Trie of the operators that start with `>`.
const GREATER: Trie = Trie(&[
    Edge {
        key: '&',
        value: Some(Operator::GreaterAnd),
        next: NONE,
    },
    Edge {
        key: '>',
        value: Some(Operator::GreaterGreater),
        next: NONE,
    },
    Edge {
        key: '|',
        value: Some(Operator::GreaterBar),
        next: NONE,
    },
]);

/// Trie of the operators that start with `|`.
const BAR: Trie = Trie(&[
    Edge {
        key: '&',
        value: Some(Operator::BarAnd),
        next: NONE,
    },
    Edge {
        key: '|',
        value: Some(Operator::BarBar),
        next: NONE,
    },
]);

/// Trie containing all the operators.
pub const OPERATORS: Trie = Trie(&[
    Edge {
        key: '\n',
        value: Some(Operator::Newline),
        next: NONE,
    },
    Edge {
        key: '&',
        value: Some(Operator::And),
        next: AND,
    },
    Edge {
        key: '(',
        value: Some(Operator::OpenParen),
        next: NONE,
    },
    Edge {
        key: ')',
        value: Some(Operator::CloseParen),
        next: NONE,
    },
    Edge {
        key: ';',
        value: Some(Operator::Semicolon),
        next: SEMICOLON,
    },
    Edge {
        key: '<',
        value: Some(Operator::Less),
        next: LESS,
    },
    Edge {
        key: '>',
        value: Some(Operator::Greater),
        next: GREATER,
    },
    Edge {
        key: '|',
        value: Some(Operator::Bar),
        next: BAR,
    },
]);

impl Lexer {
    /// Consumes the longest operator at the current position, if any.
    ///
    /// If no operator matches, the position is left unchanged.
    pub(super) fn take_operator(&mut self) -> Option<Operator> {
        let start = self.index();
        let mut trie = OPERATORS;
        let mut last_match: Option<(Operator, usize)> = None;
        while let Some(c) = self.peek_char() {
            let Some(edge) = trie.edge(c) else { break };
            self.consume_char();
            if let Some(op) = edge.value {
                last_match = Some((op, self.index()));
            }
            trie = edge.next;
        }
        match last_match {
            Some((op, end)) => {
                self.rewind(end);
                Some(op)
            }
            None => {
                self.rewind(start);
                None
            }
        }
    }
}

/// Error that occurs when a token identifier does not have an expected
/// value
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("unexpected operator")]
pub struct TryFromOperatorError;

impl From<RedirOp> for Operator {
    fn from(op: RedirOp) -> Operator {
        use RedirOp::*;
        match op {
            FileIn => Operator::Less,
            FileInOut => Operator::LessGreater,
            FileOut => Operator::Greater,
            FileAppend => Operator::GreaterGreater,
            FileClobber => Operator::GreaterBar,
            FdIn => Operator::LessAnd,
            FdOut => Operator::GreaterAnd,
            HereString => Operator::LessLessLess,
            OutErr => Operator::AndGreater,
            AppendOutErr => Operator::AndGreaterGreater,
        }
    }
}

impl TryFrom<Operator> for RedirOp {
    type Error = TryFromOperatorError;
    fn try_from(op: Operator) -> Result<RedirOp, TryFromOperatorError> {
        use RedirOp::*;
        match op {
            Operator::Less => Ok(FileIn),
            Operator::LessGreater => Ok(FileInOut),
            Operator::Greater => Ok(FileOut),
            Operator::GreaterGreater => Ok(FileAppend),
            Operator::GreaterBar => Ok(FileClobber),
            Operator::LessAnd => Ok(FdIn),
            Operator::GreaterAnd => Ok(FdOut),
            Operator::LessLessLess => Ok(HereString),
            Operator::AndGreater => Ok(OutErr),
            Operator::AndGreaterGreater => Ok(AppendOutErr),
            _ => Err(TryFromOperatorError),
        }
    }
}

impl From<CaseContinuation> for Operator {
    fn from(continuation: CaseContinuation) -> Operator {
        use CaseContinuation::*;
        match continuation {
            Break => Operator::SemicolonSemicolon,
            FallThrough => Operator::SemicolonAnd,
            Continue => Operator::SemicolonSemicolonAnd,
        }
    }
}

impl TryFrom<Operator> for CaseContinuation {
    type Error = TryFromOperatorError;
    fn try_from(op: Operator) -> Result<CaseContinuation, TryFromOperatorError> {
        use CaseContinuation::*;
        match op {
            Operator::SemicolonSemicolon => Ok(Break),
            Operator::SemicolonAnd => Ok(FallThrough),
            Operator::SemicolonSemicolonAnd => Ok(Continue),
            _ => Err(TryFromOperatorError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_are_sorted_for_binary_search() {
        fn check(trie: Trie) {
            for pair in trie.0.windows(2) {
                assert!(pair[0].key < pair[1].key, "{:?} >= {:?}", pair[0].key, pair[1].key);
            }
            for edge in trie.0 {
                check(edge.next);
            }
        }
        check(OPERATORS);
    }

    #[test]
    fn take_operator_longest_match() {
        let mut lexer = Lexer::new("test", ";;&x");
        assert_eq!(lexer.take_operator(), Some(Operator::SemicolonSemicolonAnd));
        assert_eq!(lexer.peek_char(), Some('x'));

        let mut lexer = Lexer::new("test", "<<-");
        assert_eq!(lexer.take_operator(), Some(Operator::LessLessDash));

        let mut lexer = Lexer::new("test", "&>>out");
        assert_eq!(lexer.take_operator(), Some(Operator::AndGreaterGreater));
        assert_eq!(lexer.peek_char(), Some('o'));
    }

    #[test]
    fn take_operator_partial_match_rewinds() {
        let mut lexer = Lexer::new("test", "<a");
        assert_eq!(lexer.take_operator(), Some(Operator::Less));
        assert_eq!(lexer.peek_char(), Some('a'));

        let mut lexer = Lexer::new("test", "word");
        assert_eq!(lexer.take_operator(), None);
        assert_eq!(lexer.peek_char(), Some('w'));
    }

    #[test]
    fn redir_op_operator_round_trip() {
        use RedirOp::*;
        for op in [
            FileIn, FileInOut, FileOut, FileAppend, FileClobber, FdIn, FdOut, HereString,
            OutErr, AppendOutErr,
        ] {
            assert_eq!(RedirOp::try_from(Operator::from(op)), Ok(op));
        }
    }
}
