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

//! Part of the lexer that captures substitution interiors
//!
//! The interior of `$(…)`, `<(…)` and `>(…)` is captured by running the
//! full grammar parser over it and slicing the consumed source text. This
//! handles nested quotes, comments, here-documents, and `case` patterns
//! with unmatched `)` exactly, where a parenthesis-counting scan would
//! not. The interior of `$((…))` is a parenthesis-balanced raw scan that
//! skips quoted regions; its failure makes the caller re-read the input as
//! a command substitution.

use super::core::Lexer;
use crate::parser::core::{Parser, Result};
use crate::parser::error::{Error, SyntaxError};
use crate::source::Location;

impl Lexer {
    /// Captures the interior of a command or process substitution.
    ///
    /// The position must be just after the opening parenthesis. The closing
    /// `)` is consumed but not included in the returned string. `unclosed`
    /// selects the error reported when the closing parenthesis is missing.
    pub(super) fn substitution_body(
        &mut self,
        opening_location: &Location,
        unclosed: fn(Location) -> SyntaxError,
    ) -> Result<String> {
        let begin = self.index();

        let end = {
            let mut parser = Parser::new(self);
            parser.maybe_compound_list()?;
            parser.ensure_no_unread_here_docs()?;
            parser.peek_token()?.index
        };

        self.rewind(end);
        let content = self.source_string(begin..end);
        if self.skip_if(|c| c == ')') {
            Ok(content)
        } else {
            Err(Error {
                cause: unclosed(opening_location.clone()),
                location: self.location(),
            })
        }
    }

    /// Captures the interior of an arithmetic expansion.
    ///
    /// The position must be just after the second `(` of `$((`. On success
    /// the interior is returned and the closing `))` is consumed. On
    /// failure `None` is returned and the position is left wherever the
    /// scan stopped; the caller must rewind.
    pub(crate) fn arith_body(&mut self) -> Option<String> {
        let begin = self.index();
        let mut depth = 0usize;
        loop {
            match self.peek_char() {
                Some('(') => {
                    depth += 1;
                    self.consume_char();
                }
                Some(')') if depth > 0 => {
                    depth -= 1;
                    self.consume_char();
                }
                Some(')') => {
                    let end = self.index();
                    self.consume_char();
                    if self.peek_char() == Some(')') {
                        self.consume_char();
                        return Some(self.source_string(begin..end));
                    }
                    return None;
                }
                Some('\\') => {
                    self.consume_char();
                    if self.peek_char_raw().is_some() {
                        self.consume_char();
                    }
                }
                Some('\'') => {
                    self.consume_char();
                    while self.skip_if(|c| c != '\'') {}
                    if !self.skip_if(|c| c == '\'') {
                        return None;
                    }
                }
                Some('"') => {
                    self.consume_char();
                    loop {
                        match self.peek_char() {
                            Some('\\') => {
                                self.consume_char();
                                if self.peek_char_raw().is_some() {
                                    self.consume_char();
                                }
                            }
                            Some('"') => {
                                self.consume_char();
                                break;
                            }
                            Some(_) => self.consume_char(),
                            None => return None,
                        }
                    }
                }
                Some(_) => self.consume_char(),
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::word::is_token_delimiter_char;
    use crate::syntax::WordUnit::CommandSubst;
    use assert_matches::assert_matches;

    #[test]
    fn substitution_body_spans_multiple_statements() {
        let mut lexer = Lexer::new("test", "$(a; b | c && d)x");
        let word = lexer.word(is_token_delimiter_char).unwrap();
        assert_matches!(&word.units[..], [CommandSubst(content), _x] => {
            assert_eq!(content, "a; b | c && d");
        });
    }

    #[test]
    fn substitution_body_with_here_doc() {
        let mut lexer = Lexer::new("test", "$(cat <<EOF\nbody\nEOF\n)");
        let word = lexer.word(is_token_delimiter_char).unwrap();
        assert_matches!(&word.units[..], [CommandSubst(content)] => {
            assert_eq!(content, "cat <<EOF\nbody\nEOF\n");
        });
    }

    #[test]
    fn substitution_body_with_comment() {
        let mut lexer = Lexer::new("test", "$(echo a # ) not the end\n)");
        let word = lexer.word(is_token_delimiter_char).unwrap();
        assert_matches!(&word.units[..], [CommandSubst(content)] => {
            assert_eq!(content, "echo a # ) not the end\n");
        });
    }

    #[test]
    fn arith_body_counts_parentheses() {
        let mut lexer = Lexer::new("test", "(1 + 2) * 3))x");
        let content = lexer.arith_body().unwrap();
        assert_eq!(content, "(1 + 2) * 3");
        assert_eq!(lexer.peek_char(), Some('x'));
    }

    #[test]
    fn arith_body_rejects_lone_close() {
        let mut lexer = Lexer::new("test", "a); b)");
        assert_eq!(lexer.arith_body(), None);
    }

    #[test]
    fn arith_body_skips_quotes() {
        let mut lexer = Lexer::new("test", "x[')'] + \")\"))");
        let content = lexer.arith_body().unwrap();
        assert_eq!(content, "x[')'] + \")\"");
    }
}
