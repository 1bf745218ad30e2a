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

//! Syntax parser for redirections

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Operator, TokenId};
use crate::syntax::{HereDoc, Redir, RedirBody, RedirOp};
use std::cell::OnceCell;
use std::rc::Rc;

/// Tests if an operator token can begin a redirection.
fn is_redir_operator(op: Operator) -> bool {
    RedirOp::try_from(op).is_ok()
        || matches!(op, Operator::LessLess | Operator::LessLessDash)
}

impl Parser<'_> {
    /// Parses a redirection, if any.
    ///
    /// A here-document redirection is returned with an unfilled content
    /// cell and remembered in the parser; the content is read when the
    /// terminating newline of the current logical line is consumed.
    pub fn redirection(&mut self) -> Result<Option<Redir>> {
        let fd = match self.peek_token()?.id {
            TokenId::IoNumber(fd) => {
                self.take_token()?;
                match self.peek_token()?.id {
                    TokenId::Operator(op) if is_redir_operator(op) => Some(fd),
                    _ => {
                        // The lexer only emits an io-number before `<` or
                        // `>`, so this is unreachable in practice.
                        let location = self.peek_token()?.word.location.clone();
                        return Err(Error {
                            cause: SyntaxError::MissingRedirOperand,
                            location,
                        });
                    }
                }
            }
            TokenId::Operator(op) if is_redir_operator(op) => None,
            _ => return Ok(None),
        };

        let TokenId::Operator(op) = self.take_token()?.id else {
            unreachable!("redirection operator token expected");
        };

        let body = match op {
            Operator::LessLess | Operator::LessLessDash => {
                let remove_tabs = op == Operator::LessLessDash;
                match self.peek_token()?.id {
                    TokenId::Token(_) => (),
                    _ => {
                        let location = self.peek_token()?.word.location.clone();
                        return Err(Error {
                            cause: SyntaxError::MissingHereDocDelimiter,
                            location,
                        });
                    }
                }
                let delimiter = self.take_token()?.word;
                let here_doc = Rc::new(HereDoc {
                    delimiter,
                    remove_tabs,
                    content: OnceCell::new(),
                });
                self.memorize_unread_here_doc(Rc::clone(&here_doc));
                RedirBody::HereDoc(here_doc)
            }
            op => {
                let operator =
                    RedirOp::try_from(op).expect("is_redir_operator admitted the operator");
                match self.peek_token()?.id {
                    TokenId::Token(_) => (),
                    _ => {
                        let location = self.peek_token()?.word.location.clone();
                        return Err(Error {
                            cause: SyntaxError::MissingRedirOperand,
                            location,
                        });
                    }
                }
                let operand = self.take_token()?.word;
                RedirBody::Normal { operator, operand }
            }
        };

        Ok(Some(Redir { fd, body }))
    }

    /// Parses as many redirections as possible.
    pub fn redirections(&mut self) -> Result<Vec<Redir>> {
        let mut redirs = vec![];
        while let Some(redir) = self.redirection()? {
            redirs.push(redir);
        }
        Ok(redirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lex::Lexer;
    use crate::syntax::Fd;
    use assert_matches::assert_matches;

    fn parse_redir(source: &str) -> Option<Redir> {
        let mut lexer = Lexer::new("test", source);
        let mut parser = Parser::new(&mut lexer);
        parser.redirection().unwrap()
    }

    #[test]
    fn normal_redirections() {
        let redir = parse_redir("<input").unwrap();
        assert_eq!(redir.fd, None);
        assert_matches!(redir.body, RedirBody::Normal { operator, operand } => {
            assert_eq!(operator, RedirOp::FileIn);
            assert_eq!(operand.to_string(), "input");
        });

        let redir = parse_redir("2>&1").unwrap();
        assert_eq!(redir.fd, Some(Fd(2)));
        assert_matches!(redir.body, RedirBody::Normal { operator, operand } => {
            assert_eq!(operator, RedirOp::FdOut);
            assert_eq!(operand.to_string(), "1");
        });

        let redir = parse_redir("&>>log").unwrap();
        assert_eq!(redir.fd, None);
        assert_matches!(redir.body, RedirBody::Normal { operator, .. } => {
            assert_eq!(operator, RedirOp::AppendOutErr);
        });

        let redir = parse_redir("<<<word").unwrap();
        assert_matches!(redir.body, RedirBody::Normal { operator, operand } => {
            assert_eq!(operator, RedirOp::HereString);
            assert_eq!(operand.to_string(), "word");
        });
    }

    #[test]
    fn redirection_to_process_substitution() {
        let redir = parse_redir("> >(tee log)").unwrap();
        assert_matches!(redir.body, RedirBody::Normal { operator, operand } => {
            assert_eq!(operator, RedirOp::FileOut);
            assert_eq!(operand.to_string(), ">(tee log)");
        });
    }

    #[test]
    fn here_doc_operator_is_memorized() {
        let mut lexer = Lexer::new("test", "<<EOF\nbody\nEOF\n");
        let mut parser = Parser::new(&mut lexer);
        let redir = parser.redirection().unwrap().unwrap();
        assert_matches!(&redir.body, RedirBody::HereDoc(here_doc) => {
            assert_eq!(here_doc.delimiter.to_string(), "EOF");
            assert!(!here_doc.remove_tabs);
            assert_eq!(here_doc.content.get(), None);
        });

        assert!(parser.newline().unwrap());
        assert_matches!(&redir.body, RedirBody::HereDoc(here_doc) => {
            assert_eq!(here_doc.body(), "body\n");
        });
    }

    #[test]
    fn here_doc_missing_delimiter() {
        let mut lexer = Lexer::new("test", "<< \n");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.redirection().unwrap_err();
        assert_eq!(e.cause, SyntaxError::MissingHereDocDelimiter);
    }

    #[test]
    fn missing_operand() {
        let mut lexer = Lexer::new("test", "> ;");
        let mut parser = Parser::new(&mut lexer);
        let e = parser.redirection().unwrap_err();
        assert_eq!(e.cause, SyntaxError::MissingRedirOperand);
    }

    #[test]
    fn not_a_redirection() {
        assert_eq!(parse_redir("word"), None);
        assert_eq!(parse_redir("| x"), None);
    }
}
