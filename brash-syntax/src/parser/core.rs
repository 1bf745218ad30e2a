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

//! Fundamentals for implementing the parser
//!
//! This module includes common types that are used as building blocks for
//! constructing the syntax parser.

use super::error::{Error, SyntaxError};
use super::lex::{Lexer, Operator, Token, TokenId};
use crate::syntax::HereDoc;
use std::rc::Rc;

/// Entire result of parsing
pub type Result<T> = std::result::Result<T, Error>;

/// The shell syntax parser
///
/// A parser manages a set of data used in syntax parsing: a reference to the
/// [lexer](Lexer) that provides tokens, a one-token lookahead buffer, and
/// the queue of here-documents whose contents have not been read yet.
///
/// # Parsing here-documents
///
/// Most intrinsic functions of `Parser` may return an AST containing
/// [`HereDoc`]s with an unfilled content cell. The parser creates the
/// `HereDoc` instance when it finds a here-document operator, but has not
/// read its content at that time. When the newline terminating the logical
/// line is consumed, the parser reads the contents of all pending
/// here-documents, in the order their operators appeared, and fills them in.
#[derive(Debug)]
#[must_use = "Parser must be used to parse syntax"]
pub struct Parser<'l> {
    /// Lexer that provides tokens
    lexer: &'l mut Lexer,

    /// Token to parse next
    ///
    /// This value is `None` when the next token is not yet read from the
    /// lexer.
    token: Option<Token>,

    /// Here-documents without contents
    ///
    /// A here-document is added to this list when the parser finds its
    /// operator. After consuming the next newline token, the parser reads
    /// and fills the contents, then clears this list.
    unread_here_docs: Vec<Rc<HereDoc>>,
}

impl<'l> Parser<'l> {
    /// Creates a new parser based on the given lexer.
    pub fn new(lexer: &'l mut Lexer) -> Parser<'l> {
        Parser {
            lexer,
            token: None,
            unread_here_docs: Vec::new(),
        }
    }

    /// Reads a next token if the current token is `None`.
    fn require_token(&mut self) -> Result<()> {
        if self.token.is_none() {
            self.lexer.skip_blanks_and_comment();
            self.token = Some(self.lexer.token()?);
        }
        Ok(())
    }

    /// Returns a reference to the current token, reading it from the lexer
    /// if needed.
    pub fn peek_token(&mut self) -> Result<&Token> {
        self.require_token()?;
        Ok(self.token.as_ref().unwrap())
    }

    /// Consumes and returns the current token.
    pub fn take_token(&mut self) -> Result<Token> {
        self.require_token()?;
        Ok(self.token.take().unwrap())
    }

    /// Discards the lookahead token, if any, and moves the lexer back to
    /// the given position.
    ///
    /// The next [`peek_token`](Self::peek_token) re-reads the token from
    /// that position; the lexer's memo table makes the re-scan cheap.
    pub fn rewind_to(&mut self, index: usize) {
        self.token = None;
        self.lexer.rewind(index);
    }

    /// Gives mutable access to the underlying lexer.
    ///
    /// The lookahead buffer must be empty when the lexer is used directly,
    /// or the consumed characters would be processed twice.
    pub(super) fn lexer(&mut self) -> &mut Lexer {
        debug_assert!(self.token.is_none());
        self.lexer
    }

    /// Remembers a here-document whose content is to be read later.
    pub(super) fn memorize_unread_here_doc(&mut self, here_doc: Rc<HereDoc>) {
        self.unread_here_docs.push(here_doc);
    }

    /// Consumes a newline token, then reads the contents of all pending
    /// here-documents.
    ///
    /// Returns `false` without consuming anything if the next token is not
    /// a newline.
    pub fn newline(&mut self) -> Result<bool> {
        if self.peek_token()?.id != TokenId::Operator(Operator::Newline) {
            return Ok(false);
        }
        self.token = None;

        // The lexer is now positioned just after the newline, where
        // here-document contents begin.
        let here_docs = std::mem::take(&mut self.unread_here_docs);
        for here_doc in here_docs {
            self.lexer.here_doc_content(&here_doc)?;
        }
        Ok(true)
    }

    /// Consumes as many newline tokens as possible.
    pub fn newline_list(&mut self) -> Result<()> {
        while self.newline()? {}
        Ok(())
    }

    /// Fails if a here-document operator is still waiting for its content.
    ///
    /// This is checked at the end of a parse, where no newline will come to
    /// trigger the content read.
    pub fn ensure_no_unread_here_docs(&mut self) -> Result<()> {
        match self.unread_here_docs.first() {
            None => Ok(()),
            Some(here_doc) => Err(Error {
                cause: SyntaxError::MissingHereDocContent,
                location: here_doc.delimiter.location.clone(),
            }),
        }
    }
}
