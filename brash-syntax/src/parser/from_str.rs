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

//! Implementations of `FromStr` for AST types
//!
//! These implementations parse source code with the source name
//! `"<string>"`. An error of type `Option<Error>` is `None` when the input
//! simply does not start with the syntax element in question, and
//! `Some(error)` when it is malformed.

use super::core::Parser;
use super::error::Error;
use super::lex::{Lexer, is_token_delimiter_char};
use super::parse;
use crate::syntax::{
    Assign, Command, List, Pipeline, Redir, Word,
};
use std::str::FromStr;

/// Helper for implementing `FromStr`
trait Shift {
    type Output;
    fn shift(self) -> Self::Output;
}

impl<T, E> Shift for Result<Option<T>, E> {
    type Output = Result<T, Option<E>>;
    fn shift(self) -> Result<T, Option<E>> {
        match self {
            Ok(Some(t)) => Ok(t),
            Ok(None) => Err(None),
            Err(e) => Err(Some(e)),
        }
    }
}

impl FromStr for Word {
    type Err = Error;

    /// Converts a string to a word.
    ///
    /// Characters after the first token delimiter are ignored.
    fn from_str(s: &str) -> Result<Word, Error> {
        let mut lexer = Lexer::new("<string>", s);
        lexer.word(is_token_delimiter_char)
    }
}

impl FromStr for Assign {
    type Err = Option<Error>;

    /// Converts a string to an assignment.
    ///
    /// Returns `Err(None)` if the string is not an assignment word.
    fn from_str(s: &str) -> Result<Assign, Option<Error>> {
        let word: Word = s.parse().map_err(Some)?;
        Assign::try_from(word).map_err(|_| None)
    }
}

impl FromStr for Redir {
    type Err = Option<Error>;

    /// Converts a string to a redirection.
    ///
    /// Returns `Err(None)` if the string does not start with a redirection
    /// operator. The content of a here-document redirection is read if the
    /// string contains it after a newline.
    fn from_str(s: &str) -> Result<Redir, Option<Error>> {
        let mut lexer = Lexer::new("<string>", s);
        let mut parser = Parser::new(&mut lexer);
        let redir = parser.redirection().shift()?;
        parser.newline().map_err(Some)?;
        Ok(redir)
    }
}

impl FromStr for Command {
    type Err = Option<Error>;

    /// Converts a string to a command.
    ///
    /// Returns `Err(None)` if the first token does not start a command.
    fn from_str(s: &str) -> Result<Command, Option<Error>> {
        let mut lexer = Lexer::new("<string>", s);
        let mut parser = Parser::new(&mut lexer);
        let command = parser.command().shift()?;
        parser.newline().map_err(Some)?;
        parser.ensure_no_unread_here_docs().map_err(Some)?;
        Ok(command)
    }
}

impl FromStr for Pipeline {
    type Err = Option<Error>;

    /// Converts a string to a pipeline.
    ///
    /// Returns `Err(None)` if the first token does not start a pipeline.
    fn from_str(s: &str) -> Result<Pipeline, Option<Error>> {
        let mut lexer = Lexer::new("<string>", s);
        let mut parser = Parser::new(&mut lexer);
        let pipeline = parser.pipeline().shift()?;
        parser.newline().map_err(Some)?;
        parser.ensure_no_unread_here_docs().map_err(Some)?;
        Ok(pipeline)
    }
}

impl FromStr for List {
    type Err = Error;

    /// Converts a string to a list, requiring the whole string to parse.
    ///
    /// This is equivalent to [`parse`] with the source name `"<string>"`.
    fn from_str(s: &str) -> Result<List, Error> {
        parse("<string>", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::RedirBody;
    use assert_matches::assert_matches;

    #[test]
    fn word_from_str() {
        let word: Word = r"a\ b'c'".parse().unwrap();
        assert_eq!(word.to_string(), r"a\ b'c'");
    }

    #[test]
    fn assign_from_str() {
        let assign: Assign = "x=1".parse().unwrap();
        assert_eq!(assign.name, "x");

        let e = "notanassignment".parse::<Assign>().unwrap_err();
        assert!(e.is_none());
    }

    #[test]
    fn redir_from_str_with_here_doc_content() {
        let redir: Redir = "<<EOF\nline\nEOF\n".parse().unwrap();
        assert_matches!(redir.body, RedirBody::HereDoc(here_doc) => {
            assert_eq!(here_doc.body(), "line\n");
        });
    }

    #[test]
    fn command_from_str() {
        let command: Command = "echo ok".parse().unwrap();
        assert_matches!(command, Command::Simple(_));

        let e = ")".parse::<Command>().unwrap_err();
        assert!(e.is_none());
    }

    #[test]
    fn pipeline_from_str() {
        let pipeline: Pipeline = "a | b".parse().unwrap();
        assert_eq!(pipeline.commands.len(), 2);
    }

    #[test]
    fn list_from_str_requires_full_parse() {
        let list: List = "a; b".parse().unwrap();
        assert_eq!(list.0.len(), 2);

        let e = "a )".parse::<List>().unwrap_err();
        assert_eq!(e.to_string(), "<string>:1:3: the token is redundant");
    }
}
