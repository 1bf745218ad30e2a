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

//! Syntax parser for the shell language
//!
//! This module provides the [`parse`] function, which parses a whole script
//! into a [`List`], and the [`Parser`], which exposes one production per
//! method for parsing part of a script.
//!
//! The parser is a recursive-descent parser over the [lexer](lex::Lexer)'s
//! token stream. It is synchronous and pure: a `parse` call owns all of its
//! state and two calls on equal input produce equal results.
//!
//! ```
//! use brash_syntax::parser::parse;
//! let list = parse("example.sh", "echo hello | tr a-z A-Z").unwrap();
//! assert_eq!(list.to_string(), "echo hello | tr a-z A-Z");
//! ```

mod case;
mod command;
mod compound_command;
mod cond;
pub mod core;
mod error;
mod for_loop;
mod from_str;
mod function;
mod grouping;
mod r#if;
pub mod lex;
mod list;
mod pipeline;
mod redir;
mod simple_command;
mod while_loop;

pub use self::core::{Parser, Result};
pub use self::error::{Error, SyntaxError};

use self::lex::{Lexer, TokenId};
use crate::syntax::List;

/// Parses a whole script into a [`List`].
///
/// `source_name` is the name the input was read under, such as a file path;
/// it only appears in error messages. The entire input must parse; a
/// leftover token is reported as a [`SyntaxError::RedundantToken`].
pub fn parse(source_name: &str, input: &str) -> Result<List> {
    let mut lexer = Lexer::new(source_name, input);
    let mut parser = Parser::new(&mut lexer);

    let list = parser.maybe_compound_list()?;
    parser.ensure_no_unread_here_docs()?;

    let token = parser.peek_token()?;
    if token.id != TokenId::EndOfInput {
        let location = token.word.location.clone();
        return Err(Error {
            cause: SyntaxError::RedundantToken,
            location,
        });
    }
    Ok(list)
}
