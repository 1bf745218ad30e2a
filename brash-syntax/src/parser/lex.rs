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

//! Lexical analyzer of the shell language
//!
//! The [`Lexer`] scans raw source text into [`Token`]s and [`Word`]s. It is
//! split into one module per lexical concern: the character-level cursor,
//! operators, keywords, word units, the `$`-forms, and here-document
//! contents.
//!
//! [`Word`]: crate::syntax::Word

mod backquote;
mod braced_param;
mod command_subst;
mod core;
mod dollar;
mod heredoc;
mod keyword;
mod op;
mod token;
mod word;

pub use self::core::{Lexer, is_blank};
pub use self::keyword::{Keyword, ParseKeywordError};
pub use self::op::{Edge, Operator, Trie, TryFromOperatorError};
pub use self::token::{Token, TokenId};
pub use self::word::is_token_delimiter_char;
