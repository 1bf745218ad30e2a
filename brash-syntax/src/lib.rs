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

//! This crate parses Bash scripts into abstract syntax trees.
//!
//! The [`parser`] module turns source text into the AST types defined in
//! the [`syntax`] module, which re-emit source code through their
//! `Display` implementations. Parsing covers the Bash (≥ 4) command
//! language: quoting and expansion forms, pipelines, and-or lists,
//! compound commands including `[[ … ]]`, `((…))`, coprocesses and
//! function definitions, here-documents, and redirections. No expansion
//! or execution is performed.
//!
//! ```
//! use brash_syntax::parse;
//! let list = parse("demo.sh", "if [[ -f $1 ]]; then cat \"$1\"; fi").unwrap();
//! assert_eq!(list.to_string(), "if [[ -f $1 ]]; then cat \"$1\"; fi");
//! ```

pub mod parser;
pub mod source;
pub mod syntax;

pub use parser::parse;
