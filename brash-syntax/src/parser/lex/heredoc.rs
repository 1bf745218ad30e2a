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

//! Here-document content parser

use super::core::Lexer;
use crate::parser::core::Result;
use crate::parser::error::{Error, SyntaxError};
use crate::syntax::HereDoc;

const NEWLINE: char = '\n';

impl Lexer {
    /// Reads a line literally.
    ///
    /// This function recognizes no quotes, expansions, or line
    /// continuations. Starting from the current position, the line is read
    /// up to (but not including) the terminating newline.
    pub fn line(&mut self) -> String {
        self.with_line_continuation_disabled(|lexer| {
            let mut line = String::new();
            while let Some(c) = lexer.consume_char_if(|c| c != NEWLINE) {
                line.push(c);
            }
            line
        })
    }

    /// Parses the content of a here-document.
    ///
    /// This function reads lines from the current position until a line
    /// equals the delimiter of `here_doc`, and fills `here_doc.content`
    /// with the lines read. For a `<<-` here-document, leading tab
    /// characters are stripped from each line, including the delimiter
    /// line, and the stored content is the stripped text.
    pub fn here_doc_content(&mut self, here_doc: &HereDoc) -> Result<()> {
        let (delimiter, _quoted) = here_doc.delimiter_string();
        let mut content = String::new();
        loop {
            if self.peek_char().is_none() {
                let redir_op_location = here_doc.delimiter.location.clone();
                let cause = SyntaxError::UnclosedHereDocContent { redir_op_location };
                let location = self.location();
                return Err(Error { cause, location });
            }

            let line = self.line();
            let had_newline = self.skip_if(|c| c == NEWLINE);
            let line = if here_doc.remove_tabs {
                line.trim_start_matches('\t')
            } else {
                &line[..]
            };

            if line == delimiter {
                break;
            }
            if !had_newline {
                let redir_op_location = here_doc.delimiter.location.clone();
                let cause = SyntaxError::UnclosedHereDocContent { redir_op_location };
                let location = self.location();
                return Err(Error { cause, location });
            }

            content.push_str(line);
            content.push(NEWLINE);
        }

        here_doc
            .content
            .set(content)
            .expect("here-doc content must be read just once");
        Ok(())
    }
}
