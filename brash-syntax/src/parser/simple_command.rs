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

//! Syntax parser for simple commands
//!
//! This module also handles declaration builtin commands (`declare`,
//! `typeset`, `export`, `readonly`, `local`), whose arguments keep their
//! assignment syntax, and array assignment values.

use super::core::{Parser, Result};
use super::error::{Error, SyntaxError};
use super::lex::{Operator, TokenId};
use crate::syntax::{
    Array, ArrayElement, Assign, Command, DECL_BUILTIN_NAMES, DeclCommand, DeclItem,
    MaybeLiteral as _, Redir, Scalar, SimpleCommand, Word,
};

impl Parser<'_> {
    /// Parses the value of an array assignment.
    ///
    /// This function first consumes a `(` token, then any number of
    /// elements separated by blanks and/or newlines, and finally a `)`.
    /// If the first token is not `(`, the result is `Ok(None)`.
    pub fn array_values(&mut self) -> Result<Option<Vec<ArrayElement>>> {
        if self.peek_token()?.id != TokenId::Operator(Operator::OpenParen) {
            return Ok(None);
        }

        let opening_location = self.take_token()?.word.location;
        let mut elements = vec![];

        loop {
            match self.peek_token()?.id {
                TokenId::Operator(Operator::Newline) => {
                    self.newline()?;
                }
                TokenId::Operator(Operator::CloseParen) => {
                    self.take_token()?;
                    break;
                }
                TokenId::Token(_keyword) => {
                    let word = self.take_token()?.word;
                    elements.push(ArrayElement::from(word));
                }
                _ => {
                    let location = self.peek_token()?.word.location.clone();
                    return Err(Error {
                        cause: SyntaxError::UnclosedArrayValue { opening_location },
                        location,
                    });
                }
            }
        }

        Ok(Some(elements))
    }

    /// Converts a just-taken token into an assignment, upgrading an empty
    /// scalar value to an array when a `(` immediately follows.
    fn assign_or_word(&mut self, word: Word) -> Result<std::result::Result<Assign, Word>> {
        let mut assign = match Assign::try_from(word) {
            Ok(assign) => assign,
            Err(word) => return Ok(Err(word)),
        };

        // `a=(…)` is an array assignment only when the `(` directly follows
        // the `=` with no blank in between.
        let value_is_empty = matches!(&assign.value, Scalar(word) if word.units.is_empty());
        if value_is_empty && self.lexer().peek_char() == Some('(') {
            if let Some(elements) = self.array_values()? {
                assign.value = Array(elements);
            }
        }
        Ok(Ok(assign))
    }

    /// Parses a simple command or a declaration builtin command.
    ///
    /// If there is no valid command at the current position, this function
    /// returns `Ok(None)`.
    pub fn simple_command(&mut self) -> Result<Option<Command>> {
        let mut assigns: Vec<Assign> = vec![];
        let mut words: Vec<Word> = vec![];
        let mut redirs: Vec<Redir> = vec![];
        let mut decl: Option<(Word, Vec<DeclItem>)> = None;

        loop {
            if let Some(redir) = self.redirection()? {
                redirs.push(redir);
                continue;
            }

            match self.peek_token()?.id {
                TokenId::Token(Some(_keyword))
                    if assigns.is_empty()
                        && words.is_empty()
                        && redirs.is_empty()
                        && decl.is_none() =>
                {
                    // A reserved word cannot begin a simple command.
                    break;
                }
                TokenId::Token(_) => (),
                _ => break,
            }

            let token = self.take_token()?;

            if let Some((_name, items)) = &mut decl {
                let item = match self.assign_or_word(token.word)? {
                    Ok(assign) => DeclItem::Assign(assign),
                    Err(word) => DeclItem::Word(word),
                };
                items.push(item);
                continue;
            }

            if !words.is_empty() {
                words.push(token.word);
                continue;
            }

            match self.assign_or_word(token.word)? {
                Ok(assign) => assigns.push(assign),
                Err(word) => {
                    let is_decl_builtin = assigns.is_empty()
                        && word
                            .to_string_if_literal()
                            .is_some_and(|name| DECL_BUILTIN_NAMES.contains(&name.as_str()));
                    if is_decl_builtin {
                        decl = Some((word, vec![]));
                    } else {
                        words.push(word);
                    }
                }
            }
        }

        if let Some((name, items)) = decl {
            return Ok(Some(Command::Decl(DeclCommand {
                name,
                items,
                redirs,
            })));
        }

        let command = SimpleCommand {
            assigns,
            words,
            redirs,
        };
        Ok(if command.is_empty() {
            None
        } else {
            Some(Command::Simple(command))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lex::Lexer;
    use crate::syntax::AssignOp;
    use assert_matches::assert_matches;

    fn parse_simple(source: &str) -> Option<Command> {
        let mut lexer = Lexer::new("test", source);
        let mut parser = Parser::new(&mut lexer);
        parser.simple_command().unwrap()
    }

    #[test]
    fn words_only() {
        assert_matches!(parse_simple("echo hello world"), Some(Command::Simple(command)) => {
            assert_eq!(command.assigns, []);
            assert_eq!(command.words.len(), 3);
            assert_eq!(command.words[0].to_string(), "echo");
            assert_eq!(command.redirs, []);
        });
    }

    #[test]
    fn assignments_then_words_and_redirections() {
        assert_matches!(parse_simple("A=1 B=2 env -i >out"), Some(Command::Simple(command)) => {
            assert_eq!(command.assigns.len(), 2);
            assert_eq!(command.assigns[0].name, "A");
            assert_eq!(command.assigns[1].name, "B");
            assert_eq!(command.words.len(), 2);
            assert_eq!(command.redirs.len(), 1);
        });
    }

    #[test]
    fn assignment_after_word_is_a_word() {
        assert_matches!(parse_simple("make CC=gcc"), Some(Command::Simple(command)) => {
            assert_eq!(command.assigns, []);
            assert_eq!(command.words.len(), 2);
            assert_eq!(command.words[1].to_string(), "CC=gcc");
        });
    }

    #[test]
    fn redirections_only() {
        assert_matches!(parse_simple(">out 2>&1"), Some(Command::Simple(command)) => {
            assert_eq!(command.assigns, []);
            assert_eq!(command.words, []);
            assert_eq!(command.redirs.len(), 2);
        });
    }

    #[test]
    fn keyword_is_a_word_after_a_redirection() {
        assert_matches!(parse_simple(">x if"), Some(Command::Simple(command)) => {
            assert_eq!(command.words.len(), 1);
            assert_eq!(command.words[0].to_string(), "if");
            assert_eq!(command.redirs.len(), 1);
        });
    }

    #[test]
    fn keyword_in_command_position_stops_the_parse() {
        assert_eq!(parse_simple("if x"), None);
    }

    #[test]
    fn array_assignment() {
        assert_matches!(parse_simple("a=(1 2 [5]=three)"), Some(Command::Simple(command)) => {
            assert_matches!(&command.assigns[0].value, Array(elements) => {
                assert_eq!(elements.len(), 3);
                assert_eq!(elements[0].value.to_string(), "1");
                assert_eq!(elements[2].subscript.as_ref().unwrap().to_string(), "5");
                assert_eq!(elements[2].value.to_string(), "three");
            });
        });
    }

    #[test]
    fn array_assignment_spanning_newlines() {
        assert_matches!(parse_simple("a=(1\n2\n)"), Some(Command::Simple(command)) => {
            assert_matches!(&command.assigns[0].value, Array(elements) => {
                assert_eq!(elements.len(), 2);
            });
        });
    }

    #[test]
    fn append_assignment() {
        assert_matches!(parse_simple("a+=x"), Some(Command::Simple(command)) => {
            assert_eq!(command.assigns[0].operator, AssignOp::Append);
        });
    }

    #[test]
    fn empty_assignment_with_blank_before_paren_is_not_an_array() {
        // `a= (x)` assigns nothing; the parenthesis is left for the caller.
        let mut lexer = Lexer::new("test", "a= (x)");
        let mut parser = Parser::new(&mut lexer);
        let command = parser.simple_command().unwrap();
        assert_matches!(command, Some(Command::Simple(command)) => {
            assert_matches!(&command.assigns[0].value, Scalar(word) => {
                assert_eq!(word.units, []);
            });
        });
    }

    #[test]
    fn declaration_builtin() {
        assert_matches!(parse_simple("declare -r x=1 y"), Some(Command::Decl(decl)) => {
            assert_eq!(decl.name.to_string(), "declare");
            assert_eq!(decl.items.len(), 3);
            assert_matches!(&decl.items[0], DeclItem::Word(word) => {
                assert_eq!(word.to_string(), "-r");
            });
            assert_matches!(&decl.items[1], DeclItem::Assign(assign) => {
                assert_eq!(assign.name, "x");
            });
            assert_matches!(&decl.items[2], DeclItem::Word(word) => {
                assert_eq!(word.to_string(), "y");
            });
        });
    }

    #[test]
    fn declaration_builtin_with_array_argument() {
        assert_matches!(parse_simple("local a=(1 2)"), Some(Command::Decl(decl)) => {
            assert_matches!(&decl.items[0], DeclItem::Assign(assign) => {
                assert_matches!(&assign.value, Array(elements) => {
                    assert_eq!(elements.len(), 2);
                });
            });
        });
    }

    #[test]
    fn declaration_builtin_after_assignment_is_a_word() {
        assert_matches!(parse_simple("A=1 declare x=1"), Some(Command::Simple(command)) => {
            assert_eq!(command.assigns.len(), 1);
            assert_eq!(command.words[0].to_string(), "declare");
        });
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_simple(""), None);
        assert_eq!(parse_simple("; x"), None);
    }
}
