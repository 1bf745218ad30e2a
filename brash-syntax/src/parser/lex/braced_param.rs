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

//! Part of the lexer that parses braced parameter expansions
//!
//! The classification of `${…}` forms follows a fixed order: the indirection
//! mark and prefix forms first, then the length form, then the parameter
//! itself and its modifier. An interior that matches none of the forms is
//! re-scanned verbatim into a [`ParamSubst::Bad`] node, which is a regular
//! AST value, not an error; only a missing closing brace is fatal.

use super::core::Lexer;
use crate::parser::core::Result;
use crate::parser::error::{Error, SyntaxError};
use crate::source::Location;
use crate::syntax::{
    CaseChange, CaseConv, CaseScope, Param, ParamSubst, PrefixModifier, Replace, Switch,
    SwitchAction, SwitchCondition, Trim, TrimLength, TrimSide, Word,
    WordUnit::Literal, is_name_char, is_name_start,
};

impl Lexer {
    /// Parses a braced parameter expansion.
    ///
    /// The `${` must have been consumed; `opening_location` points at the
    /// `$`. The closing `}` is consumed in this function.
    pub(super) fn braced_param(&mut self, opening_location: Location) -> Result<ParamSubst> {
        let start = self.index();
        if let Some(subst) = self.braced_param_inner()? {
            return Ok(subst);
        }
        self.rewind(start);
        self.bad_subst(opening_location)
    }

    /// Tries to classify the interior of a braced parameter expansion.
    ///
    /// Returns `Ok(None)` when the interior matches no recognized form, in
    /// which case the caller falls back to [`bad_subst`](Self::bad_subst).
    fn braced_param_inner(&mut self) -> Result<Option<ParamSubst>> {
        let mut indirect = false;
        if self.peek_char() == Some('!') {
            self.consume_char();
            if self.peek_char() == Some('}') {
                // `${!}` is the special parameter `!`.
                self.consume_char();
                return Ok(Some(ParamSubst::Brace {
                    indirect: false,
                    param: Param::variable("!"),
                }));
            }
            indirect = true;
        }

        if !indirect && self.peek_char() == Some('#') {
            let save = self.index();
            self.consume_char();
            if self.peek_char() == Some('}') {
                // `${#}` is the special parameter `#`.
                self.consume_char();
                return Ok(Some(ParamSubst::Brace {
                    indirect: false,
                    param: Param::variable("#"),
                }));
            }
            if let Some(param) = self.param()? {
                if self.peek_char() == Some('}') {
                    self.consume_char();
                    return Ok(Some(ParamSubst::Length(param)));
                }
            }
            // `#` is the parameter and a modifier follows.
            self.rewind(save);
        }

        let Some(param) = self.param()? else {
            return Ok(None);
        };

        if indirect && param.subscript.is_none() {
            let save = self.index();
            let modifier = match self.peek_char() {
                Some('@') => Some(PrefixModifier::At),
                Some('*') => Some(PrefixModifier::Asterisk),
                _ => None,
            };
            if let Some(modifier) = modifier {
                self.consume_char();
                if self.peek_char() == Some('}') {
                    self.consume_char();
                    return Ok(Some(ParamSubst::VarPrefix {
                        prefix: param.id,
                        modifier,
                    }));
                }
                self.rewind(save);
            }
        }

        if indirect && self.peek_char() == Some('}') {
            if let Some(subscript) = &param.subscript {
                if let [Literal('@' | '*')] = subscript.units[..] {
                    self.consume_char();
                    return Ok(Some(ParamSubst::Indices(param)));
                }
            }
        }

        match self.peek_char() {
            Some('}') => {
                self.consume_char();
                Ok(Some(ParamSubst::Brace { indirect, param }))
            }
            Some(':') => {
                self.consume_char();
                match self.peek_char() {
                    Some('+' | '-' | '=' | '?') => {
                        self.switch(indirect, param, SwitchCondition::UnsetOrEmpty)
                    }
                    _ => self.substring(indirect, param),
                }
            }
            Some('+' | '-' | '=' | '?') => self.switch(indirect, param, SwitchCondition::Unset),
            Some('#' | '%') => self.trim(indirect, param),
            Some('/') => self.replace(indirect, param),
            Some('^' | ',') => self.case_conv(indirect, param),
            _ => Ok(None),
        }
    }

    /// Parses a parameter name with an optional subscript.
    fn param(&mut self) -> Result<Option<Param>> {
        let id = match self.peek_char() {
            Some(c) if is_name_start(c) => {
                let mut id = String::new();
                while let Some(c) = self.consume_char_if(is_name_char) {
                    id.push(c);
                }
                id
            }
            Some(c) if c.is_ascii_digit() => {
                let mut id = String::new();
                while let Some(c) = self.consume_char_if(|c| c.is_ascii_digit()) {
                    id.push(c);
                }
                id
            }
            Some(c @ ('@' | '*' | '#' | '?' | '-' | '$' | '!')) => {
                self.consume_char();
                c.to_string()
            }
            _ => return Ok(None),
        };

        let subscript = if self.peek_char() == Some('[') {
            self.consume_char();
            let mut depth = 0usize;
            let word = self.word(move |c| match c {
                '[' => {
                    depth += 1;
                    false
                }
                ']' => {
                    if depth == 0 {
                        true
                    } else {
                        depth -= 1;
                        false
                    }
                }
                _ => false,
            })?;
            if !self.skip_if(|c| c == ']') {
                return Ok(None);
            }
            Some(word)
        } else {
            None
        };

        Ok(Some(Param { id, subscript }))
    }

    /// Parses a word delimited by an unquoted `}`, balancing literal braces.
    ///
    /// `extra` may declare additional delimiter characters.
    fn brace_word<F>(&mut self, extra: F) -> Result<Word>
    where
        F: Fn(char) -> bool,
    {
        let mut depth = 0usize;
        self.word(move |c| match c {
            '{' => {
                depth += 1;
                false
            }
            '}' => {
                if depth == 0 {
                    true
                } else {
                    depth -= 1;
                    false
                }
            }
            c => extra(c),
        })
    }

    /// Consumes the closing `}` of a modifier form.
    fn close_brace<T>(&mut self, subst: T) -> Result<Option<T>> {
        if self.skip_if(|c| c == '}') {
            Ok(Some(subst))
        } else {
            Ok(None)
        }
    }

    fn switch(
        &mut self,
        indirect: bool,
        param: Param,
        condition: SwitchCondition,
    ) -> Result<Option<ParamSubst>> {
        let action = match self.peek_char() {
            Some('+') => SwitchAction::Alter,
            Some('-') => SwitchAction::Default,
            Some('=') => SwitchAction::Assign,
            Some('?') => SwitchAction::Error,
            _ => return Ok(None),
        };
        self.consume_char();
        let word = self.brace_word(|_| false)?;
        self.close_brace(ParamSubst::Switch {
            indirect,
            param,
            switch: Switch {
                condition,
                action,
                word,
            },
        })
    }

    fn substring(&mut self, indirect: bool, param: Param) -> Result<Option<ParamSubst>> {
        let offset = self.brace_word(|c| c == ':')?;
        let length = if self.skip_if(|c| c == ':') {
            Some(self.brace_word(|_| false)?)
        } else {
            None
        };
        self.close_brace(ParamSubst::Substring {
            indirect,
            param,
            offset,
            length,
        })
    }

    fn trim(&mut self, indirect: bool, param: Param) -> Result<Option<ParamSubst>> {
        let side = match self.peek_char() {
            Some('#') => TrimSide::Prefix,
            Some('%') => TrimSide::Suffix,
            _ => return Ok(None),
        };
        self.consume_char();
        let length = if self.skip_if(|c| c == side_char(side)) {
            TrimLength::Longest
        } else {
            TrimLength::Shortest
        };
        let pattern = self.brace_word(|_| false)?;
        self.close_brace(ParamSubst::Trim {
            indirect,
            param,
            trim: Trim {
                side,
                length,
                pattern,
            },
        })
    }

    fn replace(&mut self, indirect: bool, param: Param) -> Result<Option<ParamSubst>> {
        self.consume_char();
        let (all, anchor) = match self.peek_char() {
            Some('/') => {
                self.consume_char();
                (true, None)
            }
            Some('#') => {
                self.consume_char();
                (false, Some(TrimSide::Prefix))
            }
            Some('%') => {
                self.consume_char();
                (false, Some(TrimSide::Suffix))
            }
            _ => (false, None),
        };
        let pattern = self.brace_word(|c| c == '/')?;
        let replacement = if self.skip_if(|c| c == '/') {
            Some(self.brace_word(|_| false)?)
        } else {
            None
        };
        self.close_brace(ParamSubst::Replace {
            indirect,
            param,
            replace: Replace {
                all,
                anchor,
                pattern,
                replacement,
            },
        })
    }

    fn case_conv(&mut self, indirect: bool, param: Param) -> Result<Option<ParamSubst>> {
        let (change, c) = match self.peek_char() {
            Some('^') => (CaseChange::Upper, '^'),
            Some(',') => (CaseChange::Lower, ','),
            _ => return Ok(None),
        };
        self.consume_char();
        let scope = if self.skip_if(|x| x == c) {
            CaseScope::All
        } else {
            CaseScope::First
        };
        let pattern = self.brace_word(|_| false)?;
        self.close_brace(ParamSubst::CaseConv {
            indirect,
            param,
            case: CaseConv {
                change,
                scope,
                pattern,
            },
        })
    }

    /// Captures an unrecognized `${…}` interior verbatim.
    ///
    /// The position must be just after the `${`. Braces nest; quoted
    /// regions are skipped so that braces inside them do not count.
    fn bad_subst(&mut self, opening_location: Location) -> Result<ParamSubst> {
        let begin = self.index();
        let mut depth = 0usize;
        loop {
            match self.peek_char() {
                Some('\\') => {
                    self.consume_char();
                    if self.peek_char_raw().is_some() {
                        self.consume_char();
                    }
                }
                Some('\'') => {
                    self.consume_char();
                    while self.skip_if(|c| c != '\'') {}
                    self.skip_if(|c| c == '\'');
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
                            None => break,
                        }
                    }
                }
                Some('{') => {
                    depth += 1;
                    self.consume_char();
                }
                Some('}') => {
                    if depth == 0 {
                        let content = self.source_string(begin..self.index());
                        self.consume_char();
                        return Ok(ParamSubst::Bad(content));
                    }
                    depth -= 1;
                    self.consume_char();
                }
                Some(_) => self.consume_char(),
                None => {
                    return Err(Error {
                        cause: SyntaxError::UnclosedParam { opening_location },
                        location: self.location(),
                    });
                }
            }
        }
    }
}

/// Returns the operator character of a trim side.
const fn side_char(side: TrimSide) -> char {
    match side {
        TrimSide::Prefix => '#',
        TrimSide::Suffix => '%',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::word::is_token_delimiter_char;
    use crate::syntax::WordUnit::{self, *};
    use assert_matches::assert_matches;

    fn parse_subst(source: &str) -> ParamSubst {
        let mut lexer = Lexer::new("test", source);
        let word = lexer.word(is_token_delimiter_char).unwrap();
        assert_eq!(lexer.peek_char(), None, "word did not consume {source:?}");
        assert_matches!(<[WordUnit; 1]>::try_from(word.units), Ok([Param(subst)]) => subst)
    }

    #[test]
    fn plain_brace() {
        assert_matches!(parse_subst("${foo}"), ParamSubst::Brace { indirect: false, param } => {
            assert_eq!(param.id, "foo");
            assert_eq!(param.subscript, None);
        });
    }

    #[test]
    fn indirect_brace() {
        assert_matches!(parse_subst("${!foo}"), ParamSubst::Brace { indirect: true, param } => {
            assert_eq!(param.id, "foo");
        });
    }

    #[test]
    fn special_params_in_braces() {
        assert_matches!(parse_subst("${!}"), ParamSubst::Brace { indirect: false, param } => {
            assert_eq!(param.id, "!");
        });
        assert_matches!(parse_subst("${#}"), ParamSubst::Brace { indirect: false, param } => {
            assert_eq!(param.id, "#");
        });
        assert_matches!(parse_subst("${10}"), ParamSubst::Brace { indirect: false, param } => {
            assert_eq!(param.id, "10");
        });
    }

    #[test]
    fn subscripts() {
        assert_matches!(parse_subst("${a[i+1]}"), ParamSubst::Brace { param, .. } => {
            assert_eq!(param.id, "a");
            assert_eq!(param.subscript.unwrap().to_string(), "i+1");
        });
        // Nested brackets balance.
        assert_matches!(parse_subst("${a[b[0]]}"), ParamSubst::Brace { param, .. } => {
            assert_eq!(param.subscript.unwrap().to_string(), "b[0]");
        });
    }

    #[test]
    fn length() {
        assert_matches!(parse_subst("${#foo}"), ParamSubst::Length(param) => {
            assert_eq!(param.id, "foo");
        });
        assert_matches!(parse_subst("${#-}"), ParamSubst::Length(param) => {
            assert_eq!(param.id, "-");
        });
        assert_matches!(parse_subst("${#a[@]}"), ParamSubst::Length(param) => {
            assert_eq!(param.id, "a");
            assert_eq!(param.subscript.unwrap().to_string(), "@");
        });
    }

    #[test]
    fn length_versus_switch_on_number_sign() {
        // `${#:-x}` is a switch on the parameter `#`.
        assert_matches!(parse_subst("${#:-x}"), ParamSubst::Switch { param, switch, .. } => {
            assert_eq!(param.id, "#");
            assert_eq!(switch.condition, SwitchCondition::UnsetOrEmpty);
            assert_eq!(switch.action, SwitchAction::Default);
            assert_eq!(switch.word.to_string(), "x");
        });
    }

    #[test]
    fn switches() {
        assert_matches!(parse_subst("${var:-default}"), ParamSubst::Switch { param, switch, .. } => {
            assert_eq!(param.id, "var");
            assert_eq!(switch.condition, SwitchCondition::UnsetOrEmpty);
            assert_eq!(switch.action, SwitchAction::Default);
            assert_eq!(switch.word.to_string(), "default");
        });
        assert_matches!(parse_subst("${var+alt}"), ParamSubst::Switch { switch, .. } => {
            assert_eq!(switch.condition, SwitchCondition::Unset);
            assert_eq!(switch.action, SwitchAction::Alter);
        });
        assert_matches!(parse_subst("${var:=x y}"), ParamSubst::Switch { switch, .. } => {
            assert_eq!(switch.action, SwitchAction::Assign);
            assert_eq!(switch.word.to_string(), "x y");
        });
    }

    #[test]
    fn switch_word_balances_braces() {
        assert_matches!(parse_subst("${v:-a{b}c}"), ParamSubst::Switch { switch, .. } => {
            assert_eq!(switch.word.to_string(), "a{b}c");
        });
    }

    #[test]
    fn substrings() {
        assert_matches!(
            parse_subst("${v:1}"),
            ParamSubst::Substring { offset, length: None, .. } => {
                assert_eq!(offset.to_string(), "1");
            }
        );
        assert_matches!(
            parse_subst("${v:1:2}"),
            ParamSubst::Substring { offset, length: Some(length), .. } => {
                assert_eq!(offset.to_string(), "1");
                assert_eq!(length.to_string(), "2");
            }
        );
        // A space keeps the negative offset from reading as a switch.
        assert_matches!(
            parse_subst("${v: -1}"),
            ParamSubst::Substring { offset, .. } => {
                assert_eq!(offset.to_string(), " -1");
            }
        );
    }

    #[test]
    fn var_prefix() {
        assert_matches!(
            parse_subst("${!prefix@}"),
            ParamSubst::VarPrefix { prefix, modifier: PrefixModifier::At } => {
                assert_eq!(prefix, "prefix");
            }
        );
        assert_matches!(
            parse_subst("${!prefix*}"),
            ParamSubst::VarPrefix { modifier: PrefixModifier::Asterisk, .. }
        );
    }

    #[test]
    fn indices() {
        assert_matches!(parse_subst("${!arr[@]}"), ParamSubst::Indices(param) => {
            assert_eq!(param.id, "arr");
            assert_eq!(param.subscript.unwrap().units, [Literal('@')]);
        });
        assert_matches!(parse_subst("${!arr[*]}"), ParamSubst::Indices(param) => {
            assert_eq!(param.subscript.unwrap().units, [Literal('*')]);
        });
    }

    #[test]
    fn indirect_with_modifier() {
        assert_matches!(parse_subst("${!var:-x}"), ParamSubst::Switch { indirect: true, .. });
    }

    #[test]
    fn trims() {
        assert_matches!(parse_subst("${v#pat}"), ParamSubst::Trim { trim, .. } => {
            assert_eq!(trim.side, TrimSide::Prefix);
            assert_eq!(trim.length, TrimLength::Shortest);
            assert_eq!(trim.pattern.to_string(), "pat");
        });
        assert_matches!(parse_subst("${v##*/}"), ParamSubst::Trim { trim, .. } => {
            assert_eq!(trim.side, TrimSide::Prefix);
            assert_eq!(trim.length, TrimLength::Longest);
            assert_eq!(trim.pattern.to_string(), "*/");
        });
        assert_matches!(parse_subst("${v%%.*}"), ParamSubst::Trim { trim, .. } => {
            assert_eq!(trim.side, TrimSide::Suffix);
            assert_eq!(trim.length, TrimLength::Longest);
        });
    }

    #[test]
    fn replaces() {
        assert_matches!(parse_subst("${v/foo/bar}"), ParamSubst::Replace { replace, .. } => {
            assert!(!replace.all);
            assert_eq!(replace.anchor, None);
            assert_eq!(replace.pattern.to_string(), "foo");
            assert_eq!(replace.replacement.unwrap().to_string(), "bar");
        });
        assert_matches!(parse_subst("${v//foo}"), ParamSubst::Replace { replace, .. } => {
            assert!(replace.all);
            assert_eq!(replace.replacement, None);
        });
        assert_matches!(parse_subst("${v/#foo/bar}"), ParamSubst::Replace { replace, .. } => {
            assert_eq!(replace.anchor, Some(TrimSide::Prefix));
        });
        assert_matches!(parse_subst("${v/%foo/}"), ParamSubst::Replace { replace, .. } => {
            assert_eq!(replace.anchor, Some(TrimSide::Suffix));
            assert_eq!(replace.replacement.unwrap().to_string(), "");
        });
        // An escaped slash does not end the pattern.
        assert_matches!(parse_subst(r"${v/\//_}"), ParamSubst::Replace { replace, .. } => {
            assert_eq!(replace.pattern.to_string(), r"\/");
            assert_eq!(replace.replacement.unwrap().to_string(), "_");
        });
    }

    #[test]
    fn case_conversions() {
        assert_matches!(parse_subst("${v^}"), ParamSubst::CaseConv { case, .. } => {
            assert_eq!(case.change, CaseChange::Upper);
            assert_eq!(case.scope, CaseScope::First);
            assert_eq!(case.pattern.to_string(), "");
        });
        assert_matches!(parse_subst("${v^^[aeiou]}"), ParamSubst::CaseConv { case, .. } => {
            assert_eq!(case.change, CaseChange::Upper);
            assert_eq!(case.scope, CaseScope::All);
            assert_eq!(case.pattern.to_string(), "[aeiou]");
        });
        assert_matches!(parse_subst("${v,,}"), ParamSubst::CaseConv { case, .. } => {
            assert_eq!(case.change, CaseChange::Lower);
            assert_eq!(case.scope, CaseScope::All);
        });
    }

    #[test]
    fn bad_substitutions() {
        assert_matches!(parse_subst("${}"), ParamSubst::Bad(content) => {
            assert_eq!(content, "");
        });
        assert_matches!(parse_subst("${foo bar}"), ParamSubst::Bad(content) => {
            assert_eq!(content, "foo bar");
        });
        assert_matches!(parse_subst("${%x}"), ParamSubst::Bad(content) => {
            assert_eq!(content, "%x");
        });
        // Braces balance inside the catch-all.
        assert_matches!(parse_subst("${a b {c} d}"), ParamSubst::Bad(content) => {
            assert_eq!(content, "a b {c} d");
        });
    }

    #[test]
    fn unclosed_param() {
        let mut lexer = Lexer::new("test", "${foo");
        let e = lexer.word(is_token_delimiter_char).unwrap_err();
        assert_matches!(e.cause, SyntaxError::UnclosedParam { opening_location } => {
            assert_eq!(opening_location.index, 0);
        });
    }
}
