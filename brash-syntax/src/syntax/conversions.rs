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

use super::*;
use std::fmt;
use thiserror::Error;

/// Result of [`Unquote::write_unquoted`]
///
/// If there is some quotes to be removed, the result will be `Ok(true)`. If
/// no quotes, `Ok(false)`. On error, `Err(Error)`.
type UnquoteResult = Result<bool, fmt::Error>;

/// Removing quotes from syntax without performing expansion
///
/// Characters and escapes contribute their character value, quoted regions
/// contribute their unquoted content, and substitutions re-emit verbatim.
/// This is how the parser derives the effective delimiter of a
/// here-document from its possibly-quoted delimiter token.
pub trait Unquote {
    /// Converts `self` to a string with all quotes removed and writes to `w`.
    fn write_unquoted<W: fmt::Write>(&self, w: &mut W) -> UnquoteResult;

    /// Converts `self` to a string with all quotes removed.
    ///
    /// Returns a tuple of a string and a bool. The string is an unquoted
    /// version of `self`. The bool tells whether there is any quotes
    /// contained in `self`.
    fn unquote(&self) -> (String, bool) {
        let mut unquoted = String::new();
        let is_quoted = self
            .write_unquoted(&mut unquoted)
            .expect("`write_unquoted` should not fail");
        (unquoted, is_quoted)
    }
}

/// Error indicating that a syntax element is not a literal
///
/// This error value is returned by [`MaybeLiteral::extend_literal`] when the
/// syntax element is not a literal.
#[derive(Debug, Error)]
#[error("not a literal")]
pub struct NotLiteral;

/// Possibly literal syntax element
///
/// A syntax element is _literal_ if it is not quoted and does not contain
/// any expansions. Such an element may be considered as a constant string,
/// and is a candidate for a keyword or identifier.
///
/// ```
/// # use brash_syntax::syntax::MaybeLiteral;
/// # use brash_syntax::syntax::Word;
/// let word: Word = "foo".parse().unwrap();
/// assert_eq!(word.to_string_if_literal().unwrap(), "foo");
///
/// let word: Word = r"\foo".parse().unwrap();
/// assert_eq!(word.to_string_if_literal(), None);
/// ```
pub trait MaybeLiteral {
    /// Appends the literal representation of `self` to an extendable object.
    ///
    /// If `self` is literal, the literal representation is appended to
    /// `result` and `Ok(())` is returned. Otherwise, `Err(NotLiteral)` is
    /// returned and `result` may contain some characters that have been
    /// appended.
    fn extend_literal<T: Extend<char>>(&self, result: &mut T) -> Result<(), NotLiteral>;

    /// Checks if `self` is literal and, if so, converts to a string.
    fn to_string_if_literal(&self) -> Option<String> {
        let mut result = String::new();
        self.extend_literal(&mut result).ok()?;
        Some(result)
    }
}

impl<T: Unquote> Unquote for [T] {
    fn write_unquoted<W: fmt::Write>(&self, w: &mut W) -> UnquoteResult {
        self.iter()
            .try_fold(false, |quoted, item| Ok(quoted | item.write_unquoted(w)?))
    }
}

impl<T: MaybeLiteral> MaybeLiteral for [T] {
    fn extend_literal<R: Extend<char>>(&self, result: &mut R) -> Result<(), NotLiteral> {
        self.iter().try_for_each(|item| item.extend_literal(result))
    }
}

impl Unquote for WordUnit {
    fn write_unquoted<W: fmt::Write>(&self, w: &mut W) -> UnquoteResult {
        match self {
            Literal(c) => {
                w.write_char(*c)?;
                Ok(false)
            }
            Backslashed(c) => {
                w.write_char(*c)?;
                Ok(true)
            }
            SingleQuote(s) => {
                w.write_str(s)?;
                Ok(true)
            }
            DoubleQuote(inner)
            | DollarSingleQuote(inner)
            | DollarDoubleQuote(inner) => {
                inner.units.write_unquoted(w)?;
                Ok(true)
            }
            Backquote(_) | Param(_) | CommandSubst(_) | Arith(_) | ProcessSubst { .. } => {
                // Substitutions re-emit verbatim; they contain no quoting
                // at this level.
                write!(w, "{self}")?;
                Ok(false)
            }
        }
    }
}

impl Unquote for Word {
    fn write_unquoted<W: fmt::Write>(&self, w: &mut W) -> UnquoteResult {
        self.units.write_unquoted(w)
    }
}

impl MaybeLiteral for WordUnit {
    fn extend_literal<T: Extend<char>>(&self, result: &mut T) -> Result<(), NotLiteral> {
        if let Literal(c) = self {
            result.extend(std::iter::once(*c));
            Ok(())
        } else {
            Err(NotLiteral)
        }
    }
}

impl MaybeLiteral for Word {
    fn extend_literal<T: Extend<char>>(&self, result: &mut T) -> Result<(), NotLiteral> {
        self.units.extend_literal(result)
    }
}

/// Tests if a character can start a variable name.
#[must_use]
pub(crate) fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Tests if a character can continue a variable name.
#[must_use]
pub(crate) fn is_name_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Finds the unit index just past a bracketed subscript starting at `start`.
///
/// `units[start]` must be `Literal('[')`. Only literal brackets count
/// towards nesting; quoted brackets and brackets inside substitutions are
/// opaque. Returns `None` if there is no matching `]`.
fn subscript_end(units: &[WordUnit], start: usize) -> Option<usize> {
    debug_assert_eq!(units[start], Literal('['));
    let mut depth = 0usize;
    for (offset, unit) in units[start..].iter().enumerate() {
        match unit {
            Literal('[') => depth += 1,
            Literal(']') => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset + 1);
                }
            }
            _ => (),
        }
    }
    None
}

/// Converts a word to an assignment if it has assignment syntax.
///
/// A word is an assignment if it starts with a variable name, optionally
/// followed by a bracketed subscript, followed by `=` or `+=`. The value is
/// always scalar here; the parser upgrades it to an array when the word is
/// immediately followed by `(`.
///
/// On failure, the original word is returned intact.
impl TryFrom<Word> for Assign {
    type Error = Word;
    fn try_from(word: Word) -> Result<Assign, Word> {
        let units = &word.units;

        let mut name = String::new();
        let mut i = 0;
        while let Some(Literal(c)) = units.get(i) {
            let ok = if i == 0 {
                is_name_start(*c)
            } else {
                is_name_char(*c)
            };
            if !ok {
                break;
            }
            name.push(*c);
            i += 1;
        }
        if name.is_empty() {
            return Err(word);
        }

        let subscript_range = if units.get(i) == Some(&Literal('[')) {
            match subscript_end(units, i) {
                Some(end) => {
                    let range = i + 1..end - 1;
                    i = end;
                    Some(range)
                }
                None => return Err(word),
            }
        } else {
            None
        };

        let operator = match units.get(i) {
            Some(Literal('=')) => {
                i += 1;
                AssignOp::Assign
            }
            Some(Literal('+')) if units.get(i + 1) == Some(&Literal('=')) => {
                i += 2;
                AssignOp::Append
            }
            _ => return Err(word),
        };

        let location = word.location;
        let mut units = word.units;
        let value_units = units.split_off(i);
        let subscript = subscript_range.map(|range| Word {
            units: units[range].to_vec(),
            location: location.clone(),
        });
        let value = Scalar(Word {
            units: value_units,
            location: location.clone(),
        });
        Ok(Assign {
            name,
            subscript,
            operator,
            value,
            location,
        })
    }
}

/// Converts a word to an array element.
///
/// A word of the form `[subscript]=value` becomes a subscripted element;
/// any other word becomes a plain element.
impl From<Word> for ArrayElement {
    fn from(word: Word) -> ArrayElement {
        if word.units.first() == Some(&Literal('[')) {
            if let Some(end) = subscript_end(&word.units, 0) {
                if word.units.get(end) == Some(&Literal('=')) {
                    let location = word.location;
                    let mut units = word.units;
                    let value_units = units.split_off(end + 1);
                    let subscript = Word {
                        units: units[1..end - 1].to_vec(),
                        location: location.clone(),
                    };
                    let value = Word {
                        units: value_units,
                        location,
                    };
                    return ArrayElement {
                        subscript: Some(subscript),
                        value,
                    };
                }
            }
        }
        ArrayElement {
            subscript: None,
            value: word,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn dummy_word(units: Vec<WordUnit>) -> Word {
        Word {
            units,
            location: Location::dummy(""),
        }
    }

    #[test]
    fn unquote_literals_and_escapes() {
        let word = dummy_word(vec![Literal('a'), Backslashed('b'), Literal('c')]);
        assert_eq!(word.unquote(), ("abc".to_string(), true));

        let word = dummy_word(vec![Literal('a'), Literal('b')]);
        assert_eq!(word.unquote(), ("ab".to_string(), false));
    }

    #[test]
    fn unquote_quoted_regions() {
        let inner = dummy_word(vec![Literal('x'), Literal('y')]);
        let word = dummy_word(vec![SingleQuote("a b".to_string()), DoubleQuote(inner)]);
        assert_eq!(word.unquote(), ("a bxy".to_string(), true));
    }

    #[test]
    fn unquote_keeps_substitutions_verbatim() {
        let word = dummy_word(vec![CommandSubst("date".to_string())]);
        assert_eq!(word.unquote(), ("$(date)".to_string(), false));
    }

    #[test]
    fn to_string_if_literal() {
        let word = dummy_word(vec![Literal('f'), Literal('o'), Literal('o')]);
        assert_eq!(word.to_string_if_literal().unwrap(), "foo");

        let word = dummy_word(vec![Literal('f'), Backslashed('o')]);
        assert_eq!(word.to_string_if_literal(), None);
    }

    #[test]
    fn assign_try_from_word_scalar() {
        let word: Word = "foo=bar".parse().unwrap();
        let assign = Assign::try_from(word).unwrap();
        assert_eq!(assign.name, "foo");
        assert_eq!(assign.subscript, None);
        assert_eq!(assign.operator, AssignOp::Assign);
        assert_matches!(assign.value, Scalar(value) => {
            assert_eq!(value.to_string(), "bar");
        });
    }

    #[test]
    fn assign_try_from_word_append() {
        let word: Word = "foo+=bar".parse().unwrap();
        let assign = Assign::try_from(word).unwrap();
        assert_eq!(assign.name, "foo");
        assert_eq!(assign.operator, AssignOp::Append);
    }

    #[test]
    fn assign_try_from_word_subscript() {
        let word: Word = "a[i+1]=x".parse().unwrap();
        let assign = Assign::try_from(word).unwrap();
        assert_eq!(assign.name, "a");
        assert_eq!(assign.subscript.unwrap().to_string(), "i+1");
        assert_matches!(assign.value, Scalar(value) => {
            assert_eq!(value.to_string(), "x");
        });
    }

    #[test]
    fn assign_try_from_word_failures() {
        let word: Word = "foo".parse().unwrap();
        assert_eq!(Assign::try_from(word).unwrap_err().to_string(), "foo");

        let word: Word = "=bar".parse().unwrap();
        assert_eq!(Assign::try_from(word).unwrap_err().to_string(), "=bar");

        let word: Word = "1x=y".parse().unwrap();
        assert_eq!(Assign::try_from(word).unwrap_err().to_string(), "1x=y");

        // A quoted equals sign is not an assignment operator.
        let word: Word = r"foo\=bar".parse().unwrap();
        assert_matches!(Assign::try_from(word), Err(_));
    }

    #[test]
    fn array_element_from_word() {
        let word: Word = "[2]=x".parse().unwrap();
        let element = ArrayElement::from(word);
        assert_eq!(element.subscript.unwrap().to_string(), "2");
        assert_eq!(element.value.to_string(), "x");

        let word: Word = "plain".parse().unwrap();
        let element = ArrayElement::from(word);
        assert_eq!(element.subscript, None);
        assert_eq!(element.value.to_string(), "plain");
    }
}
