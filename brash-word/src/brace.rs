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

//! Brace expansion
//!
//! Only unquoted literal braces take part in expansion; quoted regions and
//! substitutions are opaque. A brace expression is either an alternation
//! with at least one top-level comma (`{a,b}`), or a sequence
//! (`{x..y[..incr]}`) whose endpoints are signed integers or single
//! letters. Anything else stays literal, though braces nested inside it
//! still expand, so `{a{1,2}}` becomes `{a1}` and `{a2}`.

use brash_syntax::syntax::{Word, WordUnit, WordUnit::Literal};
use itertools::Itertools as _;

/// Performs brace expansion on a word.
///
/// The result is never empty; a word with no brace expression expands to a
/// one-element vector containing a clone of the input. Expanded words share
/// the location of the input word.
#[must_use]
pub fn brace_expand(word: &Word) -> Vec<Word> {
    expand_units(&word.units)
        .into_iter()
        .map(|units| Word {
            units,
            location: word.location.clone(),
        })
        .collect()
}

/// Result of recognizing one brace expression
struct BraceExpr {
    /// Expanded alternatives for the expression itself
    alternatives: Vec<Vec<WordUnit>>,
    /// Unit index just past the closing `}`
    end: usize,
}

fn expand_units(units: &[WordUnit]) -> Vec<Vec<WordUnit>> {
    for i in 0..units.len() {
        if units[i] != Literal('{') {
            continue;
        }
        let Some(expr) = parse_brace_expr(units, i) else {
            continue;
        };

        let prefix = &units[..i];
        let suffixes = expand_units(&units[expr.end..]);
        return expr
            .alternatives
            .iter()
            .cartesian_product(&suffixes)
            .map(|(alternative, suffix)| {
                let mut result =
                    Vec::with_capacity(prefix.len() + alternative.len() + suffix.len());
                result.extend_from_slice(prefix);
                result.extend_from_slice(alternative);
                result.extend_from_slice(suffix);
                result
            })
            .collect();
    }
    vec![units.to_vec()]
}

/// Recognizes the brace expression whose `{` is at `units[start]`.
fn parse_brace_expr(units: &[WordUnit], start: usize) -> Option<BraceExpr> {
    let mut depth = 0usize;
    let mut commas = vec![];
    let mut close = None;
    for (i, unit) in units.iter().enumerate().skip(start) {
        match unit {
            Literal('{') => depth += 1,
            Literal('}') => {
                depth -= 1;
                if depth == 0 {
                    close = Some(i);
                    break;
                }
            }
            Literal(',') if depth == 1 => commas.push(i),
            _ => (),
        }
    }
    let close = close?;
    let content = &units[start + 1..close];
    let end = close + 1;

    if !commas.is_empty() {
        // Alternation: split at the top-level commas and expand each part.
        let mut alternatives = vec![];
        let mut part_start = start + 1;
        for comma in commas.iter().copied().chain(std::iter::once(close)) {
            alternatives.extend(expand_units(&units[part_start..comma]));
            part_start = comma + 1;
        }
        return Some(BraceExpr { alternatives, end });
    }

    // Sequence: the content must be all literal characters.
    let content: String = content
        .iter()
        .map(|unit| match unit {
            Literal(c) => Some(*c),
            _ => None,
        })
        .collect::<Option<String>>()?;
    let alternatives = expand_sequence(&content)?
        .into_iter()
        .map(|s| s.chars().map(Literal).collect())
        .collect();
    Some(BraceExpr { alternatives, end })
}

/// Expands a sequence expression `x..y` or `x..y..incr`.
fn expand_sequence(content: &str) -> Option<Vec<String>> {
    let segments: Vec<&str> = content.split("..").collect();
    let (x, y, incr) = match segments[..] {
        [x, y] => (x, y, None),
        [x, y, incr] => (x, y, Some(incr)),
        _ => return None,
    };
    if x.is_empty() || y.is_empty() {
        return None;
    }

    // The increment contributes its magnitude only; the direction follows
    // the endpoints, and zero steps like one.
    let step = match incr {
        Some(incr) => incr
            .parse::<i64>()
            .ok()?
            .unsigned_abs()
            .clamp(1, i64::MAX as u64),
        None => 1,
    };

    if let (Ok(from), Ok(to)) = (x.parse::<i64>(), y.parse::<i64>()) {
        let width = if is_zero_padded(x) || is_zero_padded(y) {
            digit_width(x).max(digit_width(y))
        } else {
            0
        };
        return Some(
            numeric_sequence(from, to, step)
                .map(|v| format_padded(v, width))
                .collect(),
        );
    }

    let from = single_letter(x)?;
    let to = single_letter(y)?;
    Some(
        numeric_sequence(from as i64, to as i64, step)
            .map(|v| {
                char::from_u32(v as u32)
                    .expect("sequence endpoints are ASCII")
                    .to_string()
            })
            .collect(),
    )
}

/// Iterates from `from` towards `to`, inclusive, stopping before
/// overshooting.
fn numeric_sequence(from: i64, to: i64, step: u64) -> impl Iterator<Item = i64> {
    let ascending = from <= to;
    let step = step as i64;
    let mut next = Some(from);
    std::iter::from_fn(move || {
        let value = next?;
        next = if ascending {
            value.checked_add(step).filter(|v| *v <= to)
        } else {
            value.checked_sub(step).filter(|v| *v >= to)
        };
        Some(value)
    })
}

/// Tests if a sequence endpoint lexeme requests zero padding.
fn is_zero_padded(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    digits.len() >= 2 && digits.starts_with('0')
}

/// Counts the digits of a sequence endpoint lexeme, excluding the sign.
fn digit_width(s: &str) -> usize {
    s.strip_prefix('-').unwrap_or(s).len()
}

/// Formats a sequence value, zero-padding its digits to `width`.
fn format_padded(value: i64, width: usize) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{:0width$}", sign, value.unsigned_abs())
}

fn single_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next().filter(|c| c.is_ascii_alphabetic())?;
    chars.next().is_none().then_some(c)
}
