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
use crate::parser::lex::Operator;
use itertools::Itertools as _;
use std::fmt;
use std::fmt::Write as _;

impl fmt::Display for SubstDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubstDirection::In => f.write_char('<'),
            SubstDirection::Out => f.write_char('>'),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id.fmt(f)?;
        if let Some(subscript) = &self.subscript {
            write!(f, "[{subscript}]")?;
        }
        Ok(())
    }
}

impl fmt::Display for SwitchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SwitchAction::*;
        let c = match self {
            Alter => '+',
            Default => '-',
            Assign => '=',
            Error => '?',
        };
        f.write_char(c)
    }
}

impl fmt::Display for SwitchCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SwitchCondition::*;
        match self {
            Unset => Ok(()),
            UnsetOrEmpty => f.write_char(':'),
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.condition, self.action, self.word)
    }
}

impl fmt::Display for TrimSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TrimSide::*;
        let c = match self {
            Prefix => '#',
            Suffix => '%',
        };
        f.write_char(c)
    }
}

impl fmt::Display for Trim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.side.fmt(f)?;
        match self.length {
            TrimLength::Shortest => (),
            TrimLength::Longest => self.side.fmt(f)?,
        }
        self.pattern.fmt(f)
    }
}

impl fmt::Display for Replace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('/')?;
        if self.all {
            f.write_char('/')?;
        } else if let Some(anchor) = self.anchor {
            anchor.fmt(f)?;
        }
        self.pattern.fmt(f)?;
        if let Some(replacement) = &self.replacement {
            write!(f, "/{replacement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CaseConv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.change {
            CaseChange::Upper => '^',
            CaseChange::Lower => ',',
        };
        f.write_char(c)?;
        if self.scope == CaseScope::All {
            f.write_char(c)?;
        }
        self.pattern.fmt(f)
    }
}

impl fmt::Display for PrefixModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixModifier::At => f.write_char('@'),
            PrefixModifier::Asterisk => f.write_char('*'),
        }
    }
}

/// Writes `!` when the expansion is indirect.
fn bang(f: &mut fmt::Formatter<'_>, indirect: bool) -> fmt::Result {
    if indirect { f.write_char('!') } else { Ok(()) }
}

impl fmt::Display for ParamSubst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamSubst::Bad(content) => write!(f, "${{{content}}}"),
            ParamSubst::Bare(param) => write!(f, "${param}"),
            ParamSubst::Brace { indirect, param } => {
                f.write_str("${")?;
                bang(f, *indirect)?;
                write!(f, "{param}}}")
            }
            ParamSubst::Switch {
                indirect,
                param,
                switch,
            } => {
                f.write_str("${")?;
                bang(f, *indirect)?;
                write!(f, "{param}{switch}}}")
            }
            ParamSubst::Substring {
                indirect,
                param,
                offset,
                length,
            } => {
                f.write_str("${")?;
                bang(f, *indirect)?;
                write!(f, "{param}:{offset}")?;
                if let Some(length) = length {
                    write!(f, ":{length}")?;
                }
                f.write_char('}')
            }
            ParamSubst::VarPrefix { prefix, modifier } => write!(f, "${{!{prefix}{modifier}}}"),
            ParamSubst::Indices(param) => write!(f, "${{!{param}}}"),
            ParamSubst::Length(param) => write!(f, "${{#{param}}}"),
            ParamSubst::Trim {
                indirect,
                param,
                trim,
            } => {
                f.write_str("${")?;
                bang(f, *indirect)?;
                write!(f, "{param}{trim}}}")
            }
            ParamSubst::Replace {
                indirect,
                param,
                replace,
            } => {
                f.write_str("${")?;
                bang(f, *indirect)?;
                write!(f, "{param}{replace}}}")
            }
            ParamSubst::CaseConv {
                indirect,
                param,
                case,
            } => {
                f.write_str("${")?;
                bang(f, *indirect)?;
                write!(f, "{param}{case}}}")
            }
        }
    }
}

impl fmt::Display for WordUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal(c) => f.write_char(*c),
            Backslashed(c) => write!(f, "\\{c}"),
            SingleQuote(s) => write!(f, "'{s}'"),
            DoubleQuote(content) => write!(f, "\"{content}\""),
            DollarSingleQuote(content) => write!(f, "$'{content}'"),
            DollarDoubleQuote(content) => write!(f, "$\"{content}\""),
            Backquote(content) => write!(f, "`{content}`"),
            Param(subst) => subst.fmt(f),
            CommandSubst(content) => write!(f, "$({content})"),
            Arith(content) => write!(f, "$(({content}))"),
            ProcessSubst { direction, content } => write!(f, "{direction}({content})"),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.units.iter().try_for_each(|unit| unit.fmt(f))
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignOp::Assign => f.write_str("="),
            AssignOp::Append => f.write_str("+="),
        }
    }
}

impl fmt::Display for ArrayElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(subscript) = &self.subscript {
            write!(f, "[{subscript}]=")?;
        }
        self.value.fmt(f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar(word) => word.fmt(f),
            Array(elements) => write!(f, "({})", elements.iter().format(" ")),
        }
    }
}

impl fmt::Display for Assign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)?;
        if let Some(subscript) = &self.subscript {
            write!(f, "[{subscript}]")?;
        }
        write!(f, "{}{}", self.operator, self.value)
    }
}

impl fmt::Display for Fd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for RedirOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Operator::from(*self).fmt(f)
    }
}

impl fmt::Display for HereDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.remove_tabs { "<<-" } else { "<<" })?;

        // This space is to disambiguate `<< --` and `<<- -`
        if let Some(Literal('-')) = self.delimiter.units.first() {
            f.write_char(' ')?;
        }

        write!(f, "{}", self.delimiter)
    }
}

impl fmt::Display for RedirBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedirBody::Normal { operator, operand } => write!(f, "{operator}{operand}"),
            RedirBody::HereDoc(h) => write!(f, "{h}"),
        }
    }
}

impl fmt::Display for Redir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fd) = self.fd {
            write!(f, "{fd}")?;
        }
        write!(f, "{}", self.body)
    }
}

impl fmt::Display for SimpleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i1 = self.assigns.iter().map(|x| x as &dyn fmt::Display);
        let i2 = self.words.iter().map(|x| x as &dyn fmt::Display);
        let i3 = self.redirs.iter().map(|x| x as &dyn fmt::Display);

        if !self.assigns.is_empty() || !self.first_word_is_keyword() {
            write!(f, "{}", i1.chain(i2).chain(i3).format(" "))
        } else {
            // We usually display the words before the redirections, but when
            // the first word is a keyword and there are no assignments, we
            // display the redirections first to make sure the simple command
            // is not mistaken for a compound command.
            write!(f, "{}", i3.chain(i2).format(" "))
        }
    }
}

impl fmt::Display for DeclItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclItem::Assign(assign) => assign.fmt(f),
            DeclItem::Word(word) => word.fmt(f),
        }
    }
}

impl fmt::Display for DeclCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = std::iter::once(&self.name as &dyn fmt::Display);
        let items = self.items.iter().map(|x| x as &dyn fmt::Display);
        let redirs = self.redirs.iter().map(|x| x as &dyn fmt::Display);
        write!(f, "{}", name.chain(items).chain(redirs).format(" "))
    }
}

impl fmt::Display for CaseContinuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Operator::from(*self).fmt(f)
    }
}

impl fmt::Display for CaseItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {}{}",
            self.patterns.iter().format(" | "),
            self.body,
            self.continuation,
        )
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormat::Default => f.write_str("time"),
            TimeFormat::Posix => f.write_str("time -p"),
        }
    }
}

/// Extracts the if command of a list that contains nothing else.
///
/// This restores the `elif` spelling of a desugared else-branch.
fn as_lone_if(list: &List) -> Option<(&List, &List, &Option<List>)> {
    let [item] = &list.0[..] else { return None };
    if item.is_async {
        return None;
    }
    let AndOrList { first, rest } = &item.and_or;
    if !rest.is_empty() || first.negation || first.time.is_some() {
        return None;
    }
    let [command] = &first.commands[..] else {
        return None;
    };
    let Command::Compound(full) = command else {
        return None;
    };
    if !full.redirs.is_empty() {
        return None;
    }
    let CompoundCommand::If {
        condition,
        body,
        else_part,
    } = &full.command
    else {
        return None;
    };
    Some((condition, body, else_part))
}

impl fmt::Display for CompoundCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CompoundCommand::*;
        match self {
            Grouping(list) => write!(f, "{{ {list:#} }}"),
            Subshell(list) => write!(f, "({list})"),
            For { name, values, body } => {
                write!(f, "for {name}")?;
                write_word_list(f, values)?;
                write!(f, " do {body:#} done")
            }
            ArithFor { expr, body } => write!(f, "for (({expr})); do {body:#} done"),
            Select { name, values, body } => {
                write!(f, "select {name}")?;
                write_word_list(f, values)?;
                write!(f, " do {body:#} done")
            }
            While { condition, body } => write!(f, "while {condition:#} do {body:#} done"),
            Until { condition, body } => write!(f, "until {condition:#} do {body:#} done"),
            If {
                condition,
                body,
                else_part,
            } => {
                write!(f, "if {condition:#} then {body:#} ")?;
                let mut else_part = else_part;
                loop {
                    match else_part {
                        None => break,
                        Some(list) => match as_lone_if(list) {
                            Some((condition, body, nested_else)) => {
                                write!(f, "elif {condition:#} then {body:#} ")?;
                                else_part = nested_else;
                            }
                            None => {
                                write!(f, "else {list:#} ")?;
                                break;
                            }
                        },
                    }
                }
                f.write_str("fi")
            }
            Case { subject, items } => {
                write!(f, "case {subject} in ")?;
                for item in items {
                    write!(f, "{item} ")?;
                }
                f.write_str("esac")
            }
            Cond(words) => write!(f, "[[ {} ]]", words.iter().format(" ")),
            Arith(expr) => write!(f, "(({expr}))"),
            Coproc { name, command } => {
                f.write_str("coproc ")?;
                if let Some(name) = name {
                    write!(f, "{name} ")?;
                }
                command.fmt(f)
            }
        }
    }
}

/// Writes the `in …;` part of a for or select loop.
fn write_word_list(f: &mut fmt::Formatter<'_>, values: &Option<Vec<Word>>) -> fmt::Result {
    if let Some(values) = values {
        if values.is_empty() {
            f.write_char(';')?;
        } else {
            f.write_str(" in")?;
            for value in values {
                write!(f, " {value}")?;
            }
            f.write_char(';')?;
        }
    }
    Ok(())
}

impl fmt::Display for FullCompoundCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FullCompoundCommand { command, redirs } = self;
        write!(f, "{command}")?;
        redirs.iter().try_for_each(|redir| write!(f, " {redir}"))
    }
}

impl fmt::Display for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_keyword {
            f.write_str("function ")?;
        }
        self.name.fmt(f)?;
        if self.parens {
            f.write_str("()")?;
        }
        write!(f, " {}", self.body)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Simple(c) => c.fmt(f),
            Command::Decl(c) => c.fmt(f),
            Command::Compound(c) => c.fmt(f),
            Command::Function(c) => c.fmt(f),
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(time) = self.time {
            write!(f, "{time} ")?;
        }
        if self.negation {
            write!(f, "! ")?;
        }
        write!(f, "{}", self.commands.iter().format(" | "))
    }
}

impl fmt::Display for AndOr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AndOr::AndThen => write!(f, "&&"),
            AndOr::OrElse => write!(f, "||"),
        }
    }
}

impl fmt::Display for AndOrList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        self.rest
            .iter()
            .try_for_each(|(c, p)| write!(f, " {c} {p}"))
    }
}

/// Allows conversion from Item to String.
///
/// By default, the `;` terminator is omitted from the formatted string.
/// When the alternate flag is specified as in `{:#}`, the result is always
/// terminated by either `;` or `&`.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.and_or)?;
        if self.is_async {
            write!(f, "&")
        } else if f.alternate() {
            write!(f, ";")
        } else {
            Ok(())
        }
    }
}

/// Allows conversion from List to String.
///
/// By default, the last `;` terminator is omitted from the formatted string.
/// When the alternate flag is specified as in `{:#}`, the result is always
/// terminated by either `;` or `&`.
impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((last, init)) = self.0.split_last() else {
            return Ok(());
        };
        for item in init {
            write!(f, "{item:#} ")?;
        }
        if f.alternate() {
            write!(f, "{last:#}")
        } else {
            write!(f, "{last}")
        }
    }
}
