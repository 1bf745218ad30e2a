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

//! Shell command language syntax
//!
//! This module contains types that represent abstract syntax trees (ASTs) of
//! the Bash command language.
//!
//! ## Syntactic elements
//!
//! The AST type that represents a whole script is [`List`], which is a vector
//! of [`Item`]s. An `Item` is a possibly asynchronous [`AndOrList`], which is
//! a sequence of conditionally executed [`Pipeline`]s. A `Pipeline` is a
//! sequence of [`Command`]s separated by `|`.
//!
//! There are several types of `Command`s: [`SimpleCommand`], [`DeclCommand`]
//! (a declaration builtin such as `declare` or `export` whose arguments may
//! themselves be assignments), [`CompoundCommand`] with its many variants,
//! and [`FunctionDefinition`].
//!
//! ## Lexical elements
//!
//! Tokens that make up commands may contain quotations and expansions. A
//! [`Word`], a sequence of [`WordUnit`]s, represents such a token before any
//! expansion is performed. Quoted regions and substitutions each occupy one
//! unit, so a word re-emits losslessly through its
//! [`Display`](std::fmt::Display) implementation.
//!
//! ## Parsing and displaying
//!
//! Many AST types implement the [`FromStr`](std::str::FromStr) trait, which
//! means you can get an AST by calling `parse` on a `&str`. To parse a whole
//! script with a meaningful source name, use
//! [`parse`](crate::parser::parse).
//!
//! Most AST types also support the [`Display`](std::fmt::Display) trait,
//! which converts a node back to source code. The `Display` implementations
//! always produce single-line source code with here-document contents
//! omitted; the captured content of a here-document is available through
//! [`HereDoc::body`].

use crate::parser::lex::Keyword;
use crate::source::Location;
use std::cell::OnceCell;
use std::rc::Rc;

/// Direction of a process substitution
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SubstDirection {
    /// `<(…)` (substitution readable by the command)
    In,
    /// `>(…)` (substitution writable by the command)
    Out,
}

/// Parameter under expansion
///
/// A parameter is the identifier part of a parameter expansion, optionally
/// carrying an array subscript as in `${array[index]}`. The identifier may be
/// a name (`foo`), a positional parameter (`12`), or a special parameter
/// (`@`, `*`, `#`, `?`, `-`, `$`, `!`, `0`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Param {
    /// Literal identifier as it appears in the source code
    pub id: String,
    /// Array subscript, if any
    ///
    /// The subscript is the word between `[` and `]`, which may itself
    /// contain expansions. Bare expansions (`$foo`) never have a subscript.
    pub subscript: Option<Word>,
}

impl Param {
    /// Constructs a subscript-less `Param` from an identifier.
    #[must_use]
    pub fn variable<I: Into<String>>(id: I) -> Param {
        Param {
            id: id.into(),
            subscript: None,
        }
    }
}

/// Flag that specifies how the value is substituted in a [switch](Switch)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwitchAction {
    /// Alter an existing value, if any. (`+`)
    Alter,
    /// Substitute a missing value with a default. (`-`)
    Default,
    /// Assign a default to the variable if the value is missing. (`=`)
    Assign,
    /// Error out if the value is missing. (`?`)
    Error,
}

/// Condition that triggers a [switch](Switch)
///
/// In the lexical grammar, a switch condition is an optional colon that
/// precedes a switch action.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwitchCondition {
    /// Without a colon, the switch is triggered if the parameter is unset.
    Unset,
    /// With a colon, the switch is triggered if the parameter is unset or
    /// empty.
    UnsetOrEmpty,
}

/// Parameter expansion modifier that conditionally substitutes the value
/// being expanded
///
/// Examples of switches include `+foo`, `:-bar` and `:=baz`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Switch {
    /// Condition that determines whether the value is substituted or not
    pub condition: SwitchCondition,
    /// How the value is substituted
    pub action: SwitchAction,
    /// Word that substitutes the parameter value
    pub word: Word,
}

/// Flag that specifies which side of the expanded value is removed in a
/// [trim](Trim)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrimSide {
    /// Beginning of the value (`#`)
    Prefix,
    /// End of the value (`%`)
    Suffix,
}

/// Flag that specifies pattern matching strategy in a [trim](Trim)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrimLength {
    /// Match as small number of characters as possible.
    Shortest,
    /// Match as large number of characters as possible.
    Longest,
}

/// Parameter expansion modifier that removes the beginning or end of the
/// value being expanded
///
/// Examples of trims include `#foo`, `##bar` and `%%baz*`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Trim {
    /// Which side of the value should be removed?
    pub side: TrimSide,
    /// How long the pattern should match?
    pub length: TrimLength,
    /// Pattern to be matched with the expanded value
    pub pattern: Word,
}

/// Parameter expansion modifier that replaces matches of a pattern
///
/// Examples of replacements include `/foo/bar`, `//foo/bar` and `/#foo`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Replace {
    /// Whether all matches are replaced (`//`) or only the first (`/`)
    pub all: bool,
    /// Anchor restricting where the pattern may match
    ///
    /// `Some(Prefix)` for `/#` and `Some(Suffix)` for `/%`. Mutually
    /// exclusive with `all` in the lexical grammar.
    pub anchor: Option<TrimSide>,
    /// Pattern to be matched with the expanded value
    pub pattern: Word,
    /// Replacement string
    ///
    /// `None` if the expansion has no second `/`, as in `${foo/bar}`, which
    /// deletes matches. `Some` of an empty word for `${foo/bar/}`.
    pub replacement: Option<Word>,
}

/// Case conversion applied by a [case-conversion](ParamSubst::CaseConv)
/// modifier
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CaseChange {
    /// Convert to upper case (`^`)
    Upper,
    /// Convert to lower case (`,`)
    Lower,
}

/// Scope of a case conversion
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CaseScope {
    /// Convert the first character only (single operator)
    First,
    /// Convert every matching character (doubled operator)
    All,
}

/// Parameter expansion modifier that changes letter case
///
/// Examples include `^`, `^^[aeiou]` and `,,`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaseConv {
    /// Direction of the conversion
    pub change: CaseChange,
    /// Whether the conversion applies to the first character or all
    pub scope: CaseScope,
    /// Pattern selecting the characters to convert, possibly empty
    pub pattern: Word,
}

/// Modifier of a `${!prefix@}` expansion
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrefixModifier {
    /// `@`
    At,
    /// `*`
    Asterisk,
}

/// Parameter expansion
///
/// This enum covers every form a `$`-expansion can take, from a bare `$foo`
/// to the braced modifier forms. A braced expansion whose interior matches
/// none of the recognized forms is captured verbatim as [`Bad`], which is a
/// well-formed AST node, not an error.
///
/// [`Bad`]: ParamSubst::Bad
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParamSubst {
    /// Unrecognized `${…}` content, kept verbatim
    Bad(String),
    /// Parameter expansion without braces (`$foo`, `$1`, `$@`)
    Bare(Param),
    /// Braced expansion without modifier (`${foo}`, `${!foo}`)
    Brace {
        /// Whether the expansion is indirect (`${!foo}`)
        indirect: bool,
        /// Parameter to be expanded
        param: Param,
    },
    /// Conditional substitution (`${foo:-bar}`, `${foo+set}`, …)
    Switch {
        indirect: bool,
        param: Param,
        switch: Switch,
    },
    /// Substring expansion (`${foo:1}`, `${foo:1:2}`)
    Substring {
        indirect: bool,
        param: Param,
        /// Offset expression word
        offset: Word,
        /// Length expression word; `None` when the second `:` is absent
        length: Option<Word>,
    },
    /// Expansion to the names of variables with a prefix (`${!prefix@}`)
    VarPrefix {
        /// Name prefix
        prefix: String,
        /// Terminating modifier character
        modifier: PrefixModifier,
    },
    /// Expansion to the indices of an array (`${!array[@]}`)
    Indices(Param),
    /// Expansion to the length of a value (`${#foo}`)
    Length(Param),
    /// Pattern-based removal (`${foo#bar}`, `${foo%%bar}`)
    Trim {
        indirect: bool,
        param: Param,
        trim: Trim,
    },
    /// Pattern-based replacement (`${foo/bar/baz}`)
    Replace {
        indirect: bool,
        param: Param,
        replace: Replace,
    },
    /// Letter case conversion (`${foo^^}`, `${foo,}`)
    CaseConv {
        indirect: bool,
        param: Param,
        case: CaseConv,
    },
}

/// Element of a [Word]
///
/// A word unit is one lexical fragment of a word: a plain or escaped
/// character, a quoted region, or a substitution. Substitutions that the
/// parser does not descend into (command, process, and arithmetic
/// substitution) keep their interior as raw source text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WordUnit {
    /// Unquoted single character
    Literal(char),
    /// Backslash-escaped single character
    Backslashed(char),
    /// String surrounded with a pair of single quotations
    SingleQuote(String),
    /// Word surrounded with a pair of double quotations
    ///
    /// By construction the inner word only contains `Literal`,
    /// `Backslashed`, `Backquote`, `Param`, `CommandSubst` and `Arith`
    /// units.
    DoubleQuote(Word),
    /// ANSI-C quoted string (`$'…'`)
    ///
    /// Escape sequences are preserved undecoded as `Backslashed` units;
    /// decoding them is the consumer's concern.
    DollarSingleQuote(Word),
    /// Locale-translated string (`$"…"`)
    DollarDoubleQuote(Word),
    /// Backquoted command substitution
    ///
    /// The inner word only contains `Literal` and `Backslashed` units.
    Backquote(Word),
    /// Parameter expansion
    Param(ParamSubst),
    /// Command substitution of the form `$(…)`, with the raw interior text
    CommandSubst(String),
    /// Arithmetic expansion `$((…))`, with the raw expression text
    Arith(String),
    /// Process substitution (`<(…)` or `>(…)`)
    ProcessSubst {
        /// Direction of the substitution
        direction: SubstDirection,
        /// Raw interior text
        content: String,
    },
}

pub use WordUnit::*;

/// Token that may involve expansions and quotes
///
/// A word is a sequence of [word unit](WordUnit)s. It depends on context
/// whether an empty word is valid or not. It is your responsibility to
/// ensure a word is non-empty in a context where it cannot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Word {
    /// Word units that constitute the word
    pub units: Vec<WordUnit>,
    /// Position of the word in the source code
    pub location: Location,
}

impl Word {
    /// Creates a word consisting of the literal characters of `s`.
    ///
    /// The location of the new word is the given one. This is used for words
    /// synthesized outside a parse, such as brace expansion results.
    #[must_use]
    pub fn from_literal_chars<S: AsRef<str>>(s: S, location: Location) -> Word {
        let units = s.as_ref().chars().map(Literal).collect();
        Word { units, location }
    }
}

/// Operator of an [assignment](Assign)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `+=`
    Append,
}

/// Element of an array assignment value
///
/// Each element is either a bare word or a subscripted element of the form
/// `[subscript]=word`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArrayElement {
    /// Subscript between `[` and `]`, if the element has one
    pub subscript: Option<Word>,
    /// Value word
    pub value: Word,
}

/// Value of an [assignment](Assign)
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// Scalar value, a possibly empty word
    Scalar(Word),
    /// Array literal, a possibly empty list of elements
    Array(Vec<ArrayElement>),
}

pub use Value::*;

/// Assignment word
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assign {
    /// Name of the variable to assign to
    ///
    /// In the valid assignment syntax, the name must not be empty.
    pub name: String,
    /// Array subscript following the name, if any (`a[0]=…`)
    pub subscript: Option<Word>,
    /// Whether the value is assigned or appended
    pub operator: AssignOp,
    /// Value assigned to the variable
    pub value: Value,
    /// Location of the assignment word
    pub location: Location,
}

/// File descriptor
///
/// This is the `newtype` pattern applied to `i32`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Fd(pub i32);

impl Fd {
    /// File descriptor for the standard input
    pub const STDIN: Fd = Fd(0);
    /// File descriptor for the standard output
    pub const STDOUT: Fd = Fd(1);
    /// File descriptor for the standard error
    pub const STDERR: Fd = Fd(2);
}

/// Redirection operators
///
/// This enum defines the redirection operator types except here-documents.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RedirOp {
    /// `<` (open a file for input)
    FileIn,
    /// `<>` (open a file for input and output)
    FileInOut,
    /// `>` (open a file for output; truncate if existing)
    FileOut,
    /// `>>` (open a file for output; append if existing)
    FileAppend,
    /// `>|` (open a file for output; always truncate)
    FileClobber,
    /// `<&` (copy or close a file descriptor for input)
    FdIn,
    /// `>&` (copy or close a file descriptor for output)
    FdOut,
    /// `<<<` (here-string)
    HereString,
    /// `&>` (redirect both standard output and standard error)
    OutErr,
    /// `&>>` (append both standard output and standard error)
    AppendOutErr,
}

/// Here-document
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HereDoc {
    /// Token that marks the end of the content of the here-document
    ///
    /// The delimiter is kept as written, with any quoting intact, so that
    /// re-emission is lossless. Use [`delimiter_string`] for the effective
    /// delimiter and its quoting flag.
    ///
    /// [`delimiter_string`]: Self::delimiter_string
    pub delimiter: Word,

    /// Whether leading tab characters should be removed from each line of
    /// the here-document content
    ///
    /// This value is `true` for the `<<-` operator and `false` for `<<`.
    pub remove_tabs: bool,

    /// Content of the here-document
    ///
    /// The content is captured verbatim, one line per `\n`-terminated
    /// segment, with tabs already stripped if `remove_tabs` is set.
    ///
    /// This value is wrapped in `OnceCell` because the content is parsed
    /// separately from the here-doc operator. When the operator is parsed,
    /// the `HereDoc` instance is created with an empty cell, which is filled
    /// when the newline terminating the logical line is consumed. In an AST
    /// returned from a successful parse, the cell is always filled.
    pub content: OnceCell<String>,
}

impl HereDoc {
    /// Returns the effective delimiter and whether it was quoted.
    ///
    /// The first element is the delimiter with all quoting removed. The
    /// second is `true` if the delimiter token contained any quoting, which
    /// makes the here-document body literal in Bash semantics.
    #[must_use]
    pub fn delimiter_string(&self) -> (String, bool) {
        self.delimiter.unquote()
    }

    /// Returns the captured content of the here-document.
    ///
    /// # Panics
    ///
    /// If the content has not been read yet, which cannot happen for a
    /// here-document in an AST returned from a successful parse.
    #[must_use]
    pub fn body(&self) -> &str {
        self.content
            .get()
            .expect("here-document content not yet read")
    }
}

/// Part of a redirection that defines the nature of the resulting file
/// descriptor
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RedirBody {
    /// Normal redirection
    Normal { operator: RedirOp, operand: Word },
    /// Here-document
    HereDoc(Rc<HereDoc>),
}

impl RedirBody {
    /// Returns the operand word of the redirection.
    pub fn operand(&self) -> &Word {
        match self {
            RedirBody::Normal { operand, .. } => operand,
            RedirBody::HereDoc(here_doc) => &here_doc.delimiter,
        }
    }
}

/// Redirection
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Redir {
    /// File descriptor that is modified by this redirection
    pub fd: Option<Fd>,
    /// Nature of the resulting file descriptor
    pub body: RedirBody,
}

impl Redir {
    /// Computes the file descriptor that is modified by this redirection.
    ///
    /// If `self.fd` is `Some(_)`, it is returned intact. Otherwise, the
    /// default file descriptor is selected depending on the operator.
    #[must_use]
    pub fn fd_or_default(&self) -> Fd {
        use RedirOp::*;
        self.fd.unwrap_or(match self.body {
            RedirBody::Normal { operator, .. } => match operator {
                FileIn | FileInOut | FdIn => Fd::STDIN,
                FileOut | FileAppend | FileClobber | FdOut | OutErr | AppendOutErr => Fd::STDOUT,
                HereString => Fd::STDIN,
            },
            RedirBody::HereDoc { .. } => Fd::STDIN,
        })
    }
}

/// Command that involves assignments, redirections, and word expansions
///
/// In the valid syntax, a simple command must contain at least one of
/// assignments, redirections, and words. The parser never produces a
/// completely empty simple command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SimpleCommand {
    /// Assignments
    pub assigns: Vec<Assign>,
    /// Command name and arguments
    pub words: Vec<Word>,
    /// Redirections
    pub redirs: Vec<Redir>,
}

impl SimpleCommand {
    /// Returns true if the simple command does not contain any assignments,
    /// words, or redirections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigns.is_empty() && self.words.is_empty() && self.redirs.is_empty()
    }

    /// Tests whether the first word of the simple command is a keyword.
    #[must_use]
    pub(crate) fn first_word_is_keyword(&self) -> bool {
        let Some(word) = self.words.first() else {
            return false;
        };
        let Some(literal) = word.to_string_if_literal() else {
            return false;
        };
        literal.parse::<Keyword>().is_ok()
    }
}

/// Argument of a [declaration builtin command](DeclCommand)
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeclItem {
    /// Argument in assignment syntax
    Assign(Assign),
    /// Ordinary word argument
    Word(Word),
}

/// Declaration builtin command
///
/// The commands `declare`, `typeset`, `export`, `readonly` and `local`
/// accept arguments in assignment syntax. Such a command is parsed into this
/// dedicated node so that consumers see each argument as either an
/// assignment or a word, in input order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeclCommand {
    /// Builtin name word
    pub name: Word,
    /// Arguments, each an assignment or a word
    pub items: Vec<DeclItem>,
    /// Redirections
    pub redirs: Vec<Redir>,
}

/// Names that are parsed as [declaration builtin commands](DeclCommand)
pub const DECL_BUILTIN_NAMES: &[&str] = &["declare", "export", "local", "readonly", "typeset"];

/// Symbol that terminates the body of a case branch and determines what to
/// do after executing it
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CaseContinuation {
    /// `;;` (terminate the case construct)
    #[default]
    Break,
    /// `;&` (unconditionally execute the body of the next case branch)
    FallThrough,
    /// `;;&` (resume with the next case branch, performing pattern matching
    /// again)
    Continue,
}

/// Branch item of a `case` compound command
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaseItem {
    /// Array of patterns that are matched against the main word of the case
    /// compound command to decide if the body of this item should be
    /// executed
    ///
    /// A syntactically valid case item must have at least one pattern.
    pub patterns: Vec<Word>,
    /// Commands that are executed if any of the patterns matched
    pub body: List,
    /// What to do after executing the body of this item
    pub continuation: CaseContinuation,
}

/// Kind of timing applied to a [pipeline](Pipeline)
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeFormat {
    /// `time`
    Default,
    /// `time -p`
    Posix,
}

/// Command that contains other commands
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CompoundCommand {
    /// List as a command (`{ … }`)
    Grouping(List),
    /// Command for executing commands in a subshell
    Subshell(List),
    /// For loop
    For {
        /// Loop variable name
        name: String,
        /// Words to iterate over
        ///
        /// `None` when the loop has no word list at all (`for i do …`),
        /// which iterates over the positional parameters; `Some` of an
        /// empty vector for `for i; do …`.
        values: Option<Vec<Word>>,
        body: List,
    },
    /// Arithmetic for loop (`for ((…))`)
    ArithFor {
        /// Raw text between `((` and `))`
        expr: String,
        body: List,
    },
    /// Select loop
    Select {
        name: String,
        values: Option<Vec<Word>>,
        body: List,
    },
    /// While loop
    While { condition: List, body: List },
    /// Until loop
    Until { condition: List, body: List },
    /// If conditional construct
    ///
    /// An `elif` clause is represented as an `else_part` containing a
    /// single nested `If`; the pretty-printer restores the `elif` spelling.
    If {
        condition: List,
        body: List,
        else_part: Option<List>,
    },
    /// Case conditional construct
    Case { subject: Word, items: Vec<CaseItem> },
    /// Conditional expression (`[[ … ]]`)
    ///
    /// The token sequence between `[[` and `]]` is kept verbatim; operators
    /// appear as words of literal characters.
    Cond(Vec<Word>),
    /// Arithmetic command (`((…))`), with the raw expression text
    Arith(String),
    /// Coprocess
    Coproc {
        /// Coprocess name; Bash defaults to `COPROC` when absent
        name: Option<String>,
        command: Box<Command>,
    },
}

/// Compound command with redirections
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FullCompoundCommand {
    /// The main part
    pub command: CompoundCommand,
    /// Redirections
    pub redirs: Vec<Redir>,
}

/// Function definition command
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionDefinition {
    /// Whether the definition starts with the `function` reserved word
    pub has_keyword: bool,
    /// Whether the name is followed by `()`
    ///
    /// `()` is mandatory when `has_keyword` is false.
    pub parens: bool,
    /// Function name
    pub name: String,
    /// Function body
    pub body: Box<FullCompoundCommand>,
}

/// Element of a pipe sequence
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Simple command
    Simple(SimpleCommand),
    /// Declaration builtin command
    Decl(DeclCommand),
    /// Compound command
    Compound(FullCompoundCommand),
    /// Function definition command
    Function(FunctionDefinition),
}

/// Commands separated by `|`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pipeline {
    /// Elements of the pipeline
    ///
    /// A valid pipeline must have at least one command.
    pub commands: Vec<Command>,
    /// Whether the pipeline begins with a `!`
    pub negation: bool,
    /// Whether the pipeline is timed with the `time` reserved word
    pub time: Option<TimeFormat>,
}

/// Condition that decides if a [Pipeline] in an [and-or list](AndOrList)
/// should be executed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AndOr {
    /// `&&`
    AndThen,
    /// `||`
    OrElse,
}

/// Pipelines separated by `&&` and `||`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AndOrList {
    pub first: Pipeline,
    pub rest: Vec<(AndOr, Pipeline)>,
}

/// Element of a [List]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    /// Main part of this item
    pub and_or: AndOrList,
    /// Whether the item is terminated by `&`
    pub is_async: bool,
}

/// Sequence of [and-or lists](AndOrList) separated by `;`, `&`, or newlines
///
/// It depends on context whether an empty list is a valid syntax.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct List(pub Vec<Item>);

/// Definitions of the [Unquote] and [MaybeLiteral] traits, and other
/// conversions between types
mod conversions;
/// Implementations of [std::fmt::Display] for the shell language syntax
/// types
mod impl_display;

pub use conversions::{MaybeLiteral, NotLiteral, Unquote};
pub(crate) use conversions::{is_name_char, is_name_start};
