// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Structures defining the AST nodes for values written directly in a query document.
//!
//! Each struct has a `span: SourceSpan` member pointing to the section of the query document that
//! the AST node represents.

use std::fmt;

use miette::SourceSpan;

/// AST node representing the `ident` grammar item: an identifier.
///
/// E.g. a variable name or an object field name.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Ident {
    pub span: SourceSpan,
    pub name: String,
}

/// The lexical kind of a `literal` grammar item.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LiteralKind {
    Int,
    Float,
    Str,
    Bool,
    Null,
    Enum,
    Variable,
    List,
    Object,
}

impl LiteralKind {
    /// Get the name of the kind of literal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Int => "int-literal",
            Self::Float => "float-literal",
            Self::Str => "string-literal",
            Self::Bool => "bool-literal",
            Self::Null => "null-literal",
            Self::Enum => "enum-literal",
            Self::Variable => "variable",
            Self::List => "list-literal",
            Self::Object => "object-literal",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// AST node representing the `literal` grammar item: a value written directly in a query
/// document, as opposed to a value supplied out-of-band as a variable.
///
/// E.g. `-23`, `2.5`, `true`, `"a string"`, `[1, 2]`.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    pub span: SourceSpan,
    pub value: LiteralValue,
}

impl Literal {
    /// Get the lexical kind of the literal.
    pub fn kind(&self) -> LiteralKind {
        self.value.kind()
    }
}

/// The value of a `Literal` AST node.
///
/// `Int` and `Float` literals carry the raw text of the token from the query document; converting
/// that text into a runtime number is the job of scalar coercion, not of the parser.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Int(String),
    Float(String),
    Str(String),
    Bool(bool),
    Null,
    Enum(String),
    Variable(Ident),
    List(Vec<Literal>),
    Object(Vec<ObjectField>),
}

impl LiteralValue {
    /// Get the lexical kind of the literal value.
    pub fn kind(&self) -> LiteralKind {
        match self {
            Self::Int(_) => LiteralKind::Int,
            Self::Float(_) => LiteralKind::Float,
            Self::Str(_) => LiteralKind::Str,
            Self::Bool(_) => LiteralKind::Bool,
            Self::Null => LiteralKind::Null,
            Self::Enum(_) => LiteralKind::Enum,
            Self::Variable(_) => LiteralKind::Variable,
            Self::List(_) => LiteralKind::List,
            Self::Object(_) => LiteralKind::Object,
        }
    }
}

/// AST node representing a single `name: value` entry in an object literal.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub span: SourceSpan,
    pub name: Ident,
    pub value: Literal,
}
