// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

use qlscalar::ast::{Literal, LiteralValue};

/// Build a literal AST node with a dummy span, as a query parser would for a token at the start
/// of a document.
pub fn literal(value: LiteralValue) -> Literal {
    Literal {
        span: (0, 0).into(),
        value,
    }
}
