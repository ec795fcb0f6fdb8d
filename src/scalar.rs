// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Types and traits for scalar type coercion.

use std::collections::HashMap;

use crate::ast;
use crate::error::Result;
use crate::value::Value;

pub mod float;

/// The identity of a scalar type: its unique name in the type system and a human-readable
/// description. Scalar types hold one of these for their whole lifetime; it is never mutated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Variable bindings for a query, keyed by variable name.
///
/// Passed through `Scalar::parse_literal` so that scalar kinds whose literals can reference
/// variables are able to resolve them.
pub type Variables = HashMap<String, Value>;

/// The trait that scalar types implement to provide a generic coercion interface for the schema
/// layer and the executor.
///
/// All operations are pure and reentrant: they hold no state beyond the scalar's `ScalarInfo` and
/// may be called concurrently from arbitrarily many threads without coordination.
pub trait Scalar {
    /// The Rust representation of a successfully coerced value of this scalar.
    type Output;

    /// Get the name and description of this scalar type.
    fn info(&self) -> &ScalarInfo;

    /// Convert an internal runtime value, produced by application code, into the representation
    /// sent to the client.
    fn serialize(&self, value: &Value) -> Result<Self::Output>;

    /// Convert a client-supplied variable value, already decoded from the transport's native
    /// representation, into the internal representation.
    fn parse_value(&self, value: &Value) -> Result<Self::Output>;

    /// Convert a literal that appeared directly in a query document into the internal
    /// representation.
    fn parse_literal(
        &self,
        node: &ast::Literal,
        variables: Option<&Variables>,
    ) -> Result<Self::Output>;
}
