//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into statement trees. One function per grammar rule,
//! calling downward into higher-precedence levels:
//!
//! - Statement parsing (`program`, `statement`) in `stmt`
//! - Expression parsing with operator precedence in `expr`
//! - The local variable table assigning stack offsets in `locals`
//!
//! Left-associative levels fold operands in a loop; assignment recurses on
//! its right-hand side and is right-associative.

pub mod expr;
pub mod locals;
pub mod parser;
pub mod stmt;
