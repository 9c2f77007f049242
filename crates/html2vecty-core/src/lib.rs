//! Core types and error definitions for the html2vecty translator.
//!
//! This crate provides the foundational types shared by the other html2vecty crates:
//! - Markup tokens and the [`TokenSource`] trait consumed by the tree builder
//! - Classified attributes and the call-expression tree ([`CodeNode`], [`Document`])
//! - Target package identities used during emission
//! - Error types for every pipeline stage

pub mod ast;
pub mod errors;
pub mod tokens;

pub use ast::*;
pub use errors::*;
pub use tokens::*;
