//! examples of usage of RustedQuad
/// integration examples: closures, strings, task documents, Legendre tables
pub mod quad_examples;
