//! Structural runtime values for a circuit evaluator.

/// Value variants, struct schemas, content hashing, and native/wire disassembly.
pub mod value;
