//! Shared test infrastructure.

/// Word encoders for COP2 instructions.
pub mod builder;


/// Host doubles.
pub mod mocks;
