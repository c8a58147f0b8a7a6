//! Host doubles.
