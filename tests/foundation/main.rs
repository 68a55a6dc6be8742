//! Integration tests for Layer 0: Foundation
//!
//! Tests for the object protocol, immutable maps, and error types.

mod errors;
mod maps;
mod objects;
