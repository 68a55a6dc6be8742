//! Integration tests for Layer 1: Stdlib
//!
//! Tests for the adapter catalogue, module registration, and call tracing.

mod adapters;
mod tracing;
