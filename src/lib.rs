//! Tessera - the host/script boundary of an embedded scripting runtime
//!
//! This crate re-exports all layers of the Tessera system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tessera_stdlib     Adapters, module registration, call tracing
//! Layer 0: tessera_foundation Object protocol, variants, Callable, errors
//! ```

pub use tessera_foundation as foundation;
pub use tessera_stdlib as stdlib;
