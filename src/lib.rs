//! Blockfall (workspace facade crate).
//!
//! Re-exports the simulation core, the input sampler and the shared types from
//! the dedicated crates under `crates/`, plus the pieces the headless driver is
//! built from.

pub mod cli;
pub mod script;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_types as types;
