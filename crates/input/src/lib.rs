//! Terminal input sampling.
//!
//! This crate is independent of any UI framework and never polls a device. The
//! host delivers `crossterm` key events as they arrive; [`KeySampler`] turns
//! them into one [`TickInput`](types::TickInput) per simulation tick (held
//! directions plus a rotate edge), including terminals without key-release
//! events.

pub mod map;
pub mod sampler;

pub use blockfall_types as types;

pub use map::{map_key, should_quit, should_restart, Intent};
pub use sampler::KeySampler;
