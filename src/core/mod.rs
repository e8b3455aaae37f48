//! Core functionality for the relay
//!
//! Provider clients and the request pipeline that chains them.

pub mod audio;
pub mod pipeline;

pub use pipeline::{RelayOutput, RelayPipeline};
