//! # audio-relay
//!
//! HTTP service that accepts an uploaded audio file, transcribes it with
//! Groq Whisper, re-synthesizes the transcript with Speechify and streams the
//! synthesized audio back to the caller.
//!
//! ## Running
//!
//! ```rust,no_run
//! use audio_relay::server::run_server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     audio_relay::utils::logging::init_logging();
//!     run_server().await?;
//!     Ok(())
//! }
//! ```
//!
//! Configuration is read from the environment (see [`Config::load`]).

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use utils::error::{RelayError, Result};
