//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - MIDI upload to the piano backend
//! - [`queue`] - Playback queue polling

pub mod upload;
pub mod queue;

pub use upload::*;
pub use queue::*;
