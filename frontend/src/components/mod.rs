//! UI Components for the MIDI upload page.
//!
//! # Layout Components
//! - [`Hero`] - Page title
//!
//! # Feature Components
//! - [`UploadWidget`] - MIDI file picker and upload
//! - [`StatusLine`] - Upload status text
//! - [`QueuePanel`] - Songs queued on the piano backend

mod hero;
mod upload;
mod status;
mod queue;

pub use hero::*;
pub use upload::*;
pub use status::*;
pub use queue::*;
