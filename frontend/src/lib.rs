//! MIDI Upload - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for sending MIDI files to the local piano backend,
//! which converts them and queues them for playback.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title)                                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadWidget                                                │
//! │  ├── file input (disabled while uploading)                  │
//! │  └── StatusLine                                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  QueuePanel (polls GET /queue)                               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Backend endpoint and status strings
//! - [`types`] - Reply payloads, queue snapshot, errors
//! - [`state`] - Upload status state machine
//! - [`components`] - UI components
//! - [`services`] - Backend communication (upload, queue)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    RawReply, UploadReply,
    // Queue
    QueueSnapshot,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{UploadOutcome, UploadPhase, UploadState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🎹 MIDI Upload - Starting Leptos App (backend: {})", BACKEND_URL);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="MIDI Upload"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (queue, set_queue) = create_signal(QueueSnapshot::default());
    let queue_changed = create_trigger();

    view! {
        <div class="container">
            <Hero/>
            <UploadWidget set_queue=set_queue queue_changed=queue_changed/>
            <QueuePanel queue=queue set_queue=set_queue queue_changed=queue_changed/>
        </div>
    }
}
