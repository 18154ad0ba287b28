//! Entry point for the WASM application

pub fn main() {
    midi_upload_ui::start();
}
