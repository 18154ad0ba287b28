//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"MIDI Upload"</h1>
            <p class="subtitle">"Files are converted on the backend and queued for playback."</p>
        </div>
    }
}
