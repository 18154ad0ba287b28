//! Status line under the upload card.

use leptos::*;

use crate::UploadState;

#[component]
pub fn StatusLine(state: ReadSignal<UploadState>) -> impl IntoView {
    view! {
        <div class=move || state.with(|s| s.status_class())>
            <strong>"Status:"</strong>
            " "
            {move || state.with(|s| s.status().to_string())}
        </div>
    }
}
