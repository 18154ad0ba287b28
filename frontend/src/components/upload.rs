//! MIDI file picker.
//!
//! Each selection starts one upload. The input stays disabled until the
//! backend answers or the request fails.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::StatusLine;
use crate::services::{BackendClient, UploadFlow};
use crate::{QueueSnapshot, UploadOutcome, UploadState, ACCEPTED_FILE_TYPES};

#[component]
pub fn UploadWidget(
    /// Updated with the queue returned by a successful upload
    set_queue: WriteSignal<QueueSnapshot>,
    /// Asks the queue panel to refetch after a delivery
    queue_changed: Trigger,
) -> impl IntoView {
    let (state, set_state) = create_signal(UploadState::idle());
    let flow = UploadFlow::new(BackendClient::default());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = selected_file(&input);

        if let Some(file) = &file {
            log::info!("Selected {} ({} bytes)", file.name(), file.size());
        }

        let Some((in_flight, pending)) = flow.start(file) else {
            return;
        };
        set_state.set(in_flight);

        spawn_local(async move {
            let outcome = pending.await;
            if let UploadOutcome::Delivered { queue, .. } = &outcome {
                set_queue.update(|snapshot| snapshot.apply_delivered(queue.clone()));
                queue_changed.notify();
            }
            set_state.set(UploadState::settled(&outcome));
        });
    };

    view! {
        <div class="card">
            <p>"Select a MIDI file to send to the piano."</p>
            <input
                type="file"
                accept=ACCEPTED_FILE_TYPES
                on:change=on_file_change
                disabled=move || state.with(|s| s.input_disabled())
            />
        </div>

        <StatusLine state=state/>
    }
}

fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files()?.get(0)
}
