//! Playback queue panel.
//!
//! Polls `GET /queue` while mounted, and again whenever the upload widget
//! fires `queue_changed` after a delivery.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::services::{entry_label, fetch_queue, next_snapshot};
use crate::{QueueSnapshot, BACKEND_URL, QUEUE_POLL_INTERVAL_MS};

/// Fetch the queue once and store it. Failures keep the last snapshot.
fn refresh(set_queue: WriteSignal<QueueSnapshot>, set_updated_at: WriteSignal<Option<String>>) {
    spawn_local(async move {
        let fetched = fetch_queue(BACKEND_URL).await;
        if let Ok(snapshot) = &fetched {
            log::debug!(
                "Queue refreshed: {} waiting, playing {:?}",
                snapshot.queue.len(),
                snapshot.current
            );
            set_updated_at.set(Some(chrono::Local::now().format("%H:%M:%S").to_string()));
        }
        set_queue.update(|queue| *queue = next_snapshot(std::mem::take(queue), fetched));
    });
}

#[component]
pub fn QueuePanel(
    queue: ReadSignal<QueueSnapshot>,
    set_queue: WriteSignal<QueueSnapshot>,
    /// Fired by the upload widget after a delivery
    queue_changed: Trigger,
) -> impl IntoView {
    let (updated_at, set_updated_at) = create_signal(None::<String>);

    // Runs once on mount, then on every delivery.
    create_effect(move |_| {
        queue_changed.track();
        refresh(set_queue, set_updated_at);
    });

    let interval = Interval::new(QUEUE_POLL_INTERVAL_MS, move || {
        refresh(set_queue, set_updated_at)
    });
    on_cleanup(move || drop(interval));

    view! {
        <div class="queue-panel">
            <div class="queue-header">
                <span class="queue-title">"Queue"</span>
                <button
                    class="queue-refresh"
                    on:click=move |_| refresh(set_queue, set_updated_at)
                >
                    "Refresh"
                </button>
            </div>

            <div class="queue-current">
                "Now playing: "
                {move || queue.with(|q| {
                    q.current
                        .as_deref()
                        .map(|c| entry_label(c).to_string())
                        .unwrap_or_else(|| "nothing".to_string())
                })}
            </div>

            <Show
                when=move || queue.with(|q| !q.queue.is_empty())
                fallback=|| view! { <div class="queue-empty">"No songs waiting"</div> }
            >
                <ol class="queue-list">
                    <For
                        each=move || queue.get().queue.into_iter().enumerate()
                        key=|(i, path)| (*i, path.clone())
                        children=move |(_, path)| {
                            view! { <li>{entry_label(&path).to_string()}</li> }
                        }
                    />
                </ol>
            </Show>

            <div class="queue-updated">
                {move || updated_at.get().map(|t| format!("Updated {}", t)).unwrap_or_default()}
            </div>
        </div>
    }
}
