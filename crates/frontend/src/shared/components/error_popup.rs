use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Show a per-field validation message that hides itself after 4 seconds.
/// A newer message supersedes the pending hide of the previous one.
pub fn show_field_error(signal: RwSignal<Option<String>>, message: impl Into<String>) {
    let message = message.into();
    signal.set(Some(message.clone()));
    spawn_local(async move {
        TimeoutFuture::new(4_000).await;
        signal.update(|current| {
            if current.as_deref() == Some(message.as_str()) {
                *current = None;
            }
        });
    });
}

/// Inline error bubble anchored under a form field.
#[component]
pub fn ErrorPopup(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="form-error-popup show">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
