use leptos::prelude::*;

use crate::app_context::{use_app, NotificationKind};

/// Global notification modal (info / success / error), fed by
/// `AppContext::notify` and dismissed by click.
#[component]
pub fn NotificationModal() -> impl IntoView {
    let ctx = use_app();

    let icon = move || match ctx.notification.get().map(|n| n.kind) {
        Some(NotificationKind::Error) => "⛔",
        Some(NotificationKind::Success) => "✅",
        _ => "ℹ",
    };

    view! {
        <Show when=move || ctx.notification.get().is_some()>
            <div class="modal" on:click=move |_| ctx.notification.set(None)>
                <div class="modal-content notification-modal" on:click=move |ev| ev.stop_propagation()>
                    <div class="notification-icon">{icon}</div>
                    <p class="notification-message">
                        {move || ctx.notification.get().map(|n| n.message).unwrap_or_default()}
                    </p>
                    <button class="btn-primary" on:click=move |_| ctx.notification.set(None)>
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// One-shot water-quality warning for the selected sector.
#[component]
pub fn WaterAlertModal() -> impl IntoView {
    let ctx = use_app();

    view! {
        <Show when=move || ctx.water_alert.get().is_some()>
            <div class="modal" on:click=move |_| ctx.water_alert.set(None)>
                <div class="modal-content water-alert-modal" on:click=move |ev| ev.stop_propagation()>
                    <h3>"⚠ Alerta de Qualidade da Água"</h3>
                    <p>
                        {move || {
                            ctx.water_alert
                                .get()
                                .map(|alert| alert.message())
                                .unwrap_or_default()
                        }}
                    </p>
                    <button class="btn-primary" on:click=move |_| ctx.water_alert.set(None)>
                        "Entendi"
                    </button>
                </div>
            </div>
        </Show>
    }
}
