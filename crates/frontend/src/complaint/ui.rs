use contracts::complaint::{validate, ComplaintDraft, ComplaintField};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::app_context::{use_app, NotificationKind};
use crate::shared::components::error_popup::{show_field_error, ErrorPopup};

/// Modal de registro de reclamação.
///
/// Every rule runs before submit so the three field errors can show at
/// once; the backend repeats the same validation.
#[component]
pub fn ComplaintModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app();

    let (location_type, set_location_type) = create_signal(String::new());
    let (description, set_description) = create_signal(String::new());
    let (identify_user, set_identify_user) = create_signal(false);
    let (user_name, set_user_name) = create_signal(String::new());
    let (user_matricula, set_user_matricula) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let type_error = RwSignal::new(Option::<String>::None);
    let description_error = RwSignal::new(Option::<String>::None);
    let identification_error = RwSignal::new(Option::<String>::None);

    let fixture_types = Signal::derive(move || {
        let selection = ctx.selection.get();
        let Some(sector_id) = selection.sector_id else {
            return Vec::new();
        };
        let mut types: Vec<String> = Vec::new();
        if let Some(catalog) = ctx.catalog.get() {
            if let Some(sector) = catalog.sector(&sector_id) {
                for loc in &sector.locations {
                    if !types.contains(&loc.fixture_type) {
                        types.push(loc.fixture_type.clone());
                    }
                }
            }
        }
        types
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let draft = ComplaintDraft {
            location_type: location_type.get(),
            description: description.get(),
            identify_user: identify_user.get(),
            user_name: user_name.get(),
            user_matricula: user_matricula.get(),
        };

        if let Err(err) = validate(&draft) {
            for issue in err.0 {
                let signal = match issue.field {
                    ComplaintField::LocationType => type_error,
                    ComplaintField::Description => description_error,
                    ComplaintField::UserIdentification => identification_error,
                };
                show_field_error(signal, issue.message);
            }
            return;
        }

        let Some(sector_id) = ctx.selection.get_untracked().sector_id else {
            ctx.notify(
                NotificationKind::Error,
                "Nenhum setor selecionado para registrar a reclamação.",
            );
            return;
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::submit_complaint(sector_id, draft).await {
                Ok(response) => {
                    let kind = if response.accepted_locally {
                        NotificationKind::Info
                    } else {
                        NotificationKind::Success
                    };
                    ctx.notify(kind, response.message);
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("Complaint submission failed: {e}");
                    ctx.notify(
                        NotificationKind::Error,
                        format!("Erro ao enviar reclamação: {e}"),
                    );
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="modal" on:click=move |_| on_close.run(())>
            <div class="modal-content complaint-modal" on:click=move |ev| ev.stop_propagation()>
                <h3>"Registrar Reclamação"</h3>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="complaint-type">"Local do problema"</label>
                        <select
                            id="complaint-type"
                            on:change=move |ev| set_location_type.set(event_target_value(&ev))
                        >
                            <option value="" selected=move || location_type.get().is_empty()>
                                "Selecione..."
                            </option>
                            {move || {
                                fixture_types
                                    .get()
                                    .into_iter()
                                    .map(|t| {
                                        let value = t.clone();
                                        let label = t.clone();
                                        view! {
                                            <option
                                                value=value
                                                selected=move || location_type.get() == t
                                            >
                                                {label}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        <ErrorPopup message=Signal::derive(move || type_error.get()) />
                    </div>

                    <div class="form-group">
                        <label for="description">"Descrição"</label>
                        <textarea
                            id="description"
                            placeholder="Descreva o problema com detalhes..."
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                        <ErrorPopup message=Signal::derive(move || description_error.get()) />
                    </div>

                    <div class="form-group">
                        <label class="filter-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || identify_user.get()
                                on:change=move |ev| set_identify_user.set(event_target_checked(&ev))
                            />
                            "Desejo me identificar"
                        </label>
                    </div>

                    <Show when=move || identify_user.get()>
                        <div class="form-group" id="user-identification-fields">
                            <label for="user-name">"Nome"</label>
                            <input
                                type="text"
                                id="user-name"
                                prop:value=move || user_name.get()
                                on:input=move |ev| set_user_name.set(event_target_value(&ev))
                            />
                            <label for="user-matricula">"Matrícula/ID"</label>
                            <input
                                type="text"
                                id="user-matricula"
                                prop:value=move || user_matricula.get()
                                on:input=move |ev| set_user_matricula.set(event_target_value(&ev))
                            />
                            <ErrorPopup message=Signal::derive(move || identification_error.get()) />
                        </div>
                    </Show>

                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn-secondary"
                            on:click=move |_| on_close.run(())
                        >
                            "Cancelar"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Enviando..." } else { "Enviar Reclamação" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
