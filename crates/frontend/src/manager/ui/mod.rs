use contracts::complaint::ComplaintRecord;
use contracts::dashboard::{build_overview, OverviewLineKind};
use contracts::notify::NotificationPrefs;
use contracts::report::GenerateReportRequest;
use contracts::session::display_name;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use super::{api, feed};
use crate::app_context::{use_app, NotificationKind};
use crate::system::auth::session::do_logout;

/// Painel restrito do gestor: visão agregada, preferências de notificação,
/// análise com IA, relatório PDF e o feed de reclamações em tempo real.
#[component]
pub fn ManagerPage() -> impl IntoView {
    let ctx = use_app();

    let complaints = RwSignal::new(Vec::<ComplaintRecord>::new());
    let feed_loading = RwSignal::new(true);
    let feed_error = RwSignal::new(Option::<String>::None);

    let prefs = RwSignal::new(NotificationPrefs::default());
    let editing_prefs = RwSignal::new(false);

    let ai_loading = RwSignal::new(false);
    let ai_error = RwSignal::new(Option::<String>::None);

    let include_ai = RwSignal::new(false);
    let report_loading = RwSignal::new(false);
    let pdf_data_url = RwSignal::new(Option::<String>::None);
    let pdf_file_name = RwSignal::new(String::new());

    // Entering the page: load preferences and open the single live
    // complaint-feed subscription for this session.
    spawn_local(async move {
        match api::fetch_preferences().await {
            Ok(stored) => prefs.set(stored),
            Err(e) => log::warn!("Notification preferences unavailable: {e}"),
        }
    });
    feed::start_complaint_feed(ctx, complaints, feed_loading, feed_error);

    let manager_name = Signal::derive(move || {
        ctx.session.with(|session| {
            session
                .user()
                .map(|u| display_name(u.full_name.as_deref(), Some(&u.email)))
                .unwrap_or_else(|| "Gestor".into())
        })
    });

    let overview = Signal::derive(move || {
        let sector_id = ctx.selection.get().sector_id?;
        let catalog = ctx.catalog.get()?;
        let sector = catalog.sector(&sector_id)?;
        Some(build_overview(sector))
    });

    let selected_sector_id =
        move || ctx.selection.with_untracked(|s| s.sector_id.clone());

    // ------------------------------------------------------------------
    // Notification preferences
    // ------------------------------------------------------------------

    let toggle_edit_prefs = move |_| {
        if editing_prefs.get_untracked() {
            // Leaving edit mode saves.
            editing_prefs.set(false);
            let current = prefs.get_untracked();
            spawn_local(async move {
                match api::save_preferences(&current).await {
                    Ok(()) => ctx.notify(
                        NotificationKind::Success,
                        "Preferências de notificação salvas com sucesso!",
                    ),
                    Err(e) => {
                        log::error!("Failed to save preferences: {e}");
                        ctx.notify(
                            NotificationKind::Error,
                            "Erro ao salvar preferências de notificação.",
                        );
                    }
                }
            });
        } else {
            editing_prefs.set(true);
        }
    };

    // ------------------------------------------------------------------
    // AI analysis
    // ------------------------------------------------------------------

    let run_ai_analysis = move |_| {
        let Some(sector_id) = selected_sector_id() else {
            ctx.notify(NotificationKind::Error, "Nenhum setor selecionado.");
            return;
        };
        ai_loading.set(true);
        ai_error.set(None);
        spawn_local(async move {
            match api::ai_analysis(sector_id).await {
                Ok(text) => ctx.last_ai_analysis.set(Some(text)),
                Err(e) => {
                    ctx.last_ai_analysis.set(None);
                    ai_error.set(Some(e));
                }
            }
            ai_loading.set(false);
        });
    };

    // ------------------------------------------------------------------
    // PDF report
    // ------------------------------------------------------------------

    let generate_report = move |_| {
        let Some(sector_id) = selected_sector_id() else {
            ctx.notify(
                NotificationKind::Error,
                "Nenhum setor/instituto selecionado para gerar o relatório.",
            );
            return;
        };
        let request = GenerateReportRequest {
            sector_id,
            include_ai_summary: include_ai.get_untracked(),
            ai_summary_text: ctx.last_ai_analysis.get_untracked(),
        };
        report_loading.set(true);
        spawn_local(async move {
            match api::generate_report(&request).await {
                Ok(response) => {
                    if request.include_ai_summary && !response.ai_summary_included {
                        ctx.notify(
                            NotificationKind::Error,
                            "Não foi possível gerar a análise de IA para o relatório. \
                             O PDF será gerado sem ela.",
                        );
                    }
                    pdf_file_name.set(response.file_name);
                    pdf_data_url.set(Some(response.data_url));
                }
                Err(e) => {
                    log::error!("Report generation failed: {e}");
                    ctx.notify(NotificationKind::Error, "Erro ao gerar o relatório.");
                }
            }
            report_loading.set(false);
        });
    };

    let download_pdf = move |_| {
        let Some(data_url) = pdf_data_url.get_untracked() else {
            ctx.notify(NotificationKind::Error, "Nenhum PDF gerado para download.");
            return;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&data_url);
                anchor.set_download(&pdf_file_name.get_untracked());
                anchor.click();
            }
        }
    };

    view! {
        <div class="page manager-page">
            <div class="manager-header">
                <h2>{move || format!("Bem-vindo(a), {}", manager_name.get())}</h2>
                <div class="manager-actions">
                    <button class="btn-secondary" on:click=move |_| ctx.return_to_public()>
                        "Voltar ao Painel Público"
                    </button>
                    <button class="btn-danger" on:click=move |_| do_logout(ctx)>
                        "Sair"
                    </button>
                </div>
            </div>

            // -------- Aggregated status --------
            <section class="manager-section">
                <h3>"Situação do Setor"</h3>
                <div id="manager-realtime-data">
                    {move || match overview.get() {
                        Some(view) => view
                            .lines
                            .into_iter()
                            .map(|line| {
                                let class = match line.kind {
                                    OverviewLineKind::Critical => "overview-critical",
                                    OverviewLineKind::Attention => "overview-attention",
                                    OverviewLineKind::Summary => "overview-summary",
                                    OverviewLineKind::Empty => "overview-empty",
                                };
                                view! { <p class=class>{line.text}</p> }
                            })
                            .collect_view()
                            .into_any(),
                        None => view! {
                            <p>"Nenhum setor selecionado ou setor sem pontos de coleta cadastrados."</p>
                        }
                        .into_any(),
                    }}
                </div>
            </section>

            // -------- Notification preferences --------
            <section class="manager-section">
                <h3>"Preferências de Notificação"</h3>
                <button class="btn-primary" on:click=toggle_edit_prefs>
                    {move || {
                        if editing_prefs.get() {
                            "Salvar Preferências"
                        } else {
                            "Editar Preferências"
                        }
                    }}
                </button>

                <div class="prefs-grid">
                    <label class="filter-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs.get().sms_enabled
                            disabled=move || !editing_prefs.get()
                            on:change=move |ev| {
                                prefs.update(|p| p.sms_enabled = event_target_checked(&ev))
                            }
                        />
                        "SMS"
                    </label>
                    <Show when=move || prefs.get().sms_enabled && editing_prefs.get()>
                        <input
                            type="tel"
                            placeholder="Número para SMS"
                            prop:value=move || prefs.get().sms_number
                            on:input=move |ev| {
                                prefs.update(|p| p.sms_number = event_target_value(&ev))
                            }
                        />
                    </Show>

                    <label class="filter-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs.get().email_enabled
                            disabled=move || !editing_prefs.get()
                            on:change=move |ev| {
                                prefs.update(|p| p.email_enabled = event_target_checked(&ev))
                            }
                        />
                        "Email"
                    </label>
                    <Show when=move || prefs.get().email_enabled && editing_prefs.get()>
                        <input
                            type="email"
                            placeholder="Endereço de email"
                            prop:value=move || prefs.get().email_address
                            on:input=move |ev| {
                                prefs.update(|p| p.email_address = event_target_value(&ev))
                            }
                        />
                    </Show>

                    <label class="filter-checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs.get().whatsapp_enabled
                            disabled=move || !editing_prefs.get()
                            on:change=move |ev| {
                                prefs.update(|p| p.whatsapp_enabled = event_target_checked(&ev))
                            }
                        />
                        "WhatsApp"
                    </label>
                    <Show when=move || prefs.get().whatsapp_enabled && editing_prefs.get()>
                        <input
                            type="tel"
                            placeholder="Número do WhatsApp"
                            prop:value=move || prefs.get().effective_whatsapp_number().to_string()
                            readonly=move || {
                                let p = prefs.get();
                                p.whatsapp_autopopulate && !p.sms_number.is_empty()
                            }
                            on:input=move |ev| {
                                prefs.update(|p| p.whatsapp_number = event_target_value(&ev))
                            }
                        />
                    </Show>
                    <Show when=move || {
                        let p = prefs.get();
                        p.whatsapp_enabled && p.sms_enabled && editing_prefs.get()
                    }>
                        <label class="filter-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || prefs.get().whatsapp_autopopulate
                                on:change=move |ev| {
                                    prefs.update(|p| {
                                        p.whatsapp_autopopulate = event_target_checked(&ev)
                                    })
                                }
                            />
                            "Usar o mesmo número do SMS"
                        </label>
                    </Show>
                </div>
            </section>

            // -------- AI analysis --------
            <section class="manager-section">
                <h3>"Análise com IA"</h3>
                <button
                    class="btn-primary"
                    disabled=move || ai_loading.get()
                    on:click=run_ai_analysis
                >
                    {move || if ai_loading.get() { "Gerando análise..." } else { "Analisar com IA" }}
                </button>
                <div id="ai-analysis-result">
                    {move || match (ai_error.get(), ctx.last_ai_analysis.get()) {
                        (Some(error), _) => {
                            view! { <p class="error-message">{format!("Erro ao obter análise da IA: {error}")}</p> }
                                .into_any()
                        }
                        (None, Some(text)) => view! {
                            <div class="ai-analysis-text">
                                {text
                                    .lines()
                                    .map(|line| view! { <p>{line.to_string()}</p> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any(),
                        (None, None) => view! { <></> }.into_any(),
                    }}
                </div>
            </section>

            // -------- PDF report --------
            <section class="manager-section">
                <h3>"Relatório PDF"</h3>
                <label class="filter-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || include_ai.get()
                        on:change=move |ev| include_ai.set(event_target_checked(&ev))
                    />
                    "Incluir análise de IA no relatório"
                </label>
                <button
                    class="btn-primary"
                    disabled=move || report_loading.get()
                    on:click=generate_report
                >
                    {move || if report_loading.get() { "Gerando..." } else { "Gerar Relatório" }}
                </button>
            </section>

            // -------- Complaint feed --------
            <section class="manager-section">
                <h3>"Reclamações Recebidas"</h3>
                <Show when=move || feed_loading.get()>
                    <p>"Carregando reclamações..."</p>
                </Show>
                <Show when=move || feed_error.get().is_some()>
                    <p class="error-message">{move || feed_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || {
                    !feed_loading.get() && feed_error.get().is_none() && complaints.get().is_empty()
                }>
                    <p>"Nenhuma reclamação registrada até o momento."</p>
                </Show>
                <Show when=move || !complaints.get().is_empty()>
                    <table class="complaints-table">
                        <thead>
                            <tr>
                                <th>"Data"</th>
                                <th>"Setor"</th>
                                <th>"Local"</th>
                                <th>"Descrição"</th>
                                <th>"Identificação"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                complaints
                                    .get()
                                    .into_iter()
                                    .map(|complaint| {
                                        view! {
                                            <tr>
                                                <td>
                                                    {complaint
                                                        .submitted_at
                                                        .format("%d/%m/%Y %H:%M")
                                                        .to_string()}
                                                </td>
                                                <td>{complaint.sector_name.clone()}</td>
                                                <td>{complaint.location_type.clone()}</td>
                                                <td class="complaint-description">
                                                    {complaint.description.clone()}
                                                </td>
                                                <td>{complaint.identity_label()}</td>
                                                <td>
                                                    <span class=format!(
                                                        "complaint-status {}",
                                                        complaint.status.css_class()
                                                    )>
                                                        {complaint.status.label()}
                                                    </span>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </section>

            // -------- PDF preview modal --------
            <Show when=move || pdf_data_url.get().is_some()>
                <div class="modal" on:click=move |_| pdf_data_url.set(None)>
                    <div class="modal-content pdf-preview-modal" on:click=move |ev| ev.stop_propagation()>
                        <h3>"Pré-visualização do Relatório"</h3>
                        <iframe
                            class="pdf-preview-iframe"
                            src=move || pdf_data_url.get().unwrap_or_default()
                        ></iframe>
                        <div class="modal-actions">
                            <button class="btn-secondary" on:click=move |_| pdf_data_url.set(None)>
                                "Fechar"
                            </button>
                            <button class="btn-primary" on:click=download_pdf>
                                "Baixar PDF"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
