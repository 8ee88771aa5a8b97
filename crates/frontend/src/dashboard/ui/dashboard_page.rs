use contracts::catalog::WaterStatus;
use contracts::dashboard::build_dashboard;
use contracts::session::Page;
use leptos::prelude::*;

use crate::app_context::use_app;
use crate::complaint::ui::ComplaintModal;

/// Painel público de qualidade da água do setor selecionado.
///
/// Filter changes re-render through the reactive view model only; the
/// alert check ran once on sector entry and is never re-triggered here.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app();
    let (complaint_open, set_complaint_open) = create_signal(false);
    // Raw text as typed; FilterState keeps the lowercased form. Seeded
    // from the surviving filter so re-entering the page stays in sync.
    let (name_input, set_name_input) =
        create_signal(ctx.selection.get_untracked().filters.name);

    let sector = Signal::derive(move || {
        let id = ctx.selection.get().sector_id?;
        ctx.catalog.get()?.sector(&id).cloned()
    });

    // Distinct fixture types of this sector, registry order.
    let fixture_types = Signal::derive(move || {
        let mut types: Vec<String> = Vec::new();
        if let Some(sector) = sector.get() {
            for loc in &sector.locations {
                if !types.contains(&loc.fixture_type) {
                    types.push(loc.fixture_type.clone());
                }
            }
        }
        types
    });

    let view_model = Signal::derive(move || {
        let sector = sector.get()?;
        let filters = ctx.selection.get().filters;
        Some(build_dashboard(&sector, &filters))
    });

    let active_filters = Signal::derive(move || ctx.selection.get().filters.active_count());

    let on_name_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        set_name_input.set(value.clone());
        ctx.selection.update(|s| s.filters.set_name(&value));
    };

    let toggle_type = move |fixture_type: String| {
        ctx.selection.update(|s| {
            let mut types = s.filters.types.clone();
            if let Some(pos) = types.iter().position(|t| *t == fixture_type) {
                types.remove(pos);
            } else {
                types.push(fixture_type);
            }
            s.filters.set_types(types);
        });
    };

    let toggle_status = move |status: WaterStatus| {
        ctx.selection.update(|s| {
            let mut statuses = s.filters.statuses.clone();
            if let Some(pos) = statuses.iter().position(|v| *v == status) {
                statuses.remove(pos);
            } else {
                statuses.push(status);
            }
            s.filters.set_statuses(statuses);
        });
    };

    let clear_filters = move |_| {
        set_name_input.set(String::new());
        ctx.selection.update(|s| s.filters.clear());
    };

    let back_target = move || {
        let selection = ctx.selection.get_untracked();
        let in_university = ctx.catalog.with_untracked(|catalog| {
            match (&selection.university_id, &selection.sector_id, catalog) {
                (Some(uni), Some(sec), Some(catalog)) => catalog
                    .university(uni)
                    .map(|u| u.institute_ids.contains(sec))
                    .unwrap_or(false),
                _ => false,
            }
        });
        if in_university {
            Page::SectorSelection
        } else {
            Page::Initial
        }
    };

    view! {
        <div class="page dashboard-page">
            <div class="dashboard-header">
                <button class="btn-back" on:click=move |_| ctx.go_back(back_target())>
                    "← Voltar"
                </button>
                <h2>
                    {move || {
                        view_model
                            .get()
                            .map(|vm| vm.title)
                            .unwrap_or_else(|| "Qualidade da Água".into())
                    }}
                </h2>
                <div class="dashboard-actions">
                    <button class="btn-secondary" on:click=move |_| set_complaint_open.set(true)>
                        "Registrar Reclamação"
                    </button>
                    <button class="btn-primary" on:click=move |_| ctx.show_page(Page::Login)>
                        "Acesso Restrito"
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <div class="filter-panel-header">
                    <span class="filter-panel__title">"Filtros"</span>
                    {move || {
                        let count = active_filters.get();
                        if count > 0 {
                            view! { <span class="badge badge--primary">{count}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                    <button class="btn-link" on:click=clear_filters>
                        "Limpar filtros"
                    </button>
                </div>
                <div class="filter-panel-content">
                    <input
                        type="search"
                        class="filter-name-input"
                        placeholder="Buscar ponto de coleta pelo nome..."
                        prop:value=move || name_input.get()
                        on:input=on_name_input
                    />

                    <div class="filter-group" id="filter-type">
                        <span class="filter-group__label">"Tipo:"</span>
                        {move || {
                            fixture_types
                                .get()
                                .into_iter()
                                .map(|fixture_type| {
                                    let label = fixture_type.clone();
                                    let value = fixture_type.clone();
                                    let checked = {
                                        let fixture_type = fixture_type.clone();
                                        move || {
                                            ctx.selection
                                                .get()
                                                .filters
                                                .types
                                                .contains(&fixture_type)
                                        }
                                    };
                                    view! {
                                        <label class="filter-checkbox">
                                            <input
                                                type="checkbox"
                                                prop:checked=checked
                                                on:change=move |_| toggle_type(value.clone())
                                            />
                                            {label}
                                        </label>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <div class="filter-group" id="filter-status">
                        <span class="filter-group__label">"Status:"</span>
                        {WaterStatus::all()
                            .into_iter()
                            .map(|status| {
                                let checked = move || {
                                    ctx.selection.get().filters.statuses.contains(&status)
                                };
                                view! {
                                    <label class="filter-checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| toggle_status(status)
                                        />
                                        {status.label()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="card-grid" id="water-points-grid">
                {move || match view_model.get() {
                    Some(vm) => {
                        if let Some(message) = vm.empty_message {
                            view! { <p class="empty-message">{message}</p> }.into_any()
                        } else {
                            vm.cards
                                .into_iter()
                                .map(|card| {
                                    view! {
                                        <div class=format!("water-point-card {}", card.css_class)>
                                            <h4>{format!("{} ({})", card.name, card.fixture_type)}</h4>
                                            <p class="card-date">
                                                {format!("Última Análise: {}", card.last_analysis)}
                                            </p>
                                            <p class="card-date">
                                                {format!("Última Limpeza: {}", card.last_cleaning)}
                                            </p>
                                            <div class="card-measurements">
                                                {card
                                                    .measurements
                                                    .into_iter()
                                                    .map(|m| {
                                                        view! {
                                                            <p>
                                                                <strong>{format!("{}: ", m.label)}</strong>
                                                                {m.value}
                                                            </p>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                            <p class="card-status">
                                                {format!("Status: {}", card.status_label)}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }
                    None => view! { <p class="empty-message">"Nenhum setor selecionado."</p> }
                        .into_any(),
                }}
            </div>

            <Show when=move || complaint_open.get()>
                <ComplaintModal on_close=Callback::new(move |_| set_complaint_open.set(false)) />
            </Show>
        </div>
    }
}
