use contracts::session::Page;
use leptos::prelude::*;

use crate::app_context::use_app;

const PLACEHOLDER_LOGO: &str = "https://placehold.co/300x150/e2e8f0/94a3b8?text=Logo+Setor";

/// Sector/institute picker for the selected university.
#[component]
pub fn SectorSelectionPage() -> impl IntoView {
    let ctx = use_app();
    let (query, set_query) = create_signal(String::new());

    let university = Signal::derive(move || {
        let id = ctx.selection.get().university_id?;
        ctx.catalog.get()?.university(&id).cloned()
    });

    let sectors = Signal::derive(move || {
        let Some(uni) = university.get() else {
            return Vec::new();
        };
        let q = query.get();
        ctx.catalog
            .get()
            .map(|catalog| {
                catalog
                    .search_sectors_of(&uni.id, &q)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    view! {
        <div class="page sector-selection-page">
            <button class="btn-back" on:click=move |_| ctx.go_back(Page::Initial)>
                "← Voltar"
            </button>
            <h2>
                {move || {
                    university
                        .get()
                        .map(|u| format!("Setores/Institutos em {}", u.name))
                        .unwrap_or_else(|| "Setores/Institutos".into())
                }}
            </h2>
            <input
                type="search"
                class="search-input"
                placeholder=move || {
                    university
                        .get()
                        .map(|u| format!("🔎 Buscar setor/instituto da {}...", u.name))
                        .unwrap_or_else(|| "🔎 Buscar setor/instituto...".into())
                }
                value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            <div class="card-grid">
                {move || {
                    let found = sectors.get();
                    if found.is_empty() {
                        let uni_name = university.get().map(|u| u.name).unwrap_or_default();
                        view! {
                            <p class="empty-message">
                                {format!(
                                    "Nenhum setor/instituto encontrado para \"{}\" em {}.",
                                    query.get(),
                                    uni_name
                                )}
                            </p>
                        }
                        .into_any()
                    } else {
                        found
                            .iter()
                            .map(|sector| {
                                let id = sector.id.clone();
                                let logo = sector
                                    .logo_url
                                    .clone()
                                    .unwrap_or_else(|| PLACEHOLDER_LOGO.into());
                                view! {
                                    <div
                                        class="custom-card"
                                        on:click=move |_| ctx.select_sector(&id)
                                    >
                                        <img class="custom-card-image" src=logo alt=format!("Logo {}", sector.name) />
                                        <div class="custom-card-content">
                                            <h3>{sector.name.clone()}</h3>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
