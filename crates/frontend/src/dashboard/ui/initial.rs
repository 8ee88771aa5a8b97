use leptos::prelude::*;

use crate::app_context::use_app;

const PLACEHOLDER_LOGO: &str = "https://placehold.co/300x150/e2e8f0/94a3b8?text=Logo";

/// Landing page: search across universities and institutes/sectors.
#[component]
pub fn InitialPage() -> impl IntoView {
    let ctx = use_app();
    let (query, set_query) = create_signal(String::new());

    let results = Signal::derive(move || {
        let q = query.get();
        ctx.catalog
            .get()
            .map(|catalog| catalog.global_search(&q))
            .unwrap_or_default()
    });

    view! {
        <div class="page initial-page">
            <h2>"Monitore a qualidade da água na sua universidade"</h2>
            <input
                type="search"
                class="search-input"
                placeholder="🔎 Buscar universidade ou setor/instituto..."
                value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />

            <div class="card-grid">
                {move || {
                    let found = results.get();
                    if found.is_empty() {
                        view! {
                            <p class="empty-message">
                                {format!("Nenhum resultado encontrado para \"{}\".", query.get())}
                            </p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <>
                                {found
                                    .universities
                                    .iter()
                                    .map(|uni| {
                                        let id = uni.id.clone();
                                        let logo = uni
                                            .logo_url
                                            .clone()
                                            .unwrap_or_else(|| PLACEHOLDER_LOGO.into());
                                        view! {
                                            <div
                                                class="custom-card"
                                                on:click=move |_| ctx.select_university(&id)
                                            >
                                                <img class="custom-card-image" src=logo alt=format!("Logo {}", uni.name) />
                                                <div class="custom-card-content">
                                                    <h3>{uni.name.clone()}</h3>
                                                    <p>"Universidade"</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                                {found
                                    .sectors
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
                                                    <p>{format!("Setor/Instituto em {}", sector.university_name)}</p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
