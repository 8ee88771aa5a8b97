use contracts::session::Page;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app_context::use_app;
use crate::dashboard::api as catalog_api;
use crate::dashboard::ui::{DashboardPage, InitialPage, SectorSelectionPage};
use crate::manager::ui::ManagerPage;
use crate::shared::components::{NotificationModal, WaterAlertModal};
use crate::shared::theme::ThemeToggle;
use crate::system::auth::session::restore_session;
use crate::system::pages::login::LoginPage;

/// State-driven navigation: the page enum is the router.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_app();

    // Startup: load the registry once, then try to restore the manager
    // session from stored tokens.
    spawn_local(async move {
        match catalog_api::fetch_catalog().await {
            Ok(catalog) => ctx.catalog.set(Some(catalog)),
            Err(e) => {
                log::error!("Catalog unavailable: {e}");
                ctx.notify(
                    crate::app_context::NotificationKind::Error,
                    "Não foi possível carregar o catálogo de locais.",
                );
            }
        }
    });
    restore_session(ctx);

    view! {
        <header class="app-header">
            <h1 class="app-title" on:click=move |_| ctx.go_back(Page::Initial)>
                "💧 Água Campus"
            </h1>
            <ThemeToggle />
        </header>

        <main>
            {move || match ctx.page.get() {
                Page::Initial => view! { <InitialPage /> }.into_any(),
                Page::SectorSelection => view! { <SectorSelectionPage /> }.into_any(),
                Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                Page::Login => view! { <LoginPage /> }.into_any(),
                Page::Manager => {
                    // Guard: the restricted page only renders for an
                    // authenticated session.
                    if ctx.session.get().is_authenticated() {
                        view! { <ManagerPage /> }.into_any()
                    } else {
                        view! { <LoginPage /> }.into_any()
                    }
                }
            }}
        </main>

        <NotificationModal />
        <WaterAlertModal />
    }
}
