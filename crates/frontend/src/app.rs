use leptos::prelude::*;

use crate::app_context::AppContext;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;

#[component]
pub fn App() -> impl IntoView {
    // One explicit application-state object for the whole tree; no globals.
    provide_context(AppContext::new());

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}
