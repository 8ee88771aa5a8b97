use contracts::session::public_page_for;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app_context::use_app;
use crate::shared::components::error_popup::{show_field_error, ErrorPopup};
use crate::system::auth::{api, storage};

/// Página de login do gestor.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (is_loading, set_is_loading) = create_signal(false);

    let email_error = RwSignal::new(Option::<String>::None);
    let password_error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        let password_val = password.get();

        // Both checks run, matching the complaint form behavior.
        let mut is_valid = true;
        if email_val.is_empty() {
            show_field_error(email_error, "Preencha com um email cadastrado.");
            is_valid = false;
        }
        if password_val.is_empty() {
            show_field_error(password_error, "Preencha o campo com a senha.");
            is_valid = false;
        }
        if !is_valid {
            return;
        }

        set_is_loading.set(true);
        ctx.session.update(|s| s.begin_login());

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(response) => {
                    storage::save_access_token(&response.access_token);
                    storage::save_refresh_token(&response.refresh_token);

                    ctx.session.update(|s| s.login_succeeded(response.user));
                    set_is_loading.set(false);
                    // Authenticated session implies the manager page.
                    ctx.follow_session();
                }
                Err(e) => {
                    ctx.session.update(|s| s.login_failed(e.clone()));
                    show_field_error(password_error, e);
                    set_is_loading.set(false);
                }
            }
        });
    };

    let back_target = move || {
        let selection = ctx.selection.get_untracked();
        public_page_for(&selection)
    };

    view! {
        <div class="page login-page">
            <div class="login-box">
                <button class="btn-back" on:click=move |_| ctx.go_back(back_target())>
                    "← Voltar"
                </button>
                <h2>"Acesso Restrito"</h2>
                <p class="login-subtitle">"Área exclusiva para gestores"</p>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email-login">"Email"</label>
                        <input
                            type="email"
                            id="email-login"
                            placeholder="gestor@universidade.br"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        <ErrorPopup message=Signal::derive(move || email_error.get()) />
                    </div>

                    <div class="form-group">
                        <label for="password-login">"Senha"</label>
                        <input
                            type="password"
                            id="password-login"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                        <ErrorPopup message=Signal::derive(move || password_error.get()) />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
