use leptos::task::spawn_local;

use super::{api, storage};
use crate::app_context::AppContext;
use leptos::prelude::*;

/// Try to restore a manager session from stored tokens at startup.
///
/// The session state changes silently; the visitor stays on the public
/// page they were on. An invalid token pair is cleared after one refresh
/// attempt.
pub fn restore_session(ctx: AppContext) {
    spawn_local(async move {
        let Some(access_token) = storage::get_access_token() else {
            return;
        };

        match api::get_current_user(&access_token).await {
            Ok(user_info) => {
                ctx.session.update(|s| s.login_succeeded(user_info));
            }
            Err(_) => {
                // Token invalid, try refresh
                if let Some(refresh_token) = storage::get_refresh_token() {
                    match api::refresh_token(refresh_token).await {
                        Ok(response) => {
                            storage::save_access_token(&response.access_token);
                            if let Ok(user_info) =
                                api::get_current_user(&response.access_token).await
                            {
                                ctx.session.update(|s| s.login_succeeded(user_info));
                            }
                        }
                        Err(_) => {
                            storage::clear_tokens();
                        }
                    }
                } else {
                    storage::clear_tokens();
                }
            }
        }
    });
}

/// Full logout: revoke server-side, clear tokens, return to the public
/// page derived from the current selection.
pub fn do_logout(ctx: AppContext) {
    spawn_local(async move {
        if let Some(refresh_token) = storage::get_refresh_token() {
            let _ = api::logout(refresh_token).await;
        }
        storage::clear_tokens();
        ctx.last_ai_analysis.set(None);
        ctx.session.update(|s| s.logout());
        ctx.follow_session();
    });
}
