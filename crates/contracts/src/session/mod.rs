use serde::{Deserialize, Serialize};

use crate::dashboard::SelectionContext;
use crate::system::auth::UserInfo;

/// Páginas da aplicação. Navigation is derived from state, never stored as
/// an imperative side effect inside listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Initial,
    SectorSelection,
    Dashboard,
    Login,
    Manager,
}

/// Estado da sessão do gestor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated(UserInfo),
    Failed(String),
}

impl SessionState {
    pub fn begin_login(&mut self) {
        *self = SessionState::Authenticating;
    }

    pub fn login_succeeded(&mut self, user: UserInfo) {
        *self = SessionState::Authenticated(user);
    }

    pub fn login_failed(&mut self, reason: impl Into<String>) {
        *self = SessionState::Failed(reason.into());
    }

    pub fn logout(&mut self) {
        *self = SessionState::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Public page implied by the current selection: the deepest view the
/// visitor had reached before entering the restricted area.
pub fn public_page_for(selection: &SelectionContext) -> Page {
    if selection.sector_id.is_some() {
        Page::Dashboard
    } else if selection.university_id.is_some() {
        Page::SectorSelection
    } else {
        Page::Initial
    }
}

/// Pure navigation: the page to show after a session transition.
pub fn page_after_auth_change(session: &SessionState, selection: &SelectionContext) -> Page {
    match session {
        SessionState::Authenticated(_) => Page::Manager,
        SessionState::Authenticating | SessionState::Failed(_) => Page::Login,
        SessionState::Anonymous => public_page_for(selection),
    }
}

/// Nome exibido na saudação do gestor.
///
/// A non-empty full name wins; otherwise the name is derived from the email
/// local part with dots as spaces and each word title-cased.
pub fn display_name(full_name: Option<&str>, email: Option<&str>) -> String {
    if let Some(name) = full_name {
        if !name.trim().is_empty() {
            return name.trim().to_string();
        }
    }
    if let Some(email) = email {
        let local = email.split('@').next().unwrap_or("");
        if !local.is_empty() {
            return local
                .split('.')
                .filter(|part| !part.is_empty())
                .map(|part| {
                    let mut chars = part.chars();
                    match chars.next() {
                        Some(first) => {
                            first.to_uppercase().collect::<String>() + chars.as_str()
                        }
                        None => String::new(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
        }
    }
    "Gestor".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: "m1".into(),
            email: "joao.silva@ufba.br".into(),
            full_name: None,
            is_admin: true,
        }
    }

    #[test]
    fn login_flow_transitions() {
        let mut s = SessionState::default();
        assert!(!s.is_authenticated());

        s.begin_login();
        assert_eq!(s, SessionState::Authenticating);

        s.login_succeeded(user());
        assert!(s.is_authenticated());
        assert_eq!(s.user().unwrap().id, "m1");

        s.logout();
        assert_eq!(s, SessionState::Anonymous);
    }

    #[test]
    fn failed_login_keeps_login_page() {
        let mut s = SessionState::default();
        s.begin_login();
        s.login_failed("Email ou senha inválidos.");
        let selection = SelectionContext::default();
        assert_eq!(page_after_auth_change(&s, &selection), Page::Login);
    }

    #[test]
    fn logout_returns_to_selection_derived_page() {
        let mut selection = SelectionContext::default();
        let anonymous = SessionState::Anonymous;

        assert_eq!(page_after_auth_change(&anonymous, &selection), Page::Initial);

        selection.select_university("ufba");
        assert_eq!(
            page_after_auth_change(&anonymous, &selection),
            Page::SectorSelection
        );

        selection.select_sector("ic_ufba", None);
        assert_eq!(
            page_after_auth_change(&anonymous, &selection),
            Page::Dashboard
        );
    }

    #[test]
    fn authenticated_lands_on_manager_page() {
        let mut s = SessionState::default();
        s.login_succeeded(user());
        assert_eq!(
            page_after_auth_change(&s, &SelectionContext::default()),
            Page::Manager
        );
    }

    #[test]
    fn display_name_from_email_local_part() {
        assert_eq!(
            display_name(None, Some("joao.silva@ufba.br")),
            "Joao Silva"
        );
        assert_eq!(display_name(None, Some("ana@ufba.br")), "Ana");
    }

    #[test]
    fn display_name_prefers_full_name() {
        assert_eq!(
            display_name(Some("Maria Clara"), Some("mc@ufba.br")),
            "Maria Clara"
        );
        // Blank full name falls through to the email.
        assert_eq!(display_name(Some("  "), Some("ana@ufba.br")), "Ana");
    }

    #[test]
    fn display_name_fallback() {
        assert_eq!(display_name(None, None), "Gestor");
        assert_eq!(display_name(Some(""), Some("")), "Gestor");
    }
}
