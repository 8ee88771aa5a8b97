//! Theme management: light/dark with the preference kept in localStorage.

use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Toggle the `dark` class on the document root, Tailwind-style.
fn apply_theme_class(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    match theme {
        Theme::Dark => {
            let _ = root.class_list().add_1("dark");
        }
        Theme::Light => {
            let _ = root.class_list().remove_1("dark");
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme_class(theme);
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = load_theme_from_storage();
    let theme = RwSignal::new(initial_theme);

    apply_theme_class(initial_theme);

    let context = ThemeContext { theme };
    provide_context(context);

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Light/dark toggle buttons for the header.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    let button_class = move |theme: Theme| {
        if ctx.theme.get() == theme {
            "theme-toggle-btn active"
        } else {
            "theme-toggle-btn"
        }
    };

    view! {
        <div class="theme-toggle">
            <button
                class=move || button_class(Theme::Light)
                on:click=move |_| ctx.set_theme(Theme::Light)
                title="Tema claro"
            >
                "☀"
            </button>
            <button
                class=move || button_class(Theme::Dark)
                on:click=move |_| ctx.set_theme(Theme::Dark)
                title="Tema escuro"
            >
                "🌙"
            </button>
        </div>
    }
}
