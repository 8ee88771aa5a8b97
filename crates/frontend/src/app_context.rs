use contracts::catalog::Catalog;
use contracts::dashboard::{SelectionContext, WaterAlert};
use contracts::session::{page_after_auth_change, Page, SessionState};
use leptos::prelude::*;

/// Severity of the global notification modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Estado global da aplicação, fornecido via contexto a toda a árvore.
///
/// Holds the catalog snapshot, the public selection context, the manager
/// session and the current page. Navigation goes through [`show_page`] so
/// the page-dependent invariants (alert re-arm, feed cancellation) hold on
/// every transition.
///
/// [`show_page`]: AppContext::show_page
#[derive(Clone, Copy)]
pub struct AppContext {
    pub page: RwSignal<Page>,
    pub catalog: RwSignal<Option<Catalog>>,
    pub selection: RwSignal<SelectionContext>,
    pub session: RwSignal<SessionState>,
    pub last_ai_analysis: RwSignal<Option<String>>,
    pub water_alert: RwSignal<Option<WaterAlert>>,
    pub notification: RwSignal<Option<Notification>>,
    /// Bumped to cancel the active complaint-feed subscription; exactly one
    /// poll loop observes a given generation.
    pub feed_generation: RwSignal<u64>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Initial),
            catalog: RwSignal::new(None),
            selection: RwSignal::new(SelectionContext::default()),
            session: RwSignal::new(SessionState::default()),
            last_ai_analysis: RwSignal::new(None),
            water_alert: RwSignal::new(None),
            notification: RwSignal::new(None),
            feed_generation: RwSignal::new(0),
        }
    }

    /// Central page switch. Leaving the manager page cancels the complaint
    /// feed; entering the dashboard page re-arms the alert latch.
    pub fn show_page(&self, page: Page) {
        let previous = self.page.get_untracked();
        if previous == Page::Manager && page != Page::Manager {
            self.cancel_complaint_feed();
        }
        if page == Page::Dashboard {
            self.selection.update(|s| s.alert.arm());
        }
        self.page.set(page);
    }

    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        self.notification.set(Some(Notification {
            message: message.into(),
            kind,
        }));
    }

    // ------------------------------------------------------------------
    // Public navigation (mirrors the selection state machine)
    // ------------------------------------------------------------------

    pub fn select_university(&self, university_id: &str) {
        self.selection.update(|s| s.select_university(university_id));
        self.show_page(Page::SectorSelection);
    }

    /// Enter a sector dashboard and run the one-shot alert check against
    /// the UNFILTERED location list.
    pub fn select_sector(&self, sector_id: &str) {
        let university_id = self.catalog.with_untracked(|catalog| {
            catalog
                .as_ref()
                .and_then(|c| c.sector(sector_id))
                .map(|s| s.university_id.clone())
        });
        self.selection
            .update(|s| s.select_sector(sector_id, university_id.as_deref()));
        self.show_page(Page::Dashboard);
        self.check_water_alert();
    }

    /// Filter-change re-renders never call this; only the render on sector
    /// entry checks the alert.
    pub fn check_water_alert(&self) {
        let sector_id = self.selection.with_untracked(|s| s.sector_id.clone());
        let Some(sector_id) = sector_id else { return };
        let alert = self.catalog.with_untracked(|catalog| {
            let sector = catalog.as_ref()?.sector(&sector_id)?;
            self.selection
                .try_update(|s| s.alert.check(&sector.locations))
                .flatten()
        });
        if let Some(alert) = alert {
            self.water_alert.set(Some(alert));
        }
    }

    /// Back navigation from the dashboard or sector list.
    pub fn go_back(&self, target: Page) {
        match target {
            Page::Initial => self.selection.update(|s| s.reset()),
            Page::SectorSelection => self.selection.update(|s| s.leave_sector()),
            _ => {}
        }
        self.show_page(target);
    }

    /// Back to the public view while staying logged in: the page is the
    /// deepest one the selection had reached.
    pub fn return_to_public(&self) {
        let page = self
            .selection
            .with_untracked(contracts::session::public_page_for);
        self.show_page(page);
    }

    /// Page implied by the current session, per the pure navigation rule.
    pub fn follow_session(&self) {
        let page = self.session.with_untracked(|session| {
            self.selection
                .with_untracked(|selection| page_after_auth_change(session, selection))
        });
        self.show_page(page);
    }

    pub fn cancel_complaint_feed(&self) {
        self.feed_generation.update(|g| *g += 1);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the application context.
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found in component tree")
}
