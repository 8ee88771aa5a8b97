use serde::{Deserialize, Serialize};

use super::alert::AlertLatch;
use super::filter::FilterState;

/// Estado de navegação da sessão pública: universidade e setor escolhidos,
/// filtros atuais e a trava de alerta.
///
/// Selecting a sector clears the filters and re-arms the alert latch, so
/// the invariant "at most one alert per selection" holds per transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionContext {
    pub university_id: Option<String>,
    pub sector_id: Option<String>,
    pub filters: FilterState,
    pub alert: AlertLatch,
}

impl SelectionContext {
    pub fn select_university(&mut self, university_id: &str) {
        self.university_id = Some(university_id.to_string());
    }

    /// Enter a sector dashboard. `university_id` backfills the university
    /// when the sector was reached from the global search.
    pub fn select_sector(&mut self, sector_id: &str, university_id: Option<&str>) {
        self.sector_id = Some(sector_id.to_string());
        if self.university_id.is_none() {
            self.university_id = university_id.map(str::to_string);
        }
        self.filters.clear();
        self.alert.arm();
    }

    /// Back to the sector list of the current university.
    pub fn leave_sector(&mut self) {
        self.sector_id = None;
    }

    /// Back to the landing page.
    pub fn reset(&mut self) {
        self.university_id = None;
        self.sector_id = None;
        self.filters.clear();
        self.alert.arm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Location, WaterStatus};

    fn critical(name: &str) -> Location {
        Location {
            id: name.into(),
            name: name.into(),
            fixture_type: "Torneira".into(),
            last_analysis: None,
            last_cleaning: None,
            chlorine_mg_per_l: None,
            fecal_coliforms_cfu_per_100ml: None,
            turbidity_ntu: None,
            ph: None,
            status: WaterStatus::Critical,
        }
    }

    #[test]
    fn selecting_a_sector_clears_filters_and_rearms() {
        let mut ctx = SelectionContext::default();
        ctx.filters.set_name("lab");
        let fired = ctx.alert.check(&[critical("Torneira Lab")]);
        assert!(fired.is_some());

        ctx.select_sector("ic_ufba", Some("ufba"));
        assert!(ctx.filters.is_unrestricted());
        assert!(!ctx.alert.has_fired());
        assert_eq!(ctx.university_id.as_deref(), Some("ufba"));
    }

    #[test]
    fn new_selection_allows_a_new_alert() {
        let mut ctx = SelectionContext::default();
        ctx.select_sector("setor_a", None);
        assert!(ctx.alert.check(&[critical("Ponto A")]).is_some());
        assert!(ctx.alert.check(&[critical("Ponto A")]).is_none());

        ctx.select_sector("setor_b", None);
        assert!(ctx.alert.check(&[critical("Ponto B")]).is_some());
    }

    #[test]
    fn global_search_entry_backfills_university() {
        let mut ctx = SelectionContext::default();
        ctx.select_sector("ic_ufba", Some("ufba"));
        assert_eq!(ctx.university_id.as_deref(), Some("ufba"));

        // An already-chosen university is not overwritten.
        let mut ctx = SelectionContext::default();
        ctx.select_university("usp");
        ctx.select_sector("ime_usp", Some("other"));
        assert_eq!(ctx.university_id.as_deref(), Some("usp"));
    }

    #[test]
    fn reset_returns_to_landing_state() {
        let mut ctx = SelectionContext::default();
        ctx.select_university("ufba");
        ctx.select_sector("ic_ufba", None);
        ctx.reset();
        assert_eq!(ctx, SelectionContext::default());
    }
}
