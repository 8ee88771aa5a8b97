use serde::{Deserialize, Serialize};

use crate::catalog::{Location, WaterStatus};

/// Critérios de filtragem do painel: conjunção de três eixos.
///
/// An empty `types`/`statuses` list means "no restriction on this axis",
/// not "exclude everything". The name filter is stored lowercased so the
/// per-location check never re-lowercases the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub name: String,
    pub types: Vec<String>,
    pub statuses: Vec<WaterStatus>,
}

impl FilterState {
    pub fn set_name(&mut self, text: &str) {
        self.name = text.to_lowercase();
    }

    pub fn set_types(&mut self, types: Vec<String>) {
        self.types = types;
    }

    pub fn set_statuses(&mut self, statuses: Vec<WaterStatus>) {
        self.statuses = statuses;
    }

    /// Reset all three axes to unrestricted.
    pub fn clear(&mut self) {
        self.name.clear();
        self.types.clear();
        self.statuses.clear();
    }

    pub fn is_unrestricted(&self) -> bool {
        self.name.is_empty() && self.types.is_empty() && self.statuses.is_empty()
    }

    /// Number of restricted axes, for the filter badge.
    pub fn active_count(&self) -> usize {
        usize::from(!self.name.is_empty())
            + usize::from(!self.types.is_empty())
            + usize::from(!self.statuses.is_empty())
    }

    pub fn matches(&self, location: &Location) -> bool {
        (self.name.is_empty() || location.name.to_lowercase().contains(&self.name))
            && (self.types.is_empty() || self.types.iter().any(|t| *t == location.fixture_type))
            && (self.statuses.is_empty() || self.statuses.contains(&location.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(name: &str, fixture_type: &str, status: WaterStatus) -> Location {
        Location {
            id: name.to_lowercase().replace(' ', "_"),
            name: name.into(),
            fixture_type: fixture_type.into(),
            last_analysis: None,
            last_cleaning: None,
            chlorine_mg_per_l: None,
            fecal_coliforms_cfu_per_100ml: None,
            turbidity_ntu: None,
            ph: None,
            status,
        }
    }

    #[test]
    fn unrestricted_filter_matches_everything() {
        let f = FilterState::default();
        assert!(f.matches(&location("Bebedouro Corredor", "Bebedouro", WaterStatus::Good)));
        assert!(f.matches(&location("Torneira Lab", "Torneira", WaterStatus::Critical)));
    }

    #[test]
    fn name_filter_is_case_insensitive() {
        let mut f = FilterState::default();
        f.set_name("BIBLIOTECA");
        assert!(f.matches(&location(
            "Bebedouro Biblioteca",
            "Bebedouro",
            WaterStatus::Attention
        )));
        assert!(!f.matches(&location("Torneira da Copa", "Torneira", WaterStatus::Good)));
    }

    #[test]
    fn axes_combine_as_conjunction() {
        let mut f = FilterState::default();
        f.set_types(vec!["Torneira".into()]);
        f.set_statuses(vec![WaterStatus::Critical]);
        assert!(f.matches(&location("Torneira Lab", "Torneira", WaterStatus::Critical)));
        assert!(!f.matches(&location("Torneira Copa", "Torneira", WaterStatus::Good)));
        assert!(!f.matches(&location("Bebedouro A", "Bebedouro", WaterStatus::Critical)));
    }

    #[test]
    fn clear_resets_every_axis() {
        let mut f = FilterState::default();
        f.set_name("lab");
        f.set_types(vec!["Torneira".into()]);
        f.set_statuses(vec![WaterStatus::Good]);
        assert_eq!(f.active_count(), 3);

        f.clear();
        assert!(f.is_unrestricted());
        assert_eq!(f.active_count(), 0);
    }
}
