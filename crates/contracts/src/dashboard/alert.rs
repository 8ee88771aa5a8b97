use serde::{Deserialize, Serialize};

use crate::catalog::{Location, WaterStatus};

/// Aviso de qualidade comprometida exibido uma única vez por seleção.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterAlert {
    pub location_name: String,
    pub status: WaterStatus,
}

impl WaterAlert {
    pub fn message(&self) -> String {
        format!(
            "Atenção! A qualidade da água em \"{}\" pode estar comprometida. \
             Evite o uso. Os gestores já foram notificados e estão tomando as \
             devidas providências.",
            self.location_name
        )
    }
}

/// Trava de alerta do painel: `armed` → `fired`, uma transição por seleção.
///
/// The check always runs against the UNFILTERED location list of the
/// selected sector: narrowing the dashboard view must never silence an
/// alert. Once fired, later checks stay quiet until [`AlertLatch::arm`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertLatch {
    shown: bool,
}

impl AlertLatch {
    /// Re-arm, as done on every new sector selection.
    pub fn arm(&mut self) {
        self.shown = false;
    }

    pub fn has_fired(&self) -> bool {
        self.shown
    }

    /// Evaluate the full sector list. A critical point wins over an
    /// attention point; all-good sectors leave the latch armed.
    pub fn check(&mut self, unfiltered: &[Location]) -> Option<WaterAlert> {
        if self.shown {
            return None;
        }
        let hit = unfiltered
            .iter()
            .find(|l| l.status == WaterStatus::Critical)
            .or_else(|| unfiltered.iter().find(|l| l.status == WaterStatus::Attention))?;
        self.shown = true;
        Some(WaterAlert {
            location_name: hit.name.clone(),
            status: hit.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(name: &str, status: WaterStatus) -> Location {
        Location {
            id: name.to_lowercase().replace(' ', "_"),
            name: name.into(),
            fixture_type: "Bebedouro".into(),
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
    fn fires_once_per_selection() {
        let locations = vec![location("Torneira Lab", WaterStatus::Critical)];
        let mut latch = AlertLatch::default();

        let first = latch.check(&locations);
        assert!(first.is_some());
        // Any number of further render checks stays silent.
        for _ in 0..5 {
            assert!(latch.check(&locations).is_none());
        }
    }

    #[test]
    fn prefers_critical_over_attention() {
        let locations = vec![
            location("Bebedouro Biblioteca", WaterStatus::Attention),
            location("Torneira Lab", WaterStatus::Critical),
        ];
        let mut latch = AlertLatch::default();
        let alert = latch.check(&locations).unwrap();
        assert_eq!(alert.location_name, "Torneira Lab");
        assert_eq!(alert.status, WaterStatus::Critical);
    }

    #[test]
    fn falls_back_to_first_attention() {
        let locations = vec![
            location("Bebedouro A", WaterStatus::Good),
            location("Bebedouro Biblioteca", WaterStatus::Attention),
            location("Torneira Copa", WaterStatus::Attention),
        ];
        let mut latch = AlertLatch::default();
        let alert = latch.check(&locations).unwrap();
        assert_eq!(alert.location_name, "Bebedouro Biblioteca");
    }

    #[test]
    fn all_good_stays_armed() {
        let locations = vec![location("Bebedouro A", WaterStatus::Good)];
        let mut latch = AlertLatch::default();
        assert!(latch.check(&locations).is_none());
        assert!(!latch.has_fired());
        // Still armed: a later check against a changed snapshot may fire.
        let worse = vec![location("Bebedouro A", WaterStatus::Attention)];
        assert!(latch.check(&worse).is_some());
    }

    #[test]
    fn rearming_allows_a_new_alert() {
        let locations = vec![location("Torneira Lab", WaterStatus::Critical)];
        let mut latch = AlertLatch::default();
        assert!(latch.check(&locations).is_some());

        latch.arm();
        assert!(latch.check(&locations).is_some());
    }

    #[test]
    fn filtering_never_suppresses_the_alert() {
        use crate::dashboard::{filter::FilterState, view_model::filter_and_sort};

        let locations = vec![
            location("Bebedouro A", WaterStatus::Good),
            location("Torneira Lab", WaterStatus::Critical),
        ];

        // A status filter that hides the critical point from the view.
        let mut filters = FilterState::default();
        filters.set_statuses(vec![WaterStatus::Good]);
        let visible = filter_and_sort(&locations, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Bebedouro A");

        // The check runs on the unfiltered list and still fires.
        let mut latch = AlertLatch::default();
        let alert = latch.check(&locations).unwrap();
        assert_eq!(alert.location_name, "Torneira Lab");
    }

    #[test]
    fn alert_message_names_the_location() {
        let alert = WaterAlert {
            location_name: "Torneira Laboratório X".into(),
            status: WaterStatus::Critical,
        };
        assert!(alert.message().contains("Torneira Laboratório X"));
        assert!(alert.message().starts_with("Atenção!"));
    }
}
