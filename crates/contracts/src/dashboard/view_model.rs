use super::filter::FilterState;
use crate::catalog::{Location, Sector, WaterStatus};

/// Uma leitura presente, já formatada com a unidade para exibição.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub label: &'static str,
    pub value: String,
}

/// Registro de exibição de um ponto de coleta.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationCard {
    pub id: String,
    pub name: String,
    pub fixture_type: String,
    pub status: WaterStatus,
    pub status_label: &'static str,
    pub css_class: &'static str,
    pub last_analysis: String,
    pub last_cleaning: String,
    pub measurements: Vec<Measurement>,
}

/// Resultado puro da projeção (setor, filtros) → painel.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub title: String,
    pub cards: Vec<LocationCard>,
    pub empty_message: Option<String>,
}

/// Apply the filter conjunction, then sort ascending by status rank.
///
/// The sort must be stable: locations with equal status keep their registry
/// order, which is what makes the output deterministic.
pub fn filter_and_sort<'a>(locations: &'a [Location], filters: &FilterState) -> Vec<&'a Location> {
    let mut kept: Vec<&Location> = locations.iter().filter(|l| filters.matches(l)).collect();
    kept.sort_by_key(|l| l.status.rank());
    kept
}

fn card_for(location: &Location) -> LocationCard {
    let mut measurements = Vec::new();
    if let Some(v) = location.chlorine_mg_per_l {
        measurements.push(Measurement {
            label: "Nível de Cloro",
            value: format!("{v} mg/L"),
        });
    }
    if let Some(v) = location.fecal_coliforms_cfu_per_100ml {
        measurements.push(Measurement {
            label: "Coliformes Fecais",
            value: format!("{v} UFC/100mL"),
        });
    }
    if let Some(v) = location.turbidity_ntu {
        measurements.push(Measurement {
            label: "Turbidez",
            value: format!("{v} NTU"),
        });
    }
    if let Some(v) = location.ph {
        measurements.push(Measurement {
            label: "pH",
            value: format!("{v}"),
        });
    }

    LocationCard {
        id: location.id.clone(),
        name: location.name.clone(),
        fixture_type: location.fixture_type.clone(),
        status: location.status,
        status_label: location.status.label(),
        css_class: location.status.css_class(),
        last_analysis: location.last_analysis.clone().unwrap_or_else(|| "N/A".into()),
        last_cleaning: location.last_cleaning.clone().unwrap_or_else(|| "N/A".into()),
        measurements,
    }
}

/// Project a sector through the current filters into display records.
///
/// Pure with respect to its inputs; the empty filtered list yields a
/// placeholder message instead of an empty card grid.
pub fn build_dashboard(sector: &Sector, filters: &FilterState) -> DashboardView {
    let cards: Vec<LocationCard> = filter_and_sort(&sector.locations, filters)
        .into_iter()
        .map(card_for)
        .collect();

    let empty_message = cards.is_empty().then(|| {
        "Nenhum ponto de coleta corresponde aos filtros selecionados.".to_string()
    });

    DashboardView {
        title: format!("Qualidade da Água: {}", sector.name),
        cards,
        empty_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str, name: &str, fixture_type: &str, status: WaterStatus) -> Location {
        Location {
            id: id.into(),
            name: name.into(),
            fixture_type: fixture_type.into(),
            last_analysis: Some("01/07/2025".into()),
            last_cleaning: Some("25/06/2025".into()),
            chlorine_mg_per_l: Some(0.5),
            fecal_coliforms_cfu_per_100ml: Some(0.0),
            turbidity_ntu: Some(0.8),
            ph: Some(7.2),
            status,
        }
    }

    fn sector_abc() -> Sector {
        Sector {
            id: "ic".into(),
            name: "Instituto de Computação".into(),
            university_id: "ufba".into(),
            university_name: "UFBA".into(),
            logo_url: None,
            locations: vec![
                location("a", "A", "Torneira", WaterStatus::Critical),
                location("b", "B", "Bebedouro", WaterStatus::Good),
                location("c", "C", "Bebedouro", WaterStatus::Attention),
            ],
        }
    }

    #[test]
    fn empty_filter_keeps_full_registry() {
        let sector = sector_abc();
        let kept = filter_and_sort(&sector.locations, &FilterState::default());
        assert_eq!(kept.len(), sector.locations.len());
    }

    #[test]
    fn sorts_critical_attention_good() {
        let sector = sector_abc();
        let view = build_dashboard(&sector, &FilterState::default());
        let ids: Vec<&str> = view.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "c", "b"]);
    }

    #[test]
    fn sort_is_stable_within_equal_status() {
        let sector = Sector {
            locations: vec![
                location("g1", "Primeiro", "Bebedouro", WaterStatus::Good),
                location("c1", "Crítico", "Torneira", WaterStatus::Critical),
                location("g2", "Segundo", "Bebedouro", WaterStatus::Good),
                location("g3", "Terceiro", "Torneira", WaterStatus::Good),
            ],
            ..sector_abc()
        };
        let kept = filter_and_sort(&sector.locations, &FilterState::default());
        let ids: Vec<&str> = kept.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["c1", "g1", "g2", "g3"]);
    }

    #[test]
    fn status_filter_keeps_only_matching() {
        let sector = sector_abc();
        let mut filters = FilterState::default();
        filters.set_statuses(vec![WaterStatus::Good]);
        let view = build_dashboard(&sector, &filters);
        let ids: Vec<&str> = view.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b"]);
        assert!(view.empty_message.is_none());
    }

    #[test]
    fn no_match_yields_placeholder() {
        let sector = sector_abc();
        let mut filters = FilterState::default();
        filters.set_name("inexistente");
        let view = build_dashboard(&sector, &filters);
        assert!(view.cards.is_empty());
        assert_eq!(
            view.empty_message.as_deref(),
            Some("Nenhum ponto de coleta corresponde aos filtros selecionados.")
        );
    }

    #[test]
    fn null_measurements_are_omitted_not_zeroed() {
        let sector = Sector {
            locations: vec![Location {
                chlorine_mg_per_l: None,
                fecal_coliforms_cfu_per_100ml: None,
                turbidity_ntu: Some(1.5),
                ph: None,
                ..location("v", "Vaso Sanitário Térreo", "Vaso Sanitário", WaterStatus::Good)
            }],
            ..sector_abc()
        };
        let view = build_dashboard(&sector, &FilterState::default());
        let card = &view.cards[0];
        assert_eq!(card.measurements.len(), 1);
        assert_eq!(card.measurements[0].label, "Turbidez");
        assert_eq!(card.measurements[0].value, "1.5 NTU");
    }

    #[test]
    fn card_carries_status_label_and_class() {
        let sector = sector_abc();
        let view = build_dashboard(&sector, &FilterState::default());
        assert_eq!(view.cards[0].status_label, "Crítico - Imprópria");
        assert_eq!(view.cards[0].css_class, "status-critical");
        assert_eq!(view.title, "Qualidade da Água: Instituto de Computação");
    }
}
