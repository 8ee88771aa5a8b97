use serde::{Deserialize, Serialize};

use crate::catalog::{Sector, WaterStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverviewLineKind {
    Critical,
    Attention,
    Summary,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewLine {
    pub kind: OverviewLineKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub critical: usize,
    pub attention: usize,
    pub good: usize,
}

/// Visão agregada do setor exibida ao gestor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewView {
    pub lines: Vec<OverviewLine>,
    pub counts: StatusCounts,
}

/// Rollup for the manager dashboard: one line per problem point in
/// registry order, then a summary of the remaining good points.
pub fn build_overview(sector: &Sector) -> OverviewView {
    let mut lines = Vec::new();
    let mut counts = StatusCounts::default();

    for location in &sector.locations {
        match location.status {
            WaterStatus::Critical => {
                counts.critical += 1;
                lines.push(OverviewLine {
                    kind: OverviewLineKind::Critical,
                    text: format!(
                        "🔴 CRÍTICO: {} ({})",
                        location.name, location.fixture_type
                    ),
                });
            }
            WaterStatus::Attention => {
                counts.attention += 1;
                lines.push(OverviewLine {
                    kind: OverviewLineKind::Attention,
                    text: format!(
                        "🟡 ATENÇÃO: {} ({})",
                        location.name, location.fixture_type
                    ),
                });
            }
            WaterStatus::Good => counts.good += 1,
        }
    }

    if sector.locations.is_empty() {
        lines.push(OverviewLine {
            kind: OverviewLineKind::Empty,
            text: "Nenhum ponto de coleta cadastrado para este setor.".into(),
        });
    } else if counts.critical == 0 && counts.attention == 0 {
        lines.push(OverviewLine {
            kind: OverviewLineKind::Summary,
            text: format!(
                "✅ Todos os {} ponto(s) de coleta estão com qualidade BOA.",
                counts.good
            ),
        });
    } else if counts.good > 0 {
        lines.push(OverviewLine {
            kind: OverviewLineKind::Summary,
            text: format!(
                "✅ {} outro(s) ponto(s) com qualidade BOA.",
                counts.good
            ),
        });
    }

    OverviewView { lines, counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Location;

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

    fn sector(locations: Vec<Location>) -> Sector {
        Sector {
            id: "ic".into(),
            name: "IC".into(),
            university_id: "ufba".into(),
            university_name: "UFBA".into(),
            logo_url: None,
            locations,
        }
    }

    #[test]
    fn mixed_sector_lists_problems_then_summary() {
        let view = build_overview(&sector(vec![
            location("Torneira Lab", WaterStatus::Critical),
            location("Bebedouro A", WaterStatus::Good),
            location("Bebedouro Biblioteca", WaterStatus::Attention),
        ]));
        assert_eq!(view.counts, StatusCounts { critical: 1, attention: 1, good: 1 });
        assert_eq!(view.lines.len(), 3);
        assert_eq!(view.lines[0].kind, OverviewLineKind::Critical);
        assert_eq!(view.lines[1].kind, OverviewLineKind::Attention);
        assert_eq!(
            view.lines[2].text,
            "✅ 1 outro(s) ponto(s) com qualidade BOA."
        );
    }

    #[test]
    fn all_good_sector_collapses_to_one_line() {
        let view = build_overview(&sector(vec![
            location("Bebedouro A", WaterStatus::Good),
            location("Bebedouro B", WaterStatus::Good),
        ]));
        assert_eq!(view.lines.len(), 1);
        assert_eq!(
            view.lines[0].text,
            "✅ Todos os 2 ponto(s) de coleta estão com qualidade BOA."
        );
    }

    #[test]
    fn empty_sector_reports_no_points() {
        let view = build_overview(&sector(vec![]));
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].kind, OverviewLineKind::Empty);
    }
}
