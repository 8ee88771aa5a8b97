use serde::{Deserialize, Serialize};

// ============================================================================
// Water status
// ============================================================================

/// Classificação de qualidade da água de um ponto de coleta.
///
/// Sort order is `Critical < Attention < Good` so that problem points
/// surface first in every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterStatus {
    Good,
    Attention,
    Critical,
}

impl WaterStatus {
    /// Rank used for ascending sort: critical first.
    pub fn rank(&self) -> u8 {
        match self {
            WaterStatus::Critical => 0,
            WaterStatus::Attention => 1,
            WaterStatus::Good => 2,
        }
    }

    /// Human label shown on cards and reports.
    pub fn label(&self) -> &'static str {
        match self {
            WaterStatus::Good => "Boa",
            WaterStatus::Attention => "Atenção",
            WaterStatus::Critical => "Crítico - Imprópria",
        }
    }

    /// CSS class hook for the view layer.
    pub fn css_class(&self) -> &'static str {
        match self {
            WaterStatus::Good => "status-good",
            WaterStatus::Attention => "status-attention",
            WaterStatus::Critical => "status-critical",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WaterStatus::Good => "good",
            WaterStatus::Attention => "attention",
            WaterStatus::Critical => "critical",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "good" => Some(WaterStatus::Good),
            "attention" => Some(WaterStatus::Attention),
            "critical" => Some(WaterStatus::Critical),
            _ => None,
        }
    }

    pub fn all() -> [WaterStatus; 3] {
        [
            WaterStatus::Good,
            WaterStatus::Attention,
            WaterStatus::Critical,
        ]
    }
}

// ============================================================================
// Registry entities
// ============================================================================

/// Ponto de coleta de água (bebedouro, torneira, vaso sanitário...).
///
/// Measurement fields are optional per fixture: a `None` means the reading
/// does not apply to this fixture and must be omitted from display, never
/// shown as zero. Each field is nullable independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub fixture_type: String,
    #[serde(rename = "lastAnalysis")]
    pub last_analysis: Option<String>,
    #[serde(rename = "lastCleaning")]
    pub last_cleaning: Option<String>,
    #[serde(rename = "chlorine")]
    pub chlorine_mg_per_l: Option<f64>,
    #[serde(rename = "fecalColiforms")]
    pub fecal_coliforms_cfu_per_100ml: Option<f64>,
    #[serde(rename = "turbidity")]
    pub turbidity_ntu: Option<f64>,
    #[serde(rename = "pH")]
    pub ph: Option<f64>,
    pub status: WaterStatus,
}

/// Setor/instituto de uma universidade. Owns its collection points
/// exclusively; `locations` order is the registry order that stable sorts
/// and reports rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: String,
    pub name: String,
    #[serde(rename = "universityId")]
    pub university_id: String,
    #[serde(rename = "universityName")]
    pub university_name: String,
    #[serde(rename = "logo")]
    pub logo_url: Option<String>,
    pub locations: Vec<Location>,
}

/// Universidade; references its sectors by id only (lookup via [`Catalog`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    pub name: String,
    #[serde(rename = "logo")]
    pub logo_url: Option<String>,
    #[serde(rename = "institutes")]
    pub institute_ids: Vec<String>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Results of the landing-page global search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSearchResults {
    pub universities: Vec<University>,
    pub sectors: Vec<Sector>,
}

impl GlobalSearchResults {
    pub fn is_empty(&self) -> bool {
        self.universities.is_empty() && self.sectors.is_empty()
    }
}

/// The full location registry, loaded once at startup and read-only after.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub universities: Vec<University>,
    pub sectors: Vec<Sector>,
}

impl Catalog {
    pub fn university(&self, id: &str) -> Option<&University> {
        self.universities.iter().find(|u| u.id == id)
    }

    pub fn sector(&self, id: &str) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.id == id)
    }

    pub fn sectors_of(&self, university_id: &str) -> Vec<&Sector> {
        self.sectors
            .iter()
            .filter(|s| s.university_id == university_id)
            .collect()
    }

    /// Sector search within one university: case-insensitive match on the
    /// sector name or id.
    pub fn search_sectors_of(&self, university_id: &str, query: &str) -> Vec<&Sector> {
        let q = query.to_lowercase();
        self.sectors
            .iter()
            .filter(|s| {
                s.university_id == university_id
                    && (s.name.to_lowercase().contains(&q) || s.id.to_lowercase().contains(&q))
            })
            .collect()
    }

    /// Landing-page search across universities and sectors.
    ///
    /// A sector matches on its name, or on its id once the query has at
    /// least two characters (avoids every sector matching on one letter).
    /// Sectors whose university already matched are not repeated.
    pub fn global_search(&self, query: &str) -> GlobalSearchResults {
        let q = query.to_lowercase();

        let universities: Vec<University> = self
            .universities
            .iter()
            .filter(|u| u.name.to_lowercase().contains(&q))
            .cloned()
            .collect();

        let sectors: Vec<Sector> = self
            .sectors
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&q)
                    || (q.len() >= 2 && s.id.to_lowercase().contains(&q))
            })
            .filter(|s| !universities.iter().any(|u| u.id == s.university_id))
            .cloned()
            .collect();

        GlobalSearchResults {
            universities,
            sectors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str, status: WaterStatus) -> Location {
        Location {
            id: id.into(),
            name: format!("Ponto {id}"),
            fixture_type: "Bebedouro".into(),
            last_analysis: Some("01/07/2025".into()),
            last_cleaning: Some("25/06/2025".into()),
            chlorine_mg_per_l: Some(0.5),
            fecal_coliforms_cfu_per_100ml: Some(0.0),
            turbidity_ntu: Some(0.8),
            ph: Some(7.2),
            status,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog {
            universities: vec![University {
                id: "ufba".into(),
                name: "Universidade Federal da Bahia (UFBA)".into(),
                logo_url: None,
                institute_ids: vec!["ic_ufba".into()],
            }],
            sectors: vec![Sector {
                id: "ic_ufba".into(),
                name: "Instituto de Computação (IC) - UFBA".into(),
                university_id: "ufba".into(),
                university_name: "UFBA".into(),
                logo_url: None,
                locations: vec![location("a", WaterStatus::Good)],
            }],
        }
    }

    #[test]
    fn status_rank_orders_critical_first() {
        assert!(WaterStatus::Critical.rank() < WaterStatus::Attention.rank());
        assert!(WaterStatus::Attention.rank() < WaterStatus::Good.rank());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&WaterStatus::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::from_str::<WaterStatus>("\"attention\"").unwrap(),
            WaterStatus::Attention
        );
    }

    #[test]
    fn location_deserializes_null_measurements() {
        let json = r#"{
            "id": "ic_vaso_fem_1",
            "name": "Vaso Sanitário Feminino (1º Andar)",
            "type": "Vaso Sanitário",
            "lastAnalysis": null,
            "lastCleaning": "02/07/2025",
            "chlorine": null,
            "fecalColiforms": null,
            "turbidity": null,
            "pH": null,
            "status": "good"
        }"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert!(loc.chlorine_mg_per_l.is_none());
        assert!(loc.ph.is_none());
        assert_eq!(loc.status, WaterStatus::Good);
    }

    #[test]
    fn global_search_matches_university_by_name() {
        let catalog = sample_catalog();
        let results = catalog.global_search("bahia");
        assert_eq!(results.universities.len(), 1);
        // The sector belongs to a matched university, so it is not repeated.
        assert!(results.sectors.is_empty());
    }

    #[test]
    fn global_search_matches_sector_by_id_with_two_chars() {
        let catalog = sample_catalog();
        assert_eq!(catalog.global_search("ic").sectors.len(), 1);
        // One character is too short for id matching and the names contain no "z".
        assert!(catalog.global_search("z").is_empty());
    }

    #[test]
    fn sectors_of_filters_by_university() {
        let catalog = sample_catalog();
        assert_eq!(catalog.sectors_of("ufba").len(), 1);
        assert!(catalog.sectors_of("usp").is_empty());
    }
}
