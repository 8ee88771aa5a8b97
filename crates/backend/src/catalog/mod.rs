use contracts::catalog::{Catalog, Sector};
use once_cell::sync::OnceCell;

use crate::shared::config::{resolve_path, Config};

/// Registro embutido no binário; usado quando nenhum arquivo é fornecido.
const CATALOG_SEED: &str = include_str!("catalog_seed.json");

static CATALOG: OnceCell<Catalog> = OnceCell::new();

/// Load the location registry once at startup. The configured path (or a
/// `catalog.json` next to the executable) replaces the embedded seed; the
/// registry is immutable afterwards.
pub fn initialize_catalog(config: &Config) -> anyhow::Result<()> {
    let catalog = match find_override_file(config) {
        Some(path) => {
            tracing::info!("Loading catalog from: {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        }
        None => {
            tracing::info!("Using embedded catalog seed");
            serde_json::from_str(CATALOG_SEED)?
        }
    };
    CATALOG
        .set(catalog)
        .map_err(|_| anyhow::anyhow!("Catalog already initialized"))?;
    Ok(())
}

fn find_override_file(config: &Config) -> Option<std::path::PathBuf> {
    let configured = config.catalog.path.as_deref().unwrap_or("catalog.json");
    let path = resolve_path(configured);
    path.exists().then_some(path)
}

pub fn get_catalog() -> &'static Catalog {
    CATALOG.get().expect("Catalog has not been initialized")
}

pub fn get_sector(id: &str) -> Option<&'static Sector> {
    get_catalog().sector(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::WaterStatus;

    #[test]
    fn embedded_seed_parses() {
        let catalog: Catalog = serde_json::from_str(CATALOG_SEED).unwrap();
        assert_eq!(catalog.universities.len(), 1);
        assert_eq!(catalog.sectors.len(), 1);

        let sector = catalog.sector("ic_ufba").unwrap();
        assert_eq!(sector.locations.len(), 9);
        assert_eq!(sector.university_id, "ufba");
    }

    #[test]
    fn seed_has_one_critical_point() {
        let catalog: Catalog = serde_json::from_str(CATALOG_SEED).unwrap();
        let sector = catalog.sector("ic_ufba").unwrap();
        let critical: Vec<_> = sector
            .locations
            .iter()
            .filter(|l| l.status == WaterStatus::Critical)
            .collect();
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].name, "Torneira Laboratório X");
    }

    #[test]
    fn toilets_have_no_chemical_readings() {
        let catalog: Catalog = serde_json::from_str(CATALOG_SEED).unwrap();
        let sector = catalog.sector("ic_ufba").unwrap();
        for loc in sector
            .locations
            .iter()
            .filter(|l| l.fixture_type == "Vaso Sanitário")
        {
            assert!(loc.chlorine_mg_per_l.is_none());
            assert!(loc.ph.is_none());
        }
    }
}
