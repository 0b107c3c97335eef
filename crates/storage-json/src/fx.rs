use std::path::{Path, PathBuf};

use salesfx_core::fx::{FxRepositoryTrait, Rate};
use salesfx_core::Result;

use crate::utils::read_json_list;

/// Rate table backed by a JSON array of `{"from", "to", "rate"}` objects.
#[derive(Debug, Clone)]
pub struct JsonFxRepository {
    path: PathBuf,
}

impl JsonFxRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FxRepositoryTrait for JsonFxRepository {
    fn get_rates(&self) -> Result<Vec<Rate>> {
        let rates: Vec<Rate> = read_json_list(&self.path)?;

        for rate in rates.iter().filter(|r| r.rate.is_zero()) {
            log::warn!(
                "Rate {} -> {} is zero and cannot be used as an inverse",
                rate.from,
                rate.to
            );
        }

        log::info!("Loaded {} rates from {}", rates.len(), self.path.display());
        Ok(rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use salesfx_core::errors::{DataSourceError, Error};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_rates_in_file_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rates.json");
        fs::write(
            &path,
            r#"[
                {"from": "EUR", "to": "USD", "rate": 1.359},
                {"from": "CAD", "to": "EUR", "rate": 0.732},
                {"from": "EUR", "to": "USD", "rate": 1.4}
            ]"#,
        )
        .unwrap();

        let rates = JsonFxRepository::new(&path).get_rates().unwrap();
        assert_eq!(
            rates,
            vec![
                Rate::new("EUR", "USD", dec!(1.359)),
                Rate::new("CAD", "EUR", dec!(0.732)),
                Rate::new("EUR", "USD", dec!(1.4)),
            ]
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let repo = JsonFxRepository::new(dir.path().join("absent.json"));
        assert!(matches!(
            repo.get_rates(),
            Err(Error::DataSource(DataSourceError::NotFound(_)))
        ));
    }

    #[test]
    fn test_invalid_json_is_parse_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rates.json");
        fs::write(&path, r#"[{"from": "EUR", "to": "USD"}]"#).unwrap();

        assert!(matches!(
            JsonFxRepository::new(&path).get_rates(),
            Err(Error::DataSource(DataSourceError::ParseFailed(_)))
        ));
    }

    #[test]
    fn test_zero_rate_is_loaded_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rates.json");
        fs::write(&path, r#"[{"from": "EUR", "to": "USD", "rate": 0}]"#).unwrap();

        let rates = JsonFxRepository::new(&path).get_rates().unwrap();
        assert!(rates[0].rate.is_zero());
    }
}
