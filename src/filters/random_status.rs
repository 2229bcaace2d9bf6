//! Filter returning a pseudo-random status, used to exercise both chain branches

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

use crate::error::{ConfigError, FilterError};

use super::options::FilterOptions;
use super::Filter;

pub const IDENTIFIER: &str = "mohd_pdf_enhance.filters.random_status";

pub struct RandomStatusFilter {
    rng: StdRng,
}

impl RandomStatusFilter {
    /// Deterministic sequence for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Options: optional `seed` (non-negative integer)
    pub fn from_options(options: &Value) -> Result<Self, ConfigError> {
        let options = FilterOptions::new(IDENTIFIER, options)?;
        Ok(match options.optional_u64("seed")? {
            Some(seed) => Self::with_seed(seed),
            None => Self::from_entropy(),
        })
    }
}

impl Filter for RandomStatusFilter {
    fn name(&self) -> &str {
        IDENTIFIER
    }

    fn process(&mut self, _filename: &Path, _destination: &Path) -> Result<bool, FilterError> {
        Ok(self.rng.gen_bool(0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draw(filter: &mut RandomStatusFilter, count: usize) -> Vec<bool> {
        let path = Path::new("unused.pdf");
        (0..count)
            .map(|_| filter.process(path, path).unwrap())
            .collect()
    }

    #[test]
    fn test_seeded_sequence_is_reproducible() {
        let mut a = RandomStatusFilter::from_options(&json!({"seed": 7})).unwrap();
        let mut b = RandomStatusFilter::with_seed(7);
        assert_eq!(draw(&mut a, 32), draw(&mut b, 32));
    }

    #[test]
    fn test_both_outcomes_occur() {
        let results = draw(&mut RandomStatusFilter::with_seed(1), 64);
        assert!(results.contains(&true));
        assert!(results.contains(&false));
    }

    #[test]
    fn test_rejects_negative_seed() {
        assert!(RandomStatusFilter::from_options(&json!({"seed": -1})).is_err());
        assert!(RandomStatusFilter::from_options(&json!({})).is_ok());
    }
}
