//! Pass-through filter returning a configured status

use std::path::Path;

use serde_json::Value;

use crate::error::{ConfigError, FilterError};

use super::options::FilterOptions;
use super::Filter;

pub const IDENTIFIER: &str = "mohd_pdf_enhance.dummy";

/// Returns `result-status` without touching the document
#[derive(Debug, Clone)]
pub struct DummyFilter {
    result_status: bool,
}

impl DummyFilter {
    pub fn new(result_status: bool) -> Self {
        Self { result_status }
    }

    pub fn from_options(options: &Value) -> Result<Self, ConfigError> {
        let options = FilterOptions::new(IDENTIFIER, options)?;
        Ok(Self::new(options.required_bool("result-status")?))
    }
}

impl Filter for DummyFilter {
    fn name(&self) -> &str {
        IDENTIFIER
    }

    fn process(&mut self, _filename: &Path, _destination: &Path) -> Result<bool, FilterError> {
        Ok(self.result_status)
    }
}
