//! Document filters and the registry that builds them from settings.
//!
//! A filter receives the working file and reports whether it changed the
//! document. Options are parsed and validated when the filter is built, so
//! a misconfigured filter fails before any file is touched.

pub mod dummy;
pub mod highlight_sale_order;
mod options;
pub mod random_status;

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use crate::error::{ConfigError, EnhanceError, FilterError};

pub use dummy::DummyFilter;
pub use highlight_sale_order::HighlightSaleOrder;
pub use random_status::RandomStatusFilter;

/// A single fix applied to a PDF
pub trait Filter {
    /// Identifier this filter was registered under
    fn name(&self) -> &str;

    /// Process `filename` and write the result to `destination`.
    ///
    /// Returns true when the document was modified. The two paths may be
    /// the same file.
    fn process(&mut self, filename: &Path, destination: &Path) -> Result<bool, FilterError>;
}

/// Builds a filter from its options object
pub type FilterFactory = fn(&Value) -> Result<Box<dyn Filter>, ConfigError>;

/// Maps filter identifiers to their factories
#[derive(Default)]
pub struct FilterRegistry {
    factories: BTreeMap<String, FilterFactory>,
}

impl FilterRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every filter shipped with this crate
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(dummy::IDENTIFIER, |options| {
            Ok(Box::new(DummyFilter::from_options(options)?))
        });
        registry.register(random_status::IDENTIFIER, |options| {
            Ok(Box::new(RandomStatusFilter::from_options(options)?))
        });
        registry.register(highlight_sale_order::IDENTIFIER, |options| {
            Ok(Box::new(HighlightSaleOrder::from_options(options)?))
        });
        registry
    }

    /// Register (or replace) a factory for `identifier`
    pub fn register(&mut self, identifier: &str, factory: FilterFactory) {
        self.factories.insert(identifier.to_string(), factory);
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }

    /// Registered identifiers, sorted
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Build the filter registered under `identifier`
    pub fn build(&self, identifier: &str, options: &Value) -> Result<Box<dyn Filter>, EnhanceError> {
        let factory = self
            .factories
            .get(identifier)
            .ok_or_else(|| EnhanceError::UnknownFilter(identifier.to_string()))?;
        Ok(factory(options)?)
    }
}
