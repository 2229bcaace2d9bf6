use std::path::Path;

use log::{debug, info};

use crate::config::Settings;
use crate::error::EnhanceError;
use crate::filters::{Filter, FilterRegistry};

/// Filters resolved from settings, run in configured order
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Resolve every configured module and build it with its options.
    /// Fails on the first unknown identifier or invalid options.
    pub fn from_settings(settings: &Settings, registry: &FilterRegistry) -> Result<Self, EnhanceError> {
        let mut chain = Self::new();
        for identifier in &settings.modules {
            let filter = registry.build(identifier, &settings.options_for(identifier))?;
            chain.push(filter);
        }
        Ok(chain)
    }

    /// Filters are applied in the order they are added
    pub fn push(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter on `working`, in place.
    ///
    /// Returns true if any filter modified the document. Every filter runs
    /// even after one reported a change; the first error aborts the chain.
    pub fn run(&mut self, working: &Path) -> Result<bool, EnhanceError> {
        let mut document_processed = false;
        for filter in &mut self.filters {
            info!("Executing {}.process", filter.name());
            let changed = filter
                .process(working, working)
                .map_err(|source| EnhanceError::FilterExecution {
                    filter: filter.name().to_string(),
                    source,
                })?;
            if changed {
                debug!("Filter {}.process was executed", filter.name());
                document_processed = true;
            } else {
                debug!("Filter {}.process was not executed", filter.name());
            }
        }
        Ok(document_processed)
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use crate::filters::DummyFilter;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records each call and returns a scripted result
    struct Scripted {
        name: String,
        result: Result<bool, ()>,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl Filter for Scripted {
        fn name(&self) -> &str {
            &self.name
        }

        fn process(&mut self, _filename: &Path, _destination: &Path) -> Result<bool, FilterError> {
            self.calls.borrow_mut().push(self.name.clone());
            self.result
                .map_err(|_| FilterError::Render(format!("{} failed", self.name)))
        }
    }

    fn scripted(name: &str, result: Result<bool, ()>, calls: &Rc<RefCell<Vec<String>>>) -> Box<dyn Filter> {
        Box::new(Scripted {
            name: name.to_string(),
            result,
            calls: Rc::clone(calls),
        })
    }

    #[test]
    fn test_empty_chain_processes_nothing() {
        let mut chain = FilterChain::new();
        assert!(chain.is_empty());
        assert!(!chain.run(Path::new("working.pdf")).unwrap());
    }

    #[test]
    fn test_results_are_ored() {
        let mut chain = FilterChain::new();
        chain.push(Box::new(DummyFilter::new(false)));
        chain.push(Box::new(DummyFilter::new(true)));
        chain.push(Box::new(DummyFilter::new(false)));
        assert!(chain.run(Path::new("working.pdf")).unwrap());

        let mut all_false = FilterChain::new();
        all_false.push(Box::new(DummyFilter::new(false)));
        all_false.push(Box::new(DummyFilter::new(false)));
        assert!(!all_false.run(Path::new("working.pdf")).unwrap());
    }

    #[test]
    fn test_runs_in_order_without_short_circuit() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut chain = FilterChain::new();
        chain.push(scripted("first", Ok(true), &calls));
        chain.push(scripted("second", Ok(false), &calls));
        chain.push(scripted("third", Ok(true), &calls));

        assert!(chain.run(Path::new("working.pdf")).unwrap());
        assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_error_aborts_remaining_filters() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut chain = FilterChain::new();
        chain.push(scripted("first", Ok(true), &calls));
        chain.push(scripted("broken", Err(()), &calls));
        chain.push(scripted("never", Ok(true), &calls));

        let result = chain.run(Path::new("working.pdf"));
        assert!(matches!(
            result,
            Err(EnhanceError::FilterExecution { ref filter, .. }) if filter == "broken"
        ));
        assert_eq!(*calls.borrow(), vec!["first", "broken"]);
    }

    #[test]
    fn test_from_settings_resolves_in_order() {
        let settings = Settings::from_json(
            r#"{
                "modules": ["mohd_pdf_enhance.dummy", "mohd_pdf_enhance.filters.random_status"],
                "mohd_pdf_enhance.dummy": {"result-status": false},
                "mohd_pdf_enhance.filters.random_status": {"seed": 3}
            }"#,
        )
        .unwrap();
        let chain = FilterChain::from_settings(&settings, &FilterRegistry::builtin()).unwrap();
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_from_settings_unknown_module() {
        let settings = Settings::from_json(r#"{"modules": ["os.system"]}"#).unwrap();
        let result = FilterChain::from_settings(&settings, &FilterRegistry::builtin());
        assert!(matches!(result, Err(EnhanceError::UnknownFilter(id)) if id == "os.system"));
    }
}
