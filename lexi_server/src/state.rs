//! Shared application state handed to every request handler.

use std::sync::Arc;

use lexi_core::clock::Clock;
use lexi_core::ProgressStore;

use crate::dataset::Dataset;
use crate::dictionary::DictionaryService;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub dictionary: Arc<DictionaryService>,
    pub progress: Arc<dyn ProgressStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        dataset: Arc<Dataset>,
        dictionary: Arc<DictionaryService>,
        progress: Arc<dyn ProgressStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            dataset,
            dictionary,
            progress,
            clock,
        }
    }
}
