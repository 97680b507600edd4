use crate::extractor::{LanguageDetector, WhatlangDetector};
use std::sync::Arc;

/// Shared, read-only state for the web handlers. Requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn LanguageDetector>,
}

impl AppState {
    pub fn new(detector: Arc<dyn LanguageDetector>) -> Self {
        Self { detector }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(WhatlangDetector))
    }
}
