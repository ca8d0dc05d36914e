use std::sync::Arc;

use crate::{corpus::Corpus, services::providers::MovieProvider};

/// Shared application state.
///
/// The corpus is immutable after load, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<Corpus>,
    pub provider: Arc<dyn MovieProvider>,
}

impl AppState {
    pub fn new(corpus: Corpus, provider: Arc<dyn MovieProvider>) -> Self {
        Self {
            corpus: Arc::new(corpus),
            provider,
        }
    }
}
