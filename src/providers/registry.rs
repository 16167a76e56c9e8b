use std::collections::HashMap;
use std::sync::Arc;

use super::DataProvider;
use crate::errors::FetchError;

/// Identity-keyed store of data providers.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn DataProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider under its own ID. Re-registering an ID
    /// replaces the previous provider, last write wins.
    pub fn register(&mut self, provider: Arc<dyn DataProvider>) {
        self.providers.insert(provider.id().to_string(), provider);
    }

    pub fn get(&self, id: &str) -> Result<Arc<dyn DataProvider>, FetchError> {
        self.providers
            .get(id)
            .cloned()
            .ok_or_else(|| FetchError::ProviderNotFound(id.to_string()))
    }
}
