use crate::domain::AppConfig;
use crate::ports::{ImageGeneratorFactory, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: TemplateStore, G: ImageGeneratorFactory> {
    store: S,
    generators: G,
    config: AppConfig,
}

impl<S: TemplateStore, G: ImageGeneratorFactory> AppContext<S, G> {
    /// Create a new application context.
    pub fn new(store: S, generators: G, config: AppConfig) -> Self {
        Self { store, generators, config }
    }

    /// Get a reference to the template store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the image generator factory.
    pub fn generators(&self) -> &G {
        &self.generators
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
