use std::sync::Arc;

use crate::domain::ports::outbound::ProblemCatalog;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<dyn ProblemCatalog>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ProblemCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &dyn ProblemCatalog {
        self.catalog.as_ref()
    }
}
