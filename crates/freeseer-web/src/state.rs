use std::sync::Arc;

use freeseer_core::ConfigurationContext;

#[derive(Clone)]
pub struct AppState {
    pub context: Arc<ConfigurationContext>,
}

impl AppState {
    pub fn new(context: ConfigurationContext) -> Self {
        Self {
            context: Arc::new(context),
        }
    }
}
