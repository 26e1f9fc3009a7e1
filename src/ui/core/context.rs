use std::sync::Arc;

use crate::{backend::TriviaBackend, config::Config, icons::IconService, logger::Logger};

/// Everything the root component needs from the outside world
pub struct AppContext {
    pub config: Config,
    pub backend: Arc<dyn TriviaBackend>,
    pub icons: IconService,
    pub logger: Logger,
}

impl AppContext {
    pub fn new(config: Config, backend: Arc<dyn TriviaBackend>, logger: Logger) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        Self {
            config,
            backend,
            icons,
            logger,
        }
    }
}
