use crate::config::Config;
use crate::dataset::Dataset;

/// Everything a request handler can see. Read-only after startup.
pub struct AppState {
    pub dataset: Dataset,
    pub config: Config,
}

impl AppState {
    pub fn new(dataset: Dataset, config: Config) -> Self {
        Self { dataset, config }
    }
}
