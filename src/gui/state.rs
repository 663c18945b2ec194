use crate::{Dashboard, source::DatasetSource};

#[derive(Debug)]
pub struct AppState {
    pub source: DatasetSource,
    /// Set once the dataset has loaded; stays `None` if loading failed.
    pub dashboard: Option<Dashboard>,
}

impl AppState {
    pub fn new(source: DatasetSource) -> Self {
        Self {
            source,
            dashboard: None,
        }
    }
}
