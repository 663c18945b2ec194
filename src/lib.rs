pub mod core;
pub mod dashboard;
pub mod models;
pub mod source;
pub mod view;

pub use dashboard::Dashboard;
pub use models::Project;
pub use source::{DatasetSource, SourceError};

#[cfg(feature = "gui")]
pub mod gui;
