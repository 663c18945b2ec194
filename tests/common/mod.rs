#![allow(dead_code, unused_imports)]

mod fixtures;
mod strategies;
pub use fixtures::*;
pub use strategies::*;

// Re-export commonly used types from waterdash for tests
pub use waterdash::core::{
    Aggregates, Category, FilterField, FilterPredicates, InvestmentBracket, VisibilityToggles,
    aggregate, apply_filters,
};
pub use waterdash::{Dashboard, DatasetSource, Project, SourceError};
