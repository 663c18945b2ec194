pub mod aggregate;
pub mod filter;
pub mod format;
pub mod model;
pub mod store;
pub mod visibility;

pub use aggregate::{Aggregates, Buckets, aggregate};
pub use filter::{FilterField, FilterPredicates, InvestmentBracket, ParseBracketError, apply_filters};
pub use format::{date_or_na, format_billions, format_cost, format_currency, group_thousands, status_class};
pub use model::{Color, DEFAULT_TYPE_COLOR, KnownType, type_color};
pub use store::DatasetStore;
pub use visibility::{Category, VisibilityToggles};
