//! Result aggregation and search ranking for charging sites.
//!
//! [`summarize`] rolls charger records up into a [`ChargerSummary`];
//! [`SiteSearchIndex`] merges site-name matches with a zip code lookup into
//! one ordered result list.

pub mod aggregate;
pub mod display;
pub mod error;
pub mod index;
pub mod lookup;
pub mod query;

pub use aggregate::{summarize, summarize_cluster, ChargerSummary, SummaryTone};
pub use display::{ResultRow, RowStyle};
pub use error::{LookupError, SearchError};
pub use index::{ResultKind, SearchResult, SiteSearchIndex};
pub use lookup::{ZipDirectory, ZipLookup};
pub use query::{name_matches, zip_candidate, MAX_ZIP, MIN_ZIP};
