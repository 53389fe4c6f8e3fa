//! Render-ready rows for the search result list.

use chargefinder_core::{Site, ZipLocation};
use serde::Serialize;

use crate::aggregate::{summarize, SummaryTone};
use crate::index::{ResultKind, SearchResult};

/// How a renderer should style a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStyle {
    /// A site with at least one free charger.
    SiteAvailable,
    /// A site where nothing is free; drawn muted.
    SiteUnavailable,
    Location,
}

/// Two-line list row: title on top, detail underneath.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub key: String,
    pub kind: ResultKind,
    pub title: String,
    pub subtitle: String,
    pub style: RowStyle,
    /// Fraction of chargers available, for a progress indicator. Sites only.
    pub progress: Option<f64>,
}

impl ResultRow {
    #[must_use]
    pub fn from_result(result: &SearchResult<'_>) -> Self {
        match result {
            SearchResult::Site(site) => Self::for_site(site),
            SearchResult::Location(location) => Self::for_location(location),
        }
    }

    #[must_use]
    pub fn for_site(site: &Site) -> Self {
        let summary = summarize(&site.chargers);
        let style = match summary.tone() {
            SummaryTone::Available => RowStyle::SiteAvailable,
            SummaryTone::Unavailable => RowStyle::SiteUnavailable,
        };
        Self {
            key: site.id.clone(),
            kind: ResultKind::Site,
            title: site.name.clone(),
            subtitle: summary.description(),
            style,
            progress: Some(summary.fraction_available()),
        }
    }

    #[must_use]
    pub fn for_location(location: &ZipLocation) -> Self {
        Self {
            key: location.zipcode.clone(),
            kind: ResultKind::Location,
            title: location.zipcode.clone(),
            subtitle: format!("{}, {}", location.city, location.state_abbr),
            style: RowStyle::Location,
            progress: None,
        }
    }
}
