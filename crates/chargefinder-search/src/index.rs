//! Per-screen search controller over a fixed candidate set of sites.

use chargefinder_core::{Site, ZipLocation};
use serde::Serialize;

use crate::aggregate::{summarize, ChargerSummary};
use crate::display::ResultRow;
use crate::error::SearchError;
use crate::lookup::ZipLookup;
use crate::query::{name_matches, zip_candidate};

/// Discriminant of a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Site,
    Location,
}

/// One entry in the result list: a matching site or a zip code location.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<'a> {
    Site(&'a Site),
    Location(ZipLocation),
}

impl SearchResult<'_> {
    /// List identity: the site id or the zip code.
    ///
    /// Site ids are never zip-shaped, so the two key spaces cannot collide.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            SearchResult::Site(site) => &site.id,
            SearchResult::Location(location) => &location.zipcode,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ResultKind {
        match self {
            SearchResult::Site(_) => ResultKind::Site,
            SearchResult::Location(_) => ResultKind::Location,
        }
    }

    /// Fresh charger summary for a site result; `None` for locations.
    #[must_use]
    pub fn summary(&self) -> Option<ChargerSummary> {
        match self {
            SearchResult::Site(site) => Some(summarize(&site.chargers)),
            SearchResult::Location(_) => None,
        }
    }
}

type SelectHandler<'a> = Box<dyn FnMut(&SearchResult<'a>) + 'a>;

/// Owns the current query and the result list derived from it.
///
/// The candidate sites are borrowed for the lifetime of the screen and never
/// modified. Every query change recomputes the result list from scratch.
pub struct SiteSearchIndex<'a, L> {
    sites: &'a [Site],
    lookup: L,
    query: String,
    results: Vec<SearchResult<'a>>,
    on_select: Option<SelectHandler<'a>>,
}

impl<'a, L: ZipLookup> SiteSearchIndex<'a, L> {
    #[must_use]
    pub fn new(sites: &'a [Site], lookup: L) -> Self {
        Self {
            sites,
            lookup,
            query: String::new(),
            results: Vec::new(),
            on_select: None,
        }
    }

    /// Register the callback invoked by [`SiteSearchIndex::select`].
    #[must_use]
    pub fn with_on_select<F>(mut self, handler: F) -> Self
    where
        F: FnMut(&SearchResult<'a>) + 'a,
    {
        self.on_select = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[SearchResult<'a>] {
        &self.results
    }

    /// Recompute the result list for a new query.
    ///
    /// Matching sites come first in candidate order, followed by at most one
    /// zip code location. An empty query yields no results. Sites without
    /// chargers are never returned.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Lookup`] when the zip lookup collaborator fails.
    /// The query is still recorded and the result list is left empty.
    pub fn on_query_change(&mut self, query: &str) -> Result<&[SearchResult<'a>], SearchError> {
        query.clone_into(&mut self.query);
        self.results.clear();

        if query.is_empty() {
            tracing::debug!("empty query; search suppressed");
            return Ok(&self.results);
        }

        let mut results: Vec<SearchResult<'a>> = self
            .sites
            .iter()
            .filter(|site| site.has_chargers() && name_matches(&site.name, query))
            .map(SearchResult::Site)
            .collect();
        let site_matches = results.len();

        let zipcode = zip_candidate(query);
        if let Some(zipcode) = zipcode {
            match self.lookup.lookup(zipcode) {
                Ok(Some(location)) => results.push(SearchResult::Location(location)),
                Ok(None) => {}
                Err(source) => {
                    tracing::warn!(query, zipcode, error = %source, "zip lookup failed");
                    return Err(SearchError::Lookup {
                        query: query.to_string(),
                        source,
                    });
                }
            }
        }

        tracing::debug!(
            query,
            site_matches,
            zipcode = ?zipcode,
            location_match = results.len() > site_matches,
            "search results recomputed"
        );

        self.results = results;
        Ok(&self.results)
    }

    /// Display rows for the current results, with summaries computed now.
    #[must_use]
    pub fn rows(&self) -> Vec<ResultRow> {
        self.results.iter().map(ResultRow::from_result).collect()
    }

    /// Report the result with the given key to the selection callback.
    ///
    /// Returns `false` when no current result has that key.
    pub fn select(&mut self, key: &str) -> bool {
        let Some(result) = self.results.iter().find(|result| result.key() == key) else {
            tracing::debug!(key, "selected key not in current results");
            return false;
        };
        if let Some(handler) = self.on_select.as_mut() {
            handler(result);
        }
        true
    }
}

impl<L> std::fmt::Debug for SiteSearchIndex<'_, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteSearchIndex")
            .field("sites", &self.sites.len())
            .field("query", &self.query)
            .field("results", &self.results)
            .field("on_select", &self.on_select.as_ref().map(|_| "<callback>"))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
