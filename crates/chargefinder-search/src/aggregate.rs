//! Charger roll-up for a single site or a map cluster of sites.

use chargefinder_core::{ChargerLevel, ChargerRecord, Site};
use serde::Serialize;

/// Availability roll-up over a set of chargers.
///
/// Derived on demand; never stored alongside the chargers it summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChargerSummary {
    pub available: usize,
    pub total: usize,
    /// Representative tier shown to the user.
    pub level: ChargerLevel,
}

/// Visual emphasis a renderer applies to a summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryTone {
    Available,
    Unavailable,
}

impl ChargerSummary {
    /// Share of chargers currently free, in `[0.0, 1.0]`.
    ///
    /// Returns `0.0` for an empty summary instead of dividing by zero.
    // Charger counts per site or cluster are far below f64's 52-bit mantissa.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fraction_available(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.available as f64 / self.total as f64
    }

    /// `"{available} of {total} available, {level}"`.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "{} of {} available, {}",
            self.available, self.total, self.level
        )
    }

    #[must_use]
    pub fn tone(&self) -> SummaryTone {
        if self.available == 0 {
            SummaryTone::Unavailable
        } else {
            SummaryTone::Available
        }
    }
}

/// Summarize any sequence of charger records in one pass.
///
/// The representative level is the highest tier with at least one available
/// charger; when nothing is available it falls back to the highest tier
/// present. An empty input yields `0 of 0` at the lowest tier.
#[must_use]
pub fn summarize<'a, I>(chargers: I) -> ChargerSummary
where
    I: IntoIterator<Item = &'a ChargerRecord>,
{
    let mut available = 0;
    let mut total = 0;
    let mut best_available: Option<ChargerLevel> = None;
    let mut best_any: Option<ChargerLevel> = None;

    for charger in chargers {
        total += 1;
        best_any = best_any.max(Some(charger.level));
        if charger.status.is_available() {
            available += 1;
            best_available = best_available.max(Some(charger.level));
        }
    }

    ChargerSummary {
        available,
        total,
        level: best_available.or(best_any).unwrap_or_default(),
    }
}

/// Summarize a map cluster as the concatenation of its member sites' chargers.
#[must_use]
pub fn summarize_cluster(sites: &[&Site]) -> ChargerSummary {
    summarize(sites.iter().flat_map(|site| site.chargers.iter()))
}
