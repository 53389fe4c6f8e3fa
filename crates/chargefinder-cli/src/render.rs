//! Plain-text rendering of result rows and summary cards.

use chargefinder_search::{ChargerSummary, ResultRow, RowStyle};

const BAR_WIDTH: usize = 20;

/// Text progress bar, e.g. `[##########----------]`.
pub(crate) fn progress_bar(fraction: f64, width: usize) -> String {
    // Clamped to [0, width] before the cast, so truncation and sign loss
    // cannot occur.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub(crate) fn summary_card(title: &str, summary: &ChargerSummary) -> String {
    format!(
        "{title}\n{}\n{}",
        progress_bar(summary.fraction_available(), BAR_WIDTH),
        summary.description().to_uppercase()
    )
}

pub(crate) fn result_row(row: &ResultRow) -> String {
    let marker = match row.style {
        RowStyle::SiteAvailable => '+',
        RowStyle::SiteUnavailable => '-',
        RowStyle::Location => '@',
    };
    format!("{marker} {} [{}]\n    {}", row.title, row.key, row.subtitle)
}
