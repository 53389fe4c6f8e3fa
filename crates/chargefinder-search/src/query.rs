//! Query classification: site-name matching and zip code detection.

use std::ops::RangeInclusive;

pub const MIN_ZIP: u32 = 10_000;
pub const MAX_ZIP: u32 = 99_999;

const ZIP_RANGE: RangeInclusive<u32> = MIN_ZIP..=MAX_ZIP;

/// Case-insensitive substring match of `query` against a site name.
#[must_use]
pub fn name_matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Interpret `query` as a zip code, if it is one.
///
/// Surrounding whitespace is ignored. The rest must be ASCII digits whose
/// numeric value lies in `[MIN_ZIP, MAX_ZIP]`. The value is compared
/// numerically, so a leading zero shifts the code out of range (`"02134"` is
/// 2134 and rejected) or is dropped (`"012345"` is 12345 and accepted).
#[must_use]
pub fn zip_candidate(query: &str) -> Option<u32> {
    let digits = query.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Overflowing digit strings fail to parse and are simply not zip codes.
    let zipcode = digits.parse::<u32>().ok()?;
    ZIP_RANGE.contains(&zipcode).then_some(zipcode)
}
