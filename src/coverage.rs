/// Data-sufficiency validators for regulation classification.
///
/// A regulation-degree statistic computed over a short or gappy record is
/// meaningless, so the decision predicate refuses to run on one. This module
/// provides the two coverage checks it relies on. Both are pure read-only
/// predicates over the series — no errors, no side effects; the decision
/// layer turns a `false` into the appropriate `RegulationError`.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::model::TJWBResult;

/// Minimum number of distinct calendar years for a multi-year statistic.
pub const MIN_YEARS: usize = 10;

/// Expected number of monthly samples per calendar year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Counts samples per distinct calendar year, in year order.
fn samples_per_year(series: &TJWBResult) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for dt in &series.datetime {
        *counts.entry(dt.year()).or_insert(0) += 1;
    }
    counts
}

/// Returns `true` iff every calendar year present in the series has exactly
/// 12 samples.
///
/// A partial first or last year (series starting or ending mid-year) is
/// judged as-is: any year whose count differs from 12 fails the check.
/// An empty series passes vacuously.
pub fn has_12_months_each_year(series: &TJWBResult) -> bool {
    samples_per_year(series)
        .values()
        .all(|&count| count == MONTHS_PER_YEAR)
}

/// Returns `true` iff the series touches at least 10 distinct calendar years.
///
/// The criterion is distinct-year count, not elapsed time: with monthly
/// sampling and the 12-months-per-year check this is equivalent to a
/// ten-year record, and it judges partial years the same way the month
/// check does.
pub fn spans_at_least_10_years(series: &TJWBResult) -> bool {
    samples_per_year(series).len() >= MIN_YEARS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
