/// Feature derivation for the regulation statistic.
///
/// Takes a raw water-balance series and augments each sample with the
/// calendar and elapsed-time features the statistic integrates over. The
/// input is never mutated; `prepare` allocates a fresh table per call and
/// the caller discards it after the statistic runs.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::model::TJWBResult;

// ---------------------------------------------------------------------------
// Prepared table
// ---------------------------------------------------------------------------

/// One sample of the prepared table: the raw flows plus derived features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedRow {
    pub datetime: chrono::DateTime<chrono::Utc>,
    /// Inflow rate, m³/s, copied from the source series.
    pub inflow_speed: f64,
    /// Outflow rate, m³/s, copied from the source series.
    pub outflow_speed: f64,
    /// Calendar year of `datetime`.
    pub year: i32,
    /// Calendar month of `datetime`, 1–12.
    pub month: u32,
    /// Elapsed time since the first sample, in seconds. Always 0 on the
    /// first row; non-decreasing for a time-ordered series.
    pub delta_t: f64,
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derives the prepared table from a raw series.
///
/// Row order is preserved (insertion order = time order). The series is
/// assumed already time-ordered; `delta_t` of an unordered series is
/// meaningless and the caller is responsible for ordering. Calling twice
/// on the same unmodified series yields identical tables.
pub fn prepare(series: &TJWBResult) -> Vec<PreparedRow> {
    let first = match series.datetime.first() {
        Some(dt) => *dt,
        None => return Vec::new(),
    };

    series
        .datetime
        .iter()
        .zip(series.inflow_speed.iter())
        .zip(series.outflow_speed.iter())
        .map(|((dt, &inflow), &outflow)| PreparedRow {
            datetime: *dt,
            inflow_speed: inflow,
            outflow_speed: outflow,
            year: dt.year(),
            month: dt.month(),
            delta_t: dt.signed_duration_since(first).num_seconds() as f64,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
