/// Core data types for reservoir regulation classification.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O — only types and their error taxonomy.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Water-balance result record
// ---------------------------------------------------------------------------

/// Output of an upstream water-balance computation for one reservoir.
///
/// Columns are parallel: `datetime[i]`, `inflow_speed[i]` and
/// `outflow_speed[i]` describe the same sample. Timestamps are strictly
/// increasing and, for regulation classification, sampled monthly.
///
/// Invariant (caller responsibility, not validated here):
/// `datetime.len() == inflow_speed.len() == outflow_speed.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TJWBResult {
    pub datetime: Vec<DateTime<Utc>>,
    /// Inflow rate per sample, in m³/s.
    pub inflow_speed: Vec<f64>,
    /// Total outflow rate per sample, in m³/s.
    pub outflow_speed: Vec<f64>,
    /// Per-component outflow rates (spillway, turbine, ...), keyed by
    /// component name. Carried through for downstream consumers; the
    /// regulation statistic only reads the aggregate `outflow_speed`.
    pub components_outflow_speed: HashMap<String, Vec<f64>>,
}

impl TJWBResult {
    /// Number of samples in the series.
    pub fn len(&self) -> usize {
        self.datetime.len()
    }

    /// Returns `true` if the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.datetime.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when classifying a regulation regime.
///
/// Both variants are data-sufficiency failures: they are raised before any
/// statistic is computed and are always surfaced to the caller — there is
/// no internal recovery and no fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegulationError {
    /// The series covers fewer than 10 distinct calendar years.
    InsufficientYears,
    /// At least one calendar year in the series does not have exactly
    /// 12 monthly samples.
    IncompleteMonthlyCoverage,
}

impl std::fmt::Display for RegulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegulationError::InsufficientYears => {
                write!(f, "Requires at least 10 years.")
            }
            RegulationError::IncompleteMonthlyCoverage => {
                write!(f, "Requires 12 months in each year.")
            }
        }
    }
}

impl std::error::Error for RegulationError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
