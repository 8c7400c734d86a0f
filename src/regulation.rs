/// Comprehensive-regulation decision predicate.
///
/// Composes the coverage validators, the feature deriver, and the P_n
/// statistic into the single entry point consumers call: does this
/// reservoir's operating regime qualify as comprehensive regulation?
///
/// # Threshold convention
/// The regime qualifies iff `P_n >= P - eps`: the tolerance `eps` relaxes
/// the target percentage downward, so a statistic that falls within `eps`
/// of the target still passes. Both directions are covered in tests.

use crate::coverage;
use crate::logging::{self, Component};
use crate::model::{RegulationError, TJWBResult};
use crate::prepare;
use crate::statistic;

/// Classifies a regulation regime with the 10-year requirement enforced.
///
/// Convenience form of [`is_comprehensive_regulation_with`] with
/// `forced_gt_10_year = true`, the standard convention for multi-year
/// regulation assessment.
pub fn is_comprehensive_regulation(
    series: &TJWBResult,
    eps: f64,
    p: f64,
    v_c: f64,
) -> Result<bool, RegulationError> {
    is_comprehensive_regulation_with(series, eps, p, v_c, true)
}

/// Classifies a regulation regime.
///
/// # Arguments
/// * `series` - water-balance record; monthly samples in time order
/// * `eps` - tolerance applied below the target percentage
/// * `p` - target regulation degree, percent (0–100)
/// * `v_c` - nominal storage capacity, m³; caller guarantees `v_c > 0`
/// * `forced_gt_10_year` - when `false`, skips the 10-year span check
///
/// Validation order is significant: the 10-year check (when enabled) is
/// reported before the 12-months-per-year check, so a short series that
/// also has gappy months surfaces [`RegulationError::InsufficientYears`]
/// first. With `forced_gt_10_year = false` the month check becomes the
/// first possible failure.
///
/// Returns `Ok(true)` iff `P_n >= p - eps`.
pub fn is_comprehensive_regulation_with(
    series: &TJWBResult,
    eps: f64,
    p: f64,
    v_c: f64,
    forced_gt_10_year: bool,
) -> Result<bool, RegulationError> {
    if forced_gt_10_year && !coverage::spans_at_least_10_years(series) {
        logging::warn(Component::Coverage, "rejected: fewer than 10 distinct years");
        return Err(RegulationError::InsufficientYears);
    }
    if !coverage::has_12_months_each_year(series) {
        logging::warn(Component::Coverage, "rejected: incomplete monthly coverage");
        return Err(RegulationError::IncompleteMonthlyCoverage);
    }

    let table = prepare::prepare(series);
    let p_n = statistic::calculate_p_n(&table, v_c);
    logging::debug(
        Component::Statistic,
        &format!("integrated {} samples into P_n = {:.2}%", table.len(), p_n),
    );
    let comprehensive = p_n >= p - eps;

    logging::info(
        Component::Decision,
        &format!(
            "P_n = {:.2}% against target {:.2}% (eps {:.2}): {}",
            p_n,
            p,
            eps,
            if comprehensive { "comprehensive" } else { "not comprehensive" }
        ),
    );

    Ok(comprehensive)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
