/// Regulation-degree statistic.
///
/// The regulation degree P_n expresses how much of a reservoir's nominal
/// capacity is engaged by the inflow/outflow imbalance over the observed
/// record, as a percentage in [0, 100].
///
/// # Formula
/// Net flow `inflow_speed - outflow_speed` (m³/s) is integrated over
/// `delta_t` (s) with the trapezoid rule, giving a cumulative storage
/// trajectory S (m³) that starts at S = 0. The regulation amplitude is
/// `max(S) - min(S)` over the whole trajectory, the starting zero
/// included — the storage swing a reservoir would need to absorb the
/// record's imbalance. Then:
///
///   P_n = 100 * amplitude / V_c,   clamped to [0, 100]
///
/// The clamp also absorbs floating-point noise at the boundaries, so the
/// result always lands in [0, 100] for well-formed input.

use crate::prepare::PreparedRow;

/// Computes the regulation degree P_n for a prepared table.
///
/// Pure and deterministic; single pass over the table. The caller
/// guarantees `v_c > 0` — the result for a non-positive capacity is
/// undefined. Tables with fewer than two rows have no flow interval to
/// integrate and yield 0.0.
pub fn calculate_p_n(table: &[PreparedRow], v_c: f64) -> f64 {
    let mut storage = 0.0_f64;
    let mut max_storage = 0.0_f64;
    let mut min_storage = 0.0_f64;

    for pair in table.windows(2) {
        let dt = pair[1].delta_t - pair[0].delta_t;
        let net_start = pair[0].inflow_speed - pair[0].outflow_speed;
        let net_end = pair[1].inflow_speed - pair[1].outflow_speed;
        storage += 0.5 * (net_start + net_end) * dt;
        max_storage = max_storage.max(storage);
        min_storage = min_storage.min(storage);
    }

    let amplitude = max_storage - min_storage;
    (100.0 * amplitude / v_c).clamp(0.0, 100.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    /// Builds a prepared table directly from (delta_t, inflow, outflow)
    /// triples; the calendar columns are irrelevant to the statistic.
    fn table(rows: &[(f64, f64, f64)]) -> Vec<PreparedRow> {
        rows.iter()
            .map(|&(delta_t, inflow, outflow)| PreparedRow {
                datetime: Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap(),
                inflow_speed: inflow,
                outflow_speed: outflow,
                year: 2010,
                month: 1,
                delta_t,
            })
            .collect()
    }

    #[test]
    fn test_balanced_flows_give_zero_regulation() {
        // Inflow equals outflow everywhere: the storage trajectory never
        // leaves zero.
        let t = table(&[(0.0, 5.0, 5.0), (100.0, 7.0, 7.0), (200.0, 3.0, 3.0)]);
        assert_eq!(calculate_p_n(&t, 1000.0), 0.0);
    }

    #[test]
    fn test_constant_surplus_integrates_to_exact_percentage() {
        // Net inflow of +1 m³/s for 200 s accumulates 200 m³ of storage;
        // against V_c = 1000 m³ that is a 20% regulation degree.
        let t = table(&[(0.0, 2.0, 1.0), (100.0, 2.0, 1.0), (200.0, 2.0, 1.0)]);
        assert_eq!(calculate_p_n(&t, 1000.0), 20.0);
    }

    #[test]
    fn test_amplitude_spans_surplus_and_deficit() {
        // +1 m³/s for 100 s (peak +100 m³), then -2 m³/s for 100 s
        // (trough -100 m³): the amplitude is the full 200 m³ swing.
        let t = table(&[
            (0.0, 2.0, 1.0),
            (100.0, 2.0, 1.0),
            (100.0, 1.0, 3.0),
            (200.0, 1.0, 3.0),
        ]);
        assert_eq!(calculate_p_n(&t, 1000.0), 20.0);
    }

    #[test]
    fn test_trapezoid_rule_on_linear_ramp() {
        // Net flow ramps linearly 0 -> 2 m³/s over 100 s: the integral is
        // the triangle area 100 m³.
        let t = table(&[(0.0, 1.0, 1.0), (100.0, 3.0, 1.0)]);
        assert_eq!(calculate_p_n(&t, 1000.0), 10.0);
    }

    #[test]
    fn test_runaway_imbalance_clamps_at_100() {
        // A month of 50 m³/s deficit dwarfs a 1000 m³ capacity.
        let t = table(&[(0.0, 0.0, 50.0), (2_592_000.0, 0.0, 50.0)]);
        assert_eq!(calculate_p_n(&t, 1000.0), 100.0);
    }

    #[test]
    fn test_result_in_range_for_arbitrary_flows() {
        let t = table(&[
            (0.0, 12.0, 3.0),
            (50.0, 0.5, 9.0),
            (125.0, 4.0, 4.5),
            (300.0, 8.0, 1.0),
        ]);
        let p_n = calculate_p_n(&t, 750.0);
        assert!((0.0..=100.0).contains(&p_n), "P_n out of range: {}", p_n);
    }

    #[test]
    fn test_short_tables_yield_zero() {
        assert_eq!(calculate_p_n(&[], 1000.0), 0.0);
        let single = table(&[(0.0, 9.0, 1.0)]);
        assert_eq!(calculate_p_n(&single, 1000.0), 0.0);
    }
}
