//! Reservoir regulation-degree classification.
//!
//! Given a monthly water-balance record (inflow and outflow rates over
//! time), this crate computes the regulation degree P_n — the share of a
//! reservoir's nominal capacity engaged by the record's flow imbalance —
//! and decides whether the operating regime qualifies as comprehensive
//! regulation against a caller-supplied target percentage.
//!
//! The pipeline is four pure stages, run in order by
//! [`is_comprehensive_regulation`]:
//!
//! 1. [`coverage`] — data-sufficiency checks: 12 monthly samples in every
//!    calendar year, at least 10 distinct years.
//! 2. [`prepare`] — derives `year`, `month`, and elapsed-time features
//!    from the raw series.
//! 3. [`statistic`] — integrates the net-flow imbalance into a storage
//!    trajectory and reports its amplitude relative to capacity, in
//!    [0, 100] percent.
//! 4. [`regulation`] — threshold comparison with tolerance.
//!
//! Every call is independent and reentrant; the only shared state is the
//! opt-in diagnostic logger in [`logging`].

pub mod coverage;
pub mod logging;
pub mod model;
pub mod prepare;
pub mod regulation;
pub mod statistic;

pub use model::{RegulationError, TJWBResult};
pub use regulation::{is_comprehensive_regulation, is_comprehensive_regulation_with};
