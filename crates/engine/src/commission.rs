//! Per-account aggregation and the commission acceptance check.
//!
//! Totals and commissions are pure functions of a schedule, recomputed
//! from scratch for every candidate. Commissions stay unrounded here;
//! two-decimal rounding is a display concern.

use crate::schedule::Schedule;

/// Sum all operation amounts per account across the whole schedule.
/// Result is index-aligned with [`Schedule::accounts`].
pub fn account_totals(schedule: &Schedule) -> Vec<u64> {
    let mut totals = vec![0u64; schedule.accounts.len()];
    for day in &schedule.days {
        for (account, operations) in day.operations.iter().enumerate() {
            totals[account] += operations.iter().sum::<u64>();
        }
    }
    totals
}

/// Derive the commission for each account total at the given rate.
pub fn commissions(totals: &[u64], rate: f64) -> Vec<f64> {
    totals.iter().map(|&total| total as f64 * rate).collect()
}

/// True iff every commission lies in the inclusive [min, max] band.
///
/// An account with no operations has commission 0 and fails any band
/// with a positive minimum; the search simply retries such candidates.
pub fn within_band(commissions: &[f64], min: f64, max: f64) -> bool {
    commissions.iter().all(|&c| c >= min && c <= max)
}
