//! Rejection-sampling search for an acceptable schedule.
//!
//! There is no analytic inverse from the commission band back to valid
//! amount sequences, so the search is generate-and-test: build a fresh
//! random schedule, aggregate it, check the band, repeat. A hard attempt
//! ceiling guarantees termination at the cost of a possible outright
//! failure. Each attempt owns its own state; nothing carries over
//! between attempts except the counter.

use std::fmt;

use rand::thread_rng;

use crate::commission::{account_totals, commissions, within_band};
use crate::params::Params;
use crate::schedule::Schedule;

/// A schedule that passed the commission band check, together with the
/// aggregates it was accepted on and the attempts consumed (including
/// the successful one).
#[derive(Debug, Clone)]
pub struct Accepted {
    pub schedule: Schedule,
    pub totals: Vec<u64>,
    pub commissions: Vec<f64>,
    pub attempts: u32,
}

/// The attempt ceiling was reached without an acceptable schedule.
/// Fatal for the run; the only remedy is adjusting the parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exhausted {
    pub attempts: u32,
}

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no schedule satisfied the commission band within {} attempts",
            self.attempts
        )
    }
}

impl std::error::Error for Exhausted {}

/// Run the search loop: at most `params.max_attempts` candidates,
/// stopping on the first whose per-account commissions all fall inside
/// the inclusive [min_commission, max_commission] band.
pub fn search(params: &Params) -> Result<Accepted, Exhausted> {
    let mut rng = thread_rng();

    for attempt in 1..=params.max_attempts {
        let schedule = Schedule::generate(&mut rng, params);
        let totals = account_totals(&schedule);
        let fees = commissions(&totals, params.commission_rate);

        if within_band(&fees, params.min_commission, params.max_commission) {
            return Ok(Accepted {
                schedule,
                totals,
                commissions: fees,
                attempts: attempt,
            });
        }
    }

    Err(Exhausted {
        attempts: params.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small parameter set whose band admits any schedule, so the very
    /// first candidate is accepted.
    fn accept_all_params() -> Params {
        Params {
            duration_days: 5,
            accounts_count: 3,
            min_commission: 0.0,
            max_commission: f64::MAX,
            max_attempts: 10,
            ..Params::default()
        }
    }

    /// Band that no schedule can reach: the theoretical maximum total is
    /// duration * max_ops * max_amount, far below what the band demands.
    fn impossible_params() -> Params {
        Params {
            duration_days: 2,
            accounts_count: 2,
            min_commission: 1_000_000.0,
            max_commission: 2_000_000.0,
            max_attempts: 25,
            ..Params::default()
        }
    }

    #[test]
    fn test_first_candidate_accepted_under_open_band() {
        let params = accept_all_params();
        let accepted = search(&params).expect("open band must accept");
        assert_eq!(accepted.attempts, 1);
    }

    #[test]
    fn test_accepted_commissions_are_within_band() {
        let params = Params {
            // Wide but finite band so acceptance is near-certain and the
            // invariant check is still meaningful.
            min_commission: 0.0,
            max_commission: 1_000_000.0,
            duration_days: 10,
            accounts_count: 4,
            max_attempts: 50,
            ..Params::default()
        };
        let accepted = search(&params).expect("band covers all reachable totals");
        for &c in &accepted.commissions {
            assert!(c >= params.min_commission && c <= params.max_commission);
        }
    }

    #[test]
    fn test_accepted_aggregates_match_schedule() {
        let accepted = search(&accept_all_params()).unwrap();
        assert_eq!(accepted.totals, account_totals(&accepted.schedule));
        assert_eq!(
            accepted.commissions,
            commissions(&accepted.totals, Params::default().commission_rate)
        );
    }

    #[test]
    fn test_ceiling_exhaustion_reports_attempt_count() {
        let params = impossible_params();
        let err = search(&params).expect_err("band is unreachable");
        assert_eq!(err, Exhausted { attempts: 25 });
    }

    #[test]
    fn test_exhausted_display_names_attempts() {
        let msg = Exhausted { attempts: 1000 }.to_string();
        assert!(msg.contains("1000"));
    }
}
