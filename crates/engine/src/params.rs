//! Generation parameters.
//!
//! Schedule parameters are compile-time defaults, not runtime
//! configuration. Everything is collected into [`Params`] so the
//! generators and the search loop take an explicit parameter set
//! instead of reading module globals.

use chrono::NaiveDate;

/// First scheduled day (year, month, day).
pub const START_DATE: (i32, u32, u32) = (2024, 7, 27);

/// Number of consecutive calendar days covered by the schedule.
pub const DURATION_DAYS: u32 = 62;

/// Number of accounts, labeled "Account 1".."Account N".
pub const ACCOUNTS_COUNT: usize = 5;

/// Smallest amount a single operation may carry.
pub const MIN_AMOUNT: u64 = 60;

/// Largest amount a single operation may carry.
pub const MAX_AMOUNT: u64 = 1000;

/// Amounts are drawn from the grid {min, min+step, .., max}.
pub const AMOUNT_STEP: u64 = 10;

/// Upper bound on operations per account per day (0 is allowed).
pub const MAX_OPERATIONS_PER_DAY: usize = 2;

/// Commission rate applied to each account's total (0.2%).
pub const COMMISSION_RATE: f64 = 0.002;

/// Inclusive lower bound of the commission acceptance band.
pub const MIN_COMMISSION: f64 = 50.0;

/// Inclusive upper bound of the commission acceptance band.
pub const MAX_COMMISSION: f64 = 60.0;

/// Hard ceiling on search attempts; exceeding it fails the run.
pub const MAX_ATTEMPTS: u32 = 1000;

/// Full parameter set for one generation run.
#[derive(Debug, Clone)]
pub struct Params {
    pub start_date: NaiveDate,
    pub duration_days: u32,
    pub accounts_count: usize,
    pub min_amount: u64,
    pub max_amount: u64,
    pub amount_step: u64,
    pub max_operations_per_day: usize,
    pub commission_rate: f64,
    pub min_commission: f64,
    pub max_commission: f64,
    pub max_attempts: u32,
}

impl Default for Params {
    fn default() -> Self {
        let (y, m, d) = START_DATE;
        Self {
            start_date: NaiveDate::from_ymd_opt(y, m, d).expect("START_DATE is a valid date"),
            duration_days: DURATION_DAYS,
            accounts_count: ACCOUNTS_COUNT,
            min_amount: MIN_AMOUNT,
            max_amount: MAX_AMOUNT,
            amount_step: AMOUNT_STEP,
            max_operations_per_day: MAX_OPERATIONS_PER_DAY,
            commission_rate: COMMISSION_RATE,
            min_commission: MIN_COMMISSION,
            max_commission: MAX_COMMISSION,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}
