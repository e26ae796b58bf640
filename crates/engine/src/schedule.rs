//! Schedule structure and random generation.
//!
//! A schedule covers `duration_days` consecutive calendar days starting
//! at `start_date`, with one operation list per account per day. The
//! day/account structure is deterministic; the operation amounts are
//! fresh random draws on every call.

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::params::Params;

/// One day of the schedule: the date plus one operation list per
/// account, index-aligned with [`Schedule::accounts`].
#[derive(Debug, Clone)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub operations: Vec<Vec<u64>>,
}

impl ScheduleDay {
    /// Day label as written to the output sheet, e.g. "27.07.2024".
    pub fn label(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }
}

/// A full candidate schedule. `days` is chronological, one entry per
/// calendar day in the configured range.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub accounts: Vec<String>,
    pub days: Vec<ScheduleDay>,
}

impl Schedule {
    /// Generate a candidate schedule from scratch.
    pub fn generate<R: Rng>(rng: &mut R, params: &Params) -> Self {
        let accounts: Vec<String> = (1..=params.accounts_count)
            .map(|n| format!("Account {n}"))
            .collect();

        let days = (0..params.duration_days)
            .map(|offset| {
                let date = params.start_date + Days::new(u64::from(offset));
                let operations = (0..params.accounts_count)
                    .map(|_| daily_operations(rng, params))
                    .collect();
                ScheduleDay { date, operations }
            })
            .collect();

        Schedule { accounts, days }
    }
}

/// Draw one amount uniformly from the grid {min, min+step, .., max}.
///
/// When (max - min) is not a multiple of step, the grid tops out at the
/// last reachable rung below max.
pub fn random_amount<R: Rng>(rng: &mut R, params: &Params) -> u64 {
    let rungs = (params.max_amount - params.min_amount) / params.amount_step;
    params.min_amount + rng.gen_range(0..=rungs) * params.amount_step
}

/// Draw one account-day's operations: a uniform count in
/// 0..=max_operations_per_day, then that many independent amounts.
pub fn daily_operations<R: Rng>(rng: &mut R, params: &Params) -> Vec<u64> {
    let count = rng.gen_range(0..=params.max_operations_per_day);
    (0..count).map(|_| random_amount(rng, params)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn test_amount_stays_on_grid() {
        let params = Params::default();
        let mut rng = thread_rng();
        // min=60 max=1000 step=10: every draw must land on {60, 70, .., 1000}.
        for _ in 0..500 {
            let amount = random_amount(&mut rng, &params);
            assert!(amount >= 60 && amount <= 1000, "amount {amount} out of bounds");
            assert_eq!((amount - 60) % 10, 0, "amount {amount} off the grid");
        }
    }

    #[test]
    fn test_daily_operations_count_bound() {
        let params = Params::default();
        let mut rng = thread_rng();
        for _ in 0..200 {
            let ops = daily_operations(&mut rng, &params);
            assert!(ops.len() <= params.max_operations_per_day);
        }
    }

    #[test]
    fn test_schedule_coverage() {
        let params = Params::default();
        let schedule = Schedule::generate(&mut thread_rng(), &params);

        assert_eq!(schedule.days.len(), 62);
        assert_eq!(schedule.accounts.len(), 5);
        for day in &schedule.days {
            assert_eq!(day.operations.len(), 5);
        }
    }

    #[test]
    fn test_account_labels_sequential() {
        let params = Params::default();
        let schedule = Schedule::generate(&mut thread_rng(), &params);
        assert_eq!(schedule.accounts[0], "Account 1");
        assert_eq!(schedule.accounts[4], "Account 5");
    }

    #[test]
    fn test_date_range_62_days_from_2024_07_27() {
        let params = Params::default();
        let schedule = Schedule::generate(&mut thread_rng(), &params);

        assert_eq!(schedule.days.first().unwrap().label(), "27.07.2024");
        assert_eq!(schedule.days.last().unwrap().label(), "26.09.2024");

        // Strictly increasing by one calendar day, so labels are unique.
        for pair in schedule.days.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Days::new(1));
        }
    }

    #[test]
    fn test_label_zero_pads_day_and_month() {
        let day = ScheduleDay {
            date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            operations: vec![],
        };
        assert_eq!(day.label(), "01.08.2024");
    }
}
