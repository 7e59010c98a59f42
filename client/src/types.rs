use chrono::{DateTime, Utc};
use serde::Serialize;

/// Base units per whole XNT (lamport-style, 9 decimals).
pub const BASE_UNITS_PER_XNT: f64 = 1_000_000_000.0;

/// Rounds to the 6-decimal precision used for XNT amounts.
pub fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Rounds to the 4-decimal precision used for USD values.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// One epoch's positive inflation payout to the validator.
///
/// Created by the fetcher with zeroed cumulative columns; the walker
/// assigns `cumulative_xnt`/`cumulative_usd` exactly once, after the
/// record set is in chronological order. Immutable from then on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardRecord {
    pub epoch: u64,
    pub reward_date: DateTime<Utc>,
    /// Whole XNT, 6-decimal precision, > 0 by construction.
    pub xnt_amount: f64,
    pub price_usd: f64,
    /// `xnt_amount * price_usd`, 4-decimal precision.
    pub value_usd: f64,
    pub cumulative_xnt: f64,
    pub cumulative_usd: f64,
}

/// Result of querying a single epoch.
#[derive(Debug, Clone, PartialEq)]
pub enum EpochOutcome {
    Rewarded(RewardRecord),
    /// Queried successfully but no (or zero) reward was paid.
    Empty,
    /// The query errored; the reason is recorded and the walk moves on.
    Failed(String),
}

/// Per-run outcome counters, threaded through the walker and returned
/// to the caller. Replaces the process-wide counters of older tooling.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FailureTally {
    /// Epochs attempted, whether or not they yielded a record.
    pub total_processed: u64,
    pub rewarded: u64,
    pub empty: u64,
    /// Failures at or below the rollback cutoff.
    pub early_failures: u64,
    /// Failures above the cutoff; these are worth investigating.
    pub unexpected_failures: u64,
}

impl FailureTally {
    pub fn failed_total(&self) -> u64 {
        self.early_failures + self.unexpected_failures
    }

    /// Epochs that could plausibly have carried a reward: everything
    /// attempted minus the structurally unqueryable early epochs.
    pub fn expected_epochs(&self) -> u64 {
        self.total_processed - self.early_failures
    }
}

/// Read-only summary derived once from the finalized record set and
/// tally. Averages and percentages are fixed-precision strings so the
/// report output is stable across platforms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub record_count: usize,
    pub total_processed: u64,
    pub expected_epochs: u64,
    pub total_xnt: f64,
    pub total_usd: f64,
    pub first_reward: Option<DateTime<Utc>>,
    pub last_reward: Option<DateTime<Utc>>,
    /// Calendar span of the record set in UTC days; `None` when empty.
    pub days_covered: Option<i64>,
    /// 6-decimal string, or `"N/A"` when the divisor is zero.
    pub avg_xnt_per_day: String,
    /// 6-decimal string, or `"N/A"` when there are no records.
    pub avg_xnt_per_epoch: String,
    /// 2-decimal string, `"0.00"` when nothing was processed.
    pub pct_of_processed: String,
    /// 2-decimal string, `"0.00"` when no epochs were expected.
    pub pct_of_expected: String,
}

impl SummaryStats {
    pub fn days_display(&self) -> String {
        match self.days_covered {
            Some(days) => days.to_string(),
            None => "N/A".to_string(),
        }
    }
}

/// Everything a run produces, handed as-is to the report writers.
#[derive(Debug, Clone, Serialize)]
pub struct RewardLedger {
    pub records: Vec<RewardRecord>,
    pub tally: FailureTally,
    pub summary: SummaryStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_precision() {
        assert_eq!(round6(1.2345678), 1.234568);
        assert_eq!(round6(10.0), 10.0);
        assert_eq!(round4(0.12349), 0.1235);
        assert_eq!(round4(0.0), 0.0);
    }

    #[test]
    fn test_tally_arithmetic() {
        let tally = FailureTally {
            total_processed: 21,
            rewarded: 3,
            empty: 2,
            early_failures: 16,
            unexpected_failures: 0,
        };
        assert_eq!(tally.failed_total(), 16);
        assert_eq!(tally.expected_epochs(), 5);
        assert_eq!(
            tally.total_processed,
            tally.rewarded + tally.empty + tally.failed_total()
        );
    }
}
