use chrono::{DateTime, Utc};

use crate::types::{round4, round6, FailureTally, RewardRecord, SummaryStats};

/// Derives summary statistics from a finalized (sorted, cumulated)
/// record set and its tally. Pure and idempotent; callers re-run it if
/// the record set ever changes rather than patching fields.
pub fn summarize(records: &[RewardRecord], tally: &FailureTally) -> SummaryStats {
    let record_count = records.len();
    let total_xnt = round6(records.iter().map(|r| r.xnt_amount).sum());
    let total_usd = round4(records.iter().map(|r| r.value_usd).sum());
    let first_reward = records.first().map(|r| r.reward_date);
    let last_reward = records.last().map(|r| r.reward_date);

    let days_covered = match (first_reward, last_reward) {
        (Some(first), Some(last)) => Some(day_span(first, last)),
        _ => None,
    };

    let avg_xnt_per_day = match days_covered {
        Some(days) if days > 0 => format!("{:.6}", total_xnt / days as f64),
        _ => "N/A".to_string(),
    };
    let avg_xnt_per_epoch = if record_count > 0 {
        format!("{:.6}", total_xnt / record_count as f64)
    } else {
        "N/A".to_string()
    };

    SummaryStats {
        record_count,
        total_processed: tally.total_processed,
        expected_epochs: tally.expected_epochs(),
        total_xnt,
        total_usd,
        first_reward,
        last_reward,
        days_covered,
        avg_xnt_per_day,
        avg_xnt_per_epoch,
        pct_of_processed: percentage(record_count as f64, tally.total_processed as f64),
        pct_of_expected: percentage(record_count as f64, tally.expected_epochs() as f64),
    }
}

/// The ledger's one day-span formula: floor both endpoints to UTC days,
/// difference plus one. At least 1 whenever a record exists.
pub fn day_span(first: DateTime<Utc>, last: DateTime<Utc>) -> i64 {
    (last.date_naive() - first.date_naive()).num_days() + 1
}

fn percentage(numerator: f64, denominator: f64) -> String {
    if denominator == 0.0 {
        "0.00".to_string()
    } else {
        format!("{:.2}", numerator / denominator * 100.0)
    }
}
