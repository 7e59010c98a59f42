use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use std::fs::File;
use std::io::BufWriter;

use xnt_rewards_client::{FailureTally, RewardLedger, RewardRecord, SummaryStats};

#[derive(Serialize)]
struct JsonReport<'a> {
    validator: String,
    generated_at: DateTime<Utc>,
    records: &'a [RewardRecord],
    tally: TallyReport,
    summary: &'a SummaryStats,
}

/// Tally plus its derived counts, so report consumers don't re-derive
/// the arithmetic.
#[derive(Serialize)]
struct TallyReport {
    total_processed: u64,
    rewarded: u64,
    empty: u64,
    failed_total: u64,
    early_failures: u64,
    unexpected_failures: u64,
    expected_epochs: u64,
}

impl From<&FailureTally> for TallyReport {
    fn from(tally: &FailureTally) -> Self {
        Self {
            total_processed: tally.total_processed,
            rewarded: tally.rewarded,
            empty: tally.empty,
            failed_total: tally.failed_total(),
            early_failures: tally.early_failures,
            unexpected_failures: tally.unexpected_failures,
            expected_epochs: tally.expected_epochs(),
        }
    }
}

pub fn write_json(path: &str, validator: &Pubkey, ledger: &RewardLedger) -> Result<()> {
    let report = JsonReport {
        validator: validator.to_string(),
        generated_at: Utc::now(),
        records: &ledger.records,
        tally: TallyReport::from(&ledger.tally),
        summary: &ledger.summary,
    };

    let out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(out, &report)?;

    Ok(())
}
