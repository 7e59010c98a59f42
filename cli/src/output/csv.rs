use anyhow::Result;
use std::fs::File;
use std::io::{BufWriter, Write};

use xnt_rewards_client::RewardLedger;

/// Writes one row per record in chronological order, with the same
/// fixed precision the records carry (6 decimals XNT, 4 decimals USD).
pub fn write_csv(path: &str, ledger: &RewardLedger) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(
        out,
        "epoch,reward_date,xnt_amount,price_usd,value_usd,cumulative_xnt,cumulative_usd"
    )?;
    for record in &ledger.records {
        writeln!(
            out,
            "{},{},{:.6},{:.4},{:.4},{:.6},{:.4}",
            record.epoch,
            record.reward_date.to_rfc3339(),
            record.xnt_amount,
            record.price_usd,
            record.value_usd,
            record.cumulative_xnt,
            record.cumulative_usd,
        )?;
    }
    out.flush()?;

    Ok(())
}
