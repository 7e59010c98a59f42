use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::cli::{Cli, Commands};
use crate::log;
use crate::output;
use xnt_rewards_client::{collect_ledger, FallbackPriceSource, RewardLedger, RpcChainClient};

pub async fn handle_collect_command(cli: Cli, chain: RpcChainClient) -> Result<()> {
    if let Commands::Collect {
        identity,
        limit,
        price,
        csv,
        json,
    } = cli.command
    {
        let identity = Pubkey::from_str(&identity)
            .map_err(|e| anyhow!("Invalid validator identity '{}': {}", identity, e))?;
        let prices = FallbackPriceSource::new(price);

        log::print_message(&format!("Validator: {}", identity));
        log::print_divider();

        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.white/gray}] {pos}/{len} {wide_msg}")
                .expect("Failed to set progress style"),
        );
        pb.set_message("Walking epochs...");

        let ledger = {
            let pb = pb.clone();
            collect_ledger(&chain, &prices, &identity, limit, move |attempted, planned| {
                pb.set_length(planned);
                pb.set_position(attempted);
            })
            .await?
        };
        pb.finish_and_clear();

        if cli.verbose {
            print_records(&ledger);
        }
        print_summary(&ledger);

        if let Some(path) = csv {
            output::write_csv(&path, &ledger)?;
            log::print_message(&format!("Wrote CSV ledger to: {}", path));
        }
        if let Some(path) = json {
            output::write_json(&path, &identity, &ledger)?;
            log::print_message(&format!("Wrote JSON report to: {}", path));
        }
        log::print_divider();
    }
    Ok(())
}

fn print_records(ledger: &RewardLedger) {
    log::print_section_header("Reward Records");
    for record in &ledger.records {
        log::print_count(&format!(
            "Epoch {}: {} | {:.6} XNT @ ${:.4} | cumulative {:.6} XNT (${:.4})",
            record.epoch,
            record.reward_date.format("%Y-%m-%d %H:%M:%S UTC"),
            record.xnt_amount,
            record.price_usd,
            record.cumulative_xnt,
            record.cumulative_usd,
        ));
    }
}

fn print_summary(ledger: &RewardLedger) {
    let tally = &ledger.tally;
    let summary = &ledger.summary;

    log::print_section_header("Reward Summary");
    log::print_count(&format!("Epochs processed: {}", tally.total_processed));
    log::print_count(&format!(
        "Rewarded epochs: {} ({}% of processed, {}% of expected)",
        summary.record_count, summary.pct_of_processed, summary.pct_of_expected
    ));
    log::print_count(&format!(
        "Failed epochs: {} ({} early-expected, {} unexpected)",
        tally.failed_total(),
        tally.early_failures,
        tally.unexpected_failures
    ));
    log::print_count(&format!(
        "Total rewards: {:.6} XNT (${:.4})",
        summary.total_xnt, summary.total_usd
    ));

    match (summary.first_reward, summary.last_reward) {
        (Some(first), Some(last)) => {
            log::print_message(&format!(
                "First reward: {}",
                first.format("%Y-%m-%d %H:%M:%S UTC")
            ));
            log::print_message(&format!(
                "Last reward: {}",
                last.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        _ => {
            log::print_message("No rewarded epochs in this run");
        }
    }

    log::print_message(&format!("Days covered: {}", summary.days_display()));
    log::print_message(&format!("Average per day: {} XNT", summary.avg_xnt_per_day));
    log::print_message(&format!(
        "Average per rewarded epoch: {} XNT",
        summary.avg_xnt_per_epoch
    ));

    if tally.unexpected_failures > 0 {
        log::print_error(&format!(
            "{} epochs failed unexpectedly; re-run with RUST_LOG=warn for details",
            tally.unexpected_failures
        ));
    }
}
