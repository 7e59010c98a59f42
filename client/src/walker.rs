use log::{debug, warn};
use solana_sdk::pubkey::Pubkey;

use crate::chain::ChainClient;
use crate::classify::{classify, FailureClass};
use crate::error::SetupError;
use crate::fetch::fetch_epoch_reward;
use crate::price::PriceSource;
use crate::summary::summarize;
use crate::types::{round4, round6, EpochOutcome, FailureTally, RewardLedger, RewardRecord};

/// Progress callback granularity, in attempted epochs.
pub const PROGRESS_INTERVAL: u64 = 10;

/// Full pipeline run: setup checks, the epoch walk, and the summary.
///
/// Setup failures (unknown identity, no current epoch) abort before any
/// epoch is attempted; everything after that point always produces a
/// ledger, even one with zero records.
pub async fn collect_ledger<C, P, F>(
    chain: &C,
    prices: &P,
    identity: &Pubkey,
    limit: Option<u64>,
    on_progress: F,
) -> Result<RewardLedger, SetupError>
where
    C: ChainClient,
    P: PriceSource,
    F: FnMut(u64, u64),
{
    let exists = chain
        .account_exists(identity)
        .await
        .map_err(|e| SetupError::IdentityLookup(*identity, e.to_string()))?;
    if !exists {
        return Err(SetupError::IdentityNotFound(*identity));
    }

    let current_epoch = chain
        .current_epoch()
        .await
        .map_err(|e| SetupError::CurrentEpoch(e.to_string()))?;

    let (records, tally) =
        walk_epochs(chain, prices, identity, current_epoch, limit, on_progress).await;
    let summary = summarize(&records, &tally);

    Ok(RewardLedger {
        records,
        tally,
        summary,
    })
}

/// Walks candidate epochs strictly descending from `current_epoch - 1`
/// to 0, one query at a time. `limit` bounds the number of *attempted*
/// epochs, not successes. Per-epoch failures are tallied via the
/// classifier and never retried or propagated.
///
/// Records come back chronologically sorted with their cumulative
/// columns filled in.
pub async fn walk_epochs<C, P, F>(
    chain: &C,
    prices: &P,
    identity: &Pubkey,
    current_epoch: u64,
    limit: Option<u64>,
    mut on_progress: F,
) -> (Vec<RewardRecord>, FailureTally)
where
    C: ChainClient,
    P: PriceSource,
    F: FnMut(u64, u64),
{
    let mut records = Vec::new();
    let mut tally = FailureTally::default();

    let range = current_epoch;
    let planned = match limit {
        Some(n) => n.min(range),
        None => range,
    };

    for epoch in (0..current_epoch).rev() {
        if tally.total_processed >= planned {
            break;
        }
        tally.total_processed += 1;

        match fetch_epoch_reward(chain, prices, identity, epoch, current_epoch).await {
            EpochOutcome::Rewarded(record) => {
                tally.rewarded += 1;
                records.push(record);
            }
            EpochOutcome::Empty => {
                tally.empty += 1;
            }
            EpochOutcome::Failed(reason) => match classify(epoch) {
                FailureClass::Early => {
                    tally.early_failures += 1;
                    debug!("epoch {} failed as expected (pre-rollback): {}", epoch, reason);
                }
                FailureClass::Unexpected => {
                    tally.unexpected_failures += 1;
                    warn!("epoch {} query failed: {}", epoch, reason);
                }
            },
        }

        if tally.total_processed % PROGRESS_INTERVAL == 0 {
            on_progress(tally.total_processed, planned);
        }
    }

    on_progress(tally.total_processed, planned);
    finalize_records(&mut records);

    (records, tally)
}

/// Chronological sort (epoch number breaks timestamp ties, so ordering
/// is deterministic) followed by the single cumulative pass. Cumulative
/// columns are written here and nowhere else.
fn finalize_records(records: &mut [RewardRecord]) {
    records.sort_by(|a, b| {
        a.reward_date
            .cmp(&b.reward_date)
            .then(a.epoch.cmp(&b.epoch))
    });

    let mut cumulative_xnt = 0.0_f64;
    let mut cumulative_usd = 0.0_f64;
    for record in records.iter_mut() {
        cumulative_xnt = round6(cumulative_xnt + record.xnt_amount);
        cumulative_usd = round4(cumulative_usd + record.value_usd);
        record.cumulative_xnt = cumulative_xnt;
        record.cumulative_usd = cumulative_usd;
    }
}
