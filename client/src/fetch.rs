use chrono::{DateTime, TimeZone, Utc};
use log::debug;
use solana_sdk::pubkey::Pubkey;

use crate::chain::{ChainClient, InflationReward};
use crate::price::PriceSource;
use crate::types::{round4, round6, EpochOutcome, RewardRecord, BASE_UNITS_PER_XNT};

/// Assumed seconds per epoch when no precise block time is available.
const APPROX_EPOCH_SECONDS: i64 = 86_400;

/// Queries one epoch's inflation reward and converts it into an
/// [`EpochOutcome`]. Never returns an error: query failures become
/// `Failed`, missing or zero payouts become `Empty`, and a missing
/// block time degrades to an approximated date.
pub async fn fetch_epoch_reward<C, P>(
    chain: &C,
    prices: &P,
    identity: &Pubkey,
    epoch: u64,
    current_epoch: u64,
) -> EpochOutcome
where
    C: ChainClient,
    P: PriceSource,
{
    let reward = match chain.inflation_reward(identity, epoch).await {
        Ok(Some(reward)) if reward.amount > 0 => reward,
        Ok(_) => return EpochOutcome::Empty,
        Err(e) => return EpochOutcome::Failed(e.to_string()),
    };

    let reward_date = resolve_reward_date(chain, &reward, epoch, current_epoch).await;
    let price_usd = prices.price_at(reward_date);
    let xnt_amount = round6(reward.amount as f64 / BASE_UNITS_PER_XNT);
    let value_usd = round4(xnt_amount * price_usd);

    EpochOutcome::Rewarded(RewardRecord {
        epoch,
        reward_date,
        xnt_amount,
        price_usd,
        value_usd,
        cumulative_xnt: 0.0,
        cumulative_usd: 0.0,
    })
}

/// Best-effort timestamp for a reward: the effective slot's real block
/// time when the chain can provide it, otherwise the day-per-epoch
/// approximation.
async fn resolve_reward_date<C: ChainClient>(
    chain: &C,
    reward: &InflationReward,
    epoch: u64,
    current_epoch: u64,
) -> DateTime<Utc> {
    if let Some(slot) = reward.effective_slot {
        match chain.block_time(slot).await {
            Ok(ts) => {
                if let Some(date) = Utc.timestamp_opt(ts, 0).single() {
                    return date;
                }
                debug!("block time {} for slot {} is out of range, approximating", ts, slot);
            }
            Err(e) => {
                debug!("block time lookup failed for slot {}: {}, approximating", slot, e);
            }
        }
    }

    approximate_reward_date(epoch, current_epoch, Utc::now())
}

/// One day per epoch behind the tip. A deliberate degradation that
/// always succeeds, not an error state.
pub(crate) fn approximate_reward_date(
    epoch: u64,
    current_epoch: u64,
    now: DateTime<Utc>,
) -> DateTime<Utc> {
    let epochs_behind = current_epoch.saturating_sub(epoch) as i64;
    now - chrono::Duration::seconds(epochs_behind * APPROX_EPOCH_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testing::FakeChain;
    use crate::price::FallbackPriceSource;

    #[tokio::test]
    async fn test_rewarded_epoch_uses_block_time() {
        let mut chain = FakeChain::with_epoch(100);
        chain.add_reward(90, 2_500_000_000, Some(4_000));
        chain.block_times.insert(4_000, 1_700_000_000);
        let prices = FallbackPriceSource::new(2.0);
        let identity = Pubkey::new_unique();

        let outcome = fetch_epoch_reward(&chain, &prices, &identity, 90, 100).await;
        let record = match outcome {
            EpochOutcome::Rewarded(record) => record,
            other => panic!("expected a reward, got {:?}", other),
        };

        assert_eq!(record.epoch, 90);
        assert_eq!(record.xnt_amount, 2.5);
        assert_eq!(record.price_usd, 2.0);
        assert_eq!(record.value_usd, 5.0);
        assert_eq!(record.reward_date.timestamp(), 1_700_000_000);
    }

    #[tokio::test]
    async fn test_missing_effective_slot_approximates_date() {
        let mut chain = FakeChain::with_epoch(50);
        chain.add_reward(40, 1_000_000_000, None);
        let prices = FallbackPriceSource::new(1.0);
        let identity = Pubkey::new_unique();

        let before = Utc::now();
        let outcome = fetch_epoch_reward(&chain, &prices, &identity, 40, 50).await;
        let record = match outcome {
            EpochOutcome::Rewarded(record) => record,
            other => panic!("expected a reward, got {:?}", other),
        };

        // 10 epochs behind the tip, one assumed day each.
        let expected = before - chrono::Duration::days(10);
        let drift = (record.reward_date - expected).num_seconds().abs();
        assert!(drift < 5, "approximated date drifted by {}s", drift);
    }

    #[tokio::test]
    async fn test_failed_block_time_lookup_still_rewards() {
        let mut chain = FakeChain::with_epoch(50);
        // Slot present but no block time behind it: lookup errors.
        chain.add_reward(45, 3_000_000_000, Some(9_999));
        let prices = FallbackPriceSource::new(1.0);
        let identity = Pubkey::new_unique();

        let outcome = fetch_epoch_reward(&chain, &prices, &identity, 45, 50).await;
        assert!(matches!(outcome, EpochOutcome::Rewarded(_)));
    }

    #[tokio::test]
    async fn test_zero_and_absent_rewards_are_empty() {
        let mut chain = FakeChain::with_epoch(50);
        chain.add_reward(30, 0, Some(1_000));
        let prices = FallbackPriceSource::new(1.0);
        let identity = Pubkey::new_unique();

        let zero = fetch_epoch_reward(&chain, &prices, &identity, 30, 50).await;
        assert_eq!(zero, EpochOutcome::Empty);

        let absent = fetch_epoch_reward(&chain, &prices, &identity, 31, 50).await;
        assert_eq!(absent, EpochOutcome::Empty);
    }

    #[tokio::test]
    async fn test_query_error_is_contained() {
        let mut chain = FakeChain::with_epoch(50);
        chain.failing_epochs.push(20);
        let prices = FallbackPriceSource::new(1.0);
        let identity = Pubkey::new_unique();

        let outcome = fetch_epoch_reward(&chain, &prices, &identity, 20, 50).await;
        match outcome {
            EpochOutcome::Failed(reason) => assert!(reason.contains("epoch 20")),
            other => panic!("expected a failure, got {:?}", other),
        }
    }

    #[test]
    fn test_approximation_saturates_at_the_tip() {
        let now = Utc::now();
        assert_eq!(approximate_reward_date(50, 50, now), now);
        // An epoch ahead of the tip must not underflow.
        assert_eq!(approximate_reward_date(51, 50, now), now);
    }
}
