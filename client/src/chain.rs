use anyhow::Result;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};

/// A single epoch's inflation payout as reported by the chain.
///
/// The effective slot is optional: some RPC providers omit it, and the
/// pipeline must degrade to an approximated timestamp when it is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InflationReward {
    /// Raw amount in base units (10^-9 XNT).
    pub amount: u64,
    pub effective_slot: Option<u64>,
}

/// The read-only chain queries the pipeline needs. Implemented for the
/// live RPC client below and by an in-memory fake in the tests.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    async fn current_epoch(&self) -> Result<u64>;

    /// Returns the validator's reward for `epoch`, or `None` when the
    /// chain has no payout recorded for it.
    async fn inflation_reward(
        &self,
        identity: &Pubkey,
        epoch: u64,
    ) -> Result<Option<InflationReward>>;

    /// Unix timestamp of the block at `slot`.
    async fn block_time(&self, slot: u64) -> Result<i64>;

    async fn account_exists(&self, address: &Pubkey) -> Result<bool>;
}

/// Live implementation over the nonblocking Solana RPC client.
pub struct RpcChainClient {
    rpc: RpcClient,
}

impl RpcChainClient {
    pub fn new(rpc_url: String) -> Self {
        let rpc = RpcClient::new_with_commitment(rpc_url, CommitmentConfig::finalized());
        Self { rpc }
    }

    /// Direct access for queries outside the pipeline's contract.
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }
}

impl ChainClient for RpcChainClient {
    async fn current_epoch(&self) -> Result<u64> {
        let info = self.rpc.get_epoch_info().await?;
        Ok(info.epoch)
    }

    async fn inflation_reward(
        &self,
        identity: &Pubkey,
        epoch: u64,
    ) -> Result<Option<InflationReward>> {
        let rewards = self
            .rpc
            .get_inflation_reward(&[*identity], Some(epoch))
            .await?;

        Ok(rewards.into_iter().next().flatten().map(|r| InflationReward {
            amount: r.amount,
            effective_slot: Some(r.effective_slot),
        }))
    }

    async fn block_time(&self, slot: u64) -> Result<i64> {
        Ok(self.rpc.get_block_time(slot).await?)
    }

    async fn account_exists(&self, address: &Pubkey) -> Result<bool> {
        let response = self
            .rpc
            .get_account_with_commitment(address, CommitmentConfig::finalized())
            .await?;
        Ok(response.value.is_some())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use anyhow::anyhow;
    use std::collections::HashMap;

    /// In-memory chain for unit tests: canned rewards and block times,
    /// plus a set of epochs whose queries error out.
    #[derive(Debug, Default)]
    pub struct FakeChain {
        pub epoch: u64,
        pub rewards: HashMap<u64, InflationReward>,
        pub failing_epochs: Vec<u64>,
        pub block_times: HashMap<u64, i64>,
        pub known_accounts: Vec<Pubkey>,
    }

    impl FakeChain {
        pub fn with_epoch(epoch: u64) -> Self {
            Self {
                epoch,
                ..Self::default()
            }
        }

        pub fn add_reward(&mut self, epoch: u64, amount: u64, effective_slot: Option<u64>) {
            self.rewards.insert(
                epoch,
                InflationReward {
                    amount,
                    effective_slot,
                },
            );
        }
    }

    impl ChainClient for FakeChain {
        async fn current_epoch(&self) -> Result<u64> {
            Ok(self.epoch)
        }

        async fn inflation_reward(
            &self,
            _identity: &Pubkey,
            epoch: u64,
        ) -> Result<Option<InflationReward>> {
            if self.failing_epochs.contains(&epoch) {
                return Err(anyhow!("rpc error: epoch {} unavailable", epoch));
            }
            Ok(self.rewards.get(&epoch).copied())
        }

        async fn block_time(&self, slot: u64) -> Result<i64> {
            self.block_times
                .get(&slot)
                .copied()
                .ok_or_else(|| anyhow!("no block time for slot {}", slot))
        }

        async fn account_exists(&self, address: &Pubkey) -> Result<bool> {
            Ok(self.known_accounts.contains(address))
        }
    }
}
