use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Failures that abort a run before any epoch is walked. Everything
/// that happens per epoch is contained inside the walker and reported
/// through the tally instead.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("validator identity {0} not found on this cluster")]
    IdentityNotFound(Pubkey),
    #[error("failed to look up validator identity {0}: {1}")]
    IdentityLookup(Pubkey, String),
    #[error("failed to determine current epoch: {0}")]
    CurrentEpoch(String),
}
