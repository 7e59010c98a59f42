use anyhow::Result;

use crate::cli::Cli;
use crate::log;
use xnt_rewards_client::RpcChainClient;

pub async fn handle_epoch_command(_cli: Cli, chain: RpcChainClient) -> Result<()> {
    let info = chain.rpc().get_epoch_info().await?;

    log::print_section_header("Epoch Info");
    log::print_message(&format!("Current Epoch: {}", info.epoch));
    log::print_message(&format!(
        "Slot Progress: {}/{}",
        info.slot_index, info.slots_in_epoch
    ));
    log::print_message(&format!("Absolute Slot: {}", info.absolute_slot));
    log::print_message(&format!("Block Height: {}", info.block_height));
    log::print_divider();

    Ok(())
}
