mod cli;
mod log;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::{collect, epoch};
use xnt_rewards_client::RpcChainClient;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    log::print_title("⊙ XNT REWARDS");

    let cli = Cli::parse();
    let rpc_url = cli.cluster.rpc_url();
    let chain = RpcChainClient::new(rpc_url.clone());

    log::print_message(&format!("Connected to: {}", rpc_url));

    match cli.command {
        Commands::Collect { .. } => {
            collect::handle_collect_command(cli, chain).await?;
        }
        Commands::Epoch {} => {
            epoch::handle_epoch_command(cli, chain).await?;
        }
    }

    Ok(())
}
