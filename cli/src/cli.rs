use clap::{Parser, Subcommand};
use std::str::FromStr;

#[derive(Parser)]
#[command(
    name = "xnt-rewards",
    about = "Epoch-by-epoch inflation reward ledger for X1 validators.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'u',
        long = "cluster",
        default_value = "t",
        global = true,
        help = "Cluster to use: t (testnet), m (mainnet), l (localnet),\n or a custom RPC URL"
    )]
    pub cluster: Cluster,

    #[arg(short = 'v', long = "verbose", help = "Print every reward record", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk the validator's reward history and print the ledger
    Collect {
        #[arg(help = "Validator identity public key")]
        identity: String,

        #[arg(
            short = 'l',
            long = "limit",
            help = "Maximum number of epochs to attempt (most recent first)"
        )]
        limit: Option<u64>,

        #[arg(
            short = 'p',
            long = "price",
            default_value_t = 1.0,
            help = "Fallback USD price per XNT (no historical price API exists)"
        )]
        price: f64,

        #[arg(long = "csv", help = "Write the ledger as CSV to this path")]
        csv: Option<String>,

        #[arg(long = "json", help = "Write the full report as JSON to this path")]
        json: Option<String>,
    },

    /// Show the cluster's current epoch info
    Epoch {},
}

#[derive(Debug, Clone)]
pub enum Cluster {
    Localnet,
    Mainnet,
    Testnet,
    Custom(String),
}

impl Cluster {
    pub fn rpc_url(&self) -> String {
        match self {
            Cluster::Localnet => "http://127.0.0.1:8899".to_string(),
            Cluster::Mainnet => "https://rpc.mainnet.x1.xyz".to_string(),
            Cluster::Testnet => "https://rpc.testnet.x1.xyz".to_string(),
            Cluster::Custom(url) => url.clone(),
        }
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" => Ok(Cluster::Localnet),
            "m" => Ok(Cluster::Mainnet),
            "t" => Ok(Cluster::Testnet),
            s if s.starts_with("http://") || s.starts_with("https://") => {
                Ok(Cluster::Custom(s.to_string()))
            }
            _ => Err(format!(
                "Invalid cluster value: '{}'. Use t, m, l, or a valid RPC URL (http:// or https://)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cluster_shorthands() {
        assert!(matches!("t".parse::<Cluster>(), Ok(Cluster::Testnet)));
        assert!(matches!("m".parse::<Cluster>(), Ok(Cluster::Mainnet)));
        assert!(matches!("l".parse::<Cluster>(), Ok(Cluster::Localnet)));
        assert!(matches!(
            "https://rpc.example.org".parse::<Cluster>(),
            Ok(Cluster::Custom(_))
        ));
        // X1 runs no devnet; only the three shorthands parse.
        assert!("d".parse::<Cluster>().is_err());
        assert!("mainnet".parse::<Cluster>().is_err());
    }

    #[test]
    fn test_default_cluster_is_testnet() {
        let cli = Cli::try_parse_from(["xnt-rewards", "epoch"]).unwrap();
        assert!(matches!(cli.cluster, Cluster::Testnet));
    }
}
