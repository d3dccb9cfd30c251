//! Cairn CLI — builds an in-memory chain, prints it and verifies it.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use cairn_ledger::{ChainStatus, Ledger, LedgerConfig};
use cairn_types::{Amount, Digest};
use cairn_utils::LogFormat;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cairn", about = "Append-only hash-linked ledger")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "CAIRN_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "CAIRN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "CAIRN_LOG_FORMAT")]
    log_format: Option<String>,

    /// Reward paid to each miner.
    #[arg(long, env = "CAIRN_REWARD")]
    reward: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the effective configuration as TOML.
    Config,
    /// Print the genesis block.
    Genesis,
    /// Submit one transaction per block, mine, print and verify the chain.
    Simulate {
        /// Number of blocks to mine after genesis.
        #[arg(long, default_value_t = 2)]
        blocks: u64,

        /// Miner identity credited for every block.
        #[arg(long, default_value = "miner1")]
        miner: String,
    },
    /// Simulate, then corrupt one block and show how verification reacts.
    Tamper {
        #[arg(long, default_value_t = 2)]
        blocks: u64,

        /// Which field to corrupt.
        #[arg(long, value_enum, default_value_t = Field::Proof)]
        field: Field,

        /// Zero-based position of the block to corrupt.
        #[arg(long, default_value_t = 1)]
        at: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Field {
    Proof,
    PreviousHash,
}

fn load_config(cli: &Cli) -> anyhow::Result<LedgerConfig> {
    let mut config = match &cli.config {
        Some(path) => LedgerConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => LedgerConfig::default(),
    };
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.log_format = format.clone();
    }
    if let Some(reward) = cli.reward {
        config.mining_reward = Amount::new(reward);
    }
    Ok(config)
}

fn simulate(config: LedgerConfig, blocks: u64, miner: &str) -> anyhow::Result<Ledger> {
    let mut ledger = Ledger::with_config(config)?;
    for i in 1..=blocks {
        ledger.new_transaction(
            format!("sender{i}"),
            format!("receiver{i}"),
            Amount::new(i * 10),
        );
        ledger.mine(miner)?;
    }
    let summary = ledger.summary();
    tracing::info!(
        blocks = summary.blocks,
        transactions = summary.transactions,
        "simulation finished"
    );
    Ok(ledger)
}

fn report(status: &ChainStatus) -> ExitCode {
    match status {
        ChainStatus::Valid { length } => {
            println!("chain valid ({length} blocks)");
            ExitCode::SUCCESS
        }
        ChainStatus::Empty => {
            println!("chain empty");
            ExitCode::FAILURE
        }
        ChainStatus::Invalid(violation) => {
            println!("chain invalid: {violation}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let format: LogFormat = config.log_format.parse()?;
    cairn_utils::init_logging(format, &config.log_level);
    tracing::debug!(?config, "configuration loaded");

    let code = match cli.command {
        Command::Config => {
            print!("{}", config.to_toml_string()?);
            ExitCode::SUCCESS
        }
        Command::Genesis => {
            let ledger = Ledger::with_config(config)?;
            println!("{}", serde_json::to_string_pretty(ledger.chain())?);
            ExitCode::SUCCESS
        }
        Command::Simulate { blocks, miner } => {
            let ledger = simulate(config, blocks, &miner)?;
            println!("{}", serde_json::to_string_pretty(ledger.chain())?);
            report(&ledger.verify())
        }
        Command::Tamper { blocks, field, at } => {
            let mut ledger = simulate(config, blocks, "miner1")?;
            let len = ledger.len();
            let block = ledger
                .chain_mut()
                .get_mut(at)
                .with_context(|| format!("block {at} out of range (chain has {len})"))?;
            match field {
                Field::Proof => block.proof.0 = block.proof.0.wrapping_add(1),
                Field::PreviousHash => block.previous_hash = Digest::new([0xee; 32]),
            }
            tracing::info!(at, "block corrupted");
            report(&ledger.verify())
        }
    };
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from(["cairn", "--reward", "5", "--log-format", "json", "genesis"])
            .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.mining_reward, Amount::new(5));
        assert_eq!(config.log_format, "json");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn tamper_defaults_parse() {
        let cli = Cli::try_parse_from(["cairn", "tamper", "--field", "previous-hash"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Tamper {
                blocks: 2,
                field: Field::PreviousHash,
                at: 1
            }
        ));
    }

    #[test]
    fn simulate_builds_a_valid_chain() {
        let ledger = simulate(LedgerConfig::default(), 3, "miner1").unwrap();
        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.verify(), ChainStatus::Valid { length: 4 });
        assert_eq!(ledger.chain()[3].transactions[0].amount(), Amount::new(30));
        let summary = ledger.summary();
        assert_eq!(summary.blocks, 4);
        assert_eq!(summary.transactions, 7);
        assert_eq!(summary.pending, 0);
    }

    #[test]
    fn config_command_reports_unwritable_reward() {
        let max = u64::MAX.to_string();
        let cli = Cli::try_parse_from(["cairn", "--reward", max.as_str(), "config"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.mining_reward, Amount::new(u64::MAX));
        assert!(config.to_toml_string().is_err());

        let cli = Cli::try_parse_from(["cairn", "--reward", "5", "config"]).unwrap();
        let rendered = load_config(&cli).unwrap().to_toml_string().unwrap();
        assert!(rendered.contains("mining_reward = 5"));
    }
}
