use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::rngs::OsRng;
use tracing_subscriber::EnvFilter;

use node_setup::config::{SetupConfig, WalletRole};
use node_setup::guidance;
use node_setup::identity::{self, AssumeYes, GenerateOutcome, OverwritePrompt, StdioPrompt};
use node_setup::offset::{self, EnsureOutcome};

// ========= CLI =========

#[derive(Parser, Debug)]
#[command(name = "node-setup", version, about = "Validator node setup helpers")]
struct Cli {
    /// Directory holding wallet files and the node config [env: NODE_SETUP_DIR]
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Node config file name or path [env: NODE_SETUP_CONFIG]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create wallet files from a base58 private key
    ImportKey {
        /// Private key (base58)
        private_key: String,
    },

    /// Generate a new random Ed25519 wallet (user-wallet.json)
    GenerateWallet {
        /// Overwrite an existing wallet without asking
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Generate a node offset if the config still has `offset = 0`
    GenerateOffset,

    /// Show the node offset in effect and where it comes from
    ShowOffset {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the public key derived from a keypair file
    InspectWallet {
        /// Keypair file (defaults to user-wallet.json)
        path: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    // init tracing from env NODE_SETUP_LOG or RUST_LOG; stdout is reserved for operator text
    let filter = std::env::var("NODE_SETUP_LOG")
        .unwrap_or_else(|_| std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()));
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SetupConfig::from_env().with_overrides(cli.dir, cli.config);
    tracing::debug!(?config, "resolved setup config");

    match run(cli.cmd, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "command failed");
            // errors go to stdout alongside the rest of the operator text
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cmd: Commands, config: &SetupConfig) -> anyhow::Result<()> {
    match cmd {
        Commands::ImportKey { private_key } => {
            let imported = identity::import_private_key(&private_key, config)
                .context("error creating wallet")?;
            print!(
                "{}",
                guidance::import_summary(imported.primary_path(), &imported.written)
            );
        }

        Commands::GenerateWallet { yes } => {
            let path = config.wallet_path(WalletRole::User);
            let mut prompt: Box<dyn OverwritePrompt> = if yes {
                Box::new(AssumeYes)
            } else {
                Box::new(StdioPrompt::new(io::stdin().lock(), io::stdout()))
            };

            match identity::generate_wallet(&path, &mut OsRng, prompt.as_mut())
                .context("error generating wallet")?
            {
                GenerateOutcome::Written(wallet) => {
                    print!("{}", guidance::wallet_created(&wallet.path, &wallet.public_key));
                }
                GenerateOutcome::Cancelled(_) => println!("{}", guidance::wallet_cancelled()),
            }
        }

        Commands::GenerateOffset => {
            let path = config.node_config_path();
            let outcome =
                offset::ensure_generated(&path, config.offset_override(), &mut rand::thread_rng())
                    .context("error generating node offset")?;
            let text = match outcome {
                EnsureOutcome::OverrideSet(raw) => guidance::override_in_use(&raw),
                EnsureOutcome::AlreadyConfigured(v) => guidance::offset_already_configured(v),
                EnsureOutcome::Generated(v) => {
                    guidance::offset_generated(v, &config.node_config.display().to_string())
                }
            };
            print!("{text}");
        }

        Commands::ShowOffset { json } => {
            let resolved = offset::resolve(&config.node_config_path(), config.offset_override())
                .context("error reading node offset")?;
            if json {
                println!("{}", serde_json::to_string(&resolved)?);
            } else {
                print!(
                    "{}",
                    guidance::offset_status(
                        resolved.value,
                        resolved.source,
                        &config.node_config.display().to_string()
                    )
                );
            }
        }

        Commands::InspectWallet { path } => {
            let path = path.unwrap_or_else(|| config.wallet_path(WalletRole::User));
            let report = identity::inspect_wallet(&path).context("error reading wallet")?;
            println!("Public key: {}", report.derived_public_key);
            if !report.consistent {
                println!(
                    "⚠️  Stored public half ({}) does not match the key derived from the seed.",
                    report.stored_public_key.as_deref().unwrap_or("missing")
                );
            }
        }
    }
    Ok(())
}
